//! Projection of fetched totals onto the fixed layout of the VAT 201 form.

use rust_decimal::Decimal;

use crate::modules::vat_return::models::{
    Chart, ChartData, ChartDataset, ChartType, Emirate, EmirateAggregates, FieldType,
    FixedCategoryTotals, ReportCell, ReportColumn, ReportRow,
};

pub const OUTPUTS_HEADER: &str = "VAT on Sales and All Other Outputs";
pub const INPUTS_HEADER: &str = "VAT on Expenses and All Other Inputs";
pub const AMOUNT_LABEL: &str = "Amount (AED)";
pub const VAT_AMOUNT_LABEL: &str = "VAT Amount (AED)";

/// Number of rows every assembled report has
pub const REPORT_ROW_COUNT: usize = 15;

/// Column definitions of the report table
pub fn report_columns() -> Vec<ReportColumn> {
    vec![
        ReportColumn {
            fieldname: "no",
            label: "No",
            fieldtype: FieldType::Data,
            width: 50,
        },
        ReportColumn {
            fieldname: "legend",
            label: "Legend",
            fieldtype: FieldType::Data,
            width: 300,
        },
        ReportColumn {
            fieldname: "amount",
            label: AMOUNT_LABEL,
            fieldtype: FieldType::Currency,
            width: 100,
        },
        ReportColumn {
            fieldname: "vat_amount",
            label: VAT_AMOUNT_LABEL,
            fieldtype: FieldType::Currency,
            width: 100,
        },
    ]
}

fn amounts(amount: Decimal, vat_amount: Decimal) -> (ReportCell, ReportCell) {
    (ReportCell::Amount(amount), ReportCell::Amount(vat_amount))
}

/// Lay out the return: outputs header, one line per emirate (zero-filled when
/// the emirate had no sales), boxes 2-5, inputs header, boxes 9 and 10.
pub fn assemble_rows(aggregates: &EmirateAggregates, totals: &FixedCategoryTotals) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(REPORT_ROW_COUNT);

    rows.push(ReportRow::header(OUTPUTS_HEADER));

    for emirate in Emirate::ALL {
        let (amount, vat_amount) = match aggregates.get(emirate) {
            Some(found) => amounts(found.amount, found.vat_amount),
            None => amounts(Decimal::ZERO, Decimal::ZERO),
        };
        rows.push(ReportRow::line(
            emirate.line_number(),
            emirate.legend(),
            amount,
            vat_amount,
        ));
    }

    // Refunds to tourists reduce the VAT payable
    let (amount, vat_amount) = amounts(
        Decimal::ZERO - totals.tourist_tax_return_total,
        Decimal::ZERO - totals.tourist_tax_return_tax,
    );
    rows.push(ReportRow::line(
        "2",
        "Tax Refunds provided to Tourists under the Tax Refunds for Tourists Scheme",
        amount,
        vat_amount,
    ));

    let (amount, vat_amount) = amounts(totals.reverse_charge_total, totals.reverse_charge_tax);
    rows.push(ReportRow::line(
        "3",
        "Supplies subject to the reverse charge provision",
        amount,
        vat_amount,
    ));

    rows.push(ReportRow::line(
        "4",
        "Zero Rated",
        ReportCell::Amount(totals.zero_rated_total),
        ReportCell::NotApplicable,
    ));
    rows.push(ReportRow::line(
        "5",
        "Exempt Supplies",
        ReportCell::Amount(totals.exempt_total),
        ReportCell::NotApplicable,
    ));

    rows.push(ReportRow::header(INPUTS_HEADER));

    let (amount, vat_amount) = amounts(
        totals.standard_rated_expenses_total,
        totals.standard_rated_expenses_tax,
    );
    rows.push(ReportRow::line("9", "Standard Rated Expenses", amount, vat_amount));

    let (amount, vat_amount) = amounts(
        totals.reverse_charge_recoverable_total,
        totals.reverse_charge_recoverable_tax,
    );
    rows.push(ReportRow::line(
        "10",
        "Supplies subject to the reverse charge provision",
        amount,
        vat_amount,
    ));

    rows
}

/// Bar chart of the emirates that actually have sales, in form order.
///
/// Unlike the table, missing emirates are skipped rather than drawn as zero bars.
pub fn project_chart(aggregates: &EmirateAggregates) -> Chart {
    let mut labels = Vec::with_capacity(aggregates.len());
    let mut amount = Vec::with_capacity(aggregates.len());
    let mut vat_amount = Vec::with_capacity(aggregates.len());

    for emirate in Emirate::ALL {
        if let Some(found) = aggregates.get(emirate) {
            labels.push(emirate.name().to_string());
            amount.push(found.amount);
            vat_amount.push(found.vat_amount);
        }
    }

    Chart {
        data: ChartData {
            labels,
            datasets: vec![
                ChartDataset {
                    name: AMOUNT_LABEL.to_string(),
                    values: amount,
                },
                ChartDataset {
                    name: VAT_AMOUNT_LABEL.to_string(),
                    values: vat_amount,
                },
            ],
        },
        chart_type: ChartType::Bar,
        fieldtype: FieldType::Currency,
    }
}
