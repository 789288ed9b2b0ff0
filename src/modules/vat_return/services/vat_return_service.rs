use std::sync::Arc;

use tokio::try_join;
use tracing::info;

use crate::core::Result;
use crate::modules::vat_return::models::{
    EmirateAggregates, FixedCategoryTotals, VatReturnFilter, VatReturnReport,
};
use crate::modules::vat_return::repositories::{VatAggregate, VatReturnRepository};
use crate::modules::vat_return::services::row_assembler::{
    assemble_rows, project_chart, report_columns,
};

/// Builds the UAE VAT 201 return from ledger totals
pub struct VatReturnService {
    repository: Arc<dyn VatReturnRepository>,
}

impl VatReturnService {
    pub fn new(repository: Arc<dyn VatReturnRepository>) -> Self {
        Self { repository }
    }

    /// Generate the return for `filter`
    ///
    /// All ledger reads run concurrently and must all succeed; the first failure
    /// aborts the report. The reads are independent, so the totals are only as
    /// consistent as the ledger was at the moment each one ran.
    pub async fn execute(&self, filter: &VatReturnFilter) -> Result<VatReturnReport> {
        info!(
            company = ?filter.company(),
            from_date = ?filter.from_date,
            to_date = ?filter.to_date,
            "Generating UAE VAT 201 report"
        );

        let (emirate_totals, totals) = try_join!(
            self.repository.get_emirate_totals(filter),
            self.fetch_fixed_totals(filter),
        )?;

        let aggregates = EmirateAggregates::from_totals(emirate_totals);
        let report = VatReturnReport::new(
            report_columns(),
            assemble_rows(&aggregates, &totals),
            project_chart(&aggregates),
        );

        info!(
            emirates_with_sales = aggregates.len(),
            rows = report.data.len(),
            "UAE VAT 201 report generated"
        );

        Ok(report)
    }

    async fn fetch_fixed_totals(&self, filter: &VatReturnFilter) -> Result<FixedCategoryTotals> {
        let fetch = move |aggregate| self.repository.get_aggregate(aggregate, filter);

        let (
            tourist_tax_return_total,
            tourist_tax_return_tax,
            reverse_charge_total,
            reverse_charge_tax,
            zero_rated_total,
            exempt_total,
            standard_rated_expenses_total,
            standard_rated_expenses_tax,
            reverse_charge_recoverable_total,
            reverse_charge_recoverable_tax,
        ) = try_join!(
            fetch(VatAggregate::TouristTaxReturnTotal),
            fetch(VatAggregate::TouristTaxReturnTax),
            fetch(VatAggregate::ReverseChargeTotal),
            fetch(VatAggregate::ReverseChargeTax),
            fetch(VatAggregate::ZeroRatedTotal),
            fetch(VatAggregate::ExemptTotal),
            fetch(VatAggregate::StandardRatedExpensesTotal),
            fetch(VatAggregate::StandardRatedExpensesTax),
            fetch(VatAggregate::ReverseChargeRecoverableTotal),
            fetch(VatAggregate::ReverseChargeRecoverableTax),
        )?;

        Ok(FixedCategoryTotals {
            tourist_tax_return_total,
            tourist_tax_return_tax,
            reverse_charge_total,
            reverse_charge_tax,
            zero_rated_total,
            exempt_total,
            standard_rated_expenses_total,
            standard_rated_expenses_tax,
            reverse_charge_recoverable_total,
            reverse_charge_recoverable_tax,
        })
    }
}
