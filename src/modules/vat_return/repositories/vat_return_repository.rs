use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};
use tracing::{debug, warn};

use crate::core::Result;
use crate::modules::vat_return::models::{Emirate, EmirateTotals, VatReturnFilter};
use crate::modules::vat_return::repositories::conditions::{ConditionShape, Conditions};

const SALES_INVOICE: &str = "`tabSales Invoice`";
const PURCHASE_INVOICE: &str = "`tabPurchase Invoice`";

/// Single-value totals feeding the fixed-category boxes of the return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VatAggregate {
    TouristTaxReturnTotal,
    TouristTaxReturnTax,
    ReverseChargeTotal,
    ReverseChargeTax,
    ReverseChargeRecoverableTotal,
    ReverseChargeRecoverableTax,
    StandardRatedExpensesTotal,
    StandardRatedExpensesTax,
    ZeroRatedTotal,
    ExemptTotal,
}

impl VatAggregate {
    pub const ALL: [VatAggregate; 10] = [
        VatAggregate::TouristTaxReturnTotal,
        VatAggregate::TouristTaxReturnTax,
        VatAggregate::ReverseChargeTotal,
        VatAggregate::ReverseChargeTax,
        VatAggregate::ReverseChargeRecoverableTotal,
        VatAggregate::ReverseChargeRecoverableTax,
        VatAggregate::StandardRatedExpensesTotal,
        VatAggregate::StandardRatedExpensesTax,
        VatAggregate::ZeroRatedTotal,
        VatAggregate::ExemptTotal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VatAggregate::TouristTaxReturnTotal => "tourist_tax_return_total",
            VatAggregate::TouristTaxReturnTax => "tourist_tax_return_tax",
            VatAggregate::ReverseChargeTotal => "reverse_charge_total",
            VatAggregate::ReverseChargeTax => "reverse_charge_tax",
            VatAggregate::ReverseChargeRecoverableTotal => "reverse_charge_recoverable_total",
            VatAggregate::ReverseChargeRecoverableTax => "reverse_charge_recoverable_tax",
            VatAggregate::StandardRatedExpensesTotal => "standard_rated_expenses_total",
            VatAggregate::StandardRatedExpensesTax => "standard_rated_expenses_tax",
            VatAggregate::ZeroRatedTotal => "zero_rated_total",
            VatAggregate::ExemptTotal => "exempt_total",
        }
    }

    /// Build the parameterized `SELECT SUM(..)` for this total
    pub fn query(&self, filter: &VatReturnFilter) -> QueryBuilder<'static, MySql> {
        match self {
            VatAggregate::TouristTaxReturnTotal => single_table_sum(
                "SUM(total)",
                SALES_INVOICE,
                "tourist_tax_return > 0",
                filter,
            ),
            VatAggregate::TouristTaxReturnTax => single_table_sum(
                "SUM(tourist_tax_return)",
                SALES_INVOICE,
                "tourist_tax_return > 0",
                filter,
            ),
            VatAggregate::ReverseChargeTotal => single_table_sum(
                "SUM(total)",
                PURCHASE_INVOICE,
                "reverse_charge = 'Y'",
                filter,
            ),
            VatAggregate::ReverseChargeTax => gl_entry_sum("SUM(`tabGL Entry`.debit)", "", filter),
            VatAggregate::ReverseChargeRecoverableTotal => single_table_sum(
                "SUM(total)",
                PURCHASE_INVOICE,
                "reverse_charge = 'Y' AND claimable_reverse_charge > 0",
                filter,
            ),
            VatAggregate::ReverseChargeRecoverableTax => gl_entry_sum(
                "SUM(`tabGL Entry`.debit * `tabPurchase Invoice`.claimable_reverse_charge / 100)",
                " AND `tabPurchase Invoice`.claimable_reverse_charge > 0",
                filter,
            ),
            VatAggregate::StandardRatedExpensesTotal => single_table_sum(
                "SUM(total)",
                SALES_INVOICE,
                "standard_rated_expenses > 0",
                filter,
            ),
            VatAggregate::StandardRatedExpensesTax => single_table_sum(
                "SUM(standard_rated_expenses)",
                SALES_INVOICE,
                "standard_rated_expenses > 0",
                filter,
            ),
            VatAggregate::ZeroRatedTotal => sales_item_sum("i.is_zero_rated = 1", filter),
            VatAggregate::ExemptTotal => sales_item_sum("i.is_exempt = 1", filter),
        }
    }
}

/// Submitted documents of one table matching `predicate`
fn single_table_sum(
    select: &str,
    table: &str,
    predicate: &str,
    filter: &VatReturnFilter,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE {} AND docstatus = 1",
        select, table, predicate
    ));
    Conditions::from_filter(filter, ConditionShape::Plain).push_onto(&mut builder);
    builder
}

/// Reverse-charge purchase invoices joined to their GL entries on the company's
/// configured VAT accounts. Without a company (or without configured accounts)
/// the account list is empty and the sum is zero.
fn gl_entry_sum(
    select: &str,
    extra_predicate: &str,
    filter: &VatReturnFilter,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM {pi} INNER JOIN `tabGL Entry` ON `tabGL Entry`.voucher_no = {pi}.name \
         WHERE {pi}.reverse_charge = 'Y' \
         AND {pi}.docstatus = 1{} \
         AND `tabGL Entry`.docstatus = 1 \
         AND `tabGL Entry`.account IN (SELECT account FROM `tabUAE VAT Account` WHERE parent = ",
        select,
        extra_predicate,
        pi = PURCHASE_INVOICE,
    ));
    builder.push_bind(filter.company().map(str::to_owned));
    builder.push(")");
    Conditions::from_filter(filter, ConditionShape::Joined).push_onto(&mut builder);
    builder
}

/// Base amount of sales invoice items flagged by `item_predicate`
fn sales_item_sum(item_predicate: &str, filter: &VatReturnFilter) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT SUM(i.base_amount) FROM `tabSales Invoice Item` i \
         INNER JOIN {} s ON i.parent = s.name \
         WHERE s.docstatus = 1 AND {}",
        SALES_INVOICE, item_predicate
    ));
    Conditions::from_filter(filter, ConditionShape::Plain).push_onto(&mut builder);
    builder
}

/// Sales totals of submitted invoices grouped by emirate
pub fn emirate_totals_query(filter: &VatReturnFilter) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT emirate, SUM(total) AS amount, SUM(total_taxes_and_charges) AS vat_amount \
         FROM {} WHERE docstatus = 1",
        SALES_INVOICE
    ));
    Conditions::from_filter(filter, ConditionShape::Plain).push_onto(&mut builder);
    builder.push(" GROUP BY emirate");
    builder
}

#[derive(Debug, FromRow)]
struct EmirateTotalRow {
    emirate: Option<String>,
    amount: Option<Decimal>,
    vat_amount: Option<Decimal>,
}

/// Read-only access to the ledger totals the VAT return is built from
#[async_trait]
pub trait VatReturnRepository: Send + Sync {
    /// Sales and VAT per emirate; emirates without sales are omitted
    async fn get_emirate_totals(&self, filter: &VatReturnFilter) -> Result<Vec<EmirateTotals>>;

    /// One fixed-category total, zero when nothing matches
    async fn get_aggregate(&self, aggregate: VatAggregate, filter: &VatReturnFilter)
        -> Result<Decimal>;
}

pub struct MySqlVatReturnRepository {
    pool: MySqlPool,
}

impl MySqlVatReturnRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VatReturnRepository for MySqlVatReturnRepository {
    async fn get_emirate_totals(&self, filter: &VatReturnFilter) -> Result<Vec<EmirateTotals>> {
        let mut builder = emirate_totals_query(filter);
        let rows: Vec<EmirateTotalRow> = builder
            .build_query_as::<EmirateTotalRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "Fetched emirate totals");

        let mut totals = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(name) = row.emirate else {
                warn!("Skipping sales total without emirate");
                continue;
            };
            match name.parse::<Emirate>() {
                Ok(emirate) => totals.push(EmirateTotals::new(
                    emirate,
                    row.amount.unwrap_or_default(),
                    row.vat_amount.unwrap_or_default(),
                )),
                Err(e) => warn!(emirate = %name, "Skipping sales total: {}", e),
            }
        }

        Ok(totals)
    }

    async fn get_aggregate(
        &self,
        aggregate: VatAggregate,
        filter: &VatReturnFilter,
    ) -> Result<Decimal> {
        let mut builder = aggregate.query(filter);
        let value: Option<Decimal> = builder
            .build_query_scalar::<Option<Decimal>>()
            .fetch_one(&self.pool)
            .await?;

        debug!(aggregate = aggregate.name(), value = ?value, "Fetched VAT aggregate");

        Ok(value.unwrap_or(Decimal::ZERO))
    }
}
