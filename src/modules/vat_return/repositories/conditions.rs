//! Filter predicates shared by the VAT return queries.
//!
//! A [`VatReturnFilter`] becomes a list of `AND column op ?` clauses whose
//! values are always bound, never spliced into the SQL text.

use chrono::NaiveDate;
use sqlx::{MySql, QueryBuilder};

use crate::modules::vat_return::models::VatReturnFilter;

/// Table the joined queries qualify their filter columns with
pub const PURCHASE_INVOICE_TABLE: &str = "`tabPurchase Invoice`";

/// How filter columns are referenced in the target query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionShape {
    /// Single-table query, bare column names
    Plain,
    /// Purchase invoices joined to GL entries; both have `company` and
    /// `posting_date`, so columns are qualified with the purchase invoice table
    Joined,
}

impl ConditionShape {
    fn column(&self, name: &str) -> String {
        match self {
            ConditionShape::Plain => name.to_string(),
            ConditionShape::Joined => format!("{}.{}", PURCHASE_INVOICE_TABLE, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    Text(String),
    Date(NaiveDate),
}

/// One bound predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: &'static str,
    pub value: ConditionValue,
}

/// Ordered predicates derived from a filter: company, from_date, to_date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    items: Vec<Condition>,
}

impl Conditions {
    pub fn from_filter(filter: &VatReturnFilter, shape: ConditionShape) -> Self {
        let mut items = Vec::with_capacity(3);

        if let Some(company) = filter.company() {
            items.push(Condition {
                column: shape.column("company"),
                operator: "=",
                value: ConditionValue::Text(company.to_string()),
            });
        }
        if let Some(from_date) = filter.from_date {
            items.push(Condition {
                column: shape.column("posting_date"),
                operator: ">=",
                value: ConditionValue::Date(from_date),
            });
        }
        if let Some(to_date) = filter.to_date {
            items.push(Condition {
                column: shape.column("posting_date"),
                operator: "<=",
                value: ConditionValue::Date(to_date),
            });
        }

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.items.iter()
    }

    /// Append every clause to `builder`, binding its value
    pub fn push_onto(&self, builder: &mut QueryBuilder<'_, MySql>) {
        for condition in &self.items {
            builder
                .push(" AND ")
                .push(&condition.column)
                .push(" ")
                .push(condition.operator)
                .push(" ");
            match &condition.value {
                ConditionValue::Text(text) => builder.push_bind(text.clone()),
                ConditionValue::Date(date) => builder.push_bind(*date),
            };
        }
    }

    /// SQL text the clauses render to, with `?` placeholders
    pub fn fragment(&self) -> String {
        let mut builder = QueryBuilder::<MySql>::new("");
        self.push_onto(&mut builder);
        builder.sql().to_string()
    }
}
