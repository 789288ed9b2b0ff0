use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Emirate;

/// Sales totals for one emirate, as returned by the grouped ledger query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmirateTotals {
    pub emirate: Emirate,
    /// Net invoice total
    pub amount: Decimal,
    /// Taxes and charges
    pub vat_amount: Decimal,
}

impl EmirateTotals {
    pub fn new(emirate: Emirate, amount: Decimal, vat_amount: Decimal) -> Self {
        Self {
            emirate,
            amount,
            vat_amount,
        }
    }
}

/// Per-emirate totals keyed by emirate.
///
/// Emirates without any posted sales are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmirateAggregates {
    totals: BTreeMap<Emirate, EmirateTotals>,
}

impl EmirateAggregates {
    /// Collect fetched totals; repeated emirates are summed
    pub fn from_totals(totals: impl IntoIterator<Item = EmirateTotals>) -> Self {
        let mut map: BTreeMap<Emirate, EmirateTotals> = BTreeMap::new();
        for entry in totals {
            map.entry(entry.emirate)
                .and_modify(|existing| {
                    existing.amount += entry.amount;
                    existing.vat_amount += entry.vat_amount;
                })
                .or_insert(entry);
        }
        Self { totals: map }
    }

    pub fn get(&self, emirate: Emirate) -> Option<&EmirateTotals> {
        self.totals.get(&emirate)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Scalar totals for the fixed-category lines of the return (boxes 2-5, 9, 10).
///
/// Values are the raw ledger sums; sign changes happen during row assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCategoryTotals {
    pub tourist_tax_return_total: Decimal,
    pub tourist_tax_return_tax: Decimal,
    pub reverse_charge_total: Decimal,
    pub reverse_charge_tax: Decimal,
    pub zero_rated_total: Decimal,
    pub exempt_total: Decimal,
    pub standard_rated_expenses_total: Decimal,
    pub standard_rated_expenses_tax: Decimal,
    pub reverse_charge_recoverable_total: Decimal,
    pub reverse_charge_recoverable_tax: Decimal,
}
