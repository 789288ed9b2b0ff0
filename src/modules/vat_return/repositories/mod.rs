pub mod conditions;
pub mod vat_return_repository;

pub use conditions::{Condition, ConditionShape, ConditionValue, Conditions};
pub use vat_return_repository::{
    emirate_totals_query, MySqlVatReturnRepository, VatAggregate, VatReturnRepository,
};
