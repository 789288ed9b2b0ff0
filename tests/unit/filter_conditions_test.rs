// Property-based tests for the VAT return filter predicates
//
// A filter key only ever constrains a query when it is present, clauses come
// out in company / from_date / to_date order, and values never end up in SQL.

use chrono::NaiveDate;
use proptest::prelude::*;

use vat201::vat_return::models::VatReturnFilter;
use vat201::vat_return::repositories::{
    emirate_totals_query, ConditionShape, ConditionValue, Conditions, VatAggregate,
};

fn date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn filter() -> impl Strategy<Value = VatReturnFilter> {
    (
        prop::option::of("[A-Za-z][A-Za-z0-9 '&-]{0,20}"),
        prop::option::of(date()),
        prop::option::of(date()),
    )
        .prop_map(|(company, from_date, to_date)| VatReturnFilter {
            company,
            from_date,
            to_date,
        })
}

fn expected_plain_fragment(filter: &VatReturnFilter) -> String {
    let mut expected = String::new();
    if filter.company().is_some() {
        expected.push_str(" AND company = ?");
    }
    if filter.from_date.is_some() {
        expected.push_str(" AND posting_date >= ?");
    }
    if filter.to_date.is_some() {
        expected.push_str(" AND posting_date <= ?");
    }
    expected
}

proptest! {
    #[test]
    fn test_plain_clauses_only_for_present_keys(filter in filter()) {
        let fragment = Conditions::from_filter(&filter, ConditionShape::Plain).fragment();

        prop_assert_eq!(fragment.contains("company = ?"), filter.company().is_some());
        prop_assert_eq!(fragment.contains("posting_date >= ?"), filter.from_date.is_some());
        prop_assert_eq!(fragment.contains("posting_date <= ?"), filter.to_date.is_some());
        prop_assert_eq!(fragment, expected_plain_fragment(&filter));
    }

    #[test]
    fn test_joined_clauses_are_all_qualified(filter in filter()) {
        let conditions = Conditions::from_filter(&filter, ConditionShape::Joined);

        for condition in conditions.iter() {
            prop_assert!(condition.column.starts_with("`tabPurchase Invoice`."));
        }
        let plain = Conditions::from_filter(&filter, ConditionShape::Plain);
        prop_assert_eq!(conditions.len(), plain.len());
    }

    #[test]
    fn test_bound_values_follow_filter(filter in filter()) {
        let conditions = Conditions::from_filter(&filter, ConditionShape::Plain);
        let values: Vec<ConditionValue> = conditions.iter().map(|c| c.value.clone()).collect();

        let mut expected = Vec::new();
        if let Some(company) = filter.company() {
            expected.push(ConditionValue::Text(company.to_string()));
        }
        if let Some(from_date) = filter.from_date {
            expected.push(ConditionValue::Date(from_date));
        }
        if let Some(to_date) = filter.to_date {
            expected.push(ConditionValue::Date(to_date));
        }
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn test_company_never_reaches_sql_text(company in "[A-Za-z]{3,12}Company") {
        let filter = VatReturnFilter::new().with_company(company.clone());

        prop_assert!(!emirate_totals_query(&filter).sql().contains(&company));
        for aggregate in VatAggregate::ALL {
            prop_assert!(!aggregate.query(&filter).sql().contains(&company));
        }
    }
}

#[test]
fn test_empty_company_adds_no_clause() {
    let filter = VatReturnFilter::new().with_company("");
    assert!(Conditions::from_filter(&filter, ConditionShape::Plain).is_empty());
}
