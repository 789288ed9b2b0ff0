use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User-selected constraints for one VAT return computation.
///
/// Every field is optional; a missing field places no constraint on that
/// dimension. An empty company string counts as missing. Date ordering is not
/// checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatReturnFilter {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
}

impl VatReturnFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    /// Company to restrict to, if any
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref().filter(|company| !company.is_empty())
    }
}
