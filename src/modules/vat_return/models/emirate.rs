use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven emirates reported on separately in box 1 of the VAT 201 return.
///
/// Declaration order is the order of the legal form (lines `1a`..`1g`) and is
/// also the display order of the chart. `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Emirate {
    #[serde(rename = "Abu Dhabi")]
    AbuDhabi,
    #[serde(rename = "Dubai")]
    Dubai,
    #[serde(rename = "Sharjah")]
    Sharjah,
    #[serde(rename = "Ajman")]
    Ajman,
    #[serde(rename = "Umm Al Quwain")]
    UmmAlQuwain,
    #[serde(rename = "Ras Al Khaimah")]
    RasAlKhaimah,
    #[serde(rename = "Fujairah")]
    Fujairah,
}

impl Emirate {
    /// All emirates in form order
    pub const ALL: [Emirate; 7] = [
        Emirate::AbuDhabi,
        Emirate::Dubai,
        Emirate::Sharjah,
        Emirate::Ajman,
        Emirate::UmmAlQuwain,
        Emirate::RasAlKhaimah,
        Emirate::Fujairah,
    ];

    /// Name as stored in the `emirate` column of sales invoices
    pub fn name(&self) -> &'static str {
        match self {
            Emirate::AbuDhabi => "Abu Dhabi",
            Emirate::Dubai => "Dubai",
            Emirate::Sharjah => "Sharjah",
            Emirate::Ajman => "Ajman",
            Emirate::UmmAlQuwain => "Umm Al Quwain",
            Emirate::RasAlKhaimah => "Ras Al Khaimah",
            Emirate::Fujairah => "Fujairah",
        }
    }

    /// Box number on the return: `1a` for Abu Dhabi through `1g` for Fujairah
    pub fn line_number(&self) -> String {
        let letter = (b'a' + *self as u8) as char;
        format!("1{}", letter)
    }

    /// Legend printed next to the emirate's line
    pub fn legend(&self) -> String {
        format!("Standard rated supplies in {}", self.name())
    }
}

impl fmt::Display for Emirate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emirate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emirate::ALL
            .into_iter()
            .find(|emirate| emirate.name() == s)
            .ok_or_else(|| format!("Unknown emirate: '{}'", s))
    }
}
