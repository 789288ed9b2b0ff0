use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Value of an amount column in a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCell {
    /// Section headers carry no amounts
    Blank,
    Amount(Decimal),
    /// Box has no VAT component on the form (zero-rated, exempt); not the same as zero
    NotApplicable,
}

impl ReportCell {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            ReportCell::Amount(amount) => Some(*amount),
            _ => None,
        }
    }
}

impl Serialize for ReportCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReportCell::Blank => serializer.serialize_str(""),
            ReportCell::Amount(amount) => Serialize::serialize(amount, serializer),
            ReportCell::NotApplicable => serializer.serialize_str("-"),
        }
    }
}

/// One line of the VAT 201 table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Box number on the form, empty for section headers
    pub no: String,
    pub legend: String,
    pub amount: ReportCell,
    pub vat_amount: ReportCell,
}

impl ReportRow {
    pub fn header(legend: impl Into<String>) -> Self {
        Self {
            no: String::new(),
            legend: legend.into(),
            amount: ReportCell::Blank,
            vat_amount: ReportCell::Blank,
        }
    }

    pub fn line(
        no: impl Into<String>,
        legend: impl Into<String>,
        amount: ReportCell,
        vat_amount: ReportCell,
    ) -> Self {
        Self {
            no: no.into(),
            legend: legend.into(),
            amount,
            vat_amount,
        }
    }

    pub fn is_header(&self) -> bool {
        self.no.is_empty()
    }
}

/// Cell type hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Data,
    Currency,
}

/// Column definition of the report table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub fieldname: &'static str,
    pub label: &'static str,
    pub fieldtype: FieldType,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
}

/// A named series of chart values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDataset {
    pub name: String,
    pub values: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Bar chart of sales and VAT per emirate, shown next to the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub data: ChartData,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub fieldtype: FieldType,
}

/// Complete VAT 201 report handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatReturnReport {
    pub columns: Vec<ReportColumn>,
    pub data: Vec<ReportRow>,
    /// Reserved for grouping metadata, always empty
    pub message: Option<String>,
    pub chart: Chart,
}

impl VatReturnReport {
    pub fn new(columns: Vec<ReportColumn>, data: Vec<ReportRow>, chart: Chart) -> Self {
        Self {
            columns,
            data,
            message: None,
            chart,
        }
    }

    /// Find a line by its box number
    pub fn row(&self, no: &str) -> Option<&ReportRow> {
        self.data.iter().find(|row| !row.is_header() && row.no == no)
    }
}
