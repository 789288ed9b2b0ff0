pub mod aggregates;
pub mod emirate;
pub mod filter;
pub mod vat_return_report;

pub use aggregates::{EmirateAggregates, EmirateTotals, FixedCategoryTotals};
pub use emirate::Emirate;
pub use filter::VatReturnFilter;
pub use vat_return_report::{
    Chart, ChartData, ChartDataset, ChartType, FieldType, ReportCell, ReportColumn, ReportRow,
    VatReturnReport,
};
