pub mod row_assembler;
pub mod vat_return_service;

pub use row_assembler::{assemble_rows, project_chart, report_columns};
pub use vat_return_service::VatReturnService;
