pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{VatReturnFilter, VatReturnReport};
pub use repositories::{MySqlVatReturnRepository, VatReturnRepository};
pub use services::VatReturnService;
