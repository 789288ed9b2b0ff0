mod vat_return_controller;

pub use vat_return_controller::{get_vat_return, VatReturnQuery};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    vat_return_controller::configure(cfg);
}
