pub mod health;
pub mod vat_return;
