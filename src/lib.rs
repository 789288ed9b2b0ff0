//! UAE VAT 201 return report service
//!
//! Aggregates posted sales and purchase documents of an ERP ledger (MySQL/MariaDB)
//! into the fixed box layout of the UAE VAT return, plus a per-emirate chart.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::vat_return;
