//! HTTP request handlers.

pub mod checkout;
pub mod health;
pub mod product;
pub mod report;
