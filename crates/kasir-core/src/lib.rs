//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! Domain types, integer money and input rules for a small-shop
//! point-of-sale backend. Nothing in here performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api, axum)                    │   │
//! │  │   /api/product ──► /api/checkout ──► /api/sales/summary        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ checkout  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Draft    │  │   rules   │  │   │
//! │  │   │  Txn      │  │ checked   │  │  lines    │  │  dates    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-db (Database Layer)                    │   │
//! │  │        SQLite catalog, checkout unit of work, reports           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, DailySalesSummary, etc.)
//! - [`money`] - Money type with checked integer arithmetic
//! - [`checkout`] - Line pricing for a checkout in progress
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::checkout::CheckoutDraft;
//! use kasir_core::money::Money;
//!
//! let mut draft = CheckoutDraft::with_capacity(2);
//! draft.add_line(1, "Indomie Goreng", Money::new(3500), 2).unwrap();
//! draft.add_line(2, "Teh Botol", Money::new(6000), 1).unwrap();
//!
//! let (total, lines) = draft.into_parts();
//! assert_eq!(total, Money::new(13000));
//! assert_eq!(lines.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutDraft, PendingDetail};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a category name, in characters.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Date format accepted by the sales report range.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";
