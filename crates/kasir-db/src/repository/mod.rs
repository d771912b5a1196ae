//! # Repository Module
//!
//! Database repository implementations for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.db.transactions().checkout(&request)                    │
//! │       ▼                                                                 │
//! │  ┌──────────────────┐  ┌──────────────────────┐  ┌──────────────────┐  │
//! │  │ProductRepository │  │TransactionRepository │  │ ReportRepository │  │
//! │  │ list / get       │  │ checkout (unit of    │  │ summarize        │  │
//! │  │ create / update  │  │   work)              │  │ summarize_today  │  │
//! │  │ delete / count   │  │ get_by_id            │  │                  │  │
//! │  └────────┬─────────┘  └──────────┬───────────┘  └────────┬─────────┘  │
//! │           └───────────────────────┼───────────────────────┘            │
//! │                                   ▼                                     │
//! │                            SQLite Database                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Catalog CRUD
//! - [`TransactionRepository`](transaction::TransactionRepository) - Checkout and ledger reads
//! - [`ReportRepository`](report::ReportRepository) - Sales summaries

pub mod product;
pub mod report;
pub mod transaction;
