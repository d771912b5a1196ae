//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   Transaction   │   │ TransactionDetail   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (i64)       │   │  id (i64)       │   │  transaction_id     │   │
//! │  │  name           │   │  total_amount   │◄──│  product_id         │   │
//! │  │  price          │   │  created_at     │   │  product_name (snap)│   │
//! │  │  stock ≥ 0      │   │  details[]      │   │  quantity, subtotal │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │ CheckoutRequest │   │ DailySalesSumm. │   │     DateRange       │   │
//! │  │  items[]        │   │  derived, never │   │  start ≤ end        │   │
//! │  │  (not stored)   │   │  stored         │   │  inclusive          │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are store-assigned integers. All wire names are snake_case.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name, copied into each sale line at checkout.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Money,

    /// Units on hand. Never negative.
    pub stock: i64,

    pub category_id: i64,

    pub category_name: String,
}

/// Body of product create and update calls.
///
/// Update is a full replace of every field here; the id comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductInput {
    pub name: String,
    pub price: Money,
    pub stock: i64,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
}

impl ProductInput {
    /// Validates the input and returns a copy with trimmed strings.
    pub fn validated(&self) -> Result<ProductInput, ValidationError> {
        validation::validate_product_name(&self.name)?;
        validation::validate_price(self.price)?;
        validation::validate_stock(self.stock)?;
        validation::validate_category_name(&self.category_name)?;

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            category_name: self.category_name.trim().to_string(),
        })
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// One requested line of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Inbound checkout. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
}

impl CheckoutRequest {
    /// Rejects non-positive quantities before the store is touched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_checkout_items(&self.items)
    }
}

// =============================================================================
// Transaction (Ledger)
// =============================================================================

/// A completed sale. Created exactly once per successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Transaction {
    pub id: i64,

    /// Always equals the sum of `details[*].subtotal`.
    pub total_amount: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub details: Vec<TransactionDetail>,
}

/// A line item of a transaction.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// quantity × unit price at time of sale.
    pub subtotal: Money,
}

// =============================================================================
// Reporting
// =============================================================================

/// Aggregate over the ledger for a date range. Derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySalesSummary {
    pub total_transaction: i64,
    pub total_revenue: Money,
    #[serde(rename = "mostselling_product")]
    pub most_selling_product: MostSellingProduct,
}

/// Best seller by summed quantity. `{"", 0}` when nothing was sold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MostSellingProduct {
    pub name: String,
    pub quantity: i64,
}

/// Inclusive calendar-date range, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::ReversedDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// A range covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange {
            start: day,
            end: day,
        }
    }

    /// Parses `YYYY-MM-DD` bounds from query parameters.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        let start = validation::parse_report_date("start", start)?;
        let end = validation::parse_report_date("end", end)?;
        DateRange::new(start, end)
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
