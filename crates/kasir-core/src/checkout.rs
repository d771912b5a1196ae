//! # Checkout Draft
//!
//! Pure line math for a checkout in progress.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Unit of Work (kasir-db)                     │
//! │                                                                         │
//! │  for each item, in request order:                                       │
//! │     guarded stock decrement ──► (id, name, price) of the locked row     │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                    CheckoutDraft::add_line  ← THIS MODULE               │
//! │                    subtotal = price × qty, total += subtotal            │
//! │                                                                         │
//! │  insert transaction(total) ──► insert every PendingDetail ──► commit    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft never touches the store. It only prices lines and keeps the
//! total equal to the sum of subtotals.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TransactionDetail;

/// A priced line waiting for its transaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDetail {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub subtotal: Money,
}

impl PendingDetail {
    /// Attaches store-assigned ids once the detail row is written.
    pub fn persisted(self, id: i64, transaction_id: i64) -> TransactionDetail {
        TransactionDetail {
            id,
            transaction_id,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            subtotal: self.subtotal,
        }
    }
}

/// Accumulates priced lines in request order.
#[derive(Debug, Clone)]
pub struct CheckoutDraft {
    lines: Vec<PendingDetail>,
    total: Money,
}

impl CheckoutDraft {
    pub fn with_capacity(capacity: usize) -> Self {
        CheckoutDraft {
            lines: Vec::with_capacity(capacity),
            total: Money::zero(),
        }
    }

    /// Prices one line and adds it to the running total.
    ///
    /// Returns the line subtotal. Fails with `AmountOverflow` if either the
    /// subtotal or the new total leaves the i64 range; the draft is left
    /// unchanged in that case.
    pub fn add_line(
        &mut self,
        product_id: i64,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<Money> {
        let subtotal = unit_price
            .checked_mul_quantity(quantity)
            .ok_or(CoreError::AmountOverflow { product_id })?;
        let total = self
            .total
            .checked_add(subtotal)
            .ok_or(CoreError::AmountOverflow { product_id })?;

        self.lines.push(PendingDetail {
            product_id,
            product_name: product_name.into(),
            quantity,
            subtotal,
        });
        self.total = total;

        Ok(subtotal)
    }

    /// Splits the draft into its total and lines for persisting.
    pub fn into_parts(self) -> (Money, Vec<PendingDetail>) {
        (self.total, self.lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
