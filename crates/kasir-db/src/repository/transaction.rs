//! # Transaction Repository
//!
//! The checkout unit of work and ledger read-back.
//!
//! ## Checkout Unit of Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout(request)                                 │
//! │                                                                         │
//! │  validate items (quantity > 0)            ── before any store access   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN ─────────────────────────────────────────────────────────────┐  │
//! │  │ for each item, in request order:                                 │  │
//! │  │   UPDATE products SET stock = stock - q                          │  │
//! │  │    WHERE id = ? AND stock >= q                                   │  │
//! │  │    RETURNING id, name, price        ← lookup IS the locking write│  │
//! │  │     │                                                            │  │
//! │  │     ├── no row, id missing  → ProductNotFound    ─┐              │  │
//! │  │     ├── no row, stock short → InsufficientStock  ─┤ drop = ROLLBACK│
//! │  │     └── row → draft.add_line(price × q)          ─┘ on overflow  │  │
//! │  │                                                                  │  │
//! │  │ INSERT transactions (total, now)   RETURNING id                  │  │
//! │  │ INSERT transaction_details × n     RETURNING id                  │  │
//! │  └──────────────────────────────────────────────────────────── COMMIT  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A concurrent checkout touching the same product waits on SQLite's write
//! lock (busy timeout) and then sees the already-decremented stock, so two
//! buyers can never both take the last unit.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::DbResult;
use kasir_core::{
    CheckoutDraft, CheckoutItem, CheckoutRequest, CoreError, Money, Transaction,
    TransactionDetail,
};

/// Repository for the transaction ledger.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Converts a checkout request into a persisted transaction.
    ///
    /// All stock decrements, the transaction row and its detail rows become
    /// visible together, or none of them do.
    ///
    /// ## Errors
    /// * `Domain(Validation)` - a quantity is not positive (store untouched)
    /// * `Domain(ProductNotFound)` - an item references a missing product
    /// * `Domain(InsufficientStock)` - an item asks for more than is on hand
    /// * `Domain(AmountOverflow)` - a subtotal or the total leaves i64
    /// * anything else - store failure
    pub async fn checkout(&self, request: &CheckoutRequest) -> DbResult<Transaction> {
        request.validate().map_err(CoreError::from)?;

        debug!(items = request.items.len(), "Starting checkout");

        // Rolls back on drop unless committed below.
        let mut tx = self.pool.begin().await?;
        let mut draft = CheckoutDraft::with_capacity(request.items.len());

        for item in &request.items {
            let locked: Option<(i64, String, Money)> = sqlx::query_as(
                r#"
                UPDATE products
                SET stock = stock - ?1
                WHERE id = ?2 AND stock >= ?1
                RETURNING id, name, price
                "#,
            )
            .bind(item.quantity)
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((product_id, name, price)) = locked else {
                let reason = Self::rejection(&mut tx, item).await?;
                warn!(
                    product_id = item.product_id,
                    requested = item.quantity,
                    reason = %reason,
                    "Checkout rejected"
                );
                return Err(reason.into());
            };

            let subtotal = draft.add_line(product_id, name, price, item.quantity)?;
            debug!(product_id, quantity = item.quantity, subtotal = %subtotal, "Line priced");
        }

        let created_at = Utc::now();
        let (total_amount, lines) = draft.into_parts();

        let transaction_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (total_amount, created_at)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(total_amount)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            let detail_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO transaction_details
                    (transaction_id, product_id, product_name, quantity, subtotal)
                VALUES (?1, ?2, ?3, ?4, ?5)
                RETURNING id
                "#,
            )
            .bind(transaction_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.quantity)
            .bind(line.subtotal)
            .fetch_one(&mut *tx)
            .await?;

            details.push(line.persisted(detail_id, transaction_id));
        }

        tx.commit().await?;

        info!(
            transaction_id,
            total_amount = %total_amount,
            lines = details.len(),
            "Checkout committed"
        );

        Ok(Transaction {
            id: transaction_id,
            total_amount,
            created_at,
            details,
        })
    }

    /// Works out why the guarded decrement matched no row.
    async fn rejection(conn: &mut SqliteConnection, item: &CheckoutItem) -> DbResult<CoreError> {
        let available: Option<i64> = sqlx::query_scalar("SELECT stock FROM products WHERE id = ?1")
            .bind(item.product_id)
            .fetch_optional(conn)
            .await?;

        Ok(match available {
            None => CoreError::ProductNotFound(item.product_id),
            Some(available) => CoreError::InsufficientStock {
                product_id: item.product_id,
                requested: item.quantity,
                available,
            },
        })
    }

    /// Reads a transaction back with its lines in insertion order.
    ///
    /// ## Returns
    /// * `Ok(Some(Transaction))` - Found
    /// * `Ok(None)` - No such id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Transaction>> {
        let header = sqlx::query_as::<_, Transaction>(
            "SELECT id, total_amount, created_at FROM transactions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut transaction) = header else {
            return Ok(None);
        };

        transaction.details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT id, transaction_id, product_id, product_name, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(transaction))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
