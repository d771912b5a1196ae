//! # Report Repository
//!
//! Sales summaries over the ledger. Read-only; nothing here is stored.
//!
//! ## Summary Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  summarize(start..=end)                                                 │
//! │                                                                         │
//! │  transactions  WHERE DATE(created_at) BETWEEN start AND end            │
//! │     ├── COUNT(*)              → total_transaction                       │
//! │     └── SUM(total_amount)     → total_revenue                           │
//! │                                                                         │
//! │  transaction_details of those transactions                             │
//! │     └── GROUP BY product_id, SUM(quantity) DESC, product_id ASC        │
//! │         LIMIT 1               → mostselling_product {name, quantity}    │
//! │                                                                         │
//! │  Nothing sold → {0, 0, {"", 0}}                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kasir_core::{DailySalesSummary, DateRange, Money, MostSellingProduct};

/// Repository for sales reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Summarizes sales for today's UTC calendar date.
    pub async fn summarize_today(&self) -> DbResult<DailySalesSummary> {
        self.summarize(DateRange::single_day(Utc::now().date_naive()))
            .await
    }

    /// Summarizes sales whose date falls inside `range`, both ends inclusive.
    ///
    /// The best seller is named by its current catalog name, or by the
    /// sale-time name if the product has since been deleted.
    pub async fn summarize(&self, range: DateRange) -> DbResult<DailySalesSummary> {
        debug!(start = %range.start(), end = %range.end(), "Summarizing sales");

        let (total_revenue, total_transaction): (Money, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0), COUNT(*)
            FROM transactions
            WHERE DATE(created_at) BETWEEN ?1 AND ?2
            "#,
        )
        .bind(range.start())
        .bind(range.end())
        .fetch_one(&self.pool)
        .await?;

        let best: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT
                COALESCE(MAX(p.name), MAX(td.product_name)) AS name,
                SUM(td.quantity) AS total_qty
            FROM transaction_details td
            JOIN transactions t ON t.id = td.transaction_id
            LEFT JOIN products p ON p.id = td.product_id
            WHERE DATE(t.created_at) BETWEEN ?1 AND ?2
            GROUP BY td.product_id
            ORDER BY total_qty DESC, td.product_id ASC
            LIMIT 1
            "#,
        )
        .bind(range.start())
        .bind(range.end())
        .fetch_optional(&self.pool)
        .await?;

        let most_selling_product = best
            .map(|(name, quantity)| MostSellingProduct { name, quantity })
            .unwrap_or_default();

        debug!(
            total_transaction,
            total_revenue = %total_revenue,
            best_seller = %most_selling_product.name,
            "Summary computed"
        );

        Ok(DailySalesSummary {
            total_transaction,
            total_revenue,
            most_selling_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone};
    use kasir_core::{CheckoutItem, CheckoutRequest, Product, ProductInput};

    use crate::{Database, DbConfig};

    use super::*;

    async fn product(db: &Database, name: &str, price: i64, stock: i64) -> Product {
        db.products()
            .create(&ProductInput {
                name: name.to_string(),
                price: Money::new(price),
                stock,
                category_id: 0,
                category_name: String::new(),
            })
            .await
            .unwrap()
    }

    async fn sell(db: &Database, items: &[(i64, i64)]) -> i64 {
        let request = CheckoutRequest {
            items: items
                .iter()
                .map(|&(product_id, quantity)| CheckoutItem {
                    product_id,
                    quantity,
                })
                .collect(),
        };
        db.transactions().checkout(&request).await.unwrap().id
    }

    /// Moves a transaction onto another calendar day.
    async fn backdate(db: &Database, transaction_id: i64, at: DateTime<Utc>) {
        sqlx::query("UPDATE transactions SET created_at = ?1 WHERE id = ?2")
            .bind(at)
            .bind(transaction_id)
            .execute(db.pool())
            .await
            .unwrap();
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_ledger_is_zero_summary() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary, DailySalesSummary::default());
    }

    #[tokio::test]
    async fn test_today_summary() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let indomie = product(&db, "Indomie", 3500, 10).await;
        let teh = product(&db, "Teh Botol", 6000, 20).await;

        sell(&db, &[(indomie.id, 2), (teh.id, 1)]).await;
        sell(&db, &[(teh.id, 4)]).await;

        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary.total_transaction, 2);
        assert_eq!(summary.total_revenue, Money::new(13000 + 24000));
        assert_eq!(summary.most_selling_product.name, "Teh Botol");
        assert_eq!(summary.most_selling_product.quantity, 5);

        // Reads are idempotent.
        assert_eq!(db.reports().summarize_today().await.unwrap(), summary);
    }

    #[tokio::test]
    async fn test_range_is_inclusive() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = product(&db, "Indomie", 3500, 100).await;

        let before = sell(&db, &[(a.id, 1)]).await;
        let first = sell(&db, &[(a.id, 2)]).await;
        let last = sell(&db, &[(a.id, 3)]).await;
        let after = sell(&db, &[(a.id, 4)]).await;
        backdate(&db, before, noon(2026, 1, 31)).await;
        backdate(&db, first, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()).await;
        backdate(&db, last, Utc.with_ymd_and_hms(2026, 2, 28, 23, 59, 59).unwrap()).await;
        backdate(&db, after, noon(2026, 3, 1)).await;

        let range = DateRange::new(day(2026, 2, 1), day(2026, 2, 28)).unwrap();
        let summary = db.reports().summarize(range).await.unwrap();

        assert_eq!(summary.total_transaction, 2);
        assert_eq!(summary.total_revenue, Money::new(3500 * 5));
        assert_eq!(summary.most_selling_product.quantity, 5);
    }

    #[tokio::test]
    async fn test_range_without_sales_is_zero() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = product(&db, "Indomie", 3500, 10).await;
        sell(&db, &[(a.id, 1)]).await;

        let range = DateRange::single_day(day(2000, 1, 1));
        let summary = db.reports().summarize(range).await.unwrap();
        assert_eq!(summary, DailySalesSummary::default());
    }

    #[tokio::test]
    async fn test_best_seller_tie_goes_to_lowest_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let first = product(&db, "Kopi", 2000, 10).await;
        let second = product(&db, "Gula", 15000, 10).await;

        sell(&db, &[(second.id, 3)]).await;
        sell(&db, &[(first.id, 3)]).await;

        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary.most_selling_product.name, "Kopi");
        assert_eq!(summary.most_selling_product.quantity, 3);
    }

    #[tokio::test]
    async fn test_best_seller_name_falls_back_to_snapshot() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let renamed = product(&db, "Kopi", 2000, 10).await;
        let deleted = product(&db, "Gula", 15000, 10).await;

        sell(&db, &[(renamed.id, 1), (deleted.id, 5)]).await;

        db.products().delete(deleted.id).await.unwrap();
        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary.most_selling_product.name, "Gula");
        assert_eq!(summary.most_selling_product.quantity, 5);

        // A live product is reported under its current name.
        db.products()
            .update(
                renamed.id,
                &ProductInput {
                    name: "Kopi Susu".to_string(),
                    price: Money::new(2500),
                    stock: 9,
                    category_id: 0,
                    category_name: String::new(),
                },
            )
            .await
            .unwrap();
        sell(&db, &[(renamed.id, 9)]).await;

        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary.most_selling_product.name, "Kopi Susu");
        assert_eq!(summary.most_selling_product.quantity, 10);
    }

    #[tokio::test]
    async fn test_empty_checkout_counts_but_sells_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sell(&db, &[]).await;

        let summary = db.reports().summarize_today().await.unwrap();
        assert_eq!(summary.total_transaction, 1);
        assert_eq!(summary.total_revenue, Money::zero());
        assert_eq!(summary.most_selling_product, MostSellingProduct::default());
    }
}
