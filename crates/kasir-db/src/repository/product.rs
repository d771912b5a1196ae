//! # Product Repository
//!
//! Catalog CRUD for products.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Catalog                                      │
//! │                                                                         │
//! │  list()            ──► every product, ordered by id                    │
//! │  get_by_id(id)     ──► Some(product) | None                            │
//! │  create(input)     ──► new row, store-assigned id                      │
//! │  update(id, input) ──► full replace | ProductNotFound                  │
//! │  delete(id)        ──► hard delete  | ProductNotFound                  │
//! │                                                                         │
//! │  Stock is only ever *decremented* by the checkout unit of work         │
//! │  (see transaction.rs); here it is set directly by the operator.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting a product leaves past transaction lines untouched: each line
//! carries its own name snapshot.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::{CoreError, Product, ProductInput};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.create(&input).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock, category_id, category_name
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock, category_id, category_name
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product
    /// * `Err(DbError::Domain(Validation))` - Empty name, negative price/stock
    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        let input = input.validated().map_err(CoreError::from)?;

        debug!(name = %input.name, price = %input.price, stock = input.stock, "Inserting product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, category_id, category_name)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, price, stock, category_id, category_name
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .bind(&input.category_name)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = product.id, "Product inserted");
        Ok(product)
    }

    /// Replaces every field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product as stored after the update
    /// * `Err(DbError::Domain(ProductNotFound))` - No such id
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        let input = input.validated().map_err(CoreError::from)?;

        debug!(id, name = %input.name, "Updating product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                stock = ?4,
                category_id = ?5,
                category_name = ?6
            WHERE id = ?1
            RETURNING id, name, price, stock, category_id, category_name
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .bind(&input.category_name)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::product_not_found(id))
    }

    /// Deletes a product.
    ///
    /// Transaction lines that reference it keep their product id and name.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::product_not_found(id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
