//! Postgres-backed product store.
//!
//! Each product is one row: a UUID primary key plus a JSONB document holding
//! the client-supplied fields. Partial updates use the JSONB `||` operator,
//! which is a top-level merge where the right-hand side wins.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | Database (any code) | `Database` |
//! | PoolClosed / PoolTimedOut | `Unavailable` |
//! | ColumnDecode / Decode | `Serialization` |
//! | Other (IO, TLS, protocol) | `Database` |

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;
use tracing::instrument;
use uuid::Uuid;

use productstore_core::{Product, ProductFields, ProductId, ID_FIELD};

use super::r#trait::{parse_id, ProductStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id       UUID PRIMARY KEY,
        document JSONB NOT NULL DEFAULT '{}'::jsonb
    )
"#;

/// Postgres-backed product store.
///
/// ## Atomicity
///
/// Find-and-delete and find-and-update are single statements
/// (`DELETE … RETURNING`, `UPDATE … RETURNING`), so each is atomic per row.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Create a new store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a store whose pool connects on first use.
    ///
    /// Fails only if `database_url` cannot be parsed.
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .connect_lazy(database_url)
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `products` table if it does not exist.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, fields), err)]
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let product = Product::create(fields);

        let row = sqlx::query(
            r#"
            INSERT INTO products (id, document)
            VALUES ($1, $2)
            RETURNING id, document
            "#,
        )
        .bind(product.id().as_uuid())
        .bind(Json(product.fields()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        product_from_row(&row)
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;

        let row = sqlx::query("SELECT id, document FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;

        let row = sqlx::query("DELETE FROM products WHERE id = $1 RETURNING id, document")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_id_and_delete", e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    #[instrument(skip(self, fields), err)]
    async fn find_by_id_and_update(
        &self,
        id: &str,
        mut fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        fields.remove(ID_FIELD);

        let row = sqlx::query(
            r#"
            UPDATE products
            SET document = document || $2
            WHERE id = $1
            RETURNING id, document
            "#,
        )
        .bind(id.as_uuid())
        .bind(Json(&fields))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id_and_update", e))?;

        row.as_ref().map(product_from_row).transpose()
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, StoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| StoreError::Serialization(format!("failed to read id: {e}")))?;
    let Json(fields): Json<ProductFields> = row
        .try_get("document")
        .map_err(|e| StoreError::Serialization(format!("failed to read document: {e}")))?;

    Ok(Product::new(ProductId::from_uuid(id), fields))
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Database {
            operation,
            message: db_err.message().to_string(),
        },
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("timed out acquiring a connection in {operation}"))
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::Serialization(format!("{operation}: {err}"))
        }
        other => StoreError::Database {
            operation,
            message: other.to_string(),
        },
    }
}
