//! `ItemStore` implementation over the `items` table.

use async_trait::async_trait;
use sqlx::Row;

use promptlab_core::error::GatewayError;
use promptlab_core::gateway::ItemStore;
use promptlab_core::types::{Item, ItemDraft};

use crate::DbPool;

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = r#"id, prompt, result_url, "timestamp""#;

/// Postgres document store for generation history.
#[derive(Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: &sqlx::postgres::PgRow) -> Item {
    Item {
        id: row.get("id"),
        prompt: row.get("prompt"),
        result_url: row.get("result_url"),
        timestamp: row.get("timestamp"),
    }
}

fn db_err(err: sqlx::Error) -> GatewayError {
    tracing::error!(error = %err, "Datastore call failed");
    GatewayError::Transport(err.to_string())
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn add(&self, draft: &ItemDraft) -> Result<String, GatewayError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO items (id, prompt, result_url, "timestamp") VALUES ($1, $2, $3, $4)"#,
        )
        .bind(&id)
        .bind(&draft.prompt)
        .bind(&draft.result_url)
        .bind(draft.timestamp)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, GatewayError> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(row.as_ref().map(row_to_item))
    }

    async fn list_desc(&self) -> Result<Vec<Item>, GatewayError> {
        let query = format!(r#"SELECT {ITEM_COLUMNS} FROM items ORDER BY "timestamp" DESC"#);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<bool, GatewayError> {
        let result = sqlx::query(
            r#"UPDATE items SET prompt = $2, result_url = $3, "timestamp" = $4 WHERE id = $1"#,
        )
        .bind(id)
        .bind(&draft.prompt)
        .bind(&draft.result_url)
        .bind(draft.timestamp)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        // Idempotent: a zero row count is still success.
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
