//! PostgreSQL implementation of InventoryRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use pantry_core::entities::{InventoryItem, InventoryItemPatch, NewInventoryItem};
use pantry_core::traits::{InventoryQuery, InventoryRepository, InventorySort, RepoResult, SortOrder};

use crate::models::InventoryItemModel;

use super::error::{item_not_found, map_db_error};

const COLUMNS: &str = "id, name, category, quantity, unit, expiry_date, low_stock_threshold, \
                       notes, created_at, updated_at, created_by";

/// PostgreSQL implementation of InventoryRepository
#[derive(Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    /// Create a new PgInventoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: &InventoryQuery) -> RepoResult<Vec<InventoryItem>> {
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM inventory_items WHERE 1=1"));

        if let Some(category) = &query.category {
            qb.push(" AND category = ").push_bind(category);
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            qb.push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR category ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        // Column and direction come from enums, never from user input
        let column = match query.sort_by {
            InventorySort::Name => "name",
            InventorySort::Quantity => "quantity",
            InventorySort::ExpiryDate => "expiry_date",
        };
        let direction = match query.sort_order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        qb.push(format!(" ORDER BY {column} {direction}, id ASC"));

        let results = qb
            .build_query_as::<InventoryItemModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(InventoryItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<InventoryItem>> {
        let result = sqlx::query_as::<_, InventoryItemModel>(&format!(
            "SELECT {COLUMNS} FROM inventory_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(InventoryItem::from))
    }

    #[instrument(skip(self, item))]
    async fn create(&self, item: &NewInventoryItem, created_by: &str) -> RepoResult<InventoryItem> {
        let result = sqlx::query_as::<_, InventoryItemModel>(&format!(
            r#"
            INSERT INTO inventory_items
                (name, category, quantity, unit, expiry_date, low_stock_threshold, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.quantity)
        .bind(&item.unit)
        .bind(item.expiry_date)
        .bind(item.low_stock_threshold)
        .bind(&item.notes)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(InventoryItem::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i32, patch: &InventoryItemPatch) -> RepoResult<InventoryItem> {
        let mut qb = QueryBuilder::new("UPDATE inventory_items SET updated_at = NOW()");

        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(category) = &patch.category {
            qb.push(", category = ").push_bind(category);
        }
        if let Some(quantity) = patch.quantity {
            qb.push(", quantity = ").push_bind(quantity);
        }
        if let Some(unit) = &patch.unit {
            qb.push(", unit = ").push_bind(unit);
        }
        if let Some(expiry_date) = patch.expiry_date {
            qb.push(", expiry_date = ").push_bind(expiry_date);
        }
        if let Some(threshold) = patch.low_stock_threshold {
            qb.push(", low_stock_threshold = ").push_bind(threshold);
        }
        if let Some(notes) = &patch.notes {
            qb.push(", notes = ").push_bind(notes.clone());
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        let result = qb
            .build_query_as::<InventoryItemModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(InventoryItem::from).ok_or_else(|| item_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        // Deleting a missing id is a silent no-op
        sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn low_stock(&self) -> RepoResult<Vec<InventoryItem>> {
        let results = sqlx::query_as::<_, InventoryItemModel>(&format!(
            r#"
            SELECT {COLUMNS} FROM inventory_items
            WHERE quantity <= low_stock_threshold
            ORDER BY quantity ASC, id ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(InventoryItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn expiring(&self, days: u64) -> RepoResult<Vec<InventoryItem>> {
        let results = sqlx::query_as::<_, InventoryItemModel>(&format!(
            r#"
            SELECT {COLUMNS} FROM inventory_items
            WHERE expiry_date IS NOT NULL AND expiry_date <= CURRENT_DATE + $1
            ORDER BY expiry_date ASC, id ASC
            "#
        ))
        .bind(i32::try_from(days).unwrap_or(i32::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(InventoryItem::from).collect())
    }
}
