//! PostgreSQL implementation of DistributionRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use pantry_core::entities::{
    DistributionEvent, DistributionEventPatch, DistributionItem, NewDistributionEvent,
    NewDistributionItem,
};
use pantry_core::traits::{DistributionRepository, EventQuery, RepoResult};

use crate::models::{DistributionEventModel, DistributionItemModel};

use super::error::{event_not_found, map_db_error};

const COLUMNS: &str = "id, name, description, event_date, location, max_families, \
                       registered_families, status, notes, created_at, created_by";

/// PostgreSQL implementation of DistributionRepository
#[derive(Clone)]
pub struct PgDistributionRepository {
    pool: PgPool,
}

impl PgDistributionRepository {
    /// Create a new PgDistributionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistributionRepository for PgDistributionRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: &EventQuery) -> RepoResult<Vec<DistributionEvent>> {
        let mut qb =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM distribution_events WHERE 1=1"));

        if let Some(status) = query.status {
            qb.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(from) = query.date_from {
            qb.push(" AND event_date >= ").push_bind(from);
        }
        if let Some(to) = query.date_to {
            qb.push(" AND event_date <= ").push_bind(to);
        }

        qb.push(" ORDER BY event_date DESC, id DESC");

        let results = qb
            .build_query_as::<DistributionEventModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(DistributionEvent::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DistributionEvent>> {
        let result = sqlx::query_as::<_, DistributionEventModel>(&format!(
            "SELECT {COLUMNS} FROM distribution_events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(DistributionEvent::try_from).transpose()
    }

    #[instrument(skip(self, event))]
    async fn create(
        &self,
        event: &NewDistributionEvent,
        created_by: &str,
    ) -> RepoResult<DistributionEvent> {
        let result = sqlx::query_as::<_, DistributionEventModel>(&format!(
            r#"
            INSERT INTO distribution_events
                (name, description, event_date, location, max_families, registered_families,
                 status, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(&event.location)
        .bind(event.max_families)
        .bind(event.registered_families)
        .bind(event.status.as_str())
        .bind(&event.notes)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        DistributionEvent::try_from(result)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: i32,
        patch: &DistributionEventPatch,
    ) -> RepoResult<DistributionEvent> {
        // No updated_at column; the self-assignment keeps SET valid when the
        // patch is empty
        let mut qb = QueryBuilder::new("UPDATE distribution_events SET id = id");

        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ").push_bind(description.clone());
        }
        if let Some(event_date) = patch.event_date {
            qb.push(", event_date = ").push_bind(event_date);
        }
        if let Some(location) = &patch.location {
            qb.push(", location = ").push_bind(location.clone());
        }
        if let Some(max_families) = patch.max_families {
            qb.push(", max_families = ").push_bind(max_families);
        }
        if let Some(registered) = patch.registered_families {
            qb.push(", registered_families = ").push_bind(registered);
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status.as_str());
        }
        if let Some(notes) = &patch.notes {
            qb.push(", notes = ").push_bind(notes.clone());
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        let result = qb
            .build_query_as::<DistributionEventModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result
            .ok_or_else(|| event_not_found(id))
            .and_then(DistributionEvent::try_from)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        // Line items are removed by ON DELETE CASCADE; a missing id is a no-op
        sqlx::query("DELETE FROM distribution_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn items(&self, event_id: i32) -> RepoResult<Vec<DistributionItem>> {
        let results = sqlx::query_as::<_, DistributionItemModel>(
            r#"
            SELECT id, distribution_event_id, inventory_item_id, quantity_planned, quantity_distributed
            FROM distribution_items
            WHERE distribution_event_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DistributionItem::from).collect())
    }

    #[instrument(skip(self, item))]
    async fn add_item(
        &self,
        event_id: i32,
        item: &NewDistributionItem,
    ) -> RepoResult<DistributionItem> {
        let result = sqlx::query_as::<_, DistributionItemModel>(
            r#"
            INSERT INTO distribution_items
                (distribution_event_id, inventory_item_id, quantity_planned, quantity_distributed)
            VALUES ($1, $2, $3, $4)
            RETURNING id, distribution_event_id, inventory_item_id, quantity_planned, quantity_distributed
            "#,
        )
        .bind(event_id)
        .bind(item.inventory_item_id)
        .bind(item.quantity_planned)
        .bind(item.quantity_distributed)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DistributionItem::from(result))
    }
}
