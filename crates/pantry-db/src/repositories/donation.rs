//! PostgreSQL implementation of DonationRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use pantry_core::entities::{Donation, DonationItem, DonationPatch, NewDonation, NewDonationItem};
use pantry_core::traits::{DonationQuery, DonationRepository, RepoResult};

use crate::models::{DonationItemModel, DonationModel};

use super::error::{donation_not_found, map_db_error};

const COLUMNS: &str = "id, donor_name, donor_email, donor_phone, donation_type, description, \
                       value, donation_date, notes, created_at, created_by";

/// PostgreSQL implementation of DonationRepository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    /// Create a new PgDonationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationRepository for PgDonationRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: &DonationQuery) -> RepoResult<Vec<Donation>> {
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM donations WHERE 1=1"));

        if let Some(donation_type) = query.donation_type {
            qb.push(" AND donation_type = ").push_bind(donation_type.as_str());
        }
        if let Some(from) = query.date_from {
            qb.push(" AND donation_date >= ").push_bind(from);
        }
        if let Some(to) = query.date_to {
            qb.push(" AND donation_date <= ").push_bind(to);
        }

        qb.push(" ORDER BY donation_date DESC, id DESC");

        let results = qb
            .build_query_as::<DonationModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Donation::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Donation>> {
        let result = sqlx::query_as::<_, DonationModel>(&format!(
            "SELECT {COLUMNS} FROM donations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Donation::try_from).transpose()
    }

    #[instrument(skip(self, donation))]
    async fn create(&self, donation: &NewDonation, created_by: &str) -> RepoResult<Donation> {
        let result = sqlx::query_as::<_, DonationModel>(&format!(
            r#"
            INSERT INTO donations
                (donor_name, donor_email, donor_phone, donation_type, description, value,
                 donation_date, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&donation.donor_name)
        .bind(&donation.donor_email)
        .bind(&donation.donor_phone)
        .bind(donation.donation_type.as_str())
        .bind(&donation.description)
        .bind(donation.value)
        .bind(donation.donation_date)
        .bind(&donation.notes)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Donation::try_from(result)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i32, patch: &DonationPatch) -> RepoResult<Donation> {
        let mut qb = QueryBuilder::new("UPDATE donations SET id = id");

        if let Some(donor_name) = &patch.donor_name {
            qb.push(", donor_name = ").push_bind(donor_name);
        }
        if let Some(donor_email) = &patch.donor_email {
            qb.push(", donor_email = ").push_bind(donor_email.clone());
        }
        if let Some(donor_phone) = &patch.donor_phone {
            qb.push(", donor_phone = ").push_bind(donor_phone.clone());
        }
        if let Some(donation_type) = patch.donation_type {
            qb.push(", donation_type = ").push_bind(donation_type.as_str());
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ").push_bind(description.clone());
        }
        if let Some(value) = patch.value {
            qb.push(", value = ").push_bind(value);
        }
        if let Some(donation_date) = patch.donation_date {
            qb.push(", donation_date = ").push_bind(donation_date);
        }
        if let Some(notes) = &patch.notes {
            qb.push(", notes = ").push_bind(notes.clone());
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        let result = qb
            .build_query_as::<DonationModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result
            .ok_or_else(|| donation_not_found(id))
            .and_then(Donation::try_from)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        // Line items are removed by ON DELETE CASCADE; a missing id is a no-op
        sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn items(&self, donation_id: i32) -> RepoResult<Vec<DonationItem>> {
        let results = sqlx::query_as::<_, DonationItemModel>(
            r#"
            SELECT id, donation_id, inventory_item_id, quantity, expiry_date
            FROM donation_items
            WHERE donation_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(donation_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DonationItem::from).collect())
    }

    #[instrument(skip(self, item))]
    async fn add_item(&self, donation_id: i32, item: &NewDonationItem) -> RepoResult<DonationItem> {
        let result = sqlx::query_as::<_, DonationItemModel>(
            r#"
            INSERT INTO donation_items (donation_id, inventory_item_id, quantity, expiry_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, donation_id, inventory_item_id, quantity, expiry_date
            "#,
        )
        .bind(donation_id)
        .bind(item.inventory_item_id)
        .bind(item.quantity)
        .bind(item.expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DonationItem::from(result))
    }
}
