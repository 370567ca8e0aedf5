//! Donation service
//!
//! Records donations and their stock line items. Mutations on the donation
//! itself are logged; line-item mutations are not.

use tracing::{info, instrument};

use pantry_core::entities::{
    ActivityAction, DonationPatch, DonationType, EntityKind, NewActivityLog, NewDonation,
    NewDonationItem,
};
use pantry_core::traits::DonationQuery;
use pantry_core::DomainError;

use crate::dto::{
    CreateDonationItemRequest, CreateDonationRequest, DonationItemResponse, DonationResponse,
    ListDonationsQuery, UpdateDonationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Donation service
pub struct DonationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DonationService<'a> {
    /// Create a new DonationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List donations, newest first
    #[instrument(skip(self))]
    pub async fn list_donations(
        &self,
        query: &ListDonationsQuery,
    ) -> ServiceResult<Vec<DonationResponse>> {
        let repo_query = DonationQuery {
            donation_type: match query.donation_type.as_deref() {
                None | Some("") | Some("all") => None,
                Some(s) => Some(DonationType::parse(s).ok_or_else(|| {
                    ServiceError::validation(format!("Unknown donation type filter: {s}"))
                })?),
            },
            date_from: query.date_from,
            date_to: query.date_to,
        };

        let donations = self.ctx.donation_repo().list(&repo_query).await?;
        Ok(donations.iter().map(DonationResponse::from).collect())
    }

    /// Get a single donation by ID
    #[instrument(skip(self))]
    pub async fn get_donation(&self, id: i32) -> ServiceResult<DonationResponse> {
        let donation = self
            .ctx
            .donation_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DonationNotFound(id))?;

        Ok(DonationResponse::from(&donation))
    }

    /// Record a donation and log it
    #[instrument(skip(self, request))]
    pub async fn create_donation(
        &self,
        request: CreateDonationRequest,
        actor: &str,
    ) -> ServiceResult<DonationResponse> {
        let donation_type = DonationType::parse(&request.donation_type).ok_or_else(|| {
            DomainError::invalid_field("donation_type", request.donation_type.clone())
        })?;

        let new_donation = NewDonation {
            donor_name: request.donor_name,
            donor_email: request.donor_email,
            donor_phone: request.donor_phone,
            donation_type,
            description: request.description,
            value: request.value,
            donation_date: request.donation_date,
            notes: request.notes,
        };

        let donation = self
            .ctx
            .donation_repo()
            .create(&new_donation, actor)
            .await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Create,
                    EntityKind::Donation,
                    donation.id,
                    format!("Recorded new donation from {}", donation.donor_name),
                ),
                actor,
            )
            .await?;

        info!(donation_id = donation.id, "Donation recorded");
        Ok(DonationResponse::from(&donation))
    }

    /// Apply a partial update and log the change
    #[instrument(skip(self, request))]
    pub async fn update_donation(
        &self,
        id: i32,
        request: UpdateDonationRequest,
        actor: &str,
    ) -> ServiceResult<DonationResponse> {
        let donation_type = request
            .donation_type
            .as_deref()
            .map(|s| {
                DonationType::parse(s)
                    .ok_or_else(|| DomainError::invalid_field("donation_type", s.to_string()))
            })
            .transpose()?;

        let patch = DonationPatch {
            donor_name: request.donor_name,
            donor_email: request.donor_email,
            donor_phone: request.donor_phone,
            donation_type,
            description: request.description,
            value: request.value,
            donation_date: request.donation_date,
            notes: request.notes,
        };

        let donation = self.ctx.donation_repo().update(id, &patch).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Update,
                    EntityKind::Donation,
                    donation.id,
                    format!("Updated donation from {}", donation.donor_name),
                ),
                actor,
            )
            .await?;

        info!(donation_id = donation.id, "Donation updated");
        Ok(DonationResponse::from(&donation))
    }

    /// Delete a donation and its line items, and log the removal.
    /// Deleting a missing donation succeeds silently and logs nothing.
    #[instrument(skip(self))]
    pub async fn delete_donation(&self, id: i32, actor: &str) -> ServiceResult<()> {
        let Some(donation) = self.ctx.donation_repo().find_by_id(id).await? else {
            return Ok(());
        };

        self.ctx.donation_repo().delete(id).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Delete,
                    EntityKind::Donation,
                    id,
                    format!("Deleted donation from {}", donation.donor_name),
                ),
                actor,
            )
            .await?;

        info!(donation_id = id, "Donation deleted");
        Ok(())
    }

    /// Line items attached to a donation
    #[instrument(skip(self))]
    pub async fn list_items(&self, donation_id: i32) -> ServiceResult<Vec<DonationItemResponse>> {
        // Distinguish an empty donation from a missing one
        self.ctx
            .donation_repo()
            .find_by_id(donation_id)
            .await?
            .ok_or(DomainError::DonationNotFound(donation_id))?;

        let items = self.ctx.donation_repo().items(donation_id).await?;
        Ok(items.iter().map(DonationItemResponse::from).collect())
    }

    /// Attach a line item to an existing donation
    #[instrument(skip(self, request))]
    pub async fn add_item(
        &self,
        donation_id: i32,
        request: CreateDonationItemRequest,
    ) -> ServiceResult<DonationItemResponse> {
        self.ctx
            .donation_repo()
            .find_by_id(donation_id)
            .await?
            .ok_or(DomainError::DonationNotFound(donation_id))?;

        let new_item = NewDonationItem {
            inventory_item_id: request.inventory_item_id,
            quantity: request.quantity,
            expiry_date: request.expiry_date,
        };

        let item = self
            .ctx
            .donation_repo()
            .add_item(donation_id, &new_item)
            .await?;

        info!(donation_id, item_id = item.id, "Donation line item added");
        Ok(DonationItemResponse::from(&item))
    }
}
