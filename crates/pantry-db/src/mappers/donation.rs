//! Donation entity <-> model mappers

use pantry_core::entities::{Donation, DonationItem, DonationType};
use pantry_core::error::DomainError;

use crate::models::{DonationItemModel, DonationModel};

/// Convert DonationModel to Donation entity
impl TryFrom<DonationModel> for Donation {
    type Error = DomainError;

    fn try_from(model: DonationModel) -> Result<Self, Self::Error> {
        let donation_type = DonationType::parse(&model.donation_type)
            .ok_or_else(|| DomainError::invalid_field("donation_type", model.donation_type.clone()))?;

        Ok(Donation {
            donation_type,
            id: model.id,
            donor_name: model.donor_name,
            donor_email: model.donor_email,
            donor_phone: model.donor_phone,
            description: model.description,
            value: model.value,
            donation_date: model.donation_date,
            notes: model.notes,
            created_at: model.created_at,
            created_by: model.created_by,
        })
    }
}

/// Convert DonationItemModel to DonationItem entity
impl From<DonationItemModel> for DonationItem {
    fn from(model: DonationItemModel) -> Self {
        DonationItem {
            id: model.id,
            donation_id: model.donation_id,
            inventory_item_id: model.inventory_item_id,
            quantity: model.quantity,
            expiry_date: model.expiry_date,
        }
    }
}
