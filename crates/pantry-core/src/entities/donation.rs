//! Donation entity and its line items

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Kind of donation received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationType {
    Food,
    Monetary,
    Other,
}

impl DonationType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "food" => Some(Self::Food),
            "monetary" => Some(Self::Monetary),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Monetary => "monetary",
            Self::Other => "other",
        }
    }
}

/// Donation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub id: i32,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub donation_type: DonationType,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub donation_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Fields for recording a donation
///
/// `donation_date` defaults to the time of recording when omitted.
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub donation_type: DonationType,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub donation_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Partial update of a donation; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct DonationPatch {
    pub donor_name: Option<String>,
    pub donor_email: Option<Option<String>>,
    pub donor_phone: Option<Option<String>>,
    pub donation_type: Option<DonationType>,
    pub description: Option<Option<String>>,
    pub value: Option<Option<Decimal>>,
    pub donation_date: Option<DateTime<Utc>>,
    pub notes: Option<Option<String>>,
}

/// Stock-line detail of a food donation; child of [`Donation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationItem {
    pub id: i32,
    pub donation_id: i32,
    pub inventory_item_id: i32,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}

/// Fields for attaching a line item to a donation
#[derive(Debug, Clone)]
pub struct NewDonationItem {
    pub inventory_item_id: i32,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}
