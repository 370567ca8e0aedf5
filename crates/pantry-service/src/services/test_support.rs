//! In-memory repository fakes for service tests

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Days, Utc};

use pantry_core::entities::{
    ActivityLog, DistributionEvent, DistributionEventPatch, DistributionItem, Donation,
    DonationItem, DonationPatch, InventoryItem, InventoryItemPatch, NewActivityLog,
    NewDistributionEvent, NewDistributionItem, NewDonation, NewDonationItem, NewInventoryItem,
    User, UserProfile, UserRole,
};
use pantry_core::traits::{
    ActivityLogRepository, DashboardRepository, DashboardStats, DistributionRepository,
    DonationQuery, DonationRepository, EventQuery, InventoryQuery, InventoryRepository,
    InventorySort, RepoResult, SortOrder, UserRepository,
};
use pantry_core::{calendar, DomainError};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Build a context wired to fresh in-memory repositories
pub fn test_context() -> ServiceContext {
    let inventory = Arc::new(InMemoryInventoryRepo::default());
    let donations = Arc::new(InMemoryDonationRepo::default());
    let events = Arc::new(InMemoryDistributionRepo::default());
    let dashboard = Arc::new(InMemoryDashboardRepo {
        inventory: Arc::clone(&inventory),
        donations: Arc::clone(&donations),
        events: Arc::clone(&events),
    });

    ServiceContextBuilder::new()
        .user_repo(Arc::new(InMemoryUserRepo::default()))
        .inventory_repo(inventory)
        .donation_repo(donations)
        .distribution_repo(events)
        .activity_repo(Arc::new(InMemoryActivityRepo::default()))
        .dashboard_repo(dashboard)
        .build()
        .unwrap()
}

fn next(counter: &AtomicI32) -> i32 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn upsert(&self, profile: &UserProfile) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == profile.id) {
            user.email = profile.email.clone();
            user.first_name = profile.first_name.clone();
            user.last_name = profile.last_name.clone();
            user.profile_image_url = profile.profile_image_url.clone();
            user.updated_at = Utc::now();
            return Ok(user.clone());
        }
        let now = Utc::now();
        let user = User {
            id: profile.id.clone(),
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            profile_image_url: profile.profile_image_url.clone(),
            role: UserRole::Volunteer,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Default)]
pub struct InMemoryInventoryRepo {
    items: Mutex<Vec<InventoryItem>>,
    next_id: AtomicI32,
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepo {
    async fn list(&self, query: &InventoryQuery) -> RepoResult<Vec<InventoryItem>> {
        let items = self.items.lock().unwrap();
        let mut matched: Vec<InventoryItem> = items
            .iter()
            .filter(|item| {
                query.category.as_deref().is_none_or(|c| item.category == c)
            })
            .filter(|item| {
                query.search.as_deref().is_none_or(|s| {
                    let needle = s.to_lowercase();
                    item.name.to_lowercase().contains(&needle)
                        || item.category.to_lowercase().contains(&needle)
                })
            })
            .cloned()
            .collect();

        match query.sort_by {
            InventorySort::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            InventorySort::Quantity => matched.sort_by_key(|i| i.quantity),
            InventorySort::ExpiryDate => {
                matched.sort_by_key(|i| (i.expiry_date.is_none(), i.expiry_date))
            }
        }
        if query.sort_order == SortOrder::Desc {
            matched.reverse();
        }
        Ok(matched)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<InventoryItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn create(&self, item: &NewInventoryItem, created_by: &str) -> RepoResult<InventoryItem> {
        let now = Utc::now();
        let row = InventoryItem {
            id: next(&self.next_id),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            expiry_date: item.expiry_date,
            low_stock_threshold: item.low_stock_threshold,
            notes: item.notes.clone(),
            created_at: now,
            updated_at: now,
            created_by: Some(created_by.to_string()),
        };
        self.items.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, patch: &InventoryItemPatch) -> RepoResult<InventoryItem> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::ItemNotFound(id))?;

        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(category) = &patch.category {
            item.category = category.clone();
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = &patch.unit {
            item.unit = unit.clone();
        }
        if let Some(expiry) = patch.expiry_date {
            item.expiry_date = expiry;
        }
        if let Some(threshold) = patch.low_stock_threshold {
            item.low_stock_threshold = threshold;
        }
        if let Some(notes) = &patch.notes {
            item.notes = notes.clone();
        }
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> RepoResult<()> {
        self.items.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn low_stock(&self) -> RepoResult<Vec<InventoryItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().filter(|i| i.is_low_stock()).cloned().collect())
    }

    async fn expiring(&self, days: u64) -> RepoResult<Vec<InventoryItem>> {
        let cutoff = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(days))
            .ok_or_else(|| DomainError::InternalError("date overflow".to_string()))?;
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.expiry_date.is_some_and(|d| d <= cutoff))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Donations
// ============================================================================

#[derive(Default)]
pub struct InMemoryDonationRepo {
    donations: Mutex<Vec<Donation>>,
    items: Mutex<Vec<DonationItem>>,
    next_id: AtomicI32,
    next_item_id: AtomicI32,
}

#[async_trait]
impl DonationRepository for InMemoryDonationRepo {
    async fn list(&self, query: &DonationQuery) -> RepoResult<Vec<Donation>> {
        let donations = self.donations.lock().unwrap();
        let mut matched: Vec<Donation> = donations
            .iter()
            .filter(|d| {
                query
                    .donation_type
                    .is_none_or(|t| d.donation_type == t)
            })
            .filter(|d| query.date_from.is_none_or(|from| d.donation_date >= from))
            .filter(|d| query.date_to.is_none_or(|to| d.donation_date <= to))
            .cloned()
            .collect();
        matched.sort_by_key(|d| std::cmp::Reverse((d.donation_date, d.id)));
        Ok(matched)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Donation>> {
        let donations = self.donations.lock().unwrap();
        Ok(donations.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, donation: &NewDonation, created_by: &str) -> RepoResult<Donation> {
        let now = Utc::now();
        let row = Donation {
            id: next(&self.next_id),
            donor_name: donation.donor_name.clone(),
            donor_email: donation.donor_email.clone(),
            donor_phone: donation.donor_phone.clone(),
            donation_type: donation.donation_type,
            description: donation.description.clone(),
            value: donation.value,
            donation_date: donation.donation_date.unwrap_or(now),
            notes: donation.notes.clone(),
            created_at: now,
            created_by: Some(created_by.to_string()),
        };
        self.donations.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, patch: &DonationPatch) -> RepoResult<Donation> {
        let mut donations = self.donations.lock().unwrap();
        let donation = donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DomainError::DonationNotFound(id))?;

        if let Some(name) = &patch.donor_name {
            donation.donor_name = name.clone();
        }
        if let Some(email) = &patch.donor_email {
            donation.donor_email = email.clone();
        }
        if let Some(phone) = &patch.donor_phone {
            donation.donor_phone = phone.clone();
        }
        if let Some(ty) = patch.donation_type {
            donation.donation_type = ty;
        }
        if let Some(description) = &patch.description {
            donation.description = description.clone();
        }
        if let Some(value) = patch.value {
            donation.value = value;
        }
        if let Some(date) = patch.donation_date {
            donation.donation_date = date;
        }
        if let Some(notes) = &patch.notes {
            donation.notes = notes.clone();
        }
        Ok(donation.clone())
    }

    async fn delete(&self, id: i32) -> RepoResult<()> {
        self.donations.lock().unwrap().retain(|d| d.id != id);
        self.items.lock().unwrap().retain(|i| i.donation_id != id);
        Ok(())
    }

    async fn items(&self, donation_id: i32) -> RepoResult<Vec<DonationItem>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.donation_id == donation_id)
            .cloned()
            .collect())
    }

    async fn add_item(&self, donation_id: i32, item: &NewDonationItem) -> RepoResult<DonationItem> {
        let row = DonationItem {
            id: next(&self.next_item_id),
            donation_id,
            inventory_item_id: item.inventory_item_id,
            quantity: item.quantity,
            expiry_date: item.expiry_date,
        };
        self.items.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

// ============================================================================
// Distribution events
// ============================================================================

#[derive(Default)]
pub struct InMemoryDistributionRepo {
    events: Mutex<Vec<DistributionEvent>>,
    items: Mutex<Vec<DistributionItem>>,
    next_id: AtomicI32,
    next_item_id: AtomicI32,
}

#[async_trait]
impl DistributionRepository for InMemoryDistributionRepo {
    async fn list(&self, query: &EventQuery) -> RepoResult<Vec<DistributionEvent>> {
        let events = self.events.lock().unwrap();
        let mut matched: Vec<DistributionEvent> = events
            .iter()
            .filter(|e| query.status.is_none_or(|s| e.status == s))
            .filter(|e| query.date_from.is_none_or(|from| e.event_date >= from))
            .filter(|e| query.date_to.is_none_or(|to| e.event_date <= to))
            .cloned()
            .collect();
        matched.sort_by_key(|e| std::cmp::Reverse((e.event_date, e.id)));
        Ok(matched)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DistributionEvent>> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn create(
        &self,
        event: &NewDistributionEvent,
        created_by: &str,
    ) -> RepoResult<DistributionEvent> {
        let row = DistributionEvent {
            id: next(&self.next_id),
            name: event.name.clone(),
            description: event.description.clone(),
            event_date: event.event_date,
            location: event.location.clone(),
            max_families: event.max_families,
            registered_families: event.registered_families,
            status: event.status,
            notes: event.notes.clone(),
            created_at: Utc::now(),
            created_by: Some(created_by.to_string()),
        };
        self.events.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        patch: &DistributionEventPatch,
    ) -> RepoResult<DistributionEvent> {
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::EventNotFound(id))?;

        if let Some(name) = &patch.name {
            event.name = name.clone();
        }
        if let Some(description) = &patch.description {
            event.description = description.clone();
        }
        if let Some(date) = patch.event_date {
            event.event_date = date;
        }
        if let Some(location) = &patch.location {
            event.location = location.clone();
        }
        if let Some(max) = patch.max_families {
            event.max_families = max;
        }
        if let Some(registered) = patch.registered_families {
            event.registered_families = registered;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
        if let Some(notes) = &patch.notes {
            event.notes = notes.clone();
        }
        Ok(event.clone())
    }

    async fn delete(&self, id: i32) -> RepoResult<()> {
        self.events.lock().unwrap().retain(|e| e.id != id);
        self.items
            .lock()
            .unwrap()
            .retain(|i| i.distribution_event_id != id);
        Ok(())
    }

    async fn items(&self, event_id: i32) -> RepoResult<Vec<DistributionItem>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.distribution_event_id == event_id)
            .cloned()
            .collect())
    }

    async fn add_item(
        &self,
        event_id: i32,
        item: &NewDistributionItem,
    ) -> RepoResult<DistributionItem> {
        let row = DistributionItem {
            id: next(&self.next_item_id),
            distribution_event_id: event_id,
            inventory_item_id: item.inventory_item_id,
            quantity_planned: item.quantity_planned,
            quantity_distributed: item.quantity_distributed,
        };
        self.items.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

// ============================================================================
// Activity log
// ============================================================================

#[derive(Default)]
pub struct InMemoryActivityRepo {
    entries: Mutex<Vec<ActivityLog>>,
    next_id: AtomicI32,
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityRepo {
    async fn append(&self, entry: &NewActivityLog, created_by: &str) -> RepoResult<ActivityLog> {
        let row = ActivityLog {
            id: next(&self.next_id),
            action: entry.action,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            description: entry.description.clone(),
            created_at: Utc::now(),
            created_by: Some(created_by.to_string()),
        };
        self.entries.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActivityLog>> {
        let entries = self.entries.lock().unwrap();
        // Appended in order, so highest id is newest
        let mut all: Vec<ActivityLog> = entries.clone();
        all.sort_by_key(|e| std::cmp::Reverse(e.id));
        all.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(all)
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Computes the statistics from the other fakes' state
pub struct InMemoryDashboardRepo {
    pub inventory: Arc<InMemoryInventoryRepo>,
    pub donations: Arc<InMemoryDonationRepo>,
    pub events: Arc<InMemoryDistributionRepo>,
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepo {
    async fn stats(&self, now: DateTime<Utc>) -> RepoResult<DashboardStats> {
        let today = now.date_naive();
        let month_start = calendar::month_start(now);
        let cutoff = calendar::expiry_cutoff(today);

        let items = self.inventory.items.lock().unwrap().clone();
        let donations = self.donations.donations.lock().unwrap().clone();
        let events = self.events.events.lock().unwrap().clone();

        Ok(DashboardStats {
            total_items: items.len() as i64,
            monthly_donations: donations
                .iter()
                .filter(|d| d.donation_date >= month_start)
                .count() as i64,
            families_served: events
                .iter()
                .filter(|e| {
                    e.status == pantry_core::entities::EventStatus::Completed
                        && e.event_date >= month_start
                })
                .map(|e| i64::from(e.registered_families))
                .sum(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count() as i64,
            low_stock_count: items.iter().filter(|i| i.is_low_stock()).count() as i64,
            expiring_count: items
                .iter()
                .filter(|i| i.expiry_date.is_some_and(|d| d <= cutoff))
                .count() as i64,
        })
    }
}
