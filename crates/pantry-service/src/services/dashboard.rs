//! Dashboard service
//!
//! Assembles the summary statistics, the recent-activity feed and the
//! attention alerts shown on the landing page.

use chrono::Utc;
use tracing::instrument;

use pantry_core::entities::EXPIRY_WINDOW_DAYS;

use crate::dto::{
    ActivityLogResponse, AlertResponse, DashboardStatsResponse, RecentActivityQuery,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const DEFAULT_ACTIVITY_LIMIT: i64 = 10;
const MAX_ACTIVITY_LIMIT: i64 = 100;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Summary statistics as of now
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<DashboardStatsResponse> {
        let stats = self.ctx.dashboard_repo().stats(Utc::now()).await?;
        Ok(DashboardStatsResponse::from(stats))
    }

    /// Most recent audit-trail entries, newest first
    #[instrument(skip(self))]
    pub async fn recent_activity(
        &self,
        query: &RecentActivityQuery,
    ) -> ServiceResult<Vec<ActivityLogResponse>> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
            .clamp(1, MAX_ACTIVITY_LIMIT);

        let entries = self.ctx.activity_repo().recent(limit).await?;
        Ok(entries.iter().map(ActivityLogResponse::from).collect())
    }

    /// Attention alerts: all low-stock items first, then all expiring items.
    /// An item appearing in both lists yields two alerts.
    #[instrument(skip(self))]
    pub async fn alerts(&self) -> ServiceResult<Vec<AlertResponse>> {
        let low = self.ctx.inventory_repo().low_stock().await?;
        let expiring = self
            .ctx
            .inventory_repo()
            .expiring(EXPIRY_WINDOW_DAYS)
            .await?;

        let mut alerts = Vec::with_capacity(low.len() + expiring.len());

        for item in &low {
            alerts.push(AlertResponse {
                id: item.id,
                alert_type: "low_stock".to_string(),
                title: item.name.clone(),
                description: format!("{} {} remaining", item.quantity, item.unit),
                priority: "high".to_string(),
            });
        }

        for item in &expiring {
            // Guaranteed by the expiring query, but don't panic on a bad row
            let Some(expiry) = item.expiry_date else {
                continue;
            };
            alerts.push(AlertResponse {
                id: item.id,
                alert_type: "expiring".to_string(),
                title: item.name.clone(),
                description: format!("Expires {expiry}"),
                priority: "medium".to_string(),
            });
        }

        Ok(alerts)
    }
}
