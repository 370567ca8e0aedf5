//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (SESSION_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, issue_test_token, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/inventory").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/dashboard/stats").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/inventory", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_session_user_is_upserted_from_claims() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = unique_user_id();
    let token = issue_test_token(&user_id).unwrap();

    let response = server.get_auth("/api/auth/user", &token).await.unwrap();
    let user: UserBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.role, "volunteer");
    assert_eq!(user.email, Some(format!("{user_id}@example.org")));
}

// ============================================================================
// Inventory Tests
// ============================================================================

#[tokio::test]
async fn test_inventory_crud_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = unique_user_id();
    let token = issue_test_token(&user_id).unwrap();

    // Create
    let request = NewItemBody::unique();
    let response = server
        .post_auth("/api/inventory", &token, &request)
        .await
        .unwrap();
    let created: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, request.name);
    assert_eq!(created.status, "In Stock");
    assert_eq!(created.low_stock_threshold, 5);
    assert_eq!(created.created_by, Some(user_id));

    // Get
    let response = server
        .get_auth(&format!("/api/inventory/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.quantity, 20);

    // Update: dropping the quantity below the threshold changes the status
    let response = server
        .put_auth(
            &format!("/api/inventory/{}", created.id),
            &token,
            &json!({"quantity": 3}),
        )
        .await
        .unwrap();
    let updated: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.status, "Low Stock");

    // Delete
    let response = server
        .delete_auth(&format!("/api/inventory/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone
    let response = server
        .get_auth(&format!("/api/inventory/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_inventory_delete_missing_returns_no_content() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let response = server
        .delete_auth("/api/inventory/999999999", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_inventory_validation_rejects_negative_quantity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let mut request = NewItemBody::unique();
    request.quantity = -1;
    let response = server
        .post_auth("/api/inventory", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_inventory_unknown_status_filter_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let response = server
        .get_auth("/api/inventory?status=Backordered", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_inventory_search_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let request = NewItemBody::unique();
    server
        .post_auth("/api/inventory", &token, &request)
        .await
        .unwrap();

    // Search is case-insensitive
    let needle = request.name.to_uppercase();
    let response = server
        .get_auth(&format!("/api/inventory?search={needle}"), &token)
        .await
        .unwrap();
    let items: Vec<ItemBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, request.name);
}

// ============================================================================
// Donation Tests
// ============================================================================

#[tokio::test]
async fn test_donation_date_defaults_on_create() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let request = NewDonationBody::unique();
    let response = server
        .post_auth("/api/donations", &token, &request)
        .await
        .unwrap();
    let donation: DonationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(donation.donor_name, request.donor_name);
    assert_eq!(donation.donation_type, "food");
    assert!(!donation.donation_date.is_empty());
}

#[tokio::test]
async fn test_donation_line_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    // An inventory item to reference
    let response = server
        .post_auth("/api/inventory", &token, &NewItemBody::unique())
        .await
        .unwrap();
    let item: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/donations", &token, &NewDonationBody::unique())
        .await
        .unwrap();
    let donation: DonationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Attach a line item
    let line = NewDonationItemBody {
        inventory_item_id: item.id,
        quantity: 12,
    };
    let response = server
        .post_auth(
            &format!("/api/donations/{}/items", donation.id),
            &token,
            &line,
        )
        .await
        .unwrap();
    let created: DonationItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.donation_id, donation.id);
    assert_eq!(created.quantity, 12);

    // List line items
    let response = server
        .get_auth(&format!("/api/donations/{}/items", donation.id), &token)
        .await
        .unwrap();
    let items: Vec<DonationItemBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_donation_items_on_missing_donation_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let response = server
        .get_auth("/api/donations/999999999/items", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_donation_invalid_type_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let mut request = NewDonationBody::unique();
    request.donation_type = "clothing".to_string();
    let response = server
        .post_auth("/api/donations", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Distribution Event Tests
// ============================================================================

#[tokio::test]
async fn test_distribution_event_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    // Schedule
    let request = NewEventBody::unique();
    let response = server
        .post_auth("/api/distributions", &token, &request)
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(event.status, "scheduled");
    assert_eq!(event.registered_families, 0);

    // Complete it
    let response = server
        .put_auth(
            &format!("/api/distributions/{}", event.id),
            &token,
            &json!({"status": "completed", "registered_families": 35}),
        )
        .await
        .unwrap();
    let updated: EventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.registered_families, 35);

    // Delete
    let response = server
        .delete_auth(&format!("/api/distributions/{}", event.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_distribution_line_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let response = server
        .post_auth("/api/inventory", &token, &NewItemBody::unique())
        .await
        .unwrap();
    let item: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/distributions", &token, &NewEventBody::unique())
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let line = NewEventItemBody {
        inventory_item_id: item.id,
        quantity_planned: 10,
    };
    let response = server
        .post_auth(
            &format!("/api/distributions/{}/items", event.id),
            &token,
            &line,
        )
        .await
        .unwrap();
    let created: EventItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.quantity_planned, 10);
    assert_eq!(created.quantity_distributed, 0);
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_stats_shape() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let response = server.get_auth("/api/dashboard/stats", &token).await.unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats.total_items >= 0);
    assert!(stats.low_stock_count >= 0);
    assert!(stats.expiring_count >= 0);
}

#[tokio::test]
async fn test_dashboard_alerts_include_low_stock_item() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_test_token(&unique_user_id()).unwrap();

    let mut request = NewItemBody::unique();
    request.quantity = 2;
    let response = server
        .post_auth("/api/inventory", &token, &request)
        .await
        .unwrap();
    let item: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/dashboard/alerts", &token).await.unwrap();
    let alerts: Vec<AlertBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let alert = alerts
        .iter()
        .find(|a| a.id == item.id && a.alert_type == "low_stock")
        .expect("low stock alert missing");
    assert_eq!(alert.title, request.name);
    assert_eq!(alert.priority, "high");
    assert_eq!(alert.description, "2 cans remaining");
}

#[tokio::test]
async fn test_recent_activity_records_mutations() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = unique_user_id();
    let token = issue_test_token(&user_id).unwrap();

    let request = NewItemBody::unique();
    let response = server
        .post_auth("/api/inventory", &token, &request)
        .await
        .unwrap();
    let item: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/dashboard/recent-activity?limit=50", &token)
        .await
        .unwrap();
    let entries: Vec<ActivityBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = entries
        .iter()
        .find(|e| e.entity_type == "inventory_item" && e.entity_id == item.id)
        .expect("activity entry missing");
    assert_eq!(entry.action, "create");
    assert_eq!(entry.created_by, Some(user_id));
    assert!(entry.description.contains(&request.name));
}
