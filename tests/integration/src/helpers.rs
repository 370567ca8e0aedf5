//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, issuing session tokens,
//! and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use pantry_api::{create_app, create_app_state};
use pantry_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, RateLimitConfig,
    ServerConfig, SessionConfig, SessionService,
};
use pantry_core::entities::UserProfile;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const TEST_SESSION_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// Only `DATABASE_URL` is required; the rest is filled with test defaults.
/// The rate limit is raised so parallel tests are not throttled.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL not set"))?;
    let secret =
        std::env::var("SESSION_SECRET").unwrap_or_else(|_| TEST_SESSION_SECRET.to_string());

    Ok(AppConfig {
        app: AppSettings {
            name: "pantry-server".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        session: SessionConfig {
            secret,
            ttl_seconds: 3600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Issue a session token for a test user
pub fn issue_test_token(user_id: &str) -> Result<String> {
    let secret =
        std::env::var("SESSION_SECRET").unwrap_or_else(|_| TEST_SESSION_SECRET.to_string());
    let service = SessionService::new(&secret, 3600);
    let profile = UserProfile {
        id: user_id.to_string(),
        email: Some(format!("{user_id}@example.org")),
        first_name: Some("Test".to_string()),
        last_name: Some("Volunteer".to_string()),
        profile_image_url: None,
    };
    Ok(service.issue_token(&profile)?)
}

/// Helper to check if the test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
