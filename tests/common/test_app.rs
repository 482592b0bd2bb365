use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, redirect::Policy};
use storefront::{AppState, config::PaginationConfig, server};
use tokio::net::TcpListener;

use super::memory_store::MemoryStore;

/// HTTP test application wrapper
///
/// Runs the full router on a random port, backed by a fresh in-memory store.
/// Each test gets its own server instance to allow parallel test execution.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// The store behind the router, for asserting on what reached storage
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Create a new HTTP test app with default pagination
    ///
    /// # Example
    /// ```rust
    /// #[tokio::test]
    /// async fn test_health_endpoint() {
    ///     let app = TestApp::new().await;
    ///
    ///     let response = app.client.get(app.url("/health")).send().await.unwrap();
    ///
    ///     assert_eq!(response.status(), 200);
    /// }
    /// ```
    pub async fn new() -> Self {
        Self::with_pagination(PaginationConfig::default()).await
    }

    pub async fn with_pagination(pagination: PaginationConfig) -> Self {
        Self::with_options(pagination, Duration::from_secs(30)).await
    }

    /// Create a test app with custom pagination and request timeout
    pub async fn with_options(pagination: PaginationConfig, request_timeout: Duration) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), pagination);
        let app = server::router(state, request_timeout);

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            store,
        }
    }

    /// Get the full URL for an endpoint
    ///
    /// # Example
    /// ```rust
    /// let url = app.url("/book");
    /// // Returns: "http://127.0.0.1:54321/book"
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
