//! Integration tests for Dukkan.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dukkan-integration-tests
//! ```
//!
//! The storefront router is served on an ephemeral local port for each test,
//! so no external services are needed.
//!
//! # Test Categories
//!
//! - `storefront_checkout` - Checkout API over HTTP

use std::net::SocketAddr;

use dukkan_core::WhatsAppPhone;
use dukkan_storefront::config::StorefrontConfig;
use dukkan_storefront::state::AppState;

/// WhatsApp number configured for test servers.
pub const TEST_PHONE: &str = "96555551234";

/// A storefront served on a local port.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Bind to an ephemeral port and serve the storefront router in the background.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let state = AppState::new(test_config(addr));
        let router = dukkan_storefront::app(state);

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server error");
        });

        Self { addr }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Storefront configuration pointing at `addr`.
///
/// # Panics
///
/// Panics if [`TEST_PHONE`] is not a valid phone number.
#[must_use]
pub fn test_config(addr: SocketAddr) -> StorefrontConfig {
    StorefrontConfig {
        host: addr.ip(),
        port: addr.port(),
        whatsapp_phone: WhatsAppPhone::parse(TEST_PHONE).expect("valid test phone"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}
