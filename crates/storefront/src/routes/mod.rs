//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Checkout
//! GET  /checkout/options       - Delivery and payment methods
//! POST /checkout/preview       - Readable order message
//! POST /checkout               - Escaped order message and WhatsApp link
//! ```

pub mod checkout;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the main routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout::checkout))
        .route("/checkout/preview", post(checkout::preview))
        .route("/checkout/options", get(checkout::options))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
