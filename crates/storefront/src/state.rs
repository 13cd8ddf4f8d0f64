//! Application state shared across handlers.

use std::sync::Arc;

use dukkan_core::WhatsAppPhone;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is read-only once built.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// The WhatsApp number orders are sent to.
    #[must_use]
    pub fn whatsapp_phone(&self) -> &WhatsAppPhone {
        &self.inner.config.whatsapp_phone
    }
}
