//! Third-party fitness integrations (Strava, Garmin, ...).
//!
//! The provider name is opaque here; the backend decides which exist.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/integrations", "/integrations", messages::LIST_INTEGRATIONS_FAILED),
        ProxyRoute::get(
            "/integrations/{provider}/connect",
            "/integrations/{provider}/auth-url",
            messages::CONNECT_INTEGRATION_FAILED,
        ),
        ProxyRoute::post(
            "/integrations/{provider}/callback",
            "/integrations/{provider}/callback",
            messages::INTEGRATION_CALLBACK_FAILED,
        ),
        ProxyRoute::post(
            "/integrations/{provider}/sync",
            "/integrations/{provider}/sync",
            messages::SYNC_INTEGRATION_FAILED,
        ),
        ProxyRoute::delete(
            "/integrations/{provider}",
            "/integrations/{provider}",
            messages::DISCONNECT_INTEGRATION_FAILED,
        ),
    ]
}
