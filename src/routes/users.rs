//! User profile endpoints.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/users/me", "/users/me", messages::GET_PROFILE_FAILED),
        ProxyRoute::put("/users/me", "/users/me", messages::UPDATE_PROFILE_FAILED),
        ProxyRoute::get("/users/me/stats", "/users/me/stats", messages::USER_STATS_FAILED),
        ProxyRoute::put("/users/me/password", "/auth/change-password", messages::CHANGE_PASSWORD_FAILED),
        ProxyRoute::get("/users/{id}", "/users/{id}/profile", messages::PUBLIC_PROFILE_FAILED),
    ]
}
