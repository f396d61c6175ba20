//! Achievement endpoints.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/achievements", "/achievements", messages::LIST_ACHIEVEMENTS_FAILED),
        ProxyRoute::get("/achievements/me", "/users/me/achievements", messages::MY_ACHIEVEMENTS_FAILED),
        ProxyRoute::get("/achievements/{id}", "/achievements/{id}", messages::GET_ACHIEVEMENT_FAILED),
    ]
}
