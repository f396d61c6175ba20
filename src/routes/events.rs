//! Event endpoints.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/events", "/events", messages::LIST_EVENTS_FAILED),
        ProxyRoute::post("/events", "/events", messages::CREATE_EVENT_FAILED),
        ProxyRoute::get("/events/{id}", "/events/{id}", messages::GET_EVENT_FAILED),
        ProxyRoute::put("/events/{id}", "/events/{id}", messages::UPDATE_EVENT_FAILED),
        ProxyRoute::delete("/events/{id}", "/events/{id}", messages::DELETE_EVENT_FAILED),
        ProxyRoute::post("/events/{id}/register", "/events/{id}/registrations", messages::REGISTER_EVENT_FAILED),
        ProxyRoute::delete(
            "/events/{id}/register",
            "/events/{id}/registrations",
            messages::UNREGISTER_EVENT_FAILED,
        ),
        ProxyRoute::get(
            "/events/{id}/participants",
            "/events/{id}/participants",
            messages::EVENT_PARTICIPANTS_FAILED,
        ),
        ProxyRoute::get("/events/{id}/races", "/events/{id}/races", messages::EVENT_RACES_FAILED),
    ]
}
