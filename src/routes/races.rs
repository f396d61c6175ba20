//! Race endpoints.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/races", "/races", messages::LIST_RACES_FAILED),
        ProxyRoute::post("/races", "/races", messages::CREATE_RACE_FAILED),
        ProxyRoute::get("/races/{id}", "/races/{id}", messages::GET_RACE_FAILED),
        ProxyRoute::put("/races/{id}", "/races/{id}", messages::UPDATE_RACE_FAILED),
        ProxyRoute::delete("/races/{id}", "/races/{id}", messages::DELETE_RACE_FAILED),
        ProxyRoute::post("/races/{id}/register", "/races/{id}/register", messages::REGISTER_RACE_FAILED),
        ProxyRoute::get("/races/{id}/results", "/races/{id}/results", messages::RACE_RESULTS_FAILED),
    ]
}
