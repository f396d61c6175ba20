//! Certificate and medal templates.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get(
            "/certificate-templates",
            "/certificate-templates",
            messages::LIST_CERTIFICATE_TEMPLATES_FAILED,
        ),
        ProxyRoute::post(
            "/certificate-templates",
            "/certificate-templates",
            messages::CREATE_CERTIFICATE_TEMPLATE_FAILED,
        ),
        ProxyRoute::get(
            "/certificate-templates/{id}",
            "/certificate-templates/{id}",
            messages::GET_CERTIFICATE_TEMPLATE_FAILED,
        ),
        ProxyRoute::put(
            "/certificate-templates/{id}",
            "/certificate-templates/{id}",
            messages::UPDATE_CERTIFICATE_TEMPLATE_FAILED,
        ),
        ProxyRoute::delete(
            "/certificate-templates/{id}",
            "/certificate-templates/{id}",
            messages::DELETE_CERTIFICATE_TEMPLATE_FAILED,
        ),
        ProxyRoute::post(
            "/certificate-templates/{id}/preview",
            "/certificate-templates/{id}/preview",
            messages::PREVIEW_CERTIFICATE_FAILED,
        ),
        ProxyRoute::get("/medal-templates", "/medal-templates", messages::LIST_MEDAL_TEMPLATES_FAILED),
        ProxyRoute::post("/medal-templates", "/medal-templates", messages::CREATE_MEDAL_TEMPLATE_FAILED),
        ProxyRoute::get(
            "/medal-templates/{id}",
            "/medal-templates/{id}",
            messages::GET_MEDAL_TEMPLATE_FAILED,
        ),
        ProxyRoute::put(
            "/medal-templates/{id}",
            "/medal-templates/{id}",
            messages::UPDATE_MEDAL_TEMPLATE_FAILED,
        ),
        ProxyRoute::delete(
            "/medal-templates/{id}",
            "/medal-templates/{id}",
            messages::DELETE_MEDAL_TEMPLATE_FAILED,
        ),
    ]
}
