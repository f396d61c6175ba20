//! Activity endpoints: workouts, feed, likes and comments.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/activities", "/activities", messages::LIST_ACTIVITIES_FAILED),
        ProxyRoute::post("/activities", "/activities", messages::CREATE_ACTIVITY_FAILED),
        ProxyRoute::get("/activities/feed", "/activities/feed", messages::ACTIVITY_FEED_FAILED),
        ProxyRoute::get("/activities/{id}", "/activities/{id}", messages::GET_ACTIVITY_FAILED),
        ProxyRoute::patch("/activities/{id}", "/activities/{id}", messages::UPDATE_ACTIVITY_FAILED),
        ProxyRoute::delete("/activities/{id}", "/activities/{id}", messages::DELETE_ACTIVITY_FAILED),
        ProxyRoute::post("/activities/{id}/like", "/activities/{id}/likes", messages::LIKE_ACTIVITY_FAILED),
        ProxyRoute::delete("/activities/{id}/like", "/activities/{id}/likes", messages::UNLIKE_ACTIVITY_FAILED),
        ProxyRoute::get(
            "/activities/{id}/comments",
            "/activities/{id}/comments",
            messages::LIST_COMMENTS_FAILED,
        ),
        ProxyRoute::post(
            "/activities/{id}/comments",
            "/activities/{id}/comments",
            messages::ADD_COMMENT_FAILED,
        ),
    ]
}
