//! Challenge endpoints, including invitations.

use super::{messages, ProxyRoute};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/challenges", "/challenges", messages::LIST_CHALLENGES_FAILED),
        ProxyRoute::post("/challenges", "/challenges", messages::CREATE_CHALLENGE_FAILED),
        ProxyRoute::get("/challenges/me", "/challenges/me", messages::MY_CHALLENGES_FAILED),
        ProxyRoute::get("/challenges/{id}", "/challenges/{id}", messages::GET_CHALLENGE_FAILED),
        ProxyRoute::put("/challenges/{id}", "/challenges/{id}", messages::UPDATE_CHALLENGE_FAILED),
        ProxyRoute::delete("/challenges/{id}", "/challenges/{id}", messages::DELETE_CHALLENGE_FAILED),
        ProxyRoute::post("/challenges/{id}/join", "/challenges/{id}/join", messages::JOIN_CHALLENGE_FAILED),
        ProxyRoute::post("/challenges/{id}/leave", "/challenges/{id}/leave", messages::LEAVE_CHALLENGE_FAILED),
        ProxyRoute::get(
            "/challenges/{id}/participants",
            "/challenges/{id}/participants",
            messages::CHALLENGE_PARTICIPANTS_FAILED,
        ),
        ProxyRoute::get(
            "/challenges/{id}/leaderboard",
            "/challenges/{id}/leaderboard",
            messages::CHALLENGE_LEADERBOARD_FAILED,
        ),
        ProxyRoute::post(
            "/challenges/{id}/invitations",
            "/challenges/{id}/invitations",
            messages::INVITE_TO_CHALLENGE_FAILED,
        ),
        // Invitations addressed to the caller.
        ProxyRoute::get(
            "/challenges/invitations",
            "/challenges/invitations/me",
            messages::LIST_INVITATIONS_FAILED,
        ),
        ProxyRoute::post(
            "/challenges/invitations/{id}/accept",
            "/challenges/invitations/{id}/accept",
            messages::ACCEPT_INVITATION_FAILED,
        ),
        ProxyRoute::post(
            "/challenges/invitations/{id}/decline",
            "/challenges/invitations/{id}/decline",
            messages::DECLINE_INVITATION_FAILED,
        ),
        ProxyRoute::delete(
            "/challenges/invitations/{id}",
            "/challenges/invitations/{id}",
            messages::DELETE_INVITATION_FAILED,
        )
        .no_content(),
    ]
}
