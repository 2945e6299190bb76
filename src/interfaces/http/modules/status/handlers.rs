//! Service status handler

use std::sync::Arc;

use axum::extract::State;

use crate::application::accounts::AccountService;
use crate::interfaces::http::common::Envelope;

/// Status state
#[derive(Clone)]
pub struct StatusState {
    pub account_service: Arc<AccountService>,
}

#[utoipa::path(
    get,
    path = "/accounts/status",
    tag = "Status",
    responses(
        (status = 200, description = "Service running and store reachable", body = Envelope),
        (status = 500, description = "Store unreachable", body = Envelope)
    )
)]
pub async fn service_status(State(state): State<StatusState>) -> Envelope {
    match state.account_service.status().await {
        Ok(()) => Envelope::message(200, "Running."),
        Err(_) => Envelope::message(500, "Something's not right."),
    }
}
