//! Account API handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Map, Value};

use super::dto::SignupRequest;
use crate::application::accounts::{AccountService, SignupData};
use crate::infrastructure::crypto::token::SessionClaims;
use crate::interfaces::http::common::{
    require_string_fields, Envelope, ParsedJson, ParsedJsonRejection,
};

/// Account handler state
#[derive(Clone)]
pub struct AccountHandlerState {
    pub account_service: Arc<AccountService>,
}

#[utoipa::path(
    post,
    path = "/accounts/",
    tag = "Accounts",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, sanitized record returned", body = Envelope),
        (status = 208, description = "Email address already registered", body = Envelope),
        (status = 400, description = "Missing or mistyped fields", body = Envelope)
    )
)]
pub async fn signup(
    State(state): State<AccountHandlerState>,
    body: Result<ParsedJson<Map<String, Value>>, ParsedJsonRejection>,
) -> Envelope {
    let ParsedJson(body) = match body {
        Ok(parsed) => parsed,
        Err(rejection) => return rejection.envelope(),
    };

    let errors = require_string_fields(&body, &["email_address", "display_name", "password"]);
    if !errors.is_empty() {
        return Envelope::new(400, "", json!({ "errors": errors }));
    }

    let request: SignupRequest = match serde_json::from_value(Value::Object(body)) {
        Ok(request) => request,
        Err(_) => return ParsedJsonRejection::InvalidBody.envelope(),
    };

    let data = SignupData {
        display_name: request.display_name,
        email_address: request.email_address,
        password: request.password,
    };
    match state.account_service.signup(data).await {
        Ok(account) => Envelope::success(account.sanitize()),
        Err(err) => err.into(),
    }
}

#[utoipa::path(
    get,
    path = "/accounts/{username}/",
    tag = "Accounts",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Sanitized account record", body = Envelope),
        (status = 404, description = "No account under that username", body = Envelope)
    )
)]
pub async fn fetch_account(
    State(state): State<AccountHandlerState>,
    Path(username): Path<String>,
) -> Envelope {
    match state.account_service.fetch(&username).await {
        Ok(account) => Envelope::success(account.sanitize()),
        Err(err) => err.into(),
    }
}

#[utoipa::path(
    patch,
    path = "/accounts/{username}",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Updated account, softly sanitized", body = Envelope),
        (status = 403, description = "Acting on another user's account", body = Envelope),
        (status = 404, description = "No account under that username", body = Envelope)
    )
)]
pub async fn update_account(
    State(state): State<AccountHandlerState>,
    Path(username): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    body: Result<ParsedJson<Map<String, Value>>, ParsedJsonRejection>,
) -> Envelope {
    let ParsedJson(requested) = match body {
        Ok(parsed) => parsed,
        Err(rejection) => return rejection.envelope(),
    };

    match state
        .account_service
        .update(&username, &claims, &requested)
        .await
    {
        Ok(account) => Envelope::success(account.sanitize_soft()),
        Err(err) => err.into(),
    }
}

#[utoipa::path(
    delete,
    path = "/accounts/{username}",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Account deleted", body = Envelope),
        (status = 403, description = "Acting on another user's account", body = Envelope),
        (status = 404, description = "No account under that username", body = Envelope)
    )
)]
pub async fn delete_account(
    State(state): State<AccountHandlerState>,
    Path(username): Path<String>,
    Extension(claims): Extension<SessionClaims>,
) -> Envelope {
    match state.account_service.delete(&username, &claims).await {
        Ok(()) => Envelope::message(200, "Account deleted."),
        Err(err) => err.into(),
    }
}
