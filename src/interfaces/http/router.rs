//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::accounts::AccountService;
use crate::application::authentication::AuthenticationService;
use crate::domain::account::repository::AccountRepositoryInterface;
use crate::infrastructure::crypto::token::TokenConfig;
use crate::interfaces::http::common::{Envelope, FieldError};
use crate::interfaces::http::middleware::{token_guard, TokenGuardState};
use crate::interfaces::http::modules::{accounts, auth, status};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Status
        status::service_status,
        // Accounts
        accounts::signup,
        accounts::fetch_account,
        accounts::update_account,
        accounts::delete_account,
        // Authentication
        auth::authenticate,
        auth::re_authenticate,
    ),
    components(
        schemas(
            Envelope,
            FieldError,
            accounts::SignupRequest,
            auth::AuthenticationRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Status", description = "Service and store reachability"),
        (name = "Accounts", description = "Account signup, lookup, update and deletion"),
        (name = "Authentication", description = "Credential sign-in, session tokens and re-authentication"),
    ),
    info(
        title = "Hetchfund Accounts API",
        version = "1.0.0",
        description = "REST API for Hetchfund account management and authentication",
        contact(name = "Hetchfund", email = "engineering@hetchfund.capital")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// Routes are registered with full literal paths and merged, keeping the
/// trailing-slash distinction between the collection path `/accounts/` and
/// member paths, and letting the static `/accounts/status` and
/// `/accounts/authentication` segments take priority over `{username}`
/// captures.
pub fn create_api_router(
    repo: Arc<dyn AccountRepositoryInterface>,
    token_config: TokenConfig,
) -> Router {
    let account_service = Arc::new(AccountService::new(repo.clone()));
    let authentication_service =
        Arc::new(AuthenticationService::new(repo, token_config.clone()));

    let guard_state = TokenGuardState { token_config };

    let account_state = accounts::AccountHandlerState {
        account_service: account_service.clone(),
    };
    let auth_state = auth::AuthHandlerState {
        authentication_service,
    };
    let status_state = status::StatusState { account_service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes
    let status_routes = Router::new()
        .route("/accounts/status", get(status::service_status))
        .with_state(status_state);

    let signup_routes = Router::new()
        .route("/accounts/", post(accounts::signup))
        .with_state(account_state.clone());

    let profile_routes = Router::new()
        .route("/accounts/{username}/", get(accounts::fetch_account))
        .with_state(account_state.clone());

    let authentication_routes = Router::new()
        .route("/accounts/authentication", get(auth::authenticate))
        .with_state(auth_state);

    // Token-guarded routes
    let re_authentication_routes = Router::new()
        .route("/accounts/authentication/re", get(auth::re_authenticate))
        .layer(middleware::from_fn_with_state(
            guard_state.clone(),
            token_guard,
        ));

    let managed_account_routes = Router::new()
        .route(
            "/accounts/{username}",
            patch(accounts::update_account).delete(accounts::delete_account),
        )
        .layer(middleware::from_fn_with_state(guard_state, token_guard))
        .with_state(account_state);

    let swagger_routes =
        SwaggerUi::new("/accounts/docs").url("/accounts/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        .merge(swagger_routes)
        .merge(status_routes)
        .merge(signup_routes)
        .merge(profile_routes)
        .merge(authentication_routes)
        .merge(re_authentication_routes)
        .merge(managed_account_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
