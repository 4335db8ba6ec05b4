use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{middleware, Extension, Json, Router};
use tracing::{info, warn};

use crate::auth::{require_auth, AuthUser};
use crate::errors::{AppError, MessageBody};
use crate::extract::AppJson;
use crate::models::{AuthResponse, LoginRequest, PasswordChangeRequest, RegisterRequest};
use crate::services::account_service;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/accounts/logout/", post(logout))
        .route("/accounts/password_change/", post(password_change))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/accounts/register/", post(register))
        .route("/accounts/login/", post(login))
        .merge(protected)
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("POST /accounts/register/ - Registering new user");
    let (token, user) = account_service::register(&state.pool, &state.tokens, &body.email, &body.password)
        .await
        .map_err(|e| {
            warn!("Registration failed: {}", e);
            e
        })?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: Some("User created successfully".to_string()),
            token,
            user,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /accounts/login/ - Logging in");
    let (token, user) = account_service::login(&state.pool, &state.tokens, &body.username, &body.password).await?;
    Ok(Json(AuthResponse {
        message: None,
        token,
        user,
    }))
}

/// Tokens are stateless; the client drops its copy.
pub async fn logout(Extension(user): Extension<AuthUser>) -> Json<MessageBody> {
    info!("POST /accounts/logout/ - User {} logged out", user.id);
    Json(MessageBody::new("Logged out successfully"))
}

pub async fn password_change(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppJson(body): AppJson<PasswordChangeRequest>,
) -> Result<Json<MessageBody>, AppError> {
    info!("POST /accounts/password_change/ - Changing password for user {}", user.id);
    account_service::change_password(&state.pool, user.id, &body.old_password, &body.new_password)
        .await
        .map_err(|e| {
            warn!("Password change failed for user {}: {}", user.id, e);
            e
        })?;
    Ok(Json(MessageBody::new("Password changed successfully")))
}
