use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest},
        extractors::AuthUser,
        repo::User,
        service::{hash_password, verify_password, JwtKeys},
    },
    error::ApiError,
    extract::Json,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user", get(get_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if payload.email.is_empty()
        || payload.password.is_empty()
        || payload.firstname.is_empty()
        || payload.lastname.is_empty()
    {
        warn!("register with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }

    // Fast-path check; the unique constraint on logindata.email settles
    // concurrent registrations.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Internal(e)
    })?;

    let user = User::create(
        &state.db,
        &payload.email,
        &hash,
        &payload.firstname,
        &payload.lastname,
    )
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            warn!(email = %payload.email, "email already registered (constraint)");
            ApiError::Conflict("Email already registered".into())
        }
        _ => ApiError::Store(e),
    })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation("Email and password are required".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::NotFound("User not found".into())
        })?;

    let ok = verify_password(&payload.password, &user.password_hash).map_err(|e| {
        error!(error = %e, "verify_password failed");
        ApiError::Internal(e)
    })?;

    if !ok {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        ApiError::Internal(e)
    })?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        token,
        firstname: user.firstname,
    }))
}

#[instrument(skip(state, user))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let row = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, "profile for unknown user id");
            ApiError::NotFound("User not found".into())
        })?;

    Ok(Json(ProfileResponse {
        firstname: row.firstname,
        email: row.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let state = AppState::fake();
        let payload: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw123"}"#).unwrap();
        let err = register(State(state), Json(payload)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_rejects_missing_fields() {
        let state = AppState::fake();
        let payload: LoginRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        let err = login(State(state), Json(payload)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn register_request_defaults_missing_fields_to_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(req.email, "a@b.c");
        assert!(req.password.is_empty());
        assert!(req.firstname.is_empty());
        assert!(req.lastname.is_empty());
    }

    #[test]
    fn profile_response_shape() {
        let json = serde_json::to_value(ProfileResponse {
            firstname: "Alice".into(),
            email: "alice@example.com".into(),
        })
        .unwrap();
        assert_eq!(json["firstname"], "Alice");
        assert_eq!(json["email"], "alice@example.com");
    }
}
