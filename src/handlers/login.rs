use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::AppError;
use crate::handlers::found;
use crate::router::VaccineState;
use crate::service::password;

/// POST /login body. `password_hash` carries the raw password (wire name
/// kept for compatibility).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password_hash: String,
}

/// POST /login -> look the user up by username and verify the password.
/// Unknown user and wrong password are surfaced to the client as plain text
/// with a 200 status; only store failures become error responses.
pub async fn login(
    State(state): State<VaccineState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let users = state
        .store
        .find_users_by_username(&form.username)
        .await
        .inspect_err(|e| error!(error = %e, "login query failed"))?;

    let Some(user) = users.first() else {
        info!(username = %form.username, "login attempt for unknown user");
        return Ok("User does not exist".into_response());
    };

    if password::verify_password(form.password_hash, user.password_hash.clone()).await {
        info!(user_id = user.user_id, username = %form.username, "login succeeded");
        Ok(found("/vaccine"))
    } else {
        info!(username = %form.username, "login with invalid credentials");
        Ok("Invalid Credentials".into_response())
    }
}
