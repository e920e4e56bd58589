use axum::Form;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use tracing::{error, info};

use crate::db::NewUser;
use crate::error::AppError;
use crate::handlers::{empty_string_as_none, found};
use crate::router::VaccineState;
use crate::service::password;

/// POST /register body. The `password_hash` field name is kept for wire
/// compatibility with existing pages, but it carries the raw password; it is
/// hashed here before anything touches the store.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub contact_info: Option<String>,
}

/// POST /register -> hash the password, insert the user, send the client on
/// to /login. A duplicate email surfaces as 409.
pub async fn register(
    State(state): State<VaccineState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let password_hash = password::hash_password(form.password_hash).await?;

    let user_id = state
        .store
        .insert_user(NewUser {
            username: form.username.clone(),
            email: form.email,
            password_hash,
            contact_info: form.contact_info,
        })
        .await
        .inspect_err(|e| error!(error = %e, "failed to insert user"))?;

    info!(user_id, username = %form.username, "registered user");
    Ok(found("/login"))
}
