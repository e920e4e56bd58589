use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `users` row. `password_hash` holds an argon2 PHC string, never a
/// plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub contact_info: Option<String>,
}

/// A `vaccinations` row. `user_id` is nullable; the vaccine form never
/// supplies one (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Vaccination {
    pub vaccination_id: i32,
    pub user_id: Option<i32>,
    pub vaccine_name: String,
    pub date_administered: Option<NaiveDate>,
    pub provider: Option<String>,
    pub next_due_date: Option<NaiveDate>,
}

/// A `centers` row. The DECIMAL coordinate columns exist only in the DDL;
/// no route reads or writes them, so they are not selected here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Center {
    pub center_id: i32,
    pub centername: String,
    pub address: String,
    pub contact_info: Option<String>,
    pub services_offered: Option<String>,
}

/// Insert payload for `users`; `password_hash` must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub contact_info: Option<String>,
}

/// Insert payload for `vaccinations`. No user association is captured.
#[derive(Debug, Clone)]
pub struct NewVaccination {
    pub vaccine_name: String,
    pub date_administered: Option<NaiveDate>,
    pub provider: Option<String>,
    pub next_due_date: Option<NaiveDate>,
}

/// Insert payload for `centers`.
#[derive(Debug, Clone)]
pub struct NewCenter {
    pub centername: String,
    pub address: String,
    pub contact_info: Option<String>,
    pub services_offered: Option<String>,
}
