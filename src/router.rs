use axum::Router;
use axum::routing::get;

use crate::db::VaccineStore;
use crate::handlers::{login, pages, records, register};

/// Shared handler state: just the injected store. Nothing else survives a
/// request, so every route stays stateless across requests.
#[derive(Clone)]
pub struct VaccineState {
    pub store: VaccineStore,
}

impl VaccineState {
    pub fn new(store: VaccineStore) -> Self {
        Self { store }
    }
}

/// Build the application router: five static pages, four form submissions.
pub fn vaccine_router(state: VaccineState) -> Router {
    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/register", get(pages::register).post(register::register))
        .route("/login", get(pages::login).post(login::login))
        .route("/vaccine", get(pages::vaccine).post(records::vaccine))
        .route("/centers", get(pages::centers).post(records::centers))
        .with_state(state)
}
