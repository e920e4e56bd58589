//! Page-fetch routes. Each serves one fixed static document, compiled in;
//! no store access, no side effects.

use axum::response::Html;

pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../pages/dashboard.html"))
}

pub async fn register() -> Html<&'static str> {
    Html(include_str!("../../pages/register.html"))
}

pub async fn login() -> Html<&'static str> {
    Html(include_str!("../../pages/login.html"))
}

pub async fn vaccine() -> Html<&'static str> {
    Html(include_str!("../../pages/vaccine.html"))
}

pub async fn centers() -> Html<&'static str> {
    Html(include_str!("../../pages/centers.html"))
}
