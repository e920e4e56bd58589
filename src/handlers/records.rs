use axum::Form;
use axum::extract::State;
use axum::response::Response;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use crate::db::{NewCenter, NewVaccination};
use crate::error::AppError;
use crate::handlers::{empty_string_as_none, found};
use crate::router::VaccineState;

/// POST /vaccine body. Dates arrive as `YYYY-MM-DD` strings from the date
/// inputs; blanks become NULL.
#[derive(Debug, Deserialize)]
pub struct VaccineForm {
    pub vaccine_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date_administered: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CenterForm {
    pub centername: String,
    pub address: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub services_offered: Option<String>,
}

/// POST /vaccine -> record an administered dose, then send the client on to
/// /centers. No user association is captured (see DESIGN.md).
pub async fn vaccine(
    State(state): State<VaccineState>,
    Form(form): Form<VaccineForm>,
) -> Result<Response, AppError> {
    let vaccination_id = state
        .store
        .insert_vaccination(NewVaccination {
            vaccine_name: form.vaccine_name.clone(),
            date_administered: form.date_administered,
            provider: form.provider,
            next_due_date: form.next_due_date,
        })
        .await
        .inspect_err(|e| error!(error = %e, "failed to insert vaccination"))?;

    info!(vaccination_id, vaccine_name = %form.vaccine_name, "recorded vaccination");
    Ok(found("/centers"))
}

/// POST /centers -> record a provider location, then redirect to /view.
/// /view has no page anywhere in the system; the redirect target is kept
/// as-is for compatibility (see DESIGN.md).
pub async fn centers(
    State(state): State<VaccineState>,
    Form(form): Form<CenterForm>,
) -> Result<Response, AppError> {
    let center_id = state
        .store
        .insert_center(NewCenter {
            centername: form.centername.clone(),
            address: form.address,
            contact_info: form.contact_info,
            services_offered: form.services_offered,
        })
        .await
        .inspect_err(|e| error!(error = %e, "failed to insert center"))?;

    info!(center_id, centername = %form.centername, "recorded center");
    Ok(found("/view"))
}
