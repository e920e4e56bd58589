pub mod login;
pub mod pages;
pub mod records;
pub mod register;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// 302 Found redirect, the status the original service's clients expect.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Browsers submit blank form inputs as empty strings; treat those as absent
/// so optional columns store NULL and optional dates parse cleanly.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        note: Option<String>,
    }

    #[test]
    fn blank_fields_deserialize_to_none() {
        let probe: Probe = serde_urlencoded::from_str("date=&note=").unwrap();
        assert_eq!(probe.date, None);
        assert_eq!(probe.note, None);

        let probe: Probe = serde_urlencoded::from_str("").unwrap();
        assert_eq!(probe.date, None);
        assert_eq!(probe.note, None);
    }

    #[test]
    fn populated_fields_parse() {
        let probe: Probe = serde_urlencoded::from_str("date=2024-03-01&note=first+dose").unwrap();
        assert_eq!(probe.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(probe.note.as_deref(), Some("first dose"));
    }
}
