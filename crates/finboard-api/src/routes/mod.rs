//! Route modules for the API server
//!
//! - notifications: Notification list, read state, dismissal
//! - transactions: Transaction list, lookup, totals
//! - alerts: Alerts and alert rules
//! - theme: Theme preference
//! - chat: Finance assistant chat
//!
//! List endpoints read their filters from query parameters; `all` or an
//! empty value leaves a selection unrestricted.

pub mod alerts;
pub mod chat;
pub mod notifications;
pub mod theme;
pub mod transactions;

use crate::error::{ApiError, ApiResult};
use finboard_core::Selection;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Outcome of a list mutation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResponse {
    /// Records marked read or removed
    pub affected: usize,
    pub total: usize,
    pub unread_count: usize,
}

/// Free-text search term, empty when absent
pub(crate) fn search_param(params: &HashMap<String, String>) -> String {
    params.get("q").cloned().unwrap_or_default()
}

/// Parse an optional selection parameter
pub(crate) fn selection_param<T>(params: &HashMap<String, String>, key: &str) -> ApiResult<Selection<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match params.get(key) {
        Some(value) => value
            .parse::<Selection<T>>()
            .map_err(|e| ApiError::bad_request(e.to_string())),
        None => Ok(Selection::All),
    }
}

/// `true`/`1` switch a flag on; absent means off
pub(crate) fn flag_param(params: &HashMap<String, String>, key: &str) -> ApiResult<bool> {
    match params.get(key).map(|s| s.trim().to_lowercase()) {
        None => Ok(false),
        Some(value) => match value.as_str() {
            "" | "false" | "0" => Ok(false),
            "true" | "1" => Ok(true),
            _ => Err(ApiError::bad_request(format!("Invalid value for {}: {}", key, value))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_core::NotificationKind;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_selection_param() {
        let p = params(&[("type", "budget"), ("other", "all")]);
        assert_eq!(
            selection_param::<NotificationKind>(&p, "type").unwrap(),
            Selection::Only(NotificationKind::Budget)
        );
        assert_eq!(selection_param::<NotificationKind>(&p, "other").unwrap(), Selection::All);
        assert_eq!(selection_param::<NotificationKind>(&p, "missing").unwrap(), Selection::All);

        let p = params(&[("type", "bogus")]);
        assert!(selection_param::<NotificationKind>(&p, "type").is_err());
    }

    #[test]
    fn test_flag_param() {
        assert!(!flag_param(&params(&[]), "unread").unwrap());
        assert!(flag_param(&params(&[("unread", "true")]), "unread").unwrap());
        assert!(flag_param(&params(&[("unread", "1")]), "unread").unwrap());
        assert!(!flag_param(&params(&[("unread", "false")]), "unread").unwrap());
        assert!(flag_param(&params(&[("unread", "maybe")]), "unread").is_err());
    }
}
