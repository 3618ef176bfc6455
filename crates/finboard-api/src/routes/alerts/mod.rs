//! Alert routes - alert list, read state, alert rules
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{
    api_alert_dismiss,
    api_alert_read,
    api_alert_rule_toggle,
    api_alert_rules,
    api_alerts,
    api_alerts_delete_read,
    api_alerts_read_all,
};
