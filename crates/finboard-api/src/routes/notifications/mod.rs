//! Notification routes - list, read state, dismissal
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{
    api_notification_dismiss,
    api_notification_read,
    api_notifications,
    api_notifications_delete_read,
    api_notifications_read_all,
};
