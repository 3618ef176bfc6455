//! Notifications API endpoints
//!
//! Endpoints:
//! - api_notifications: Filtered notification list (JSON)
//! - api_notification_read: Mark one notification read
//! - api_notifications_read_all: Mark every notification read
//! - api_notification_dismiss: Remove one notification
//! - api_notifications_delete_read: Remove every read notification

use crate::error::ApiResult;
use crate::routes::{flag_param, search_param, selection_param, ChangeResponse};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use finboard_core::display::{notification_meta, time_ago, time_ago_short};
use finboard_core::{Dashboard, Notification, NotificationFilter};
use serde::Serialize;
use std::collections::HashMap;

/// Notification with its display metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    pub icon: &'static str,
    pub label: &'static str,
    pub time_ago: String,
    pub time_ago_short: String,
}

impl NotificationView {
    fn new(notification: Notification, now: DateTime<Utc>) -> Self {
        let meta = notification_meta(notification.kind);
        Self {
            icon: meta.icon,
            label: meta.label,
            time_ago: time_ago(notification.timestamp, now),
            time_ago_short: time_ago_short(notification.timestamp, now),
            notification,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationView>,
    /// Size of the unfiltered collection
    pub total: usize,
    pub unread_count: usize,
}

fn change(dashboard: &Dashboard, affected: usize) -> Json<ChangeResponse> {
    Json(ChangeResponse {
        affected,
        total: dashboard.notifications().len(),
        unread_count: dashboard.unread_notifications(),
    })
}

/// Get notifications filtered by `q`, `type` and `unread`
pub async fn api_notifications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<NotificationsResponse>> {
    let filter = NotificationFilter::new()
        .search(search_param(&params))
        .kind(selection_param(&params, "type")?)
        .unread_only(flag_param(&params, "unread")?);

    let dashboard = state.dashboard.read().await;
    let now = Utc::now();
    let notifications = dashboard
        .filtered_notifications(&filter)
        .into_iter()
        .map(|n| NotificationView::new(n, now))
        .collect();

    Ok(Json(NotificationsResponse {
        notifications,
        total: dashboard.notifications().len(),
        unread_count: dashboard.unread_notifications(),
    }))
}

pub async fn api_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let changed = dashboard.mark_notification_read(&id);
    change(&dashboard, changed as usize)
}

pub async fn api_notifications_read_all(State(state): State<AppState>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let marked = dashboard.mark_all_notifications_read();
    change(&dashboard, marked)
}

pub async fn api_notification_dismiss(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let removed = dashboard.dismiss_notification(&id);
    change(&dashboard, removed as usize)
}

pub async fn api_notifications_delete_read(State(state): State<AppState>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let removed = dashboard.delete_read_notifications();
    change(&dashboard, removed)
}

#[cfg(test)]
mod tests {
    use crate::test_util::{send, test_app};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_list_with_metadata() {
        let (router, _) = test_app();
        let (status, body) = send(&router, Method::GET, "/api/notifications", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 6);
        assert_eq!(body["unreadCount"], 2);

        let first = &body["notifications"][0];
        assert_eq!(first["id"], "1");
        assert_eq!(first["type"], "budget");
        assert_eq!(first["isRead"], false);
        assert_eq!(first["icon"], "alert-circle");
        assert_eq!(first["timeAgo"], "30 minutes ago");
        assert_eq!(first["timeAgoShort"], "30m ago");
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (router, _) = test_app();
        let (_, body) = send(&router, Method::GET, "/api/notifications?unread=true", None).await;
        assert_eq!(body["notifications"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(body["total"], 6);

        let (_, body) = send(&router, Method::GET, "/api/notifications?type=budget&q=FOOD", None).await;
        let list = body["notifications"].as_array().cloned().unwrap_or_default();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], "1");

        let (status, body) = send(&router, Method::GET, "/api/notifications?type=weird", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap_or("").contains("weird"));
    }

    #[tokio::test]
    async fn test_mark_read_and_delete_read() {
        let (router, _) = test_app();

        let (status, body) = send(&router, Method::POST, "/api/notifications/1/read", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["affected"], 1);
        assert_eq!(body["unreadCount"], 1);

        // Unknown ids are a no-op
        let (status, body) = send(&router, Method::POST, "/api/notifications/99/read", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["affected"], 0);

        let (_, body) = send(&router, Method::DELETE, "/api/notifications/read", None).await;
        assert_eq!(body["affected"], 5);
        assert_eq!(body["total"], 1);
        assert_eq!(body["unreadCount"], 1);
    }

    #[tokio::test]
    async fn test_read_all_and_dismiss() {
        let (router, _) = test_app();

        let (_, body) = send(&router, Method::POST, "/api/notifications/read-all", None).await;
        assert_eq!(body["affected"], 2);
        assert_eq!(body["unreadCount"], 0);

        let (_, body) = send(&router, Method::DELETE, "/api/notifications/2", None).await;
        assert_eq!(body["affected"], 1);
        assert_eq!(body["total"], 5);

        let (_, body) = send(&router, Method::DELETE, "/api/notifications/2", None).await;
        assert_eq!(body["affected"], 0);
    }
}
