//! Alerts API endpoints
//!
//! Endpoints:
//! - api_alerts: Filtered alert list with badge counts (JSON)
//! - api_alert_read / api_alerts_read_all: Read state
//! - api_alert_dismiss / api_alerts_delete_read: Removal
//! - api_alert_rules / api_alert_rule_toggle: Alert rules

use crate::error::ApiResult;
use crate::routes::{flag_param, search_param, selection_param, ChangeResponse};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use finboard_core::display::{alert_meta, severity_color, time_ago};
use finboard_core::{Alert, AlertCounts, AlertFilter, AlertRule, Dashboard};
use serde::Serialize;
use std::collections::HashMap;

/// Alert with its display metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub icon: &'static str,
    pub label: &'static str,
    pub severity_color: &'static str,
    pub time_ago: String,
}

impl AlertView {
    fn new(alert: Alert, now: DateTime<Utc>) -> Self {
        let meta = alert_meta(alert.kind);
        Self {
            icon: meta.icon,
            label: meta.label,
            severity_color: severity_color(alert.severity),
            time_ago: time_ago(alert.timestamp, now),
            alert,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsResponse {
    pub alerts: Vec<AlertView>,
    pub counts: AlertCounts,
}

fn change(dashboard: &Dashboard, affected: usize) -> Json<ChangeResponse> {
    let counts = dashboard.alert_counts();
    Json(ChangeResponse {
        affected,
        total: counts.total,
        unread_count: counts.unread,
    })
}

/// Get alerts filtered by `q`, `type`, `severity` and `unread`
pub async fn api_alerts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<AlertsResponse>> {
    let filter = AlertFilter::new()
        .search(search_param(&params))
        .kind(selection_param(&params, "type")?)
        .severity(selection_param(&params, "severity")?)
        .unread_only(flag_param(&params, "unread")?);

    let dashboard = state.dashboard.read().await;
    let now = Utc::now();
    let alerts = dashboard
        .filtered_alerts(&filter)
        .into_iter()
        .map(|a| AlertView::new(a, now))
        .collect();

    Ok(Json(AlertsResponse {
        alerts,
        counts: dashboard.alert_counts(),
    }))
}

pub async fn api_alert_read(State(state): State<AppState>, Path(id): Path<String>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let changed = dashboard.mark_alert_read(&id);
    change(&dashboard, changed as usize)
}

pub async fn api_alerts_read_all(State(state): State<AppState>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let marked = dashboard.mark_all_alerts_read();
    change(&dashboard, marked)
}

pub async fn api_alert_dismiss(State(state): State<AppState>, Path(id): Path<String>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let removed = dashboard.dismiss_alert(&id);
    change(&dashboard, removed as usize)
}

pub async fn api_alerts_delete_read(State(state): State<AppState>) -> Json<ChangeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let removed = dashboard.delete_read_alerts();
    change(&dashboard, removed)
}

pub async fn api_alert_rules(State(state): State<AppState>) -> Json<Vec<AlertRule>> {
    Json(state.dashboard.read().await.alert_rules().to_vec())
}

/// Flip a rule on or off; unknown rules are a 404 so the caller can refresh
pub async fn api_alert_rule_toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AlertRule>> {
    let mut dashboard = state.dashboard.write().await;
    let rule = dashboard.toggle_alert_rule(&id)?;
    Ok(Json(rule.clone()))
}
