//! JSON HTTP API for the finance dashboard
//!
//! Routes are organized into modules:
//! - routes::notifications: Notification list and read state
//! - routes::transactions: Transaction list, lookup, totals
//! - routes::alerts: Alerts and alert rules
//! - routes::theme: Theme preference
//! - routes::chat: Finance assistant chat

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_util;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use finboard_config::Config;
use finboard_core::{ChatSession, Dashboard, DashboardSummary, PreferenceStoreRef, ReplyTask, SharedChatSession, ThemeContext};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ApiResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub theme: Arc<RwLock<ThemeContext>>,
    pub preferences: PreferenceStoreRef,
    pub chat: SharedChatSession,
    /// Bot replies not yet delivered
    pub replies: Arc<Mutex<Vec<ReplyTask>>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, dashboard: Dashboard, theme: ThemeContext, preferences: PreferenceStoreRef) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            theme: Arc::new(RwLock::new(theme)),
            preferences,
            chat: Arc::new(RwLock::new(ChatSession::new())),
            replies: Arc::new(Mutex::new(Vec::new())),
            config,
        }
    }

    /// Cancel every reply still in flight
    pub async fn cancel_replies(&self) {
        let mut replies = self.replies.lock().await;
        cancel_all(&mut replies).await;
    }

    /// Cancel pending replies and start a new conversation.
    ///
    /// The replies lock is held across both steps; senders take it before
    /// touching the session, so no message or reply can straddle the swap.
    pub async fn reset_chat(&self) {
        let mut replies = self.replies.lock().await;
        cancel_all(&mut replies).await;
        *self.chat.write().await = ChatSession::new();
    }
}

async fn cancel_all(replies: &mut Vec<ReplyTask>) {
    for task in replies.drain(..) {
        task.cancel().await;
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::alerts::{
        api_alert_dismiss, api_alert_read, api_alert_rule_toggle, api_alert_rules, api_alerts,
        api_alerts_delete_read, api_alerts_read_all,
    };
    use routes::chat::{api_chat, api_send_chat};
    use routes::notifications::{
        api_notification_dismiss, api_notification_read, api_notifications, api_notifications_delete_read,
        api_notifications_read_all,
    };
    use routes::theme::{api_set_theme, api_theme, api_toggle_theme};
    use routes::transactions::{
        api_transaction_breakdown, api_transaction_categories, api_transaction_detail, api_transactions,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/reset", post(api_reset))
        // Notifications
        .route("/api/notifications", get(api_notifications))
        .route("/api/notifications/read-all", post(api_notifications_read_all))
        .route("/api/notifications/read", delete(api_notifications_delete_read))
        .route("/api/notifications/:id", delete(api_notification_dismiss))
        .route("/api/notifications/:id/read", post(api_notification_read))
        // Transactions
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/categories", get(api_transaction_categories))
        .route("/api/transactions/breakdown", get(api_transaction_breakdown))
        .route("/api/transactions/:id", get(api_transaction_detail))
        // Alerts
        .route("/api/alerts", get(api_alerts))
        .route("/api/alerts/read-all", post(api_alerts_read_all))
        .route("/api/alerts/read", delete(api_alerts_delete_read))
        .route("/api/alerts/rules", get(api_alert_rules))
        .route("/api/alerts/rules/:id/toggle", post(api_alert_rule_toggle))
        .route("/api/alerts/:id", delete(api_alert_dismiss))
        .route("/api/alerts/:id/read", post(api_alert_read))
        // Preferences and chat
        .route("/api/theme", get(api_theme).put(api_set_theme))
        .route("/api/theme/toggle", post(api_toggle_theme))
        .route("/api/chat", get(api_chat).post(api_send_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get dashboard summary (JSON API)
async fn api_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.dashboard.read().await.summary())
}

/// Re-seed every collection and start a fresh chat
async fn api_reset(State(state): State<AppState>) -> Json<DashboardSummary> {
    state.reset_chat().await;

    let mut dashboard = state.dashboard.write().await;
    dashboard.reset(Utc::now());
    Json(dashboard.summary())
}

/// Start the HTTP server and serve until Ctrl+C or SIGTERM
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let router = create_router(state.clone());

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Finboard server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /api/notifications (Notification list)");
    log::info!("  - /api/transactions (Transaction list)");
    log::info!("  - /api/alerts (Alerts and rules)");
    log::info!("  - /api/theme, /api/chat (Preferences and assistant)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.cancel_replies().await;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => log::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received");
}
