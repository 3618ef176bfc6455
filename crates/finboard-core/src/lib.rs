//! Core dashboard state and business logic

pub mod aggregate;
pub mod chat;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod ops;
pub mod seed;
pub mod theme;
pub mod types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use aggregate::{AlertCounts, CategoryBreakdown, TransactionSummary};
pub use chat::{ChatMessage, ChatRole, ChatSession, ReplyTask, SharedChatSession};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use filter::{AlertFilter, NotificationFilter, RecordFilter, Selection, TransactionFilter};
pub use models::{Alert, AlertRule, Notification, Readable, Record, Transaction};
pub use theme::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PreferenceStoreRef, ThemeContext};
pub use types::{AlertKind, NotificationKind, RuleKind, Severity, Theme, TransactionType};

/// All collections shown on the dashboard.
///
/// Every mutation runs one of the pure [`ops`] functions over the owned
/// collection and stores the result. Mutating methods report whether
/// anything changed; only single-record lookups fail on an unknown id.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    notifications: Vec<Notification>,
    transactions: Vec<Transaction>,
    alerts: Vec<Alert>,
    alert_rules: Vec<AlertRule>,
}

/// Headline numbers for the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub notifications: usize,
    pub unread_notifications: usize,
    pub alerts: AlertCounts,
    pub active_rules: usize,
    pub transactions: TransactionSummary,
}

impl Dashboard {
    /// Dashboard loaded with the seed collections
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            notifications: seed::notifications(now),
            transactions: seed::transactions(),
            alerts: seed::alerts(),
            alert_rules: seed::alert_rules(),
        }
    }

    /// Replace every collection with fresh seed data
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
        log::info!("Dashboard reset to seed data");
    }

    // ==================== Notifications ====================

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn filtered_notifications(&self, filter: &NotificationFilter) -> Vec<Notification> {
        filter.apply(&self.notifications)
    }

    pub fn unread_notifications(&self) -> usize {
        aggregate::unread_count(&self.notifications)
    }

    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        let before = self.unread_notifications();
        self.notifications = ops::mark_as_read(std::mem::take(&mut self.notifications), id);
        let changed = self.unread_notifications() != before;
        log::debug!("Mark notification {} read (changed: {})", id, changed);
        changed
    }

    /// Returns how many notifications were newly marked read
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let before = self.unread_notifications();
        self.notifications = ops::mark_all_as_read(std::mem::take(&mut self.notifications));
        log::debug!("Marked {} notifications read", before);
        before
    }

    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications = ops::dismiss(std::mem::take(&mut self.notifications), id);
        let removed = self.notifications.len() != before;
        log::debug!("Dismiss notification {} (removed: {})", id, removed);
        removed
    }

    /// Returns how many notifications were removed
    pub fn delete_read_notifications(&mut self) -> usize {
        let before = self.notifications.len();
        self.notifications = ops::delete_all_read(std::mem::take(&mut self.notifications));
        let removed = before - self.notifications.len();
        log::debug!("Deleted {} read notifications", removed);
        removed
    }

    // ==================== Transactions ====================

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: u32) -> CoreResult<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found("Transaction", id))
    }

    pub fn filtered_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter.apply(&self.transactions)
    }

    /// Totals over the full collection, independent of any filter
    pub fn transaction_summary(&self) -> TransactionSummary {
        aggregate::summarize(&self.transactions)
    }

    pub fn expense_breakdown(&self) -> Vec<CategoryBreakdown> {
        aggregate::expense_breakdown(&self.transactions)
    }

    // ==================== Alerts ====================

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn filtered_alerts(&self, filter: &AlertFilter) -> Vec<Alert> {
        filter.apply(&self.alerts)
    }

    pub fn alert_counts(&self) -> AlertCounts {
        aggregate::alert_counts(&self.alerts)
    }

    pub fn mark_alert_read(&mut self, id: &str) -> bool {
        let before = aggregate::unread_count(&self.alerts);
        self.alerts = ops::mark_as_read(std::mem::take(&mut self.alerts), id);
        let changed = aggregate::unread_count(&self.alerts) != before;
        log::debug!("Mark alert {} read (changed: {})", id, changed);
        changed
    }

    pub fn mark_all_alerts_read(&mut self) -> usize {
        let before = aggregate::unread_count(&self.alerts);
        self.alerts = ops::mark_all_as_read(std::mem::take(&mut self.alerts));
        log::debug!("Marked {} alerts read", before);
        before
    }

    pub fn dismiss_alert(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts = ops::dismiss(std::mem::take(&mut self.alerts), id);
        let removed = self.alerts.len() != before;
        log::debug!("Dismiss alert {} (removed: {})", id, removed);
        removed
    }

    pub fn delete_read_alerts(&mut self) -> usize {
        let before = self.alerts.len();
        self.alerts = ops::delete_all_read(std::mem::take(&mut self.alerts));
        let removed = before - self.alerts.len();
        log::debug!("Deleted {} read alerts", removed);
        removed
    }

    pub fn alert_rules(&self) -> &[AlertRule] {
        &self.alert_rules
    }

    /// Flip a rule on or off. The rule list is untouched when `id` is unknown.
    pub fn toggle_alert_rule(&mut self, id: &str) -> CoreResult<&AlertRule> {
        self.alert_rules = ops::toggle_rule(std::mem::take(&mut self.alert_rules), id);
        let rule = self
            .alert_rules
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found("Alert rule", id))?;
        log::info!("Alert rule {} is now {}", id, if rule.is_active { "active" } else { "paused" });
        Ok(rule)
    }

    // ==================== Summary ====================

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            notifications: self.notifications.len(),
            unread_notifications: self.unread_notifications(),
            alerts: self.alert_counts(),
            active_rules: self.alert_rules.iter().filter(|r| r.is_active).count(),
            transactions: self.transaction_summary(),
        }
    }
}

// ==================== Tests ====================
