//! Core record models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AlertKind, NotificationKind, RuleKind, Severity, TransactionType};

/// Categories offered by the transaction category filter
pub const SUGGESTED_CATEGORIES: [&str; 6] =
    ["Food", "Transport", "Entertainment", "Shopping", "Income", "Housing"];

/// A record held in an ordered in-memory collection, identified by a unique id.
pub trait Record {
    type Id: PartialEq + ?Sized;

    fn id(&self) -> &Self::Id;
}

/// A record with read/unread state.
///
/// Read state only ever moves from unread to read.
pub trait Readable: Record {
    fn is_read(&self) -> bool;

    fn mark_read(&mut self);
}

/// Notification shown in the header panel and the notification list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Creation time, used for relative-age display
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    /// Signed amount, absent for non-monetary notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl Record for Notification {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Readable for Notification {
    fn is_read(&self) -> bool {
        self.is_read
    }

    fn mark_read(&mut self) {
        self.is_read = true;
    }
}

/// Transaction information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: u32,
    pub description: String,
    /// Signed amount: positive is inflow, negative is outflow
    pub amount: Decimal,
    /// Free-form category, normally one of `SUGGESTED_CATEGORIES`
    pub category: String,
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Whether the stored type agrees with the sign of the amount
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            TransactionType::Income => self.amount >= Decimal::ZERO,
            TransactionType::Expense => self.amount <= Decimal::ZERO,
        }
    }
}

impl Record for Transaction {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

/// Alert raised by an alert rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub action_required: bool,
}

impl Alert {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl Record for Alert {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Readable for Alert {
    fn is_read(&self) -> bool {
        self.is_read
    }

    fn mark_read(&mut self) {
        self.is_read = true;
    }
}

/// User-defined rule that produces alerts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Condition keyword, e.g. "exceeds", "daily_exceeds", "below", "reaches"
    pub condition: String,
    pub threshold: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_active: bool,
}

impl Record for AlertRule {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}
