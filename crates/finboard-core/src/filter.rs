//! Multi-predicate filtering over record collections
//!
//! A record passes a filter when it satisfies every active predicate.
//! Filtering produces a new view and never reorders the input.

use finboard_utils::contains_lowercase;

use crate::models::{Alert, Notification, Transaction};
use crate::types::{AlertKind, NotificationKind, Severity, TransactionType};

/// Either no restriction, or an exact value to match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: std::str::FromStr> std::str::FromStr for Selection<T> {
    type Err = T::Err;

    /// `"all"` (any case) and the empty string select everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Free-text search over a record's descriptive fields
pub trait Searchable {
    /// `needle_lower` is already lowercased; an empty needle matches.
    fn matches_search(&self, needle_lower: &str) -> bool;
}

impl Searchable for Notification {
    fn matches_search(&self, needle_lower: &str) -> bool {
        contains_lowercase(&self.title, needle_lower)
            || contains_lowercase(&self.message, needle_lower)
    }
}

impl Searchable for Transaction {
    fn matches_search(&self, needle_lower: &str) -> bool {
        contains_lowercase(&self.description, needle_lower)
            || self
                .merchant
                .as_deref()
                .map_or(false, |m| contains_lowercase(m, needle_lower))
            || contains_lowercase(&self.category, needle_lower)
    }
}

impl Searchable for Alert {
    fn matches_search(&self, needle_lower: &str) -> bool {
        contains_lowercase(&self.title, needle_lower)
            || contains_lowercase(&self.message, needle_lower)
            || self
                .category
                .as_deref()
                .map_or(false, |c| contains_lowercase(c, needle_lower))
    }
}

/// A conjunction of predicates over records of type `R`
pub trait RecordFilter<R: Clone> {
    fn matches(&self, record: &R) -> bool;

    /// Records passing the filter, in input order
    fn apply(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// Number of records passing the filter
    fn count(&self, records: &[R]) -> usize {
        records.iter().filter(|r| self.matches(r)).count()
    }
}

/// Filter for the notification list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    pub search: String,
    pub kind: Selection<NotificationKind>,
    pub unread_only: bool,
}

impl NotificationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn kind(mut self, kind: Selection<NotificationKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn unread_only(mut self, unread_only: bool) -> Self {
        self.unread_only = unread_only;
        self
    }
}

impl RecordFilter<Notification> for NotificationFilter {
    fn matches(&self, n: &Notification) -> bool {
        n.matches_search(&self.search.to_lowercase())
            && self.kind.admits(&n.kind)
            && (!self.unread_only || !n.is_read)
    }
}

/// Filter for the transaction list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    /// Exact, case-sensitive category match
    pub category: Selection<String>,
    pub kind: Selection<TransactionType>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: Selection<String>) -> Self {
        self.category = category;
        self
    }

    pub fn kind(mut self, kind: Selection<TransactionType>) -> Self {
        self.kind = kind;
        self
    }
}

impl RecordFilter<Transaction> for TransactionFilter {
    fn matches(&self, t: &Transaction) -> bool {
        t.matches_search(&self.search.to_lowercase())
            && self.category.admits(&t.category)
            && self.kind.admits(&t.kind)
    }
}

/// Filter for the alert list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFilter {
    pub search: String,
    pub kind: Selection<AlertKind>,
    pub severity: Selection<Severity>,
    pub unread_only: bool,
}

impl AlertFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn kind(mut self, kind: Selection<AlertKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn severity(mut self, severity: Selection<Severity>) -> Self {
        self.severity = severity;
        self
    }

    pub fn unread_only(mut self, unread_only: bool) -> Self {
        self.unread_only = unread_only;
        self
    }
}

impl RecordFilter<Alert> for AlertFilter {
    fn matches(&self, a: &Alert) -> bool {
        a.matches_search(&self.search.to_lowercase())
            && self.kind.admits(&a.kind)
            && self.severity.admits(&a.severity)
            && (!self.unread_only || !a.is_read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::Utc;

    fn notification_ids(records: &[Notification]) -> Vec<&str> {
        records.iter().map(|n| n.id.as_str()).collect()
    }

    fn transaction_ids(records: &[Transaction]) -> Vec<u32> {
        records.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_selection_from_str() {
        assert_eq!("all".parse::<Selection<NotificationKind>>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<Selection<NotificationKind>>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection<NotificationKind>>().unwrap(), Selection::All);
        assert_eq!(
            "budget".parse::<Selection<NotificationKind>>().unwrap(),
            Selection::Only(NotificationKind::Budget)
        );
        assert!("bogus".parse::<Selection<NotificationKind>>().is_err());
        assert_eq!(
            "Food".parse::<Selection<String>>().unwrap(),
            Selection::Only("Food".to_string())
        );
        assert_eq!(Selection::Only(Severity::High).to_string(), "high");
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let notifications = seed::notifications(Utc::now());
        assert_eq!(NotificationFilter::default().apply(&notifications), notifications);

        let transactions = seed::transactions();
        assert_eq!(TransactionFilter::default().apply(&transactions), transactions);

        let alerts = seed::alerts();
        assert_eq!(AlertFilter::default().apply(&alerts), alerts);
    }

    #[test]
    fn test_empty_collection() {
        let notifications: Vec<Notification> = Vec::new();
        let transactions: Vec<Transaction> = Vec::new();
        assert!(NotificationFilter::new().search("budget").apply(&notifications).is_empty());
        assert!(TransactionFilter::new().apply(&transactions).is_empty());
    }

    #[test]
    fn test_notification_search_scenario() {
        let notifications: Vec<Notification> = seed::notifications(Utc::now())
            .into_iter()
            .filter(|n| n.id == "1")
            .collect();
        assert_eq!(notifications[0].title, "Budget Alert");

        let hits = NotificationFilter::new().search("budget").apply(&notifications);
        assert_eq!(notification_ids(&hits), vec!["1"]);

        let misses = NotificationFilter::new().search("zzz").apply(&notifications);
        assert!(misses.is_empty());
    }

    #[test]
    fn test_notification_search_covers_message() {
        let notifications = seed::notifications(Utc::now());
        let hits = NotificationFilter::new().search("AMAZON").apply(&notifications);
        assert_eq!(notification_ids(&hits), vec!["2"]);
    }

    #[test]
    fn test_notification_predicates_are_conjunctive() {
        let notifications = seed::notifications(Utc::now());

        let budget = NotificationFilter::new()
            .kind(Selection::Only(NotificationKind::Budget))
            .apply(&notifications);
        assert_eq!(notification_ids(&budget), vec!["1", "6"]);

        let unread_budget = NotificationFilter::new()
            .kind(Selection::Only(NotificationKind::Budget))
            .unread_only(true)
            .apply(&notifications);
        assert_eq!(notification_ids(&unread_budget), vec!["1"]);

        let unread = NotificationFilter::new().unread_only(true).apply(&notifications);
        assert_eq!(notification_ids(&unread), vec!["1", "2"]);

        let none = NotificationFilter::new()
            .search("salary")
            .unread_only(true)
            .apply(&notifications);
        assert!(none.is_empty());
    }

    #[test]
    fn test_transaction_search_fields() {
        let transactions = seed::transactions();

        // description
        let hits = TransactionFilter::new().search("netflix").apply(&transactions);
        assert_eq!(transaction_ids(&hits), vec![4]);

        // merchant
        let hits = TransactionFilter::new().search("starbucks").apply(&transactions);
        assert_eq!(transaction_ids(&hits), vec![7]);

        // category
        let hits = TransactionFilter::new().search("housing").apply(&transactions);
        assert_eq!(transaction_ids(&hits), vec![9]);
    }

    #[test]
    fn test_transaction_category_and_type() {
        let transactions = seed::transactions();

        let food = TransactionFilter::new()
            .category(Selection::Only("Food".to_string()))
            .apply(&transactions);
        assert_eq!(transaction_ids(&food), vec![1, 7]);

        // Category match is exact
        let lower = TransactionFilter::new()
            .category(Selection::Only("food".to_string()))
            .apply(&transactions);
        assert!(lower.is_empty());

        let income = TransactionFilter::new()
            .kind(Selection::Only(TransactionType::Income))
            .apply(&transactions);
        assert_eq!(transaction_ids(&income), vec![2, 6, 10]);

        let filter = TransactionFilter::new()
            .search("chase")
            .kind(Selection::Only(TransactionType::Expense));
        // "chase" is only in the account field, which is not searched
        assert_eq!(filter.count(&transactions), 0);
    }

    #[test]
    fn test_alert_filter() {
        let alerts = seed::alerts();

        let critical = AlertFilter::new()
            .severity(Selection::Only(Severity::Critical))
            .apply(&alerts);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, "4");

        let unread = AlertFilter::new().unread_only(true).apply(&alerts);
        assert_eq!(unread.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["1", "2", "4"]);

        let shopping = AlertFilter::new().search("shopping").apply(&alerts);
        assert_eq!(shopping.len(), 1);
        assert_eq!(shopping[0].kind, AlertKind::Anomaly);
    }

    #[test]
    fn test_transaction_without_merchant_is_searchable() {
        let transactions = vec![Transaction {
            id: 42,
            description: "Cash Withdrawal".to_string(),
            amount: rust_decimal::Decimal::new(-4000, 2),
            category: "Other".to_string(),
            date: "2024-01-20".to_string(),
            kind: TransactionType::Expense,
            merchant: None,
            account: None,
        }];

        let hits = TransactionFilter::new().search("withdrawal").apply(&transactions);
        assert_eq!(transaction_ids(&hits), vec![42]);
        let hits = TransactionFilter::new().search("OTHER").apply(&transactions);
        assert_eq!(transaction_ids(&hits), vec![42]);
        assert_eq!(TransactionFilter::new().search("starbucks").count(&transactions), 0);
    }

    #[test]
    fn test_alert_without_category_is_searchable() {
        let alerts = vec![Alert {
            id: "9".to_string(),
            kind: AlertKind::Bill,
            severity: Severity::Low,
            title: "Insurance Renewal".to_string(),
            message: "Your policy renews next week".to_string(),
            timestamp: Utc::now(),
            is_read: false,
            category: None,
            amount: None,
            action_required: false,
        }];

        let hits = AlertFilter::new().search("renewal").apply(&alerts);
        assert_eq!(hits.len(), 1);
        let hits = AlertFilter::new().search("policy").apply(&alerts);
        assert_eq!(hits.len(), 1);
        assert!(AlertFilter::new().search("housing").apply(&alerts).is_empty());
    }
}
