//! Fixed initial collections loaded when the dashboard starts

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Alert, AlertRule, Notification, Transaction};
use crate::types::{AlertKind, NotificationKind, RuleKind, Severity, TransactionType};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    timestamp: DateTime<Utc>,
    is_read: bool,
    amount: Option<Decimal>,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp,
        is_read,
        amount,
    }
}

/// Notifications, timestamped relative to `now`
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        notification(
            "1",
            NotificationKind::Budget,
            "Budget Alert",
            "You've spent 85% of your monthly food budget. Consider reducing dining out expenses.",
            now - Duration::minutes(30),
            false,
            Some(Decimal::new(1020, 0)),
        ),
        notification(
            "2",
            NotificationKind::Transaction,
            "Large Transaction",
            "New transaction detected: Online Shopping at Amazon for electronics.",
            now - Duration::hours(2),
            false,
            Some(Decimal::new(-29999, 2)),
        ),
        notification(
            "3",
            NotificationKind::Achievement,
            "Savings Goal",
            "Congratulations! You've reached 75% of your monthly savings goal. Keep it up!",
            now - Duration::days(1),
            true,
            Some(Decimal::new(1500, 0)),
        ),
        notification(
            "4",
            NotificationKind::Alert,
            "Unusual Activity",
            "Multiple transactions detected in Entertainment category. Review your spending.",
            now - Duration::days(3),
            true,
            None,
        ),
        notification(
            "5",
            NotificationKind::Transaction,
            "Salary Deposit",
            "Monthly salary has been deposited to your checking account.",
            now - Duration::days(7),
            true,
            Some(Decimal::new(4200, 0)),
        ),
        notification(
            "6",
            NotificationKind::Budget,
            "Budget Exceeded",
            "You've exceeded your transportation budget by $50 this month.",
            now - Duration::days(10),
            true,
            Some(Decimal::new(-50, 0)),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: u32,
    description: &str,
    amount: Decimal,
    category: &str,
    date: &str,
    kind: TransactionType,
    merchant: &str,
    account: &str,
) -> Transaction {
    Transaction {
        id,
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date: date.to_string(),
        kind,
        merchant: Some(merchant.to_string()),
        account: Some(account.to_string()),
    }
}

/// Transaction history, newest first
pub fn transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    vec![
        transaction(1, "Grocery Store", Decimal::new(-855, 1), "Food", "2024-01-15", Expense, "Whole Foods Market", "Chase Checking"),
        transaction(2, "Salary Deposit", Decimal::new(3500, 0), "Income", "2024-01-15", Income, "ABC Company", "Chase Checking"),
        transaction(3, "Gas Station", Decimal::new(-452, 1), "Transport", "2024-01-14", Expense, "Shell Gas Station", "Chase Checking"),
        transaction(4, "Netflix Subscription", Decimal::new(-1599, 2), "Entertainment", "2024-01-14", Expense, "Netflix Inc.", "Chase Credit Card"),
        transaction(5, "Online Shopping", Decimal::new(-12999, 2), "Shopping", "2024-01-13", Expense, "Amazon", "Chase Credit Card"),
        transaction(6, "Freelance Payment", Decimal::new(750, 0), "Income", "2024-01-12", Income, "XYZ Client", "Chase Checking"),
        transaction(7, "Coffee Shop", Decimal::new(-1245, 2), "Food", "2024-01-12", Expense, "Starbucks", "Chase Checking"),
        transaction(8, "Uber Ride", Decimal::new(-1875, 2), "Transport", "2024-01-11", Expense, "Uber Technologies", "Chase Credit Card"),
        transaction(9, "Rent Payment", Decimal::new(-1200, 0), "Housing", "2024-01-10", Expense, "Property Management Co.", "Chase Checking"),
        transaction(10, "Investment Dividend", Decimal::new(853, 1), "Income", "2024-01-09", Income, "Vanguard", "Investment Account"),
    ]
}

/// Alerts raised by the alert rules
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            kind: AlertKind::Budget,
            severity: Severity::High,
            title: "Budget Exceeded".to_string(),
            message: "You have exceeded your Food & Dining budget by $200 this month.".to_string(),
            timestamp: at(2024, 1, 15, 10, 30),
            is_read: false,
            category: Some("Food & Dining".to_string()),
            amount: Some(Decimal::new(200, 0)),
            action_required: true,
        },
        Alert {
            id: "2".to_string(),
            kind: AlertKind::Anomaly,
            severity: Severity::Medium,
            title: "Unusual Spending Pattern".to_string(),
            message: "Your shopping expenses are 150% higher than usual this week.".to_string(),
            timestamp: at(2024, 1, 15, 9, 15),
            is_read: false,
            category: Some("Shopping".to_string()),
            amount: None,
            action_required: false,
        },
        Alert {
            id: "3".to_string(),
            kind: AlertKind::Goal,
            severity: Severity::Low,
            title: "Savings Goal Progress".to_string(),
            message: "Great job! You're 75% towards your emergency fund goal.".to_string(),
            timestamp: at(2024, 1, 14, 16, 45),
            is_read: true,
            category: None,
            amount: Some(Decimal::new(7500, 0)),
            action_required: false,
        },
        Alert {
            id: "4".to_string(),
            kind: AlertKind::Bill,
            severity: Severity::Critical,
            title: "Upcoming Bill Payment".to_string(),
            message: "Your credit card payment of $1,250 is due in 2 days.".to_string(),
            timestamp: at(2024, 1, 13, 8, 0),
            is_read: false,
            category: None,
            amount: Some(Decimal::new(1250, 0)),
            action_required: true,
        },
        Alert {
            id: "5".to_string(),
            kind: AlertKind::Income,
            severity: Severity::Low,
            title: "Income Received".to_string(),
            message: "Salary deposit of $3,500 has been processed.".to_string(),
            timestamp: at(2024, 1, 12, 12, 0),
            is_read: true,
            category: None,
            amount: Some(Decimal::new(3500, 0)),
            action_required: false,
        },
    ]
}

fn rule(id: &str, name: &str, kind: RuleKind, condition: &str, threshold: i64, category: Option<&str>) -> AlertRule {
    AlertRule {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        condition: condition.to_string(),
        threshold: Decimal::new(threshold, 0),
        category: category.map(str::to_string),
        is_active: true,
    }
}

/// Alert rules, all active initially
pub fn alert_rules() -> Vec<AlertRule> {
    vec![
        rule("1", "Food Budget Alert", RuleKind::Budget, "exceeds", 1000, Some("Food & Dining")),
        rule("2", "High Spending Day", RuleKind::Spending, "daily_exceeds", 200, None),
        rule("3", "Low Income Month", RuleKind::Income, "below", 3000, None),
        rule("4", "Savings Goal Milestone", RuleKind::Goal, "reaches", 10000, None),
    ]
}
