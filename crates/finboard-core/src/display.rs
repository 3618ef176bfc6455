//! Presentation metadata: icons, labels, colours, relative ages, money formatting

use chrono::{DateTime, Utc};
use finboard_config::CurrencyConfig;
use finboard_utils::group_thousands;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{AlertKind, NotificationKind, Severity};

/// Icon name and label for a record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMeta {
    pub icon: &'static str,
    pub label: &'static str,
}

const BUDGET: DisplayMeta = DisplayMeta { icon: "alert-circle", label: "Budget" };
const TRANSACTION: DisplayMeta = DisplayMeta { icon: "dollar-sign", label: "Transaction" };
const ACHIEVEMENT: DisplayMeta = DisplayMeta { icon: "trending-up", label: "Achievement" };
const ALERT: DisplayMeta = DisplayMeta { icon: "credit-card", label: "Alert" };

pub fn notification_meta(kind: NotificationKind) -> DisplayMeta {
    match kind {
        NotificationKind::Budget => BUDGET,
        NotificationKind::Transaction => TRANSACTION,
        NotificationKind::Achievement => ACHIEVEMENT,
        NotificationKind::Alert => ALERT,
    }
}

pub fn alert_meta(kind: AlertKind) -> DisplayMeta {
    match kind {
        AlertKind::Budget => DisplayMeta { icon: "dollar-sign", label: "Budget" },
        AlertKind::Anomaly => DisplayMeta { icon: "alert-triangle", label: "Anomaly" },
        AlertKind::Goal => DisplayMeta { icon: "trending-up", label: "Goal" },
        AlertKind::Bill => DisplayMeta { icon: "calendar", label: "Bill" },
        AlertKind::Income => DisplayMeta { icon: "zap", label: "Income" },
    }
}

/// CSS colour for a severity badge
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "var(--error)",
        Severity::High => "#ff6b35",
        Severity::Medium => "var(--warning)",
        Severity::Low => "var(--info)",
    }
}

const CATEGORY_ICONS: [(&str, &str); 6] = [
    ("food", "coffee"),
    ("transport", "car"),
    ("entertainment", "gamepad-2"),
    ("shopping", "shopping-bag"),
    ("income", "trending-up"),
    ("housing", "home"),
];

/// Icon for a transaction category; unknown categories get a generic icon
pub fn category_icon(category: &str) -> &'static str {
    let category = category.to_lowercase();
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or("dollar-sign")
}

fn minutes_between(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - timestamp).num_minutes().max(0)
}

/// Long relative age, e.g. "30 minutes ago", "1 hour ago", "3 days ago"
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = minutes_between(timestamp, now);
    if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        format!("{} {} ago", hours, if hours == 1 { "hour" } else { "hours" })
    } else {
        let days = minutes / 1440;
        format!("{} {} ago", days, if days == 1 { "day" } else { "days" })
    }
}

/// Compact relative age for the header panel, e.g. "30m ago", "2h ago", "1d ago"
pub fn time_ago_short(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = minutes_between(timestamp, now);
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

/// Format a signed amount as money, e.g. `-$1,200.00`
pub fn format_amount(amount: Decimal, currency: &CurrencyConfig) -> String {
    let places = currency.decimal_places as usize;
    // Sign comes from the rounded value so amounts that round to zero print unsigned
    let rounded = amount.round_dp(currency.decimal_places);
    let magnitude = format!("{:.*}", places, rounded.abs());
    let (integer, fraction) = match magnitude.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (magnitude.as_str(), None),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let grouped = group_thousands(integer, &currency.thousands_separator);
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, currency.symbol, grouped, fraction),
        None => format!("{}{}{}", sign, currency.symbol, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_every_kind_has_distinct_icon() {
        let icons: std::collections::HashSet<_> = NotificationKind::ALL
            .iter()
            .map(|k| notification_meta(*k).icon)
            .collect();
        assert_eq!(icons.len(), NotificationKind::ALL.len());
        assert_eq!(notification_meta(NotificationKind::Budget).label, "Budget");
        assert_eq!(alert_meta(AlertKind::Bill).icon, "calendar");
    }

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("Food"), "coffee");
        assert_eq!(category_icon("HOUSING"), "home");
        assert_eq!(category_icon("Healthcare"), "dollar-sign");
    }

    #[test]
    fn test_severity_color() {
        assert_eq!(severity_color(Severity::Critical), "var(--error)");
        assert_eq!(severity_color(Severity::High), "#ff6b35");
    }

    #[test]
    fn test_time_ago() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::minutes(30), now), "30 minutes ago");
        assert_eq!(time_ago(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::days(10), now), "10 days ago");
        // Future timestamps clamp to zero
        assert_eq!(time_ago(now + Duration::minutes(5), now), "0 minutes ago");
    }

    #[test]
    fn test_time_ago_short() {
        let now = Utc::now();
        assert_eq!(time_ago_short(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago_short(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago_short(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_format_amount() {
        let currency = CurrencyConfig::default();
        assert_eq!(format_amount(Decimal::new(1245000, 2), &currency), "$12,450.00");
        assert_eq!(format_amount(Decimal::new(-1200, 0), &currency), "-$1,200.00");
        assert_eq!(format_amount(Decimal::new(-855, 1), &currency), "-$85.50");
        assert_eq!(format_amount(Decimal::ZERO, &currency), "$0.00");
        assert_eq!(format_amount(Decimal::new(29999, 2), &currency), "$299.99");
    }

    #[test]
    fn test_format_amount_rounding_to_zero_drops_sign() {
        let currency = CurrencyConfig::default();
        assert_eq!(format_amount(Decimal::new(-1, 3), &currency), "$0.00");
        assert_eq!(format_amount(Decimal::new(-4, 3), &currency), "$0.00");
        assert_eq!(format_amount(Decimal::new(-6, 3), &currency), "-$0.01");
        assert_eq!(format_amount(Decimal::new(-4, 1), &CurrencyConfig { decimal_places: 0, ..currency }), "$0");
    }

    #[test]
    fn test_format_amount_custom_currency() {
        let currency = CurrencyConfig {
            symbol: "€".to_string(),
            decimal_places: 0,
            thousands_separator: ".".to_string(),
        };
        assert_eq!(format_amount(Decimal::new(43353, 1), &currency), "€4.335");
    }
}
