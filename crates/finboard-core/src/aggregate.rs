//! Summary values derived from the current collections
//!
//! Nothing here is cached: callers recompute from the live collection on
//! every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Alert, Readable, Transaction};

/// Income and expense totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    /// Sum of income amounts
    pub total_income: Decimal,
    /// Sum of absolute expense amounts
    pub total_expenses: Decimal,
    /// Income minus expenses
    pub net: Decimal,
    pub count: usize,
}

/// Sum of amounts of income transactions
pub fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of absolute amounts of expense transactions
pub fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum()
}

pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let total_income = total_income(transactions);
    let total_expenses = total_expenses(transactions);
    TransactionSummary {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
        count: transactions.len(),
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
    /// Share of all expenses, rounded to one decimal place
    pub percentage: Decimal,
}

/// Expenses grouped by category, largest first
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryBreakdown> {
    let mut by_category: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        let entry = by_category.entry(tx.category.as_str()).or_insert((Decimal::ZERO, 0));
        entry.0 += tx.amount.abs();
        entry.1 += 1;
    }

    let total: Decimal = by_category.values().map(|(amount, _)| *amount).sum();

    let mut breakdowns: Vec<CategoryBreakdown> = by_category
        .into_iter()
        .map(|(category, (amount, count))| {
            let percentage = if total > Decimal::ZERO {
                (amount / total * Decimal::ONE_HUNDRED).round_dp(1)
            } else {
                Decimal::ZERO
            };
            CategoryBreakdown {
                category: category.to_string(),
                amount,
                count,
                percentage,
            }
        })
        .collect();

    breakdowns.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    breakdowns
}

/// Number of unread records
pub fn unread_count<R: Readable>(records: &[R]) -> usize {
    records.iter().filter(|r| !r.is_read()).count()
}

/// Badge counts for the alerts page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCounts {
    pub total: usize,
    pub unread: usize,
    pub critical: usize,
    pub action_required: usize,
}

pub fn alert_counts(alerts: &[Alert]) -> AlertCounts {
    AlertCounts {
        total: alerts.len(),
        unread: unread_count(alerts),
        critical: alerts.iter().filter(|a| a.is_critical()).count(),
        action_required: alerts.iter().filter(|a| a.action_required).count(),
    }
}
