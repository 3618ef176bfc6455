//! Transactions API endpoints
//!
//! Endpoints:
//! - api_transactions: Filtered transaction list with totals (JSON)
//! - api_transaction_detail: Single transaction (JSON)
//! - api_transaction_categories: Categories offered by the category filter
//! - api_transaction_breakdown: Expenses grouped by category

use crate::error::{ApiError, ApiResult};
use crate::routes::{search_param, selection_param};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use finboard_config::CurrencyConfig;
use finboard_core::display::{category_icon, format_amount};
use finboard_core::models::SUGGESTED_CATEGORIES;
use finboard_core::{CategoryBreakdown, Transaction, TransactionFilter, TransactionSummary};
use serde::Serialize;
use std::collections::HashMap;

/// Transaction with its display metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub icon: &'static str,
    pub formatted_amount: String,
}

impl TransactionView {
    fn new(transaction: Transaction, currency: &CurrencyConfig) -> Self {
        Self {
            icon: category_icon(&transaction.category),
            formatted_amount: format_amount(transaction.amount, currency),
            transaction,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionView>,
    /// Totals over the whole collection, not just the filtered rows
    pub summary: TransactionSummary,
    pub filtered_count: usize,
}

/// Get transactions filtered by `q`, `category` and `type`
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<TransactionsResponse>> {
    let filter = TransactionFilter::new()
        .search(search_param(&params))
        .category(selection_param(&params, "category")?)
        .kind(selection_param(&params, "type")?);

    let dashboard = state.dashboard.read().await;
    let transactions: Vec<TransactionView> = dashboard
        .filtered_transactions(&filter)
        .into_iter()
        .map(|t| TransactionView::new(t, &state.config.currency))
        .collect();

    Ok(Json(TransactionsResponse {
        filtered_count: transactions.len(),
        transactions,
        summary: dashboard.transaction_summary(),
    }))
}

/// Get single transaction detail
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransactionView>> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid transaction id: {}", id)))?;

    let dashboard = state.dashboard.read().await;
    let transaction = dashboard.transaction(id)?.clone();
    Ok(Json(TransactionView::new(transaction, &state.config.currency)))
}

pub async fn api_transaction_categories() -> Json<Vec<&'static str>> {
    Json(SUGGESTED_CATEGORIES.to_vec())
}

pub async fn api_transaction_breakdown(State(state): State<AppState>) -> Json<Vec<CategoryBreakdown>> {
    Json(state.dashboard.read().await.expense_breakdown())
}
