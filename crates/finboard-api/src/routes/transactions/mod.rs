//! Transaction routes - list, search, totals
//!
//! Features:
//! - Filter by keyword, category and type
//! - Totals over the full collection
//! - Expense breakdown by category
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{
    api_transaction_breakdown,
    api_transaction_categories,
    api_transaction_detail,
    api_transactions,
};
