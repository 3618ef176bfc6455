//! State transitions over record collections
//!
//! Every operation takes the collection by value and returns the next one.
//! Surviving records keep their relative order, and an unknown id leaves the
//! collection as it was.

use crate::models::{AlertRule, Readable, Record};

/// Mark the record with `id` as read.
pub fn mark_as_read<R: Readable>(records: Vec<R>, id: &R::Id) -> Vec<R> {
    records
        .into_iter()
        .map(|mut record| {
            if record.id() == id {
                record.mark_read();
            }
            record
        })
        .collect()
}

/// Mark every record as read.
pub fn mark_all_as_read<R: Readable>(records: Vec<R>) -> Vec<R> {
    records
        .into_iter()
        .map(|mut record| {
            record.mark_read();
            record
        })
        .collect()
}

/// Remove the record with `id`.
pub fn dismiss<R: Record>(records: Vec<R>, id: &R::Id) -> Vec<R> {
    records.into_iter().filter(|record| record.id() != id).collect()
}

/// Keep only unread records.
pub fn delete_all_read<R: Readable>(records: Vec<R>) -> Vec<R> {
    records.into_iter().filter(|record| !record.is_read()).collect()
}

/// Flip `is_active` on the rule with `id`.
pub fn toggle_rule(rules: Vec<AlertRule>, id: &str) -> Vec<AlertRule> {
    rules
        .into_iter()
        .map(|mut rule| {
            if rule.id == id {
                rule.is_active = !rule.is_active;
            }
            rule
        })
        .collect()
}
