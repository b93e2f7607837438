// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mentor selection policy.
//!
//! A new business is offered to the least-loaded active mentor serving its
//! district. This module holds the pure half of that decision; loading the
//! mentors and their current caseloads is the persistence layer's job.
//!
//! ## District Matching
//!
//! A mentor serves a district when either:
//! 1. the legacy single `assigned_district` equals the trimmed target exactly, or
//! 2. the JSON `assigned_districts` list contains the trimmed target exactly.
//!
//! The JSON list is parsed defensively. Both a plain array (`["Bekwai"]`) and
//! a JSON string holding an array (`"[\"Bekwai\"]"`) are accepted. Anything
//! else is logged and treated as "serves no district through this field".
//!
//! ## Load Balancing
//!
//! Among matching mentors the one with the fewest active assignments wins.
//! Mentors absent from the load map have no assignments. Ties go to the
//! candidate that comes first in the input order.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::types::MentorCandidate;

/// Reasons an `assigned_districts` value cannot be read as a district list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignedDistrictsError {
    /// The stored text is not valid JSON.
    #[error("assigned districts is not valid JSON: {0}")]
    Malformed(String),

    /// The stored JSON is valid but does not hold an array.
    #[error("assigned districts must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Parses a stored `assigned_districts` value into district names.
///
/// Non-string array items are dropped, since they can never equal a
/// district name. JSON `null` reads as an empty list.
///
/// # Errors
///
/// Returns an error if the value is not JSON, or is JSON that does not
/// hold an array (directly or as an encoded string).
pub fn parse_assigned_districts(raw: &str) -> Result<Vec<String>, AssignedDistrictsError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| AssignedDistrictsError::Malformed(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(string_items(items)),
        // Double-encoded: a JSON string whose contents are the array.
        Value::String(inner) => {
            let inner_value: Value = serde_json::from_str(&inner)
                .map_err(|e| AssignedDistrictsError::Malformed(e.to_string()))?;
            match inner_value {
                Value::Array(items) => Ok(string_items(items)),
                other => Err(AssignedDistrictsError::NotAnArray {
                    found: json_kind(&other),
                }),
            }
        }
        other => Err(AssignedDistrictsError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Returns whether a mentor serves the given district.
///
/// An unreadable `assigned_districts` value is logged and counts as
/// no match; it never fails the caller.
#[must_use]
pub fn mentor_serves_district(mentor: &MentorCandidate, district: &str) -> bool {
    let target: &str = district.trim();
    if target.is_empty() {
        return false;
    }

    if mentor.assigned_district.as_deref() == Some(target) {
        return true;
    }

    match parse_assigned_districts(&mentor.assigned_districts) {
        Ok(districts) => districts.iter().any(|d| d == target),
        Err(e) => {
            warn!(
                mentor_id = mentor.mentor_id,
                error = %e,
                "Ignoring unreadable assigned districts"
            );
            false
        }
    }
}

/// Keeps the mentors serving `district`, preserving input order.
#[must_use]
pub fn filter_district_candidates<'a>(
    mentors: &'a [MentorCandidate],
    district: &str,
) -> Vec<&'a MentorCandidate> {
    mentors
        .iter()
        .filter(|mentor| mentor_serves_district(mentor, district))
        .collect()
}

/// Picks the candidate with the fewest active assignments.
///
/// # Arguments
///
/// * `candidates` - District-matched mentors, in tie-break order
/// * `active_loads` - Active assignment counts keyed by mentor ID
///
/// # Returns
///
/// The chosen mentor ID, or `None` if there are no candidates.
#[must_use]
pub fn pick_least_loaded(
    candidates: &[&MentorCandidate],
    active_loads: &HashMap<i64, i64>,
) -> Option<i64> {
    candidates
        .iter()
        .min_by_key(|mentor| active_loads.get(&mentor.mentor_id).copied().unwrap_or(0))
        .map(|mentor| mentor.mentor_id)
}
