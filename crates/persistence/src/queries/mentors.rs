// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mentor queries and mentor selection.
//!
//! `select_mentor_for_district` is the database half of mentor selection:
//! it loads the active mentors and their current caseloads, then defers to
//! the district matching and least-loaded policy in `yep_domain`.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::dsl::count_star;
use diesel::prelude::*;
use tracing::{debug, info, warn};
use yep_domain::{
    MentorCandidate, filter_district_candidates, parse_assigned_districts, pick_least_loaded,
};

use crate::data_models::MentorData;
use crate::diesel_schema::{mentor_business_relationships, mentors};
use crate::error::PersistenceError;

/// Diesel Queryable struct for mentor rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = mentors)]
struct MentorRow {
    mentor_id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    specialization: Option<String>,
    assigned_district: Option<String>,
    assigned_districts: String,
    is_active: i32,
    created_at: String,
}

impl From<MentorRow> for MentorData {
    fn from(row: MentorRow) -> Self {
        Self {
            assigned_districts: districts_for_display(row.mentor_id, &row.assigned_districts),
            mentor_id: row.mentor_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            specialization: row.specialization,
            assigned_district: row.assigned_district,
            is_active: row.is_active != 0,
            created_at: row.created_at,
        }
    }
}

/// Decodes a stored district list for display.
///
/// An unreadable value is logged and shown as an empty list.
pub(crate) fn districts_for_display(mentor_id: i64, raw: &str) -> Vec<String> {
    parse_assigned_districts(raw).unwrap_or_else(|e| {
        warn!(mentor_id, error = %e, "Stored assigned districts are unreadable");
        Vec::new()
    })
}

/// Lists all mentors ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_mentors(conn: &mut SqliteConnection) -> Result<Vec<MentorData>, PersistenceError> {
    let rows: Vec<MentorRow> = mentors::table
        .order(mentors::mentor_id.asc())
        .select(MentorRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(MentorData::from).collect())
}

/// Retrieves a mentor by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the mentor is not found.
pub fn get_mentor(
    conn: &mut SqliteConnection,
    mentor_id: i64,
) -> Result<Option<MentorData>, PersistenceError> {
    debug!(mentor_id, "Looking up mentor");

    let row: Option<MentorRow> = mentors::table
        .filter(mentors::mentor_id.eq(mentor_id))
        .select(MentorRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(MentorData::from))
}

/// Loads every active mentor as a selection candidate, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_active_mentor_candidates(
    conn: &mut SqliteConnection,
) -> Result<Vec<MentorCandidate>, PersistenceError> {
    let rows: Vec<(i64, Option<String>, String)> = mentors::table
        .filter(mentors::is_active.eq(1))
        .order(mentors::mentor_id.asc())
        .select((
            mentors::mentor_id,
            mentors::assigned_district,
            mentors::assigned_districts,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(mentor_id, assigned_district, assigned_districts)| MentorCandidate {
            mentor_id,
            assigned_district,
            assigned_districts,
        })
        .collect())
}

/// Counts active mentor-business assignments per mentor.
///
/// Mentors with no active assignment are absent from the map.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_active_assignment_counts(
    conn: &mut SqliteConnection,
) -> Result<HashMap<i64, i64>, PersistenceError> {
    let rows: Vec<(i64, i64)> = mentor_business_relationships::table
        .filter(mentor_business_relationships::is_active.eq(1))
        .group_by(mentor_business_relationships::mentor_id)
        .select((mentor_business_relationships::mentor_id, count_star()))
        .load(conn)?;

    Ok(rows.into_iter().collect())
}

fn try_select_mentor(
    conn: &mut SqliteConnection,
    district: &str,
) -> Result<Option<i64>, PersistenceError> {
    let active: Vec<MentorCandidate> = get_active_mentor_candidates(conn)?;
    let candidates: Vec<&MentorCandidate> = filter_district_candidates(&active, district);

    if candidates.is_empty() {
        debug!(district, "No active mentor serves district");
        return Ok(None);
    }

    let loads: HashMap<i64, i64> = get_active_assignment_counts(conn)?;
    Ok(pick_least_loaded(&candidates, &loads))
}

/// Selects the least-loaded active mentor serving `district`.
///
/// Selection is best effort: any failure is logged and reported as no
/// mentor, so callers never fail because of it.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `district` - The business district; surrounding whitespace is ignored
///
/// # Returns
///
/// The chosen mentor ID, or `None` if no active mentor serves the district.
pub fn select_mentor_for_district(conn: &mut SqliteConnection, district: &str) -> Option<i64> {
    match try_select_mentor(conn, district) {
        Ok(Some(mentor_id)) => {
            info!(mentor_id, district, "Selected mentor for district");
            Some(mentor_id)
        }
        Ok(None) => None,
        Err(e) => {
            warn!(district, error = %e, "Mentor selection failed; continuing without a mentor");
            None
        }
    }
}
