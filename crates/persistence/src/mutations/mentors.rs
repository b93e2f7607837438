// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mentor and mentor assignment mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewMentor;
use crate::diesel_schema::{mentor_business_relationships, mentors};
use crate::error::PersistenceError;

/// Creates a mentor.
///
/// The district list is stored as a JSON array.
///
/// # Returns
///
/// The new mentor ID.
///
/// # Errors
///
/// Returns an error if the district list cannot be serialized or the
/// insert fails.
pub fn create_mentor(
    conn: &mut SqliteConnection,
    mentor: &NewMentor,
) -> Result<i64, PersistenceError> {
    let assigned_districts: String = serde_json::to_string(&mentor.assigned_districts)?;

    diesel::insert_into(mentors::table)
        .values((
            mentors::name.eq(&mentor.name),
            mentors::email.eq(mentor.email.as_deref()),
            mentors::phone.eq(mentor.phone.as_deref()),
            mentors::specialization.eq(mentor.specialization.as_deref()),
            mentors::assigned_district.eq(mentor.assigned_district.as_deref()),
            mentors::assigned_districts.eq(&assigned_districts),
            mentors::is_active.eq(i32::from(mentor.is_active)),
        ))
        .execute(conn)?;

    let mentor_id: i64 = conn.get_last_insert_rowid()?;

    info!(mentor_id, name = %mentor.name, "Created mentor");
    Ok(mentor_id)
}

/// Activates or deactivates a mentor.
///
/// Inactive mentors are never selected for new businesses. Existing
/// assignments are left untouched.
///
/// # Errors
///
/// Returns `PersistenceError::MentorNotFound` if there is no such mentor.
pub fn set_mentor_active(
    conn: &mut SqliteConnection,
    mentor_id: i64,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(mentors::table)
        .filter(mentors::mentor_id.eq(mentor_id))
        .set(mentors::is_active.eq(i32::from(is_active)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::MentorNotFound(mentor_id));
    }

    info!(mentor_id, is_active, "Updated mentor status");
    Ok(())
}

/// Records an active mentor assignment for a business.
///
/// # Returns
///
/// The new assignment ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn assign_mentor(
    conn: &mut SqliteConnection,
    mentor_id: i64,
    business_id: i64,
    mentorship_focus: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(mentor_business_relationships::table)
        .values((
            mentor_business_relationships::mentor_id.eq(mentor_id),
            mentor_business_relationships::business_id.eq(business_id),
            mentor_business_relationships::is_active.eq(1),
            mentor_business_relationships::mentorship_focus.eq(mentorship_focus),
        ))
        .execute(conn)?;

    let assignment_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        assignment_id,
        mentor_id,
        business_id,
        "Assigned mentor to business"
    );
    Ok(assignment_id)
}
