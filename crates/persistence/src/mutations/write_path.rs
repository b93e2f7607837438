// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business profile write path.
//!
//! Every flow here runs in a single transaction. A business row, its youth
//! relationships and its derived owner and impact fields are committed
//! together or not at all.
//!
//! ## Create
//!
//! 1. Fetch the submitted youth; any unknown ID aborts the create
//! 2. Derive owner and impact fields from the submitted order
//! 3. Insert the business row
//! 4. Write the youth relationships (first youth is the owner)
//! 5. Select a mentor for the district and record the assignment
//!
//! Step 5 is best effort. Selection never fails, and the assignment insert
//! runs in a savepoint so a failure there rolls back only the assignment.
//!
//! ## Replacing Youth
//!
//! Replacing the youth set of a business always recomputes its derived
//! fields in the same transaction, so the stored counts never drift from
//! the active relationships.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{info, warn};
use yep_domain::YouthRecord;

use crate::data_models::{
    BusinessProfileChanges, BusinessProfileData, CreatedBusiness, NewBusinessProfile,
};
use crate::error::PersistenceError;
use crate::mutations::business::{
    DerivedBusinessFields, insert_business_profile, update_business_details,
    update_derived_fields,
};
use crate::mutations::mentors::assign_mentor;
use crate::mutations::relationships::replace_youth_relationships;
use crate::queries::{
    business_exists, get_required_business_profile, get_required_youth_records,
    select_mentor_for_district,
};

/// Focus recorded on automatic mentor assignments.
pub const DEFAULT_MENTORSHIP_FOCUS: &str = "General business development";

/// Creates a business profile with its youth and mentor relationships.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile` - The validated business fields and ordered youth IDs
///
/// # Errors
///
/// Returns `PersistenceError::YouthNotFound` if any youth ID is unknown,
/// or an error if any write fails. Nothing is persisted on error.
pub fn create_business_profile(
    conn: &mut SqliteConnection,
    profile: &NewBusinessProfile,
) -> Result<CreatedBusiness, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let records: Vec<YouthRecord> = get_required_youth_records(conn, &profile.youth_ids)?;
        let derived: DerivedBusinessFields =
            DerivedBusinessFields::derive(&profile.youth_ids, &records)?;

        let business_id: i64 = insert_business_profile(conn, profile, &derived)?;
        replace_youth_relationships(conn, business_id, &profile.youth_ids)?;

        let assigned_mentor_id: Option<i64> =
            auto_assign_mentor(conn, business_id, &profile.district);

        let business: BusinessProfileData = get_required_business_profile(conn, business_id)?;

        info!(
            business_id,
            youth_count = profile.youth_ids.len(),
            assigned_mentor_id,
            "Created business profile"
        );

        Ok(CreatedBusiness {
            business,
            assigned_mentor_id,
        })
    })
}

fn auto_assign_mentor(
    conn: &mut SqliteConnection,
    business_id: i64,
    district: &str,
) -> Option<i64> {
    let mentor_id: i64 = select_mentor_for_district(conn, district)?;

    let assigned = conn.transaction::<_, PersistenceError, _>(|conn| {
        assign_mentor(conn, mentor_id, business_id, DEFAULT_MENTORSHIP_FOCUS)
    });

    match assigned {
        Ok(_) => Some(mentor_id),
        Err(e) => {
            warn!(
                business_id,
                mentor_id,
                error = %e,
                "Mentor assignment failed; business created without a mentor"
            );
            None
        }
    }
}

fn replace_youth_and_recompute(
    conn: &mut SqliteConnection,
    business_id: i64,
    youth_ids: &[i64],
) -> Result<(), PersistenceError> {
    let records: Vec<YouthRecord> = get_required_youth_records(conn, youth_ids)?;
    let derived: DerivedBusinessFields = DerivedBusinessFields::derive(youth_ids, &records)?;

    let active: usize = replace_youth_relationships(conn, business_id, youth_ids)?;
    update_derived_fields(conn, business_id, &derived)?;

    info!(business_id, active, "Replaced business youth relationships");
    Ok(())
}

/// Replaces the active youth set of a business and recomputes its owner
/// and impact fields.
///
/// An empty list clears the owner fields and zeroes every count.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` or
/// `PersistenceError::YouthNotFound` for unknown IDs, or an error if any
/// write fails. Nothing is changed on error.
pub fn replace_business_youth(
    conn: &mut SqliteConnection,
    business_id: i64,
    youth_ids: &[i64],
) -> Result<BusinessProfileData, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        if !business_exists(conn, business_id)? {
            return Err(PersistenceError::BusinessNotFound(business_id));
        }

        replace_youth_and_recompute(conn, business_id, youth_ids)?;
        get_required_business_profile(conn, business_id)
    })
}

/// Applies a partial update to a business profile.
///
/// When `changes.youth_ids` is present the youth set is replaced and the
/// derived fields recomputed as part of the same transaction.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` or
/// `PersistenceError::YouthNotFound` for unknown IDs, or an error if any
/// write fails. Nothing is changed on error.
pub fn update_business_profile(
    conn: &mut SqliteConnection,
    business_id: i64,
    changes: &BusinessProfileChanges,
) -> Result<BusinessProfileData, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        if !business_exists(conn, business_id)? {
            return Err(PersistenceError::BusinessNotFound(business_id));
        }

        update_business_details(conn, business_id, changes)?;

        if let Some(youth_ids) = &changes.youth_ids {
            replace_youth_and_recompute(conn, business_id, youth_ids)?;
        }

        get_required_business_profile(conn, business_id)
    })
}
