// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Youth-business relationship mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use yep_domain::{RelationshipRole, assign_relationship_roles};

use crate::diesel_schema::business_youth_relationships;
use crate::error::PersistenceError;

/// Makes `youth_ids` the active youth set of a business.
///
/// Every relationship of the business is deactivated first. Each selected
/// youth is then reactivated with its new role, or inserted if it was
/// never linked. The first youth is the owner.
///
/// Owner and impact fields are not touched here; callers recompute them
/// in the same transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `business_id` - The business whose relationships are replaced
/// * `youth_ids` - The new youth set in submitted order
///
/// # Returns
///
/// The number of active relationships after the replacement.
///
/// # Errors
///
/// Returns an error if any update or insert fails.
pub fn replace_youth_relationships(
    conn: &mut SqliteConnection,
    business_id: i64,
    youth_ids: &[i64],
) -> Result<usize, PersistenceError> {
    let deactivated: usize = diesel::update(business_youth_relationships::table)
        .filter(business_youth_relationships::business_id.eq(business_id))
        .filter(business_youth_relationships::is_active.eq(1))
        .set(business_youth_relationships::is_active.eq(0))
        .execute(conn)?;

    debug!(business_id, deactivated, "Deactivated youth relationships");

    let plan: Vec<(i64, RelationshipRole)> = assign_relationship_roles(youth_ids);

    for &(youth_id, role) in &plan {
        let reactivated: usize = diesel::update(business_youth_relationships::table)
            .filter(business_youth_relationships::business_id.eq(business_id))
            .filter(business_youth_relationships::youth_id.eq(youth_id))
            .set((
                business_youth_relationships::role.eq(role.as_str()),
                business_youth_relationships::is_active.eq(1),
            ))
            .execute(conn)?;

        if reactivated == 0 {
            diesel::insert_into(business_youth_relationships::table)
                .values((
                    business_youth_relationships::business_id.eq(business_id),
                    business_youth_relationships::youth_id.eq(youth_id),
                    business_youth_relationships::role.eq(role.as_str()),
                    business_youth_relationships::is_active.eq(1),
                ))
                .execute(conn)?;
        }
    }

    Ok(plan.len())
}
