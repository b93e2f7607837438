// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business profile queries.
//!
//! Reads of business rows and of the active youth and mentor relationships
//! hanging off them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use yep_domain::YouthRecord;

use crate::data_models::{BusinessProfileData, MentorAssignmentData, YouthRelationshipData};
use crate::diesel_schema::{
    business_profiles, business_youth_relationships, mentor_business_relationships, mentors,
};
use crate::error::PersistenceError;
use crate::queries::mentors::districts_for_display;
use crate::queries::youth::YouthProfileRow;

/// Diesel Queryable struct for business profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = business_profiles)]
struct BusinessProfileRow {
    business_id: i64,
    business_name: String,
    business_type: Option<String>,
    business_description: Option<String>,
    district: String,
    enterprise_owner_youth_ids: String,
    enterprise_owner_name: Option<String>,
    enterprise_owner_dob: Option<String>,
    enterprise_owner_sex: Option<String>,
    total_youth_in_work_reported: i32,
    youth_refugee_count: i32,
    youth_idp_count: i32,
    youth_host_community_count: i32,
    youth_plwd_count: i32,
    created_at: String,
    updated_at: String,
}

impl TryFrom<BusinessProfileRow> for BusinessProfileData {
    type Error = PersistenceError;

    fn try_from(row: BusinessProfileRow) -> Result<Self, Self::Error> {
        let enterprise_owner_youth_ids: Vec<i64> =
            serde_json::from_str(&row.enterprise_owner_youth_ids)?;

        Ok(Self {
            business_id: row.business_id,
            business_name: row.business_name,
            business_type: row.business_type,
            business_description: row.business_description,
            district: row.district,
            enterprise_owner_youth_ids,
            enterprise_owner_name: row.enterprise_owner_name,
            enterprise_owner_dob: row.enterprise_owner_dob,
            enterprise_owner_sex: row.enterprise_owner_sex,
            total_youth_in_work_reported: row.total_youth_in_work_reported,
            youth_refugee_count: row.youth_refugee_count,
            youth_idp_count: row.youth_idp_count,
            youth_host_community_count: row.youth_host_community_count,
            youth_plwd_count: row.youth_plwd_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = mentor_business_relationships)]
struct AssignmentRow {
    assignment_id: i64,
    mentor_id: i64,
    business_id: i64,
    assigned_date: String,
    is_active: i32,
    mentorship_focus: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = mentors)]
struct MentorSummaryRow {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    assigned_district: Option<String>,
    assigned_districts: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = business_youth_relationships)]
struct RelationshipRow {
    relationship_id: i64,
    business_id: i64,
    youth_id: i64,
    role: String,
    join_date: String,
    is_active: i32,
}

/// Lists all business profiles ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored owner list
/// cannot be decoded.
pub fn list_business_profiles(
    conn: &mut SqliteConnection,
) -> Result<Vec<BusinessProfileData>, PersistenceError> {
    let rows: Vec<BusinessProfileRow> = business_profiles::table
        .order(business_profiles::business_id.asc())
        .select(BusinessProfileRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(BusinessProfileData::try_from)
        .collect()
}

/// Retrieves a business profile by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the business is not found.
pub fn get_business_profile(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<Option<BusinessProfileData>, PersistenceError> {
    debug!(business_id, "Looking up business profile");

    let row: Option<BusinessProfileRow> = business_profiles::table
        .filter(business_profiles::business_id.eq(business_id))
        .select(BusinessProfileRow::as_select())
        .first(conn)
        .optional()?;

    row.map(BusinessProfileData::try_from).transpose()
}

/// Retrieves a business profile by ID, failing if it does not exist.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` if there is no such business.
pub fn get_required_business_profile(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<BusinessProfileData, PersistenceError> {
    get_business_profile(conn, business_id)?
        .ok_or(PersistenceError::BusinessNotFound(business_id))
}

/// Returns whether a business profile exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn business_exists(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<bool, PersistenceError> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        business_profiles::table.filter(business_profiles::business_id.eq(business_id)),
    ))
    .get_result(conn)?;

    Ok(exists)
}

/// Lists the active mentor assignments for a business, oldest first.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` if there is no such
/// business, or an error if the database query fails.
pub fn get_mentor_assignments(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<Vec<MentorAssignmentData>, PersistenceError> {
    if !business_exists(conn, business_id)? {
        return Err(PersistenceError::BusinessNotFound(business_id));
    }

    let rows: Vec<(AssignmentRow, MentorSummaryRow)> = mentor_business_relationships::table
        .inner_join(mentors::table)
        .filter(mentor_business_relationships::business_id.eq(business_id))
        .filter(mentor_business_relationships::is_active.eq(1))
        .order(mentor_business_relationships::assignment_id.asc())
        .select((AssignmentRow::as_select(), MentorSummaryRow::as_select()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(assignment, mentor)| MentorAssignmentData {
            assignment_id: assignment.assignment_id,
            mentor_id: assignment.mentor_id,
            business_id: assignment.business_id,
            assigned_date: assignment.assigned_date,
            is_active: assignment.is_active != 0,
            mentorship_focus: assignment.mentorship_focus,
            assigned_districts: districts_for_display(
                assignment.mentor_id,
                &mentor.assigned_districts,
            ),
            mentor_name: mentor.name,
            mentor_email: mentor.email,
            mentor_phone: mentor.phone,
            assigned_district: mentor.assigned_district,
        })
        .collect())
}

/// Lists the active youth relationships for a business.
///
/// The owner comes first, followed by members in insertion order.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` if there is no such
/// business, or an error if the database query fails.
pub fn get_youth_relationships(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<Vec<YouthRelationshipData>, PersistenceError> {
    if !business_exists(conn, business_id)? {
        return Err(PersistenceError::BusinessNotFound(business_id));
    }

    // "Owner" sorts after "Member", so descending puts the owner first.
    let rows: Vec<(RelationshipRow, YouthProfileRow)> = business_youth_relationships::table
        .inner_join(crate::diesel_schema::youth_profiles::table)
        .filter(business_youth_relationships::business_id.eq(business_id))
        .filter(business_youth_relationships::is_active.eq(1))
        .order((
            business_youth_relationships::role.desc(),
            business_youth_relationships::relationship_id.asc(),
        ))
        .select((RelationshipRow::as_select(), YouthProfileRow::as_select()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(relationship, youth)| YouthRelationshipData {
            relationship_id: relationship.relationship_id,
            business_id: relationship.business_id,
            youth_id: relationship.youth_id,
            role: relationship.role,
            join_date: relationship.join_date,
            is_active: relationship.is_active != 0,
            youth_name: YouthRecord::from(youth).display_name(),
        })
        .collect())
}
