// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Youth profile queries.

use std::collections::BTreeSet;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use yep_domain::YouthRecord;

use crate::data_models::YouthProfileData;
use crate::diesel_schema::youth_profiles;
use crate::error::PersistenceError;

/// Diesel Queryable struct for youth profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = youth_profiles)]
pub(crate) struct YouthProfileRow {
    youth_id: i64,
    full_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    date_of_birth: Option<String>,
    district: Option<String>,
    refugee_status: i32,
    idp_status: i32,
    host_community_status: Option<String>,
    pwd_status: Option<String>,
    created_at: String,
}

impl From<YouthProfileRow> for YouthProfileData {
    fn from(row: YouthProfileRow) -> Self {
        Self {
            youth_id: row.youth_id,
            full_name: row.full_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            gender: row.gender,
            date_of_birth: row.date_of_birth,
            district: row.district,
            refugee_status: row.refugee_status != 0,
            idp_status: row.idp_status != 0,
            host_community_status: row.host_community_status,
            pwd_status: row.pwd_status,
            created_at: row.created_at,
        }
    }
}

impl From<YouthProfileRow> for YouthRecord {
    fn from(row: YouthProfileRow) -> Self {
        Self {
            youth_id: row.youth_id,
            full_name: row.full_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            gender: row.gender,
            date_of_birth: row.date_of_birth,
            refugee_status: row.refugee_status != 0,
            idp_status: row.idp_status != 0,
            host_community_status: row.host_community_status,
            pwd_status: row.pwd_status,
        }
    }
}

/// Lists all youth profiles ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_youth_profiles(
    conn: &mut SqliteConnection,
) -> Result<Vec<YouthProfileData>, PersistenceError> {
    let rows: Vec<YouthProfileRow> = youth_profiles::table
        .order(youth_profiles::youth_id.asc())
        .select(YouthProfileRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(YouthProfileData::from).collect())
}

/// Retrieves a youth profile by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the profile is not found.
pub fn get_youth_profile(
    conn: &mut SqliteConnection,
    youth_id: i64,
) -> Result<Option<YouthProfileData>, PersistenceError> {
    debug!(youth_id, "Looking up youth profile");

    let row: Option<YouthProfileRow> = youth_profiles::table
        .filter(youth_profiles::youth_id.eq(youth_id))
        .select(YouthProfileRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(YouthProfileData::from))
}

/// Fetches the youth records for a list of IDs.
///
/// Duplicate IDs are looked up once. IDs without a profile are omitted
/// from the result.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_youth_records(
    conn: &mut SqliteConnection,
    youth_ids: &[i64],
) -> Result<Vec<YouthRecord>, PersistenceError> {
    if youth_ids.is_empty() {
        return Ok(Vec::new());
    }

    let unique_ids: Vec<i64> = youth_ids
        .iter()
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .collect();
    debug!(count = unique_ids.len(), "Fetching youth records");

    let rows: Vec<YouthProfileRow> = youth_profiles::table
        .filter(youth_profiles::youth_id.eq_any(unique_ids))
        .select(YouthProfileRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(YouthRecord::from).collect())
}

/// Fetches the youth records for a list of IDs, requiring all to exist.
///
/// # Errors
///
/// Returns `PersistenceError::YouthNotFound` listing every missing ID in
/// ascending order, or an error if the database query fails.
pub fn get_required_youth_records(
    conn: &mut SqliteConnection,
    youth_ids: &[i64],
) -> Result<Vec<YouthRecord>, PersistenceError> {
    let records: Vec<YouthRecord> = get_youth_records(conn, youth_ids)?;

    let found: BTreeSet<i64> = records.iter().map(|r| r.youth_id).collect();
    let missing: Vec<i64> = youth_ids
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .collect();

    if !missing.is_empty() {
        return Err(PersistenceError::YouthNotFound(missing));
    }

    Ok(records)
}
