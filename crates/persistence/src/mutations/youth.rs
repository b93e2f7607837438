// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Youth profile mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewYouthProfile;
use crate::diesel_schema::youth_profiles;
use crate::error::PersistenceError;

/// Creates a youth profile.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile` - The validated profile fields
///
/// # Returns
///
/// The new youth ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_youth_profile(
    conn: &mut SqliteConnection,
    profile: &NewYouthProfile,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(youth_profiles::table)
        .values((
            youth_profiles::full_name.eq(profile.full_name.as_deref()),
            youth_profiles::first_name.eq(profile.first_name.as_deref()),
            youth_profiles::middle_name.eq(profile.middle_name.as_deref()),
            youth_profiles::last_name.eq(profile.last_name.as_deref()),
            youth_profiles::gender.eq(profile.gender.as_deref()),
            youth_profiles::date_of_birth.eq(profile.date_of_birth.as_deref()),
            youth_profiles::district.eq(profile.district.as_deref()),
            youth_profiles::refugee_status.eq(i32::from(profile.refugee_status)),
            youth_profiles::idp_status.eq(i32::from(profile.idp_status)),
            youth_profiles::host_community_status.eq(profile.host_community_status.as_deref()),
            youth_profiles::pwd_status.eq(profile.pwd_status.as_deref()),
        ))
        .execute(conn)?;

    let youth_id: i64 = conn.get_last_insert_rowid()?;

    info!(youth_id, "Created youth profile");
    Ok(youth_id)
}
