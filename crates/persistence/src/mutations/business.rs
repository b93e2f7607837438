// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business profile row mutations.
//!
//! These write single rows only. Multi-step flows that keep the derived
//! owner and impact fields consistent live in `write_path`.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use num_traits::ToPrimitive;
use tracing::{debug, info};
use yep_domain::{
    EnterpriseOwner, YouthImpactMetrics, YouthRecord, aggregate_youth_metrics,
    derive_enterprise_owner,
};

use crate::backend::PersistenceBackend;
use crate::data_models::{BusinessProfileChanges, NewBusinessProfile};
use crate::diesel_schema::business_profiles;
use crate::error::PersistenceError;

/// Owner and impact columns derived from a business's youth set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedBusinessFields {
    /// JSON array of the submitted youth IDs.
    pub enterprise_owner_youth_ids: String,
    pub enterprise_owner_name: Option<String>,
    pub enterprise_owner_dob: Option<String>,
    pub enterprise_owner_sex: Option<String>,
    pub total_youth_in_work_reported: i32,
    pub youth_refugee_count: i32,
    pub youth_idp_count: i32,
    pub youth_host_community_count: i32,
    pub youth_plwd_count: i32,
}

fn count_column(value: usize, column: &str) -> Result<i32, PersistenceError> {
    value
        .to_i32()
        .ok_or_else(|| PersistenceError::Other(format!("{column} out of range: {value}")))
}

impl DerivedBusinessFields {
    /// Derives the owner and impact columns for an ordered youth list.
    ///
    /// An empty list yields no owner and zero counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID list cannot be serialized or a count
    /// does not fit its column.
    pub fn derive(youth_ids: &[i64], records: &[YouthRecord]) -> Result<Self, PersistenceError> {
        let owner: Option<EnterpriseOwner> = derive_enterprise_owner(youth_ids, records);
        let metrics: YouthImpactMetrics = aggregate_youth_metrics(youth_ids, records);

        let (owner_ids, enterprise_owner_name, enterprise_owner_dob, enterprise_owner_sex) =
            match owner {
                Some(owner) => (
                    owner.enterprise_owner_youth_ids,
                    Some(owner.enterprise_owner_name),
                    owner.enterprise_owner_dob,
                    owner.enterprise_owner_sex,
                ),
                None => (youth_ids.to_vec(), None, None, None),
            };

        Ok(Self {
            enterprise_owner_youth_ids: serde_json::to_string(&owner_ids)?,
            enterprise_owner_name,
            enterprise_owner_dob,
            enterprise_owner_sex,
            total_youth_in_work_reported: count_column(
                metrics.total_youth_in_work_reported,
                "total_youth_in_work_reported",
            )?,
            youth_refugee_count: count_column(metrics.youth_refugee_count, "youth_refugee_count")?,
            youth_idp_count: count_column(metrics.youth_idp_count, "youth_idp_count")?,
            youth_host_community_count: count_column(
                metrics.youth_host_community_count,
                "youth_host_community_count",
            )?,
            youth_plwd_count: count_column(metrics.youth_plwd_count, "youth_plwd_count")?,
        })
    }
}

/// Inserts a business profile row with its derived fields.
///
/// # Returns
///
/// The new business ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_business_profile(
    conn: &mut SqliteConnection,
    profile: &NewBusinessProfile,
    derived: &DerivedBusinessFields,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(business_profiles::table)
        .values((
            business_profiles::business_name.eq(&profile.business_name),
            business_profiles::business_type.eq(profile.business_type.as_deref()),
            business_profiles::business_description.eq(profile.business_description.as_deref()),
            business_profiles::district.eq(&profile.district),
            business_profiles::enterprise_owner_youth_ids.eq(&derived.enterprise_owner_youth_ids),
            business_profiles::enterprise_owner_name.eq(derived.enterprise_owner_name.as_deref()),
            business_profiles::enterprise_owner_dob.eq(derived.enterprise_owner_dob.as_deref()),
            business_profiles::enterprise_owner_sex.eq(derived.enterprise_owner_sex.as_deref()),
            business_profiles::total_youth_in_work_reported
                .eq(derived.total_youth_in_work_reported),
            business_profiles::youth_refugee_count.eq(derived.youth_refugee_count),
            business_profiles::youth_idp_count.eq(derived.youth_idp_count),
            business_profiles::youth_host_community_count.eq(derived.youth_host_community_count),
            business_profiles::youth_plwd_count.eq(derived.youth_plwd_count),
        ))
        .execute(conn)?;

    let business_id: i64 = conn.get_last_insert_rowid()?;

    info!(business_id, name = %profile.business_name, "Inserted business profile");
    Ok(business_id)
}

/// Overwrites the derived owner and impact fields of a business.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_derived_fields(
    conn: &mut SqliteConnection,
    business_id: i64,
    derived: &DerivedBusinessFields,
) -> Result<(), PersistenceError> {
    diesel::update(business_profiles::table)
        .filter(business_profiles::business_id.eq(business_id))
        .set((
            business_profiles::enterprise_owner_youth_ids.eq(&derived.enterprise_owner_youth_ids),
            business_profiles::enterprise_owner_name.eq(derived.enterprise_owner_name.as_deref()),
            business_profiles::enterprise_owner_dob.eq(derived.enterprise_owner_dob.as_deref()),
            business_profiles::enterprise_owner_sex.eq(derived.enterprise_owner_sex.as_deref()),
            business_profiles::total_youth_in_work_reported
                .eq(derived.total_youth_in_work_reported),
            business_profiles::youth_refugee_count.eq(derived.youth_refugee_count),
            business_profiles::youth_idp_count.eq(derived.youth_idp_count),
            business_profiles::youth_host_community_count.eq(derived.youth_host_community_count),
            business_profiles::youth_plwd_count.eq(derived.youth_plwd_count),
            business_profiles::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    debug!(business_id, "Recomputed derived business fields");
    Ok(())
}

/// Scalar column changes applied by a partial update.
#[derive(AsChangeset)]
#[diesel(table_name = business_profiles)]
#[allow(clippy::option_option)]
struct BusinessDetailsChangeset<'a> {
    business_name: Option<&'a str>,
    business_type: Option<Option<&'a str>>,
    business_description: Option<Option<&'a str>>,
    district: Option<&'a str>,
}

/// Applies the scalar fields of a partial update.
///
/// Does nothing when no scalar field is set.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_business_details(
    conn: &mut SqliteConnection,
    business_id: i64,
    changes: &BusinessProfileChanges,
) -> Result<(), PersistenceError> {
    if !changes.has_scalar_changes() {
        return Ok(());
    }

    let changeset = BusinessDetailsChangeset {
        business_name: changes.business_name.as_deref(),
        business_type: changes.business_type.as_ref().map(Option::as_deref),
        business_description: changes.business_description.as_ref().map(Option::as_deref),
        district: changes.district.as_deref(),
    };

    diesel::update(business_profiles::table)
        .filter(business_profiles::business_id.eq(business_id))
        .set(&changeset)
        .execute(conn)?;

    diesel::update(business_profiles::table)
        .filter(business_profiles::business_id.eq(business_id))
        .set(business_profiles::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    info!(business_id, "Updated business details");
    Ok(())
}

/// Deletes a business profile. Its relationship rows cascade.
///
/// # Errors
///
/// Returns `PersistenceError::BusinessNotFound` if there is no such business.
pub fn delete_business_profile(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(business_profiles::table)
        .filter(business_profiles::business_id.eq(business_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::BusinessNotFound(business_id));
    }

    info!(business_id, "Deleted business profile");
    Ok(())
}
