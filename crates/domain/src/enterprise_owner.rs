// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Enterprise owner derivation.
//!
//! The first youth ID submitted for a business is its primary owner. The
//! derivation performs no voting among candidates; callers order the list.

use std::collections::HashSet;

use crate::types::{RelationshipRole, YouthRecord};

/// Owner fields derived for a business profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseOwner {
    /// The submitted youth IDs in their original order.
    pub enterprise_owner_youth_ids: Vec<i64>,
    /// Primary display name, with a "+ N others" suffix for groups.
    pub enterprise_owner_name: String,
    pub enterprise_owner_dob: Option<String>,
    pub enterprise_owner_sex: Option<String>,
}

/// Derives the owner fields for an ordered list of youth IDs.
///
/// # Arguments
///
/// * `youth_ids` - The submitted youth IDs; the first is the primary owner
/// * `records` - The youth records fetched for those IDs (any order)
///
/// # Returns
///
/// `None` if `youth_ids` is empty or the primary owner has no record.
#[must_use]
pub fn derive_enterprise_owner(
    youth_ids: &[i64],
    records: &[YouthRecord],
) -> Option<EnterpriseOwner> {
    let primary_id: i64 = *youth_ids.first()?;
    let primary: &YouthRecord = records.iter().find(|r| r.youth_id == primary_id)?;

    let primary_name: String = primary.display_name();
    let enterprise_owner_name: String = match youth_ids.len() {
        1 => primary_name,
        n => format!("{primary_name} + {} others", n - 1),
    };

    Some(EnterpriseOwner {
        enterprise_owner_youth_ids: youth_ids.to_vec(),
        enterprise_owner_name,
        enterprise_owner_dob: primary.date_of_birth.clone(),
        enterprise_owner_sex: primary.gender.clone(),
    })
}

/// Plans the relationship rows for an ordered list of youth IDs.
///
/// Each youth appears once, at the position of its first occurrence.
/// The first youth is the `Owner`; everyone else is a `Member`.
#[must_use]
pub fn assign_relationship_roles(youth_ids: &[i64]) -> Vec<(i64, RelationshipRole)> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(youth_ids.len());

    youth_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .enumerate()
        .map(|(index, id)| {
            let role = if index == 0 {
                RelationshipRole::Owner
            } else {
                RelationshipRole::Member
            };
            (id, role)
        })
        .collect()
}
