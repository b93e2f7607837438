// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Youth impact metrics for a business.
//!
//! Every business reports how many youth work in it and how many of those
//! belong to the monitored demographic groups. The figures are derived from
//! the ordered list of youth IDs submitted for the business.
//!
//! ## Counting Rules
//!
//! - The total is the length of the submitted list. Duplicate IDs are
//!   counted every time they appear.
//! - A demographic count is the number of submitted IDs whose record has the
//!   corresponding flag set (`refugee_status`, `idp_status`) or the exact
//!   answer `"Yes"` (`host_community_status`, `pwd_status`).
//! - IDs without a matching record count towards the total only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::YouthRecord;

/// Aggregate youth demographics reported on a business profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthImpactMetrics {
    /// Number of youth IDs submitted for the business.
    pub total_youth_in_work_reported: usize,
    pub youth_refugee_count: usize,
    /// Internally displaced persons.
    pub youth_idp_count: usize,
    pub youth_host_community_count: usize,
    /// Persons living with a disability.
    pub youth_plwd_count: usize,
}

/// Computes the impact metrics for an ordered list of youth IDs.
///
/// # Arguments
///
/// * `youth_ids` - The submitted youth IDs, duplicates included
/// * `records` - The youth records fetched for those IDs (any order)
#[must_use]
pub fn aggregate_youth_metrics(youth_ids: &[i64], records: &[YouthRecord]) -> YouthImpactMetrics {
    let by_id: HashMap<i64, &YouthRecord> = records.iter().map(|r| (r.youth_id, r)).collect();

    let count = |predicate: fn(&YouthRecord) -> bool| -> usize {
        youth_ids
            .iter()
            .filter(|id| by_id.get(*id).is_some_and(|record| predicate(record)))
            .count()
    };

    YouthImpactMetrics {
        total_youth_in_work_reported: youth_ids.len(),
        youth_refugee_count: count(|r| r.refugee_status),
        youth_idp_count: count(|r| r.idp_status),
        youth_host_community_count: count(YouthRecord::is_host_community),
        youth_plwd_count: count(YouthRecord::is_pwd),
    }
}
