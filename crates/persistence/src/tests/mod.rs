// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod mentor_selection_tests;
mod write_path_tests;

use diesel::prelude::*;

use crate::diesel_schema::business_youth_relationships;
use crate::{NewBusinessProfile, NewMentor, NewYouthProfile, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_youth(persistence: &mut Persistence, full_name: &str) -> i64 {
    persistence
        .create_youth_profile(&NewYouthProfile {
            full_name: Some(full_name.to_string()),
            ..NewYouthProfile::default()
        })
        .unwrap()
}

pub fn create_test_mentor(
    persistence: &mut Persistence,
    name: &str,
    assigned_district: Option<&str>,
    assigned_districts: &[&str],
) -> i64 {
    persistence
        .create_mentor(&NewMentor {
            name: name.to_string(),
            email: Some(format!("{}@example.org", name.to_lowercase())),
            phone: None,
            specialization: None,
            assigned_district: assigned_district.map(ToString::to_string),
            assigned_districts: assigned_districts.iter().map(ToString::to_string).collect(),
            is_active: true,
        })
        .unwrap()
}

pub fn new_business(name: &str, district: &str, youth_ids: &[i64]) -> NewBusinessProfile {
    NewBusinessProfile {
        business_name: name.to_string(),
        business_type: Some(String::from("Agro-processing")),
        business_description: None,
        district: district.to_string(),
        youth_ids: youth_ids.to_vec(),
    }
}

/// Returns `(youth_id, role, is_active)` for every relationship row of a
/// business, in youth ID order.
pub fn relationship_rows(
    persistence: &mut Persistence,
    business_id: i64,
) -> Vec<(i64, String, i32)> {
    business_youth_relationships::table
        .filter(business_youth_relationships::business_id.eq(business_id))
        .order(business_youth_relationships::youth_id.asc())
        .select((
            business_youth_relationships::youth_id,
            business_youth_relationships::role,
            business_youth_relationships::is_active,
        ))
        .load(&mut persistence.conn)
        .unwrap()
}
