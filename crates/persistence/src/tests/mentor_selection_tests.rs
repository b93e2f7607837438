// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for load-balanced, district-scoped mentor selection.

use diesel::prelude::*;

use super::{create_test_mentor, create_test_persistence, create_test_youth, new_business};
use crate::diesel_schema::mentors;
use crate::{DEFAULT_MENTORSHIP_FOCUS, Persistence};

/// Creates `count` businesses in a district no mentor serves.
fn create_unmentored_businesses(persistence: &mut Persistence, count: usize) -> Vec<i64> {
    let youth = create_test_youth(persistence, "Placeholder Youth");
    (0..count)
        .map(|i| {
            persistence
                .create_business_profile(&new_business(
                    &format!("Business {i}"),
                    "Lower Manya Krobo",
                    &[youth],
                ))
                .unwrap()
                .business
                .business_id
        })
        .collect()
}

fn set_raw_districts(persistence: &mut Persistence, mentor_id: i64, raw: &str) {
    diesel::update(mentors::table)
        .filter(mentors::mentor_id.eq(mentor_id))
        .set(mentors::assigned_districts.eq(raw))
        .execute(&mut persistence.conn)
        .unwrap();
}

#[test]
fn test_no_mentors_yields_none() {
    let mut persistence = create_test_persistence();
    assert_eq!(persistence.select_mentor_for_district("Bekwai"), None);
}

#[test]
fn test_match_on_legacy_district() {
    let mut persistence = create_test_persistence();
    let mentor_id = create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);

    assert_eq!(
        persistence.select_mentor_for_district("Bekwai"),
        Some(mentor_id)
    );
    assert_eq!(
        persistence.select_mentor_for_district("  Bekwai  "),
        Some(mentor_id)
    );
}

#[test]
fn test_match_on_district_list() {
    let mut persistence = create_test_persistence();
    let mentor_id = create_test_mentor(&mut persistence, "Kojo", None, &["Yilo Krobo", "Gushegu"]);

    assert_eq!(
        persistence.select_mentor_for_district("Gushegu"),
        Some(mentor_id)
    );
    assert_eq!(persistence.select_mentor_for_district("Bekwai"), None);
}

#[test]
fn test_match_is_exact() {
    let mut persistence = create_test_persistence();
    create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);

    assert_eq!(persistence.select_mentor_for_district("bekwai"), None);
    assert_eq!(
        persistence.select_mentor_for_district("Bekwai District"),
        None
    );
}

#[test]
fn test_blank_district_yields_none() {
    let mut persistence = create_test_persistence();
    create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);

    assert_eq!(persistence.select_mentor_for_district("   "), None);
}

#[test]
fn test_inactive_mentors_are_skipped() {
    let mut persistence = create_test_persistence();
    let inactive = create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);
    persistence.set_mentor_active(inactive, false).unwrap();

    assert_eq!(persistence.select_mentor_for_district("Bekwai"), None);

    let active = create_test_mentor(&mut persistence, "Esi", Some("Bekwai"), &[]);
    assert_eq!(
        persistence.select_mentor_for_district("Bekwai"),
        Some(active)
    );
}

#[test]
fn test_least_loaded_mentor_wins() {
    let mut persistence = create_test_persistence();
    let busy = create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);
    let light = create_test_mentor(&mut persistence, "Esi", None, &["Bekwai"]);

    let businesses = create_unmentored_businesses(&mut persistence, 4);
    for business_id in &businesses[..3] {
        persistence
            .assign_mentor(busy, *business_id, DEFAULT_MENTORSHIP_FOCUS)
            .unwrap();
    }
    persistence
        .assign_mentor(light, businesses[3], DEFAULT_MENTORSHIP_FOCUS)
        .unwrap();

    assert_eq!(
        persistence.select_mentor_for_district("Bekwai"),
        Some(light)
    );
}

#[test]
fn test_loads_of_other_districts_do_not_matter() {
    let mut persistence = create_test_persistence();
    let bekwai = create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);
    let gushegu = create_test_mentor(&mut persistence, "Esi", Some("Gushegu"), &[]);

    let businesses = create_unmentored_businesses(&mut persistence, 2);
    for business_id in &businesses {
        persistence
            .assign_mentor(bekwai, *business_id, DEFAULT_MENTORSHIP_FOCUS)
            .unwrap();
    }

    assert_eq!(
        persistence.select_mentor_for_district("Bekwai"),
        Some(bekwai)
    );
    assert_eq!(
        persistence.select_mentor_for_district("Gushegu"),
        Some(gushegu)
    );
}

#[test]
fn test_ties_go_to_lowest_mentor_id() {
    let mut persistence = create_test_persistence();
    let first = create_test_mentor(&mut persistence, "Kojo", Some("Gushegu"), &[]);
    create_test_mentor(&mut persistence, "Esi", Some("Gushegu"), &[]);

    assert_eq!(
        persistence.select_mentor_for_district("Gushegu"),
        Some(first)
    );
}

#[test]
fn test_unreadable_district_list_is_not_a_match() {
    let mut persistence = create_test_persistence();
    let broken = create_test_mentor(&mut persistence, "Kojo", None, &[]);
    set_raw_districts(&mut persistence, broken, "[Gushegu]");

    assert_eq!(persistence.select_mentor_for_district("Gushegu"), None);

    let valid = create_test_mentor(&mut persistence, "Esi", None, &["Gushegu"]);
    assert_eq!(
        persistence.select_mentor_for_district("Gushegu"),
        Some(valid)
    );
}

#[test]
fn test_auto_assignment_balances_across_creates() {
    let mut persistence = create_test_persistence();
    let first = create_test_mentor(&mut persistence, "Kojo", Some("Yilo Krobo"), &[]);
    let second = create_test_mentor(&mut persistence, "Esi", None, &["Yilo Krobo"]);
    let youth = create_test_youth(&mut persistence, "Akosua");

    let assigned: Vec<Option<i64>> = (0..4)
        .map(|i| {
            let name = format!("Beads {i}");
            persistence
                .create_business_profile(&new_business(&name, "Yilo Krobo", &[youth]))
                .unwrap()
                .assigned_mentor_id
        })
        .collect();

    assert_eq!(
        assigned,
        vec![Some(first), Some(second), Some(first), Some(second)]
    );
}
