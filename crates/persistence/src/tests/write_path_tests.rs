// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the transactional business profile write path.

use diesel::prelude::*;

use super::{
    create_test_mentor, create_test_persistence, create_test_youth, new_business,
    relationship_rows,
};
use crate::{BusinessProfileChanges, NewYouthProfile, Persistence, PersistenceError};

/// Creates two youth: a refugee host-community woman and an IDP youth
/// living with a disability.
fn create_profiled_youth(persistence: &mut Persistence) -> (i64, i64) {
    let ama = persistence
        .create_youth_profile(&NewYouthProfile {
            full_name: Some(String::from("Ama Owusu")),
            gender: Some(String::from("Female")),
            date_of_birth: Some(String::from("2001-04-12")),
            refugee_status: true,
            host_community_status: Some(String::from("Yes")),
            pwd_status: Some(String::from("No")),
            ..NewYouthProfile::default()
        })
        .unwrap();

    let kofi = persistence
        .create_youth_profile(&NewYouthProfile {
            first_name: Some(String::from("Kofi")),
            last_name: Some(String::from("Mensah")),
            gender: Some(String::from("Male")),
            idp_status: true,
            pwd_status: Some(String::from("Yes")),
            ..NewYouthProfile::default()
        })
        .unwrap();

    (ama, kofi)
}

#[test]
fn test_create_derives_owner_and_metrics() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let created = persistence
        .create_business_profile(&new_business("Shea Butter Co", "Gushegu", &[ama, kofi]))
        .unwrap();
    let business = created.business;

    assert_eq!(business.business_name, "Shea Butter Co");
    assert_eq!(business.enterprise_owner_youth_ids, vec![ama, kofi]);
    assert_eq!(
        business.enterprise_owner_name.as_deref(),
        Some("Ama Owusu + 1 others")
    );
    assert_eq!(business.enterprise_owner_dob.as_deref(), Some("2001-04-12"));
    assert_eq!(business.enterprise_owner_sex.as_deref(), Some("Female"));
    assert_eq!(business.total_youth_in_work_reported, 2);
    assert_eq!(business.youth_refugee_count, 1);
    assert_eq!(business.youth_idp_count, 1);
    assert_eq!(business.youth_host_community_count, 1);
    assert_eq!(business.youth_plwd_count, 1);
}

#[test]
fn test_create_writes_owner_and_member_relationships() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let created = persistence
        .create_business_profile(&new_business("Shea Butter Co", "Gushegu", &[kofi, ama]))
        .unwrap();

    let relationships = persistence
        .get_youth_relationships(created.business.business_id)
        .unwrap();

    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[0].youth_id, kofi);
    assert_eq!(relationships[0].role, "Owner");
    assert_eq!(relationships[0].youth_name, "Kofi Mensah");
    assert_eq!(relationships[1].youth_id, ama);
    assert_eq!(relationships[1].role, "Member");
    assert!(relationships.iter().all(|r| r.is_active));
}

#[test]
fn test_create_counts_duplicate_ids_but_links_once() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let created = persistence
        .create_business_profile(&new_business("Shea Butter Co", "Bekwai", &[ama, ama, kofi]))
        .unwrap();

    assert_eq!(created.business.total_youth_in_work_reported, 3);
    assert_eq!(created.business.youth_refugee_count, 2);
    assert_eq!(
        created.business.enterprise_owner_name.as_deref(),
        Some("Ama Owusu + 2 others")
    );

    let rows = relationship_rows(&mut persistence, created.business.business_id);
    assert_eq!(
        rows,
        vec![
            (ama, String::from("Owner"), 1),
            (kofi, String::from("Member"), 1),
        ]
    );
}

#[test]
fn test_create_with_unknown_youth_leaves_nothing_behind() {
    let mut persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Owusu");
    create_test_mentor(&mut persistence, "Kojo", Some("Gushegu"), &[]);

    let result =
        persistence.create_business_profile(&new_business("Shea", "Gushegu", &[ama, 998, 999]));

    assert_eq!(result, Err(PersistenceError::YouthNotFound(vec![998, 999])));
    assert!(persistence.list_business_profiles().unwrap().is_empty());
    assert!(relationship_rows(&mut persistence, 1).is_empty());
}

#[test]
fn test_create_assigns_only_matching_mentor() {
    let mut persistence = create_test_persistence();
    let first = create_test_youth(&mut persistence, "Abena");
    let second = create_test_youth(&mut persistence, "Yaw");
    create_test_mentor(&mut persistence, "Esi", Some("Bekwai"), &[]);
    let mentor_id = create_test_mentor(&mut persistence, "Kojo", Some("Gushegu"), &[]);

    let created = persistence
        .create_business_profile(&new_business("Gushegu Grains", "Gushegu", &[first, second]))
        .unwrap();

    assert_eq!(created.assigned_mentor_id, Some(mentor_id));

    let assignments = persistence
        .get_mentor_assignments(created.business.business_id)
        .unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].mentor_id, mentor_id);
    assert_eq!(assignments[0].mentor_name, "Kojo");
    assert_eq!(
        assignments[0].mentorship_focus.as_deref(),
        Some(crate::DEFAULT_MENTORSHIP_FOCUS)
    );
    assert!(assignments[0].is_active);
}

#[test]
fn test_create_without_matching_mentor_still_succeeds() {
    let mut persistence = create_test_persistence();
    let youth = create_test_youth(&mut persistence, "Abena");
    create_test_mentor(&mut persistence, "Esi", Some("Bekwai"), &[]);

    let created = persistence
        .create_business_profile(&new_business("Krobo Beads", "Yilo Krobo", &[youth]))
        .unwrap();

    assert_eq!(created.assigned_mentor_id, None);
    assert!(
        persistence
            .get_mentor_assignments(created.business.business_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_failed_mentor_assignment_keeps_business() {
    let mut persistence = create_test_persistence();
    let youth = create_test_youth(&mut persistence, "Abena");
    create_test_mentor(&mut persistence, "Esi", Some("Bekwai"), &[]);

    diesel::sql_query(
        "CREATE TRIGGER reject_assignment BEFORE INSERT ON mentor_business_relationships \
         BEGIN SELECT RAISE(ABORT, 'assignment rejected'); END",
    )
    .execute(&mut persistence.conn)
    .unwrap();

    let created = persistence
        .create_business_profile(&new_business("Bekwai Bakes", "Bekwai", &[youth]))
        .unwrap();
    let business_id = created.business.business_id;

    assert_eq!(created.assigned_mentor_id, None);
    assert_eq!(created.business.enterprise_owner_youth_ids, vec![youth]);

    let stored = persistence.get_business_profile(business_id).unwrap();
    assert_eq!(stored, Some(created.business));
    assert_eq!(
        relationship_rows(&mut persistence, business_id),
        vec![(youth, String::from("Owner"), 1)]
    );
    assert!(
        persistence
            .get_mentor_assignments(business_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_replace_youth_recomputes_derived_fields() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);
    let esi = create_test_youth(&mut persistence, "Esi Boateng");

    let created = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama, kofi]))
        .unwrap();
    let business_id = created.business.business_id;

    let updated = persistence
        .replace_business_youth(business_id, &[esi, ama])
        .unwrap();

    assert_eq!(updated.enterprise_owner_youth_ids, vec![esi, ama]);
    assert_eq!(
        updated.enterprise_owner_name.as_deref(),
        Some("Esi Boateng + 1 others")
    );
    assert_eq!(updated.enterprise_owner_sex, None);
    assert_eq!(updated.total_youth_in_work_reported, 2);
    assert_eq!(updated.youth_refugee_count, 1);
    assert_eq!(updated.youth_idp_count, 0);
    assert_eq!(updated.youth_plwd_count, 0);

    let rows = relationship_rows(&mut persistence, business_id);
    assert_eq!(
        rows,
        vec![
            (ama, String::from("Member"), 1),
            (kofi, String::from("Member"), 0),
            (esi, String::from("Owner"), 1),
        ]
    );
}

#[test]
fn test_replace_reactivates_previous_youth() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama, kofi]))
        .unwrap()
        .business
        .business_id;

    persistence
        .replace_business_youth(business_id, &[ama])
        .unwrap();
    persistence
        .replace_business_youth(business_id, &[kofi, ama])
        .unwrap();

    let rows = relationship_rows(&mut persistence, business_id);
    assert_eq!(
        rows,
        vec![
            (ama, String::from("Member"), 1),
            (kofi, String::from("Owner"), 1),
        ]
    );
}

#[test]
fn test_replace_with_empty_list_clears_owner() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama, kofi]))
        .unwrap()
        .business
        .business_id;

    let updated = persistence
        .replace_business_youth(business_id, &[])
        .unwrap();

    assert!(updated.enterprise_owner_youth_ids.is_empty());
    assert_eq!(updated.enterprise_owner_name, None);
    assert_eq!(updated.enterprise_owner_dob, None);
    assert_eq!(updated.total_youth_in_work_reported, 0);
    assert_eq!(updated.youth_refugee_count, 0);
    assert_eq!(updated.youth_idp_count, 0);
    assert_eq!(updated.youth_host_community_count, 0);
    assert_eq!(updated.youth_plwd_count, 0);
    assert!(
        persistence
            .get_youth_relationships(business_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_replace_unknown_business_fails() {
    let mut persistence = create_test_persistence();
    let youth = create_test_youth(&mut persistence, "Ama");

    assert_eq!(
        persistence.replace_business_youth(77, &[youth]),
        Err(PersistenceError::BusinessNotFound(77))
    );
}

#[test]
fn test_replace_with_unknown_youth_changes_nothing() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let created = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama, kofi]))
        .unwrap();
    let business_id = created.business.business_id;

    let result = persistence.replace_business_youth(business_id, &[kofi, 404]);
    assert_eq!(result, Err(PersistenceError::YouthNotFound(vec![404])));

    let unchanged = persistence
        .get_business_profile(business_id)
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, created.business);

    let rows = relationship_rows(&mut persistence, business_id);
    assert_eq!(
        rows,
        vec![
            (ama, String::from("Owner"), 1),
            (kofi, String::from("Member"), 1),
        ]
    );
}

#[test]
fn test_update_scalar_fields_keeps_derived_fields() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let created = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama, kofi]))
        .unwrap();

    let updated = persistence
        .update_business_profile(
            created.business.business_id,
            &BusinessProfileChanges {
                business_name: Some(String::from("Shea Collective")),
                district: Some(String::from("Gushegu")),
                ..BusinessProfileChanges::default()
            },
        )
        .unwrap();

    assert_eq!(updated.business_name, "Shea Collective");
    assert_eq!(updated.district, "Gushegu");
    assert_eq!(updated.business_type, created.business.business_type);
    assert_eq!(
        updated.enterprise_owner_name,
        created.business.enterprise_owner_name
    );
    assert_eq!(updated.total_youth_in_work_reported, 2);
}

#[test]
fn test_update_can_clear_and_set_free_text() {
    let mut persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Owusu");
    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama]))
        .unwrap()
        .business
        .business_id;

    let updated = persistence
        .update_business_profile(
            business_id,
            &BusinessProfileChanges {
                business_type: Some(None),
                business_description: Some(Some(String::from("Cold-pressed shea"))),
                ..BusinessProfileChanges::default()
            },
        )
        .unwrap();

    assert_eq!(updated.business_type, None);
    assert_eq!(
        updated.business_description.as_deref(),
        Some("Cold-pressed shea")
    );
    assert_eq!(updated.business_name, "Shea");
}

#[test]
fn test_update_with_youth_ids_replaces_relationships() {
    let mut persistence = create_test_persistence();
    let (ama, kofi) = create_profiled_youth(&mut persistence);

    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama]))
        .unwrap()
        .business
        .business_id;

    let updated = persistence
        .update_business_profile(
            business_id,
            &BusinessProfileChanges {
                youth_ids: Some(vec![kofi]),
                ..BusinessProfileChanges::default()
            },
        )
        .unwrap();

    assert_eq!(
        updated.enterprise_owner_name.as_deref(),
        Some("Kofi Mensah")
    );
    assert_eq!(updated.youth_refugee_count, 0);
    assert_eq!(updated.youth_idp_count, 1);
    assert_eq!(updated.youth_plwd_count, 1);

    let relationships = persistence.get_youth_relationships(business_id).unwrap();
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[0].youth_id, kofi);
}

#[test]
fn test_failed_update_rolls_back_scalar_changes() {
    let mut persistence = create_test_persistence();
    let (ama, _) = create_profiled_youth(&mut persistence);

    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[ama]))
        .unwrap()
        .business
        .business_id;

    let result = persistence.update_business_profile(
        business_id,
        &BusinessProfileChanges {
            business_name: Some(String::from("Renamed")),
            youth_ids: Some(vec![ama, 500]),
            ..BusinessProfileChanges::default()
        },
    );
    assert_eq!(result, Err(PersistenceError::YouthNotFound(vec![500])));

    let business = persistence
        .get_business_profile(business_id)
        .unwrap()
        .unwrap();
    assert_eq!(business.business_name, "Shea");
}

#[test]
fn test_update_unknown_business_fails() {
    let mut persistence = create_test_persistence();

    assert_eq!(
        persistence.update_business_profile(5, &BusinessProfileChanges::default()),
        Err(PersistenceError::BusinessNotFound(5))
    );
}

#[test]
fn test_delete_cascades_relationships() {
    let mut persistence = create_test_persistence();
    let youth = create_test_youth(&mut persistence, "Ama");
    create_test_mentor(&mut persistence, "Kojo", Some("Bekwai"), &[]);

    let business_id = persistence
        .create_business_profile(&new_business("Shea", "Bekwai", &[youth]))
        .unwrap()
        .business
        .business_id;

    persistence.delete_business_profile(business_id).unwrap();

    let deleted = persistence.get_business_profile(business_id).unwrap();
    assert!(deleted.is_none());
    assert!(relationship_rows(&mut persistence, business_id).is_empty());
    assert!(
        crate::queries::mentors::get_active_assignment_counts(&mut persistence.conn)
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        persistence.delete_business_profile(business_id),
        Err(PersistenceError::BusinessNotFound(business_id))
    );
}

#[test]
fn test_relationship_queries_require_business() {
    let mut persistence = create_test_persistence();

    assert_eq!(
        persistence.get_youth_relationships(3),
        Err(PersistenceError::BusinessNotFound(3))
    );
    assert_eq!(
        persistence.get_mentor_assignments(3),
        Err(PersistenceError::BusinessNotFound(3))
    );
}
