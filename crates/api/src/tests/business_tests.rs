// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business profile handler tests.

use yep_persistence::Persistence;

use crate::{
    ApiError, BusinessProfileInfo, CreateBusinessProfileRequest, CreateBusinessProfileResponse,
    ReplaceYouthRelationshipsRequest, SuccessResponse, UpdateBusinessProfileRequest,
    YouthRelationshipInfo, create_business_profile, delete_business_profile, get_business_profile,
    get_mentor_assignments, get_youth_relationships, list_business_profiles,
    replace_youth_relationships, update_business_profile,
};

use super::helpers::{
    business_request, create_test_mentor, create_test_persistence, create_test_youth,
};

fn create_business(
    persistence: &mut Persistence,
    district: &str,
    youth_ids: Vec<i64>,
) -> CreateBusinessProfileResponse {
    let request = business_request("Shea Butter Co", district, youth_ids);
    create_business_profile(persistence, request).expect("Failed to create business")
}

#[test]
fn test_create_business_derives_owner_and_canonical_district() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let kofi = create_test_youth(&mut persistence, "Kofi Boateng");

    let created = create_business(
        &mut persistence,
        "  lower manya krobo ",
        vec![ama.id, kofi.id],
    );

    assert_eq!(created.business.district, "Lower Manya Krobo");
    assert_eq!(created.business.business_name, "Shea Butter Co");
    assert_eq!(
        created.business.enterprise_owner_youth_ids,
        vec![ama.id, kofi.id]
    );
    assert_eq!(
        created.business.enterprise_owner_name.as_deref(),
        Some("Ama Mensah + 1 others")
    );
    assert_eq!(created.business.total_youth_in_work_reported, 2);
    assert_eq!(created.assigned_mentor_id, None);
}

#[test]
fn test_create_business_assigns_district_mentor() {
    let mut persistence: Persistence = create_test_persistence();
    let mentor = create_test_mentor(&mut persistence, "Esi", &["Gushegu"]);
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let kofi = create_test_youth(&mut persistence, "Kofi Boateng");

    let created = create_business(&mut persistence, "Gushegu", vec![ama.id, kofi.id]);
    assert_eq!(created.assigned_mentor_id, Some(mentor.id));

    let assignments = get_mentor_assignments(&mut persistence, created.business.id).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].mentor_id, mentor.id);
    assert_eq!(assignments[0].mentor_name, "Esi");
    assert_eq!(
        assignments[0].assigned_districts,
        vec![String::from("Gushegu")]
    );
    assert_eq!(
        assignments[0].mentorship_focus.as_deref(),
        Some("General business development")
    );
}

#[test]
fn test_create_business_rejects_blank_name() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");

    let result = create_business_profile(
        &mut persistence,
        business_request("   ", "Bekwai", vec![ama.id]),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "businessName"
    ));
}

#[test]
fn test_create_business_rejects_unknown_district() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");

    let result = create_business_profile(
        &mut persistence,
        business_request("Shea Butter Co", "Accra", vec![ama.id]),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "district"
    ));
}

#[test]
fn test_create_business_requires_youth() {
    let mut persistence: Persistence = create_test_persistence();

    let result = create_business_profile(
        &mut persistence,
        business_request("Shea Butter Co", "Bekwai", Vec::new()),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "youthIds"
    ));
}

#[test]
fn test_create_business_rejects_non_positive_youth_id() {
    let mut persistence: Persistence = create_test_persistence();

    let result = create_business_profile(
        &mut persistence,
        business_request("Shea Butter Co", "Bekwai", vec![0]),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "youthIds"
    ));
}

#[test]
fn test_create_business_with_unknown_youth_leaves_nothing_behind() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");

    let result = create_business_profile(
        &mut persistence,
        business_request("Shea Butter Co", "Bekwai", vec![ama.id, 999]),
    );

    match result {
        Err(ApiError::ResourceNotFound {
            resource_type,
            message,
        }) => {
            assert_eq!(resource_type, "Youth profile");
            assert!(message.contains("999"));
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
    assert!(list_business_profiles(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_replace_youth_relationships_recomputes_owner() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let kofi = create_test_youth(&mut persistence, "Kofi Boateng");
    let yaw = create_test_youth(&mut persistence, "Yaw Owusu");
    let created = create_business(&mut persistence, "Bekwai", vec![ama.id, kofi.id]);

    let request = ReplaceYouthRelationshipsRequest {
        business_id: created.business.id,
        youth_ids: vec![yaw.id, ama.id],
    };
    let response: SuccessResponse =
        replace_youth_relationships(&mut persistence, &request).unwrap();
    assert!(response.success);

    let business: BusinessProfileInfo =
        get_business_profile(&mut persistence, created.business.id).unwrap();
    assert_eq!(business.enterprise_owner_youth_ids, vec![yaw.id, ama.id]);
    assert_eq!(
        business.enterprise_owner_name.as_deref(),
        Some("Yaw Owusu + 1 others")
    );

    let relationships: Vec<YouthRelationshipInfo> =
        get_youth_relationships(&mut persistence, created.business.id).unwrap();
    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[0].youth_id, yaw.id);
    assert_eq!(relationships[0].role, "Owner");
    assert_eq!(relationships[0].youth_name, "Yaw Owusu");
    assert_eq!(relationships[1].youth_id, ama.id);
    assert_eq!(relationships[1].role, "Member");
}

#[test]
fn test_replace_youth_relationships_unknown_business() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");

    let request = ReplaceYouthRelationshipsRequest {
        business_id: 42,
        youth_ids: vec![ama.id],
    };
    let result = replace_youth_relationships(&mut persistence, &request);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. })
            if resource_type == "Business profile"
    ));
}

#[test]
fn test_update_business_profile_applies_partial_changes() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let created = create_business(&mut persistence, "Bekwai", vec![ama.id]);

    let request = UpdateBusinessProfileRequest {
        business_name: Some(String::from("  Shea & Co ")),
        district: Some(String::from("yilo krobo")),
        ..UpdateBusinessProfileRequest::default()
    };
    let updated: BusinessProfileInfo =
        update_business_profile(&mut persistence, created.business.id, request).unwrap();

    assert_eq!(updated.business_name, "Shea & Co");
    assert_eq!(updated.district, "Yilo Krobo");
    assert_eq!(updated.enterprise_owner_youth_ids, vec![ama.id]);
    assert_eq!(updated.enterprise_owner_name.as_deref(), Some("Ama Mensah"));
}

#[test]
fn test_blank_free_text_is_stored_as_absent_on_create_and_update() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let request = CreateBusinessProfileRequest {
        business_type: Some(String::from("  Bakery ")),
        business_description: Some(String::from("   ")),
        ..business_request("Bekwai Bakes", "Bekwai", vec![ama.id])
    };
    let created = create_business_profile(&mut persistence, request).unwrap();

    assert_eq!(created.business.business_type.as_deref(), Some("Bakery"));
    assert_eq!(created.business.business_description, None);

    let request = UpdateBusinessProfileRequest {
        business_type: Some(String::from("  ")),
        business_description: Some(String::from(" Fresh bread ")),
        ..UpdateBusinessProfileRequest::default()
    };
    let updated: BusinessProfileInfo =
        update_business_profile(&mut persistence, created.business.id, request).unwrap();

    assert_eq!(updated.business_type, None);
    assert_eq!(updated.business_description.as_deref(), Some("Fresh bread"));

    let request = UpdateBusinessProfileRequest {
        business_name: Some(String::from("Bekwai Breads")),
        ..UpdateBusinessProfileRequest::default()
    };
    let updated: BusinessProfileInfo =
        update_business_profile(&mut persistence, created.business.id, request).unwrap();

    assert_eq!(updated.business_type, None);
    assert_eq!(updated.business_description.as_deref(), Some("Fresh bread"));
}

#[test]
fn test_update_business_profile_with_youth_ids_recomputes() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let kofi = create_test_youth(&mut persistence, "Kofi Boateng");
    let created = create_business(&mut persistence, "Bekwai", vec![ama.id]);

    let request = UpdateBusinessProfileRequest {
        youth_ids: Some(vec![kofi.id, ama.id]),
        ..UpdateBusinessProfileRequest::default()
    };
    let updated: BusinessProfileInfo =
        update_business_profile(&mut persistence, created.business.id, request).unwrap();

    assert_eq!(updated.total_youth_in_work_reported, 2);
    assert_eq!(
        updated.enterprise_owner_name.as_deref(),
        Some("Kofi Boateng + 1 others")
    );
}

#[test]
fn test_update_unknown_business_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_business_profile(
        &mut persistence,
        7,
        UpdateBusinessProfileRequest {
            business_name: Some(String::from("Anything")),
            ..UpdateBusinessProfileRequest::default()
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_business_profile() {
    let mut persistence: Persistence = create_test_persistence();
    let ama = create_test_youth(&mut persistence, "Ama Mensah");
    let created = create_business(&mut persistence, "Bekwai", vec![ama.id]);

    let response = delete_business_profile(&mut persistence, created.business.id).unwrap();
    assert!(response.success);

    assert!(matches!(
        get_business_profile(&mut persistence, created.business.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        delete_business_profile(&mut persistence, created.business.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_mentor_assignments_for_unknown_business() {
    let mut persistence: Persistence = create_test_persistence();

    let result = get_mentor_assignments(&mut persistence, 404);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. })
            if resource_type == "Business profile"
    ));
}
