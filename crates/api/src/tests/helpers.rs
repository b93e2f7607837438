// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use yep_persistence::Persistence;

use crate::{
    CreateBusinessProfileRequest, CreateMentorRequest, CreateYouthProfileRequest, MentorInfo,
    YouthProfileInfo, create_mentor, create_youth_profile,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn youth_request(full_name: &str) -> CreateYouthProfileRequest {
    CreateYouthProfileRequest {
        full_name: Some(full_name.to_string()),
        gender: Some(String::from("Female")),
        date_of_birth: Some(String::from("2001-04-12")),
        ..CreateYouthProfileRequest::default()
    }
}

pub fn create_test_youth(persistence: &mut Persistence, full_name: &str) -> YouthProfileInfo {
    create_youth_profile(persistence, youth_request(full_name)).expect("Failed to create youth")
}

pub fn create_test_mentor(
    persistence: &mut Persistence,
    name: &str,
    districts: &[&str],
) -> MentorInfo {
    let request: CreateMentorRequest = CreateMentorRequest {
        name: name.to_string(),
        email: Some(format!("{}@example.org", name.to_lowercase())),
        assigned_districts: districts.iter().map(ToString::to_string).collect(),
        ..CreateMentorRequest::default()
    };
    create_mentor(persistence, request).expect("Failed to create mentor")
}

pub fn business_request(
    name: &str,
    district: &str,
    youth_ids: Vec<i64>,
) -> CreateBusinessProfileRequest {
    CreateBusinessProfileRequest {
        business_name: name.to_string(),
        district: district.to_string(),
        youth_ids,
        business_type: None,
        business_description: None,
    }
}
