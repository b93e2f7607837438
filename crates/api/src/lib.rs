// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API layer for the Youth Entrepreneurship Program registry.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! owns the request and response DTOs, validates and normalizes input
//! with the domain rules, and maps domain and persistence failures onto
//! the API error contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_business_profile, create_mentor, create_youth_profile, delete_business_profile,
    get_business_profile, get_mentor_assignments, get_youth_profile, get_youth_relationships,
    list_business_profiles, list_mentors, list_youth_profiles, replace_youth_relationships,
    update_business_profile, update_mentor_status,
};
pub use request_response::{
    BusinessProfileInfo, CreateBusinessProfileRequest, CreateBusinessProfileResponse,
    CreateMentorRequest, CreateYouthProfileRequest, MentorAssignmentInfo, MentorInfo,
    ReplaceYouthRelationshipsRequest, SuccessResponse, UpdateBusinessProfileRequest,
    UpdateMentorStatusRequest, YouthProfileInfo, YouthRelationshipInfo,
};
