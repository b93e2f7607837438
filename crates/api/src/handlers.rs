// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers validate and normalize request DTOs, call the persistence
//! layer and translate its results into response DTOs. District names are
//! always stored in their canonical spelling.

use tracing::{debug, info};
use yep_domain::{
    District, parse_district, parse_districts, validate_business_name, validate_date_of_birth,
    validate_mentor_name, validate_youth_ids, validate_youth_name,
};
use yep_persistence::{
    BusinessProfileChanges, BusinessProfileData, CreatedBusiness, MentorData, NewBusinessProfile,
    NewMentor, NewYouthProfile, Persistence, YouthProfileData,
};

use crate::error::ApiError;
use crate::request_response::{
    BusinessProfileInfo, CreateBusinessProfileRequest, CreateBusinessProfileResponse,
    CreateMentorRequest, CreateYouthProfileRequest, MentorAssignmentInfo, MentorInfo,
    ReplaceYouthRelationshipsRequest, SuccessResponse, UpdateBusinessProfileRequest,
    UpdateMentorStatusRequest, YouthProfileInfo, YouthRelationshipInfo,
};

/// Trims an optional free-text field, treating blank input as absent.
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes a free-text field of a partial update. A supplied blank
/// value clears the field; an absent one leaves it unchanged.
#[allow(clippy::option_option)]
fn normalize_text_change(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| normalize_text(Some(v)))
}

fn canonical_district(district: &str) -> Result<String, ApiError> {
    let parsed: District = parse_district(district)?;
    Ok(parsed.as_str().to_string())
}

fn business_not_found(business_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Business profile"),
        message: format!("Business profile {business_id} does not exist"),
    }
}

// ============================================================================
// Business Profiles
// ============================================================================

/// Creates a business profile.
///
/// The first youth ID becomes the enterprise owner. A mentor serving the
/// district is assigned automatically when one is available.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The create request
///
/// # Errors
///
/// Returns an error if:
/// - The business name is blank
/// - The district is not a program district
/// - `youthIds` is empty or contains a non-positive ID
/// - Any youth ID does not exist
/// - Database operations fail
pub fn create_business_profile(
    persistence: &mut Persistence,
    request: CreateBusinessProfileRequest,
) -> Result<CreateBusinessProfileResponse, ApiError> {
    let business_name: String = validate_business_name(&request.business_name)?;
    let district: String = canonical_district(&request.district)?;

    if request.youth_ids.is_empty() {
        return Err(ApiError::invalid_input(
            "youthIds",
            "At least one youth ID is required",
        ));
    }
    validate_youth_ids(&request.youth_ids)?;

    let profile: NewBusinessProfile = NewBusinessProfile {
        business_name,
        business_type: normalize_text(request.business_type),
        business_description: normalize_text(request.business_description),
        district,
        youth_ids: request.youth_ids,
    };

    let created: CreatedBusiness = persistence.create_business_profile(&profile)?;

    info!(
        business_id = created.business.business_id,
        district = %profile.district,
        assigned_mentor_id = created.assigned_mentor_id,
        "Business profile created"
    );

    Ok(CreateBusinessProfileResponse::from(created))
}

/// Replaces the active youth linked to a business.
///
/// Youth not in the new list are deactivated. The owner and impact fields
/// are recomputed from the new list.
///
/// # Errors
///
/// Returns an error if:
/// - `youthIds` contains a non-positive ID
/// - The business or any youth does not exist
/// - Database operations fail
pub fn replace_youth_relationships(
    persistence: &mut Persistence,
    request: &ReplaceYouthRelationshipsRequest,
) -> Result<SuccessResponse, ApiError> {
    validate_youth_ids(&request.youth_ids)?;

    let updated: BusinessProfileData =
        persistence.replace_business_youth(request.business_id, &request.youth_ids)?;

    info!(
        business_id = updated.business_id,
        youth_count = request.youth_ids.len(),
        "Youth relationships replaced"
    );

    Ok(SuccessResponse::new(format!(
        "Updated youth relationships for business {}",
        updated.business_id
    )))
}

/// Applies a partial update to a business profile.
///
/// # Errors
///
/// Returns an error if:
/// - A supplied name, district or youth ID is invalid
/// - The business or any youth does not exist
/// - Database operations fail
pub fn update_business_profile(
    persistence: &mut Persistence,
    business_id: i64,
    request: UpdateBusinessProfileRequest,
) -> Result<BusinessProfileInfo, ApiError> {
    let business_name: Option<String> = request
        .business_name
        .as_deref()
        .map(validate_business_name)
        .transpose()?;
    let district: Option<String> = request
        .district
        .as_deref()
        .map(canonical_district)
        .transpose()?;
    if let Some(youth_ids) = &request.youth_ids {
        validate_youth_ids(youth_ids)?;
    }

    let changes: BusinessProfileChanges = BusinessProfileChanges {
        business_name,
        business_type: normalize_text_change(request.business_type),
        business_description: normalize_text_change(request.business_description),
        district,
        youth_ids: request.youth_ids,
    };

    let updated: BusinessProfileData = persistence.update_business_profile(business_id, &changes)?;

    info!(
        business_id,
        youth_replaced = changes.youth_ids.is_some(),
        "Business profile updated"
    );

    Ok(BusinessProfileInfo::from(updated))
}

/// Deletes a business profile and its relationships.
///
/// # Errors
///
/// Returns an error if the business does not exist or the delete fails.
pub fn delete_business_profile(
    persistence: &mut Persistence,
    business_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence.delete_business_profile(business_id)?;

    info!(business_id, "Business profile deleted");

    Ok(SuccessResponse::new(format!(
        "Deleted business profile {business_id}"
    )))
}

/// Lists all business profiles.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_business_profiles(
    persistence: &mut Persistence,
) -> Result<Vec<BusinessProfileInfo>, ApiError> {
    let businesses: Vec<BusinessProfileData> = persistence.list_business_profiles()?;
    debug!(count = businesses.len(), "Listed business profiles");
    Ok(businesses
        .into_iter()
        .map(BusinessProfileInfo::from)
        .collect())
}

/// Retrieves a business profile.
///
/// # Errors
///
/// Returns an error if the business does not exist or the query fails.
pub fn get_business_profile(
    persistence: &mut Persistence,
    business_id: i64,
) -> Result<BusinessProfileInfo, ApiError> {
    persistence
        .get_business_profile(business_id)?
        .map(BusinessProfileInfo::from)
        .ok_or_else(|| business_not_found(business_id))
}

/// Lists the active mentor assignments of a business.
///
/// # Errors
///
/// Returns an error if the business does not exist or the query fails.
pub fn get_mentor_assignments(
    persistence: &mut Persistence,
    business_id: i64,
) -> Result<Vec<MentorAssignmentInfo>, ApiError> {
    let assignments = persistence.get_mentor_assignments(business_id)?;
    debug!(
        business_id,
        count = assignments.len(),
        "Fetched mentor assignments"
    );
    Ok(assignments
        .into_iter()
        .map(MentorAssignmentInfo::from)
        .collect())
}

/// Lists the active youth relationships of a business, owner first.
///
/// # Errors
///
/// Returns an error if the business does not exist or the query fails.
pub fn get_youth_relationships(
    persistence: &mut Persistence,
    business_id: i64,
) -> Result<Vec<YouthRelationshipInfo>, ApiError> {
    let relationships = persistence.get_youth_relationships(business_id)?;
    Ok(relationships
        .into_iter()
        .map(YouthRelationshipInfo::from)
        .collect())
}

// ============================================================================
// Youth Profiles
// ============================================================================

/// Registers a youth participant.
///
/// # Errors
///
/// Returns an error if:
/// - No name field is supplied
/// - The date of birth is not `YYYY-MM-DD`
/// - A supplied district is not a program district
/// - Database operations fail
pub fn create_youth_profile(
    persistence: &mut Persistence,
    request: CreateYouthProfileRequest,
) -> Result<YouthProfileInfo, ApiError> {
    validate_youth_name(
        request.full_name.as_deref(),
        request.first_name.as_deref(),
        request.last_name.as_deref(),
    )?;

    let date_of_birth: Option<String> = normalize_text(request.date_of_birth);
    validate_date_of_birth(date_of_birth.as_deref())?;

    let district: Option<String> = normalize_text(request.district)
        .as_deref()
        .map(canonical_district)
        .transpose()?;

    let profile: NewYouthProfile = NewYouthProfile {
        full_name: normalize_text(request.full_name),
        first_name: normalize_text(request.first_name),
        middle_name: normalize_text(request.middle_name),
        last_name: normalize_text(request.last_name),
        gender: normalize_text(request.gender),
        date_of_birth,
        district,
        refugee_status: request.refugee_status,
        idp_status: request.idp_status,
        host_community_status: normalize_text(request.host_community_status),
        pwd_status: normalize_text(request.pwd_status),
    };

    let youth_id: i64 = persistence.create_youth_profile(&profile)?;
    info!(youth_id, "Youth profile created");

    get_youth_profile(persistence, youth_id)
}

/// Lists all youth profiles.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_youth_profiles(
    persistence: &mut Persistence,
) -> Result<Vec<YouthProfileInfo>, ApiError> {
    let youth: Vec<YouthProfileData> = persistence.list_youth_profiles()?;
    debug!(count = youth.len(), "Listed youth profiles");
    Ok(youth.into_iter().map(YouthProfileInfo::from).collect())
}

/// Retrieves a youth profile.
///
/// # Errors
///
/// Returns an error if the youth does not exist or the query fails.
pub fn get_youth_profile(
    persistence: &mut Persistence,
    youth_id: i64,
) -> Result<YouthProfileInfo, ApiError> {
    persistence
        .get_youth_profile(youth_id)?
        .map(YouthProfileInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Youth profile"),
            message: format!("Youth profile {youth_id} does not exist"),
        })
}

// ============================================================================
// Mentors
// ============================================================================

/// Registers a mentor.
///
/// Both the legacy single district and the district list are stored in
/// canonical spelling; repeated districts are dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - Any district is not a program district
/// - Database operations fail
pub fn create_mentor(
    persistence: &mut Persistence,
    request: CreateMentorRequest,
) -> Result<MentorInfo, ApiError> {
    let name: String = validate_mentor_name(&request.name)?;

    let assigned_district: Option<String> = normalize_text(request.assigned_district)
        .as_deref()
        .map(canonical_district)
        .transpose()?;

    let assigned_districts: Vec<String> = parse_districts(&request.assigned_districts)
        .map_err(|e| ApiError::invalid_input("assignedDistricts", e.to_string()))?
        .iter()
        .map(|d| d.as_str().to_string())
        .collect();

    let mentor: NewMentor = NewMentor {
        name,
        email: normalize_text(request.email),
        phone: normalize_text(request.phone),
        specialization: normalize_text(request.specialization),
        assigned_district,
        assigned_districts,
        is_active: request.is_active.unwrap_or(true),
    };

    let mentor_id: i64 = persistence.create_mentor(&mentor)?;
    info!(
        mentor_id,
        districts = mentor.assigned_districts.len(),
        "Mentor created"
    );

    fetch_mentor(persistence, mentor_id)
}

/// Lists all mentors.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_mentors(persistence: &mut Persistence) -> Result<Vec<MentorInfo>, ApiError> {
    let mentors: Vec<MentorData> = persistence.list_mentors()?;
    debug!(count = mentors.len(), "Listed mentors");
    Ok(mentors.into_iter().map(MentorInfo::from).collect())
}

/// Activates or deactivates a mentor.
///
/// Inactive mentors keep their existing assignments but are never
/// selected for new businesses.
///
/// # Errors
///
/// Returns an error if the mentor does not exist or the update fails.
pub fn update_mentor_status(
    persistence: &mut Persistence,
    mentor_id: i64,
    request: UpdateMentorStatusRequest,
) -> Result<MentorInfo, ApiError> {
    persistence.set_mentor_active(mentor_id, request.is_active)?;
    info!(
        mentor_id,
        is_active = request.is_active,
        "Mentor status updated"
    );
    fetch_mentor(persistence, mentor_id)
}

fn fetch_mentor(persistence: &mut Persistence, mentor_id: i64) -> Result<MentorInfo, ApiError> {
    persistence
        .get_mentor(mentor_id)?
        .map(MentorInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Mentor"),
            message: format!("Mentor {mentor_id} does not exist"),
        })
}
