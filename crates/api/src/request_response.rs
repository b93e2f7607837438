// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! All DTOs use camelCase field names on the wire.

use serde::{Deserialize, Serialize};
use yep_persistence::{
    BusinessProfileData, CreatedBusiness, MentorAssignmentData, MentorData, YouthProfileData,
    YouthRelationshipData,
};

// ============================================================================
// Business Profiles
// ============================================================================

/// API request to create a business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessProfileRequest {
    pub business_name: String,
    pub district: String,
    /// Youth IDs in submission order; the first is the enterprise owner.
    pub youth_ids: Vec<i64>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
}

/// API request to replace the youth linked to a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceYouthRelationshipsRequest {
    pub business_id: i64,
    pub youth_ids: Vec<i64>,
}

/// API request to partially update a business profile.
///
/// Absent fields are left unchanged. Supplying `youthIds` replaces the
/// linked youth and recomputes the owner and impact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessProfileRequest {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub youth_ids: Option<Vec<i64>>,
}

/// A business profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileInfo {
    pub id: i64,
    pub business_name: String,
    pub business_type: Option<String>,
    pub business_description: Option<String>,
    pub district: String,
    pub enterprise_owner_youth_ids: Vec<i64>,
    pub enterprise_owner_name: Option<String>,
    pub enterprise_owner_dob: Option<String>,
    pub enterprise_owner_sex: Option<String>,
    pub total_youth_in_work_reported: i32,
    pub youth_refugee_count: i32,
    pub youth_idp_count: i32,
    pub youth_host_community_count: i32,
    pub youth_plwd_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BusinessProfileData> for BusinessProfileInfo {
    fn from(data: BusinessProfileData) -> Self {
        Self {
            id: data.business_id,
            business_name: data.business_name,
            business_type: data.business_type,
            business_description: data.business_description,
            district: data.district,
            enterprise_owner_youth_ids: data.enterprise_owner_youth_ids,
            enterprise_owner_name: data.enterprise_owner_name,
            enterprise_owner_dob: data.enterprise_owner_dob,
            enterprise_owner_sex: data.enterprise_owner_sex,
            total_youth_in_work_reported: data.total_youth_in_work_reported,
            youth_refugee_count: data.youth_refugee_count,
            youth_idp_count: data.youth_idp_count,
            youth_host_community_count: data.youth_host_community_count,
            youth_plwd_count: data.youth_plwd_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

/// API response for a successful business profile creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessProfileResponse {
    #[serde(flatten)]
    pub business: BusinessProfileInfo,
    /// The mentor assigned automatically, or `null` if none was available.
    pub assigned_mentor_id: Option<i64>,
}

impl From<CreatedBusiness> for CreateBusinessProfileResponse {
    fn from(created: CreatedBusiness) -> Self {
        Self {
            business: created.business.into(),
            assigned_mentor_id: created.assigned_mentor_id,
        }
    }
}

/// An active mentor assignment with a mentor summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorAssignmentInfo {
    pub id: i64,
    pub mentor_id: i64,
    pub business_id: i64,
    pub assigned_date: String,
    pub is_active: bool,
    pub mentorship_focus: Option<String>,
    pub mentor_name: String,
    pub mentor_email: Option<String>,
    pub mentor_phone: Option<String>,
    pub assigned_district: Option<String>,
    pub assigned_districts: Vec<String>,
}

impl From<MentorAssignmentData> for MentorAssignmentInfo {
    fn from(data: MentorAssignmentData) -> Self {
        Self {
            id: data.assignment_id,
            mentor_id: data.mentor_id,
            business_id: data.business_id,
            assigned_date: data.assigned_date,
            is_active: data.is_active,
            mentorship_focus: data.mentorship_focus,
            mentor_name: data.mentor_name,
            mentor_email: data.mentor_email,
            mentor_phone: data.mentor_phone,
            assigned_district: data.assigned_district,
            assigned_districts: data.assigned_districts,
        }
    }
}

/// An active youth relationship with the youth's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthRelationshipInfo {
    pub id: i64,
    pub business_id: i64,
    pub youth_id: i64,
    pub youth_name: String,
    /// `Owner` or `Member`.
    pub role: String,
    pub join_date: String,
    pub is_active: bool,
}

impl From<YouthRelationshipData> for YouthRelationshipInfo {
    fn from(data: YouthRelationshipData) -> Self {
        Self {
            id: data.relationship_id,
            business_id: data.business_id,
            youth_id: data.youth_id,
            youth_name: data.youth_name,
            role: data.role,
            join_date: data.join_date,
            is_active: data.is_active,
        }
    }
}

/// Generic acknowledgement for writes that return no entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Youth Profiles
// ============================================================================

/// API request to register a youth participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateYouthProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub refugee_status: bool,
    #[serde(default)]
    pub idp_status: bool,
    #[serde(default)]
    pub host_community_status: Option<String>,
    #[serde(default)]
    pub pwd_status: Option<String>,
}

/// A youth profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthProfileInfo {
    pub id: i64,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub district: Option<String>,
    pub refugee_status: bool,
    pub idp_status: bool,
    pub host_community_status: Option<String>,
    pub pwd_status: Option<String>,
    pub created_at: String,
}

impl From<YouthProfileData> for YouthProfileInfo {
    fn from(data: YouthProfileData) -> Self {
        Self {
            id: data.youth_id,
            full_name: data.full_name,
            first_name: data.first_name,
            middle_name: data.middle_name,
            last_name: data.last_name,
            gender: data.gender,
            date_of_birth: data.date_of_birth,
            district: data.district,
            refugee_status: data.refugee_status,
            idp_status: data.idp_status,
            host_community_status: data.host_community_status,
            pwd_status: data.pwd_status,
            created_at: data.created_at,
        }
    }
}

// ============================================================================
// Mentors
// ============================================================================

/// API request to register a mentor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    /// Legacy single district.
    #[serde(default)]
    pub assigned_district: Option<String>,
    #[serde(default)]
    pub assigned_districts: Vec<String>,
    /// Defaults to active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// API request to activate or deactivate a mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentorStatusRequest {
    pub is_active: bool,
}

/// A mentor as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorInfo {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub assigned_district: Option<String>,
    pub assigned_districts: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<MentorData> for MentorInfo {
    fn from(data: MentorData) -> Self {
        Self {
            id: data.mentor_id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            specialization: data.specialization,
            assigned_district: data.assigned_district,
            assigned_districts: data.assigned_districts,
            is_active: data.is_active,
            created_at: data.created_at,
        }
    }
}
