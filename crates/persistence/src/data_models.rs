// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stored youth participant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthProfileData {
    pub youth_id: i64,
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

/// Fields for inserting a youth profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewYouthProfile {
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
}

/// A stored business profile with its derived owner and impact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfileData {
    pub business_id: i64,
    pub business_name: String,
    pub business_type: Option<String>,
    pub business_description: Option<String>,
    pub district: String,
    /// Youth IDs in the order they were submitted.
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

/// Fields for creating a business profile.
///
/// `district` is expected in its canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusinessProfile {
    pub business_name: String,
    pub business_type: Option<String>,
    pub business_description: Option<String>,
    pub district: String,
    pub youth_ids: Vec<i64>,
}

/// A partial update to a business profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::option_option)]
pub struct BusinessProfileChanges {
    pub business_name: Option<String>,
    /// `Some(None)` clears the column.
    pub business_type: Option<Option<String>>,
    /// `Some(None)` clears the column.
    pub business_description: Option<Option<String>>,
    pub district: Option<String>,
    /// Replaces the active youth set when present.
    pub youth_ids: Option<Vec<i64>>,
}

impl BusinessProfileChanges {
    /// Returns whether any scalar column would change.
    #[must_use]
    pub const fn has_scalar_changes(&self) -> bool {
        self.business_name.is_some()
            || self.business_type.is_some()
            || self.business_description.is_some()
            || self.district.is_some()
    }
}

/// Result of creating a business profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBusiness {
    pub business: BusinessProfileData,
    /// The mentor automatically assigned, if any.
    pub assigned_mentor_id: Option<i64>,
}

/// A stored mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorData {
    pub mentor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub assigned_district: Option<String>,
    pub assigned_districts: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// Fields for inserting a mentor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMentor {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub assigned_district: Option<String>,
    pub assigned_districts: Vec<String>,
    pub is_active: bool,
}

/// An active mentor assignment joined with a mentor summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorAssignmentData {
    pub assignment_id: i64,
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

/// An active youth-business relationship joined with the youth's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthRelationshipData {
    pub relationship_id: i64,
    pub business_id: i64,
    pub youth_id: i64,
    pub role: String,
    pub join_date: String,
    pub is_active: bool,
    pub youth_name: String,
}
