// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The literal value recorded for an affirmative yes/no survey answer.
///
/// Host-community and disability status are captured as free-form strings;
/// only this exact value counts as "yes".
pub const AFFIRMATIVE: &str = "Yes";

/// A program region used to scope businesses and mentor matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum District {
    Bekwai,
    Gushegu,
    LowerManyaKrobo,
    YiloKrobo,
}

impl District {
    /// All districts served by the program, in display order.
    pub const ALL: [Self; 4] = [
        Self::Bekwai,
        Self::Gushegu,
        Self::LowerManyaKrobo,
        Self::YiloKrobo,
    ];

    /// Returns the canonical spelling stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bekwai => "Bekwai",
            Self::Gushegu => "Gushegu",
            Self::LowerManyaKrobo => "Lower Manya Krobo",
            Self::YiloKrobo => "Yilo Krobo",
        }
    }
}

impl FromStr for District {
    type Err = DomainError;

    /// Parses a district name.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|district| district.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidDistrict(s.to_string()))
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The role a youth plays in a business they are associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipRole {
    /// The primary lead of the business (first submitted youth).
    Owner,
    /// Any other associated youth.
    Member,
}

impl RelationshipRole {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Member => "Member",
        }
    }
}

/// A youth participant as seen by the association rules.
///
/// This is read-only input: nothing in the association flow mutates
/// a youth record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthRecord {
    /// The canonical youth identifier.
    pub youth_id: i64,
    /// Full name as captured on the intake form.
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    /// Date of birth, `YYYY-MM-DD`, copied verbatim to owner fields.
    pub date_of_birth: Option<String>,
    pub refugee_status: bool,
    pub idp_status: bool,
    /// "Yes" or any other answer.
    pub host_community_status: Option<String>,
    /// "Yes" or any other answer.
    pub pwd_status: Option<String>,
}

impl YouthRecord {
    /// Creates a record with only an identifier and a full name.
    ///
    /// All demographic flags start out negative.
    #[must_use]
    pub fn new(youth_id: i64, full_name: &str) -> Self {
        Self {
            youth_id,
            full_name: Some(full_name.to_string()),
            first_name: None,
            middle_name: None,
            last_name: None,
            gender: None,
            date_of_birth: None,
            refugee_status: false,
            idp_status: false,
            host_community_status: None,
            pwd_status: None,
        }
    }

    /// Returns the name shown for this youth.
    ///
    /// Prefers the full name; falls back to the non-blank name parts joined
    /// by single spaces. Returns an empty string when nothing is recorded.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full_name: &str = self.full_name.as_deref().map_or("", str::trim);
        if !full_name.is_empty() {
            return full_name.to_string();
        }

        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Whether this youth is a member of the host community.
    #[must_use]
    pub fn is_host_community(&self) -> bool {
        self.host_community_status.as_deref() == Some(AFFIRMATIVE)
    }

    /// Whether this youth is a person living with a disability.
    #[must_use]
    pub fn is_pwd(&self) -> bool {
        self.pwd_status.as_deref() == Some(AFFIRMATIVE)
    }
}

/// A mentor as seen by the selection policy.
///
/// `assigned_districts` is kept in its raw stored form so that the selection
/// policy decides how to interpret legacy or malformed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorCandidate {
    /// The canonical mentor identifier.
    pub mentor_id: i64,
    /// Legacy single-district assignment.
    pub assigned_district: Option<String>,
    /// JSON-encoded list of district names.
    pub assigned_districts: String,
}

impl MentorCandidate {
    /// Creates a candidate from its stored fields.
    #[must_use]
    pub fn new(mentor_id: i64, assigned_district: Option<&str>, assigned_districts: &str) -> Self {
        Self {
            mentor_id,
            assigned_district: assigned_district.map(ToString::to_string),
            assigned_districts: assigned_districts.to_string(),
        }
    }
}
