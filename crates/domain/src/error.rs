// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// District name is not one of the program districts.
    InvalidDistrict(String),
    /// A youth identifier is not a positive integer.
    InvalidYouthId(i64),
    /// Business name is empty or invalid.
    InvalidBusinessName(String),
    /// Mentor name is empty or invalid.
    InvalidMentorName(String),
    /// Youth name fields are all empty.
    InvalidYouthName(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDistrict(district) => write!(f, "Invalid district: '{district}'"),
            Self::InvalidYouthId(id) => {
                write!(f, "Invalid youth ID: {id}. Must be a positive integer")
            }
            Self::InvalidBusinessName(msg) => write!(f, "Invalid business name: {msg}"),
            Self::InvalidMentorName(msg) => write!(f, "Invalid mentor name: {msg}"),
            Self::InvalidYouthName(msg) => write!(f, "Invalid youth name: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
