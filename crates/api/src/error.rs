// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use yep_domain::DomainError;
use yep_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Creates an `InvalidInput` error for a request field.
    #[must_use]
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Each domain validation failure is attributed to the request field it
/// came from.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidDistrict(_) => "district",
        DomainError::InvalidYouthId(_) => "youthIds",
        DomainError::InvalidBusinessName(_) => "businessName",
        DomainError::InvalidMentorName(_) => "name",
        DomainError::InvalidYouthName(_) => "fullName",
        DomainError::DateParseError { .. } => "dateOfBirth",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// Missing records become `ResourceNotFound`. Everything else is an
/// internal error carrying the underlying message.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::BusinessNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Business profile"),
            message: format!("Business profile {id} does not exist"),
        },
        PersistenceError::YouthNotFound(ids) => {
            let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
            ApiError::ResourceNotFound {
                resource_type: String::from("Youth profile"),
                message: format!("Youth profiles do not exist: {}", joined.join(", ")),
            }
        }
        PersistenceError::MentorNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Mentor"),
            message: format!("Mentor {id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
