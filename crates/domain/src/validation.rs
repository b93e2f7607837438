// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::District;
use time::Date;
use time::macros::format_description;

/// Validates a business name.
///
/// # Returns
///
/// The name with surrounding whitespace removed.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_business_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidBusinessName(String::from(
            "Business name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates a mentor name.
///
/// # Returns
///
/// The name with surrounding whitespace removed.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_mentor_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidMentorName(String::from(
            "Mentor name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates that a youth has at least one usable name field.
///
/// # Errors
///
/// Returns an error if the full name, first name and last name are all
/// missing or blank.
pub fn validate_youth_name(
    full_name: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(), DomainError> {
    let has_name: bool = [full_name, first_name, last_name]
        .into_iter()
        .flatten()
        .any(|part| !part.trim().is_empty());

    if !has_name {
        return Err(DomainError::InvalidYouthName(String::from(
            "A full name or first/last name is required",
        )));
    }
    Ok(())
}

/// Validates submitted youth IDs.
///
/// Duplicates are allowed; they are counted by the impact metrics.
///
/// # Errors
///
/// Returns an error for the first ID that is not a positive integer.
pub fn validate_youth_ids(youth_ids: &[i64]) -> Result<(), DomainError> {
    match youth_ids.iter().find(|id| **id <= 0) {
        Some(id) => Err(DomainError::InvalidYouthId(*id)),
        None => Ok(()),
    }
}

/// Parses a district name into a program district.
///
/// # Errors
///
/// Returns an error if the name is not a program district.
pub fn parse_district(district: &str) -> Result<District, DomainError> {
    district.parse()
}

/// Parses a list of district names, dropping repeats.
///
/// Order of first appearance is kept.
///
/// # Errors
///
/// Returns an error for the first name that is not a program district.
pub fn parse_districts(districts: &[String]) -> Result<Vec<District>, DomainError> {
    let mut parsed: Vec<District> = Vec::with_capacity(districts.len());
    for name in districts {
        let district: District = parse_district(name)?;
        if !parsed.contains(&district) {
            parsed.push(district);
        }
    }
    Ok(parsed)
}

/// Validates an optional `YYYY-MM-DD` date of birth.
///
/// # Errors
///
/// Returns an error if a date is given and it does not parse.
pub fn validate_date_of_birth(date_of_birth: Option<&str>) -> Result<(), DomainError> {
    let Some(date_string) = date_of_birth else {
        return Ok(());
    };

    Date::parse(date_string, format_description!("[year]-[month]-[day]"))
        .map(|_| ())
        .map_err(|e| DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        })
}
