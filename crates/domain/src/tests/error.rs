// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssignedDistrictsError, DomainError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDistrict(String::from("Accra"));
    assert_eq!(format!("{err}"), "Invalid district: 'Accra'");

    let err: DomainError = DomainError::InvalidYouthId(-3);
    assert_eq!(
        format!("{err}"),
        "Invalid youth ID: -3. Must be a positive integer"
    );

    let err: DomainError = DomainError::InvalidBusinessName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid business name: test");

    let err: DomainError = DomainError::InvalidMentorName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid mentor name: test");

    let err: DomainError = DomainError::InvalidYouthName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid youth name: test");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2001-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2001-13-01': bad month"
    );
}

#[test]
fn test_assigned_districts_error_display() {
    let err = AssignedDistrictsError::NotAnArray { found: "object" };
    assert_eq!(
        format!("{err}"),
        "assigned districts must be a JSON array, found object"
    );

    let err = AssignedDistrictsError::Malformed(String::from("EOF while parsing"));
    assert_eq!(
        format!("{err}"),
        "assigned districts is not valid JSON: EOF while parsing"
    );
}
