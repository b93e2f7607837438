// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod enterprise_owner;
mod error;
mod mentor_selection;
mod types;
mod validation;
mod youth_metrics;

#[cfg(test)]
mod tests;

// Re-export public types
pub use enterprise_owner::{EnterpriseOwner, assign_relationship_roles, derive_enterprise_owner};
pub use error::DomainError;
pub use mentor_selection::{
    AssignedDistrictsError, filter_district_candidates, mentor_serves_district,
    parse_assigned_districts, pick_least_loaded,
};
pub use types::{AFFIRMATIVE, District, MentorCandidate, RelationshipRole, YouthRecord};
pub use validation::{
    parse_district, parse_districts, validate_business_name, validate_date_of_birth,
    validate_mentor_name, validate_youth_ids, validate_youth_name,
};
pub use youth_metrics::{YouthImpactMetrics, aggregate_youth_metrics};
