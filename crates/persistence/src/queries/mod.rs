// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `youth`: Youth profile lookups and record fetches for derivation
//! - `business`: Business profiles and their active relationships
//! - `mentors`: Mentor lookups, caseload counts and mentor selection

pub mod business;
pub mod mentors;
pub mod youth;

pub use business::{
    business_exists, get_business_profile, get_mentor_assignments, get_required_business_profile,
    get_youth_relationships, list_business_profiles,
};
pub use mentors::{get_mentor, list_mentors, select_mentor_for_district};
pub use youth::{get_required_youth_records, get_youth_profile, list_youth_profiles};
