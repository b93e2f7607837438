// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! This module contains all state-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `youth`: Youth profile inserts
//! - `mentors`: Mentor inserts, status changes and mentor assignments
//! - `business`: Single-row business profile writes
//! - `relationships`: Youth-business relationship replacement
//! - `write_path`: Transactional orchestration (create, replace, update)

pub mod business;
pub mod mentors;
pub mod relationships;
pub mod write_path;
pub mod youth;

pub use business::delete_business_profile;
pub use mentors::{assign_mentor, create_mentor, set_mentor_active};
pub use write_path::{
    DEFAULT_MENTORSHIP_FOCUS, create_business_profile, replace_business_youth,
    update_business_profile,
};
pub use youth::create_youth_profile;
