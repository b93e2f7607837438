// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Youth Entrepreneurship Program registry.
//!
//! This crate stores youth profiles, business profiles, mentors and the
//! relationships between them in `SQLite` through Diesel. It also owns the
//! business profile write path, which keeps each business's derived owner
//! and impact fields in step with its active youth relationships.
//!
//! ## Storage
//!
//! - In-memory databases back the test suites. Each call to
//!   [`Persistence::new_in_memory`] gets its own shared-cache database.
//! - File databases run in WAL mode.
//! - Foreign keys are always enforced; deleting a business removes its
//!   relationship rows.
//!
//! Migrations are embedded in the binary and applied on open.
//!
//! ## Structured Columns
//!
//! `enterprise_owner_youth_ids` and `assigned_districts` hold JSON arrays.
//! They are `NOT NULL` with a `'[]'` default and are only ever written by
//! serializing typed values.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use data_models::{
    BusinessProfileChanges, BusinessProfileData, CreatedBusiness, MentorAssignmentData,
    MentorData, NewBusinessProfile, NewMentor, NewYouthProfile, YouthProfileData,
    YouthRelationshipData,
};
pub use error::PersistenceError;
pub use mutations::DEFAULT_MENTORSHIP_FOCUS;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the registry database.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance, so tests never share
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Youth Profiles
    // ========================================================================

    /// Creates a youth profile and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_youth_profile(
        &mut self,
        profile: &NewYouthProfile,
    ) -> Result<i64, PersistenceError> {
        mutations::create_youth_profile(&mut self.conn, profile)
    }

    /// Lists all youth profiles ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_youth_profiles(&mut self) -> Result<Vec<YouthProfileData>, PersistenceError> {
        queries::list_youth_profiles(&mut self.conn)
    }

    /// Retrieves a youth profile by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_youth_profile(
        &mut self,
        youth_id: i64,
    ) -> Result<Option<YouthProfileData>, PersistenceError> {
        queries::get_youth_profile(&mut self.conn, youth_id)
    }

    // ========================================================================
    // Business Profiles
    // ========================================================================

    /// Creates a business profile, links its youth and auto-assigns a mentor.
    ///
    /// # Errors
    ///
    /// Returns an error if any youth ID is unknown or a write fails.
    pub fn create_business_profile(
        &mut self,
        profile: &NewBusinessProfile,
    ) -> Result<CreatedBusiness, PersistenceError> {
        mutations::create_business_profile(&mut self.conn, profile)
    }

    /// Replaces the active youth set of a business.
    ///
    /// # Errors
    ///
    /// Returns an error if the business or any youth is unknown, or a
    /// write fails.
    pub fn replace_business_youth(
        &mut self,
        business_id: i64,
        youth_ids: &[i64],
    ) -> Result<BusinessProfileData, PersistenceError> {
        mutations::replace_business_youth(&mut self.conn, business_id, youth_ids)
    }

    /// Applies a partial update to a business profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the business or any youth is unknown, or a
    /// write fails.
    pub fn update_business_profile(
        &mut self,
        business_id: i64,
        changes: &BusinessProfileChanges,
    ) -> Result<BusinessProfileData, PersistenceError> {
        mutations::update_business_profile(&mut self.conn, business_id, changes)
    }

    /// Deletes a business profile and its relationships.
    ///
    /// # Errors
    ///
    /// Returns an error if the business is unknown or the delete fails.
    pub fn delete_business_profile(&mut self, business_id: i64) -> Result<(), PersistenceError> {
        mutations::delete_business_profile(&mut self.conn, business_id)
    }

    /// Lists all business profiles ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_business_profiles(&mut self) -> Result<Vec<BusinessProfileData>, PersistenceError> {
        queries::list_business_profiles(&mut self.conn)
    }

    /// Retrieves a business profile by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_business_profile(
        &mut self,
        business_id: i64,
    ) -> Result<Option<BusinessProfileData>, PersistenceError> {
        queries::get_business_profile(&mut self.conn, business_id)
    }

    /// Lists the active mentor assignments of a business.
    ///
    /// # Errors
    ///
    /// Returns an error if the business is unknown or the query fails.
    pub fn get_mentor_assignments(
        &mut self,
        business_id: i64,
    ) -> Result<Vec<MentorAssignmentData>, PersistenceError> {
        queries::get_mentor_assignments(&mut self.conn, business_id)
    }

    /// Lists the active youth relationships of a business, owner first.
    ///
    /// # Errors
    ///
    /// Returns an error if the business is unknown or the query fails.
    pub fn get_youth_relationships(
        &mut self,
        business_id: i64,
    ) -> Result<Vec<YouthRelationshipData>, PersistenceError> {
        queries::get_youth_relationships(&mut self.conn, business_id)
    }

    // ========================================================================
    // Mentors
    // ========================================================================

    /// Creates a mentor and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_mentor(&mut self, mentor: &NewMentor) -> Result<i64, PersistenceError> {
        mutations::create_mentor(&mut self.conn, mentor)
    }

    /// Lists all mentors ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_mentors(&mut self) -> Result<Vec<MentorData>, PersistenceError> {
        queries::list_mentors(&mut self.conn)
    }

    /// Retrieves a mentor by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_mentor(&mut self, mentor_id: i64) -> Result<Option<MentorData>, PersistenceError> {
        queries::get_mentor(&mut self.conn, mentor_id)
    }

    /// Activates or deactivates a mentor.
    ///
    /// # Errors
    ///
    /// Returns an error if the mentor is unknown or the update fails.
    pub fn set_mentor_active(
        &mut self,
        mentor_id: i64,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::set_mentor_active(&mut self.conn, mentor_id, is_active)
    }

    /// Records an active mentor assignment and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn assign_mentor(
        &mut self,
        mentor_id: i64,
        business_id: i64,
        mentorship_focus: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::assign_mentor(&mut self.conn, mentor_id, business_id, mentorship_focus)
    }

    /// Selects the least-loaded active mentor serving `district`.
    ///
    /// Never fails; problems are logged and reported as `None`.
    pub fn select_mentor_for_district(&mut self, district: &str) -> Option<i64> {
        queries::select_mentor_for_district(&mut self.conn, district)
    }
}
