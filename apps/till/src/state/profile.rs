//! # Profile State
//!
//! Wraps the `Database` holding the operator's saved profile.
//!
//! ## Read vs Write
//! Reads happen once at startup and never fail outward: a missing or broken
//! entry means "use the defaults". Writes report their error so the display
//! can tell the operator that Save did not stick.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn save_profile(till: &TillState, profile: &ProfileState) -> Result<(), ApiError> {
//!     profile.put(COIN_WEIGHTS_KEY, &till.session().weights_payload()?).await?;
//!     Ok(())
//! }
//! ```

use tracing::warn;

use tillmate_db::{Database, DbResult};

/// Wrapper around `Database` for the profile store.
#[derive(Debug)]
pub struct ProfileState {
    db: Database,
}

impl ProfileState {
    /// Creates a new ProfileState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        ProfileState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Reads a stored payload, treating storage errors as "nothing saved".
    pub async fn read_or_none(&self, key: &str) -> Option<String> {
        match self.db.profile().get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read profile entry, using defaults");
                None
            }
        }
    }

    /// Writes a payload under `key`.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        self.db.profile().put(key, value).await
    }

    /// Deletes the entry under `key`.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        self.db.profile().remove(key).await
    }
}
