//! # Profile Repository
//!
//! Key-value access to `profile_entries`.
//!
//! ## Keys in Use
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  key            value (JSON, owned by tillmate-core)                    │
//! │  ─────────────  ──────────────────────────────────────────────────      │
//! │  coin_weights   [{"key":"gbp2","unit_weight":12.0}, ...]               │
//! │  preferences    {"rounding_mode":"round"}                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes happen on Save, on rounding-mode change, and (as a delete) on
//! "Reset all". Reads happen once at startup.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tillmate_core::ProfileEntry;

/// Repository for profile entries.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.profile();
/// repo.put("preferences", r#"{"rounding_mode":"ceil"}"#).await?;
/// let prefs = repo.get("preferences").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    /// Creates a new ProfileRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProfileRepository { pool }
    }

    /// Reads the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM profile_entries
            WHERE key = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        debug!(key = %key, found = value.is_some(), "Profile entry read");
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous payload.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO profile_entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Profile entry written");
        Ok(())
    }

    /// Deletes the entry under `key`.
    ///
    /// ## Returns
    /// `true` if an entry existed. Deleting a missing key is not an error.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM profile_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        debug!(key = %key, removed, "Profile entry removed");
        Ok(removed)
    }

    /// Lists every entry, ordered by key.
    pub async fn list(&self) -> DbResult<Vec<ProfileEntry>> {
        let entries = sqlx::query_as::<_, ProfileEntry>(
            r#"
            SELECT key, value, updated_at
            FROM profile_entries
            ORDER BY key ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use tillmate_core::{DenominationRegistry, COIN_WEIGHTS_KEY, PREFERENCES_KEY};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let db = test_db().await;
        assert_eq!(db.profile().get(COIN_WEIGHTS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let db = test_db().await;
        let repo = db.profile();

        repo.put(PREFERENCES_KEY, r#"{"rounding_mode":"ceil"}"#).await.unwrap();
        assert_eq!(
            repo.get(PREFERENCES_KEY).await.unwrap().as_deref(),
            Some(r#"{"rounding_mode":"ceil"}"#)
        );
    }

    #[tokio::test]
    async fn test_put_replaces_previous_value() {
        let db = test_db().await;
        let repo = db.profile();

        repo.put(PREFERENCES_KEY, r#"{"rounding_mode":"ceil"}"#).await.unwrap();
        repo.put(PREFERENCES_KEY, r#"{"rounding_mode":"floor"}"#).await.unwrap();

        let entries = repo.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, r#"{"rounding_mode":"floor"}"#);
    }

    #[tokio::test]
    async fn test_remove() {
        let db = test_db().await;
        let repo = db.profile();

        repo.put(COIN_WEIGHTS_KEY, "[]").await.unwrap();
        assert!(repo.remove(COIN_WEIGHTS_KEY).await.unwrap());
        assert_eq!(repo.get(COIN_WEIGHTS_KEY).await.unwrap(), None);

        // Second delete is a no-op
        assert!(!repo.remove(COIN_WEIGHTS_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_key() {
        let db = test_db().await;
        let repo = db.profile();

        repo.put(PREFERENCES_KEY, "{}").await.unwrap();
        repo.put(COIN_WEIGHTS_KEY, "[]").await.unwrap();

        let keys: Vec<String> = repo.list().await.unwrap().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, [COIN_WEIGHTS_KEY, PREFERENCES_KEY]);
    }

    #[tokio::test]
    async fn test_registry_payload_round_trip() {
        let db = test_db().await;
        let repo = db.profile();

        let mut registry = DenominationRegistry::load_defaults();
        registry.set_weight("p10", 6.45);
        repo.put(COIN_WEIGHTS_KEY, &registry.to_saved_payload().unwrap())
            .await
            .unwrap();

        let saved = repo.get(COIN_WEIGHTS_KEY).await.unwrap();
        let reloaded = DenominationRegistry::load(saved.as_deref());
        assert_eq!(reloaded.get("p10").unwrap().unit_weight, 6.45);
    }
}
