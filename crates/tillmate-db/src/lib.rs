//! # tillmate-db: Local Profile Store for TillMate
//!
//! This crate keeps the operator's profile in a SQLite file: saved coin
//! weights and preferences, as opaque JSON payloads under fixed keys.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TillMate Data Flow                               │
//! │                                                                         │
//! │  tillmate-app command (save_profile)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   tillmate-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌──────────────┐ │   │
//! │  │   │   Database    │    │ ProfileRepository │  │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │◄───│  get / put /      │  │  (embedded)  │ │   │
//! │  │   │  SqlitePool   │    │  remove / list    │  │ 001_profile  │ │   │
//! │  │   └───────────────┘    └───────────────────┘  └──────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/tillmate/profile.db                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Profile key-value repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tillmate_db::{Database, DbConfig};
//! use tillmate_core::COIN_WEIGHTS_KEY;
//!
//! let db = Database::new(DbConfig::new("path/to/profile.db")).await?;
//! let saved = db.profile().get(COIN_WEIGHTS_KEY).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::profile::ProfileRepository;
