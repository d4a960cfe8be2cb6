//! # Repositories
//!
//! Data access for the profile store.
//!
//! ```text
//! repository/
//! ├── mod.rs      ◄─── You are here
//! └── profile.rs  ◄─── Key-value profile entries
//! ```
//!
//! Repositories own SQL; they never interpret the JSON payloads they store.

pub mod profile;
