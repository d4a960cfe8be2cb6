//! # State Module
//!
//! Application state for the till host.
//!
//! Separate state types rather than one `AppState`: each command signature
//! names exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ ProfileState │  │  TillState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Database    │  │  TillSession │  │  currency_symbol │              │
//! │  │  (SQLite     │  │  (registry,  │  │  decimals        │              │
//! │  │   pool)      │  │   mode,      │  │  db_path         │              │
//! │  │              │  │   sheet)     │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  OWNERSHIP:                                                             │
//! │  • ProfileState: pool is internally shared                              │
//! │  • TillState: single owner, mutated through &mut                        │
//! │  • ConfigState: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod profile;
mod till;

pub use config::ConfigState;
pub use profile::ProfileState;
pub use till::TillState;
