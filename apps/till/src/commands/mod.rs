//! # Commands Module
//!
//! Every operation the display layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── sheet.rs        ◄─── Scale readings, row reset, clear, demo
//! ├── weights.rs      ◄─── Unit-weight editor, reset all
//! ├── preferences.rs  ◄─── Rounding mode toggle
//! ├── profile.rs      ◄─── Startup load, Save
//! └── config.rs       ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Display                                                                │
//! │  ───────                                                                │
//! │  operator types "130" in the 10p gross field                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  update_gross(&mut till, &config, "p10", "130")                         │
//! │         │                                                               │
//! │         │  session.sheet changes, whole sheet re-evaluated             │
//! │         ▼                                                               │
//! │  SheetResponse { rows: [...], grandCount: 20, grandTotal: "£2.00" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn update_gross(till: &mut TillState, config: &ConfigState, ...)
//!
//! // Needs the session and the store
//! async fn set_rounding_mode(till: &mut TillState, profile: &ProfileState, ...)
//! ```

pub mod config;
pub mod preferences;
pub mod profile;
pub mod sheet;
pub mod weights;

pub use sheet::{RowView, SheetResponse};
