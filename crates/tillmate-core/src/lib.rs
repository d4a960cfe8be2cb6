//! # tillmate-core: Pure Coin-Counting Logic for TillMate
//!
//! This crate is the **heart** of TillMate. It turns scale readings into coin
//! counts and money, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TillMate Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Display Layer (web view)                     │   │
//! │  │    Coin table ──► Weights editor ──► Rounding toggle            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tillmate-app commands                        │   │
//! │  │    update_gross, set_unit_weight, save_profile, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tillmate-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │  engine   │  │measurement│  │  session  │  │   │
//! │  │   │ weights   │  │ net→count │  │ gross/tare│  │  context  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tillmate-db (Profile Store)                     │   │
//! │  │              SQLite key-value entries, migrations               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Denomination, RoundingMode, row results)
//! - [`money`] - Money type with integer pence
//! - [`registry`] - Denomination registry with saved-weight merge
//! - [`engine`] - Weight-to-count conversion
//! - [`measurement`] - Ephemeral gross/tare inputs
//! - [`session`] - Explicit session context (registry + mode + inputs)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tillmate_core::engine::compute_row;
//! use tillmate_core::registry::DenominationRegistry;
//! use tillmate_core::types::RoundingMode;
//!
//! let registry = DenominationRegistry::load_defaults();
//! let ten_pence = registry.get("p10").unwrap();
//!
//! // 130g of 6.50g coins = 20 coins = £2.00
//! let row = compute_row(ten_pence, "130", "0", RoundingMode::Round);
//! assert_eq!(row.count, 20);
//! assert_eq!(row.subtotal.pence(), 200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod measurement;
pub mod money;
pub mod registry;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::{Money, DEFAULT_CURRENCY_SYMBOL};
pub use registry::DenominationRegistry;
pub use session::TillSession;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Profile key holding the saved unit weights.
///
/// Payload: JSON array of `{ "key": "p10", "unit_weight": 6.5 }`.
/// Labels and face values are never stored; they always come from defaults.
pub const COIN_WEIGHTS_KEY: &str = "coin_weights";

/// Profile key holding the operator preferences.
///
/// Payload: `{ "rounding_mode": "round" | "floor" | "ceil" }`.
pub const PREFERENCES_KEY: &str = "preferences";

/// Tare text a row starts with (and returns to on reset).
pub const DEFAULT_TARE_TEXT: &str = "0";
