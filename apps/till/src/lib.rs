//! # TillMate App Library
//!
//! Host layer for the TillMate coin counter: wires logging, the profile
//! store and the till session together, and exposes the commands the display
//! calls.
//!
//! ## Module Organization
//! ```text
//! tillmate_app/
//! ├── lib.rs          ◄─── You are here (bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── profile.rs  ◄─── Profile store wrapper
//! │   ├── till.rs     ◄─── Till session holder
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── sheet.rs    ◄─── Scale readings
//! │   ├── weights.rs  ◄─── Unit weights
//! │   ├── preferences.rs ◄─ Rounding mode
//! │   ├── profile.rs  ◄─── Load / Save
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let mut app = tillmate_app::bootstrap().await?;
//! let sheet = commands::sheet::update_gross(&mut app.till, &app.config, "p10", "130");
//! assert_eq!(sheet.grand_total, "£2.00");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{ApiError, ErrorCode};
use state::{ConfigState, ProfileState, TillState};
use tillmate_db::{Database, DbConfig};

/// File name of the profile database inside the data directory.
pub const PROFILE_DB_FILE: &str = "tillmate.db";

/// Everything a running till needs.
#[derive(Debug)]
pub struct App {
    pub config: ConfigState,
    pub profile: ProfileState,
    pub till: TillState,
}

/// Starts the till.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,tillmate=debug,sqlx=warn; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • TILLMATE_DB_PATH, TILLMATE_CURRENCY_SYMBOL                        │
/// │                                                                         │
/// │  3. Determine Profile Path ───────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.tillmate.tillmate/       │
/// │     • Windows: %APPDATA%\tillmate\tillmate\data\                        │
/// │     • Linux: ~/.local/share/tillmate/                                   │
/// │                                                                         │
/// │  4. Open Profile Store ───────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  5. Load Session ─────────────────────────────────────────────────────► │
/// │     • coin_weights + preferences, defaults for anything unreadable      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn bootstrap() -> Result<App, ApiError> {
    init_tracing();
    info!("Starting TillMate");

    let config = ConfigState::from_env();
    let db_path = database_path(&config)?;
    info!(?db_path, "Profile path determined");

    bootstrap_with(config, DbConfig::new(db_path)).await
}

/// Starts the till against an explicit store configuration.
pub async fn bootstrap_with(config: ConfigState, db_config: DbConfig) -> Result<App, ApiError> {
    let db = Database::new(db_config).await?;
    info!("Profile store connected and migrations applied");

    let profile = ProfileState::new(db);
    let till = commands::profile::load_session(&profile).await;

    info!(rounding_mode = %till.session().rounding_mode, "Till ready");
    Ok(App { config, profile, till })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tillmate=trace` - Show trace for tillmate crates only
/// - Default: INFO, DEBUG for tillmate crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tillmate=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Determines the profile database path.
///
/// `TILLMATE_DB_PATH` (via [`ConfigState::db_path`]) wins; otherwise the
/// platform data directory is used. The containing directory is created.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, ApiError> {
    let path = match &config.db_path {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "tillmate", "tillmate").ok_or_else(|| {
                ApiError::new(ErrorCode::ProfileUnavailable, "Could not determine app data directory")
            })?;
            proj_dirs.data_dir().join(PROFILE_DB_FILE)
        }
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            ApiError::new(
                ErrorCode::ProfileUnavailable,
                format!("Could not create {}: {}", dir.display(), e),
            )
        })?;
    }

    Ok(path)
}
