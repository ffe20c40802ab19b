//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "arith";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.arith.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".arith.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "arith";

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "ARITH_FORMAT";
pub const ENV_LOG: &str = "ARITH_LOG";
pub const ENV_NO_COLOR: &str = "ARITH_NO_COLOR";
