//! Version command for the steptutor CLI.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`
pub fn version_line() -> String {
    format!("steptutor {}", VERSION)
}
