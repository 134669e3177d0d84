//! Legacy add-on to extension lookup table.
//! This crate is the single source of truth for which legacy add-on module
//! maps to which extension.

pub mod legacy;
pub mod logging;

pub use legacy::builtin::{builtin_rows, legacy_map, remote_url, REMOTE_URL};
pub use legacy::entry::{EntryValidationError, ExtensionTarget, LegacyEntry};
pub use legacy::map::{LegacyMap, LegacyMapError, LegacyMapResult};
pub use logging::{default_log_level, init_logging, logging_status};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
