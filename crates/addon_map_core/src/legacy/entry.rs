//! Legacy add-on entry model and per-entry validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Replacement extension for one legacy add-on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionTarget {
    /// Stable identifier in the extension system. External listings depend
    /// on it, so it never changes once published.
    pub extension_id: String,
    /// Human-readable label shown in listings.
    pub display_name: String,
}

impl ExtensionTarget {
    pub fn new(extension_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            extension_id: extension_id.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns `(extension_id, display_name)`.
    pub fn as_pair(&self) -> (&str, &str) {
        (self.extension_id.as_str(), self.display_name.as_str())
    }
}

/// One row of the legacy map: a legacy module name and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyEntry {
    /// Legacy add-on module name, e.g. `mesh_looptools`.
    pub legacy_key: String,
    pub target: ExtensionTarget,
}

impl LegacyEntry {
    pub fn new(
        legacy_key: impl Into<String>,
        extension_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            legacy_key: legacy_key.into(),
            target: ExtensionTarget::new(extension_id, display_name),
        }
    }

    /// Validates row-level invariants.
    ///
    /// Uniqueness of `legacy_key` is a table-level concern and is checked by
    /// the map builder, not here.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.legacy_key.trim().is_empty() {
            return Err(EntryValidationError::EmptyLegacyKey);
        }
        if self.target.extension_id.trim().is_empty() {
            return Err(EntryValidationError::EmptyExtensionId(
                self.legacy_key.clone(),
            ));
        }
        if self.target.display_name.trim().is_empty() {
            return Err(EntryValidationError::EmptyDisplayName(
                self.legacy_key.clone(),
            ));
        }
        Ok(())
    }
}

/// Row-level data-integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyLegacyKey,
    EmptyExtensionId(String),
    EmptyDisplayName(String),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLegacyKey => write!(f, "legacy key must not be empty"),
            Self::EmptyExtensionId(key) => {
                write!(f, "extension id must not be empty for legacy key: {key}")
            }
            Self::EmptyDisplayName(key) => {
                write!(f, "display name must not be empty for legacy key: {key}")
            }
        }
    }
}

impl Error for EntryValidationError {}
