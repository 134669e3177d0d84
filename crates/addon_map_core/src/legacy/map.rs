//! Validated, immutable legacy add-on map.
//!
//! # Invariants
//! - `legacy_key` values are unique; a duplicate fails the whole build.
//! - Every entry passes `LegacyEntry::validate()`.
//! - Entries keep insertion order; lookups go through a key index.
//! - There is no mutating API after construction.

use crate::legacy::entry::{EntryValidationError, ExtensionTarget, LegacyEntry};
use log::trace;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LegacyMapResult<T> = Result<T, LegacyMapError>;

/// Load-time errors for a legacy map.
///
/// Any of these means the table artifact is corrupt; no partial table is
/// ever returned alongside them.
#[derive(Debug)]
pub enum LegacyMapError {
    InvalidEntry(EntryValidationError),
    DuplicateLegacyKey(String),
    EmptyRemoteUrl,
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl Display for LegacyMapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntry(err) => write!(f, "legacy map entry is invalid: {err}"),
            Self::DuplicateLegacyKey(key) => write!(f, "legacy key is duplicated: {key}"),
            Self::EmptyRemoteUrl => write!(f, "legacy map remote url must not be empty"),
            Self::Parse(err) => write!(f, "legacy map document is malformed: {err}"),
            Self::Io(err) => write!(f, "legacy map document could not be read: {err}"),
        }
    }
}

impl Error for LegacyMapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEntry(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::DuplicateLegacyKey(_) | Self::EmptyRemoteUrl => None,
        }
    }
}

impl From<EntryValidationError> for LegacyMapError {
    fn from(value: EntryValidationError) -> Self {
        Self::InvalidEntry(value)
    }
}

impl From<serde_json::Error> for LegacyMapError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for LegacyMapError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Read-only mapping from legacy add-on keys to replacement extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMap {
    remote_url: String,
    entries: Vec<LegacyEntry>,
    index: BTreeMap<String, usize>,
}

impl LegacyMap {
    /// Builds a map from ordered entries.
    ///
    /// # Errors
    /// - `EmptyRemoteUrl` when `remote_url` is blank.
    /// - `InvalidEntry` for the first entry failing row validation.
    /// - `DuplicateLegacyKey` for the first key seen twice.
    pub fn from_entries(
        remote_url: impl Into<String>,
        entries: impl IntoIterator<Item = LegacyEntry>,
    ) -> LegacyMapResult<Self> {
        let remote_url = remote_url.into();
        if remote_url.trim().is_empty() {
            return Err(LegacyMapError::EmptyRemoteUrl);
        }

        let mut ordered = Vec::new();
        let mut index = BTreeMap::new();
        for entry in entries {
            entry.validate()?;
            if index.contains_key(entry.legacy_key.as_str()) {
                return Err(LegacyMapError::DuplicateLegacyKey(entry.legacy_key));
            }
            index.insert(entry.legacy_key.clone(), ordered.len());
            ordered.push(entry);
        }

        Ok(Self {
            remote_url,
            entries: ordered,
            index,
        })
    }

    /// Returns the replacement for `legacy_key`, or `None` when the add-on
    /// has no known extension.
    pub fn lookup(&self, legacy_key: &str) -> Option<&ExtensionTarget> {
        let target = self
            .index
            .get(legacy_key)
            .map(|position| &self.entries[*position].target);
        trace!(
            "event=legacy_lookup module=legacy key={} hit={}",
            legacy_key,
            target.is_some()
        );
        target
    }

    /// Endpoint the resolver queries for live extension metadata.
    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, legacy_key: &str) -> bool {
        self.index.contains_key(legacy_key)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LegacyEntry> + '_ {
        self.entries.iter()
    }

    /// Legacy keys in insertion order.
    pub fn legacy_keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.legacy_key.as_str())
    }

    /// Reverse lookup by extension id. Returns the first match in insertion
    /// order.
    pub fn find_by_extension_id(&self, extension_id: &str) -> Option<&LegacyEntry> {
        self.entries
            .iter()
            .find(|entry| entry.target.extension_id == extension_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{LegacyMap, LegacyMapError};
    use crate::legacy::entry::{EntryValidationError, LegacyEntry};

    const URL: &str = "https://example.invalid/api/v1/extensions";

    fn sample() -> LegacyMap {
        LegacyMap::from_entries(
            URL,
            vec![
                LegacyEntry::new("rigify", "rigify", "Rigify"),
                LegacyEntry::new("mesh_looptools", "looptools", "LoopTools"),
                LegacyEntry::new("btrace", "btracer", "BTracer"),
            ],
        )
        .expect("sample map should build")
    }

    #[test]
    fn looks_up_known_and_unknown_keys() {
        let map = sample();
        assert_eq!(
            map.lookup("mesh_looptools").map(|t| t.as_pair()),
            Some(("looptools", "LoopTools"))
        );
        assert!(map.lookup("not_a_real_addon").is_none());
        assert!(map.lookup("").is_none());
    }

    #[test]
    fn lookup_is_exact_match() {
        let map = sample();
        assert!(map.lookup("Rigify").is_none());
        assert!(map.lookup(" rigify").is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let map = sample();
        let keys: Vec<&str> = map.legacy_keys().collect();
        assert_eq!(keys, vec!["rigify", "mesh_looptools", "btrace"]);
        assert_eq!(map.len(), 3);
        assert!(!map.is_empty());
    }

    #[test]
    fn reverse_lookup_by_extension_id() {
        let map = sample();
        let entry = map
            .find_by_extension_id("btracer")
            .expect("btracer should resolve");
        assert_eq!(entry.legacy_key, "btrace");
        assert!(map.find_by_extension_id("btrace").is_none());
    }

    #[test]
    fn rejects_duplicate_legacy_key() {
        let err = LegacyMap::from_entries(
            URL,
            vec![
                LegacyEntry::new("rigify", "rigify", "Rigify"),
                LegacyEntry::new("rigify", "rigify_2", "Rigify 2"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, LegacyMapError::DuplicateLegacyKey(key) if key == "rigify"));
    }

    #[test]
    fn rejects_invalid_entry() {
        let err = LegacyMap::from_entries(URL, vec![LegacyEntry::new("rigify", "", "Rigify")])
            .unwrap_err();
        assert!(matches!(
            err,
            LegacyMapError::InvalidEntry(EntryValidationError::EmptyExtensionId(_))
        ));
    }

    #[test]
    fn rejects_blank_remote_url() {
        let err = LegacyMap::from_entries("  ", Vec::new()).unwrap_err();
        assert!(matches!(err, LegacyMapError::EmptyRemoteUrl));
    }

    #[test]
    fn empty_table_is_allowed() {
        let map = LegacyMap::from_entries(URL, Vec::new()).expect("empty map should build");
        assert!(map.is_empty());
        assert_eq!(map.remote_url(), URL);
    }
}
