//! JSON data-file form of the legacy map.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "remote_url": "https://extensions.blender.org/api/v1/extensions",
//!   "extensions": {
//!     "mesh_looptools": ["looptools", "LoopTools"]
//!   }
//! }
//! ```
//!
//! # Invariants
//! - Key order under `extensions` survives load and serialize unchanged.
//! - Repeated keys in a document are reported as `DuplicateLegacyKey`, never
//!   shadowed by the last occurrence.

use crate::legacy::entry::LegacyEntry;
use crate::legacy::map::{LegacyMap, LegacyMapError, LegacyMapResult};
use log::{info, warn};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyMapDocument {
    remote_url: String,
    extensions: ExtensionTable,
}

#[derive(Serialize)]
struct LegacyMapDocumentRef<'a> {
    remote_url: &'a str,
    extensions: ExtensionTableRef<'a>,
}

/// Ordered `extensions` object, read entry by entry so repeats stay visible.
struct ExtensionTable(Vec<LegacyEntry>);

impl<'de> Deserialize<'de> for ExtensionTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExtensionTableVisitor)
    }
}

struct ExtensionTableVisitor;

impl<'de> Visitor<'de> for ExtensionTableVisitor {
    type Value = ExtensionTable;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of legacy key to [extension_id, display_name]")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((legacy_key, (extension_id, display_name))) =
            access.next_entry::<String, (String, String)>()?
        {
            entries.push(LegacyEntry::new(legacy_key, extension_id, display_name));
        }
        Ok(ExtensionTable(entries))
    }
}

struct ExtensionTableRef<'a>(&'a LegacyMap);

impl Serialize for ExtensionTableRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .entries()
                .map(|entry| (entry.legacy_key.as_str(), entry.target.as_pair())),
        )
    }
}

impl LegacyMap {
    /// Parses and validates a JSON document.
    pub fn from_json_str(document: &str) -> LegacyMapResult<Self> {
        let parsed: LegacyMapDocument = serde_json::from_str(document)?;
        Self::from_document(parsed)
    }

    /// Parses and validates a JSON document from any reader.
    pub fn from_json_reader(reader: impl Read) -> LegacyMapResult<Self> {
        let parsed: LegacyMapDocument = serde_json::from_reader(reader)?;
        Self::from_document(parsed)
    }

    /// Loads a JSON data file shipped next to the application.
    ///
    /// # Errors
    /// - `Io` when the file cannot be opened.
    /// - `Parse` for malformed JSON or an unexpected document shape.
    /// - Any validation error from [`LegacyMap::from_entries`].
    pub fn load_from_path(path: &Path) -> LegacyMapResult<Self> {
        let result = File::open(path)
            .map_err(LegacyMapError::from)
            .and_then(|file| Self::from_json_reader(BufReader::new(file)));
        match &result {
            Ok(map) => info!(
                "event=legacy_map_load module=legacy status=ok source=file path={} entries={}",
                path.display(),
                map.len()
            ),
            Err(err) => warn!(
                "event=legacy_map_load module=legacy status=error source=file path={} error={}",
                path.display(),
                err
            ),
        }
        result
    }

    /// Serializes to compact JSON.
    pub fn to_json_string(&self) -> LegacyMapResult<String> {
        Ok(serde_json::to_string(&self.as_document())?)
    }

    /// Serializes to indented JSON, one key per line, for reviewable diffs.
    pub fn to_json_string_pretty(&self) -> LegacyMapResult<String> {
        Ok(serde_json::to_string_pretty(&self.as_document())?)
    }

    /// Writes indented JSON to `writer`.
    pub fn write_json(&self, writer: impl Write) -> LegacyMapResult<()> {
        serde_json::to_writer_pretty(writer, &self.as_document())?;
        Ok(())
    }

    fn from_document(document: LegacyMapDocument) -> LegacyMapResult<Self> {
        Self::from_entries(document.remote_url, document.extensions.0)
    }

    fn as_document(&self) -> LegacyMapDocumentRef<'_> {
        LegacyMapDocumentRef {
            remote_url: self.remote_url(),
            extensions: ExtensionTableRef(self),
        }
    }
}
