//! Legacy add-on to extension mapping.
//!
//! # Responsibility
//! - Hold the curated legacy-key to extension table and the remote endpoint.
//! - Load and serialize the table's JSON data-file form.
//!
//! # Invariants
//! - Tables are validated as a whole; a load either fully succeeds or fails.
//! - Loaded tables are read-only and safe to share across threads.
//!
//! Migration decisions and network access belong to the caller.

pub mod builtin;
mod document;
pub mod entry;
pub mod map;
