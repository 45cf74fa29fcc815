//! Lumen Core - Shared document schema.
//!
//! This crate defines the single content document shared by all Lumen
//! components:
//! - `site` - The serving binary (owner editor API + visitor view API)
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs plus status/theme/language enums
//! - [`document`] - The document schema and its defaults
//! - [`merge`] - Field-wise reconciliation of a partial document over defaults

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod document;
pub mod merge;
pub mod types;

pub use document::*;
pub use merge::*;
pub use types::*;
