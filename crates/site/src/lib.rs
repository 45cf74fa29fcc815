//! Lumen site library.
//!
//! This crate provides the serving functionality as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires configuration,
//! the reconciliation engine, and the HTTP boundary together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod remote;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod sync;
