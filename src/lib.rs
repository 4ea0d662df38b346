//! ReviewCheck — review quality check availability engine for a
//! shopping-aware browser shell.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod features;
pub mod services;
pub mod stores;
pub mod types;
