//! Tamales Dali Core - Shared types library.
//!
//! This crate provides the common types used across the Tamales Dali
//! components:
//! - `storefront` - Order-flow library (catalog, cart, checkout, profile)
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
