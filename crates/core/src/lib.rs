//! Crystal Harmony Core - Shared types library.
//!
//! This crate provides common types used across all Crystal Harmony
//! components:
//! - `storefront` - Headless storefront API and conversational shopping assistant
//! - `integration-tests` - End-to-end tests backed by an in-memory catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no content-store access. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Filter vocabularies, catalog records, search filters,
//!   stock/price helpers, order statuses, and newtype IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
