//! Core domain logic for leetsync
//!
//! This module contains the sync engine with no direct I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (submissions, buckets, stats, regions)
//! - `services/` - Classification, rendering, aggregation, merging, the sync pass
//! - `ports/` - Trait definitions for the source, artifact store and README

pub mod models;
pub mod ports;
pub mod services;
