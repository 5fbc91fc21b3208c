//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Solutions tree and README on disk
//! - `json/` - Exported submissions file
//! - `leetcode/` - LeetCode web API (feature `leetcode`)

pub mod file;
pub mod json;
#[cfg(feature = "leetcode")]
pub mod leetcode;
