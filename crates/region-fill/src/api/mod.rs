//! Public API for the region-fill crate.
//!
//! This module provides the high-level API: [`RegionFill`] builder and
//! [`FillError`] unified error type.

mod builder;
mod error;

pub use builder::RegionFill;
pub use error::FillError;
