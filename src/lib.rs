//! Tilefill
//!
//! Region fills and contour gradient shading for sprite and tile PNGs.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
