//! Contour gradient configuration.
//!
//! A contour fill shades every pixel of a region by how it sits between the
//! region's edges. For each sampled direction the filler measures the distance
//! to the boundary both ways, turns the pair into a blend factor with a
//! [`ShapeFunction`], averages over all directions of the [`RayFan`], and hands
//! the average to an [`Interpolator`] to pick a color between the two
//! endpoints of a [`GradientSpec`].

mod error;
mod interpolator;
mod ray_fan;
mod shape;
mod spec;

pub use error::GradientError;
pub use interpolator::Interpolator;
pub use ray_fan::RayFan;
pub use shape::ShapeFunction;
pub use spec::{GradientPreset, GradientSpec};
