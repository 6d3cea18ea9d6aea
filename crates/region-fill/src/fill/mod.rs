//! The seed fill engine.
//!
//! [`Fillmachine`] finds the connected region around a seed pixel twice,
//! once scanning rows and once scanning columns, and streams what it finds
//! to a [`Filler`](crate::Filler). Membership is decided by a
//! [`FillContext`] built from the seed color and a [`Tolerance`].

mod machine;
mod tolerance;

pub use machine::{fill, FillReport, Fillmachine};
pub use tolerance::{FillContext, Tolerance};
