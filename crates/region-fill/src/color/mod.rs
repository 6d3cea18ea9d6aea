//! Color arithmetic on packed ARGB pixels
//!
//! [`Argb`] is the only pixel type the fill engine knows about. It carries
//! the small set of operations the fillers need: brightness, brightness
//! scaling, integer blending, a perceptual difference metric used for
//! tolerance checks, and source-over compositing.

mod argb;

pub use argb::Argb;
