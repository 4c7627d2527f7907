//! CPU reference implementation of the animated UV warp field.
//!
//! The same algorithm runs per-pixel in the viewer's fragment shader; this
//! crate is the testable, re-entrant version of it. Everything here is a pure
//! function of its inputs, so it can be called from any number of threads
//! without synchronization.

pub mod noise;
pub mod warp;

pub use noise::{fbm, perlin_periodic, BASE_PERIOD};
pub use warp::{evaluate, WarpParameters, WarpSample, CHANNEL_OFFSET};
