//! Periodic gradient noise and its fractal sum.
//!
//! This mirrors the shader code in `uvwarp_viewer/assets/shaders/` constant
//! for constant, so the CPU and GPU paths produce the same field shape.

use glam::{vec2, Vec2};
use std::f32::consts::TAU;

/// Base tiling period of the warp field, in lattice cells. Each fbm octave
/// scales this together with its frequency, which is what keeps the summed
/// field seamless.
pub const BASE_PERIOD: Vec2 = Vec2::new(4.0, 4.0);

/// Number of octaves in the fractal sum.
pub const OCTAVES: u32 = 3;

/// GLSL `fract`: always in [0, 1), also for negative inputs. `f32::fract`
/// keeps the sign, which would break the lattice interpolation left of the
/// origin.
fn fract_gl(x: f32) -> f32 {
    x - x.floor()
}

fn fract_gl2(v: Vec2) -> Vec2 {
    v - v.floor()
}

/// GLSL `mod`, component-wise; keeps the lattice index in [0, period).
fn wrap(v: Vec2, period: Vec2) -> Vec2 {
    v - (v / period).floor() * period
}

/// The classic sine-dot hash. Deterministic per lattice point; the constants
/// are load-bearing for the visual character of the noise.
pub fn rand2(p: Vec2) -> f32 {
    fract_gl(p.dot(vec2(127.1, 311.7)).sin() * 43758.5453123)
}

/// Unit gradient vector whose direction depends pseudo-randomly on the
/// lattice point.
fn lattice_gradient(p: Vec2) -> Vec2 {
    let r = rand2(p) * TAU;
    vec2(r.cos(), r.sin())
}

/// One sample of periodic Perlin noise.
///
/// The lattice indices wrap modulo `period`, so the field tiles seamlessly
/// over `period` lattice cells. Output is roughly in [-1, 1] (hard bound √2
/// for unit gradients), not clamped.
pub fn perlin_periodic(p: Vec2, period: Vec2) -> f32 {
    let cell = p.floor();
    let pi0 = wrap(cell, period);
    let pi1 = wrap(cell + 1.0, period);
    let pf = fract_gl2(p);

    let g00 = lattice_gradient(pi0);
    let g10 = lattice_gradient(vec2(pi1.x, pi0.y));
    let g01 = lattice_gradient(vec2(pi0.x, pi1.y));
    let g11 = lattice_gradient(pi1);

    let d00 = g00.dot(pf);
    let d10 = g10.dot(pf - vec2(1.0, 0.0));
    let d01 = g01.dot(pf - vec2(0.0, 1.0));
    let d11 = g11.dot(pf - vec2(1.0, 1.0));

    // smoothstep weights
    let w = pf * pf * (3.0 - 2.0 * pf);

    let x0 = d00 + (d10 - d00) * w.x;
    let x1 = d01 + (d11 - d01) * w.x;
    x0 + (x1 - x0) * w.y
}

/// Fractal sum over [`OCTAVES`] octaves: amplitude halves, frequency doubles,
/// and the period is scaled along with the frequency so every octave tiles
/// over the same domain. Magnitude is bounded by 0.5 + 0.25 + 0.125 = 0.875.
pub fn fbm(p: Vec2) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for _ in 0..OCTAVES {
        value += amplitude * perlin_periodic(p * frequency, BASE_PERIOD * frequency);
        frequency *= 2.0;
        amplitude *= 0.5;
    }
    value
}
