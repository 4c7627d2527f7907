//! The warp evaluation itself: two decorrelated fbm channels turned into a
//! UV-space offset, plus pass-through color modulation.

use glam::{vec2, Vec2, Vec3};

use crate::noise::fbm;

/// Fixed offset into the noise domain for the second channel. Arbitrary, it
/// only has to decorrelate the V offset from the U offset.
pub const CHANNEL_OFFSET: Vec2 = Vec2::new(10.73, 4.89);

/// Live-tunable parameters of the warp. A caller owns one of these (or a
/// snapshot of one) and passes it into [`evaluate`]; there is no hidden
/// global state. Values are not validated, out-of-range settings just look
/// extreme.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpParameters {
    /// Warp magnitude in UV units.
    pub intensity: f32,
    /// Spatial frequency multiplier applied to the UV before sampling noise.
    pub scale: f32,
    /// Scroll rate of the noise domain along U, in domain units per second.
    pub speed: f32,
    /// Color multiplier applied by the caller after sampling.
    pub tint: Vec3,
    /// Alpha multiplier applied by the caller after sampling.
    pub opacity: f32,
}

impl Default for WarpParameters {
    fn default() -> Self {
        Self {
            intensity: 0.04,
            scale: 4.0,
            speed: 0.4,
            tint: Vec3::ONE,
            opacity: 1.0,
        }
    }
}

/// Result of one evaluation: the coordinate the caller must sample its color
/// source at, plus the color modulation to apply afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpSample {
    pub uv: Vec2,
    pub tint: Vec3,
    pub opacity: f32,
}

/// Where in the noise domain the given UV lands at the given time.
pub fn animated_coordinate(uv: Vec2, time: f32, params: &WarpParameters) -> Vec2 {
    uv * params.scale + vec2(time * params.speed, 0.0)
}

/// Evaluate the warp at one UV coordinate.
///
/// Pure and total over all finite inputs; NaN/Inf propagate per IEEE-754.
/// The warped coordinate is clamped into [0, 1]² so the caller never samples
/// outside a bound texture. The noise-domain coordinate itself is
/// deliberately unclamped: the field scrolls forever across its periodic
/// tiles.
pub fn evaluate(uv: Vec2, time: f32, params: &WarpParameters) -> WarpSample {
    let animated = animated_coordinate(uv, time, params);
    let n1 = fbm(animated);
    let n2 = fbm(animated + CHANNEL_OFFSET);
    let warped = (uv + params.intensity * vec2(n1, n2)).clamp(Vec2::ZERO, Vec2::ONE);
    WarpSample {
        uv: warped,
        tint: params.tint,
        opacity: params.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{perlin_periodic, BASE_PERIOD, OCTAVES};

    #[test]
    fn test_evaluate_is_deterministic() {
        let params = WarpParameters::default();
        let a = evaluate(vec2(0.31, 0.77), 12.5, &params);
        let b = evaluate(vec2(0.31, 0.77), 12.5, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_warped_uv_stays_in_unit_square() {
        let mut params = WarpParameters {
            intensity: 5.0,
            ..Default::default()
        };
        for t in [0.0, 1.0, 123.4] {
            params.speed = t * 0.1;
            for i in 0..=16 {
                for j in 0..=16 {
                    let uv = vec2(i as f32 / 16.0, j as f32 / 16.0);
                    let sample = evaluate(uv, t, &params);
                    assert!((0.0..=1.0).contains(&sample.uv.x), "{:?}", sample.uv);
                    assert!((0.0..=1.0).contains(&sample.uv.y), "{:?}", sample.uv);
                }
            }
        }
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let params = WarpParameters {
            intensity: 0.0,
            ..Default::default()
        };
        for uv in [vec2(0.0, 0.0), vec2(0.25, 0.75), vec2(1.0, 1.0)] {
            let sample = evaluate(uv, 42.0, &params);
            assert_eq!(sample.uv, uv);
        }
    }

    #[test]
    fn test_channels_are_decorrelated() {
        // the two offset components come from different points of the same
        // field, so they must not be identical for a generic input
        let params = WarpParameters::default();
        let uv = vec2(0.3, 0.7);
        let sample = evaluate(uv, 0.0, &params);
        let offset = sample.uv - uv;
        assert!((offset.x - offset.y).abs() > 1e-7);
    }

    #[test]
    fn test_tint_and_opacity_pass_through() {
        let params = WarpParameters {
            tint: Vec3::new(0.2, 0.4, 0.8),
            opacity: 0.5,
            ..Default::default()
        };
        let sample = evaluate(vec2(0.5, 0.5), 1.0, &params);
        assert_eq!(sample.tint, params.tint);
        assert_eq!(sample.opacity, params.opacity);
    }

    #[test]
    fn test_time_scrolls_u_axis_linearly() {
        let params = WarpParameters::default();
        let uv = vec2(0.1, 0.9);
        let (t, dt) = (3.0_f32, 1.25_f32);

        let shift = animated_coordinate(uv, t + dt, &params) - animated_coordinate(uv, t, &params);
        assert!((shift.x - params.speed * dt).abs() < 1e-5);
        assert_eq!(shift.y, 0.0);

        // the warp at t + dt equals the warp of the shifted domain coordinate
        let later = evaluate(uv, t + dt, &params);
        let animated = animated_coordinate(uv, t, &params) + vec2(params.speed * dt, 0.0);
        let n1 = fbm(animated);
        let n2 = fbm(animated + CHANNEL_OFFSET);
        let expected = (uv + params.intensity * vec2(n1, n2)).clamp(Vec2::ZERO, Vec2::ONE);
        assert!((later.uv - expected).length() < 1e-5);
    }

    #[test]
    fn test_default_scenario_matches_manual_pipeline() {
        // uv = (0.5, 0.5) at t = 0 with default parameters lands at
        // animated = (2.0, 2.0); walk the fbm octaves by hand and compare
        let params = WarpParameters::default();
        let uv = vec2(0.5, 0.5);

        let animated = animated_coordinate(uv, 0.0, &params);
        assert_eq!(animated, vec2(2.0, 2.0));

        let mut expected = [0.0_f32; 2];
        for (slot, base) in [(0, animated), (1, animated + CHANNEL_OFFSET)] {
            let mut amplitude = 0.5;
            let mut frequency = 1.0;
            for _ in 0..OCTAVES {
                expected[slot] +=
                    amplitude * perlin_periodic(base * frequency, BASE_PERIOD * frequency);
                frequency *= 2.0;
                amplitude *= 0.5;
            }
        }
        let expected_uv = uv + params.intensity * vec2(expected[0], expected[1]);

        let sample = evaluate(uv, 0.0, &params);
        assert!((sample.uv - expected_uv).length() < 1e-5);
    }
}
