//! A shader material that samples its texture through an animated noise warp.

use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
    sprite::{AlphaMode2d, Material2d},
};
use uvwarp_field::WarpParameters;

/// Uniform block handed to the fragment shader. Field order matches the
/// `WarpParams` struct in the shader; the layout is 32 bytes, a multiple of
/// the 16 bytes some downlevel devices require for uniform bindings.
#[derive(ShaderType, Debug, Clone)]
pub struct WarpUniform {
    pub tint: Vec3,
    pub opacity: f32,
    pub intensity: f32,
    pub scale: f32,
    pub speed: f32,
    pub time: f32,
}

impl Default for WarpUniform {
    fn default() -> Self {
        let params = WarpParameters::default();
        Self {
            tint: params.tint,
            opacity: params.opacity,
            intensity: params.intensity,
            scale: params.scale,
            speed: params.speed,
            time: 0.0,
        }
    }
}

/// Construction-time options for [`NoiseWarpMaterial::new`]. Anything left
/// at `..Default::default()` gets the stock look.
#[derive(Debug, Clone)]
pub struct NoiseWarpOptions {
    /// Color source sampled at the warped coordinate. `None` falls back to
    /// bevy's plain white image, leaving only the tint visible.
    pub map: Option<Handle<Image>>,
    pub intensity: f32,
    pub scale: f32,
    pub speed: f32,
    pub tint: Vec3,
    pub opacity: f32,
}

impl Default for NoiseWarpOptions {
    fn default() -> Self {
        let params = WarpParameters::default();
        Self {
            map: None,
            intensity: params.intensity,
            scale: params.scale,
            speed: params.speed,
            tint: params.tint,
            opacity: params.opacity,
        }
    }
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct NoiseWarpMaterial {
    #[uniform(0)]
    pub params: WarpUniform,
    #[texture(1)]
    #[sampler(2)]
    pub map: Option<Handle<Image>>,
}

impl NoiseWarpMaterial {
    pub fn new(options: NoiseWarpOptions) -> Self {
        Self {
            params: WarpUniform {
                tint: options.tint,
                opacity: options.opacity,
                intensity: options.intensity,
                scale: options.scale,
                speed: options.speed,
                time: 0.0,
            },
            map: options.map,
        }
    }

    // Each setter takes effect on the next frame; bevy re-uploads the
    // uniform when the material asset is mutated.

    pub fn set_map(&mut self, map: Option<Handle<Image>>) {
        self.map = map;
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.params.intensity = intensity;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.params.scale = scale;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.params.speed = speed;
    }

    pub fn set_tint(&mut self, tint: Vec3) {
        self.params.tint = tint;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.params.opacity = opacity;
    }

    /// Snapshot of the bound parameters for the CPU-side evaluator.
    pub fn field_parameters(&self) -> WarpParameters {
        WarpParameters {
            intensity: self.params.intensity,
            scale: self.params.scale,
            speed: self.params.speed,
            tint: self.params.tint,
            opacity: self.params.opacity,
        }
    }
}

impl Default for NoiseWarpMaterial {
    fn default() -> Self {
        Self::new(NoiseWarpOptions::default())
    }
}

impl Material2d for NoiseWarpMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/noise_warp_2d.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_field_defaults() {
        let material = NoiseWarpMaterial::default();
        assert_eq!(material.field_parameters(), WarpParameters::default());
        assert_eq!(material.params.time, 0.0);
        assert!(material.map.is_none());
    }

    #[test]
    fn test_setters_reach_the_uniform() {
        let mut material = NoiseWarpMaterial::default();
        material.set_intensity(0.1);
        material.set_scale(8.0);
        material.set_speed(1.5);
        material.set_tint(Vec3::new(1.0, 0.5, 0.25));
        material.set_opacity(0.75);
        let params = material.field_parameters();
        assert_eq!(params.intensity, 0.1);
        assert_eq!(params.scale, 8.0);
        assert_eq!(params.speed, 1.5);
        assert_eq!(params.tint, Vec3::new(1.0, 0.5, 0.25));
        assert_eq!(params.opacity, 0.75);
    }
}
