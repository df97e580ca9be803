//! Static scene content attached to nodes: lights, shadow catchers, materials.
//!
//! These are plain descriptions handed to the scene graph; the renderer that
//! consumes them lives outside this crate.

use cgmath::{Deg, Vector3};

/// A spot light that can cast shadows onto a [`ShadowSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    /// RGB in 0.0-1.0
    pub color: [f32; 3],
    pub intensity: f32,
    pub inner_angle: Deg<f32>,
    pub outer_angle: Deg<f32>,
    pub casts_shadow: bool,
    pub shadow_map_size: u32,
    pub shadow_near_z: f32,
    pub shadow_far_z: f32,
    pub shadow_opacity: f32,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 5.0, 0.0),
            direction: Vector3::new(0.0, -1.0, 0.0),
            color: [1.0, 1.0, 1.0],
            intensity: 20.0,
            inner_angle: Deg(1.0),
            outer_angle: Deg(50.0),
            casts_shadow: true,
            shadow_map_size: 8192,
            shadow_near_z: 2.0,
            shadow_far_z: 7.0,
            shadow_opacity: 0.7,
        }
    }
}

/// How a material interacts with shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    #[default]
    Normal,
    /// Only the shadow is drawn; the surface itself is invisible.
    Transparent,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingModel {
    Constant,
    Lambert,
    Blinn,
    #[default]
    PhysicallyBased,
}

/// Texture bytes as read from the asset source. Decoding is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub lighting_model: LightingModel,
    pub shadow_mode: ShadowMode,
    pub diffuse_texture: Option<Texture>,
}

impl Material {
    /// Physically based material with a diffuse map.
    pub fn textured(texture: Texture) -> Self {
        Self {
            lighting_model: LightingModel::PhysicallyBased,
            shadow_mode: ShadowMode::Normal,
            diffuse_texture: Some(texture),
        }
    }

    /// Material for an invisible surface that still receives shadows.
    pub fn shadow_catcher() -> Self {
        Self {
            shadow_mode: ShadowMode::Transparent,
            ..Default::default()
        }
    }
}

/// A flat rectangle, in the node's XY plane, that receives shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSurface {
    pub width: f32,
    pub height: f32,
    pub material: Material,
}

impl ShadowSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            material: Material::shadow_catcher(),
        }
    }
}
