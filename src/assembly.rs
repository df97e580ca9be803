//! # Scene Assembly
//!
//! Builds the static node graph once at startup:
//!
//! ```text
//! root
//! └── group            hidden until the marker is found, bound to the marker
//!     ├── hero         model, zero scale until revealed, tappable
//!     └── light rig    shadow-casting spot light
//!         └── shadow plane   transparent surface catching the hero's shadow
//! ```
//!
//! Only the marker image is essential. A model or texture that fails to load
//! is logged and the hero node stays empty: the session keeps running and
//! the object simply never appears.

use cgmath::{Deg, Rad, Vector3};
use log::{error, info, warn};

use crate::assets::{load_obj_model, AssetSource};
use crate::binding::BindingController;
use crate::error::AssemblyError;
use crate::scene::{Material, NodeId, SceneGraph, ShadowSurface, Spotlight, Texture};
use crate::tracking::{MarkerId, MarkerTarget, Orientation, TrackingEngine};

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    /// Asset holding the marker image
    pub target_image: String,
    pub target_orientation: Orientation,
    /// Printed marker width in metres
    pub target_width: f32,
    pub model: String,
    pub model_texture: Option<String>,
    pub spotlight: Spotlight,
    pub shadow_surface_size: (f32, f32),
    pub shadow_surface_position: Vector3<f32>,
    /// Euler rotation in radians; lays the surface flat
    pub shadow_surface_rotation: Vector3<f32>,
    pub environment: Option<String>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            target_image: "logo.png".to_string(),
            target_orientation: Orientation::Up,
            target_width: 0.188,
            model: "Toothless.obj".to_string(),
            model_texture: Some("Toothless_Texture.png".to_string()),
            spotlight: Spotlight::default(),
            shadow_surface_size: (10.0, 10.0),
            shadow_surface_position: Vector3::new(0.0, 0.0, -0.7),
            shadow_surface_rotation: Vector3::new(Rad::from(Deg(-90.0_f32)).0, 0.0, 0.0),
            environment: Some("outdoor_env.hdr".to_string()),
        }
    }
}

impl AssemblyConfig {
    pub fn with_target(mut self, image: impl Into<String>, orientation: Orientation, width: f32) -> Self {
        self.target_image = image.into();
        self.target_orientation = orientation;
        self.target_width = width;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>, texture: Option<String>) -> Self {
        self.model = model.into();
        self.model_texture = texture;
        self
    }
}

/// Node handles produced by [`SceneAssembly::assemble`]
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledScene {
    pub marker: MarkerId,
    pub group: NodeId,
    pub hero: NodeId,
    pub light_rig: NodeId,
    pub shadow_plane: NodeId,
    pub model_loaded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SceneAssembly {
    config: AssemblyConfig,
}

impl SceneAssembly {
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Build the scene, link the marker to the group node and make the hero
    /// the controller's reveal target.
    pub fn assemble(
        &self,
        scene: &mut dyn SceneGraph,
        assets: &dyn AssetSource,
        tracking: &mut dyn TrackingEngine,
        controller: &mut BindingController,
    ) -> Result<AssembledScene, AssemblyError> {
        let image = assets
            .read_asset(&self.config.target_image)
            .map_err(AssemblyError::MarkerImage)?;
        let target = MarkerTarget::new(
            image,
            self.config.target_orientation,
            self.config.target_width,
        );

        let group = scene.create_node("marker group");
        scene.set_visible(group, false)?;

        let hero = scene.create_node("hero");
        scene.set_scale(hero, Vector3::new(0.0, 0.0, 0.0))?;
        scene.add_child(group, hero)?;
        let model_loaded = self.load_hero(scene, assets, hero)?;

        let (light_rig, shadow_plane) = self.build_lights(scene)?;
        scene.add_child(group, light_rig)?;
        let root = scene.root();
        scene.add_child(root, group)?;

        let marker = controller.link_target_with_node(target, group, tracking)?;
        controller.set_reveal_target(hero);
        info!(
            "scene assembled: marker `{}` -> group {}, hero {}",
            marker, group, hero
        );

        Ok(AssembledScene {
            marker,
            group,
            hero,
            light_rig,
            shadow_plane,
            model_loaded,
        })
    }

    fn load_hero(
        &self,
        scene: &mut dyn SceneGraph,
        assets: &dyn AssetSource,
        hero: NodeId,
    ) -> Result<bool, AssemblyError> {
        let model = match load_obj_model(assets, &self.config.model) {
            Ok(model) => model,
            Err(e) => {
                error!("hero model `{}` failed to load: {}", self.config.model, e);
                return Ok(false);
            }
        };

        let material = self.config.model_texture.as_deref().and_then(|name| {
            match assets.read_asset(name) {
                Ok(bytes) => Some(Material::textured(Texture {
                    name: name.to_string(),
                    bytes,
                })),
                Err(e) => {
                    warn!("hero texture `{}` failed to load: {}", name, e);
                    None
                }
            }
        });

        scene.attach_model(hero, model, material)?;
        Ok(true)
    }

    fn build_lights(&self, scene: &mut dyn SceneGraph) -> Result<(NodeId, NodeId), AssemblyError> {
        let rig = scene.create_node("light rig");
        scene.attach_light(rig, self.config.spotlight.clone())?;

        let plane = scene.create_node("shadow plane");
        let (width, height) = self.config.shadow_surface_size;
        scene.attach_surface(plane, ShadowSurface::new(width, height))?;
        scene.set_rotation(plane, self.config.shadow_surface_rotation)?;
        scene.set_position(plane, self.config.shadow_surface_position)?;
        scene.add_child(rig, plane)?;

        if let Some(environment) = &self.config.environment {
            scene.set_lighting_environment(environment);
        }
        Ok((rig, plane))
    }
}
