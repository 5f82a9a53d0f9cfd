use crate::core::{Geometry, Material, Resource, SceneObject, ShaderKind};
use crate::traits::{EngineContext, SceneMain};

/// Minimal 360° photo viewer: one equirectangular photo wrapped around an
/// inward-facing sphere. No state beyond the scene it builds.
#[derive(Debug, Default)]
pub struct PhotoViewer;

impl PhotoViewer {
    pub fn new() -> Self {
        PhotoViewer
    }
}

impl SceneMain for PhotoViewer {
    fn on_init(&mut self, ctx: &mut dyn EngineContext) {
        // decoding continues in the background; the engine binds the
        // texture once it is ready
        let texture = ctx.assets().load_texture(&Resource::bundled("photosphere"));

        let mut material = Material::new(ShaderKind::Texture);
        material.set_main_texture(texture);

        // inward faces so the photo surrounds the camera
        let sphere = SceneObject::new(Geometry::sphere(72, 144, false), material);
        ctx.scene().add_object(sphere);
    }
}
