use crate::core::{Geometry, Material, PendingTexture, Resource, SceneObject, ShaderKind};
use crate::traits::AssetLoader;

use super::{ENVIRONMENT_EXTENT, REFLECTIVE_SCALE};

/// Geometry source for the reflective object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflectiveKind {
    /// Engine-generated sphere.
    Sphere,
    /// Sphere mesh imported from the bundled model resource.
    ImportedMesh,
}

/// Reflective object placed in front of the environment; its material
/// samples the cubemap to fake a mirror finish.
pub fn build_reflective_object(
    kind: ReflectiveKind,
    assets: &dyn AssetLoader,
    cubemap: PendingTexture,
) -> SceneObject {
    let mut material = Material::new(ShaderKind::CubemapReflection);
    material.set_texture("diffuseTexture", cubemap.clone());
    material.set_main_texture(cubemap);

    let geometry = match kind {
        ReflectiveKind::Sphere => Geometry::sphere(18, 36, true),
        ReflectiveKind::ImportedMesh => {
            Geometry::Imported(assets.load_mesh(&Resource::bundled("sphere")))
        }
    };

    let mut sphere = SceneObject::new(geometry, material);
    sphere.set_name("sphere");
    sphere
        .transform
        .set_scale(REFLECTIVE_SCALE, REFLECTIVE_SCALE, REFLECTIVE_SCALE);
    sphere
        .transform
        .set_position(0.0, 0.0, -ENVIRONMENT_EXTENT * 0.25);
    sphere
}
