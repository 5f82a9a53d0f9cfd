use crate::core::{Geometry, Material, PendingTexture, SceneObject, ShaderKind};

use super::ENVIRONMENT_EXTENT;

/// Surrounding cube wrapped with a single cubemap material (plain or
/// compressed — the material decides).
pub fn build_cube_environment(material: Material) -> SceneObject {
    let mut cube = SceneObject::new(Geometry::cube(false), material);
    cube.transform
        .set_scale(ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT);
    cube
}

/// Surrounding cube carrying one flat texture per face, handed to the
/// engine in its face order.
pub fn build_cube_faces_environment(face_textures: Vec<PendingTexture>) -> SceneObject {
    let mut material = Material::new(ShaderKind::Texture);
    material.set_face_textures(face_textures);

    let mut cube = SceneObject::new(Geometry::cube(false), material);
    cube.transform
        .set_scale(ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT);
    cube
}
