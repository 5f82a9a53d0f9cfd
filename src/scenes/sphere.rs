use crate::core::{Geometry, Material, SceneObject};

use super::ENVIRONMENT_EXTENT;

/// Surrounding sphere: inward-facing triangles wrapped with the cubemap
/// material, scaled out to the environment extent.
pub fn build_sphere_environment(material: Material) -> SceneObject {
    let mut sphere = SceneObject::new(Geometry::sphere(18, 36, false), material);
    sphere
        .transform
        .set_scale(ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT);
    sphere
}
