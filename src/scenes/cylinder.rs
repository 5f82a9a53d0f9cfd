use crate::core::{Geometry, Material, SceneObject};

use super::ENVIRONMENT_EXTENT;

/// Surrounding cylinder with inward faces and the cubemap material.
pub fn build_cylinder_environment(material: Material) -> SceneObject {
    let geometry = Geometry::Cylinder {
        bottom_radius: 0.5,
        top_radius: 0.5,
        height: 1.0,
        stacks: 10,
        slices: 36,
        facing_out: false,
    };

    let mut cylinder = SceneObject::new(geometry, material);
    cylinder
        .transform
        .set_scale(ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT);
    cylinder
}
