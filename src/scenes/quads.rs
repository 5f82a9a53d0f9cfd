use glam::Vec3;

use crate::core::{Geometry, Material, SceneObject};

use super::ENVIRONMENT_EXTENT;

/// Cube shell assembled from six individually positioned quads, all sharing
/// the cubemap material. Each face sits at half the extent along exactly
/// one axis and is rotated to face the viewer in the middle.
pub fn build_quad_shell(material: &Material) -> Vec<SceneObject> {
    let half = ENVIRONMENT_EXTENT * 0.5;

    // name, position, rotation angle (degrees), rotation axis
    let faces: [(&str, Vec3, f32, Vec3); 6] = [
        ("front", Vec3::new(0.0, 0.0, -half), 0.0, Vec3::Y),
        ("back", Vec3::new(0.0, 0.0, half), 180.0, Vec3::Y),
        ("left", Vec3::new(-half, 0.0, 0.0), 90.0, Vec3::Y),
        ("right", Vec3::new(half, 0.0, 0.0), -90.0, Vec3::Y),
        ("top", Vec3::new(0.0, half, 0.0), 90.0, Vec3::X),
        ("bottom", Vec3::new(0.0, -half, 0.0), -90.0, Vec3::X),
    ];

    faces
        .into_iter()
        .map(|(name, position, angle, axis)| {
            let mut face = SceneObject::new(
                Geometry::quad(ENVIRONMENT_EXTENT, ENVIRONMENT_EXTENT),
                material.clone(),
            );
            face.set_name(name);
            face.transform.position = position;
            if angle != 0.0 {
                face.transform.rotate_by_axis(angle, axis);
            }
            face
        })
        .collect()
}
