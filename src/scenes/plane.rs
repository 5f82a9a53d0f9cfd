use crate::core::{Geometry, Material, PendingTexture, SceneObject, ShaderKind};

use super::ENVIRONMENT_EXTENT;

/// Flat quad showing a single storage image, sized to the image's aspect
/// ratio and pushed back from the camera.
pub fn build_image_plane(texture: PendingTexture, dimensions: (u32, u32)) -> SceneObject {
    let (width, height) = dimensions;
    let quad_width = ENVIRONMENT_EXTENT;
    let quad_height = quad_width * height as f32 / width as f32;

    let mut material = Material::new(ShaderKind::Texture);
    material.set_main_texture(texture);

    let mut plane = SceneObject::new(Geometry::quad(quad_width, quad_height), material);
    plane.transform.set_position_z(-11.0);
    plane
}
