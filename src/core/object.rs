use glam::{Quat, Vec3};

use crate::core::geometry::Geometry;
use crate::core::material::Material;

/// Position, orientation and scale of a scene object.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn set_position_z(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
    }

    /// Apply an additional rotation of `angle_deg` degrees about `axis`.
    pub fn rotate_by_axis(&mut self, angle_deg: f32, axis: Vec3) {
        self.rotation = Quat::from_axis_angle(axis.normalize(), angle_deg.to_radians()) * self.rotation;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// A node handed to the scene graph: geometry, material, transform, and an
/// optional name used only for diagnostics.
#[derive(Clone, Debug)]
pub struct SceneObject {
    name: String,
    geometry: Geometry,
    material: Material,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        SceneObject {
            name: String::new(),
            geometry,
            material,
            transform: Transform::default(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}
