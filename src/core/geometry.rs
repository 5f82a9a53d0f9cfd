use crate::core::texture::PendingMesh;

/// Declarative description of a scene object's shape.
///
/// Tessellation is the engine's job; these variants carry only the
/// parameters it needs to generate the mesh.
#[derive(Clone, Debug)]
pub enum Geometry {
    Sphere {
        stacks: u32,
        slices: u32,
        /// false = triangles face inward, for surrounding geometry
        facing_out: bool,
    },
    Cube {
        facing_out: bool,
    },
    Cylinder {
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        stacks: u32,
        slices: u32,
        facing_out: bool,
    },
    Quad {
        width: f32,
        height: f32,
    },
    /// Mesh loaded by the engine from a model resource.
    Imported(PendingMesh),
}

impl Geometry {
    pub fn sphere(stacks: u32, slices: u32, facing_out: bool) -> Self {
        Geometry::Sphere { stacks, slices, facing_out }
    }

    pub fn cube(facing_out: bool) -> Self {
        Geometry::Cube { facing_out }
    }

    pub fn quad(width: f32, height: f32) -> Self {
        Geometry::Quad { width, height }
    }
}
