//! Environment scene construction, one builder per variant.
//!
//! Builders produce declarative scene objects; the engine tessellates and
//! renders them. Nothing here touches the scene graph directly.

mod cube;
mod cycle;
mod cylinder;
mod plane;
mod quads;
mod reflective;
mod sphere;

pub use cube::{build_cube_environment, build_cube_faces_environment};
pub use cycle::{EnvironmentCycle, EnvironmentKind};
pub use cylinder::build_cylinder_environment;
pub use plane::build_image_plane;
pub use quads::build_quad_shell;
pub use reflective::{build_reflective_object, ReflectiveKind};
pub use sphere::build_sphere_environment;

/// Uniform scale applied to every surrounding environment shape.
pub const ENVIRONMENT_EXTENT: f32 = 20.0;

/// Scale applied to the reflective object.
pub const REFLECTIVE_SCALE: f32 = 2.0;
