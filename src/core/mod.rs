pub mod fps;
pub mod geometry;
pub mod material;
pub mod object;
pub mod resource;
pub mod texture;

pub use fps::FpsCounter;
pub use geometry::Geometry;
pub use material::{Material, ShaderKind};
pub use object::{SceneObject, Transform};
pub use resource::{AssetError, Resource};
pub use texture::{
    pending_mesh, pending_texture, Mesh, MeshPromise, PendingMesh, PendingTexture, Texture,
    TextureKind, TexturePromise,
};
