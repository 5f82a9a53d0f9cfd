use crate::core::resource::Resource;
use crate::core::texture::{PendingMesh, PendingTexture};

/// Asset-loading capability of the host engine.
///
/// Every load returns immediately with a deferred handle; decoding happens
/// off the render thread and the engine resolves the handle when the asset
/// is first needed. Callers bind handles, they never wait on them.
pub trait AssetLoader {
    /// Load a flat (2D) texture.
    fn load_texture(&self, resource: &Resource) -> PendingTexture;

    /// Load a six-face cubemap texture.
    fn load_cubemap_texture(&self, resource: &Resource) -> PendingTexture;

    /// Load a cubemap texture that stays compressed on the GPU.
    fn load_compressed_cubemap_texture(&self, resource: &Resource) -> PendingTexture;

    /// Load a mesh from a model resource.
    fn load_mesh(&self, resource: &Resource) -> PendingMesh;
}
