use crate::core::texture::PendingTexture;

/// Shader selector understood by the engine's material system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShaderKind {
    /// Plain textured surface.
    #[default]
    Texture,
    /// Skybox sampling of a cubemap by direction vector.
    Cubemap,
    /// Mirror-like surface sampling a cubemap for reflections.
    CubemapReflection,
}

/// Client-side material description: a shader plus texture bindings.
///
/// Textures are deferred handles; a material built from unresolved handles
/// is valid and the engine binds them once decoding finishes.
#[derive(Clone, Debug)]
pub struct Material {
    shader: ShaderKind,
    main_texture: Option<PendingTexture>,
    named_textures: Vec<(String, PendingTexture)>,
    face_textures: Vec<PendingTexture>,
}

impl Material {
    pub fn new(shader: ShaderKind) -> Self {
        Material {
            shader,
            main_texture: None,
            named_textures: Vec::new(),
            face_textures: Vec::new(),
        }
    }

    pub fn shader(&self) -> ShaderKind {
        self.shader
    }

    pub fn set_main_texture(&mut self, texture: PendingTexture) {
        self.main_texture = Some(texture);
    }

    pub fn main_texture(&self) -> Option<&PendingTexture> {
        self.main_texture.as_ref()
    }

    /// Bind a texture to a named shader slot.
    pub fn set_texture(&mut self, name: &str, texture: PendingTexture) {
        if let Some(slot) = self.named_textures.iter_mut().find(|(n, _)| n == name) {
            slot.1 = texture;
        } else {
            self.named_textures.push((name.to_string(), texture));
        }
    }

    pub fn texture(&self, name: &str) -> Option<&PendingTexture> {
        self.named_textures
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// One flat texture per cube face, in the engine's face order.
    pub fn set_face_textures(&mut self, textures: Vec<PendingTexture>) {
        self.face_textures = textures;
    }

    pub fn face_textures(&self) -> &[PendingTexture] {
        &self.face_textures
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(ShaderKind::default())
    }
}
