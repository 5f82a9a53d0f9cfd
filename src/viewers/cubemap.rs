use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::core::{AssetError, FpsCounter, Material, PendingTexture, Resource, ShaderKind};
use crate::loaders::storage;
use crate::scenes::{
    build_cube_environment, build_cube_faces_environment, build_cylinder_environment,
    build_image_plane, build_quad_shell, build_reflective_object, build_sphere_environment,
    EnvironmentCycle, EnvironmentKind, ReflectiveKind,
};
use crate::traits::{AssetLoader, CameraRigKind, EngineContext, SceneGraph, SceneMain};

/// Geometry used for the reflective object; fixed at compile time.
const REFLECTIVE_KIND: ReflectiveKind = ReflectiveKind::Sphere;

/// Cubemap/skybox viewer.
///
/// Shows one surrounding environment at a time and cycles to the next shape
/// on tap. When override files are found on external storage the cycle runs
/// over those files instead of the built-in shapes.
pub struct CubemapViewer {
    storage_dir: PathBuf,
    state: Arc<Mutex<ViewerState>>,
    fps: FpsCounter,
    initialized: bool,
}

/// State reached by the render-thread rebuild tasks.
struct ViewerState {
    cycle: EnvironmentCycle,
    cubemap_texture: Option<PendingTexture>,
    cubemap_material: Option<Material>,
    compressed_material: Option<Material>,
    face_textures: Vec<PendingTexture>,
}

impl CubemapViewer {
    pub fn new() -> Self {
        Self::with_storage_dir(storage::DEFAULT_STORAGE_DIR)
    }

    /// Scan `dir` for override files instead of the default location.
    pub fn with_storage_dir(dir: impl Into<PathBuf>) -> Self {
        CubemapViewer {
            storage_dir: dir.into(),
            state: Arc::new(Mutex::new(ViewerState {
                cycle: EnvironmentCycle::shapes(),
                cubemap_texture: None,
                cubemap_material: None,
                compressed_material: None,
                face_textures: Vec::new(),
            })),
            fps: FpsCounter::new(),
            initialized: false,
        }
    }
}

impl Default for CubemapViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneMain for CubemapViewer {
    fn on_init(&mut self, ctx: &mut dyn EngineContext) {
        ctx.scene().set_frustum_culling(true);

        let overrides = storage::scan_override_files(&self.storage_dir);
        let mut state = self.state.lock().expect("viewer state poisoned");

        if overrides.is_empty() {
            ctx.scene().set_stats_enabled(true);
            state.load_bundled_textures(ctx.assets());
            state.apply_environment(ctx);
        } else {
            log::info!(
                "{} override file(s) found under {}",
                overrides.len(),
                self.storage_dir.display()
            );
            state.cycle = EnvironmentCycle::storage(overrides);
            state.apply_from_storage(ctx);
        }

        drop(state);
        self.initialized = true;
    }

    fn on_step(&mut self) {
        self.fps.tick();
    }

    fn on_touch(&mut self, ctx: &dyn EngineContext) {
        if !self.initialized {
            return;
        }

        let state = Arc::clone(&self.state);
        ctx.run_on_render_thread(Box::new(move |ctx| {
            let mut state = state.lock().expect("viewer state poisoned");
            ctx.scene().clear();
            state.cycle.advance();

            if state.cycle.is_storage() {
                state.apply_from_storage(ctx);
            } else {
                state.apply_environment(ctx);
            }

            match &state.cycle {
                EnvironmentCycle::Shapes(kind) => log::info!("environment: {kind:?}"),
                EnvironmentCycle::Storage { index, .. } => {
                    log::info!("storage environment: {index}")
                }
            }
        }));
    }
}

impl ViewerState {
    /// Kick off every bundled texture load up front; decoding proceeds in
    /// the background while the first environment is built.
    fn load_bundled_textures(&mut self, assets: &dyn AssetLoader) {
        let cubemap = assets.load_cubemap_texture(&Resource::bundled("beach"));
        let mut cubemap_material = Material::new(ShaderKind::Cubemap);
        cubemap_material.set_main_texture(cubemap.clone());

        let compressed = assets.load_compressed_cubemap_texture(&Resource::bundled("museum"));
        let mut compressed_material = Material::new(ShaderKind::Cubemap);
        compressed_material.set_main_texture(compressed);

        // the engine's cube face order
        self.face_textures = ["back", "right", "front", "left", "top", "bottom"]
            .into_iter()
            .map(|face| assets.load_texture(&Resource::bundled(face)))
            .collect();

        self.cubemap_texture = Some(cubemap);
        self.cubemap_material = Some(cubemap_material);
        self.compressed_material = Some(compressed_material);
    }

    /// Build the current shape variant plus the reflective object, then log
    /// the scene contents.
    fn apply_environment(&mut self, ctx: &mut dyn EngineContext) {
        let EnvironmentCycle::Shapes(kind) = &self.cycle else {
            return;
        };
        let kind = *kind;

        let (Some(cubemap_material), Some(compressed_material), Some(cubemap_texture)) = (
            self.cubemap_material.clone(),
            self.compressed_material.clone(),
            self.cubemap_texture.clone(),
        ) else {
            return;
        };

        match kind {
            EnvironmentKind::Sphere => {
                ctx.scene().add_object(build_sphere_environment(cubemap_material));
            }
            EnvironmentKind::Cube => {
                ctx.scene().add_object(build_cube_environment(cubemap_material));
            }
            EnvironmentKind::CubeCompressed => {
                ctx.scene().add_object(build_cube_environment(compressed_material));
            }
            EnvironmentKind::CubeFaces => {
                ctx.scene()
                    .add_object(build_cube_faces_environment(self.face_textures.clone()));
            }
            EnvironmentKind::Cylinder => {
                ctx.scene().add_object(build_cylinder_environment(cubemap_material));
            }
            EnvironmentKind::Quads => {
                for face in build_quad_shell(&cubemap_material) {
                    ctx.scene().add_object(face);
                }
            }
        }

        let reflective = build_reflective_object(REFLECTIVE_KIND, ctx.assets(), cubemap_texture);
        ctx.scene().add_object(reflective);

        log_scene(ctx.scene());
    }

    /// Show the current storage file: archives become surrounding cubes,
    /// flat images a quad sized by their aspect ratio. Failures are logged
    /// and leave the scene as it is.
    fn apply_from_storage(&mut self, ctx: &mut dyn EngineContext) {
        let EnvironmentCycle::Storage { index, files } = &self.cycle else {
            return;
        };
        let file = files[*index].clone();

        let result = if storage::is_archive(&file) {
            show_storage_cubemap(ctx, &file)
        } else {
            show_storage_image(ctx, &file)
        };

        if let Err(err) = result {
            log::error!("skipping storage file {}: {err}", file.display());
        }

        log_scene(ctx.scene());
    }
}

fn show_storage_cubemap(ctx: &mut dyn EngineContext, file: &Path) -> Result<(), AssetError> {
    ctx.scene().set_camera_rig(CameraRigKind::Free);

    let resource = Resource::from_file(file)?;
    let texture = ctx.assets().load_cubemap_texture(&resource);
    let mut material = Material::new(ShaderKind::Cubemap);
    material.set_main_texture(texture);

    ctx.scene().add_object(build_cube_environment(material));
    Ok(())
}

fn show_storage_image(ctx: &mut dyn EngineContext, file: &Path) -> Result<(), AssetError> {
    ctx.scene().set_camera_rig(CameraRigKind::Freeze);

    let dimensions = storage::probe_image_dimensions(file)?;
    let resource = Resource::from_file(file)?;
    let texture = ctx.assets().load_texture(&resource);

    ctx.scene().add_object(build_image_plane(texture, dimensions));
    Ok(())
}

fn log_scene(scene: &dyn SceneGraph) {
    for object in scene.objects() {
        log::debug!("scene object name : {}", object.name());
    }
}
