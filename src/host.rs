//! In-process engine stand-in used by the demo binary and the integration
//! tests. Records what the samples build; renders nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::{
    pending_mesh, pending_texture, Mesh, MeshPromise, PendingMesh, PendingTexture, Resource,
    SceneObject, Texture, TextureKind, TexturePromise,
};
use crate::traits::{AssetLoader, CameraRigKind, EngineContext, RenderTask, SceneGraph};

/// Asset loader that mints deferred handles without decoding anything.
///
/// Promises are parked until [`resolve_pending`](Self::resolve_pending) is
/// called, so handles behave like real in-flight loads: bindable
/// immediately, ready later.
#[derive(Default)]
pub struct HeadlessAssets {
    next_id: AtomicU64,
    parked_textures: Mutex<Vec<(TexturePromise, TextureKind)>>,
    parked_meshes: Mutex<Vec<MeshPromise>>,
}

impl HeadlessAssets {
    /// Resolve every outstanding handle, as the engine would once decoding
    /// finishes. Returns the number resolved.
    pub fn resolve_pending(&self) -> usize {
        let mut resolved = 0;

        let textures: Vec<_> = {
            let mut parked = self.parked_textures.lock().expect("parked textures poisoned");
            parked.drain(..).collect()
        };
        for (promise, kind) in textures {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            log::debug!("resolved texture {} as #{id}", promise.label());
            promise.fulfill(Texture { id, kind });
            resolved += 1;
        }

        let meshes: Vec<_> = {
            let mut parked = self.parked_meshes.lock().expect("parked meshes poisoned");
            parked.drain(..).collect()
        };
        for promise in meshes {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            promise.fulfill(Mesh { id });
            resolved += 1;
        }

        resolved
    }

    fn park_texture(&self, resource: &Resource, kind: TextureKind) -> PendingTexture {
        let (handle, promise) = pending_texture(resource.label());
        self.parked_textures
            .lock()
            .expect("parked textures poisoned")
            .push((promise, kind));
        handle
    }
}

impl AssetLoader for HeadlessAssets {
    fn load_texture(&self, resource: &Resource) -> PendingTexture {
        self.park_texture(resource, TextureKind::Flat)
    }

    fn load_cubemap_texture(&self, resource: &Resource) -> PendingTexture {
        self.park_texture(resource, TextureKind::Cubemap)
    }

    fn load_compressed_cubemap_texture(&self, resource: &Resource) -> PendingTexture {
        self.park_texture(resource, TextureKind::CompressedCubemap)
    }

    fn load_mesh(&self, resource: &Resource) -> PendingMesh {
        let (handle, promise) = pending_mesh(resource.label());
        self.parked_meshes
            .lock()
            .expect("parked meshes poisoned")
            .push(promise);
        handle
    }
}

/// Scene graph that just records what the samples build.
#[derive(Default)]
pub struct HeadlessScene {
    objects: Vec<SceneObject>,
    frustum_culling: bool,
    stats_enabled: bool,
    camera_rig: CameraRigKind,
}

impl HeadlessScene {
    pub fn frustum_culling(&self) -> bool {
        self.frustum_culling
    }

    pub fn stats_enabled(&self) -> bool {
        self.stats_enabled
    }

    pub fn camera_rig(&self) -> CameraRigKind {
        self.camera_rig
    }
}

impl SceneGraph for HeadlessScene {
    fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    fn clear(&mut self) {
        self.objects.clear();
    }

    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn set_frustum_culling(&mut self, enabled: bool) {
        self.frustum_culling = enabled;
    }

    fn set_stats_enabled(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
    }

    fn set_camera_rig(&mut self, rig: CameraRigKind) {
        self.camera_rig = rig;
    }
}

/// Engine context stand-in: headless assets, a recording scene, and a task
/// queue standing in for the render thread.
pub struct HeadlessHost {
    assets: HeadlessAssets,
    scene: HeadlessScene,
    task_tx: Sender<RenderTask>,
    task_rx: Receiver<RenderTask>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        let (task_tx, task_rx) = unbounded();
        HeadlessHost {
            assets: HeadlessAssets::default(),
            scene: HeadlessScene::default(),
            task_tx,
            task_rx,
        }
    }

    /// The recorded scene, for inspection.
    pub fn scene(&self) -> &HeadlessScene {
        &self.scene
    }

    /// Resolve every outstanding asset handle. Returns the number resolved.
    pub fn resolve_assets(&self) -> usize {
        self.assets.resolve_pending()
    }

    /// Run queued render-thread tasks on the calling thread, in submission
    /// order. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let tasks: Vec<RenderTask> = self.task_rx.try_iter().collect();
        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContext for HeadlessHost {
    fn assets(&self) -> &dyn AssetLoader {
        &self.assets
    }

    fn scene(&mut self) -> &mut dyn SceneGraph {
        &mut self.scene
    }

    fn run_on_render_thread(&self, task: RenderTask) {
        // the render thread is whoever pumps; just enqueue
        let _ = self.task_tx.send(task);
    }
}
