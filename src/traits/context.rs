use super::asset_loader::AssetLoader;
use super::scene_graph::SceneGraph;

/// Task queued onto the engine's render thread.
pub type RenderTask = Box<dyn FnOnce(&mut dyn EngineContext) + Send + 'static>;

/// Handle to the host engine, passed into the lifecycle hooks.
pub trait EngineContext {
    /// The engine's asset loader.
    fn assets(&self) -> &dyn AssetLoader;

    /// The main scene.
    fn scene(&mut self) -> &mut dyn SceneGraph;

    /// Queue `task` to run on the render/GL thread.
    ///
    /// Scene mutation is not safe from arbitrary input-callback threads, so
    /// input handlers submit tasks here instead of touching the scene
    /// directly. Tasks run in submission order.
    fn run_on_render_thread(&self, task: RenderTask);
}
