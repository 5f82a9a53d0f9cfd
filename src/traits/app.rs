use super::context::EngineContext;

/// Lifecycle hooks a viewer sample implements; the host engine calls them.
///
/// `on_init` and `on_step` run on the engine's render thread. `on_touch`
/// may be delivered from an input thread, so it only gets a shared context
/// reference — anything that mutates the scene must go through
/// [`EngineContext::run_on_render_thread`].
pub trait SceneMain {
    /// One-time scene setup once the engine is ready.
    fn on_init(&mut self, ctx: &mut dyn EngineContext);

    /// Per-frame step.
    fn on_step(&mut self) {}

    /// Screen tap.
    fn on_touch(&mut self, _ctx: &dyn EngineContext) {}
}
