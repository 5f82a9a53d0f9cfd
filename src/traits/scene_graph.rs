use crate::core::object::SceneObject;

/// Camera rig behaviors the engine supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraRigKind {
    /// Orientation follows head tracking freely.
    #[default]
    Free,
    /// Orientation is frozen in place.
    Freeze,
}

/// Scene-graph capability of the host engine.
///
/// Mutation is only legal from the engine's render thread; see
/// [`EngineContext::run_on_render_thread`](crate::traits::EngineContext::run_on_render_thread).
pub trait SceneGraph {
    /// Parent `object` under the scene root.
    fn add_object(&mut self, object: SceneObject);

    /// Remove every object from the scene.
    fn clear(&mut self);

    /// The objects currently parented under the scene root.
    fn objects(&self) -> &[SceneObject];

    fn set_frustum_culling(&mut self, enabled: bool);

    fn set_stats_enabled(&mut self, enabled: bool);

    fn set_camera_rig(&mut self, rig: CameraRigKind);
}
