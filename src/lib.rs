pub mod cli;
pub mod core;
pub mod host;
pub mod loaders;
pub mod scenes;
pub mod traits;
pub mod viewers;

// Re-export the types a host embedding the samples needs
pub use scenes::{EnvironmentCycle, EnvironmentKind, ReflectiveKind};
pub use traits::{AssetLoader, CameraRigKind, EngineContext, SceneGraph, SceneMain};
pub use viewers::{CubemapViewer, PhotoViewer};
