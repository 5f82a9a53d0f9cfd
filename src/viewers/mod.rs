mod cubemap;
mod photo;

pub use cubemap::CubemapViewer;
pub use photo::PhotoViewer;
