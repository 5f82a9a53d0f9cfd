pub mod storage;

pub use storage::{is_archive, probe_image_dimensions, scan_override_files, DEFAULT_STORAGE_DIR};
