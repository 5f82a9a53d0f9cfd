use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while preparing storage-backed assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read image header of {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Something the asset loader can be pointed at: a resource bundled with the
/// application, or a file discovered at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Bundled(&'static str),
    File(PathBuf),
}

impl Resource {
    /// A compile-time packaged resource, addressed by name.
    pub fn bundled(name: &'static str) -> Self {
        Resource::Bundled(name)
    }

    /// Wrap a runtime file, verifying it can actually be opened.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let path = path.into();
        match File::open(&path) {
            Ok(_) => Ok(Resource::File(path)),
            Err(source) => Err(AssetError::Io { path, source }),
        }
    }

    /// Identifier used for handle labels and logging.
    pub fn label(&self) -> String {
        match self {
            Resource::Bundled(name) => (*name).to_string(),
            Resource::File(path) => path.display().to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Resource::File(path) => Some(path),
            Resource::Bundled(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_label() {
        assert_eq!(Resource::bundled("beach").label(), "beach");
    }

    #[test]
    fn test_from_file_rejects_missing_path() {
        let result = Resource::from_file("/definitely/not/here.png");
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }
}
