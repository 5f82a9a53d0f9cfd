use std::path::PathBuf;

/// The environment shapes the cubemap viewer cycles through, in tap order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentKind {
    /// Surrounding sphere with the cubemap texture.
    Sphere,
    /// Surrounding cube with a single cubemap texture.
    Cube,
    /// Surrounding cube with a compressed cubemap texture.
    CubeCompressed,
    /// Surrounding cube with six separate face textures.
    CubeFaces,
    /// Surrounding cylinder with the cubemap texture.
    Cylinder,
    /// Cube shell assembled from six individually placed quads.
    Quads,
}

impl EnvironmentKind {
    /// All variants, in cycle order.
    pub const ALL: [EnvironmentKind; 6] = [
        EnvironmentKind::Sphere,
        EnvironmentKind::Cube,
        EnvironmentKind::CubeCompressed,
        EnvironmentKind::CubeFaces,
        EnvironmentKind::Cylinder,
        EnvironmentKind::Quads,
    ];

    /// Compressed cubemaps render cheapest, so the viewer starts there.
    pub const INITIAL: EnvironmentKind = EnvironmentKind::CubeCompressed;

    pub fn index(self) -> usize {
        match self {
            EnvironmentKind::Sphere => 0,
            EnvironmentKind::Cube => 1,
            EnvironmentKind::CubeCompressed => 2,
            EnvironmentKind::CubeFaces => 3,
            EnvironmentKind::Cylinder => 4,
            EnvironmentKind::Quads => 5,
        }
    }

    /// The variant after `self`, wrapping at the end.
    pub fn next(self) -> EnvironmentKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// What the cubemap viewer shows next: a shape from the fixed cycle, or a
/// file discovered on external storage.
///
/// Only the tap handler advances the cycle; every advance wraps modulo the
/// entry count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvironmentCycle {
    Shapes(EnvironmentKind),
    Storage { index: usize, files: Vec<PathBuf> },
}

impl EnvironmentCycle {
    /// Shape mode, starting at the default variant.
    pub fn shapes() -> Self {
        EnvironmentCycle::Shapes(EnvironmentKind::INITIAL)
    }

    /// Storage mode over `files`, showing the first file initially.
    /// An empty list falls back to shape mode.
    pub fn storage(files: Vec<PathBuf>) -> Self {
        if files.is_empty() {
            Self::shapes()
        } else {
            EnvironmentCycle::Storage { index: 0, files }
        }
    }

    /// Number of entries in the cycle; never zero.
    pub fn len(&self) -> usize {
        match self {
            EnvironmentCycle::Shapes(_) => EnvironmentKind::ALL.len(),
            EnvironmentCycle::Storage { files, .. } => files.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, EnvironmentCycle::Storage { .. })
    }

    /// Advance to the next entry, wrapping at the end.
    pub fn advance(&mut self) {
        match self {
            EnvironmentCycle::Shapes(kind) => *kind = kind.next(),
            EnvironmentCycle::Storage { index, files } => *index = (*index + 1) % files.len(),
        }
    }
}
