use std::sync::{Arc, OnceLock};

/// What the engine decoded a texture into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureKind {
    Flat,
    Cubemap,
    CompressedCubemap,
}

/// An engine-resolved texture. Opaque apart from its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    pub id: u64,
    pub kind: TextureKind,
}

/// An engine-resolved mesh. Opaque apart from its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mesh {
    pub id: u64,
}

#[derive(Debug)]
struct Cell<T> {
    label: String,
    slot: OnceLock<T>,
}

/// Deferred handle to an asset the engine is still decoding.
///
/// Handles are cheap to clone and valid to bind before resolution; the
/// engine fills them in once decoding completes. `try_get` is a
/// non-blocking peek — nothing in this crate ever waits on a handle.
#[derive(Clone, Debug)]
pub struct Deferred<T> {
    cell: Arc<Cell<T>>,
}

/// Resolver half of a deferred handle, held by the engine (or a test
/// double) until decoding finishes.
#[derive(Debug)]
pub struct Promise<T> {
    cell: Arc<Cell<T>>,
}

pub type PendingTexture = Deferred<Texture>;
pub type TexturePromise = Promise<Texture>;
pub type PendingMesh = Deferred<Mesh>;
pub type MeshPromise = Promise<Mesh>;

/// Create a handle/promise pair for an in-flight texture load.
pub fn pending_texture(label: impl Into<String>) -> (PendingTexture, TexturePromise) {
    deferred(label)
}

/// Create a handle/promise pair for an in-flight mesh load.
pub fn pending_mesh(label: impl Into<String>) -> (PendingMesh, MeshPromise) {
    deferred(label)
}

fn deferred<T>(label: impl Into<String>) -> (Deferred<T>, Promise<T>) {
    let cell = Arc::new(Cell {
        label: label.into(),
        slot: OnceLock::new(),
    });
    (
        Deferred { cell: Arc::clone(&cell) },
        Promise { cell },
    )
}

impl<T> Deferred<T> {
    /// The resource label this handle was created for.
    pub fn label(&self) -> &str {
        &self.cell.label
    }

    /// Peek at the resolved value, if decoding has finished.
    pub fn try_get(&self) -> Option<&T> {
        self.cell.slot.get()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.slot.get().is_some()
    }
}

impl<T> Promise<T> {
    pub fn label(&self) -> &str {
        &self.cell.label
    }

    /// Resolve the handle. Consumes the promise; every clone of the paired
    /// handle observes the value.
    pub fn fulfill(self, value: T) {
        let _ = self.cell.slot.set(value);
    }
}
