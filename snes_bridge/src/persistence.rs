//! Host capability for storing state blobs.
//!
//! The bridge hands each [`StateBlob`] to a [`StatePersistence`] and keeps nothing. Storage
//! semantics such as overwriting or atomic writes are entirely up to the implementation.
use std::cell::Ref;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::StateBlob;

pub trait StatePersistence {
    fn persist(&mut self, blob: StateBlob);
}

impl<F> StatePersistence for F
where
    F: FnMut(StateBlob),
{
    fn persist(&mut self, blob: StateBlob) {
        self(blob)
    }
}

/// Records every blob it receives. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence(Rc<RefCell<Vec<StateBlob>>>);

impl MemoryPersistence {
    pub fn records(&self) -> Ref<'_, Vec<StateBlob>> {
        self.0.borrow()
    }

    /// Most recent blob stored under `name`.
    pub fn latest(&self, name: &str) -> Option<StateBlob> {
        self.0
            .borrow()
            .iter()
            .rev()
            .find(|blob| blob.name == name)
            .cloned()
    }
}

impl StatePersistence for MemoryPersistence {
    fn persist(&mut self, blob: StateBlob) {
        self.0.borrow_mut().push(blob);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::directory::DirectoryPersistence;

#[cfg(not(target_arch = "wasm32"))]
mod directory {
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::path::PathBuf;

    use anyhow::ensure;
    use anyhow::Context;
    use anyhow::Result;
    use tempfile::NamedTempFile;

    use super::StatePersistence;
    use crate::state::StateBlob;

    /// Stores each blob as a file named after the blob inside one directory.
    ///
    /// A repeated save under the same name replaces the previous file.
    #[derive(Clone, Debug)]
    pub struct DirectoryPersistence {
        dir: PathBuf,
    }

    impl DirectoryPersistence {
        pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
            let dir = dir.into();
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create save directory {:?}", dir))?;
            Ok(Self { dir })
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        pub fn path_for(&self, name: &str) -> Result<PathBuf> {
            ensure!(!name.is_empty(), "State name is empty");
            ensure!(
                name != "." && name != ".." && !name.contains(['/', '\\']),
                "State name {:?} is not a plain file name",
                name
            );
            Ok(self.dir.join(name))
        }

        /// Writes the blob next to its destination and renames it into place, so readers never
        /// see a partially written save.
        pub fn write(&self, blob: &StateBlob) -> Result<PathBuf> {
            let path = self.path_for(&blob.name)?;
            let mut tmp_file = NamedTempFile::new_in(&self.dir)
                .with_context(|| format!("Cannot create temporary file in {:?}", self.dir))?;
            tmp_file
                .write_all(&blob.payload)
                .with_context(|| format!("Cannot write {:?}", tmp_file.path()))?;
            tmp_file
                .persist(&path)
                .with_context(|| format!("Cannot replace {:?}", path))?;
            Ok(path)
        }

        pub fn read(&self, name: &str) -> Result<Vec<u8>> {
            let path = self.path_for(name)?;
            fs::read(&path).with_context(|| format!("Cannot read {:?}", path))
        }
    }

    impl StatePersistence for DirectoryPersistence {
        fn persist(&mut self, blob: StateBlob) {
            match self.write(&blob) {
                Ok(path) => log::info!(
                    "Saved state {:?} ({} bytes) to {:?}",
                    blob.name,
                    blob.payload.len(),
                    path
                ),
                Err(err) => log::error!("Failed to save state {:?}: {:#}", blob.name, err),
            }
        }
    }
}
