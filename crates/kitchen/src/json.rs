use std::path::{Path, PathBuf};

use pantryplan_shared::document;

use crate::{PersistedState, Store};

/// Stores the state as one pretty printed JSON document.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> PersistedState {
        document::read_or_default(&self.path)
    }

    fn save(&mut self, state: &PersistedState) -> pantryplan_shared::Result<()> {
        document::write_atomic(&self.path, state)?;

        tracing::debug!(path = %self.path.display(), "state saved");

        Ok(())
    }
}
