use super::catalog_store::CatalogStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileCatalog = CatalogStore<FsBackend>;

impl FileCatalog {
    /// Open the catalog stored at `path`, creating it if it does not exist.
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        CatalogStore::open(FsBackend::new(path))
    }
}
