use crate::api::CatalogApi;
use crate::store::fs::FileCatalog;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("movies.json");
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    /// Open a fresh store over the environment's catalog file.
    pub fn store(&self) -> FileCatalog {
        FileCatalog::open_path(self.data_file.clone())
    }

    pub fn api(&self) -> CatalogApi<FileCatalog> {
        CatalogApi::new(self.store(), self.data_file.clone())
    }
}
