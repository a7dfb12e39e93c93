use super::backend::StorageBackend;
use crate::error::{ReelError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(ReelError::Io)?;
        }
        Ok(parent)
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ReelError::Io)?;
        Ok(Some(content))
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        let parent = self.ensure_parent()?;

        // Atomic write: sibling tmp file, then rename over the target
        let tmp_file = parent.join(format!(".catalog-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, contents).map_err(ReelError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ReelError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
