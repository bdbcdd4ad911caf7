use std::fs;
use std::io::Write;
use std::path::Path;

use poke_wall_application::{ApplicationError, ImageStore};
use tempfile::NamedTempFile;

#[derive(Debug, Default)]
pub struct FsImageStore;

impl ImageStore for FsImageStore {
    /// Writes into a temp file beside `path` and renames it into place, so
    /// readers never observe a partially written image.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError> {
        let io_error = |error: std::io::Error| {
            ApplicationError::Io(format!("{}: {error}", path.display()))
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
        staged.write_all(bytes).map_err(io_error)?;
        staged.as_file().sync_all().map_err(io_error)?;
        staged.persist(path).map_err(|error| io_error(error.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(dir)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", dir.display())))
    }
}
