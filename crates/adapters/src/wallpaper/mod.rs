use std::path::{Path, PathBuf};

use log::info;
use poke_wall_application::{ApplicationError, WallpaperSetter};

/// Changes the desktop background through the host OS.
///
/// Delegates to the `wallpaper` crate, which calls
/// `SystemParametersInfoW(SPI_SETDESKWALLPAPER)` on Windows, AppleScript on
/// macOS and the running desktop environment's mechanism on Linux.
#[derive(Debug, Default)]
pub struct SystemWallpaperSetter;

impl WallpaperSetter for SystemWallpaperSetter {
    fn set_wallpaper(&self, path: &Path) -> Result<(), ApplicationError> {
        let absolute = existing_absolute_path(path)?;
        let path_str = absolute.to_str().ok_or_else(|| {
            ApplicationError::InvalidInput(format!(
                "wallpaper path is not valid UTF-8: {}",
                absolute.display()
            ))
        })?;

        ::wallpaper::set_from_path(path_str)
            .map_err(|error| ApplicationError::Wallpaper(error.to_string()))
    }
}

/// Validates the path like the system setter but leaves the desktop alone.
#[derive(Debug, Default)]
pub struct NoopWallpaperSetter;

impl WallpaperSetter for NoopWallpaperSetter {
    fn set_wallpaper(&self, path: &Path) -> Result<(), ApplicationError> {
        let absolute = existing_absolute_path(path)?;
        info!("wallpaper updates disabled, skipping {}", absolute.display());
        Ok(())
    }
}

fn existing_absolute_path(path: &Path) -> Result<PathBuf, ApplicationError> {
    if !path.is_file() {
        return Err(ApplicationError::NotFound(format!(
            "wallpaper file {}",
            path.display()
        )));
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ApplicationError::Io(error.to_string()))
}
