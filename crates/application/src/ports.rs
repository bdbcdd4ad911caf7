use std::path::Path;

use poke_wall_domain::{BoundingBox, SpeciesName};

use crate::ApplicationError;

/// Blocking fetch of a binary resource. Non-2xx responses are errors.
pub trait ImageDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>, ApplicationError>;
}

pub trait ImageResizer {
    /// Shrinks an encoded image to fit `bound` and re-encodes it in the
    /// format it arrived in. Images that already fit are returned untouched.
    fn resize(&self, image: &[u8], bound: BoundingBox) -> Result<Vec<u8>, ApplicationError>;

    /// Fails with `ApplicationError::Decode` unless `image` decodes.
    fn validate(&self, image: &[u8]) -> Result<(), ApplicationError>;
}

pub trait ImageStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError>;

    fn exists(&self, path: &Path) -> bool;

    fn ensure_dir(&self, dir: &Path) -> Result<(), ApplicationError>;
}

pub trait WallpaperSetter {
    fn set_wallpaper(&self, path: &Path) -> Result<(), ApplicationError>;
}

/// Remote catalog of species names and their official artwork.
pub trait SpeciesCatalog {
    fn list_species(&self) -> Result<Vec<SpeciesName>, ApplicationError>;

    fn artwork_url(&self, name: &SpeciesName) -> Result<String, ApplicationError>;
}
