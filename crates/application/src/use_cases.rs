use std::path::PathBuf;

use poke_wall_domain::{BoundingBox, SpeciesName};

#[derive(Debug, Clone)]
pub struct FetchAndSetCommand {
    pub url: String,
    pub output_path: PathBuf,
    pub bound: BoundingBox,
}

#[derive(Debug, Clone, Default)]
pub struct LoadSpeciesListCommand;

#[derive(Debug, Clone)]
pub struct FetchArtworkCommand {
    pub name: SpeciesName,
    pub images_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SetWallpaperCommand {
    pub path: PathBuf,
}
