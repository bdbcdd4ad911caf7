use std::path::PathBuf;

use poke_wall_adapters::DEFAULT_API_BASE;
use poke_wall_domain::{BoundingBox, DomainError};

use crate::cli::{FetchArgs, SpeciesArgs, ViewerArgs};

pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/45201/kitty-cat-kitten-pet-45201.jpeg";
pub const DEFAULT_IMAGE_FILE: &str = "kitty.jpg";
pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 600;
pub const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub image_url: String,
    pub image_path: PathBuf,
    pub max_width: u32,
    pub max_height: u32,
    pub images_dir: PathBuf,
    pub api_base: String,
    pub set_wallpaper: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_string(),
            image_path: std::env::temp_dir().join(DEFAULT_IMAGE_FILE),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            api_base: DEFAULT_API_BASE.to_string(),
            set_wallpaper: true,
        }
    }
}

impl AppConfig {
    pub fn bound(&self) -> Result<BoundingBox, DomainError> {
        BoundingBox::new(self.max_width, self.max_height)
    }

    pub fn with_fetch_overrides(mut self, args: &FetchArgs) -> Self {
        if let Some(url) = &args.url {
            self.image_url = url.clone();
        }
        if let Some(output) = &args.output {
            self.image_path = output.clone();
        }
        if let Some(width) = args.max_width {
            self.max_width = width;
        }
        if let Some(height) = args.max_height {
            self.max_height = height;
        }
        self.set_wallpaper &= !args.no_wallpaper;
        self
    }

    pub fn with_viewer_overrides(mut self, args: &ViewerArgs) -> Self {
        if let Some(dir) = &args.images_dir {
            self.images_dir = dir.clone();
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        self.set_wallpaper &= !args.no_wallpaper;
        self
    }

    pub fn with_species_overrides(mut self, args: &SpeciesArgs) -> Self {
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        self
    }
}
