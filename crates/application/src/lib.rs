mod error;
#[cfg(test)]
mod fakes;
mod ports;
mod service;
mod use_cases;
mod viewer;

pub use error::ApplicationError;
pub use ports::{ImageDownloader, ImageResizer, ImageStore, SpeciesCatalog, WallpaperSetter};
pub use service::ApplicationService;
pub use use_cases::{
    FetchAndSetCommand, FetchArtworkCommand, LoadSpeciesListCommand, SetWallpaperCommand,
};
pub use viewer::{
    DisplayedArtwork, ViewerController, ViewerState, LOAD_IMAGE_FAILED, SELECT_PROMPT,
};
