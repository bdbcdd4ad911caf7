use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use poke_wall_domain::{BoundingBox, PipelineOutcome, SpeciesName};

use crate::{
    ApplicationError, FetchAndSetCommand, FetchArtworkCommand, ImageDownloader, ImageResizer,
    ImageStore, LoadSpeciesListCommand, SetWallpaperCommand, SpeciesCatalog, WallpaperSetter,
};

pub struct ApplicationService {
    downloader: Box<dyn ImageDownloader>,
    resizer: Box<dyn ImageResizer>,
    store: Box<dyn ImageStore>,
    wallpaper: Box<dyn WallpaperSetter>,
    catalog: Box<dyn SpeciesCatalog>,
}

impl ApplicationService {
    pub fn new(
        downloader: Box<dyn ImageDownloader>,
        resizer: Box<dyn ImageResizer>,
        store: Box<dyn ImageStore>,
        wallpaper: Box<dyn WallpaperSetter>,
        catalog: Box<dyn SpeciesCatalog>,
    ) -> Self {
        Self {
            downloader,
            resizer,
            store,
            wallpaper,
            catalog,
        }
    }

    /// Download, shrink, save and apply an image as the desktop background.
    ///
    /// Every stage logs its own failure and the run stops at the first one;
    /// nothing is propagated to the caller beyond the returned outcome.
    pub fn fetch_and_set(&self, command: FetchAndSetCommand) -> PipelineOutcome {
        let Some(image) = self.download_image(&command.url) else {
            return PipelineOutcome::DownloadFailed;
        };

        let Ok(resized) = self.resize_image(&image, command.bound) else {
            return PipelineOutcome::ResizeFailed;
        };

        if !self.save_image_file(&resized, &command.output_path) {
            return PipelineOutcome::SaveFailed;
        }

        let path = command.output_path;
        if self.set_desktop_background(SetWallpaperCommand { path: path.clone() }) {
            PipelineOutcome::WallpaperSet(path)
        } else {
            PipelineOutcome::WallpaperFailed(path)
        }
    }

    pub fn download_image(&self, url: &str) -> Option<Vec<u8>> {
        info!("Downloading image from {url}...");
        match self.downloader.download(url) {
            Ok(bytes) => {
                info!("success");
                Some(bytes)
            }
            Err(error) => {
                warn!("failure: {error}");
                None
            }
        }
    }

    pub fn resize_image(
        &self,
        image: &[u8],
        bound: BoundingBox,
    ) -> Result<Vec<u8>, ApplicationError> {
        debug!(
            "resizing {} bytes to fit {}x{}",
            image.len(),
            bound.width(),
            bound.height()
        );
        self.resizer.resize(image, bound).inspect_err(|error| {
            warn!("resize failed: {error}");
        })
    }

    pub fn save_image_file(&self, bytes: &[u8], path: &Path) -> bool {
        info!("Saving image file as {}...", path.display());
        match self.store.write(path, bytes) {
            Ok(()) => {
                info!("success");
                true
            }
            Err(error) => {
                warn!("failure: {error}");
                false
            }
        }
    }

    pub fn set_desktop_background(&self, command: SetWallpaperCommand) -> bool {
        info!("Setting desktop to {}...", command.path.display());
        match self.wallpaper.set_wallpaper(&command.path) {
            Ok(()) => {
                info!("success");
                true
            }
            Err(error) => {
                warn!("failure: {error}");
                false
            }
        }
    }

    pub fn load_species_list(
        &self,
        _command: LoadSpeciesListCommand,
    ) -> Result<Vec<SpeciesName>, ApplicationError> {
        let species = self.catalog.list_species()?;
        info!("loaded {} species", species.len());
        Ok(species)
    }

    pub fn prepare_images_dir(&self, dir: &Path) -> Result<(), ApplicationError> {
        if dir.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "images directory must not be empty".to_string(),
            ));
        }
        self.store.ensure_dir(dir)
    }

    /// Local path of the species artwork, downloading it on a cache miss.
    ///
    /// Idempotent: once the file exists no further network calls are made.
    pub fn fetch_artwork(&self, command: FetchArtworkCommand) -> Option<PathBuf> {
        match self.lookup_or_populate(&command.name, &command.images_dir) {
            Ok(path) => Some(path),
            Err(error) => {
                warn!("fetching artwork for {} failed: {error}", command.name);
                None
            }
        }
    }

    fn lookup_or_populate(
        &self,
        name: &SpeciesName,
        images_dir: &Path,
    ) -> Result<PathBuf, ApplicationError> {
        self.prepare_images_dir(images_dir)?;

        let path = images_dir.join(name.artwork_file_name());
        if self.store.exists(&path) {
            debug!("artwork cache hit: {}", path.display());
            return Ok(path);
        }

        let url = self.catalog.artwork_url(name)?;
        info!("downloading artwork for {name} from {url}");
        let bytes = self.downloader.download(&url)?;
        self.resizer.validate(&bytes)?;
        self.store.write(&path, &bytes)?;
        info!("cached artwork for {name} at {}", path.display());
        Ok(path)
    }
}
