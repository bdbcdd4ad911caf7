use std::path::PathBuf;

use log::{error, warn};
use poke_wall_domain::SpeciesName;

use crate::{
    ApplicationService, FetchArtworkCommand, LoadSpeciesListCommand, SetWallpaperCommand,
};

pub const SELECT_PROMPT: &str = "Select a Pokémon";
pub const LOAD_IMAGE_FAILED: &str = "Failed to load image.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedArtwork {
    pub name: SpeciesName,
    pub path: PathBuf,
}

/// Everything the viewer window renders. Handlers replace fields wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    pub species: Vec<SpeciesName>,
    pub selected: Option<SpeciesName>,
    pub displayed: Option<DisplayedArtwork>,
    pub status: String,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            species: Vec::new(),
            selected: None,
            displayed: None,
            status: SELECT_PROMPT.to_string(),
        }
    }
}

/// Event handlers for the artwork viewer, one method per user action.
pub struct ViewerController {
    service: ApplicationService,
    images_dir: PathBuf,
    state: ViewerState,
}

impl ViewerController {
    pub fn new(service: ApplicationService, images_dir: PathBuf) -> Self {
        Self {
            service,
            images_dir,
            state: ViewerState::default(),
        }
    }

    /// Creates the cache directory and loads the selection list.
    ///
    /// A catalog failure leaves the list empty and surfaces the reason in the
    /// status line instead of aborting the viewer.
    pub fn bootstrap(&mut self) {
        if let Err(error) = self.service.prepare_images_dir(&self.images_dir) {
            warn!(
                "could not prepare images dir {}: {error}",
                self.images_dir.display()
            );
        }

        match self.service.load_species_list(LoadSpeciesListCommand) {
            Ok(species) => {
                self.state.species = species;
                self.state.status = SELECT_PROMPT.to_string();
            }
            Err(load_error) => {
                error!("loading species list failed: {load_error}");
                self.state.species = Vec::new();
                self.state.status = format!("Failed to load Pokémon list: {load_error}");
            }
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Selection-changed handler. Returns whether artwork is now displayed.
    pub fn select(&mut self, name: SpeciesName) -> bool {
        self.state.selected = Some(name.clone());
        let fetched = self.service.fetch_artwork(FetchArtworkCommand {
            name: name.clone(),
            images_dir: self.images_dir.clone(),
        });

        match fetched {
            Some(path) => {
                self.state.displayed = Some(DisplayedArtwork { name, path });
                self.state.status.clear();
                true
            }
            None => {
                self.state.displayed = None;
                self.state.status = LOAD_IMAGE_FAILED.to_string();
                false
            }
        }
    }

    pub fn can_set_background(&self) -> bool {
        self.state.displayed.is_some()
    }

    /// Button handler. Does nothing until an artwork has been displayed.
    pub fn set_background(&self) -> bool {
        let Some(displayed) = &self.state.displayed else {
            return false;
        };
        self.service.set_desktop_background(SetWallpaperCommand {
            path: displayed.path.clone(),
        })
    }
}
