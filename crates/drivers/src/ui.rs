use std::path::{Path, PathBuf};

use eframe::egui;
use image::ImageReader;
use log::warn;
use poke_wall_adapters::present_species_label;
use poke_wall_application::{ViewerController, ViewerState, LOAD_IMAGE_FAILED, SELECT_PROMPT};
use poke_wall_domain::SpeciesName;

const WINDOW_TITLE: &str = "Pokémon Viewer";
const WINDOW_SIZE: [f32; 2] = [600.0, 600.0];
const MIN_WINDOW_SIZE: [f32; 2] = [500.0, 500.0];
const CONTROLS_HEIGHT: f32 = 110.0;
const COMBO_WIDTH: f32 = 240.0;

struct LoadedArtwork {
    path: PathBuf,
    texture: egui::TextureHandle,
}

pub struct ViewerApp {
    controller: ViewerController,
    artwork: Option<LoadedArtwork>,
    failed_path: Option<PathBuf>,
}

impl ViewerApp {
    fn new(controller: ViewerController) -> Self {
        Self {
            controller,
            artwork: None,
            failed_path: None,
        }
    }

    /// Keeps exactly one texture matching the displayed artwork.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let wanted = self
            .controller
            .state()
            .displayed
            .as_ref()
            .map(|displayed| displayed.path.clone());

        match wanted {
            None => {
                self.artwork = None;
                self.failed_path = None;
            }
            Some(path) => {
                let current = self.artwork.as_ref().map(|artwork| artwork.path.as_path());
                if current == Some(path.as_path()) || self.failed_path.as_ref() == Some(&path) {
                    return;
                }
                match load_texture(ctx, &path) {
                    Ok(texture) => {
                        self.artwork = Some(LoadedArtwork { path, texture });
                        self.failed_path = None;
                    }
                    Err(error) => {
                        warn!("could not display {}: {error}", path.display());
                        self.artwork = None;
                        self.failed_path = Some(path);
                    }
                }
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);

        let mut picked: Option<SpeciesName> = None;
        let mut set_background = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = self.controller.state();
            ui.vertical_centered(|ui| {
                let image_area = egui::vec2(
                    ui.available_width(),
                    (ui.available_height() - CONTROLS_HEIGHT).max(0.0),
                );
                ui.allocate_ui(image_area, |ui| {
                    ui.centered_and_justified(|ui| match &self.artwork {
                        Some(artwork) => {
                            ui.add(
                                egui::Image::new(&artwork.texture)
                                    .max_size(image_area)
                                    .maintain_aspect_ratio(true),
                            );
                        }
                        None => {
                            ui.label(image_caption(state, self.failed_path.is_some()));
                        }
                    });
                });

                ui.add_space(10.0);
                egui::ComboBox::from_id_salt("species")
                    .width(COMBO_WIDTH)
                    .selected_text(combo_label(state))
                    .show_ui(ui, |ui| {
                        for name in &state.species {
                            let selected = state.selected.as_ref() == Some(name);
                            if ui
                                .selectable_label(selected, present_species_label(name))
                                .clicked()
                            {
                                picked = Some(name.clone());
                            }
                        }
                    });

                ui.add_space(10.0);
                let button = egui::Button::new("Set as Desktop Background");
                let enabled = background_button_enabled(
                    self.controller.can_set_background(),
                    self.artwork.is_some(),
                );
                if ui.add_enabled(enabled, button).clicked() {
                    set_background = true;
                }
            });
        });

        if let Some(name) = picked {
            self.controller.select(name);
            ctx.request_repaint();
        }
        if set_background {
            self.controller.set_background();
        }
    }
}

/// Only artwork that is both cached and rendered may become the background.
fn background_button_enabled(artwork_cached: bool, texture_loaded: bool) -> bool {
    artwork_cached && texture_loaded
}

fn combo_label(state: &ViewerState) -> String {
    state
        .selected
        .as_ref()
        .map(present_species_label)
        .unwrap_or_else(|| SELECT_PROMPT.to_string())
}

fn image_caption(state: &ViewerState, texture_failed: bool) -> &str {
    if texture_failed {
        LOAD_IMAGE_FAILED
    } else if state.status.is_empty() {
        SELECT_PROMPT
    } else {
        &state.status
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle, String> {
    let image = ImageReader::open(path)
        .map_err(|error| error.to_string())?
        .with_guessed_format()
        .map_err(|error| error.to_string())?
        .decode()
        .map_err(|error| error.to_string())?;

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture(
        path.display().to_string(),
        pixels,
        egui::TextureOptions::LINEAR,
    ))
}

pub fn launch_viewer(mut controller: ViewerController) -> Result<(), String> {
    controller.bootstrap();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(controller)))),
    )
    .map_err(|error| format!("failed to start viewer: {error}"))
}
