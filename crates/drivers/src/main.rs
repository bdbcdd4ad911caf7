mod cli;
mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use log::{error, warn};
use poke_wall_adapters::{
    present_outcome, present_species_label, FsImageStore, ImageCrateResizer, NoopWallpaperSetter,
    PokeApiCatalog, ReqwestDownloader, SystemWallpaperSetter,
};
use poke_wall_application::{
    ApplicationService, FetchAndSetCommand, LoadSpeciesListCommand, ViewerController,
    WallpaperSetter,
};

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();

    match run_command(cli.command.unwrap_or_default(), AppConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            error!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, CommandError> {
    let downloader = ReqwestDownloader::new()
        .map_err(|error| CommandError::Runtime(format!("http client: {error}")))?;
    let catalog = PokeApiCatalog::new(config.api_base.clone())
        .map_err(|error| CommandError::Runtime(format!("catalog client: {error}")))?;

    Ok(ApplicationService::new(
        Box::new(downloader),
        Box::new(ImageCrateResizer),
        Box::new(FsImageStore),
        wallpaper_setter(config.set_wallpaper),
        Box::new(catalog),
    ))
}

fn wallpaper_setter(enabled: bool) -> Box<dyn WallpaperSetter> {
    if enabled {
        Box::new(SystemWallpaperSetter)
    } else {
        Box::new(NoopWallpaperSetter)
    }
}

fn run_command(command: Command, config: AppConfig) -> Result<(), CommandError> {
    match command {
        Command::Fetch(args) => {
            let config = config.with_fetch_overrides(&args);
            let bound = config
                .bound()
                .map_err(|error| CommandError::Usage(format!("invalid size: {error}")))?;
            let service = build_application_service(&config)?;

            // Pipeline failures are already logged per stage and do not
            // change the exit status.
            let outcome = service.fetch_and_set(FetchAndSetCommand {
                url: config.image_url,
                output_path: config.image_path,
                bound,
            });
            let summary = present_outcome(&outcome);
            if !outcome.is_success() {
                warn!("fetch stopped early: {summary}");
            }
            println!("{summary}");
            Ok(())
        }
        Command::Viewer(args) => {
            let config = config.with_viewer_overrides(&args);
            let service = build_application_service(&config)?;
            let controller = ViewerController::new(service, config.images_dir);
            ui::launch_viewer(controller).map_err(CommandError::Runtime)
        }
        Command::Species(args) => {
            let config = config.with_species_overrides(&args);
            let service = build_application_service(&config)?;
            let species = service
                .load_species_list(LoadSpeciesListCommand)
                .map_err(|error| CommandError::Runtime(format!("species list failed: {error}")))?;
            for name in species {
                println!("{}\t{}", name, present_species_label(&name));
            }
            Ok(())
        }
    }
}
