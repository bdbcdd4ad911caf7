use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// poke-wall - fetch images and Pokémon artwork for your desktop background
#[derive(Parser, Debug)]
#[command(name = "poke-wall")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// What to run; defaults to `fetch` with built-in settings
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Download an image, shrink it, save it and set it as desktop background
    Fetch(FetchArgs),
    /// Open the Pokémon artwork viewer
    Viewer(ViewerArgs),
    /// Print the Pokémon names offered by the viewer
    Species(SpeciesArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Fetch(FetchArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchArgs {
    /// Image URL to download
    #[arg(long)]
    pub url: Option<String>,

    /// Where the resized image is written
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum width of the saved image in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: Option<u32>,

    /// Maximum height of the saved image in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: Option<u32>,

    /// Save the image but leave the desktop background untouched
    #[arg(long)]
    pub no_wallpaper: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerArgs {
    /// Directory downloaded artwork is cached in
    #[arg(long, value_name = "DIR")]
    pub images_dir: Option<PathBuf>,

    /// Base URL of the PokeAPI-compatible catalog
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Disable the "Set as Desktop Background" system call
    #[arg(long)]
    pub no_wallpaper: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesArgs {
    /// Base URL of the PokeAPI-compatible catalog
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}
