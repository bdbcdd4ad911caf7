pub mod codec;
pub mod fs;
pub mod http;
pub mod pokeapi;
pub mod presenters;
pub mod wallpaper;


pub use codec::ImageCrateResizer;
pub use fs::FsImageStore;
pub use http::ReqwestDownloader;
pub use pokeapi::{PokeApiCatalog, DEFAULT_API_BASE};
pub use presenters::{present_outcome, present_species_label};
pub use wallpaper::{NoopWallpaperSetter, SystemWallpaperSetter};
