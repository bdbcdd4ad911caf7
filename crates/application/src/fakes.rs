//! In-memory port implementations shared by the service and viewer tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Once;

use log::{LevelFilter, Log, Metadata, Record};

use poke_wall_domain::{BoundingBox, SpeciesName};

use crate::{
    ApplicationError, ApplicationService, ImageDownloader, ImageResizer, ImageStore,
    SpeciesCatalog, WallpaperSetter,
};

#[derive(Clone, Default)]
pub(crate) struct FakeDownloader {
    responses: Rc<RefCell<HashMap<String, Result<Vec<u8>, String>>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeDownloader {
    pub(crate) fn respond(&self, url: &str, bytes: &[u8]) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Ok(bytes.to_vec()));
    }

    pub(crate) fn fail(&self, url: &str, reason: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Err(reason.to_string()));
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ImageDownloader for FakeDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>, ApplicationError> {
        self.calls.borrow_mut().push(url.to_string());
        match self.responses.borrow().get(url) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(reason)) => Err(ApplicationError::Network(reason.clone())),
            None => Err(ApplicationError::Network(format!("404 Not Found: {url}"))),
        }
    }
}

/// Accepts payloads starting with `IMG` and tags them as resized.
pub(crate) struct FakeResizer;

impl ImageResizer for FakeResizer {
    fn resize(&self, image: &[u8], _bound: BoundingBox) -> Result<Vec<u8>, ApplicationError> {
        self.validate(image)?;
        let mut resized = image.to_vec();
        resized.extend_from_slice(b" resized");
        Ok(resized)
    }

    fn validate(&self, image: &[u8]) -> Result<(), ApplicationError> {
        if image.starts_with(b"IMG") {
            Ok(())
        } else {
            Err(ApplicationError::Decode("unrecognised image format".into()))
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    files: Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Rc<RefCell<HashSet<PathBuf>>>,
    written: Rc<RefCell<Vec<PathBuf>>>,
    failing_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub(crate) fn seed(&self, path: &Path, bytes: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), bytes.to_vec());
    }

    pub(crate) fn fail_writes(&self) {
        self.failing_writes.set(true);
    }

    pub(crate) fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub(crate) fn written_paths(&self) -> Vec<PathBuf> {
        self.written.borrow().clone()
    }

    pub(crate) fn has_dir(&self, dir: &Path) -> bool {
        self.dirs.borrow().contains(dir)
    }
}

impl ImageStore for MemoryStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError> {
        if self.failing_writes.get() {
            return Err(ApplicationError::Io("permission denied".into()));
        }
        self.written.borrow_mut().push(path.to_path_buf());
        self.seed(path, bytes);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), ApplicationError> {
        self.dirs.borrow_mut().insert(dir.to_path_buf());
        Ok(())
    }
}

/// Records applied paths; only files present in the paired store count.
#[derive(Clone)]
pub(crate) struct RecordingWallpaper {
    store: MemoryStore,
    applied: Rc<RefCell<Vec<PathBuf>>>,
    reject: Rc<Cell<bool>>,
}

impl RecordingWallpaper {
    fn new(store: MemoryStore) -> Self {
        Self {
            store,
            applied: Rc::default(),
            reject: Rc::default(),
        }
    }

    pub(crate) fn reject_all(&self) {
        self.reject.set(true);
    }

    pub(crate) fn applied(&self) -> Vec<PathBuf> {
        self.applied.borrow().clone()
    }
}

impl WallpaperSetter for RecordingWallpaper {
    fn set_wallpaper(&self, path: &Path) -> Result<(), ApplicationError> {
        if !self.store.exists(path) {
            return Err(ApplicationError::NotFound(path.display().to_string()));
        }
        if self.reject.get() {
            return Err(ApplicationError::Wallpaper("desktop refused".into()));
        }
        self.applied.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeCatalog {
    species: Rc<RefCell<Vec<String>>>,
    listing_error: Rc<RefCell<Option<String>>>,
    artwork: Rc<RefCell<HashMap<String, String>>>,
    lookups: Rc<RefCell<Vec<String>>>,
}

impl FakeCatalog {
    pub(crate) fn with_species(&self, names: &[&str]) {
        *self.species.borrow_mut() = names.iter().map(|name| name.to_string()).collect();
    }

    pub(crate) fn fail_listing(&self, reason: &str) {
        *self.listing_error.borrow_mut() = Some(reason.to_string());
    }

    pub(crate) fn with_artwork(&self, name: &str, url: &str) {
        self.artwork
            .borrow_mut()
            .insert(name.to_string(), url.to_string());
    }

    pub(crate) fn artwork_lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl SpeciesCatalog for FakeCatalog {
    fn list_species(&self) -> Result<Vec<SpeciesName>, ApplicationError> {
        if let Some(reason) = self.listing_error.borrow().as_ref() {
            return Err(ApplicationError::Network(reason.clone()));
        }
        self.species
            .borrow()
            .iter()
            .map(|name| SpeciesName::new(name.as_str()).map_err(ApplicationError::from))
            .collect()
    }

    fn artwork_url(&self, name: &SpeciesName) -> Result<String, ApplicationError> {
        self.lookups.borrow_mut().push(name.to_string());
        self.artwork
            .borrow()
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound(format!("no artwork for {name}")))
    }
}

pub(crate) struct Harness {
    pub(crate) downloader: FakeDownloader,
    pub(crate) store: MemoryStore,
    pub(crate) wallpaper: RecordingWallpaper,
    pub(crate) catalog: FakeCatalog,
}

impl Default for Harness {
    fn default() -> Self {
        let store = MemoryStore::default();
        Self {
            downloader: FakeDownloader::default(),
            wallpaper: RecordingWallpaper::new(store.clone()),
            store,
            catalog: FakeCatalog::default(),
        }
    }
}

impl Harness {
    pub(crate) fn service(&self) -> ApplicationService {
        ApplicationService::new(
            Box::new(self.downloader.clone()),
            Box::new(FakeResizer),
            Box::new(self.store.clone()),
            Box::new(self.wallpaper.clone()),
            Box::new(self.catalog.clone()),
        )
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Collects messages logged on the current test thread.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

pub(crate) fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
}

pub(crate) fn captured_logs() -> Vec<String> {
    CAPTURED.with(|lines| lines.borrow().clone())
}
