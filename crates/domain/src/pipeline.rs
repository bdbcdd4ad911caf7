use std::path::PathBuf;

/// Where a fetch-resize-set run ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    WallpaperSet(PathBuf),
    DownloadFailed,
    ResizeFailed,
    SaveFailed,
    WallpaperFailed(PathBuf),
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::WallpaperSet(_))
    }
}
