use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("bounding box must be non-zero, got {width}x{height}")]
    EmptyBoundingBox { width: u32, height: u32 },
    #[error("invalid species name: {0:?}")]
    InvalidSpeciesName(String),
}
