mod error;
mod image;
mod pipeline;
mod species;

pub use error::DomainError;
pub use image::{BoundingBox, Dimensions};
pub use pipeline::PipelineOutcome;
pub use species::SpeciesName;
