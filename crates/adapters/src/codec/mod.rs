use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use log::debug;
use poke_wall_application::{ApplicationError, ImageResizer};
use poke_wall_domain::{BoundingBox, Dimensions};

#[derive(Debug, Default)]
pub struct ImageCrateResizer;

impl ImageResizer for ImageCrateResizer {
    fn resize(&self, image: &[u8], bound: BoundingBox) -> Result<Vec<u8>, ApplicationError> {
        let (decoded, format) = decode(image)?;

        let original = Dimensions::new(decoded.width(), decoded.height());
        let target = bound.fit(original);
        if target == original {
            debug!(
                "{}x{} already fits, keeping original bytes",
                original.width, original.height
            );
            return Ok(image.to_vec());
        }

        debug!(
            "scaling {:?} image {}x{} -> {}x{}",
            format, original.width, original.height, target.width, target.height
        );
        let resized = decoded.resize_exact(target.width, target.height, FilterType::Lanczos3);
        encode(&resized, format)
    }

    fn validate(&self, image: &[u8]) -> Result<(), ApplicationError> {
        decode(image).map(|_| ())
    }
}

fn decode(image: &[u8]) -> Result<(DynamicImage, ImageFormat), ApplicationError> {
    let format =
        image::guess_format(image).map_err(|error| ApplicationError::Decode(error.to_string()))?;
    let decoded = image::load_from_memory_with_format(image, format)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;
    Ok((decoded, format))
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ApplicationError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|error| ApplicationError::Encode(error.to_string()))?;
    Ok(buffer.into_inner())
}
