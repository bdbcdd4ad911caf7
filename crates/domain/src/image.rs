use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Maximum size an image may occupy after resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    width: u32,
    height: u32,
}

impl BoundingBox {
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::EmptyBoundingBox { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn contains(self, size: Dimensions) -> bool {
        size.width <= self.width && size.height <= self.height
    }

    /// Size an image of `size` should be scaled to so it fits inside the box.
    ///
    /// Aspect ratio is kept and images are never enlarged: anything that
    /// already fits comes back as-is. The side that is not pinned to the box
    /// is rounded to whichever neighbouring integer keeps the ratio closest,
    /// and never drops below one pixel.
    pub fn fit(self, size: Dimensions) -> Dimensions {
        if self.contains(size) || size.width == 0 || size.height == 0 {
            return size;
        }

        let aspect = f64::from(size.width) / f64::from(size.height);
        let bound_width = f64::from(self.width);
        let bound_height = f64::from(self.height);

        if bound_width / bound_height >= aspect {
            let width = closest_rounding(bound_height * aspect, |candidate| {
                (aspect - candidate / bound_height).abs()
            });
            Dimensions::new(width, self.height)
        } else {
            let height = closest_rounding(bound_width / aspect, |candidate| {
                if candidate == 0.0 {
                    0.0
                } else {
                    (aspect - bound_width / candidate).abs()
                }
            });
            Dimensions::new(self.width, height)
        }
    }
}

fn closest_rounding(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor();
    let ceil = value.ceil();
    // ties go to the floor
    let best = if error(ceil) < error(floor) { ceil } else { floor };
    (best as u32).max(1)
}
