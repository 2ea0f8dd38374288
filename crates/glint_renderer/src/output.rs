//! Display conversion and image export.

use crate::error::RenderResult;
use crate::{Accumulator, Color, Interval};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGBA, optionally gamma corrected.
pub fn color_to_rgba(color: Color, gamma: bool) -> [u8; 4] {
    let encode = |c: f32| {
        let c = if gamma { linear_to_gamma(c) } else { c };
        (255.0 * Interval::UNIT.clamp(c)) as u8
    };
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

impl Accumulator {
    /// Normalize the accumulated samples into a displayable image.
    ///
    /// The buffer stores row 0 at the bottom; the image has row 0 at the top.
    pub fn to_rgba_image(&self, gamma: bool) -> RgbaImage {
        let height = self.height();
        RgbaImage::from_fn(self.width(), height, |x, y| {
            Rgba(color_to_rgba(self.averaged(x, height - 1 - y), gamma))
        })
    }

    /// Write the current image as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>, gamma: bool) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgba_image(gamma).save(path)?;
        log::info!(
            "Saved {}x{} image ({} frames) to {}",
            self.width(),
            self.height(),
            self.current_frame().max(0),
            path.display()
        );
        Ok(())
    }
}
