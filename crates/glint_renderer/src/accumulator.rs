//! Progressive accumulation driver.
//!
//! Each call to [`Accumulator::update`] traces one sample for every pixel of
//! one scanline and adds it to a running sum. When the last line is done the
//! frame counter advances and the cursor wraps to line 0, so the image
//! converges a scanline at a time while the host keeps drawing.
//!
//! Buffer layout: one `Vec4` per pixel, row-major, row 0 at the bottom. RGB is
//! the radiance sum, alpha the number of samples taken.

use crate::renderer::render_pixel;
use crate::sampling::pixel_seed;
use crate::{Camera, Color, Hittable, RenderSettings};
use glint_math::{Mat4, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Accumulation buffer plus the cursor that walks it.
#[derive(Debug, Clone)]
pub struct Accumulator {
    width: u32,
    height: u32,
    image: Vec<Vec4>,
    /// Completed frames. Negative means the next frame starts from a
    /// normalized copy of the current image.
    current_frame: i32,
    current_line: u32,
    freeze: bool,
    /// Scanlines traced since the last image reset; feeds the per-pixel seeds.
    pass: u64,
}

impl Accumulator {
    /// Create a zeroed buffer of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            image: vec![Vec4::ZERO; (width as usize) * (height as usize)],
            current_frame: 0,
            current_line: 0,
            freeze: false,
            pass: 0,
        }
    }

    /// Create a buffer sized for `settings`.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(settings.width, settings.height)
    }

    /// Trace one scanline and advance the cursor.
    ///
    /// `view` is the host's world-to-camera matrix. A change of image size in
    /// `settings` first reallocates the buffer, which is a full reset. After
    /// that, does nothing while frozen or once `settings.max_frames` frames
    /// are complete. Returns whether a line was traced.
    pub fn update(&mut self, world: &dyn Hittable, view: &Mat4, settings: &RenderSettings) -> bool {
        if settings.width != self.width || settings.height != self.height {
            log::info!(
                "Resizing accumulation buffer {}x{} -> {}x{}",
                self.width,
                self.height,
                settings.width,
                settings.height
            );
            self.resize(settings.width, settings.height);
        }
        if self.freeze || self.is_complete(settings) {
            return false;
        }
        if self.width == 0 || self.height == 0 {
            return false;
        }

        let camera = Camera::new(self.width, self.height, settings.vfov, *view);
        let y = self.current_line;
        let blend = self.current_frame <= 0;
        let pass = self.pass;

        let start = (y as usize) * (self.width as usize);
        let row = &mut self.image[start..start + self.width as usize];

        // Each worker owns its cell and its own seeded stream.
        row.par_iter_mut().enumerate().for_each(|(x, cell)| {
            let x = x as u32;
            let mut rng = StdRng::seed_from_u64(pixel_seed(settings.seed, pass, x, y));

            if blend {
                // Fold earlier samples into a single weight-one sample.
                let old = *cell;
                *cell = (old / old.w.max(1.0)).clamp(Vec4::ZERO, Vec4::ONE);
            }

            let color = render_pixel(&camera, world, x, y, settings, &mut rng);
            *cell += color.extend(1.0);
        });

        log::trace!("Frame {} line {} traced", self.current_frame, y);

        self.pass += 1;
        self.current_line += 1;
        if self.current_line >= self.height {
            self.current_line = 0;
            self.current_frame += 1;
            log::debug!("Frame {} complete", self.current_frame);
        }

        true
    }

    /// Zero the buffer, rewind the cursor and unfreeze.
    pub fn reset_image(&mut self) {
        self.image.fill(Vec4::ZERO);
        self.current_frame = 0;
        self.current_line = 0;
        self.freeze = false;
        self.pass = 0;
        log::debug!("Accumulation image reset");
    }

    /// Keep the current image but restart convergence from it.
    ///
    /// The next frame collapses every pixel it touches into one sample before
    /// adding to it, so stale history fades quickly after a camera move.
    pub fn reset_accumulation(&mut self) {
        self.current_frame = -1;
        log::debug!("Accumulation restarted from current image");
    }

    /// Reallocate for a new image size and reset.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.image = vec![Vec4::ZERO; (width as usize) * (height as usize)];
        self.reset_image();
    }

    pub fn set_frozen(&mut self, freeze: bool) {
        self.freeze = freeze;
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze
    }

    /// Whether `settings.max_frames` frames have been accumulated.
    pub fn is_complete(&self, settings: &RenderSettings) -> bool {
        self.current_frame >= settings.max_frames
    }

    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw accumulation cells, row 0 at the bottom.
    pub fn pixels(&self) -> &[Vec4] {
        &self.image
    }

    /// The buffer as tightly packed `f32`s, four per pixel, for texture
    /// upload.
    pub fn as_f32_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.image)
    }

    /// Accumulated cell at (x, y).
    pub fn cell(&self, x: u32, y: u32) -> Vec4 {
        self.image[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Mean radiance at (x, y). Untouched pixels read as black.
    pub fn averaged(&self, x: u32, y: u32) -> Color {
        let cell = self.cell(x, y);
        cell.truncate() / cell.w.max(1.0)
    }
}
