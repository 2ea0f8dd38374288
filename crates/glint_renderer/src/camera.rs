//! Camera for ray generation.
//!
//! Rays are built in view space (eye at the origin looking down -Z, focal
//! length 1) and moved into world space with the inverse of the host's view
//! matrix. Row 0 is the bottom of the viewport.

use crate::sampling::gen_f32;
use crate::Ray;
use glint_math::{Mat4, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Cached viewport geometry, view space
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,

    world_from_view: Mat4,
}

impl Camera {
    /// Create a camera for an image of `width` x `height` pixels.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `view`: world-to-camera matrix supplied by the host
    pub fn new(width: u32, height: u32, vfov: f32, view: Mat4) -> Self {
        let aspect = width as f32 / height as f32;

        // Calculate viewport dimensions
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect * viewport_height;
        let focal_length = 1.0;

        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            -horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            image_width: width,
            image_height: height,
            lower_left_corner,
            horizontal,
            vertical,
            world_from_view: view.inverse(),
        }
    }

    /// Camera-to-world transform applied to every generated ray.
    pub fn world_from_view(&self) -> Mat4 {
        self.world_from_view
    }

    /// Generate a world-space ray through pixel (x, y).
    ///
    /// With `antialias` the sample is jittered uniformly inside the pixel;
    /// otherwise it goes through the pixel center.
    pub fn get_ray(&self, x: u32, y: u32, antialias: bool, rng: &mut dyn RngCore) -> Ray {
        let (dx, dy) = if antialias {
            (gen_f32(rng), gen_f32(rng))
        } else {
            (0.5, 0.5)
        };
        let u = (x as f32 + dx) / self.image_width as f32;
        let v = (y as f32 + dy) / self.image_height as f32;

        let view_ray = Ray::new(
            Vec3::ZERO,
            self.lower_left_corner + u * self.horizontal + v * self.vertical,
        );
        view_ray.transform(&self.world_from_view)
    }
}

/// Right-handed view matrix for an eye at `eye` looking at `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}
