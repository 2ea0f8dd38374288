//! Glint renderer - progressive CPU path tracing
//!
//! A Monte Carlo path tracer that refines its image one scanline per update,
//! so a host can display the converging result while it renders.
//!
//! The host builds a [`Scene`], owns a [`RenderSettings`] and an
//! [`Accumulator`], and calls [`Accumulator::update`] once per tick with its
//! current view matrix.

mod accumulator;
mod bvh;
mod camera;
pub mod error;
mod hittable;
mod material;
mod output;
mod renderer;
pub mod sampling;
mod scene;
mod settings;
mod sphere;
mod triangle;

pub use accumulator::Accumulator;
pub use bvh::BvhNode;
pub use camera::{look_at, Camera};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList, Primitive};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgba, linear_to_gamma};
pub use renderer::{ray_color, render_pixel, sky_gradient};
pub use scene::Scene;
pub use settings::{DiffuseMethod, RenderSettings};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Aabb, Interval, Mat4, Ray, Vec3, Vec4};
