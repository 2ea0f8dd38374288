//! Path tracing radiance estimator.
//!
//! One call traces one camera path: nearest hit, material scatter, recurse
//! with one bounce fewer. Paths that leave the scene pick up the sky/ground
//! gradient. There are no emitters, so all light comes from the background.

use crate::{Camera, Color, Hittable, Ray, RenderSettings};
use glint_math::Interval;
use rand::RngCore;

/// Compute the color seen by a ray.
///
/// `bounces_remaining` below zero terminates the path with black, so a
/// budget of `n` allows `n + 1` surface interactions.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    bounces_remaining: i32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    if bounces_remaining < 0 {
        return Color::ZERO;
    }

    // Lower bound keeps secondary rays off the surface they left
    let Some(mut rec) = world.hit(ray, Interval::from_min(settings.epsilon)) else {
        return sky_gradient(ray, settings);
    };
    rec.normal = rec.normal.normalize();

    if settings.show_normals {
        return rec.normal * 0.5 + Color::splat(0.5);
    }

    match rec
        .material
        .scatter(ray, &rec, settings.diffuse_method, rng)
    {
        Some(result) => {
            let scattered_color = ray_color(
                &result.scattered,
                world,
                bounces_remaining - 1,
                settings,
                rng,
            );
            result.attenuation * scattered_color
        }
        // Absorbed
        None => Color::ZERO,
    }
}

/// Background for rays that escape: ground color straight down, sky color
/// straight up, linear in the direction's height in between.
pub fn sky_gradient(ray: &Ray, settings: &RenderSettings) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    settings.ground_color * (1.0 - a) + settings.sky_color * a
}

/// Trace a single sample through pixel (x, y).
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(x, y, settings.antialiasing, rng);
    ray_color(&ray, world, settings.max_bounces, settings, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Material, Metal, Primitive, Sphere, Triangle};
    use glint_math::{Mat4, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn sphere_world(material: Material) -> HittableList {
        HittableList::from_object(Primitive::from(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(material),
        )))
    }

    fn assert_color_eq(a: Color, b: Color) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_sky_gradient() {
        let settings = RenderSettings::default();

        let up = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::Y), &settings);
        let down = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::NEG_Y), &settings);
        let level = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::X * 3.0), &settings);

        assert_color_eq(up, settings.sky_color);
        assert_color_eq(down, settings.ground_color);
        assert_color_eq(level, (settings.sky_color + settings.ground_color) * 0.5);
    }

    #[test]
    fn test_exhausted_budget_is_black() {
        let settings = RenderSettings::default();
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(0);

        let color = ray_color(&Ray::new(Vec3::ZERO, Vec3::Y), &world, -1, &settings, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_miss_returns_background() {
        let settings = RenderSettings::default();
        let world = sphere_world(Lambertian::new(Color::splat(0.5)).into());
        let mut rng = StdRng::seed_from_u64(0);

        let color = ray_color(&Ray::new(Vec3::ZERO, Vec3::Y), &world, 0, &settings, &mut rng);
        assert_color_eq(color, settings.sky_color);
    }

    #[test]
    fn test_show_normals_maps_normal_to_unit_cube() {
        let settings = RenderSettings {
            show_normals: true,
            ..Default::default()
        };
        let world = sphere_world(Lambertian::new(Color::splat(0.5)).into());
        let mut rng = StdRng::seed_from_u64(0);

        // Facing normal at the hit is +Z.
        let color = ray_color(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &world, 3, &settings, &mut rng);
        assert_color_eq(color, Color::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_zero_bounces_allows_one_interaction() {
        let settings = RenderSettings::default();
        let world = sphere_world(Lambertian::new(Color::splat(0.5)).into());
        let mut rng = StdRng::seed_from_u64(0);

        // The scatter is traced with a budget of -1 and comes back black.
        let color = ray_color(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &world, 0, &settings, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_attenuation_multiplies_background() {
        let settings = RenderSettings::default();
        // Mirror triangle tilted 45 degrees sends a -Z ray straight up.
        let mirror: Arc<Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.4), 0.0).into());
        let world = HittableList::from_object(Primitive::from(Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -3.0),
            mirror,
        )));
        let mut rng = StdRng::seed_from_u64(0);

        let color = ray_color(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &world, 1, &settings, &mut rng);
        assert_color_eq(color, Color::new(0.8, 0.6, 0.4) * settings.sky_color);
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let settings = RenderSettings {
            antialiasing: false,
            show_normals: true,
            ..Default::default()
        };
        let world = sphere_world(Lambertian::new(Color::splat(0.5)).into());
        let camera = Camera::new(11, 11, 90.0, Mat4::IDENTITY);
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &world, 5, 5, &settings, &mut rng);
        assert_color_eq(color, Color::new(0.5, 0.5, 1.0));
    }
}
