//! Procedural demo scenes.

use glint_renderer::sampling::{gen_f32, gen_range_f32, random_vec3};
use glint_renderer::{
    look_at, Color, Dielectric, Lambertian, Mat4, Material, Metal, Primitive, Sphere, Triangle,
    Vec3,
};
use rand::RngCore;
use std::sync::Arc;

/// Objects plus the framing they were composed for.
pub struct DemoScene {
    pub objects: Vec<Primitive>,
    pub view: Mat4,
    pub vfov: f32,
}

/// Large ground sphere, three feature spheres and a grid of small
/// randomly-shaded spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> DemoScene {
    let mut objects: Vec<Primitive> = Vec::new();

    let ground: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into());
    objects.push(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground).into());

    // Keeps one glass material for every small glass sphere
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Arc<Material> = if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_vec3(rng, 0.0, 1.0) * random_vec3(rng, 0.0, 1.0);
                Arc::new(Lambertian::new(albedo).into())
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec3(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz).into())
            } else {
                Arc::clone(&glass)
            };
            objects.push(Sphere::new(center, 0.2, material).into());
        }
    }

    objects.push(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass).into());
    objects.push(
        Sphere::new(
            Vec3::new(-4.0, 1.0, 0.0),
            1.0,
            Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)).into()),
        )
        .into(),
    );
    objects.push(
        Sphere::new(
            Vec3::new(4.0, 1.0, 0.0),
            1.0,
            Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into()),
        )
        .into(),
    );

    DemoScene {
        objects,
        view: look_at(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y),
        vfov: 20.0,
    }
}

/// Two rows of material samples on a green ground with a mirrored pyramid in
/// the middle of the front row.
pub fn showcase_scene() -> DemoScene {
    let ground: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.2, 0.6, 0.2)).into());
    let brushed: Arc<Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.5).into());
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());
    let blue_metal: Arc<Material> = Arc::new(Metal::new(Color::new(0.0, 0.0, 1.0), 0.1).into());
    let orange_metal: Arc<Material> = Arc::new(Metal::new(Color::new(1.0, 0.6, 0.0), 0.6).into());
    let red_matte: Arc<Material> = Arc::new(Lambertian::new(Color::new(1.0, 0.0, 0.0)).into());
    let mirror: Arc<Material> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.1).into());

    let mut objects: Vec<Primitive> = vec![
        Sphere::new(Vec3::new(0.0, -1000.5, 0.0), 1000.0, ground).into(),
        Sphere::new(Vec3::new(1.0, 0.0, 0.0), 0.5, brushed).into(),
        Sphere::new(Vec3::new(-1.0, 0.0, 0.0), 0.5, glass).into(),
        Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, blue_metal).into(),
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, orange_metal).into(),
        Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, red_matte).into(),
    ];
    objects.extend(pyramid(Vec3::new(0.0, -0.5, 0.0), 0.35, 0.8, mirror));

    DemoScene {
        objects,
        view: look_at(Vec3::new(0.0, 0.6, 2.5), Vec3::new(0.0, 0.0, -0.5), Vec3::Y),
        vfov: 45.0,
    }
}

/// Square pyramid standing on `base_center`, wound so every face points out.
pub fn pyramid(base_center: Vec3, half_size: f32, height: f32, material: Arc<Material>) -> Vec<Primitive> {
    let h = half_size;
    let p0 = base_center + Vec3::new(-h, 0.0, -h);
    let p1 = base_center + Vec3::new(h, 0.0, -h);
    let p2 = base_center + Vec3::new(h, 0.0, h);
    let p3 = base_center + Vec3::new(-h, 0.0, h);
    let apex = base_center + Vec3::new(0.0, height, 0.0);

    [
        [p3, p2, apex],
        [p2, p1, apex],
        [p1, p0, apex],
        [p0, p3, apex],
        [p0, p1, p2],
        [p0, p2, p3],
    ]
    .into_iter()
    .map(|[a, b, c]| Triangle::new(a, b, c, Arc::clone(&material)).into())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::{Hittable, Interval, Ray};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mirror() -> Arc<Material> {
        Arc::new(Metal::new(Color::ONE, 0.0).into())
    }

    #[test]
    fn test_pyramid_faces_point_outward() {
        let faces = pyramid(Vec3::ZERO, 1.0, 1.0, mirror());
        assert_eq!(faces.len(), 6);

        // Rays fired at the pyramid from each side hit exactly one face.
        let probes = [
            (Vec3::new(0.0, 0.3, 5.0), Vec3::NEG_Z),
            (Vec3::new(5.0, 0.3, 0.0), Vec3::NEG_X),
            (Vec3::new(0.0, 0.3, -5.0), Vec3::Z),
            (Vec3::new(-5.0, 0.3, 0.0), Vec3::X),
            (Vec3::new(0.1, -5.0, 0.2), Vec3::Y),
        ];
        for (origin, direction) in probes {
            let ray = Ray::new(origin, direction);
            let hits = faces
                .iter()
                .filter(|f| f.hit(&ray, Interval::from_min(1e-3)).is_some())
                .count();
            assert_eq!(hits, 1, "probe from {origin:?}");
        }
    }

    #[test]
    fn test_random_scene_is_reproducible() {
        let a = random_scene(&mut StdRng::seed_from_u64(11));
        let b = random_scene(&mut StdRng::seed_from_u64(11));
        assert_eq!(a.objects.len(), b.objects.len());
        // Ground plus the three feature spheres at least.
        assert!(a.objects.len() > 4);
    }

    #[test]
    fn test_showcase_scene_contents() {
        let scene = showcase_scene();
        assert_eq!(scene.objects.len(), 6 + 6);
    }
}
