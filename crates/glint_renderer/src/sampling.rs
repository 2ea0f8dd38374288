//! Random sampling and reflection helpers.
//!
//! Every stochastic routine takes an explicit `&mut dyn RngCore` so renders are
//! reproducible under a fixed seed and safe to run on several threads, each
//! with its own generator.

use crate::settings::DiffuseMethod;
use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Per-axis magnitude below which a direction counts as degenerate.
const NEAR_ZERO: f32 = 1e-8;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Vector with every component uniform in [min, max).
pub fn random_vec3(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
    )
}

/// Rejection-sampled point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Point on the unit sphere surface (normalized rejection sample).
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // Normalizing a vector this short would amplify rounding error.
        if p.length_squared() > 1e-12 {
            return p.normalize();
        }
    }
}

/// Point in the unit ball, flipped into the hemisphere around `normal`.
pub fn random_in_hemisphere(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    if in_unit_sphere.dot(normal) > 0.0 {
        in_unit_sphere
    } else {
        -in_unit_sphere
    }
}

/// Draw the random offset added to the normal by diffuse scattering.
pub fn sample_diffuse(method: DiffuseMethod, normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    match method {
        DiffuseMethod::UnitSphere => random_in_unit_sphere(rng),
        DiffuseMethod::UnitVector => random_unit_vector(rng),
        DiffuseMethod::Hemisphere => random_in_hemisphere(normal, rng),
    }
}

/// True when every component of `v` is within `1e-8` of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().cmplt(Vec3::splat(NEAR_ZERO)).all()
}

/// Mirror `v` about the surface normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract unit vector `uv` through a surface with normal `n`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of Fresnel reflectance.
#[inline]
pub fn schlick_reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Derive an independent seed for one pixel of one accumulation pass.
///
/// splitmix64 finalizer over the inputs, so neighbouring pixels and passes get
/// unrelated streams while the whole render stays reproducible.
pub fn pixel_seed(seed: u64, pass: u64, x: u32, y: u32) -> u64 {
    let mut z = seed
        ^ pass.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ ((u64::from(y) << 32) | u64::from(x)).wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_in_unit_sphere_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_unit_vector_is_normalized() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_random_in_hemisphere_faces_normal() {
        let mut rng = StdRng::seed_from_u64(3);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            assert!(random_in_hemisphere(normal, &mut rng).dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_gen_range_f32_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let x = gen_range_f32(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-3, 0.0)));
    }

    #[test]
    fn test_reflect_mirror_law() {
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = reflect(incoming, Vec3::Y);
        assert!((reflected - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_refract_straight_through_at_normal_incidence() {
        let refracted = refract(Vec3::NEG_Y, Vec3::Y, 1.0 / 1.5);
        assert!((refracted - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_schlick_at_normal_incidence_is_r0() {
        let r0 = ((1.0f32 - 1.5) / (1.0 + 1.5)).powi(2);
        assert!((schlick_reflectance(1.0, 1.5) - r0).abs() < 1e-7);
        assert!((schlick_reflectance(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_seed_distinct() {
        let a = pixel_seed(42, 0, 0, 0);
        assert_eq!(a, pixel_seed(42, 0, 0, 0));
        assert_ne!(a, pixel_seed(42, 1, 0, 0));
        assert_ne!(a, pixel_seed(42, 0, 1, 0));
        assert_ne!(a, pixel_seed(42, 0, 0, 1));
        assert_ne!(a, pixel_seed(43, 0, 0, 0));
    }
}
