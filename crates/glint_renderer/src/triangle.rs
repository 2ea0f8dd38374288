//! Triangle primitive for ray tracing.
//!
//! Single-sided: only rays arriving against the winding normal
//! `(v1 - v0) x (v2 - v0)` can hit. The test works directly with the
//! unnormalized plane normal and scaled barycentrics, dividing once at the end
//! (Real-Time Collision Detection, 5.3.6).

use crate::hittable::{HitRecord, Hittable};
use crate::{Material, Ray};
use glint_math::{Aabb, Interval, Vec3};
use std::sync::Arc;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Material
    material: Arc<Material>,
    /// Bounding box
    bbox: Aabb,
}

impl Triangle {
    /// Create a new triangle from three vertices, counter-clockwise when seen
    /// from the side that can be hit.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        // Exact bounds, no padding: flat boxes are handled by the slab test.
        let bbox = Aabb::new(v0.min(v1).min(v2), v0.max(v1).max(v2));

        Self {
            v0,
            v1,
            v2,
            material,
            bbox,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

impl Hittable for Triangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let ab = self.v1 - self.v0;
        let ac = self.v2 - self.v0;
        let n = ab.cross(ac);

        // Back-facing or parallel
        let qp = -ray.direction();
        let d = qp.dot(n);
        if d <= 0.0 {
            return None;
        }

        // Origin behind the plane
        let ap = ray.origin() - self.v0;
        let t = ap.dot(n);
        if t < 0.0 {
            return None;
        }

        // Scaled barycentrics must all lie in [0, d]
        let e = qp.cross(ap);
        let v = ac.dot(e);
        if v < 0.0 || v > d {
            return None;
        }
        let w = -ab.dot(e);
        if w < 0.0 || v + w > d {
            return None;
        }

        let t = t / d;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord::new(ray, t, n.normalize(), &self.material))
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(self.bbox)
    }
}
