//! Hittable trait, HitRecord, and the closed set of scene primitives.

use crate::{BvhNode, Material, Ray, Sphere, Triangle};
use glint_math::{Aabb, Interval, Vec3};
use std::sync::Arc;

/// Record of a ray-object intersection.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection, always facing the incoming ray
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record for a hit at `t`, orienting `outward_normal` against
    /// the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: &'a Material) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        // Normal always points against the ray
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest hit of `ray` with a parameter inside `ray_t`, if any.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;

    /// Conservative axis-aligned bounds.
    ///
    /// `None` only for composites that have nothing to bound.
    fn bounding_box(&self) -> Option<Aabb>;
}

/// Every kind of object that can sit in a scene.
///
/// Leaves carry geometry and a material; `List` and `Bvh` are pure
/// composites over shared children.
#[derive(Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    List(HittableList),
    Bvh(BvhNode),
}

impl Hittable for Primitive {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t),
            Primitive::Triangle(t) => t.hit(ray, ray_t),
            Primitive::List(l) => l.hit(ray, ray_t),
            Primitive::Bvh(b) => b.hit(ray, ray_t),
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Primitive::Sphere(s) => s.bounding_box(),
            Primitive::Triangle(t) => t.bounding_box(),
            Primitive::List(l) => l.bounding_box(),
            Primitive::Bvh(b) => b.bounding_box(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<HittableList> for Primitive {
    fn from(l: HittableList) -> Self {
        Primitive::List(l)
    }
}

impl From<BvhNode> for Primitive {
    fn from(b: BvhNode) -> Self {
        Primitive::Bvh(b)
    }
}

/// A list of hittable objects, scanned linearly.
#[derive(Debug, Default)]
pub struct HittableList {
    objects: Vec<Arc<Primitive>>,
    /// Bounds of all children; `None` while empty or once any child has none.
    bbox: Option<Aabb>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding a single object, typically a BVH root.
    pub fn from_object(object: impl Into<Arc<Primitive>>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Arc<Primitive>>) {
        let object = object.into();
        let child_box = object.bounding_box();
        self.bbox = if self.objects.is_empty() {
            child_box
        } else {
            // A missing child box poisons the whole list.
            self.bbox
                .zip(child_box)
                .map(|(acc, b)| Aabb::surrounding(&acc, &b))
        };
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = None;
    }

    /// The children, in insertion order.
    pub fn objects(&self) -> &[Arc<Primitive>] {
        &self.objects
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut interval = ray_t;

        // Each accepted hit becomes the far bound for the rest of the scan.
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, interval) {
                interval = interval.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}
