//! Scene handle passed explicitly to the estimator and the driver.

use crate::bvh::BvhNode;
use crate::error::RenderResult;
use crate::hittable::{HitRecord, Hittable, HittableList, Primitive};
use crate::Ray;
use glint_math::{Aabb, Interval};
use rand::RngCore;
use std::sync::Arc;

/// Immutable, render-ready scene: a list wrapping a single BVH root.
///
/// Built once by the host and replaced wholesale when the scene changes.
/// Read-only during rendering, so it is shared across worker threads
/// without locking.
#[derive(Debug)]
pub struct Scene {
    world: HittableList,
    primitive_count: usize,
}

impl Scene {
    /// Build the acceleration structure over `objects`.
    ///
    /// Fails with [`crate::RenderError::EmptySpan`] when there is nothing to
    /// build over.
    pub fn build(objects: Vec<Primitive>, rng: &mut dyn RngCore) -> RenderResult<Self> {
        let objects: Vec<Arc<Primitive>> = objects.into_iter().map(Arc::new).collect();
        Self::from_shared(objects, rng)
    }

    /// Build from a list the host has already assembled.
    pub fn from_list(list: &HittableList, rng: &mut dyn RngCore) -> RenderResult<Self> {
        Self::from_shared(list.objects().to_vec(), rng)
    }

    fn from_shared(objects: Vec<Arc<Primitive>>, rng: &mut dyn RngCore) -> RenderResult<Self> {
        let primitive_count = objects.len();
        let root = BvhNode::new(objects, rng)?;
        log::info!(
            "Scene ready: {} primitives, bounds {:?}",
            primitive_count,
            root.bounding_box()
        );

        Ok(Self {
            world: HittableList::from_object(Primitive::Bvh(root)),
            primitive_count,
        })
    }

    /// Top-level list holding the BVH root.
    pub fn world(&self) -> &HittableList {
        &self.world
    }

    /// Number of primitives the scene was built from.
    pub fn len(&self) -> usize {
        self.primitive_count
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count == 0
    }
}

impl Hittable for Scene {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.world.hit(ray, ray_t)
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.world.bounding_box()
    }
}
