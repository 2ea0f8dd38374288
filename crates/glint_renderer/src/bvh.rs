//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Median split on a randomly chosen axis: each node sorts its span by the
//! children's box minimum along one of X/Y/Z and halves it. No cost model.
//! A span of one object stores that object as both children, so traversal
//! never needs a leaf special case.

use crate::error::{RenderError, RenderResult};
use crate::hittable::{HitRecord, Hittable, HittableList, Primitive};
use crate::Ray;
use glint_math::{Aabb, Interval};
use rand::{Rng, RngCore};
use std::cmp::Ordering;
use std::sync::Arc;

/// Interior node of the hierarchy.
///
/// `left` and `right` may point at the same primitive (single-object span).
#[derive(Debug)]
pub struct BvhNode {
    left: Arc<Primitive>,
    right: Arc<Primitive>,
    bbox: Aabb,
}

impl BvhNode {
    /// Create a BVH over `objects`.
    ///
    /// `rng` drives the split-axis choice; pass a seeded generator for a
    /// reproducible tree. An empty span is reported as
    /// [`RenderError::EmptySpan`].
    pub fn new(mut objects: Vec<Arc<Primitive>>, rng: &mut dyn RngCore) -> RenderResult<Self> {
        if objects.is_empty() {
            log::warn!("BVH construction requested over an empty object span");
            return Err(RenderError::EmptySpan);
        }

        let node = Self::build(&mut objects, rng);
        log::info!(
            "Built BVH over {} primitives (depth {})",
            objects.len(),
            node.depth()
        );
        Ok(node)
    }

    /// Create a BVH sharing the children of `list`.
    pub fn from_list(list: &HittableList, rng: &mut dyn RngCore) -> RenderResult<Self> {
        Self::new(list.objects().to_vec(), rng)
    }

    /// Recursive construction over a non-empty span.
    fn build(objects: &mut [Arc<Primitive>], rng: &mut dyn RngCore) -> Self {
        let axis = rng.gen_range(0..3);

        let (left, right) = match objects {
            [only] => (Arc::clone(only), Arc::clone(only)),
            [a, b] => {
                if box_compare(a, b, axis) == Ordering::Less {
                    (Arc::clone(a), Arc::clone(b))
                } else {
                    (Arc::clone(b), Arc::clone(a))
                }
            }
            _ => {
                objects.sort_by(|a, b| box_compare(a, b, axis));

                let mid = objects.len() / 2;
                let (left_objects, right_objects) = objects.split_at_mut(mid);
                let left = Self::build(left_objects, rng);
                let right = Self::build(right_objects, rng);
                (
                    Arc::new(Primitive::Bvh(left)),
                    Arc::new(Primitive::Bvh(right)),
                )
            }
        };

        let bbox = Aabb::surrounding(&child_box(&left), &child_box(&right));
        Self { left, right, bbox }
    }

    pub fn left(&self) -> &Arc<Primitive> {
        &self.left
    }

    pub fn right(&self) -> &Arc<Primitive> {
        &self.right
    }

    /// True when both children are the same primitive.
    pub fn is_aliased_leaf(&self) -> bool {
        Arc::ptr_eq(&self.left, &self.right)
    }

    /// Number of BVH levels below and including this node.
    pub fn depth(&self) -> usize {
        let child_depth = |child: &Primitive| match child {
            Primitive::Bvh(node) => node.depth(),
            _ => 0,
        };
        1 + child_depth(&self.left).max(child_depth(&self.right))
    }

    /// Number of distinct leaf primitives reachable from this node.
    pub fn leaf_count(&self) -> usize {
        let count = |child: &Primitive| match child {
            Primitive::Bvh(node) => node.leaf_count(),
            _ => 1,
        };
        if self.is_aliased_leaf() {
            count(&self.left)
        } else {
            count(&self.left) + count(&self.right)
        }
    }
}

/// Order two primitives by their box minimum on `axis`.
fn box_compare(a: &Primitive, b: &Primitive, axis: usize) -> Ordering {
    let a_min = a.bounding_box().map_or(f32::INFINITY, |bb| bb.axis_min(axis));
    let b_min = b.bounding_box().map_or(f32::INFINITY, |bb| bb.axis_min(axis));
    a_min.partial_cmp(&b_min).unwrap_or(Ordering::Equal)
}

/// Bounds of a child, falling back to an empty box when it has none.
fn child_box(child: &Primitive) -> Aabb {
    child.bounding_box().unwrap_or_else(|| {
        log::warn!("No bounding box in BVH construction, child will never be hit");
        Aabb::EMPTY
    })
}

impl Hittable for BvhNode {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if !self.bbox.hit(ray, ray_t) {
            return None;
        }

        let hit_left = self.left.hit(ray, ray_t);

        // Only check right up to closest hit
        let right_t = match &hit_left {
            Some(rec) => ray_t.with_max(rec.t),
            None => ray_t,
        };
        let hit_right = self.right.hit(ray, right_t);

        hit_right.or(hit_left)
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(self.bbox)
    }
}
