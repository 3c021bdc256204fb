use crate::vec2::{Point, PointKey};
use crate::V;
use std::collections::HashMap;

/// Assigns dense ids to distinct points.
///
/// Ids start at 0 and follow first-seen order. Two points are the same vertex
/// when their coordinates are exactly equal; there is no tolerance. A registry
/// belongs to a single planning run and ids are never reused or reassigned
/// within it, so they can index per-run arrays directly.
#[derive(Clone, Debug, Default)]
pub struct VertexRegistry {
    ids: HashMap<PointKey, V>,
    points: Vec<Point>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `p`, registering it first if it has not been seen.
    pub fn assign(&mut self, p: Point) -> V {
        let next = self.points.len() as V;
        let points = &mut self.points;
        *self.ids.entry(p.key()).or_insert_with(|| {
            points.push(p);
            next
        })
    }

    pub fn id(&self, p: Point) -> Option<V> {
        self.ids.get(&p.key()).copied()
    }

    /// Returns the point registered under `id`.
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn point(&self, id: V) -> Point {
        self.points[id as usize]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates `(id, point)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (V, Point)> + '_ {
        self.points.iter().enumerate().map(|(i, &p)| (i as V, p))
    }
}
