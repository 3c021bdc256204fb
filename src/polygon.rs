use crate::error::{ObstacleDefect, PlanError};
use crate::geom::{orientation, Bounds};
use crate::vec2::Point;

/// One obstacle boundary: an ordered, implicitly closed list of vertices.
///
/// The planner expects convex polygons listed in a consistent traversal
/// order (either winding). A single vertex is a degenerate polygon; the
/// planner models the start and goal that way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub ps: Vec<Point>,
}

impl Polygon {
    pub fn new(ps: Vec<Point>) -> Self {
        Self { ps }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            ps: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    /// Axis-aligned rectangle with corners `min` and `max`, counterclockwise.
    pub fn rect(min: Point, max: Point) -> Self {
        Self {
            ps: vec![
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.ps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ps.is_empty()
    }

    /// Iterates the boundary edges, including the closing edge from the last
    /// vertex back to the first. A polygon with fewer than two vertices has
    /// no edges.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.ps.len() < 2 { 0 } else { self.ps.len() };
        (0..n).map(move |i| (self.ps[i], self.ps[(i + 1) % n]))
    }

    /// True if every vertex lies on the same side of (or on) every edge.
    /// Polygons with fewer than three vertices are trivially convex.
    pub fn is_convex(&self) -> bool {
        if self.ps.len() < 3 {
            return true;
        }
        let mut sign = 0.0;
        for (a, b) in self.boundary_edges() {
            for &q in self.ps.iter() {
                let o = orientation(a, b, q);
                if o == 0.0 {
                    continue;
                }
                let s = o.signum();
                if sign == 0.0 {
                    sign = s;
                } else if s != sign {
                    return false;
                }
            }
        }
        true
    }

    /// Closed containment test for a convex polygon: points on the boundary
    /// count as inside.
    pub fn contains(&self, q: Point) -> bool {
        let mut saw_left = false;
        let mut saw_right = false;
        for (a, b) in self.boundary_edges() {
            let o = orientation(a, b, q);
            if o > 0.0 {
                saw_left = true;
            } else if o < 0.0 {
                saw_right = true;
            }
            if saw_left && saw_right {
                return false;
            }
        }
        if saw_left || saw_right {
            return true;
        }
        // Every edge is collinear with q (or there are no edges): the polygon
        // is a point or a segment, and q must lie within its extent.
        match Bounds::of_points(&self.ps) {
            Some(b) => b.min.x <= q.x && q.x <= b.max.x && b.min.y <= q.y && q.y <= b.max.y,
            None => false,
        }
    }

    /// Checks the polygon before it enters a planning run. `index` is the
    /// obstacle's position in the caller's list and is carried by the error.
    pub fn validate(&self, index: usize, require_convex: bool) -> Result<(), PlanError> {
        let defect = if self.ps.is_empty() {
            Some(ObstacleDefect::Empty)
        } else if let Some(vertex) = self.ps.iter().position(|p| !p.is_finite()) {
            Some(ObstacleDefect::NonFinite { vertex })
        } else if require_convex && !self.is_convex() {
            Some(ObstacleDefect::NotConvex)
        } else {
            None
        };
        match defect {
            Some(defect) => Err(PlanError::MalformedObstacle { index, defect }),
            None => Ok(()),
        }
    }
}

/* polygon_hit:
 * Return the index of the first polygon that contains the point, or None.
 */
pub fn polygon_hit(polygons: &[Polygon], p: Point) -> Option<usize> {
    polygons.iter().position(|poly| poly.contains(p))
}
