/* planar predicates used by the visibility test */

use crate::vec2::Point;

/* orientation:
 * Returns twice the signed area of triangle p1,p2,p3, i.e. the cross product
 * of (p2 - p1) and (p3 - p1). Positive if p1,p2,p3 turn counterclockwise,
 * negative if clockwise, zero if collinear.
 */
pub fn orientation(p1: Point, p2: Point, p3: Point) -> f64 {
    (p2 - p1).cross(p3 - p1)
}

/// Axis-aligned bounding box of a set of points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn of_segment(a: Point, b: Point) -> Self {
        Bounds {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns `None` for an empty slice.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds {
            min: *first,
            max: *first,
        };
        for p in rest {
            b.expand(*p);
        }
        Some(b)
    }

    /* expand box as needed to enclose point p */
    pub fn expand(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// True if the open interiors of the two boxes overlap on both axes.
    /// Boxes that only share a side or a corner do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.max.x > other.min.x
            && other.max.x > self.min.x
            && self.max.y > other.min.y
            && other.max.y > self.min.y
    }
}

pub fn bounding_boxes_overlap(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    Bounds::of_segment(a1, a2).overlaps(&Bounds::of_segment(b1, b2))
}

/* segments_properly_intersect:
 * Returns true iff segment a1-a2 and segment b1-b2 cross at a point interior
 * to both. Touching at an endpoint and collinear overlap do not count: an
 * obstacle corner that lies on a sight line does not block it.
 */
pub fn segments_properly_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    if !bounding_boxes_overlap(a1, a2, b1, b2) {
        return false;
    }
    orientation(a1, a2, b1) * orientation(a1, a2, b2) < 0.0
        && orientation(b1, b2, a1) * orientation(b1, b2, a2) < 0.0
}

pub fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn orientation_sign() {
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)), 1.0);
        assert_eq!(orientation(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)), -1.0);
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
        assert_eq!(orientation(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)), 12.0);
    }

    #[test]
    fn crossing_segments() {
        assert!(segments_properly_intersect(
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(2.0, 0.0)
        ));
        // argument order does not matter
        assert!(segments_properly_intersect(
            p(2.0, 0.0),
            p(0.0, 2.0),
            p(2.0, 2.0),
            p(0.0, 0.0)
        ));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!segments_properly_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
        // boxes overlap, but the lines meet outside segment b
        assert!(!segments_properly_intersect(
            p(0.0, 0.0),
            p(4.0, 4.0),
            p(3.0, 0.0),
            p(2.5, 1.0)
        ));
    }

    #[test]
    fn touching_is_not_crossing() {
        // shared endpoint
        assert!(!segments_properly_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 0.0)
        ));
        // T junction: b ends on the interior of a
        assert!(!segments_properly_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0)
        ));
        // collinear overlap
        assert!(!segments_properly_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(3.0, 0.0)
        ));
    }

    #[test]
    fn axis_aligned_segments_use_the_strict_box_test() {
        // a vertical edge and a horizontal sight line through its middle
        assert!(segments_properly_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(4.0, -1.0),
            p(4.0, 1.0)
        ));
        // a horizontal sight line sliding along the top of a box
        assert!(!segments_properly_intersect(
            p(0.0, 1.0),
            p(10.0, 1.0),
            p(4.0, 1.0),
            p(6.0, 1.0)
        ));
    }

    #[test]
    fn bounds() {
        let b = Bounds::of_points(&[p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)]).unwrap();
        assert_eq!(b.min, p(-2.0, -1.0));
        assert_eq!(b.max, p(4.0, 5.0));
        assert!(Bounds::of_points(&[]).is_none());

        let unit = Bounds::of_segment(p(0.0, 0.0), p(1.0, 1.0));
        let right = Bounds::of_segment(p(1.0, 0.0), p(2.0, 1.0));
        assert!(!unit.overlaps(&right));
        assert!(unit.overlaps(&Bounds::of_segment(p(0.5, 0.5), p(2.0, 2.0))));
    }

    #[test]
    fn distance() {
        assert_eq!(dist(p(1.0, 1.0), p(4.0, 5.0)), 5.0);
        assert_eq!(dist(p(1.0, 1.0), p(1.0, 1.0)), 0.0);
    }
}
