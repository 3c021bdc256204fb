use crate::array2::Array2;
use crate::geom::{dist, segments_properly_intersect};
use crate::planner::PlanObserver;
use crate::polygon::Polygon;
use crate::registry::VertexRegistry;
use crate::vec2::Point;
use crate::V;
use bit_vec::BitVec;
use log::{debug, trace};

/// Weight of a pair with no known connection. Larger than any path length.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Visibility graph over the vertices of a set of polygons.
///
/// `weights` is a dense symmetric matrix indexed by vertex id. Entry `(i, j)`
/// is the length of the segment between vertices `i` and `j` if that segment
/// is an admissible edge, [`UNREACHABLE`] otherwise. The diagonal is zero.
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
    pub registry: VertexRegistry,
    pub weights: Array2<f64>,

    /// bit `v` is set if vertex `v` has at least one admissible edge
    connected: BitVec,

    /// admissible edges in discovery order, each unordered pair once
    edges: Vec<(V, V)>,
}

impl VisibilityGraph {
    pub fn build(polygons: &[Polygon]) -> Self {
        Self::build_observed(polygons, &mut ())
    }

    /* build_observed:
     * Compute the visibility graph of the vertices of polygons. A segment
     * between vertices of two different polygons is an edge if no polygon
     * boundary edge properly crosses it. Every boundary edge is an edge.
     * Each edge is reported to the observer once, when first found.
     */
    pub fn build_observed(polygons: &[Polygon], observer: &mut dyn PlanObserver) -> Self {
        let mut registry = VertexRegistry::new();
        for poly in polygons.iter() {
            for &p in poly.ps.iter() {
                registry.assign(p);
            }
        }
        let n = registry.len();

        // Every boundary edge of every polygon can block a sight line.
        let blocking: Vec<(Point, Point)> = polygons
            .iter()
            .flat_map(|poly| poly.boundary_edges())
            .collect();
        debug!(
            "visibility: {} polygons, {} vertices, {} blocking edges",
            polygons.len(),
            n,
            blocking.len()
        );

        let mut graph = VisibilityGraph {
            registry,
            weights: Array2::square(n, UNREACHABLE, 0.0),
            connected: BitVec::from_elem(n, false),
            edges: Vec::new(),
        };

        // Sight lines between vertices of different polygons. The test is
        // symmetric, so each unordered pair of polygons is visited once.
        for (i, poly_i) in polygons.iter().enumerate() {
            for poly_m in polygons[i + 1..].iter() {
                for &p1 in poly_i.ps.iter() {
                    for &p2 in poly_m.ps.iter() {
                        if is_clear(p1, p2, &blocking) {
                            graph.add_edge(p1, p2, observer);
                        }
                    }
                }
            }
        }
        let sight_lines = graph.edges.len();

        // Boundary edges are always admissible.
        for poly in polygons.iter() {
            for (a, b) in poly.boundary_edges() {
                graph.add_edge(a, b, observer);
            }
        }

        debug!(
            "visibility: {} edges ({} sight lines, {} boundary)",
            graph.edges.len(),
            sight_lines,
            graph.edges.len() - sight_lines
        );
        graph
    }

    /// Records the segment a-b as an admissible edge. Writing the same edge
    /// twice leaves the graph unchanged.
    fn add_edge(&mut self, a: Point, b: Point, observer: &mut dyn PlanObserver) {
        let (ia, ib) = match (self.registry.id(a), self.registry.id(b)) {
            (Some(ia), Some(ib)) => (ia, ib),
            _ => unreachable!("edge endpoints are registered before edges are added"),
        };
        if ia == ib {
            // coincident vertices; the diagonal already holds zero
            return;
        }
        let d = dist(a, b);
        if self.weights[(ia as usize, ib as usize)] == UNREACHABLE {
            trace!("edge v{} {:?} -- v{} {:?}: {}", ia, a, ib, b, d);
            self.edges.push((ia, ib));
            self.connected.set(ia as usize, true);
            self.connected.set(ib as usize, true);
            observer.on_edge(a, b, d);
        }
        self.weights.set_symmetric(ia as usize, ib as usize, d);
    }

    pub fn num_verts(&self) -> usize {
        self.registry.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Admissible edges as vertex id pairs, in discovery order.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    /// Admissible edges as segments, in discovery order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.edges
            .iter()
            .map(move |&(a, b)| (self.registry.point(a), self.registry.point(b)))
    }

    pub fn weight(&self, i: V, j: V) -> f64 {
        self.weights[(i as usize, j as usize)]
    }

    /// True if no admissible edge touches `v`.
    pub fn is_isolated(&self, v: V) -> bool {
        !self.connected.get(v as usize).unwrap_or(false)
    }
}

/* is_clear:
 * Return true if no blocking segment properly crosses the segment [p1,p2].
 */
fn is_clear(p1: Point, p2: Point, blocking: &[(Point, Point)]) -> bool {
    !blocking
        .iter()
        .any(|&(q1, q2)| segments_properly_intersect(p1, p2, q1, q2))
}
