use crate::error::{PlanError, Result};
use crate::geom::dist;
use crate::shortest::ShortestPaths;
use crate::vec2::Point;
use crate::V;

/// An ordered sequence of waypoints from start to goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub points: Vec<Point>,

    /// Sum of the segment lengths.
    pub length: f64,
}

impl Route {
    pub fn from_points(points: Vec<Point>) -> Self {
        let length = points.windows(2).map(|w| dist(w[0], w[1])).sum();
        Route { points, length }
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Number of waypoints, start and goal included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub(crate) fn scaled(self, scale: f64) -> Self {
        if scale == 1.0 {
            return self;
        }
        Route {
            points: self.points.into_iter().map(|p| p * scale).collect(),
            length: self.length * scale,
        }
    }
}

/// Outcome of a planning request.
#[derive(Clone, Debug, PartialEq)]
pub enum Plan {
    Route(Route),

    /// Start and goal are not connected by any admissible edges. This is a
    /// legitimate answer (the goal may be walled in), not a failure.
    NoPath { start: Point, goal: Point },
}

impl Plan {
    pub fn route(&self) -> Option<&Route> {
        match self {
            Plan::Route(route) => Some(route),
            Plan::NoPath { .. } => None,
        }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Plan::NoPath { .. })
    }

    /// Converts `NoPath` into `PlanError::NoPathExists`, for callers that
    /// treat an unreachable goal as an error.
    pub fn into_route(self) -> Result<Route> {
        match self {
            Plan::Route(route) => Ok(route),
            Plan::NoPath { start, goal } => Err(PlanError::NoPathExists { start, goal }),
        }
    }
}

enum Step {
    Span(V, V),
    Emit(V),
}

/* reconstruct_path:
 * Returns the intermediate vertices of the shortest path from i to j,
 * excluding i and j themselves. If via[i][j] = k, the path is
 * reconstruct_path(i, k), then k, then reconstruct_path(k, j). An empty
 * result means i and j are joined directly, or not at all.
 *
 * The recursion is unrolled onto a work stack; the output is the same.
 */
pub fn reconstruct_path(paths: &ShortestPaths, i: V, j: V) -> Vec<V> {
    let mut result: Vec<V> = Vec::new();
    let mut work_stack: Vec<Step> = vec![Step::Span(i, j)];

    while let Some(step) = work_stack.pop() {
        match step {
            Step::Span(a, b) => {
                if let Some(k) = paths.via(a, b) {
                    // pushed in reverse: left span, then k, then right span
                    work_stack.push(Step::Span(k, b));
                    work_stack.push(Step::Emit(k));
                    work_stack.push(Step::Span(a, k));
                }
            }
            Step::Emit(k) => {
                result.push(k);
                debug_assert!(
                    result.len() < paths.num_verts(),
                    "reconstruction revisits a vertex"
                );
            }
        }
    }

    result
}

/// Returns the full vertex sequence from `start` to `goal`, both included, or
/// `None` if the goal cannot be reached.
pub fn vertex_path(paths: &ShortestPaths, start: V, goal: V) -> Option<Vec<V>> {
    if start == goal {
        return Some(vec![start]);
    }
    if !paths.is_reachable(start, goal) {
        return None;
    }
    let mut ids = Vec::with_capacity(paths.num_verts());
    ids.push(start);
    ids.extend(reconstruct_path(paths, start, goal));
    ids.push(goal);
    Some(ids)
}
