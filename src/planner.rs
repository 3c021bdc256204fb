use crate::error::{PlanError, Result};
use crate::polygon::{polygon_hit, Polygon};
use crate::route::{vertex_path, Plan, Route};
use crate::shortest::ShortestPaths;
use crate::vec2::Point;
use crate::visibility::VisibilityGraph;
use log::{debug, warn};

/// Planner options.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Reject obstacles that are not convex. The visibility test assumes
    /// convex obstacles; with this off, non-convex input is planned as-is.
    pub require_convex: bool,

    /// Factor applied to route coordinates and length on output. Planning
    /// always happens in input units.
    pub output_scale: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            require_convex: false,
            output_scale: 1.0,
        }
    }
}

/// Receives the edges and the route as a plan is computed, e.g. to draw
/// them. The plan does not depend on what the observer does.
pub trait PlanObserver {
    /// Called once for each admissible edge, in discovery order.
    fn on_edge(&mut self, _a: Point, _b: Point, _weight: f64) {}

    /// Called with the final route, after output scaling.
    fn on_route(&mut self, _route: &Route) {}
}

impl PlanObserver for () {}

/// Computes shortest collision-free routes among convex obstacles.
///
/// A `Planner` holds only its configuration. Each call to [`Planner::plan`]
/// builds and drops its own registry and matrices, so one planner can serve
/// any number of requests, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    pub config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self, obstacles: &[Polygon], start: Point, goal: Point) -> Result<Plan> {
        self.plan_observed(obstacles, start, goal, &mut ())
    }

    pub fn plan_observed(
        &self,
        obstacles: &[Polygon],
        start: Point,
        goal: Point,
        observer: &mut dyn PlanObserver,
    ) -> Result<Plan> {
        self.validate(obstacles, start, goal)?;

        // Start and goal join the obstacles as one-vertex polygons.
        let mut polygons: Vec<Polygon> = Vec::with_capacity(obstacles.len() + 2);
        polygons.extend_from_slice(obstacles);
        polygons.push(Polygon::new(vec![start]));
        polygons.push(Polygon::new(vec![goal]));

        let graph = VisibilityGraph::build_observed(&polygons, observer);
        let start_id = graph
            .registry
            .id(start)
            .ok_or_else(|| PlanError::unknown_point(start))?;
        let goal_id = graph
            .registry
            .id(goal)
            .ok_or_else(|| PlanError::unknown_point(goal))?;

        if start_id != goal_id && (graph.is_isolated(start_id) || graph.is_isolated(goal_id)) {
            debug!("start or goal has no admissible edges; skipping solve");
            return Ok(no_path(obstacles, start, goal));
        }

        let paths = ShortestPaths::solve(&graph.weights);
        let ids = match vertex_path(&paths, start_id, goal_id) {
            Some(ids) => ids,
            None => return Ok(no_path(obstacles, start, goal)),
        };

        let route = Route {
            points: ids.iter().map(|&id| graph.registry.point(id)).collect(),
            length: paths.distance(start_id, goal_id),
        }
        .scaled(self.config.output_scale);
        debug!(
            "route: {} waypoints, length {}",
            route.len(),
            route.length
        );
        observer.on_route(&route);
        Ok(Plan::Route(route))
    }

    fn validate(&self, obstacles: &[Polygon], start: Point, goal: Point) -> Result<()> {
        for (index, poly) in obstacles.iter().enumerate() {
            poly.validate(index, self.config.require_convex)?;
        }
        if !start.is_finite() {
            return Err(PlanError::NonFiniteEndpoint { role: "start" });
        }
        if !goal.is_finite() {
            return Err(PlanError::NonFiniteEndpoint { role: "goal" });
        }
        Ok(())
    }
}

fn no_path(obstacles: &[Polygon], start: Point, goal: Point) -> Plan {
    match (polygon_hit(obstacles, start), polygon_hit(obstacles, goal)) {
        (_, Some(index)) => warn!("no path: goal {:?} is inside obstacle {}", goal, index),
        (Some(index), None) => warn!("no path: start {:?} is inside obstacle {}", start, index),
        (None, None) => warn!("no path from {:?} to {:?}", start, goal),
    }
    Plan::NoPath { start, goal }
}

/// Plans with the default configuration.
pub fn plan_route(obstacles: &[Polygon], start: Point, goal: Point) -> Result<Plan> {
    Planner::default().plan(obstacles, start, goal)
}
