//! Shortest collision-free routes for a point robot among convex polygonal
//! obstacles, planned over a visibility graph.
//!
//! The obstacle corners, the start and the goal become the vertices of a
//! graph. Two vertices are joined when the segment between them is a polygon
//! boundary edge, or when it links different polygons without properly
//! crossing any boundary edge. All-pairs shortest paths over that graph
//! yield the route.
//!
//! ```
//! use vgraph::{plan_route, Plan, Point, Polygon};
//!
//! let block = Polygon::rect(Point::new(4.0, -1.0), Point::new(6.0, 1.0));
//! let plan = plan_route(&[block], Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
//! match plan {
//!     Plan::Route(route) => assert_eq!(route.points.len(), 4),
//!     Plan::NoPath { .. } => unreachable!(),
//! }
//! ```

pub mod array2;
pub mod error;
pub mod geom;
pub mod planner;
pub mod polygon;
pub mod registry;
pub mod route;
pub mod shortest;
pub mod vec2;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use error::{ObstacleDefect, PlanError};
pub use planner::{plan_route, PlanObserver, Planner, PlannerConfig};
pub use polygon::Polygon;
pub use route::{Plan, Route};
pub use vec2::Point;

// vertex type; an index into the per-run vertex arrays
pub type V = u32;
