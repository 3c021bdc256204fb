use crate::vec2::Point;
use thiserror::Error;

/// Errors produced by a planning request.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("obstacle {index} is malformed: {defect}")]
    MalformedObstacle { index: usize, defect: ObstacleDefect },

    #[error("{role} point has non-finite coordinates")]
    NonFiniteEndpoint { role: &'static str },

    #[error("point ({x}, {y}) is not registered")]
    UnknownPoint { x: f64, y: f64 },

    #[error("no path exists from {start:?} to {goal:?}")]
    NoPathExists { start: Point, goal: Point },
}

/// What is wrong with a rejected obstacle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleDefect {
    #[error("polygon has no vertices")]
    Empty,

    #[error("vertex {vertex} has non-finite coordinates")]
    NonFinite { vertex: usize },

    #[error("polygon is not convex")]
    NotConvex,
}

impl PlanError {
    pub(crate) fn unknown_point(p: Point) -> Self {
        PlanError::UnknownPoint { x: p.x, y: p.y }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
