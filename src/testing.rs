use crate::planner::PlanObserver;
use crate::polygon::Polygon;
use crate::route::Route;
use crate::vec2::Point;
use proptest::prelude::*;

pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Axis-aligned square with lower-left corner (x, y).
pub fn square(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::rect(pt(x, y), pt(x + size, y + size))
}

pub fn point_poly(x: f64, y: f64) -> Polygon {
    Polygon::new(vec![pt(x, y)])
}

/// A 2 x 2 block straddling the x axis between x = 4 and x = 6, squarely
/// between (0, 0) and (10, 0).
pub fn detour_block() -> Polygon {
    Polygon::rect(pt(4.0, -1.0), pt(6.0, 1.0))
}

/// Four overlapping walls around the origin, arranged like a pinwheel.
/// Every wall corner either lies inside a neighbouring wall or is hidden
/// behind one, so the origin cannot see any vertex.
pub fn pinwheel() -> Vec<Polygon> {
    vec![
        Polygon::rect(pt(-1.5, 1.0), pt(1.5, 2.0)),
        Polygon::rect(pt(1.0, -1.5), pt(2.0, 1.5)),
        Polygon::rect(pt(-1.5, -2.0), pt(1.5, -1.0)),
        Polygon::rect(pt(-2.0, -1.5), pt(-1.0, 1.5)),
    ]
}

#[derive(Default)]
pub struct EdgeRecorder {
    pub edges: Vec<(Point, Point, f64)>,
    pub routes: Vec<Route>,
}

impl PlanObserver for EdgeRecorder {
    fn on_edge(&mut self, a: Point, b: Point, weight: f64) {
        self.edges.push((a, b, weight));
    }

    fn on_route(&mut self, route: &Route) {
        self.routes.push(route.clone());
    }
}

const CELL: f64 = 10.0;
const GRID: usize = 3;

/// Random obstacle fields: a 3 x 3 grid of 10 x 10 cells, each holding at
/// most one rectangle that stays inside its cell, so rectangles never touch.
/// Start and goal are anywhere in the field, possibly inside a rectangle.
pub fn rect_field() -> impl Strategy<Value = (Vec<Polygon>, Point, Point)> {
    let cell = prop::option::of((0.0..4.0f64, 0.0..4.0f64, 0.5..5.0f64, 0.5..5.0f64));
    let extent = CELL * GRID as f64;
    (
        prop::collection::vec(cell, GRID * GRID),
        (0.0..extent, 0.0..extent),
        (0.0..extent, 0.0..extent),
    )
        .prop_map(|(cells, (sx, sy), (gx, gy))| {
            let obstacles = cells
                .into_iter()
                .enumerate()
                .filter_map(|(i, cell)| {
                    let (x0, y0, w, h) = cell?;
                    let origin = pt((i % GRID) as f64 * CELL + x0, (i / GRID) as f64 * CELL + y0);
                    Some(Polygon::rect(origin, pt(origin.x + w, origin.y + h)))
                })
                .collect();
            (obstacles, pt(sx, sy), pt(gx, gy))
        })
}
