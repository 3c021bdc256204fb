use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Sub};

#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<T, Output = T> + Copy> Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Sub<T, Output = T> + Copy> Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Mul<T, Output = T> + Copy> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;
    fn mul(self, other: T) -> Self::Output {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

/// A location in the shared planar frame.
pub type Point = Vec2<f64>;

impl Vec2<f64> {
    /// z component of the 3D cross product `self x other`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Key for exact-coordinate identity. See [`PointKey`].
    pub fn key(self) -> PointKey {
        PointKey::from(self)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vec2<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "({:?}, {:?})", self.x, self.y)
    }
}

/// Hashable identity of a [`Point`].
///
/// Two finite points have equal keys exactly when their coordinates compare
/// equal as `f64`. The only case where bit patterns and `==` disagree for
/// finite values is `0.0` versus `-0.0`, so negative zero is folded into
/// positive zero before the bits are taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointKey {
    x: u64,
    y: u64,
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl From<Point> for PointKey {
    fn from(p: Point) -> Self {
        PointKey {
            x: canonical_bits(p.x),
            y: canonical_bits(p.y),
        }
    }
}

impl Hash for PointKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
