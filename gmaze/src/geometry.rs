use std::ops::{Add, Sub};

/// Location of a cell as reported by the tiling, in arbitrary units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn euclidean_distance_to(self, other: Point2D) -> f32 {
        let Point2D { x, y } = other - self;
        x.hypot(y)
    }

    pub fn manhattan_distance_to(self, other: Point2D) -> f32 {
        let Point2D { x, y } = other - self;
        x.abs() + y.abs()
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(4.0, 5.0);

        assert_eq!(a.euclidean_distance_to(b), 5.0);
        assert_eq!(a.manhattan_distance_to(b), 7.0);
        assert_eq!(b.manhattan_distance_to(a), 7.0);
        assert_eq!(a.euclidean_distance_to(a), 0.0);
    }
}
