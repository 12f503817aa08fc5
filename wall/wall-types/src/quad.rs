//! Concrete quad with resolved corner positions.

use nalgebra::Point3;

/// A quad with four corner positions in winding order.
///
/// Corners follow the face's winding (counter-clockwise viewed from
/// the outward normal). The quad is split along the `v0`-`v2` diagonal
/// for area and degeneracy computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// First corner.
    pub v0: Point3<f64>,
    /// Second corner.
    pub v1: Point3<f64>,
    /// Third corner.
    pub v2: Point3<f64>,
    /// Fourth corner.
    pub v3: Point3<f64>,
}

impl Quad {
    /// Create a quad from four corners in winding order.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>, v3: Point3<f64>) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// Area of the triangle (v0, v1, v2).
    #[must_use]
    pub fn first_triangle_area(&self) -> f64 {
        triangle_area(&self.v0, &self.v1, &self.v2)
    }

    /// Area of the triangle (v0, v2, v3).
    #[must_use]
    pub fn second_triangle_area(&self) -> f64 {
        triangle_area(&self.v0, &self.v2, &self.v3)
    }

    /// Total area of the quad (sum of the two diagonal triangles).
    ///
    /// # Example
    ///
    /// ```
    /// use wall_types::{Quad, Point3};
    ///
    /// let unit = Quad::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// assert!((unit.area() - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        self.first_triangle_area() + self.second_triangle_area()
    }

    /// Check whether the quad is degenerate (near-zero area).
    ///
    /// A quad counts as degenerate when either diagonal triangle has
    /// area below `epsilon`, which covers three-or-more collinear
    /// corners as well as fully collapsed quads.
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.first_triangle_area() < epsilon || self.second_triangle_area() < epsilon
    }

    /// Centroid of the four corners.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::new(
            (self.v0.x + self.v1.x + self.v2.x + self.v3.x) * 0.25,
            (self.v0.y + self.v1.y + self.v2.y + self.v3.y) * 0.25,
            (self.v0.z + self.v1.z + self.v2.z + self.v3.z) * 0.25,
        )
    }
}

/// Area of the triangle (a, b, c) via the cross-product formula.
fn triangle_area(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let e1 = b - a;
    let e2 = c - a;
    e1.cross(&e2).norm() * 0.5
}
