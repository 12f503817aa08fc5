//! Interpolation helpers.

use nalgebra::Point3;

/// Linear interpolation between two points.
///
/// Uses the `(1 - t) * a + t * b` form, which is exact at the
/// endpoints: `lerp(a, b, 0.0)` returns `a` bit-for-bit and
/// `lerp(a, b, 1.0)` returns `b` bit-for-bit. Downstream anchor
/// pinning relies on this.
///
/// # Example
///
/// ```
/// use wall_types::{lerp, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(2.0, 4.0, 6.0);
/// let mid = lerp(&a, &b, 0.5);
/// assert_eq!(mid, Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(lerp(&a, &b, 1.0), b);
/// ```
#[inline]
#[must_use]
pub fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    let s = 1.0 - t;
    Point3::new(
        s * a.x + t * b.x,
        s * a.y + t * b.y,
        s * a.z + t * b.z,
    )
}

/// Bilinear interpolation over a quad.
///
/// The four corners are given in winding order: `p00` (u=0, v=0),
/// `p10` (u=1, v=0), `p11` (u=1, v=1), `p01` (u=0, v=1). Like
/// [`lerp`], the corners are reproduced exactly at unit parameter
/// values.
///
/// # Example
///
/// ```
/// use wall_types::{bilerp, Point3};
///
/// let p00 = Point3::new(0.0, 0.0, 0.0);
/// let p10 = Point3::new(1.0, 0.0, 0.0);
/// let p11 = Point3::new(1.0, 1.0, 0.0);
/// let p01 = Point3::new(0.0, 1.0, 0.0);
///
/// let center = bilerp(&p00, &p10, &p11, &p01, 0.5, 0.5);
/// assert_eq!(center, Point3::new(0.5, 0.5, 0.0));
/// assert_eq!(bilerp(&p00, &p10, &p11, &p01, 1.0, 1.0), p11);
/// ```
#[inline]
#[must_use]
pub fn bilerp(
    p00: &Point3<f64>,
    p10: &Point3<f64>,
    p11: &Point3<f64>,
    p01: &Point3<f64>,
    u: f64,
    v: f64,
) -> Point3<f64> {
    let bottom = lerp(p00, p10, u);
    let top = lerp(p01, p11, u);
    lerp(&bottom, &top, v)
}
