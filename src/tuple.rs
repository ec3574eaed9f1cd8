use std::fmt;
use std::ops::{ Add, Sub, Neg, Mul, Div };

use serde::{ Serialize, Deserialize };

use crate::feq;
use crate::error::{ Error, Result };

/// A four component tuple.
///
/// Depending on `w`, a tuple is either a point (`w == 1.0`), a vector
/// (`w == 0.0`), or a color (see `crate::color`), where `x`, `y` and `z` are
/// read as red, green and blue, and `w` as alpha.
///
/// Tuples are plain values; every operation returns a new tuple.
///
/// # Examples
///
/// ```
/// # use ray_tracer_core::tuple::Tuple;
/// let p = Tuple::point(3.0, 2.0, 1.0);
/// let v = Tuple::vector(5.0, 6.0, 7.0);
/// assert_eq!(p - v, Tuple::point(-2.0, -4.0, -6.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialOrd, Serialize, Deserialize)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64
}

/// Tuples compare equal when every component is within `FEQ_EPSILON`.
impl PartialEq for Tuple {
    fn eq(&self, other: &Tuple) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z) &&
            feq(self.w, other.w)
    }
}

impl Tuple {
    pub fn tuple(x: f64, y: f64, z: f64, w: f64) -> Tuple {
        Tuple { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Tuple {
        Tuple { x, y, z, w: 1.0 }
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
        Tuple { x, y, z, w: 0.0 }
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// The length of the tuple, ignoring `w`.
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(
            self.x.powi(2)
            + self.y.powi(2)
            + self.z.powi(2)
        )
    }

    /// Scales the tuple to unit length.
    ///
    /// All four components (`w` included) are divided by the magnitude. A
    /// tuple of zero magnitude can't be normalized, and yields
    /// `Error::ZeroMagnitude`.
    ///
    /// ```
    /// # use ray_tracer_core::tuple::Tuple;
    /// let v = Tuple::vector(4.0, 0.0, 0.0);
    /// assert_eq!(v.normalize().unwrap(), Tuple::vector(1.0, 0.0, 0.0));
    /// assert!(Tuple::vector(0.0, 0.0, 0.0).normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Tuple> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(Error::ZeroMagnitude);
        }

        Ok(*self / mag)
    }

    /// The dot product over `x`, `y` and `z`.
    ///
    /// `w` takes no part in the product, so a point and a vector with the
    /// same coordinates give the same result.
    pub fn dot(&self, other: &Tuple) -> f64 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
    }

    /// The cross product of two vectors. The result is always a vector.
    pub fn cross(&self, other: &Tuple) -> Tuple {
        Tuple {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
            w: 0.0
        }
    }

    /// Computes the Hadamard (component-wise) product of two tuples.
    ///
    /// This is how two colors are blended.
    ///
    /// ```
    /// # use ray_tracer_core::tuple::Tuple;
    /// let a = Tuple::tuple(1.0, 0.2, 0.4, 1.0);
    /// let b = Tuple::tuple(0.9, 1.0, 0.1, 1.0);
    /// assert_eq!(a.hadamard(&b), Tuple::tuple(0.9, 0.2, 0.04, 1.0));
    /// ```
    pub fn hadamard(&self, other: &Tuple) -> Tuple {
        Tuple {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w
        }
    }
}

/// Adds two tuples component-wise.
///
/// Adding two points is meaningless, but the `w` of the sum never goes past
/// `1.0`.
impl Add for Tuple {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let w = self.w + other.w;

        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: if w > 1.0 { 1.0 } else { w }
        }
    }
}

/// Subtracts two tuples component-wise.
///
/// A point minus a point is a vector; a point minus a vector is a point. A
/// negative `w` (vector minus point) is clamped back to `1.0`.
impl Sub for Tuple {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let w = self.w - other.w;

        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: if w < 0.0 { 1.0 } else { w }
        }
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w
        }
    }
}

/// Implements scalar right-multiplication for a tuple.
///
/// ```
/// # use ray_tracer_core::tuple::Tuple;
/// let t = Tuple::tuple(1.0, 2.0, 3.0, 4.0);
///
/// // (notice how the scalar is on the right)
/// assert_eq!(t * 5.0, Tuple::tuple(5.0, 10.0, 15.0, 20.0));
/// ```
impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
            w: self.w * other
        }
    }
}

/// Implements scalar left-multiplication for a tuple.
///
/// ```
/// # use ray_tracer_core::tuple::Tuple;
/// let t = Tuple::tuple(1.0, 2.0, 3.0, 4.0);
///
/// // (notice how the scalar is on the left)
/// assert_eq!(5.0 * t, Tuple::tuple(5.0, 10.0, 15.0, 20.0));
/// ```
impl Mul<Tuple> for f64 {
    type Output = Tuple;

    fn mul(self, other: Tuple) -> Tuple {
        other * self
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        Self {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
            w: self.w / other
        }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.4}, Y: {:.4}, Z: {:.4}, W: {:.4}",
            self.x, self.y, self.z, self.w)
    }
}

/* Tests */

#[test]
fn tuple_is_point() {
    let a = Tuple::tuple(4.3, -4.2, 3.1, 1.0);

    assert!(a.is_point());
    assert!(!a.is_vector());
    assert_eq!(a, Tuple::point(4.3, -4.2, 3.1));
}

#[test]
fn tuple_is_vector() {
    let a = Tuple::tuple(4.3, -4.2, 3.1, 0.0);

    assert!(a.is_vector());
    assert!(!a.is_point());
    assert_eq!(a, Tuple::vector(4.3, -4.2, 3.1));
}

#[test]
fn add_tuples() {
    let a1 = Tuple::tuple(3.0, -2.0, 5.0, 1.0);
    let a2 = Tuple::tuple(-2.0, 3.0, 1.0, 0.0);

    assert_eq!(a1 + a2, Tuple::tuple(1.0, 1.0, 6.0, 1.0));
}

#[test]
fn add_points_clamps_w() {
    let p1 = Tuple::point(1.0, 2.0, 3.0);
    let p2 = Tuple::point(1.0, 1.0, 1.0);

    assert_eq!((p1 + p2).w, 1.0);
}

#[test]
fn sub_points() {
    let p1 = Tuple::point(3.0, 2.0, 1.0);
    let p2 = Tuple::point(5.0, 6.0, 7.0);

    assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
}

#[test]
fn sub_vector_from_point() {
    let p = Tuple::point(3.0, 2.0, 1.0);
    let v = Tuple::vector(5.0, 6.0, 7.0);

    assert_eq!(p - v, Tuple::point(-2.0, -4.0, -6.0));
}

#[test]
fn sub_point_from_vector_clamps_w() {
    let v = Tuple::vector(3.0, 2.0, 1.0);
    let p = Tuple::point(5.0, 6.0, 7.0);

    assert_eq!(v - p, Tuple::point(-2.0, -4.0, -6.0));
}

#[test]
fn sub_vectors() {
    let p1 = Tuple::vector(3.0, 2.0, 1.0);
    let p2 = Tuple::vector(5.0, 6.0, 7.0);

    assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
}

#[test]
fn neg_tuple() {
    let a = Tuple::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(-a, Tuple::tuple(-1.0, 2.0, -3.0, 4.0));
}

#[test]
fn mul_scalar() {
    let a = Tuple::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a * 3.5, Tuple::tuple(3.5, -7.0, 10.5, -14.0));
}

#[test]
fn mul_fraction() {
    let a = Tuple::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a * 0.5, Tuple::tuple(0.5, -1.0, 1.5, -2.0));
}

#[test]
fn div_scalar() {
    let a = Tuple::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a / 2.0, Tuple::tuple(0.5, -1.0, 1.5, -2.0));
}

#[test]
fn magnitude_pos() {
    let v = Tuple::vector(1.0, 2.0, 3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
}

#[test]
fn magnitude_neg() {
    let v = Tuple::vector(-1.0, -2.0, -3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
}

#[test]
fn magnitude_ignores_w() {
    let p = Tuple::point(0.0, 3.0, 4.0);

    assert_eq!(p.magnitude(), 5.0);
}

#[test]
fn normalize_clean() {
    let v = Tuple::vector(4.0, 0.0, 0.0);

    assert_eq!(v.normalize().unwrap(), Tuple::vector(1.0, 0.0, 0.0));
}

#[test]
fn normalize_dirty() {
    let v = Tuple::vector(1.0, 2.0, 3.0);
    let e = Tuple::vector(
        1.0 / f64::sqrt(14.0),
        2.0 / f64::sqrt(14.0),
        3.0 / f64::sqrt(14.0)
    );

    let n = v.normalize().unwrap();
    assert_eq!(n, e);
    assert!(crate::feq(n.magnitude(), 1.0));
}

#[test]
fn normalize_zero() {
    let v = Tuple::vector(0.0, 0.0, 0.0);

    assert!(matches!(v.normalize(), Err(Error::ZeroMagnitude)));
}

#[test]
fn dot_vectors() {
    let a = Tuple::vector(1.0, 2.0, 3.0);
    let b = Tuple::vector(2.0, 3.0, 4.0);

    assert_eq!(a.dot(&b), 20.0);
}

#[test]
fn dot_ignores_w() {
    let a = Tuple::tuple(1.0, 2.0, 3.0, 1.0);
    let b = Tuple::tuple(2.0, 3.0, 4.0, 1.0);

    assert_eq!(a.dot(&b), 20.0);
}

#[test]
fn cross_vectors() {
    let a = Tuple::vector(1.0, 2.0, 3.0);
    let b = Tuple::vector(2.0, 3.0, 4.0);

    let c = Tuple::vector(-1.0, 2.0, -1.0);
    let d = Tuple::vector(1.0, -2.0, 1.0);

    assert_eq!(a.cross(&b), c);
    assert_eq!(b.cross(&a), d);
}

#[test]
fn display_tuple() {
    let p = Tuple::point(1.0, -2.5, 0.125);

    assert_eq!(p.to_string(), "X: 1.0000, Y: -2.5000, Z: 0.1250, W: 1.0000");
}
