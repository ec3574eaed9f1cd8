use std::convert::TryFrom;
use std::ops::Mul;

use crate::tuple::Tuple;
use crate::matrix::Matrix;
use crate::error::{ Error, Result };

/// An affine transformation in 3D space.
///
/// A `Transform` is a 4x4 `Matrix` with builder methods for the elementary
/// transformations: translation, scaling, shearing, and rotation about each
/// axis. It transforms both vectors and points (`w` components of `0.0` and
/// `1.0`, respectively); translation leaves vectors alone.
///
/// Transforms are immutable values. Each builder method consumes the
/// transform and returns the composition `self * elementary`, so a chain of
/// calls spells out the matrix product left to right:
///
/// ```text
/// Transform::identity().translate(..).scale(..).rotate_x(..)
///     == translation * scaling * rotation_x
/// ```
///
/// Applied to a tuple, the *last* call in the chain acts first: the example
/// above rotates, then scales, then translates.
///
/// # Examples
///
/// ```
/// # use ray_tracer_core::tuple::Tuple;
/// # use ray_tracer_core::transform::Transform;
/// let t = Transform::identity()
///     .translate(10.0, 5.0, 7.0)
///     .scale(5.0, 5.0, 5.0)
///     .rotate_x(std::f64::consts::PI / 2.0);
///
/// let p = Tuple::point(1.0, 0.0, 1.0);
/// assert_eq!(t.apply(&p), Tuple::point(15.0, 0.0, 7.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    matrix: Matrix,
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::identity()
    }
}

impl Transform {
    /// The identity transform, which leaves every tuple unchanged.
    pub fn identity() -> Transform {
        Transform { matrix: Matrix::identity(4) }
    }

    /// Instantiates a translation, offsetting points by `x`, `y` and `z`.
    pub fn translation(x: f64, y: f64, z: f64) -> Transform {
        [ 1.0, 0.0, 0.0,   x,
          0.0, 1.0, 0.0,   y,
          0.0, 0.0, 1.0,   z,
          0.0, 0.0, 0.0, 1.0, ].into()
    }

    /// Instantiates a scaling along the X, Y and Z axes.
    ///
    /// Scaling by a negative value reflects across that axis.
    pub fn scaling(x: f64, y: f64, z: f64) -> Transform {
        [   x, 0.0, 0.0, 0.0,
          0.0,   y, 0.0, 0.0,
          0.0, 0.0,   z, 0.0,
          0.0, 0.0, 0.0, 1.0, ].into()
    }

    /// Instantiates a shear.
    ///
    /// Each parameter moves one coordinate in proportion to another: `xy`
    /// moves `x` in proportion to `y`, `zx` moves `z` in proportion to `x`,
    /// and so on.
    ///
    /// ```
    /// # use ray_tracer_core::tuple::Tuple;
    /// # use ray_tracer_core::transform::Transform;
    /// let m = Transform::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// let p = Tuple::point(2.0, 3.0, 4.0);
    /// assert_eq!(m.apply(&p), Tuple::point(5.0, 3.0, 4.0));
    /// ```
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64)
        -> Transform {
        [ 1.0,  xy,  xz, 0.0,
           yx, 1.0,  yz, 0.0,
           zx,  zy, 1.0, 0.0,
          0.0, 0.0, 0.0, 1.0, ].into()
    }

    /// Instantiates a rotation of `r` radians about the X axis.
    pub fn rotation_x(r: f64) -> Transform {
        let (sin, cos) = r.sin_cos();

        [ 1.0, 0.0,  0.0, 0.0,
          0.0, cos, -sin, 0.0,
          0.0, sin,  cos, 0.0,
          0.0, 0.0,  0.0, 1.0, ].into()
    }

    /// Instantiates a rotation of `r` radians about the Y axis.
    pub fn rotation_y(r: f64) -> Transform {
        let (sin, cos) = r.sin_cos();

        [  cos, 0.0, sin, 0.0,
           0.0, 1.0, 0.0, 0.0,
          -sin, 0.0, cos, 0.0,
           0.0, 0.0, 0.0, 1.0, ].into()
    }

    /// Instantiates a rotation of `r` radians about the Z axis.
    pub fn rotation_z(r: f64) -> Transform {
        let (sin, cos) = r.sin_cos();

        [ cos, -sin, 0.0, 0.0,
          sin,  cos, 0.0, 0.0,
          0.0,  0.0, 1.0, 0.0,
          0.0,  0.0, 0.0, 1.0, ].into()
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Transform {
        self * Transform::translation(x, y, z)
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Transform {
        self * Transform::scaling(x, y, z)
    }

    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64)
        -> Transform {
        self * Transform::shearing(xy, xz, yx, yz, zx, zy)
    }

    pub fn rotate_x(self, r: f64) -> Transform {
        self * Transform::rotation_x(r)
    }

    pub fn rotate_y(self, r: f64) -> Transform {
        self * Transform::rotation_y(r)
    }

    pub fn rotate_z(self, r: f64) -> Transform {
        self * Transform::rotation_z(r)
    }

    /// Composes `next` after `self`: the result applies `self` first, then
    /// `next`.
    ///
    /// This is the reverse of the builder order, and reads naturally when
    /// describing a sequence of steps.
    pub fn then(self, next: Transform) -> Transform {
        next * self
    }

    /// Applies the transform to a tuple.
    ///
    /// Same as `Matrix::multiply_tuple` on the underlying 4x4 matrix.
    pub fn apply(&self, t: &Tuple) -> Tuple {
        let components = [t.x, t.y, t.z, t.w];
        let row = |r: usize| self.matrix.row_dot(r, &components);

        Tuple::tuple(row(0), row(1), row(2), row(3))
    }

    /// Calculates the inverse transform.
    ///
    /// Fails with `Error::NotInvertible` for degenerate transforms, such as
    /// a scaling by zero.
    pub fn inverse(&self) -> Result<Transform> {
        Ok(Transform { matrix: self.matrix.invert()? })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl From<[f64; 16]> for Transform {
    fn from(data: [f64; 16]) -> Transform {
        Transform { matrix: data.into() }
    }
}

impl From<Transform> for Matrix {
    fn from(t: Transform) -> Matrix {
        t.matrix
    }
}

/// Wraps a 4x4 matrix as a transform. Any other dimension is an
/// `Error::DimensionMismatch`.
impl TryFrom<Matrix> for Transform {
    type Error = Error;

    fn try_from(matrix: Matrix) -> Result<Transform> {
        if matrix.dimension() != 4 {
            return Err(Error::DimensionMismatch { left: matrix.dimension(), right: 4 });
        }

        Ok(Transform { matrix })
    }
}

/// Composition of two transforms.
///
/// As with any matrix product, `a * b` applies `b` first, then `a`.
impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Transform {
        Transform { matrix: self.matrix.product(&other.matrix) }
    }
}

impl Mul<Tuple> for &Transform {
    type Output = Tuple;

    fn mul(self, other: Tuple) -> Tuple {
        self.apply(&other)
    }
}

impl Mul<Tuple> for Transform {
    type Output = Tuple;

    fn mul(self, other: Tuple) -> Tuple {
        self.apply(&other)
    }
}

/* Tests */

#[cfg(test)]
use std::f64::consts::PI;

#[test]
fn identity_leaves_tuples() {
    let t = Tuple::tuple(1.0, 2.0, 3.0, 4.0);

    assert_eq!(Transform::identity().apply(&t), t);
    assert_eq!(Transform::default(), Transform::identity());
}

#[test]
fn translation() {
    let transform = Transform::identity().translate(5.0, -3.0, 2.0);
    let point = Tuple::point(-3.0, 4.0, 5.0);

    assert_eq!(transform.apply(&point), Tuple::point(2.0, 1.0, 7.0));
}

#[test]
fn translation_inverse() {
    let transform = Transform::identity().translate(5.0, -3.0, 2.0)
        .inverse().unwrap();
    let point = Tuple::point(-3.0, 4.0, 5.0);

    assert_eq!(transform.apply(&point), Tuple::point(-8.0, 7.0, 3.0));
}

#[test]
fn translation_vector() {
    let transform = Transform::identity().translate(5.0, -3.0, 2.0);
    let vector = Tuple::vector(-3.0, 4.0, 5.0);

    assert_eq!(transform.apply(&vector), vector);
}

#[test]
fn scaling_point() {
    let transform = Transform::identity().scale(2.0, 3.0, 4.0);
    let point = Tuple::point(-4.0, 6.0, 8.0);

    assert_eq!(transform.apply(&point), Tuple::point(-8.0, 18.0, 32.0));
}

#[test]
fn scaling_vector() {
    let transform = Transform::identity().scale(2.0, 3.0, 4.0);
    let vector = Tuple::vector(-4.0, 6.0, 8.0);

    assert_eq!(transform.apply(&vector), Tuple::vector(-8.0, 18.0, 32.0));
}

#[test]
fn scaling_inverse() {
    let transform = Transform::identity().scale(2.0, 3.0, 4.0)
        .inverse().unwrap();
    let vector = Tuple::vector(-4.0, 6.0, 8.0);

    assert_eq!(transform.apply(&vector), Tuple::vector(-2.0, 2.0, 2.0));
}

#[test]
fn scaling_reflection() {
    let transform = Transform::identity().scale(-1.0, 1.0, 1.0);
    let point = Tuple::point(2.0, 3.0, 4.0);

    assert_eq!(transform.apply(&point), Tuple::point(-2.0, 3.0, 4.0));
}

#[test]
fn scaling_by_zero_not_invertible() {
    let transform = Transform::identity().scale(0.0, 1.0, 1.0);

    assert!(matches!(transform.inverse(), Err(Error::NotInvertible { .. })));
}

#[test]
fn rotate_x() {
    let half_quarter = Transform::identity().rotate_x(PI / 4.0);
    let full_quarter = Transform::identity().rotate_x(PI / 2.0);
    let point = Tuple::point(0.0, 1.0, 0.0);

    assert_eq!(full_quarter.apply(&point),
        Tuple::point(0.0, 0.0, 1.0));
    assert_eq!(half_quarter.apply(&point),
        Tuple::point(0.0, 2.0f64.sqrt() / 2.0, 2.0f64.sqrt() / 2.0));
}

#[test]
fn rotate_x_inverse() {
    let half_quarter = Transform::identity().rotate_x(PI / 4.0);
    let point = Tuple::point(0.0, 1.0, 0.0);

    assert_eq!(half_quarter.inverse().unwrap().apply(&point),
        Tuple::point(0.0, 2.0f64.sqrt() / 2.0, -2.0f64.sqrt() / 2.0));
}

#[test]
fn rotate_y() {
    let half_quarter = Transform::identity().rotate_y(PI / 4.0);
    let full_quarter = Transform::identity().rotate_y(PI / 2.0);
    let point = Tuple::point(0.0, 0.0, 1.0);

    assert_eq!(full_quarter.apply(&point),
        Tuple::point(1.0, 0.0, 0.0));
    assert_eq!(half_quarter.apply(&point),
        Tuple::point(2.0f64.sqrt() / 2.0, 0.0, 2.0f64.sqrt() / 2.0));
}

#[test]
fn rotate_z() {
    let half_quarter = Transform::identity().rotate_z(PI / 4.0);
    let full_quarter = Transform::identity().rotate_z(PI / 2.0);
    let point = Tuple::point(0.0, 1.0, 0.0);

    assert_eq!(full_quarter.apply(&point),
        Tuple::point(-1.0, 0.0, 0.0));
    assert_eq!(half_quarter.apply(&point),
        Tuple::point(-2.0f64.sqrt() / 2.0, 2.0f64.sqrt() / 2.0, 0.0));
}

#[test]
fn shear_each_axis() {
    let point = Tuple::point(2.0, 3.0, 4.0);
    let cases = [
        ([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Tuple::point(5.0, 3.0, 4.0)),
        ([0.0, 1.0, 0.0, 0.0, 0.0, 0.0], Tuple::point(6.0, 3.0, 4.0)),
        ([0.0, 0.0, 1.0, 0.0, 0.0, 0.0], Tuple::point(2.0, 5.0, 4.0)),
        ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], Tuple::point(2.0, 7.0, 4.0)),
        ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], Tuple::point(2.0, 3.0, 6.0)),
        ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], Tuple::point(2.0, 3.0, 7.0)),
    ];

    for (s, expected) in cases.iter() {
        let transform = Transform::identity()
            .shear(s[0], s[1], s[2], s[3], s[4], s[5]);

        assert_eq!(transform.apply(&point), *expected);
    }
}

#[test]
fn individual_transforms_in_sequence() {
    let p = Tuple::point(1.0, 0.0, 1.0);
    let a = Transform::rotation_x(PI / 2.0);
    let b = Transform::scaling(5.0, 5.0, 5.0);
    let c = Transform::translation(10.0, 5.0, 7.0);

    let p2 = a.apply(&p);
    assert_eq!(p2, Tuple::point(1.0, -1.0, 0.0));

    let p3 = b.apply(&p2);
    assert_eq!(p3, Tuple::point(5.0, -5.0, 0.0));

    let p4 = c.apply(&p3);
    assert_eq!(p4, Tuple::point(15.0, 0.0, 7.0));
}

#[test]
fn chained_transforms() {
    let t = Transform::identity()
        .translate(10.0, 5.0, 7.0)
        .scale(5.0, 5.0, 5.0)
        .rotate_x(PI / 2.0);
    let p = Tuple::point(1.0, 0.0, 1.0);

    assert_eq!(t.apply(&p), Tuple::point(15.0, 0.0, 7.0));
    assert_eq!(&t * p, Tuple::point(15.0, 0.0, 7.0));
}

#[test]
fn chained_matches_product() {
    let chained = Transform::identity()
        .translate(10.0, 5.0, 7.0)
        .scale(5.0, 5.0, 5.0)
        .rotate_x(PI / 2.0);

    let product = Transform::translation(10.0, 5.0, 7.0)
        * Transform::scaling(5.0, 5.0, 5.0)
        * Transform::rotation_x(PI / 2.0);

    assert_eq!(chained, product);
}

#[test]
fn then_reads_in_application_order() {
    let t = Transform::rotation_x(PI / 2.0)
        .then(Transform::scaling(5.0, 5.0, 5.0))
        .then(Transform::translation(10.0, 5.0, 7.0));
    let p = Tuple::point(1.0, 0.0, 1.0);

    assert_eq!(t * p, Tuple::point(15.0, 0.0, 7.0));
}

#[test]
fn matrix_conversions() {
    let t = Transform::translation(1.0, 2.0, 3.0);
    let m: Matrix = t.clone().into();

    assert_eq!(m.at(1, 3).unwrap(), 2.0);
    assert_eq!(Transform::try_from(m).unwrap(), t);
    assert!(matches!(
        Transform::try_from(Matrix::identity(3)),
        Err(Error::DimensionMismatch { left: 3, right: 4 })
    ));
}

#[test]
fn apply_agrees_with_matrix() {
    let t = Transform::identity()
        .translate(1.0, -2.0, 3.5)
        .rotate_y(0.3)
        .shear(0.5, 0.0, 1.0, 0.0, 0.0, 2.0);
    let tuples = [
        Tuple::point(2.0, 3.0, 4.0),
        Tuple::vector(-1.0, 0.5, 7.0),
        Tuple::tuple(1.0, 2.0, 3.0, 4.0),
    ];

    for tuple in tuples.iter() {
        assert_eq!(t.apply(tuple), t.matrix().multiply_tuple(tuple).unwrap());
        assert_eq!(&t * *tuple, t.apply(tuple));
    }
}

#[test]
fn composition_agrees_with_matrix() {
    let a = Transform::rotation_x(PI / 3.0) * Transform::translation(4.0, 5.0, 6.0);
    let b = Transform::shearing(1.0, 2.0, 0.0, 0.5, 0.0, 0.0) * Transform::scaling(2.0, -1.0, 3.0);

    let product = a.matrix().multiply(b.matrix()).unwrap();
    assert_eq!(Matrix::from(a * b), product);
}
