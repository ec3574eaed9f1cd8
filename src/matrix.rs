use std::fmt;
use std::convert::TryFrom;
use std::ops::{ Index, IndexMut };

use serde::{ Serialize, Deserialize };

use crate::feq;
use crate::tuple::Tuple;
use crate::error::{ Error, Result };

/// A square matrix of any dimension from 2x2 up.
///
/// Elements are stored as a flat vector in row-major order, so the element
/// at row `r`, column `c` lives at index `r * dimension + c`. The vector
/// always holds exactly `dimension²` elements; `Matrix::new` refuses any
/// other count.
///
/// One type covers every dimension. The determinant is found by cofactor
/// expansion along the first row, recursing through submatrices until the
/// 2x2 base case, so the cost grows factorially with the dimension. That's
/// fine for the 2x2, 3x3 and 4x4 matrices a ray tracer deals in.
///
/// Operations that can be handed bad input (indices, shapes, singular
/// matrices) return a `Result`; the rest are infallible.
///
/// # Examples
///
/// Inverting a matrix and multiplying it back:
///
/// ```
/// # use ray_tracer_core::matrix::Matrix;
/// let a = Matrix::new(3, vec![ 1.0, 2.0,  6.0,
///                             -5.0, 8.0, -4.0,
///                              2.0, 6.0,  4.0 ]).unwrap();
///
/// assert_eq!(a.determinant(), -196.0);
///
/// let product = a.multiply(&a.invert().unwrap()).unwrap();
/// assert_eq!(product, Matrix::identity(3));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    dimension: usize,
    data: Vec<f64>,
}

/// The unchecked form a `Matrix` takes on the wire.
///
/// Deserializing goes through `Matrix::new`, so a document whose `data`
/// doesn't hold `dimension²` values is rejected.
#[derive(Deserialize)]
struct RawMatrix {
    dimension: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Matrix> {
        Matrix::new(raw.dimension, raw.data)
    }
}

/// Matrices are equal when they have the same dimension and every pair of
/// elements is within `FEQ_EPSILON`.
///
/// Use `Matrix::equals` to treat a dimension mismatch as an error instead of
/// plain inequality.
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.dimension == other.dimension
            && self.data.iter().zip(other.data.iter()).all(|(x, y)| feq(*x, *y))
    }
}

impl Matrix {
    /// Creates a `dimension` x `dimension` matrix from row-major values.
    ///
    /// Fails with `Error::Shape` unless `values` holds exactly `dimension²`
    /// elements and `dimension` is at least 2.
    ///
    /// ```
    /// # use ray_tracer_core::matrix::Matrix;
    /// assert!(Matrix::new(2, vec![1.0, 5.0, -3.0, 2.0]).is_ok());
    /// assert!(Matrix::new(2, vec![1.0, 5.0, -3.0]).is_err());
    /// ```
    pub fn new(dimension: usize, values: Vec<f64>) -> Result<Matrix> {
        if dimension < 2 || values.len() != dimension * dimension {
            return Err(Error::Shape { dimension, len: values.len() });
        }

        Ok(Matrix { dimension, data: values })
    }

    /// Creates a matrix with every element set to `0.0`.
    ///
    /// Panics if `dimension` is less than 2.
    pub fn zeros(dimension: usize) -> Matrix {
        assert!(dimension >= 2, "matrices are at least 2x2");

        Matrix { dimension, data: vec![0.0; dimension * dimension] }
    }

    /// Instantiates an identity matrix.
    ///
    /// Panics if `dimension` is less than 2.
    pub fn identity(dimension: usize) -> Matrix {
        let mut ident = Matrix::zeros(dimension);
        for i in 0..dimension {
            ident[(i, i)] = 1.0;
        }

        ident
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The elements of the matrix, in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Reads the element at `row`, `col`.
    ///
    /// Fails with `Error::OutOfBounds` if either index is outside
    /// `[0, dimension)`. The `(row, col)` index operator does the same
    /// lookup, but panics instead.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.get(row, col))
    }

    /// Returns a copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        self.check_bounds(row, 0)?;

        let start = row * self.dimension;
        Ok(self.data[start..start + self.dimension].to_vec())
    }

    /// Returns a copy of column `col`.
    pub fn col(&self, col: usize) -> Result<Vec<f64>> {
        self.check_bounds(0, col)?;

        Ok((0..self.dimension).map(|r| self.get(r, col)).collect())
    }

    /// Compares two matrices element-wise, within `FEQ_EPSILON`.
    ///
    /// Unlike `==`, comparing matrices of different dimensions is an
    /// `Error::DimensionMismatch`.
    pub fn equals(&self, other: &Matrix) -> Result<bool> {
        self.check_same_dimension(other)?;
        Ok(self == other)
    }

    /// Compares two matrices of the same dimension element-wise, within an
    /// explicit tolerance.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.dimension == other.dimension
            && self.data.iter().zip(other.data.iter())
                .all(|(x, y)| (x - y).abs() < epsilon)
    }

    /// Multiplies two matrices of the same dimension.
    ///
    /// Each element of the product is the dot product of a row of `self` and
    /// a column of `other`. Matrix multiplication is not commutative.
    ///
    /// ```
    /// # use ray_tracer_core::matrix::Matrix;
    /// let a = Matrix::new(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::new(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    ///
    /// let ab = a.multiply(&b).unwrap();
    /// assert_eq!(ab.data(), &[2.0, 1.0, 4.0, 3.0]);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_dimension(other)?;
        Ok(self.product(other))
    }

    /// Multiplies the matrix by a tuple, treated as a column vector.
    ///
    /// A 4x4 matrix uses all of `x`, `y`, `z` and `w`. A 3x3 matrix uses `x`,
    /// `y` and `z`, and the result has `w == 1.0`. A 2x2 matrix uses `x` and
    /// `y`; the result has `z == 0.0` and `w == 1.0`. Any other dimension is
    /// an `Error::DimensionMismatch`.
    pub fn multiply_tuple(&self, t: &Tuple) -> Result<Tuple> {
        let components = [t.x, t.y, t.z, t.w];
        let n = self.dimension;
        let row_dot = |r: usize| self.row_dot(r, &components);

        match n {
            4 => Ok(Tuple::tuple(row_dot(0), row_dot(1), row_dot(2), row_dot(3))),
            3 => Ok(Tuple::tuple(row_dot(0), row_dot(1), row_dot(2), 1.0)),
            2 => Ok(Tuple::tuple(row_dot(0), row_dot(1), 0.0, 1.0)),
            _ => Err(Error::DimensionMismatch { left: n, right: 4 }),
        }
    }

    /// Produces the transpose of a matrix, returning a new matrix.
    ///
    /// The transpose of `A` is defined by `A^T[i][j] = A[j][i]`.
    pub fn transpose(&self) -> Matrix {
        let n = self.dimension;
        let mut buf = Matrix::zeros(n);
        for r in 0..n {
            for c in 0..n {
                buf[(c, r)] = self.get(r, c);
            }
        }

        buf
    }

    /// Returns the submatrix of a matrix.
    ///
    /// A submatrix "eliminates" a row and column of a larger matrix. Given
    /// this 3x3 matrix:
    ///
    /// ```text
    /// [
    ///     1.0, 0.0, 2.0,
    ///     3.0, 1.0, 0.0,
    ///     1.0, 1.0, 1.0
    /// ]
    /// ```
    ///
    /// the submatrix for `row == 1`, `col == 2` is the 2x2 matrix:
    ///
    /// ```text
    /// [
    ///     1.0, 0.0,
    ///     1.0, 1.0
    /// ]
    /// ```
    ///
    /// Fails with `Error::OutOfBounds` for a bad index, and with
    /// `Error::Undersized` on a 2x2 matrix.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.check_bounds(row, col)?;
        self.check_has_submatrix()?;

        Ok(self.submatrix_unchecked(row, col))
    }

    /// Returns the minor at `row`, `col`: the determinant of the submatrix
    /// with that row and column removed. Only defined from 3x3 up.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.submatrix(row, col)?.determinant())
    }

    /// Returns the cofactor at `row`, `col`.
    ///
    /// The cofactor is the minor, negated when `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        self.check_has_submatrix()?;

        Ok(self.cofactor_unchecked(row, col))
    }

    /// Calculates the determinant.
    ///
    /// A 2x2 determinant is `a00 * a11 - a01 * a10`. Larger matrices expand
    /// along the first row: `sum(a0c * cofactor(0, c))`.
    pub fn determinant(&self) -> f64 {
        match self.dimension {
            // Only reachable through the cofactors of a 2x2 matrix.
            1 => self.data[0],
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            n => (0..n).map(|c| self.get(0, c) * self.cofactor_unchecked(0, c)).sum(),
        }
    }

    /// A matrix is invertible when its determinant isn't (approximately) zero.
    pub fn is_invertible(&self) -> bool {
        !feq(self.determinant(), 0.0)
    }

    /// Calculates the inverse of a matrix.
    ///
    /// The inverse is the transpose of the cofactor matrix, divided by the
    /// determinant: `inv[col][row] = cofactor(row, col) / det`. A matrix
    /// with a zero determinant has no inverse, and yields
    /// `Error::NotInvertible`.
    pub fn invert(&self) -> Result<Matrix> {
        let det = self.determinant();
        if feq(det, 0.0) {
            return Err(Error::NotInvertible { determinant: det });
        }

        let n = self.dimension;
        let mut inv = Matrix::zeros(n);
        for r in 0..n {
            for c in 0..n {
                inv[(c, r)] = self.cofactor_unchecked(r, c) / det;
            }
        }

        Ok(inv)
    }

    /// Dot product of row `row` with `values`.
    ///
    /// Only the first `dimension` values are used; the caller guarantees
    /// there are at least that many.
    pub(crate) fn row_dot(&self, row: usize, values: &[f64]) -> f64 {
        self.row_slice(row).iter()
            .zip(values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Matrix product, for callers that already know both dimensions match.
    pub(crate) fn product(&self, other: &Matrix) -> Matrix {
        let n = self.dimension;
        let cols = other.transpose();
        let mut res = Matrix::zeros(n);
        for r in 0..n {
            for c in 0..n {
                res[(r, c)] = self.row_dot(r, cols.row_slice(c));
            }
        }

        res
    }

    fn row_slice(&self, row: usize) -> &[f64] {
        let n = self.dimension;
        &self.data[row * n..(row + 1) * n]
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row * self.dimension) + col]
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.dimension || col >= self.dimension {
            return Err(Error::OutOfBounds { row, col, dimension: self.dimension });
        }

        Ok(())
    }

    fn check_same_dimension(&self, other: &Matrix) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(Error::DimensionMismatch {
                left: self.dimension,
                right: other.dimension,
            });
        }

        Ok(())
    }

    fn check_has_submatrix(&self) -> Result<()> {
        if self.dimension < 3 {
            return Err(Error::Undersized { dimension: self.dimension });
        }

        Ok(())
    }

    // May produce a 1x1 matrix, which `new` would refuse.
    fn submatrix_unchecked(&self, row: usize, col: usize) -> Matrix {
        let data = (0..self.dimension)
            .filter(|r| *r != row)
            .flat_map(|r| {
                (0..self.dimension)
                    .filter(move |c| *c != col)
                    .map(move |c| self.get(r, c))
            })
            .collect();

        Matrix { dimension: self.dimension - 1, data }
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> f64 {
        let m = self.submatrix_unchecked(row, col).determinant();
        if (row + col) % 2 == 0 { m } else { -m }
    }
}

impl From<[f64; 4]> for Matrix {
    fn from(data: [f64; 4]) -> Matrix {
        Matrix { dimension: 2, data: data.to_vec() }
    }
}

impl From<[f64; 9]> for Matrix {
    fn from(data: [f64; 9]) -> Matrix {
        Matrix { dimension: 3, data: data.to_vec() }
    }
}

impl From<[f64; 16]> for Matrix {
    fn from(data: [f64; 16]) -> Matrix {
        Matrix { dimension: 4, data: data.to_vec() }
    }
}

/// Indexes by `(row, col)`. Panics when either index is out of bounds.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        assert!(index.0 < self.dimension && index.1 < self.dimension,
            "index {:?} out of bounds for a {}x{} matrix",
            index, self.dimension, self.dimension);

        &self.data[(index.0 * self.dimension) + index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        assert!(index.0 < self.dimension && index.1 < self.dimension,
            "index {:?} out of bounds for a {}x{} matrix",
            index, self.dimension, self.dimension);

        &mut self.data[(index.0 * self.dimension) + index.1]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dimension {
            write!(f, "|")?;
            for c in 0..self.dimension {
                write!(f, " {} |", self.get(r, c))?;
            }

            // Don't put a newline on the final row (allow the user to do that)
            if r != self.dimension - 1 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/* Tests */

#[test]
fn construct_and_inspect() {
    let m: Matrix = [  1.0,  2.0,  3.0,  4.0,
                       5.5,  6.5,  7.5,  8.5,
                       9.0, 10.0, 11.0, 12.0,
                      13.5, 14.5, 15.5, 16.5, ].into();

    assert_eq!(m.at(0, 0).unwrap(), 1.0);
    assert_eq!(m.at(0, 3).unwrap(), 4.0);
    assert_eq!(m.at(1, 0).unwrap(), 5.5);
    assert_eq!(m.at(1, 2).unwrap(), 7.5);
    assert_eq!(m.at(2, 2).unwrap(), 11.0);
    assert_eq!(m.at(3, 0).unwrap(), 13.5);
    assert_eq!(m[(3, 2)], 15.5);
}

#[test]
fn construct_small() {
    let m2 = Matrix::new(2, vec![-3.0, 5.0, 1.0, -2.0]).unwrap();
    let m3 = Matrix::new(3, vec![-3.0, 5.0,  0.0,
                                  1.0, -2.0, -7.0,
                                  0.0,  1.0,  1.0]).unwrap();

    assert_eq!(m2.at(1, 1).unwrap(), -2.0);
    assert_eq!(m3.at(1, 1).unwrap(), -2.0);
    assert_eq!(m3.at(2, 2).unwrap(), 1.0);
}

#[test]
fn construct_wrong_shape() {
    assert!(matches!(
        Matrix::new(3, vec![1.0; 8]),
        Err(Error::Shape { dimension: 3, len: 8 })
    ));
    assert!(matches!(Matrix::new(1, vec![1.0]), Err(Error::Shape { .. })));
}

#[test]
fn out_of_bounds_access() {
    let m = Matrix::identity(3);

    assert!(matches!(m.at(3, 0), Err(Error::OutOfBounds { row: 3, col: 0, dimension: 3 })));
    assert!(matches!(m.at(0, 3), Err(Error::OutOfBounds { .. })));
    assert!(m.row(3).is_err());
    assert!(m.col(7).is_err());
}

#[test]
#[should_panic]
fn out_of_bounds_index_panics() {
    let m = Matrix::identity(2);
    let _ = m[(0, 2)];
}

#[test]
fn rows_and_cols() {
    let m: Matrix = [ 1.0, 2.0, 3.0,
                      4.0, 5.0, 6.0,
                      7.0, 8.0, 9.0, ].into();

    assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
    assert_eq!(m.col(2).unwrap(), vec![3.0, 6.0, 9.0]);
}

#[test]
fn equality() {
    let a: Matrix = [ 1.0, 2.0, 3.0, 4.0,
                      5.0, 6.0, 7.0, 8.0,
                      9.0, 8.0, 7.0, 6.0,
                      5.0, 4.0, 3.0, 2.0, ].into();

    let b: Matrix = [ 1.0, 2.0, 3.0, 4.0,
                      5.0, 6.0, 7.0, 8.0,
                      9.0, 8.0, 7.0, 6.0,
                      5.0, 4.0, 3.0, 2.0000001, ].into();

    let c: Matrix = [ 2.0, 3.0, 4.0, 5.0,
                      6.0, 7.0, 8.0, 9.0,
                      8.0, 7.0, 6.0, 5.0,
                      4.0, 3.0, 2.0, 1.0, ].into();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.equals(&b).unwrap());
    assert!(!a.equals(&c).unwrap());
}

#[test]
fn equality_dimension_mismatch() {
    let a = Matrix::identity(3);
    let b = Matrix::identity(4);

    assert_ne!(a, b);
    assert!(matches!(a.equals(&b), Err(Error::DimensionMismatch { left: 3, right: 4 })));
}

#[test]
fn multiply() {
    let a: Matrix = [ 1.0, 2.0, 3.0, 4.0,
                      5.0, 6.0, 7.0, 8.0,
                      9.0, 8.0, 7.0, 6.0,
                      5.0, 4.0, 3.0, 2.0, ].into();

    let b: Matrix = [ -2.0, 1.0, 2.0,  3.0,
                       3.0, 2.0, 1.0, -1.0,
                       4.0, 3.0, 6.0,  5.0,
                       1.0, 2.0, 7.0,  8.0, ].into();

    let e: Matrix = [ 20.0, 22.0,  50.0,  48.0,
                      44.0, 54.0, 114.0, 108.0,
                      40.0, 58.0, 110.0, 102.0,
                      16.0, 26.0,  46.0,  42.0, ].into();

    assert_eq!(a.multiply(&b).unwrap(), e);
}

#[test]
fn multiply_3x3() {
    let a: Matrix = [ 1.0, 2.0, 3.0,
                      4.0, 5.0, 6.0,
                      7.0, 8.0, 9.0, ].into();

    let e: Matrix = [  30.0,  36.0,  42.0,
                       66.0,  81.0,  96.0,
                      102.0, 126.0, 150.0, ].into();

    assert_eq!(a.multiply(&a).unwrap(), e);
}

#[test]
fn multiply_dimension_mismatch() {
    let a = Matrix::identity(2);
    let b = Matrix::identity(3);

    assert!(matches!(a.multiply(&b), Err(Error::DimensionMismatch { left: 2, right: 3 })));
}

#[test]
fn multiply_tuple() {
    let a: Matrix = [ 1.0, 2.0, 3.0, 4.0,
                      2.0, 4.0, 4.0, 2.0,
                      8.0, 6.0, 4.0, 1.0,
                      0.0, 0.0, 0.0, 1.0, ].into();

    let b = Tuple::tuple(1.0, 2.0, 3.0, 1.0);

    assert_eq!(a.multiply_tuple(&b).unwrap(), Tuple::tuple(18.0, 24.0, 33.0, 1.0));
}

#[test]
fn multiply_tuple_small() {
    let m3: Matrix = [ 1.0, 0.0, 0.0,
                       0.0, 2.0, 0.0,
                       0.0, 0.0, 3.0, ].into();
    let m2: Matrix = [ 0.0, -1.0,
                       1.0,  0.0, ].into();

    let t = Tuple::vector(1.0, 2.0, 3.0);

    assert_eq!(m3.multiply_tuple(&t).unwrap(), Tuple::point(1.0, 4.0, 9.0));
    assert_eq!(m2.multiply_tuple(&t).unwrap(), Tuple::point(-2.0, 1.0, 0.0));
}

#[test]
fn multiply_tuple_wrong_dimension() {
    let m = Matrix::identity(5);

    assert!(m.multiply_tuple(&Tuple::point(1.0, 2.0, 3.0)).is_err());
}

#[test]
fn identity() {
    let i = Matrix::identity(4);
    let a: Matrix = [ 0.0, 1.0,  2.0,  4.0,
                      1.0, 2.0,  4.0,  8.0,
                      2.0, 4.0,  8.0, 16.0,
                      4.0, 8.0, 16.0, 32.0, ].into();

    assert_eq!(i.multiply(&a).unwrap(), a);
    assert_eq!(a.multiply(&i).unwrap(), a);
}

#[test]
fn identity_tuple() {
    let t = Tuple::tuple(1.0, 2.0, 3.0, 4.0);

    assert_eq!(Matrix::identity(4).multiply_tuple(&t).unwrap(), t);
}

#[test]
fn transpose() {
    let a: Matrix = [ 0.0, 9.0, 3.0, 0.0,
                      9.0, 8.0, 0.0, 8.0,
                      1.0, 8.0, 5.0, 3.0,
                      0.0, 0.0, 5.0, 8.0, ].into();

    let t: Matrix = [ 0.0, 9.0, 1.0, 0.0,
                      9.0, 8.0, 8.0, 0.0,
                      3.0, 0.0, 5.0, 5.0,
                      0.0, 8.0, 3.0, 8.0, ].into();

    assert_eq!(t, a.transpose());
    assert_eq!(t.transpose(), a);
}

#[test]
fn transpose_identity() {
    let i = Matrix::identity(4);
    assert_eq!(i, i.transpose());
}

#[test]
fn mat2_determinant() {
    let a: Matrix = [  1.0, 5.0,
                      -3.0, 2.0, ].into();

    assert_eq!(a.determinant(), 17.0);
}

#[test]
fn mat3_submatrix() {
    let a: Matrix = [  1.0, 5.0,  0.0,
                      -3.0, 2.0,  7.0,
                       0.0, 6.0, -3.0, ].into();

    let s: Matrix = [ -3.0, 2.0,
                       0.0, 6.0  ].into();

    assert_eq!(a.submatrix(0, 2).unwrap(), s);
}

#[test]
fn mat4_submatrix() {
    let a: Matrix = [ -6.0, 1.0,  1.0, 6.0,
                      -8.0, 5.0,  8.0, 6.0,
                      -1.0, 0.0,  8.0, 2.0,
                      -7.0, 1.0, -1.0, 1.0, ].into();

    let s: Matrix = [ -6.0,  1.0, 6.0,
                      -8.0,  8.0, 6.0,
                      -7.0, -1.0, 1.0, ].into();

    assert_eq!(a.submatrix(2, 1).unwrap(), s);
}

#[test]
fn submatrix_errors() {
    let m3 = Matrix::identity(3);
    let m2 = Matrix::identity(2);

    assert!(matches!(m3.submatrix(3, 0), Err(Error::OutOfBounds { .. })));
    assert!(matches!(m2.submatrix(0, 0), Err(Error::Undersized { dimension: 2 })));
    assert!(matches!(m2.minor(0, 0), Err(Error::Undersized { .. })));
    assert!(matches!(m2.cofactor(1, 1), Err(Error::Undersized { .. })));
}

#[test]
fn mat3_minor() {
    let a: Matrix = [ 3.0,  5.0,  0.0,
                      2.0, -1.0, -7.0,
                      6.0, -1.0,  5.0, ].into();

    assert_eq!(a.submatrix(1, 0).unwrap().determinant(), 25.0);
    assert_eq!(a.minor(1, 0).unwrap(), 25.0);
}

#[test]
fn mat3_cofactor() {
    let a: Matrix = [ 3.0,  5.0,  0.0,
                      2.0, -1.0, -7.0,
                      6.0, -1.0,  5.0, ].into();

    assert_eq!(a.minor(0, 0).unwrap(), -12.0);
    assert_eq!(a.cofactor(0, 0).unwrap(), -12.0);
    assert_eq!(a.minor(1, 0).unwrap(), 25.0);
    assert_eq!(a.cofactor(1, 0).unwrap(), -25.0);
}

#[test]
fn mat3_determinant() {
    let a: Matrix = [  1.0, 2.0,  6.0,
                      -5.0, 8.0, -4.0,
                       2.0, 6.0,  4.0, ].into();

    assert_eq!(a.cofactor(0, 0).unwrap(), 56.0);
    assert_eq!(a.cofactor(0, 1).unwrap(), 12.0);
    assert_eq!(a.cofactor(0, 2).unwrap(), -46.0);
    assert_eq!(a.determinant(), -196.0);
}

#[test]
fn mat4_determinant() {
    let a: Matrix = [ -2.0, -8.0,  3.0,  5.0,
                      -3.0,  1.0,  7.0,  3.0,
                       1.0,  2.0, -9.0,  6.0,
                      -6.0,  7.0,  7.0, -9.0, ].into();

    assert_eq!(a.cofactor(0, 0).unwrap(), 690.0);
    assert_eq!(a.cofactor(0, 1).unwrap(), 447.0);
    assert_eq!(a.cofactor(0, 2).unwrap(), 210.0);
    assert_eq!(a.cofactor(0, 3).unwrap(), 51.0);
    assert_eq!(a.determinant(), -4071.0);
}

#[test]
fn mat4_invertible() {
    let a: Matrix = [ 6.0,  4.0, 4.0,  4.0,
                      5.0,  5.0, 7.0,  6.0,
                      4.0, -9.0, 3.0, -7.0,
                      9.0,  1.0, 7.0, -6.0, ].into();

    assert_eq!(a.determinant(), -2120.0);
    assert!(a.is_invertible());
}

#[test]
fn mat4_not_invertible() {
    let a: Matrix = [ -4.0,  2.0, -2.0, -3.0,
                       9.0,  6.0,  2.0,  6.0,
                       0.0, -5.0,  1.0, -5.0,
                       0.0,  0.0,  0.0,  0.0, ].into();

    assert_eq!(a.determinant(), 0.0);
    assert!(!a.is_invertible());
    assert!(matches!(a.invert(), Err(Error::NotInvertible { .. })));
}

#[test]
fn mat4_inverse() {
    let a: Matrix = [ -5.0,  2.0,  6.0, -8.0,
                       1.0, -5.0,  1.0,  8.0,
                       7.0,  7.0, -6.0, -7.0,
                       1.0, -3.0,  7.0,  4.0, ].into();

    let b = a.invert().unwrap();

    assert_eq!(a.determinant(), 532.0);
    assert_eq!(a.cofactor(2, 3).unwrap(), -160.0);
    assert!(feq(b[(3, 2)], -160.0 / 532.0));
    assert_eq!(a.cofactor(3, 2).unwrap(), 105.0);
    assert!(feq(b[(2, 3)], 105.0 / 532.0));

    // The expected values are only given to five decimal places.
    let e: Matrix = [  0.21805,  0.45113,  0.24060, -0.04511,
                      -0.80827, -1.45677, -0.44361,  0.52068,
                      -0.07895, -0.22368, -0.05263,  0.19737,
                      -0.52256, -0.81391, -0.30075,  0.30639, ].into();

    assert!(b.approx_eq(&e, 1e-5));
}

#[test]
fn mat4_inverse_second() {
    let a: Matrix = [  8.0, -5.0,  9.0,  2.0,
                       7.0,  5.0,  6.0,  1.0,
                      -6.0,  0.0,  9.0,  6.0,
                      -3.0,  0.0, -9.0, -4.0, ].into();

    let e: Matrix = [ -0.15385, -0.15385, -0.28205, -0.53846,
                      -0.07692,  0.12308,  0.02564,  0.03077,
                       0.35897,  0.35897,  0.43590,  0.92308,
                      -0.69231, -0.69231, -0.76923, -1.92308, ].into();

    assert!(a.invert().unwrap().approx_eq(&e, 1e-5));
}

#[test]
fn mat2_and_mat3_inverse() {
    let a: Matrix = [ 4.0, 7.0,
                      2.0, 6.0, ].into();
    let b: Matrix = [ 2.0, 0.0, 0.0,
                      0.0, 4.0, 0.0,
                      0.0, 0.0, 8.0, ].into();

    let a_inv: Matrix = [  0.6, -0.7,
                          -0.2,  0.4, ].into();
    let b_inv: Matrix = [ 0.5, 0.0,   0.0,
                          0.0, 0.25,  0.0,
                          0.0, 0.0, 0.125, ].into();

    assert_eq!(a.invert().unwrap(), a_inv);
    assert_eq!(b.invert().unwrap(), b_inv);
}

#[test]
fn mat4_inverse_mult() {
    let a: Matrix = [  3.0, -9.0,  7.0,  3.0,
                       3.0, -8.0,  2.0, -9.0,
                      -4.0,  4.0,  4.0,  1.0,
                      -6.0,  5.0, -1.0,  1.0, ].into();

    let b: Matrix = [ 8.0,  2.0, 2.0, 2.0,
                      3.0, -1.0, 7.0, 0.0,
                      7.0,  0.0, 5.0, 4.0,
                      6.0, -2.0, 0.0, 5.0  ].into();

    let c = a.multiply(&b).unwrap();

    assert_eq!(c.multiply(&b.invert().unwrap()).unwrap(), a);
}

#[test]
fn display() {
    let a: Matrix = [ 1.0, -2.0,
                      0.5,  4.0, ].into();

    assert_eq!(a.to_string(), "| 1 | -2 |\n| 0.5 | 4 |");
}

#[test]
fn serde_round_trip() {
    let a: Matrix = [ 1.0, 2.0,
                      3.0, 4.0, ].into();

    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, r#"{"dimension":2,"data":[1.0,2.0,3.0,4.0]}"#);
    assert_eq!(serde_json::from_str::<Matrix>(&json).unwrap(), a);
}

#[test]
fn serde_rejects_bad_shape() {
    let json = r#"{"dimension":3,"data":[1.0,2.0,3.0,4.0]}"#;

    assert!(serde_json::from_str::<Matrix>(json).is_err());
}
