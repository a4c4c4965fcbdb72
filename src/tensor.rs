//! Fixed-shape numeric tensors.
//!
//! A [`Tensor<T, R, C>`] holds `R * C` elements in row-major order. The shape is
//! part of the type, so elementwise operations between mismatched shapes and
//! matrix products with mismatched inner dimensions are rejected at compile time.
//!
//! Vectors, covectors and scalars are aliases over the same type:
//!
//! ```
//! use pinhole::tensor::{Covector, Matrix, Vector};
//! use pinhole::tensor;
//!
//! let m: Matrix<i32, 2, 3> = tensor![-11, 9, 4, 0, -9, 2];
//! let v = Vector::from_column([1, 0, 2]);
//! assert_eq!(m * v, Vector::from_column([-3, 4]));
//! assert_eq!(m.row(1), Covector::from_row([0, -9, 2]));
//! ```

mod metric;
mod ops;

pub use metric::{dot, length, length_squared, normalize};

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::TensorError;

/// Fixed-shape `R x C` container of numeric elements, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor<T, const R: usize, const C: usize> {
    rows: [[T; C]; R],
}

/// General `R x C` matrix.
pub type Matrix<T, const R: usize, const C: usize> = Tensor<T, R, C>;

/// Column vector (`R x 1`).
pub type Vector<T, const R: usize> = Tensor<T, R, 1>;

/// Row covector (`1 x C`), dual to [`Vector`].
pub type Covector<T, const C: usize> = Tensor<T, 1, C>;

/// Single value wrapped as a `1 x 1` tensor.
pub type Scalar<T> = Tensor<T, 1, 1>;

/// Position in 3D space.
pub type Point3<T = f64> = Vector<T, 3>;

/// Direction or displacement in 3D space.
pub type Vec3<T = f64> = Vector<T, 3>;

/// Plane in homogeneous coordinates, as a row covector.
pub type Plane<T = f64> = Covector<T, 4>;

/// Builds a tensor from a literal element list, row-major.
///
/// The element count is checked against the target shape; a wrong count panics
/// with the [`TensorError::ShapeMismatch`] message instead of truncating.
#[macro_export]
macro_rules! tensor {
    ($($element:expr),+ $(,)?) => {
        match $crate::tensor::Tensor::from_elements(&[$($element),+]) {
            Ok(tensor) => tensor,
            Err(err) => panic!("{}", err),
        }
    };
}

/// Shorthand for a three-component column vector.
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Tensor::from_rows([[x], [y], [z]])
}

/// Point from an `[x, y, z]` array.
pub fn point<T>([x, y, z]: [T; 3]) -> Point3<T> {
    vec3(x, y, z)
}

impl<T, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Builds a tensor from nested rows.
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { rows }
    }

    /// Consumes the tensor, returning its rows.
    pub fn into_rows(self) -> [[T; C]; R] {
        self.rows
    }

    /// Number of rows.
    pub const fn row_count(&self) -> usize {
        R
    }

    /// Number of columns.
    pub const fn column_count(&self) -> usize {
        C
    }

    /// Flat row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    /// Mutable flat row-major view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }

    /// Iterates the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably iterates the elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Tensor<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Tensor {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }
}

impl<T: Copy, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Tensor with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            rows: [[value; C]; R],
        }
    }

    /// Builds a tensor from an explicit row-major element list.
    ///
    /// The list must hold exactly `R * C` values.
    pub fn from_elements(elements: &[T]) -> Result<Self, TensorError> {
        if elements.len() != R * C {
            return Err(TensorError::ShapeMismatch {
                rows: R,
                columns: C,
                expected: R * C,
                actual: elements.len(),
            });
        }

        Ok(Self {
            rows: std::array::from_fn(|r| std::array::from_fn(|c| elements[r * C + c])),
        })
    }

    /// Element at row `r`, column `c`. Panics when out of range.
    pub fn get(&self, r: usize, c: usize) -> T {
        self.rows[r][c]
    }

    /// Extracts row `i` as a covector. Panics unless `i < R`.
    pub fn row(&self, i: usize) -> Covector<T, C> {
        assert!(i < R, "row {i} out of range for a {R}x{C} tensor");
        Tensor::from_rows([self.rows[i]])
    }

    /// Extracts column `j` as a vector. Panics unless `j < C`.
    pub fn column(&self, j: usize) -> Vector<T, R> {
        assert!(j < C, "column {j} out of range for a {R}x{C} tensor");
        Tensor::from_rows(self.rows.map(|row| [row[j]]))
    }

    /// Combines two same-shaped tensors element by element.
    pub fn zip_with<U, F>(self, other: Tensor<T, R, C>, mut f: F) -> Tensor<U, R, C>
    where
        F: FnMut(T, T) -> U,
    {
        Tensor {
            rows: std::array::from_fn(|r| {
                std::array::from_fn(|c| f(self.rows[r][c], other.rows[r][c]))
            }),
        }
    }

    /// `index`-th element of a vector or covector.
    ///
    /// Panics if the tensor is not one-dimensional or too short.
    pub fn coordinate(&self, index: usize) -> T {
        assert!(
            R == 1 || C == 1,
            "coordinates are only defined for vectors and covectors, got a {R}x{C} tensor"
        );
        assert!(
            index < R * C,
            "coordinate {index} out of range for a {}-element tensor",
            R * C
        );
        self.as_slice()[index]
    }

    /// First coordinate.
    pub fn x(&self) -> T {
        self.coordinate(0)
    }

    /// Second coordinate.
    pub fn y(&self) -> T {
        self.coordinate(1)
    }

    /// Third coordinate.
    pub fn z(&self) -> T {
        self.coordinate(2)
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Zero-filled tensor.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Copy + Zero + One, const N: usize> Tensor<T, N, N> {
    /// Square identity matrix.
    pub fn identity() -> Self {
        Self {
            rows: std::array::from_fn(|r| {
                std::array::from_fn(|c| if r == c { T::one() } else { T::zero() })
            }),
        }
    }
}

impl<T: Copy, const R: usize> Tensor<T, R, 1> {
    /// Column vector from its components.
    pub fn from_column(values: [T; R]) -> Self {
        Self {
            rows: values.map(|value| [value]),
        }
    }
}

impl<T, const C: usize> Tensor<T, 1, C> {
    /// Row covector from its components.
    pub fn from_row(values: [T; C]) -> Self {
        Self { rows: [values] }
    }
}

impl<T> Tensor<T, 1, 1> {
    /// Wraps a single value.
    pub fn from_value(value: T) -> Self {
        Self {
            rows: [[value]],
        }
    }
}

impl<T: Copy> Tensor<T, 1, 1> {
    /// Unwraps the sole element.
    pub fn value(self) -> T {
        self.rows[0][0]
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Default for Tensor<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Tensor<T, R, C> {
    type Error = TensorError;

    fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
        Self::from_elements(elements)
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<Vec<T>> for Tensor<T, R, C> {
    type Error = TensorError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_elements(&elements)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Tensor<T, R, C> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.rows[r][c]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Tensor<T, R, C> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.rows[r][c]
    }
}

/// One row per line, elements separated by `", "`. Formatter flags such as
/// precision apply to every element.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Tensor<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, element) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(element, f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_construction_is_zero_filled() {
        let m: Matrix<i32, 4, 2> = Tensor::default();
        assert!(m.iter().all(|&e| e == 0));
        assert_eq!(m.row_count(), 4);
        assert_eq!(m.column_count(), 2);

        let s: Scalar<f64> = Tensor::zeros();
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn literal_list_fills_row_major() {
        let m: Matrix<i32, 4, 3> = tensor![-9, 8, 21, 0, -7, 0, 6, 1, 4, -2, 0, 6];
        assert_eq!(m.get(0, 2), 21);
        assert_eq!(m[(1, 1)], -7);
        assert_eq!(m[(3, 0)], -2);
        assert_eq!(m.as_slice().len(), 12);
    }

    #[test]
    fn element_count_mismatch_is_rejected_not_truncated() {
        let short = Matrix::<i32, 2, 2>::from_elements(&[1, 0, 0]);
        assert_eq!(
            short,
            Err(TensorError::ShapeMismatch {
                rows: 2,
                columns: 2,
                expected: 4,
                actual: 3,
            })
        );

        let long: Result<Vector<f64, 3>, _> = vec![1.0, 2.0, 3.0, 4.0].try_into();
        assert!(matches!(
            long,
            Err(TensorError::ShapeMismatch { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn literal_macro_panics_on_wrong_count() {
        let _: Covector<i32, 4> = tensor![1, 2, 3];
    }

    #[test]
    fn row_and_column_extraction() {
        let m: Matrix<i32, 2, 3> = tensor![-11, 9, 4, 0, -9, 2];
        assert_eq!(m.row(0), Covector::from_row([-11, 9, 4]));
        assert_eq!(m.row(1), Covector::from_row([0, -9, 2]));
        assert_eq!(m.column(2), Vector::from_column([4, 2]));
    }

    #[test]
    #[should_panic(expected = "row 2 out of range")]
    fn row_out_of_range_panics() {
        let m: Matrix<i32, 2, 3> = Tensor::zeros();
        let _ = m.row(2);
    }

    #[test]
    fn coordinates_of_vectors_and_covectors() {
        let v = vec3(1.5, -2.0, 3.25);
        assert_eq!((v.x(), v.y(), v.z()), (1.5, -2.0, 3.25));

        let c = Covector::from_row([-1, -1, 9, 5]);
        assert_eq!((c.x(), c.y(), c.z()), (-1, -1, 9));

        assert_eq!(Scalar::from_value(42).value(), 42);
    }

    #[test]
    fn point_and_vec3_agree() {
        let p = point([1.5, -2.0, 4.0]);
        assert_eq!(p, vec3(1.5, -2.0, 4.0));
        assert_eq!((p.x(), p.y(), p.z()), (1.5, -2.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "coordinate 2 out of range")]
    fn z_of_two_element_vector_panics() {
        let _ = Vector::from_column([1, 0]).z();
    }

    #[test]
    #[should_panic(expected = "only defined for vectors")]
    fn coordinates_of_matrix_panic() {
        let _ = Matrix::<i32, 2, 2>::identity().x();
    }

    #[test]
    fn plane_applied_to_homogeneous_point() {
        let plane: Plane = Covector::from_row([0.0, 1.0, 0.0, -2.0]);
        let point = Vector::from_column([3.0, 5.0, 1.0, 1.0]);
        assert_eq!((plane * point).value(), 3.0);
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let m: Matrix<i32, 2, 2> = tensor![1, 4, -2, 6];
        assert_eq!(m.to_string(), "1, 4\n-2, 6");

        let v = vec3(0.5, 0.25, 1.0);
        assert_eq!(format!("{v:.2}"), "0.50\n0.25\n1.00");
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut m: Matrix<i32, 2, 2> = Tensor::zeros();
        m[(0, 1)] = 7;
        assert_eq!(m.as_slice(), &[0, 7, 0, 0]);
    }
}
