//! Transpose, square root and the Euclidean metric on vectors.

use std::ops::Mul;

use num_traits::{Float, Zero};

use super::{Scalar, Tensor, Vector};

impl<T: Copy, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Swaps rows and columns.
    pub fn transpose(&self) -> Tensor<T, C, R> {
        Tensor::from_rows(std::array::from_fn(|c| std::array::from_fn(|r| self.rows[r][c])))
    }
}

impl<T: Copy, const N: usize> Tensor<T, N, N> {
    /// Transposes a square tensor in place by swapping each off-diagonal pair.
    /// The diagonal is left untouched.
    pub fn transpose_in_place(&mut self) {
        for r in 0..N {
            for c in (r + 1)..N {
                let upper = self.rows[r][c];
                self.rows[r][c] = self.rows[c][r];
                self.rows[c][r] = upper;
            }
        }
    }

    /// By-value form of [`transpose_in_place`](Self::transpose_in_place).
    pub fn transposed_square(mut self) -> Self {
        self.transpose_in_place();
        self
    }
}

impl<T: Float, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Elementwise square root. Negative elements become NaN.
    pub fn sqrt(self) -> Self {
        self.map(T::sqrt)
    }
}

impl<T: Copy, const R: usize> Tensor<T, R, 1> {
    /// See [`length_squared`].
    pub fn length_squared(&self) -> Scalar<T>
    where
        T: Zero + Mul<Output = T>,
    {
        length_squared(self)
    }

    /// See [`dot`].
    pub fn dot(&self, other: &Self) -> T
    where
        T: Zero + Mul<Output = T>,
    {
        dot(self, other)
    }
}

impl<T: Float, const R: usize> Tensor<T, R, 1> {
    /// See [`length`].
    pub fn length(&self) -> T {
        length(self)
    }

    /// See [`normalize`].
    pub fn normalize(&self) -> Self {
        normalize(self)
    }
}

/// Squared Euclidean length, `transpose(v) * v`.
pub fn length_squared<T, const R: usize>(v: &Vector<T, R>) -> Scalar<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    v.transpose() * *v
}

/// Euclidean length.
pub fn length<T: Float, const R: usize>(v: &Vector<T, R>) -> T {
    length_squared(v).sqrt().value()
}

/// `v` scaled to unit length. A zero vector yields NaN components.
pub fn normalize<T: Float, const R: usize>(v: &Vector<T, R>) -> Vector<T, R> {
    v.unscale(length(v))
}

/// Inner product of two vectors.
pub fn dot<T, const R: usize>(a: &Vector<T, R>, b: &Vector<T, R>) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    (a.transpose() * *b).value()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tensor;
    use crate::tensor::{vec3, Covector, Matrix};

    #[test]
    fn square_transpose() {
        let m: Matrix<i32, 2, 2> = tensor![1, -3, -2, -1];
        assert_eq!(m.transpose(), tensor![1, -2, -3, -1]);

        let m: Matrix<i32, 3, 3> = tensor![2, 4, -5, 7, 1, 0, -3, 12, 10];
        assert_eq!(m.transpose(), tensor![2, 7, -3, 4, 1, 12, -5, 0, 10]);
    }

    #[test]
    fn rectangular_transpose() {
        let m: Matrix<i32, 2, 5> = tensor![1, 9, -2, 4, -2, 1, 1, 0, 6, -3];
        let t: Matrix<i32, 5, 2> = m.transpose();
        assert_eq!(t, tensor![1, 1, 9, 1, -2, 0, 4, 6, -2, -3]);

        let v = Vector::from_column([0, -1, 0, 1]);
        assert_eq!(v.transpose(), Covector::from_row([0, -1, 0, 1]));
        assert_eq!(Covector::from_row([6, 0, 2]).transpose(), Vector::from_column([6, 0, 2]));
    }

    #[test]
    fn in_place_transpose_matches_general_form() {
        let m: Matrix<i32, 4, 4> = tensor![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let mut in_place = m;
        in_place.transpose_in_place();
        assert_eq!(in_place, m.transpose());
        assert_eq!(m.transposed_square().transposed_square(), m);

        let diagonal: Vec<i32> = (0..4).map(|i| in_place[(i, i)]).collect();
        assert_eq!(diagonal, vec![1, 6, 11, 16]);
    }

    #[test]
    fn elementwise_sqrt_propagates_nan() {
        let v = Vector::from_column([4.0, 0.0, -1.0]).sqrt();
        assert_eq!(v.x(), 2.0);
        assert_eq!(v.y(), 0.0);
        assert!(v.z().is_nan());
    }

    #[test]
    fn length_squared_of_integer_vectors() {
        assert_eq!(length_squared(&Vector::from_column([0, -1, 0, 1])).value(), 2);
        assert_eq!(Vector::from_column([2, 2, -2, -2]).length_squared().value(), 16);
    }

    #[test]
    fn length_and_normalize() {
        let v = vec3(3.0, 0.0, 4.0);
        assert_eq!(length(&v), 5.0);
        let unit = normalize(&v);
        assert_relative_eq!(unit.x(), 0.6);
        assert_relative_eq!(unit.z(), 0.8);
        assert_relative_eq!(unit.length(), 1.0);
    }

    #[test]
    fn normalizing_zero_vector_is_not_finite() {
        let unit = vec3(0.0_f64, 0.0, 0.0).normalize();
        assert!(unit.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn dot_product() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-2.0, 0.5, 1.0);
        assert_eq!(dot(&a, &b), 2.0);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}
