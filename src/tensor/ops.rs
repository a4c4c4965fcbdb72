//! Arithmetic operators for [`Tensor`].
//!
//! Elementwise `+`/`-` only type-check for identical shapes. `*` between two
//! tensors is the matrix product and only type-checks when the inner
//! dimensions agree. `*`/`/` with a bare number scale every element; the number
//! may sit on either side of `*`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use super::Tensor;

impl<T: Copy, const R: usize, const C: usize> Tensor<T, R, C> {
    /// Multiplies every element by `k`.
    ///
    /// `k` can be any type the element type knows how to multiply by.
    pub fn scale<K: Copy>(self, k: K) -> Self
    where
        T: Mul<K, Output = T>,
    {
        self.map(|e| e * k)
    }

    /// Divides every element by `k`. Division by zero follows the element
    /// type's own rules.
    pub fn unscale<K: Copy>(self, k: K) -> Self
    where
        T: Div<K, Output = T>,
    {
        self.map(|e| e / k)
    }

    /// Matrix product `(R x C) * (C x K)`.
    pub fn matmul<const K: usize>(&self, rhs: &Tensor<T, C, K>) -> Tensor<T, R, K>
    where
        T: Zero + Mul<Output = T>,
    {
        Tensor::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|k| {
                (0..C).fold(T::zero(), |sum, n| sum + self.rows[r][n] * rhs.rows[n][k])
            })
        }))
    }
}

impl<T, const R: usize, const C: usize> Neg for Tensor<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<T, const R: usize, const C: usize> Add for Tensor<T, R, C>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T, const R: usize, const C: usize> Sub for Tensor<T, R, C>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T, const R: usize, const C: usize> AddAssign for Tensor<T, R, C>
where
    T: Copy + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        for (e, &other) in self.iter_mut().zip(rhs.iter()) {
            *e += other;
        }
    }
}

impl<T, const R: usize, const C: usize> SubAssign for Tensor<T, R, C>
where
    T: Copy + SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        for (e, &other) in self.iter_mut().zip(rhs.iter()) {
            *e -= other;
        }
    }
}

impl<T, const R: usize, const N: usize, const C: usize> Mul<Tensor<T, N, C>> for Tensor<T, R, N>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Tensor<T, R, C>;

    fn mul(self, rhs: Tensor<T, N, C>) -> Tensor<T, R, C> {
        self.matmul(&rhs)
    }
}

/// Scalar `*`, `/`, `*=` and `/=` for primitive element types. Generic
/// impls would overlap with the matrix product, so each type is spelled out.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {$(
        impl<const R: usize, const C: usize> Mul<$scalar> for Tensor<$scalar, R, C> {
            type Output = Self;

            fn mul(self, k: $scalar) -> Self {
                self.scale(k)
            }
        }

        impl<const R: usize, const C: usize> Mul<Tensor<$scalar, R, C>> for $scalar {
            type Output = Tensor<$scalar, R, C>;

            fn mul(self, tensor: Tensor<$scalar, R, C>) -> Tensor<$scalar, R, C> {
                tensor.scale(self)
            }
        }

        impl<const R: usize, const C: usize> Div<$scalar> for Tensor<$scalar, R, C> {
            type Output = Self;

            fn div(self, k: $scalar) -> Self {
                self.unscale(k)
            }
        }

        impl<const R: usize, const C: usize> MulAssign<$scalar> for Tensor<$scalar, R, C> {
            fn mul_assign(&mut self, k: $scalar) {
                for e in self.iter_mut() {
                    *e *= k;
                }
            }
        }

        impl<const R: usize, const C: usize> DivAssign<$scalar> for Tensor<$scalar, R, C> {
            fn div_assign(&mut self, k: $scalar) {
                for e in self.iter_mut() {
                    *e /= k;
                }
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
