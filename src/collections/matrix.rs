//! A dense two-dimensional matrix with fixed dimensions.
//!
//! Storage is one contiguous row-major block; dimensions are fixed at
//! construction and every operation preserves them. Multiplication is
//! provided in checked form (shape mismatch is an error) and as operators
//! that panic on mismatch.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Index, IndexMut, Mul};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// The error type for matrix constructions and products with mismatched
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError;

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("matrix dimensions do not match")
    }
}

impl std::error::Error for ShapeError {}

/// A dense row-major matrix whose dimensions are fixed at construction.
///
/// # Examples
/// ```
/// use gyre::Matrix;
///
/// let a = Matrix::from_rows(2, 2, [1, 2, 3, 4]).unwrap();
/// let b = Matrix::from_rows(2, 2, [5, 6, 7, 8]).unwrap();
/// let product = a.mul_checked(&b).unwrap();
/// assert_eq!(product[(0, 0)], 19);
/// assert_eq!(product[(1, 1)], 50);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a `rows x cols` matrix of default values.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(rows * cols);
        data.resize_with(rows * cols, T::default);
        Self { data, rows, cols }
    }

    /// Creates a `rows x cols` matrix of clones of one element.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, element: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![element; rows * cols],
            rows,
            cols,
        }
    }

    /// Wraps an existing row-major vector as a `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns [`ShapeError`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, ShapeError> {
        if data.len() != rows * cols {
            return Err(ShapeError);
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from exactly `rows * cols` row-major elements.
    ///
    /// # Errors
    /// Returns [`ShapeError`] if the iterator yields any other number of
    /// elements.
    pub fn from_rows<I>(rows: usize, cols: usize, elements: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for element in elements {
            if data.len() == rows * cols {
                return Err(ShapeError);
            }
            data.push(element);
        }
        if data.len() != rows * cols {
            return Err(ShapeError);
        }
        Ok(Self { data, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total element count (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for a zero-area matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[col + row * self.cols])
        } else {
            None
        }
    }

    /// Returns the element at `(row, col)` mutably, or [`None`] if out of
    /// bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[col + row * self.cols])
        } else {
            None
        }
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Swaps contents with another matrix — three moves through a temporary.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Multiplies every element by `scalar` in place.
    pub fn scale(&mut self, scalar: &T)
    where
        T: Mul<Output = T> + Clone,
    {
        for element in &mut self.data {
            *element = element.clone() * scalar.clone();
        }
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// # Errors
    /// Returns [`ShapeError`] unless `self.cols() == rhs.rows()`.
    pub fn mul_checked(&self, rhs: &Self) -> Result<Self, ShapeError>
    where
        T: Zero + Mul<Output = T> + Add<Output = T> + Clone,
    {
        if self.cols != rhs.rows {
            return Err(ShapeError);
        }
        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc
                        + self.data[k + row * self.cols].clone()
                            * rhs.data[col + k * rhs.cols].clone();
                }
                data.push(acc);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: rhs.cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col).expect("matrix index out of bounds")
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col).expect("matrix index out of bounds")
    }
}

impl<T> Mul<&Matrix<T>> for &Matrix<T>
where
    T: Zero + Mul<Output = T> + Add<Output = T> + Clone,
{
    type Output = Matrix<T>;

    /// # Panics
    /// Panics on a dimension mismatch; see [`Matrix::mul_checked`].
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.mul_checked(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Mul<T> for Matrix<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.scale(&scalar);
        self
    }
}

impl<T: Debug> Debug for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rows = f.debug_list();
        for row in 0..self.rows {
            rows.entry(&&self.data[row * self.cols..(row + 1) * self.cols]);
        }
        rows.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_checks_the_element_count() {
        assert!(Matrix::from_rows(2, 3, 0..6).is_ok());
        assert_eq!(Matrix::from_rows(2, 3, 0..5), Err(ShapeError));
        assert_eq!(Matrix::from_rows(2, 3, 0..7), Err(ShapeError));

        assert!(Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).is_ok());
        assert_eq!(Matrix::from_vec(vec![1, 2, 3], 2, 2), Err(ShapeError));
    }

    #[test]
    fn addressing_is_row_major() {
        let m = Matrix::from_rows(2, 3, 1..=6).unwrap();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn scalar_multiplication() {
        let m = Matrix::from_rows(2, 2, [1, 2, 3, 4]).unwrap() * 3;
        assert_eq!(m, Matrix::from_rows(2, 2, [3, 6, 9, 12]).unwrap());
    }

    #[test]
    fn matrix_multiplication() {
        let a = Matrix::from_rows(2, 3, [1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_rows(3, 2, [7, 8, 9, 10, 11, 12]).unwrap();
        let product = &a * &b;
        assert_eq!(product.rows(), 2);
        assert_eq!(product.cols(), 2);
        assert_eq!(product, Matrix::from_rows(2, 2, [58, 64, 139, 154]).unwrap());

        assert_eq!(a.mul_checked(&a), Err(ShapeError));
    }

    #[test]
    fn default_fill_and_mutation() {
        let mut m = Matrix::<i32>::new(2, 2);
        assert_eq!(m[(1, 1)], 0);
        m[(1, 1)] = 7;
        assert_eq!(m.get(1, 1), Some(&7));
    }

    #[test]
    fn serde_round_trips_with_dimensions() {
        let m = Matrix::from_rows(2, 2, [1, 2, 3, 4]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
