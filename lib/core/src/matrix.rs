use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A dense square matrix of similarity scores, stored row-major.
///
/// Rows and columns are both indexed by catalog position, so entry `(i, j)`
/// is the precomputed score between item `i` and item `j`. The matrix never
/// changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquareMatrix {
    order: usize,
    data: Vec<f32>,
}

impl SquareMatrix {
    /// Build a matrix from row vectors, validating that every row has as many
    /// entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let order = rows.len();
        let mut data = Vec::with_capacity(order * order);
        for row in &rows {
            if row.len() != order {
                return Err(Error::DimensionMismatch {
                    expected: order,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { order, data })
    }

    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Row `i` as a slice of length `order`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.order..(i + 1) * self.order]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.order + j]
    }
}

impl Add for &SquareMatrix {
    type Output = SquareMatrix;

    fn add(self, other: &SquareMatrix) -> SquareMatrix {
        assert_eq!(self.order, other.order);
        SquareMatrix {
            order: self.order,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Mul<f32> for &SquareMatrix {
    type Output = SquareMatrix;

    fn mul(self, scalar: f32) -> SquareMatrix {
        SquareMatrix {
            order: self.order,
            data: self.data.iter().map(|x| x * scalar).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = SquareMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_scale_and_add() {
        let a = SquareMatrix::from_rows(vec![vec![1.0, 0.2], vec![0.2, 1.0]]).unwrap();
        let b = SquareMatrix::from_rows(vec![vec![1.0, 0.4], vec![0.4, 1.0]]).unwrap();

        let blended = &(&a * 0.5) + &(&b * 2.0);
        assert!((blended.get(0, 0) - 2.5).abs() < 1e-6);
        assert!((blended.get(0, 1) - 0.9).abs() < 1e-6);
        assert!((blended.get(1, 0) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_row_access() {
        let m = SquareMatrix::from_rows(vec![
            vec![1.0, 0.2, 0.9],
            vec![0.2, 1.0, 0.3],
            vec![0.9, 0.3, 1.0],
        ])
        .unwrap();
        assert_eq!(m.order(), 3);
        assert_eq!(m.row(2), &[0.9, 0.3, 1.0]);
    }
}
