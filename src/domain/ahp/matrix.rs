//! Pairwise comparison matrix value object.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// How strictly reciprocity (`M[i][j] * M[j][i] == 1`) is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reciprocity {
    /// Accept any positive square matrix, reciprocal or not.
    #[default]
    Lenient,
    /// Reject matrices whose reciprocal pairs or diagonal stray from 1
    /// by more than `tolerance`.
    Strict { tolerance: f64 },
}

/// Square table of positive ratios; entry (i, j) says how strongly item i
/// is preferred over item j.
///
/// Construction guarantees n >= 1, every row has n entries, and every entry
/// is finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseComparisonMatrix {
    /// Validates and wraps raw rows using the lenient reciprocity policy.
    ///
    /// # Errors
    /// `AhpError::InvalidMatrix` if the rows are empty, ragged, non-square,
    /// or contain a non-positive or non-finite entry.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::invalid_matrix("Matrix must have at least one row"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AhpError::invalid_matrix(format!(
                    "Matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::invalid_matrix(format!(
                        "Entry ({}, {}) must be a positive finite number, got {}",
                        i, j, value
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Validates rows and then applies the given reciprocity policy.
    pub fn with_policy(rows: Vec<Vec<f64>>, policy: Reciprocity) -> Result<Self, AhpError> {
        let matrix = Self::new(rows)?;
        if let Reciprocity::Strict { tolerance } = policy {
            matrix.check_reciprocity(tolerance)?;
        }
        Ok(matrix)
    }

    /// Checks the diagonal and every reciprocal pair against `tolerance`.
    pub fn check_reciprocity(&self, tolerance: f64) -> Result<(), AhpError> {
        let n = self.order();
        for i in 0..n {
            if (self.rows[i][i] - 1.0).abs() > tolerance {
                return Err(AhpError::invalid_matrix(format!(
                    "Diagonal entry ({}, {}) must be 1, got {}",
                    i, i, self.rows[i][i]
                )));
            }
            for j in (i + 1)..n {
                let product = self.rows[i][j] * self.rows[j][i];
                if (product - 1.0).abs() > tolerance {
                    return Err(AhpError::invalid_matrix(format!(
                        "Entries ({}, {}) and ({}, {}) are not reciprocal: {} * {} = {}",
                        i, j, j, i, self.rows[i][j], self.rows[j][i], product
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the matrix order n.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns entry (i, j).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseComparisonMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PairwiseComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseComparisonMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saaty_3x3() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
        ]
    }

    #[test]
    fn accepts_positive_square_matrix() {
        let matrix = PairwiseComparisonMatrix::new(saaty_3x3()).unwrap();
        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.get(0, 2), 5.0);
    }

    #[test]
    fn accepts_single_entry_matrix() {
        let matrix = PairwiseComparisonMatrix::new(vec![vec![1.0]]).unwrap();
        assert_eq!(matrix.order(), 1);
    }

    #[test]
    fn rejects_empty_matrix() {
        let result = PairwiseComparisonMatrix::new(vec![]);
        assert!(matches!(result, Err(AhpError::InvalidMatrix { .. })));
    }

    #[test]
    fn rejects_non_square_matrix() {
        let result = PairwiseComparisonMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 2.0]]);
        match result {
            Err(AhpError::InvalidMatrix { reason }) => assert!(reason.contains("square")),
            other => panic!("expected InvalidMatrix, got {:?}", other),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = PairwiseComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.5]]);
        assert!(matches!(result, Err(AhpError::InvalidMatrix { .. })));
    }

    #[test]
    fn rejects_zero_and_negative_entries() {
        let zero = PairwiseComparisonMatrix::new(vec![vec![1.0, 0.0], vec![1.0, 1.0]]);
        let negative = PairwiseComparisonMatrix::new(vec![vec![1.0, -2.0], vec![0.5, 1.0]]);
        assert!(matches!(zero, Err(AhpError::InvalidMatrix { .. })));
        assert!(matches!(negative, Err(AhpError::InvalidMatrix { .. })));
    }

    #[test]
    fn rejects_nan_entries() {
        let result = PairwiseComparisonMatrix::new(vec![vec![1.0, f64::NAN], vec![1.0, 1.0]]);
        assert!(matches!(result, Err(AhpError::InvalidMatrix { .. })));
    }

    #[test]
    fn lenient_policy_accepts_non_reciprocal_matrix() {
        let rows = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        assert!(PairwiseComparisonMatrix::with_policy(rows, Reciprocity::Lenient).is_ok());
    }

    #[test]
    fn strict_policy_rejects_non_reciprocal_matrix() {
        let rows = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        let result =
            PairwiseComparisonMatrix::with_policy(rows, Reciprocity::Strict { tolerance: 1e-6 });
        match result {
            Err(AhpError::InvalidMatrix { reason }) => assert!(reason.contains("reciprocal")),
            other => panic!("expected InvalidMatrix, got {:?}", other),
        }
    }

    #[test]
    fn strict_policy_rejects_non_unit_diagonal() {
        let rows = vec![vec![2.0, 1.0], vec![1.0, 1.0]];
        let result =
            PairwiseComparisonMatrix::with_policy(rows, Reciprocity::Strict { tolerance: 1e-6 });
        assert!(matches!(result, Err(AhpError::InvalidMatrix { .. })));
    }

    #[test]
    fn strict_policy_tolerates_rounded_reciprocals() {
        let rows = vec![vec![1.0, 3.0], vec![0.333, 1.0]];
        let result =
            PairwiseComparisonMatrix::with_policy(rows, Reciprocity::Strict { tolerance: 0.01 });
        assert!(result.is_ok());
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let matrix: PairwiseComparisonMatrix =
            serde_json::from_str("[[1.0, 2.0], [0.5, 1.0]]").unwrap();
        assert_eq!(matrix.order(), 2);
    }

    #[test]
    fn deserialization_rejects_non_square_input() {
        let result: Result<PairwiseComparisonMatrix, _> =
            serde_json::from_str("[[1.0, 2.0, 3.0], [0.5, 1.0, 1.0]]");
        assert!(result.is_err());
    }
}
