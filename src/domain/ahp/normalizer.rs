//! Matrix Normalizer - column-sum normalization and row-average weights.

use serde::{Deserialize, Serialize};

use super::{AhpError, PairwiseComparisonMatrix, WeightVector};

/// Output of the normalization stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    /// `column_sums[j] = Σ_i M[i][j]`.
    pub column_sums: Vec<f64>,
    /// `normalized_matrix[i][j] = M[i][j] / column_sums[j]`.
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Row averages of the normalized matrix.
    pub weights: WeightVector,
}

/// Approximates the principal eigenvector of a comparison matrix.
pub struct MatrixNormalizer;

impl MatrixNormalizer {
    /// Sums each column of the matrix.
    pub fn column_sums(matrix: &PairwiseComparisonMatrix) -> Vec<f64> {
        let n = matrix.order();
        (0..n)
            .map(|j| matrix.rows().iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Normalizes the matrix by its column sums and averages each row.
    ///
    /// # Algorithm
    /// 1. `column_sums[j] = Σ_i M[i][j]`
    /// 2. `normalized[i][j] = M[i][j] / column_sums[j]`
    /// 3. `weights[i] = mean_j(normalized[i][j])`
    ///
    /// # Errors
    /// `AhpError::DegenerateMatrix` if a column sum is zero or not finite.
    /// Validated entries are positive, so this only happens on overflow.
    pub fn normalize(matrix: &PairwiseComparisonMatrix) -> Result<NormalizedMatrix, AhpError> {
        let n = matrix.order();
        let column_sums = Self::column_sums(matrix);

        if let Some((column, &sum)) = column_sums
            .iter()
            .enumerate()
            .find(|(_, sum)| **sum == 0.0 || !sum.is_finite())
        {
            return Err(AhpError::DegenerateMatrix { column, sum });
        }

        let normalized_matrix: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .collect()
            })
            .collect();

        let weights = normalized_matrix
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect::<Vec<_>>();

        Ok(NormalizedMatrix {
            column_sums,
            normalized_matrix,
            weights: WeightVector::new(weights),
        })
    }
}
