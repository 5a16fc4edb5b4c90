//! Consistency Checker - lambda_max, CI, RI and CR for a comparison matrix.

use serde::{Deserialize, Serialize};

use super::{AhpError, PairwiseComparisonMatrix, WeightVector};

/// A matrix is accepted as consistent when CR is strictly below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty random index by matrix order 1..=10.
pub const RANDOM_INDEX_TABLE: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Looks up the random index for a matrix of order `n`.
///
/// Orders beyond the table saturate at the last tabulated value.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        n => RANDOM_INDEX_TABLE
            .get(n - 1)
            .copied()
            .unwrap_or(RANDOM_INDEX_TABLE[RANDOM_INDEX_TABLE.len() - 1]),
    }
}

/// Consistency verdict for one evaluated matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_vector: Vec<f64>,
    pub ci: f64,
    pub ri: f64,
    pub cr: f64,
    pub is_consistent: bool,
}

/// Consistency analysis functions.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Computes `(M · w)[i] / w[i]`, using 0 where `w[i] == 0`.
    pub fn consistency_vector(matrix: &PairwiseComparisonMatrix, weights: &[f64]) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .zip(weights)
            .map(|(row, &own_weight)| {
                let weighted_sum: f64 = row.iter().zip(weights).map(|(m, w)| m * w).sum();
                if own_weight != 0.0 {
                    weighted_sum / own_weight
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Evaluates how far `matrix` deviates from perfect consistency.
    ///
    /// # Algorithm
    /// - `lambda_max = mean(consistency_vector)`
    /// - `CI = (lambda_max - n) / (n - 1)`, or 0 when n = 1
    /// - `RI` from [`random_index`]
    /// - `CR = CI / RI`, or 0 when RI = 0
    ///
    /// # Edge Cases
    /// - n <= 2: RI is 0, so CR is 0 and the matrix is always consistent
    /// - zero weight: that row contributes 0 to the consistency vector
    ///
    /// # Errors
    /// `AhpError::DimensionMismatch` if `weights.len() != n`.
    pub fn check(
        matrix: &PairwiseComparisonMatrix,
        weights: &WeightVector,
    ) -> Result<ConsistencyReport, AhpError> {
        let n = matrix.order();
        if weights.len() != n {
            return Err(AhpError::dimension_mismatch("weights", n, weights.len()));
        }

        let consistency_vector = Self::consistency_vector(matrix, weights);
        let lambda_max = consistency_vector.iter().sum::<f64>() / n as f64;

        let ci = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let ri = random_index(n);
        let cr = if ri != 0.0 { ci / ri } else { 0.0 };

        Ok(ConsistencyReport {
            lambda_max,
            consistency_vector,
            ci,
            ri,
            cr,
            is_consistent: cr < CONSISTENCY_THRESHOLD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::MatrixNormalizer;

    fn report_for(rows: Vec<Vec<f64>>) -> ConsistencyReport {
        let matrix = PairwiseComparisonMatrix::new(rows).unwrap();
        let normalized = MatrixNormalizer::normalize(&matrix).unwrap();
        ConsistencyChecker::check(&matrix, &normalized.weights).unwrap()
    }

    #[test]
    fn random_index_follows_table() {
        assert_eq!(random_index(1), 0.00);
        assert_eq!(random_index(2), 0.00);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(7), 1.32);
        assert_eq!(random_index(10), 1.49);
    }

    #[test]
    fn random_index_saturates_beyond_ten() {
        assert_eq!(random_index(11), 1.49);
        assert_eq!(random_index(25), 1.49);
    }

    #[test]
    fn uniform_matrix_is_perfectly_consistent() {
        let report = report_for(vec![vec![1.0; 3]; 3]);

        assert!((report.lambda_max - 3.0).abs() < 1e-12);
        assert!(report.ci.abs() < 1e-12);
        assert!(report.cr.abs() < 1e-12);
        assert_eq!(report.ri, 0.58);
        assert!(report.is_consistent);
    }

    #[test]
    fn saaty_matrix_is_acceptably_consistent() {
        let report = report_for(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
        ]);

        assert_eq!(report.consistency_vector.len(), 3);
        assert!(report.lambda_max > 3.0);
        assert!(report.cr < CONSISTENCY_THRESHOLD);
        assert!(report.is_consistent);
    }

    #[test]
    fn contradictory_matrix_is_inconsistent() {
        // A > B, B > C, but C strongly > A
        let report = report_for(vec![
            vec![1.0, 5.0, 1.0 / 9.0],
            vec![1.0 / 5.0, 1.0, 5.0],
            vec![9.0, 1.0 / 5.0, 1.0],
        ]);

        assert!(report.cr >= CONSISTENCY_THRESHOLD);
        assert!(!report.is_consistent);
    }

    #[test]
    fn two_by_two_is_always_consistent() {
        let report = report_for(vec![vec![1.0, 9.0], vec![1.0 / 9.0, 1.0]]);
        assert_eq!(report.ri, 0.0);
        assert_eq!(report.cr, 0.0);
        assert!(report.is_consistent);
    }

    #[test]
    fn single_item_has_zero_ci() {
        let report = report_for(vec![vec![1.0]]);
        assert_eq!(report.ci, 0.0);
        assert_eq!(report.cr, 0.0);
        assert!(report.is_consistent);
    }

    #[test]
    fn zero_weight_falls_back_to_zero_entry() {
        let matrix = PairwiseComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        let vector = ConsistencyChecker::consistency_vector(&matrix, &[1.0, 0.0]);
        assert_eq!(vector, vec![1.0, 0.0]);
    }

    #[test]
    fn rejects_weights_of_wrong_length() {
        let matrix = PairwiseComparisonMatrix::new(vec![vec![1.0; 3]; 3]).unwrap();
        let result = ConsistencyChecker::check(&matrix, &WeightVector::new(vec![0.5, 0.5]));
        assert!(matches!(
            result,
            Err(AhpError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn report_serializes_with_api_field_names() {
        let report = report_for(vec![vec![1.0; 2]; 2]);
        let json = serde_json::to_value(&report).unwrap();
        for key in ["lambda_max", "consistency_vector", "ci", "ri", "cr", "is_consistent"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
