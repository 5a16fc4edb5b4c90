//! Property-based tests for the weighting, consistency and ranking stages.

use ahp_engine::domain::ahp::{
    ConsistencyChecker, MatrixEvaluation, MatrixNormalizer, PairwiseComparisonMatrix,
    RankAggregator, WeightVector,
};
use proptest::prelude::*;

/// Square matrices of order 1..=9 with entries on the Saaty range.
fn positive_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=9).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(1.0 / 9.0..9.0f64, n), n)
    })
}

/// Matrices built as `M[i][j] = v[i] / v[j]` for a positive vector `v`.
fn consistent_matrix() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>)> {
    prop::collection::vec(0.1..10.0f64, 1..=10).prop_map(|v| {
        let rows = v
            .iter()
            .map(|vi| v.iter().map(|vj| vi / vj).collect())
            .collect();
        (v, rows)
    })
}

/// (alternatives, criteria weights, per-criterion alternative weights)
fn ranking_input() -> impl Strategy<Value = (usize, Vec<f64>, Vec<Vec<f64>>)> {
    (1usize..=6, 1usize..=5).prop_flat_map(|(alternatives, criteria)| {
        (
            Just(alternatives),
            prop::collection::vec(0.0..1.0f64, criteria),
            prop::collection::vec(prop::collection::vec(0.0..1.0f64, alternatives), criteria),
        )
    })
}

// Property test: weights are a probability vector
proptest! {
    #[test]
    fn weights_are_non_negative_and_sum_to_one(rows in positive_matrix()) {
        let n = rows.len();
        let matrix = PairwiseComparisonMatrix::new(rows).unwrap();
        let normalized = MatrixNormalizer::normalize(&matrix).unwrap();

        prop_assert_eq!(normalized.weights.len(), n);
        prop_assert!(normalized.weights.iter().all(|w| *w >= 0.0));
        prop_assert!((normalized.weights.total() - 1.0).abs() < 1e-9);
    }
}

// Property test: uniform scaling cancels in the column normalization
proptest! {
    #[test]
    fn scaling_preserves_weights_and_scales_lambda(
        rows in positive_matrix(),
        factor in 0.1..10.0f64,
    ) {
        let scaled_rows: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.iter().map(|v| v * factor).collect())
            .collect();

        let original = MatrixEvaluation::for_criteria(PairwiseComparisonMatrix::new(rows).unwrap()).unwrap();
        let scaled = MatrixEvaluation::for_criteria(PairwiseComparisonMatrix::new(scaled_rows).unwrap()).unwrap();

        for (a, b) in original.weights.iter().zip(scaled.weights.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
        let expected = original.consistency_check.lambda_max * factor;
        prop_assert!((scaled.consistency_check.lambda_max - expected).abs() < 1e-9 * expected.max(1.0));
    }
}

// Property test: perfectly consistent matrices
proptest! {
    #[test]
    fn consistent_matrix_has_lambda_n_and_zero_ci((v, rows) in consistent_matrix()) {
        let n = v.len() as f64;
        let matrix = PairwiseComparisonMatrix::new(rows).unwrap();
        let normalized = MatrixNormalizer::normalize(&matrix).unwrap();
        let report = ConsistencyChecker::check(&matrix, &normalized.weights).unwrap();

        let total: f64 = v.iter().sum();
        for (w, vi) in normalized.weights.iter().zip(&v) {
            prop_assert!((w - vi / total).abs() < 1e-9);
        }
        prop_assert!((report.lambda_max - n).abs() < 1e-9);
        prop_assert!(report.ci.abs() < 1e-9);
        prop_assert!(report.is_consistent);
    }
}

// Property test: orders one and two are trivially consistent
proptest! {
    #[test]
    fn small_matrices_are_always_consistent(
        rows in (1usize..=2).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(1.0 / 9.0..9.0f64, n), n)
        }),
    ) {
        let evaluation = MatrixEvaluation::for_criteria(PairwiseComparisonMatrix::new(rows).unwrap()).unwrap();

        prop_assert_eq!(evaluation.consistency_check.ri, 0.0);
        prop_assert_eq!(evaluation.consistency_check.cr, 0.0);
        prop_assert!(evaluation.consistency_check.is_consistent);
    }
}

// Property test: synthesis is a dot product and ranks form a permutation
proptest! {
    #[test]
    fn ranking_is_a_sorted_permutation((alternatives, criteria, by_criteria) in ranking_input()) {
        let names: Vec<String> = (0..alternatives).map(|i| format!("alt-{}", i)).collect();
        let criteria_weights = WeightVector::new(criteria.clone());
        let by_criteria: Vec<WeightVector> = by_criteria.into_iter().map(WeightVector::new).collect();

        let ranking = RankAggregator::aggregate(&names, &criteria_weights, &by_criteria, None).unwrap();

        let mut ranks: Vec<usize> = ranking.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=alternatives).collect::<Vec<_>>());

        let max = ranking.iter().map(|r| r.weight).fold(f64::MIN, f64::max);
        prop_assert_eq!(ranking[0].weight, max);
        prop_assert!(ranking.windows(2).all(|pair| pair[0].weight >= pair[1].weight));

        for ranked in &ranking {
            let expected: f64 = by_criteria
                .iter()
                .zip(&criteria)
                .map(|(weights, c)| weights[ranked.source_index] * c)
                .sum();
            prop_assert!((ranked.weight - expected).abs() < 1e-12);
            prop_assert_eq!(&ranked.alternative, &names[ranked.source_index]);
        }
    }
}
