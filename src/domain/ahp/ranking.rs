//! Rank Aggregator - AHP synthesis of criteria and alternative weights.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AhpError, ConsistencyReport, WeightVector};

/// One alternative's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Alternative name.
    pub alternative: String,
    /// Final aggregate score.
    pub weight: f64,
    /// 1-based position, 1 = best.
    pub rank: usize,
    /// Criterion name -> this alternative's local weight under it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_weights: Option<BTreeMap<String, f64>>,
    /// Criterion name -> consistency of the matrix the local weight came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_checks: Option<BTreeMap<String, ConsistencyReport>>,
    /// Position of the alternative in the caller's original list.
    #[serde(skip)]
    pub source_index: usize,
}

/// Synthesis functions.
pub struct RankAggregator;

impl RankAggregator {
    /// Turns K per-criterion vectors of length A into A rows of length K.
    /// Callers check lengths first.
    fn transpose(alternative_weights_by_criteria: &[WeightVector], alternatives: usize) -> Vec<Vec<f64>> {
        (0..alternatives)
            .map(|a| {
                alternative_weights_by_criteria
                    .iter()
                    .map(|weights| weights[a])
                    .collect()
            })
            .collect()
    }

    /// Computes `final_score[a] = Σ_k by_criteria[k][a] * criteria_weights[k]`
    /// in the original alternative order.
    ///
    /// # Errors
    /// `AhpError::DimensionMismatch` if the number of per-criterion vectors
    /// differs from the number of criteria weights, or any vector's length
    /// differs from `alternatives`. `AhpError::InvalidMatrix` if any weight
    /// is negative or not finite.
    pub fn final_scores(
        alternatives: usize,
        criteria_weights: &WeightVector,
        alternative_weights_by_criteria: &[WeightVector],
    ) -> Result<Vec<f64>, AhpError> {
        Self::check_dimensions(alternatives, criteria_weights, alternative_weights_by_criteria)?;

        let scores = Self::transpose(alternative_weights_by_criteria, alternatives)
            .iter()
            .map(|local| {
                local
                    .iter()
                    .zip(criteria_weights.iter())
                    .map(|(w, c)| w * c)
                    .sum()
            })
            .collect();

        Ok(scores)
    }

    /// Ranks alternatives by descending final score.
    ///
    /// # Algorithm
    /// 1. Compute final scores via [`RankAggregator::final_scores`]
    /// 2. Stable sort by score descending, so ties keep input order
    /// 3. Assign 1-based ranks
    /// 4. Attach local weights keyed by criterion name, if names are given
    ///
    /// # Errors
    /// `AhpError::DimensionMismatch` on any length disagreement, including
    /// a `criteria_names` list whose length differs from the criteria count.
    /// `AhpError::InvalidMatrix` for a negative or non-finite weight.
    pub fn aggregate(
        alternatives: &[String],
        criteria_weights: &WeightVector,
        alternative_weights_by_criteria: &[WeightVector],
        criteria_names: Option<&[String]>,
    ) -> Result<Vec<RankedAlternative>, AhpError> {
        if let Some(names) = criteria_names {
            if names.len() != criteria_weights.len() {
                return Err(AhpError::dimension_mismatch(
                    "criteria_names",
                    criteria_weights.len(),
                    names.len(),
                ));
            }
        }

        let scores = Self::final_scores(
            alternatives.len(),
            criteria_weights,
            alternative_weights_by_criteria,
        )?;

        let mut order: Vec<usize> = (0..alternatives.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let ranked = order
            .into_iter()
            .enumerate()
            .map(|(position, idx)| {
                let local_weights = criteria_names.map(|names| {
                    names
                        .iter()
                        .zip(alternative_weights_by_criteria)
                        .map(|(name, weights)| (name.clone(), weights[idx]))
                        .collect()
                });

                RankedAlternative {
                    alternative: alternatives[idx].clone(),
                    weight: scores[idx],
                    rank: position + 1,
                    local_weights,
                    consistency_checks: None,
                    source_index: idx,
                }
            })
            .collect();

        Ok(ranked)
    }

    fn check_dimensions(
        alternatives: usize,
        criteria_weights: &WeightVector,
        alternative_weights_by_criteria: &[WeightVector],
    ) -> Result<(), AhpError> {
        if alternative_weights_by_criteria.len() != criteria_weights.len() {
            return Err(AhpError::dimension_mismatch(
                "alternative_weights_by_criteria",
                criteria_weights.len(),
                alternative_weights_by_criteria.len(),
            ));
        }

        check_weights("criteria_weights", criteria_weights)?;
        for (k, weights) in alternative_weights_by_criteria.iter().enumerate() {
            if weights.len() != alternatives {
                return Err(AhpError::dimension_mismatch(
                    format!("alternative weights for criterion {}", k),
                    alternatives,
                    weights.len(),
                ));
            }
            check_weights(&format!("alternative weights for criterion {}", k), weights)?;
        }

        Ok(())
    }
}

/// Weights must be finite and non-negative, otherwise scores cannot be ordered.
fn check_weights(what: &str, weights: &WeightVector) -> Result<(), AhpError> {
    match weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        Some((index, value)) => Err(AhpError::invalid_matrix(format!(
            "{}[{}] must be a non-negative finite number, got {}",
            what, index, value
        ))),
        None => Ok(()),
    }
}
