//! AHP Module - Pure weighting, consistency and ranking functions.
//!
//! # Components
//!
//! - `PairwiseComparisonMatrix` - Validated square matrix of positive ratios
//! - `MatrixNormalizer` - Column-sum normalization, row-average weights
//! - `ConsistencyChecker` - lambda_max, CI, RI, CR and the 0.10 verdict
//! - `RankAggregator` - Weighted synthesis into a final ranking
//! - `MatrixEvaluation` - Normalizer followed by checker, with every step kept
//!
//! All functions are stateless and take only in-memory numeric data, so
//! independent matrices can be evaluated concurrently without coordination.

mod consistency;
mod errors;
mod evaluation;
mod matrix;
mod normalizer;
mod ranking;
mod weights;

pub use consistency::{
    random_index, ConsistencyChecker, ConsistencyReport, CONSISTENCY_THRESHOLD,
    RANDOM_INDEX_TABLE,
};
pub use errors::AhpError;
pub use evaluation::{MatrixEvaluation, CRITERIA_STEP};
pub use matrix::{PairwiseComparisonMatrix, Reciprocity};
pub use normalizer::{MatrixNormalizer, NormalizedMatrix};
pub use ranking::{RankAggregator, RankedAlternative};
pub use weights::WeightVector;
