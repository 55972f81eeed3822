/// Statistics layer: descriptive measures and the grouped engine.
///
/// `descriptive` holds the per-sequence measures (mean, median, mode);
/// `grouped` partitions a dataset by a key column and summarizes one metric
/// column per group.

pub mod descriptive;
pub mod grouped;

use thiserror::Error;

/// Failures of the statistics layer. Computation is pure, so the taxonomy is
/// small: only degenerate inputs can go wrong.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Median of an empty sequence is undefined.
    #[error("cannot compute a median over an empty sequence")]
    EmptyInput,

    /// A group existed in the dataset but contributed no numeric values for
    /// the requested metric.
    #[error("group '{group}' has no numeric values for field '{field}'")]
    EmptyGroup { group: String, field: String },
}
