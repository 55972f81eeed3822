use std::collections::HashMap;

use super::StatsError;
use super::descriptive::{mean, median, mode};
use crate::data::model::WineDataset;

// ---------------------------------------------------------------------------
// Grouped statistics engine
// ---------------------------------------------------------------------------

/// The mean/median/mode triple for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub mean: f64,
    pub median: f64,
    /// `None` only for an empty value sequence, which the engine never
    /// produces (empty groups are rejected instead).
    pub mode: Option<f64>,
}

/// Per-group statistics for one metric, in first-seen group order.
///
/// The order is a presentation concern (it fixes the column order of the
/// rendered table); the statistics themselves do not depend on it.
#[derive(Debug, Clone)]
pub struct GroupedStats {
    /// The metric column that was summarized.
    pub metric: String,
    /// `(group key, stats)` pairs, ordered by first occurrence in the dataset.
    pub groups: Vec<(String, GroupStats)>,
}

/// Partition `dataset` by the textual value of `group_field` and summarize
/// `metric_field` within each group.
///
/// Single pass over the records: each record's group key is coerced to text
/// (missing keys included, as `<null>`), and its metric cell — when numeric —
/// joins that group's value list. Non-numeric metric cells are filtered out.
/// A group whose records contribute no numeric values at all fails with
/// [`StatsError::EmptyGroup`] naming the group.
pub fn grouped_stats(
    dataset: &WineDataset,
    group_field: &str,
    metric_field: &str,
) -> Result<GroupedStats, StatsError> {
    // Phase 1: partition. One scan, first-seen key order kept separately.
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<f64>> = HashMap::new();

    for rec in &dataset.records {
        let key = rec.key_text(group_field);
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        let bucket = buckets.entry(key).or_default();
        if let Some(v) = rec.get_f64(metric_field) {
            bucket.push(v);
        }
    }

    // Phase 2: summarize each group's value list.
    let mut groups = Vec::with_capacity(order.len());
    for key in order {
        let values = &buckets[&key];
        if values.is_empty() {
            return Err(StatsError::EmptyGroup {
                group: key,
                field: metric_field.to_string(),
            });
        }
        let stats = GroupStats {
            mean: mean(values),
            median: median(values)?,
            mode: mode(values),
        };
        groups.push((key, stats));
    }

    log::debug!(
        "Summarized '{metric_field}' over {} groups of '{group_field}'",
        groups.len()
    );

    Ok(GroupedStats {
        metric: metric_field.to_string(),
        groups,
    })
}
