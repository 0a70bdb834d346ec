//! Ranked (label, value) series and the top-N selection

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of entries kept by every top-N derivation
pub const TOP_N: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Series ordered ascending by value
///
/// Horizontal bar charts stack categories bottom-to-top, so ascending order
/// puts the largest value at the top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedSeries {
    points: Vec<SeriesPoint>,
}

impl RankedSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value first, for surfaces that draw top-to-bottom
    pub fn descending(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().rev()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.points.iter().find(|p| p.label == label).map(|p| p.value)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }
}

/// Keep the `n` largest groups and return them ascending
///
/// Ties on value are broken by game title (byte order, ascending) so the
/// cut at the n-th place is deterministic.
pub fn rank_top<I>(groups: I, n: usize) -> RankedSeries
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut ranked: Vec<(String, f64)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    ranked.truncate(n);
    ranked.reverse();

    RankedSeries {
        points: ranked
            .into_iter()
            .map(|(label, value)| SeriesPoint { label, value })
            .collect(),
    }
}
