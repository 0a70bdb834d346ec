//! Full recomputation of every chart series

use super::derivations::{average_playtime, most_played, most_purchased, stickiness};
use super::distribution::{action_distribution, ActionDistribution};
use super::series::{RankedSeries, TOP_N};
use crate::error::AggregationError;
use crate::store::EventTable;
use serde::{Deserialize, Serialize};

/// Everything the display surface needs for one render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub action_distribution: ActionDistribution,
    pub most_played: RankedSeries,
    pub most_purchased: RankedSeries,
    pub average_playtime: RankedSeries,
    pub stickiness: RankedSeries,
}

/// Recompute all series from scratch. Pure: same table, same result.
pub fn recompute(table: &EventTable) -> Result<ChartData, AggregationError> {
    let charts = ChartData {
        action_distribution: action_distribution(table),
        most_played: most_played(table, TOP_N),
        most_purchased: most_purchased(table, TOP_N),
        average_playtime: average_playtime(table, TOP_N)?,
        stickiness: stickiness(table, TOP_N),
    };

    log::debug!(
        "Recomputed charts: {} purchases, {} plays, {} sticky games",
        charts.action_distribution.purchase,
        charts.action_distribution.play,
        charts.stickiness.len()
    );
    Ok(charts)
}
