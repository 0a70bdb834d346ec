//! Per-game group-by derivations feeding the bar charts

use super::series::{rank_top, RankedSeries};
use crate::error::AggregationError;
use crate::store::{Event, EventTable};
use std::collections::HashMap;

/// Rows per game; counts rows, not distinct users
fn count_by_game<'a>(rows: impl Iterator<Item = &'a Event>) -> HashMap<&'a str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for event in rows {
        *counts.entry(event.game.as_str()).or_default() += 1;
    }
    counts
}

/// (sum of value, row count) per game
fn sum_by_game<'a>(rows: impl Iterator<Item = &'a Event>) -> HashMap<&'a str, (f64, usize)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for event in rows {
        let entry = sums.entry(event.game.as_str()).or_default();
        entry.0 += event.value;
        entry.1 += 1;
    }
    sums
}

fn ranked_counts(counts: HashMap<&str, usize>, n: usize) -> RankedSeries {
    rank_top(
        counts
            .into_iter()
            .map(|(game, count)| (game.to_string(), count as f64)),
        n,
    )
}

/// Games with the most play rows
pub fn most_played(table: &EventTable, n: usize) -> RankedSeries {
    ranked_counts(count_by_game(table.plays()), n)
}

/// Games with the most purchase rows
pub fn most_purchased(table: &EventTable, n: usize) -> RankedSeries {
    ranked_counts(count_by_game(table.purchases()), n)
}

/// Mean hours per play row, per game
pub fn average_playtime(table: &EventTable, n: usize) -> Result<RankedSeries, AggregationError> {
    let mut means = Vec::new();
    for (game, (sum, count)) in sum_by_game(table.plays()) {
        let mean = sum / count as f64;
        if !mean.is_finite() {
            return Err(AggregationError::NonFinite {
                series: "average playtime",
                game: game.to_string(),
            });
        }
        means.push((game.to_string(), mean));
    }
    Ok(rank_top(means, n))
}

/// Total play hours divided by purchase rows, per game
///
/// Games missing from either partition have no ratio and are left out, as
/// are ratios that are not finite.
pub fn stickiness(table: &EventTable, n: usize) -> RankedSeries {
    let play_hours = sum_by_game(table.plays());
    let purchases = count_by_game(table.purchases());

    let ratios = play_hours.into_iter().filter_map(|(game, (hours, _))| {
        let bought = *purchases.get(game)?;
        let ratio = hours / bought as f64;
        ratio.is_finite().then(|| (game.to_string(), ratio))
    });
    rank_top(ratios, n)
}
