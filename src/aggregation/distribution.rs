//! Purchase vs play split

use crate::store::{Action, EventTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDistribution {
    pub purchase: usize,
    pub play: usize,
}

impl ActionDistribution {
    pub const LABELS: [&'static str; 2] = ["Purchase", "Play"];

    pub fn total(&self) -> usize {
        self.purchase + self.play
    }

    /// Fraction of rows with `action`, 0.0 when there are no rows
    pub fn share(&self, action: &Action) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match action {
            Action::Purchase => self.purchase,
            Action::Play => self.play,
            Action::Other(_) => 0,
        };
        count as f64 / total as f64
    }

    pub fn buckets(&self) -> [(&'static str, usize); 2] {
        [(Self::LABELS[0], self.purchase), (Self::LABELS[1], self.play)]
    }
}

pub fn action_distribution(table: &EventTable) -> ActionDistribution {
    ActionDistribution {
        purchase: table.purchases().count(),
        play: table.plays().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Event;

    fn table(actions: &[&str]) -> EventTable {
        let events = actions
            .iter()
            .map(|a| Event {
                user_id: "u1".to_string(),
                game: "G1".to_string(),
                action: Action::parse(a),
                value: 1.0,
            })
            .collect();
        EventTable::new("test.csv", events)
    }

    #[test]
    fn test_counts_sum_to_row_count() {
        let table = table(&["purchase", "play", "purchase", "play", "play"]);
        let dist = action_distribution(&table);

        assert_eq!(dist.purchase, 2);
        assert_eq!(dist.play, 3);
        assert_eq!(dist.total(), table.len());
        assert_eq!(dist.buckets(), [("Purchase", 2), ("Play", 3)]);
    }

    #[test]
    fn test_share() {
        let dist = ActionDistribution { purchase: 1, play: 3 };
        assert_eq!(dist.share(&Action::Purchase), 0.25);
        assert_eq!(dist.share(&Action::Play), 0.75);
        assert_eq!(ActionDistribution::default().share(&Action::Play), 0.0);
    }
}
