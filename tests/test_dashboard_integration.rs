//! Integration tests: CSV on disk → cached load → recompute → view/report
//!
//! Key integration points tested:
//! - Loader and aggregation agree on partitions and grouping
//! - Dashboard refresh surfaces load errors as a single message
//! - Report snapshot carries every series

#[cfg(test)]
mod dashboard_integration_tests {
    use std::io::Write;
    use std::path::PathBuf;
    use steamdash::{
        aggregation::TOP_N,
        report::{write_snapshot, ChartSnapshot},
        recompute, Dashboard, DashboardConfig, DashboardView, TableCache,
    };

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config_for(path: PathBuf) -> DashboardConfig {
        DashboardConfig {
            data_path: path,
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn test_single_game_scenario_from_disk() {
        let file = write_csv(
            "u1,G1,purchase,1,0\n\
             u1,G1,play,10,0\n\
             u2,G1,purchase,1,0\n",
        );

        let mut cache = TableCache::new();
        let table = cache.get_or_load(file.path()).unwrap();
        let charts = recompute(&table).unwrap();

        assert_eq!(charts.action_distribution.buckets(), [("Purchase", 2), ("Play", 1)]);
        assert_eq!(charts.most_played.points().len(), 1);
        assert_eq!(charts.most_played.get("G1"), Some(1.0));
        assert_eq!(charts.most_purchased.get("G1"), Some(2.0));
        assert_eq!(charts.average_playtime.get("G1"), Some(10.0));
        assert_eq!(charts.stickiness.get("G1"), Some(5.0));
    }

    #[test]
    fn test_play_only_game_skips_stickiness() {
        let file = write_csv(
            "u1,\"Portal 2\",purchase,1,0\n\
             u1,\"Portal 2\",play,8,0\n\
             u2,\"Team Fortress 2\",play,40,0\n\
             u3,\"Team Fortress 2\",play,20,0\n",
        );

        let mut cache = TableCache::new();
        let charts = recompute(&cache.get_or_load(file.path()).unwrap()).unwrap();

        assert_eq!(charts.most_played.get("Team Fortress 2"), Some(2.0));
        assert_eq!(charts.average_playtime.get("Team Fortress 2"), Some(30.0));
        assert_eq!(charts.stickiness.get("Team Fortress 2"), None);
        assert_eq!(charts.stickiness.get("Portal 2"), Some(8.0));
    }

    #[test]
    fn test_purchase_only_log() {
        let file = write_csv("u1,G1,purchase,1,0\nu2,G2,purchase,1,0\n");

        let mut cache = TableCache::new();
        let charts = recompute(&cache.get_or_load(file.path()).unwrap()).unwrap();

        assert!(charts.most_played.is_empty());
        assert!(charts.average_playtime.is_empty());
        assert!(charts.stickiness.is_empty());
        assert_eq!(charts.most_purchased.len(), 2);
    }

    #[test]
    fn test_top_n_over_many_games() {
        let mut csv = String::new();
        for game in 0..40 {
            for user in 0..=game {
                csv.push_str(&format!("u{},Game {:02},purchase,1,0\n", user, game));
                csv.push_str(&format!("u{},Game {:02},play,{},0\n", user, game, user + 1));
            }
        }
        let file = write_csv(&csv);

        let mut cache = TableCache::new();
        let charts = recompute(&cache.get_or_load(file.path()).unwrap()).unwrap();

        assert_eq!(charts.most_played.len(), TOP_N);
        let top: Vec<&str> = charts.most_played.descending().map(|p| p.label.as_str()).collect();
        assert_eq!(top[0], "Game 39");
        assert_eq!(top[TOP_N - 1], "Game 25");
    }

    #[test]
    fn test_dashboard_error_then_recovery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steam-200k.csv");
        let mut dashboard = Dashboard::new(config_for(path.clone()));

        match dashboard.refresh() {
            DashboardView::Failed { message } => assert!(message.starts_with("Error loading data:")),
            other => panic!("unexpected view: {:?}", other),
        }

        std::fs::write(&path, "u1,G1,purchase,1,0\nu1,G1,play,3,0\n").unwrap();
        match dashboard.refresh() {
            DashboardView::Ready { rows, .. } => assert_eq!(*rows, 2),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_row_fails_render() {
        let file = write_csv("u1,G1,purchase,1,0\nu1,G1,play,ten,0\n");
        let mut dashboard = Dashboard::new(config_for(file.path().to_path_buf()));

        match dashboard.refresh() {
            DashboardView::Failed { message } => assert!(message.contains("non-numeric value 'ten'")),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_report_snapshot() {
        let file = write_csv("u1,G1,purchase,1,0\nu1,G1,play,6,0\n");
        let mut dashboard = Dashboard::new(config_for(file.path().to_path_buf()));

        let (table, charts) = dashboard.compute().unwrap();
        let snapshot = ChartSnapshot::new(table.source(), table.len(), charts);

        let mut out = Vec::new();
        write_snapshot(&snapshot, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["rows"], 2);
        for key in [
            "action_distribution",
            "most_played",
            "most_purchased",
            "average_playtime",
            "stickiness",
        ] {
            assert!(json["charts"].get(key).is_some(), "missing {}", key);
        }
    }
}
