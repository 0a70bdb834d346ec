use {
    crate::{
        aggregation::{recompute, ChartData},
        config::DashboardConfig,
        error::DashboardError,
        store::{EventTable, TableCache},
    },
    chrono::Utc,
    std::sync::Arc,
};

/// What the display surface should show after a render cycle
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// Nothing rendered yet
    Pending,
    Ready {
        charts: ChartData,
        rows: usize,
        computed_at: i64,
    },
    /// Single user-visible message; no partial charts
    Failed { message: String },
}

/// Owns the table cache and the latest view
///
/// Each `refresh` is one top-to-bottom run: cached load, then a full
/// recompute of every chart.
pub struct Dashboard {
    config: DashboardConfig,
    cache: TableCache,
    view: DashboardView,
    refresh_count: u64,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: TableCache::new(),
            view: DashboardView::Pending,
            refresh_count: 0,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Run the pipeline, converting any failure into a `Failed` view
    pub fn refresh(&mut self) -> &DashboardView {
        self.refresh_count += 1;
        self.view = match self.compute() {
            Ok((table, charts)) => DashboardView::Ready {
                charts,
                rows: table.len(),
                computed_at: Utc::now().timestamp(),
            },
            Err(e) => {
                log::error!("❌ Render failed: {}", e);
                DashboardView::Failed {
                    message: error_message(&e),
                }
            }
        };
        &self.view
    }

    /// Drop cached tables and refresh
    pub fn reload(&mut self) -> &DashboardView {
        log::info!("Clearing table cache");
        self.cache.clear();
        self.refresh()
    }

    /// Load (cached) and recompute, propagating errors
    pub fn compute(&mut self) -> Result<(Arc<EventTable>, ChartData), DashboardError> {
        let table = self.cache.get_or_load(&self.config.data_path)?;
        let charts = recompute(&table)?;
        Ok((table, charts))
    }
}

/// Message shown to the user in place of the charts
pub fn error_message(err: &DashboardError) -> String {
    format!("Error loading data: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dashboard_for(path: std::path::PathBuf) -> Dashboard {
        Dashboard::new(DashboardConfig {
            data_path: path,
            ..DashboardConfig::default()
        })
    }

    #[test]
    fn test_refresh_ready() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"u1,G1,purchase,1.0,0\nu1,G1,play,10.0,0\nu2,G1,purchase,1.0,0\n")
            .unwrap();
        file.flush().unwrap();

        let mut dashboard = dashboard_for(file.path().to_path_buf());
        assert_eq!(dashboard.view(), &DashboardView::Pending);

        match dashboard.refresh() {
            DashboardView::Ready { charts, rows, .. } => {
                assert_eq!(*rows, 3);
                assert_eq!(charts.stickiness.get("G1"), Some(5.0));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_refresh_reuses_cached_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"u1,G1,purchase,1.0,0\n").unwrap();
        file.flush().unwrap();

        let mut dashboard = dashboard_for(file.path().to_path_buf());
        dashboard.refresh();
        dashboard.refresh();
        assert_eq!(dashboard.cache().load_count(), 1);
        assert_eq!(dashboard.refresh_count(), 2);

        dashboard.reload();
        assert_eq!(dashboard.cache().load_count(), 2);
    }

    #[test]
    fn test_missing_file_becomes_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut dashboard = dashboard_for(dir.path().join("steam-200k.csv"));

        match dashboard.refresh() {
            DashboardView::Failed { message } => {
                assert!(message.starts_with("Error loading data: File not found"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_failure_replaces_previous_charts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"u1,G1,purchase,1.0,0\n").unwrap();
        file.flush().unwrap();
        let mut dashboard = dashboard_for(file.path().to_path_buf());
        assert!(matches!(dashboard.refresh(), DashboardView::Ready { .. }));

        drop(file);
        assert!(matches!(dashboard.reload(), DashboardView::Failed { .. }));
    }
}
