use {
    crate::{aggregation::ChartData, error::DashboardError},
    chrono::Utc,
    serde::{Deserialize, Serialize},
    std::{fs, io::Write, path::Path},
};

/// Headless snapshot of every chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub generated_at: i64,
    pub source: String,
    pub rows: usize,
    pub charts: ChartData,
}

impl ChartSnapshot {
    pub fn new(source: &Path, rows: usize, charts: ChartData) -> Self {
        Self {
            generated_at: Utc::now().timestamp(),
            source: source.display().to_string(),
            rows,
            charts,
        }
    }
}

/// Write snapshot as pretty JSON
pub fn write_snapshot<W: Write>(snapshot: &ChartSnapshot, mut writer: W) -> Result<(), DashboardError> {
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save snapshot to a JSON file
pub fn save_snapshot(snapshot: &ChartSnapshot, file_path: &Path) -> Result<(), DashboardError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(file_path, json)?;

    log::info!("Saved chart snapshot ({} rows) to {}", snapshot.rows, file_path.display());
    Ok(())
}
