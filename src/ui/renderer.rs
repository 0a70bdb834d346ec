// Formatting utilities shared by the chart widgets

/// Bar magnitude resolution; ratatui bars take integer values
pub const BAR_SCALE: f64 = 1000.0;

/// Longest game title shown next to a bar
pub const MAX_LABEL_CHARS: usize = 24;

pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as u64)
}

pub fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

pub fn format_share(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Map `value` onto 0..=BAR_SCALE relative to the series maximum
pub fn scale_for_bars(value: f64, max: f64) -> u64 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * BAR_SCALE).round() as u64
}

/// Cut long titles on a char boundary, marking the cut with '…'
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
