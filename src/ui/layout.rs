use {
    super::renderer::{
        format_count, format_hours, format_share, scale_for_bars, truncate_label, MAX_LABEL_CHARS,
    },
    crate::{
        aggregation::{ActionDistribution, ChartData, RankedSeries},
        dashboard::DashboardView,
        store::Action,
    },
    ratatui::{
        layout::{Constraint, Direction, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
        Frame,
    },
    std::path::Path,
};

pub const TITLE: &str = "Steam User Data Dashboard";

/// One bar chart panel: title, color and value formatter
struct BarPanel<'a> {
    title: &'static str,
    series: &'a RankedSeries,
    color: Color,
    format: fn(f64) -> String,
}

/// Render the whole dashboard for the current view
pub fn render_dashboard(f: &mut Frame, area: Rect, view: &DashboardView, source: &Path) {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Charts
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0], source);

    match view {
        DashboardView::Pending => {
            let text = Paragraph::new("Loading...").block(Block::default().borders(Borders::ALL));
            f.render_widget(text, chunks[1]);
        }
        DashboardView::Ready { charts, .. } => render_charts(f, chunks[1], charts),
        DashboardView::Failed { message } => render_error(f, chunks[1], message),
    }

    render_footer(f, chunks[2], view);
}

fn render_header(f: &mut Frame, area: Rect, source: &Path) {
    let text = vec![Line::from(vec![
        Span::styled(TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" - {}", source.display())),
    ])];

    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Two charts on the first row, three on the second
fn render_charts(f: &mut Frame, area: Rect, charts: &ChartData) {
    let rows = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = RatLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = RatLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    render_distribution(f, top[0], &charts.action_distribution);
    render_bar_panel(
        f,
        top[1],
        BarPanel {
            title: "Top 15 Most Played Games",
            series: &charts.most_played,
            color: Color::LightGreen,
            format: format_count,
        },
    );
    render_bar_panel(
        f,
        bottom[0],
        BarPanel {
            title: "Top 15 Most Purchased Games",
            series: &charts.most_purchased,
            color: Color::LightBlue,
            format: format_count,
        },
    );
    render_bar_panel(
        f,
        bottom[1],
        BarPanel {
            title: "Top 15 Games by Average Playtime",
            series: &charts.average_playtime,
            color: Color::LightRed,
            format: format_hours,
        },
    );
    render_bar_panel(
        f,
        bottom[2],
        BarPanel {
            title: "Top 15 Games by Stickiness",
            series: &charts.stickiness,
            color: Color::LightMagenta,
            format: format_hours,
        },
    );
}

fn render_distribution(f: &mut Frame, area: Rect, dist: &ActionDistribution) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("User Actions Distribution");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let purchase_share = dist.share(&Action::Purchase);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::LightGreen))
        .ratio(purchase_share)
        .label(format!(
            "Purchase {} | Play {}",
            format_share(purchase_share),
            format_share(dist.share(&Action::Play))
        ));
    f.render_widget(gauge, parts[0]);

    let colors = [Color::LightBlue, Color::LightGreen];
    let lines: Vec<Line> = dist
        .buckets()
        .iter()
        .zip(colors)
        .map(|((label, count), color)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(color)),
                Span::raw(count.to_string()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), parts[1]);
}

fn render_bar_panel(f: &mut Frame, area: Rect, panel: BarPanel) {
    let block = Block::default().borders(Borders::ALL).title(panel.title);

    if panel.series.is_empty() {
        f.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }

    let max = panel.series.max_value().unwrap_or(0.0);
    // Horizontal bars are drawn top-to-bottom: largest first
    let bars: Vec<Bar> = panel
        .series
        .descending()
        .map(|point| {
            Bar::default()
                .value(scale_for_bars(point.value, max))
                .label(Line::from(truncate_label(&point.label, MAX_LABEL_CHARS)))
                .text_value((panel.format)(point.value))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(panel.color))
        .value_style(Style::default().fg(Color::Black).bg(panel.color))
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(text, area);
}

fn render_footer(f: &mut Frame, area: Rect, view: &DashboardView) {
    let mut spans = vec![Span::styled("Status: ", Style::default().fg(Color::Green))];

    match view {
        DashboardView::Pending => spans.push(Span::raw("Loading")),
        DashboardView::Ready { rows, computed_at, .. } => {
            spans.push(Span::raw("Ready"));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Rows: ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(rows.to_string()));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Computed: ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(format_timestamp(*computed_at)));
        }
        DashboardView::Failed { .. } => {
            spans.push(Span::styled("Error", Style::default().fg(Color::Red)))
        }
    }
    spans.push(Span::raw(" | r refresh  c reload  q quit"));

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(Line::from(spans)).block(footer), area);
}

fn format_timestamp(timestamp: i64) -> String {
    use chrono::DateTime;
    use chrono::Utc;

    if let Some(dt) = DateTime::<Utc>::from_timestamp(timestamp, 0) {
        dt.format("%H:%M:%S").to_string()
    } else {
        "N/A".to_string()
    }
}
