use {
    crate::{dashboard::Dashboard, error::DashboardError},
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    ratatui::{
        backend::{Backend, CrosstermBackend},
        Terminal,
    },
};

/// Run the TUI event loop
///
/// Renders once on start, then redraws every tick. `r` re-runs the pipeline
/// on the cached table, `c` clears the cache first, `q`/Esc quits.
pub fn run_ui(dashboard: &mut Dashboard) -> Result<(), DashboardError> {
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;
    let session = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )
    .map_err(DashboardError::from)
    .and_then(|_| event_loop(&mut terminal, dashboard));

    finish_session(session, restore_terminal())
}

/// Leave the alternate screen and raw mode; both steps always run
fn restore_terminal() -> std::io::Result<()> {
    let leave = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
    let raw = crossterm::terminal::disable_raw_mode();
    leave.and(raw)
}

/// Session errors take precedence over restore errors
fn finish_session(
    session: Result<(), DashboardError>,
    restored: std::io::Result<()>,
) -> Result<(), DashboardError> {
    session?;
    restored?;
    Ok(())
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
) -> Result<(), DashboardError> {
    let tick = dashboard.config().tick();
    terminal.clear()?;
    dashboard.refresh();

    loop {
        terminal.draw(|f| {
            let area = f.size();
            crate::ui::layout::render_dashboard(f, area, dashboard.view(), &dashboard.config().data_path);
        })?;

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => {
                    log::debug!("Refresh requested");
                    dashboard.refresh();
                }
                KeyCode::Char('c') => {
                    dashboard.reload();
                }
                _ => {}
            },
            // Next draw picks up the new size
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}
