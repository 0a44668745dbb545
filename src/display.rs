use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};

use crate::chart::{chart_block, BalanceChart, ChartData};
use crate::error::LineError;
use crate::model::line::LineBalance;
use crate::report;

/// What the viewer shows besides the chart
struct App<'a> {
    chart: &'a ChartData,
    line: &'a LineBalance,
}

/// Open the chart full screen and block until the user closes it
pub fn show_chart(line: &LineBalance, chart: &ChartData) -> Result<(), LineError> {
    let app = App { chart, line };

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &App,
) -> Result<(), LineError> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        if let CEvent::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            if is_close_key(code) {
                return Ok(());
            }
        }
    }
}

fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}

fn draw_ui(f: &mut ratatui::Frame, app: &App) {
    let details_height = (app.line.stations().len() as u16 + 9).min(16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(details_height)].as_ref())
        .split(f.size());

    f.render_widget(BalanceChart::new(app.chart).block(chart_block()), chunks[0]);
    draw_details(f, chunks[1], app);
}

fn details_lines(app: &App) -> Vec<Line<'static>> {
    let takt = app.line.takt();
    let mut lines: Vec<Line> = report::summary_lines(app.line, &app.chart.unit)
        .into_iter()
        .map(Line::from)
        .collect();

    for station in app.line.stations() {
        let over = takt.is_exceeded_by(station.station_total());
        let style = if over {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(
            format!(
                "{}: {:.2} {} | operators: {} | processes: {}",
                station.name(),
                station.station_total(),
                app.chart.unit,
                station.num_operators(),
                station.processes().len()
            ),
            style,
        ));
    }
    lines.push(Line::from("q / esc / enter - close"));
    lines
}

fn draw_details(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let details = Paragraph::new(details_lines(app))
        .block(Block::default().borders(Borders::ALL).title("Stations"))
        .wrap(Wrap { trim: true });

    f.render_widget(details, area);
}
