//! Stacked bar chart of station cycle time against takt time.
//!
//! Each station is one bar. The part of its total up to takt time is drawn
//! green and anything beyond takt is stacked on top in red. A dashed line
//! marks takt time across every station.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::model::line::LineBalance;

pub const TITLE: &str = "Line Balancing - Station Cycle Time vs Takt Time";
pub const X_LABEL: &str = "Stations";

const WITHIN_COLOR: Color = Color::Green;
const OVER_COLOR: Color = Color::Red;
const TAKT_COLOR: Color = Color::Cyan;
const BAR_SYMBOL: &str = "█";
const TAKT_SYMBOL: &str = "╌";

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;
const MAX_BAR_WIDTH: u16 = 12;
/// Headroom above the tallest bar or takt line
const Y_PADDING: f64 = 1.1;

/// One station's bar, split at takt time
#[derive(Debug, Clone, PartialEq)]
pub struct BarSplit {
    pub label: String,
    pub within: f64,
    pub over: f64,
}

impl BarSplit {
    pub fn total(&self) -> f64 {
        self.within + self.over
    }
}

#[derive(Debug, Clone)]
pub struct ChartData {
    pub bars: Vec<BarSplit>,
    pub takt: f64,
    pub unit: String,
}

impl ChartData {
    pub fn from_line(line: &LineBalance, unit: &str) -> Self {
        let takt = line.takt();
        let bars = line
            .stations()
            .iter()
            .map(|station| {
                let (within, over) = takt.split(station.station_total());
                BarSplit {
                    label: station.name().to_string(),
                    within,
                    over,
                }
            })
            .collect();

        ChartData {
            bars,
            takt: takt.seconds(),
            unit: unit.to_string(),
        }
    }

    pub fn y_label(&self) -> String {
        format!("Station Cycle Time ({})", self.unit)
    }

    fn y_max(&self) -> f64 {
        let top = self.bars.iter().map(BarSplit::total).fold(self.takt, f64::max);
        if top > 0.0 {
            top * Y_PADDING
        } else {
            1.0
        }
    }
}

/// Titled, bordered block the chart is normally drawn in
pub fn chart_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(TITLE)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

pub struct BalanceChart<'a> {
    data: &'a ChartData,
    block: Option<Block<'a>>,
}

impl<'a> BalanceChart<'a> {
    pub fn new(data: &'a ChartData) -> Self {
        BalanceChart { data, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for BalanceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        draw_chart(self.data, inner, buf);
    }
}

/// Plot geometry inside the chart area
struct Plot {
    left: u16,
    right: u16,
    top: u16,
    baseline: u16,
    y_max: f64,
}

impl Plot {
    fn height(&self) -> u16 {
        self.baseline - self.top
    }

    fn width(&self) -> u16 {
        self.right - self.left
    }

    /// Rows a value fills above the baseline; negatives fill none
    fn rows_for(&self, value: f64) -> u16 {
        let h = f64::from(self.height());
        ((value.max(0.0) / self.y_max) * h).round().min(h) as u16
    }

    /// Row on which a value's bar ends
    fn row_of(&self, value: f64) -> u16 {
        self.baseline - self.rows_for(value)
    }
}

fn draw_chart(data: &ChartData, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return;
    }

    let takt_style = Style::default().fg(TAKT_COLOR);
    let legend = Line::from(vec![
        Span::styled(format!("{0}{0} ", TAKT_SYMBOL), takt_style),
        Span::raw(format!("Takt Time ({:.2})   ", data.takt)),
        Span::styled(BAR_SYMBOL, Style::default().fg(WITHIN_COLOR)),
        Span::raw(" within takt   "),
        Span::styled(BAR_SYMBOL, Style::default().fg(OVER_COLOR)),
        Span::raw(" over takt"),
    ]);
    buf.set_line(area.x, area.y, &legend, area.width);
    buf.set_stringn(
        area.x,
        area.y + 1,
        format!("↑ {}", data.y_label()),
        area.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let y_max = data.y_max();
    let ticks = [
        (y_max, format!("{:.0}", y_max)),
        (data.takt, format!("{:.0}", data.takt)),
        (0.0, "0".to_string()),
    ];
    let label_width = ticks.iter().map(|(_, t)| t.chars().count()).max().unwrap_or(1) as u16;
    let axis_x = area.x + label_width + 1;
    if axis_x + 2 >= area.right() {
        return;
    }

    let plot = Plot {
        left: axis_x + 1,
        right: area.right(),
        top: area.y + 2,
        baseline: area.bottom() - 3,
        y_max,
    };

    // Axes
    for y in plot.top..plot.baseline {
        buf.get_mut(axis_x, y).set_symbol("│");
    }
    buf.get_mut(axis_x, plot.baseline).set_symbol("└");
    for x in plot.left..plot.right {
        buf.get_mut(x, plot.baseline).set_symbol("─");
    }

    let takt_y = plot.row_of(data.takt);
    for (value, text) in &ticks {
        let y = plot.row_of(*value);
        let style = if y == takt_y && *value == data.takt {
            takt_style
        } else {
            Style::default()
        };
        buf.set_stringn(
            area.x,
            y,
            format!("{:>width$}", text, width = label_width as usize),
            label_width as usize,
            style,
        );
    }

    for x in plot.left..plot.right {
        buf.get_mut(x, takt_y).set_symbol(TAKT_SYMBOL).set_fg(TAKT_COLOR);
    }

    if data.bars.is_empty() {
        let message = "No stations";
        let x = plot.left + plot.width().saturating_sub(message.len() as u16) / 2;
        let y = plot.top + plot.height() / 2;
        buf.set_stringn(x, y, message, plot.width() as usize, Style::default());
    } else {
        draw_bars(data, &plot, takt_y, buf);
    }

    let title_x = plot.left + plot.width().saturating_sub(X_LABEL.len() as u16) / 2;
    buf.set_stringn(
        title_x,
        area.bottom() - 1,
        X_LABEL,
        plot.width() as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );
}

fn draw_bars(data: &ChartData, plot: &Plot, takt_y: u16, buf: &mut Buffer) {
    let bar_count = u16::try_from(data.bars.len()).unwrap_or(u16::MAX);
    let slot_width = (plot.width() / bar_count).max(1);
    let bar_width = (slot_width * 2 / 3).clamp(1, MAX_BAR_WIDTH);
    let offset = (slot_width - bar_width) / 2;
    let label_y = plot.baseline + 1;

    for (i, bar) in data.bars.iter().enumerate() {
        let slot_x = plot.left as usize + i * slot_width as usize;
        if slot_x >= plot.right as usize {
            break;
        }
        let slot_x = slot_x as u16;

        let total_rows = plot.rows_for(bar.total());
        let within_rows = plot.rows_for(bar.within).min(total_rows);

        for r in 0..total_rows {
            let y = plot.baseline - 1 - r;
            let color = if r < within_rows { WITHIN_COLOR } else { OVER_COLOR };
            for dx in 0..bar_width {
                let x = slot_x + offset + dx;
                if x >= plot.right {
                    break;
                }
                let cell = buf.get_mut(x, y);
                if y == takt_y {
                    cell.set_symbol(TAKT_SYMBOL).set_fg(Color::White).set_bg(color);
                } else {
                    cell.set_symbol(BAR_SYMBOL).set_fg(color);
                }
            }
        }

        let label: String = bar.label.chars().take(slot_width as usize).collect();
        let label_x = slot_x + slot_width.saturating_sub(label.chars().count() as u16) / 2;
        let style = if bar.over > 0.0 {
            Style::default().fg(OVER_COLOR)
        } else {
            Style::default()
        };
        let room = plot.right.saturating_sub(label_x) as usize;
        buf.set_stringn(label_x, label_y, label, room, style);
    }
}

/// Draw the chart off-screen at a fixed size
pub fn render_to_buffer(data: &ChartData, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    BalanceChart::new(data).block(chart_block()).render(area, &mut buf);
    buf
}

/// Plain-text rows of a buffer, trailing blanks trimmed
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buf.get(x, y).symbol());
        }
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text
}

pub fn render_text(data: &ChartData, width: u16, height: u16) -> String {
    buffer_to_text(&render_to_buffer(data, width, height))
}
