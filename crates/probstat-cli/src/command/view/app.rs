use crossterm::event::{Event, KeyCode};
use probstat_chart::{
    ChartGeometry,
    geometry::{Axis, Point},
};
use probstat_stats::{
    format::{format_value, round2},
    report::DataReport,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line as TextLine, Text},
    widgets::{
        Block, Paragraph, Widget,
        canvas::{Canvas, Context, Line, Points, Rectangle},
    },
};

use crate::tui::App;

const AXIS_COLOR: Color = Color::Gray;
const BAR_COLOR: Color = Color::Blue;
const LINE_COLOR: Color = Color::Green;
const CUMULATIVE_COLOR: Color = Color::Magenta;

/// Approximate canvas pixels between an axis and its tick labels.
const LABEL_OFFSET: f64 = 8.0;

#[derive(Debug)]
pub struct ChartViewer {
    report: DataReport,
    charts: Vec<ChartGeometry>,
    selected: usize,
    should_exit: bool,
}

impl ChartViewer {
    #[must_use]
    pub fn new(report: DataReport, charts: Vec<ChartGeometry>) -> Self {
        Self {
            report,
            charts,
            selected: 0,
            should_exit: false,
        }
    }

    fn summary_text(&self) -> Text<'static> {
        let s = &self.report.summary;
        Text::from(vec![
            TextLine::raw(format!(
                "  n = {}   min = {}   max = {}   range = {}",
                s.count,
                format_value(s.min),
                format_value(s.max),
                format_value(s.range),
            )),
            TextLine::raw(format!(
                "  mean = {}   median = {}   mode = {}   class width = {}   classes = {}",
                format_value(round2(s.mean)),
                format_value(s.median),
                s.mode,
                format_value(self.report.table.width),
                self.report.table.classes.len(),
            )),
        ])
    }
}

impl App for ChartViewer {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_press_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                KeyCode::Left | KeyCode::Char('h') if !self.charts.is_empty() => {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.charts.len() - 1);
                }
                KeyCode::Right | KeyCode::Char('l') if !self.charts.is_empty() => {
                    self.selected = (self.selected + 1) % self.charts.len();
                }
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [chart_area, summary_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        if let Some(chart) = self.charts.get(self.selected) {
            let title = format!(" [{}/{}] {} ", self.selected + 1, self.charts.len(), chart.kind);
            frame.render_widget(ChartCanvas { chart, title }, chart_area);
        }

        let summary = Paragraph::new(self.summary_text()).block(Block::bordered().title("Sample"));
        frame.render_widget(summary, summary_area);

        let help_text = Text::from("←/→: Switch chart | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

/// Draws a chart geometry on a braille canvas.
///
/// Geometry uses a top-left origin while the canvas grows upwards, so every
/// `y` coordinate is flipped against the canvas height.
struct ChartCanvas<'a> {
    chart: &'a ChartGeometry,
    title: String,
}

impl ChartCanvas<'_> {
    fn flip(&self, y: f64) -> f64 {
        self.chart.canvas.height - y
    }

    fn draw_axes(&self, ctx: &mut Context<'_>) {
        let plot = &self.chart.plot;
        let (top, bottom) = (self.flip(plot.top), self.flip(plot.bottom));
        ctx.draw(&Line::new(plot.left, bottom, plot.left, top, AXIS_COLOR));
        ctx.draw(&Line::new(plot.left, bottom, plot.right, bottom, AXIS_COLOR));
        if self.chart.secondary_y_axis.is_some() {
            ctx.draw(&Line::new(plot.right, bottom, plot.right, top, AXIS_COLOR));
        }
    }

    fn draw_bars(&self, ctx: &mut Context<'_>) {
        for bar in &self.chart.bars {
            ctx.draw(&Rectangle {
                x: bar.x,
                y: self.flip(bar.y + bar.height),
                width: bar.width,
                height: bar.height,
                color: BAR_COLOR,
            });
        }
    }

    fn draw_line(&self, ctx: &mut Context<'_>) {
        let color = if self.chart.secondary_y_axis.is_some() {
            CUMULATIVE_COLOR
        } else {
            LINE_COLOR
        };
        let coords = self
            .chart
            .line
            .iter()
            .map(|&Point { x, y }| (x, self.flip(y)))
            .collect::<Vec<_>>();
        for pair in coords.windows(2) {
            let [(x1, y1), (x2, y2)] = [pair[0], pair[1]];
            ctx.draw(&Line::new(x1, y1, x2, y2, color));
        }
        ctx.draw(&Points {
            coords: &coords,
            color,
        });
    }

    fn print_labels(&self, ctx: &mut Context<'_>) {
        let chart = self.chart;
        let plot = &chart.plot;
        let label_style = Style::default().fg(Color::DarkGray);

        print_vertical_axis(ctx, &chart.y_axis, 0.0, chart.canvas.height, label_style);
        if let Some(axis) = &chart.secondary_y_axis {
            let x = plot.right + LABEL_OFFSET;
            print_vertical_axis(ctx, axis, x, chart.canvas.height, label_style);
        }

        let label_y = self.flip(plot.bottom + 2.0 * LABEL_OFFSET);
        for tick in &chart.x_axis.ticks {
            ctx.print(
                tick.position,
                label_y,
                TextLine::styled(tick.label.clone(), label_style),
            );
        }
        ctx.print(
            plot.right - LABEL_OFFSET,
            LABEL_OFFSET,
            TextLine::raw(chart.x_axis.title.clone()),
        );
    }
}

fn print_vertical_axis(ctx: &mut Context<'_>, axis: &Axis, x: f64, height: f64, style: Style) {
    for tick in &axis.ticks {
        ctx.print(x, height - tick.position, TextLine::styled(tick.label.clone(), style));
    }
    ctx.print(x, height - LABEL_OFFSET, TextLine::raw(axis.title.clone()));
}

impl Widget for ChartCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let canvas = Canvas::default()
            .block(Block::bordered().title(self.title.as_str()))
            .marker(Marker::Braille)
            .x_bounds([0.0, self.chart.canvas.width])
            .y_bounds([0.0, self.chart.canvas.height])
            .paint(|ctx| {
                self.draw_axes(ctx);
                self.draw_bars(ctx);
                ctx.layer();
                self.draw_line(ctx);
                self.print_labels(ctx);
            });
        Widget::render(canvas, area, buf);
    }
}
