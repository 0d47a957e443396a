use std::ops::Range;
use std::path::{Path, PathBuf};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::{DashedPathElement, DottedPathElement};
use plotters::prelude::*;
use tracing::{info, warn};
use crate::config::{AlgorithmConfig, PlotColor, SweepConfig};
use crate::error::{SweepError, SweepResult};
use crate::parser::Metric;
use crate::results::{AlgorithmResults, ResultTable};

const STROKE_WIDTH: u32 = 2;
// Pixel lengths of the dash and dot patterns
const DASH_LENGTH: u32 = 8;
const DASH_GAP: u32 = 5;
const DOT_SPACING: u32 = 5;
const DOT_RADIUS: u32 = 1;
const LEGEND_PADDING: i32 = 8;
const LEGEND_ROW: i32 = 20;
const LEGEND_SAMPLE: i32 = 30;
// Rough advance of a 14px sans-serif glyph
const LEGEND_GLYPH_WIDTH: i32 = 8;

/// How a line is stroked. Each metric has its own style
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
}

impl LineStyle {
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::PageFaults => LineStyle::Solid,
            Metric::DiskReads => LineStyle::Dotted,
            Metric::DiskWrites => LineStyle::Dashed,
        }
    }
}

/// Handle to a line of a [`Figure`], in draw order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineId(usize);

/// A line of (frame count, event count) points. Lines without points are legend placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    pub points: Vec<(u32, u64)>,
    pub color: PlotColor,
    pub style: LineStyle,
}

impl Line {
    pub fn is_placeholder(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    LowerLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub line: LineId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    pub entries: Vec<LegendEntry>,
}

/// Everything drawn on one chart, independent of the backend it's rendered with
///
/// A figure is reused across workloads and cleared before each one. Lines drawn for an algorithm
/// are tagged with its name, and the algorithm legend is built from those tags.
#[derive(Debug, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    lines: Vec<Line>,
    legends: Vec<Legend>,
    algorithm_tags: Vec<(LineId, String)>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.x_label.clear();
        self.y_label.clear();
        self.lines.clear();
        self.legends.clear();
        self.algorithm_tags.clear();
    }

    /// Adds a line and returns its handle
    pub fn plot(&mut self, points: Vec<(u32, u64)>, color: PlotColor, style: LineStyle) -> LineId {
        let id = LineId(self.lines.len());
        self.lines.push(Line { id, points, color, style });
        id
    }

    /// Records which algorithm a line belongs to
    pub fn tag(&mut self, line: LineId, algorithm: &str) {
        self.algorithm_tags.push((line, algorithm.to_string()));
    }

    /// Attaches a legend. Earlier legends stay attached
    pub fn add_legend(&mut self, legend: Legend) {
        self.legends.push(legend);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn data_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| !l.is_placeholder())
    }

    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    /// The first tagged line of each distinct algorithm, in the order the algorithms were drawn
    pub fn algorithm_representatives(&self) -> Vec<(LineId, &str)> {
        let mut out: Vec<(LineId, &str)> = Vec::new();
        for (line, algorithm) in &self.algorithm_tags {
            if !out.iter().any(|(_, seen)| *seen == algorithm.as_str()) {
                out.push((*line, algorithm.as_str()));
            }
        }
        out
    }

    /// Axis ranges covering every data line, padded so a single point or all-zero counts still
    /// give a non-empty range
    fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let mut x_lo = f64::MAX;
        let mut x_hi = f64::MIN;
        let mut y_hi: f64 = 0.0;
        for &(x, y) in self.data_lines().flat_map(|l| l.points.iter()) {
            x_lo = x_lo.min(f64::from(x));
            x_hi = x_hi.max(f64::from(x));
            y_hi = y_hi.max(y as f64);
        }
        if x_lo > x_hi {
            x_lo = 0.0;
            x_hi = 1.0;
        } else if x_lo == x_hi {
            x_lo -= 1.0;
            x_hi += 1.0;
        }
        let y_hi = if y_hi > 0.0 { y_hi * 1.05 } else { 1.0 };
        (x_lo..x_hi, 0.0..y_hi)
    }
}

/// Lays out the chart for one workload
///
/// Each algorithm gets one line per metric in its colour, with the metric picking the line style.
/// Three black placeholder lines back the metric legend, and the algorithm legend uses the first
/// line drawn for each algorithm.
///
/// # Arguments
///
/// * `figure`: The figure to draw on, cleared first
/// * `workload`: Name of the workload, used in the title
/// * `results`: The workload's results, by algorithm then frame count
/// * `algorithms`: Algorithms in draw order, with their colours
pub fn compose(figure: &mut Figure, workload: &str, results: &AlgorithmResults, algorithms: &[AlgorithmConfig]) {
    figure.clear();
    figure.title = format!("Num frames vs num pagefault/diskread/diskwrite for {workload} program across algs");
    figure.x_label = "Num Frames".to_string();
    figure.y_label = "Num events".to_string();

    for algorithm in algorithms {
        let Some(frames) = results.get(algorithm.name.as_str()) else {
            continue;
        };
        for metric in Metric::ALL {
            let points = frames.iter().map(|(frame_count, metrics)| (*frame_count, metrics.get(metric))).collect();
            let line = figure.plot(points, algorithm.color, LineStyle::for_metric(metric));
            figure.tag(line, &algorithm.name);
        }
    }

    let metric_entries = Metric::ALL
        .iter()
        .map(|metric| LegendEntry {
            line: figure.plot(Vec::new(), PlotColor::Black, LineStyle::for_metric(*metric)),
            label: metric.name().to_string(),
        })
        .collect();
    let algorithm_entries = figure
        .algorithm_representatives()
        .into_iter()
        .map(|(line, algorithm)| LegendEntry { line, label: algorithm.to_string() })
        .collect();
    figure.add_legend(Legend { position: LegendPosition::UpperRight, entries: metric_entries });
    figure.add_legend(Legend { position: LegendPosition::LowerLeft, entries: algorithm_entries });
}

/// Draws a two point legend sample, in the same style as the line it stands for
fn draw_sample<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    from: (i32, i32),
    to: (i32, i32),
    color: RGBColor,
    style: LineStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let points = vec![from, to];
    match style {
        LineStyle::Solid => area.draw(&PathElement::new(points, color.stroke_width(STROKE_WIDTH))),
        LineStyle::Dashed => area.draw(&DashedPathElement::new(points, DASH_LENGTH, DASH_GAP, color.stroke_width(STROKE_WIDTH))),
        LineStyle::Dotted => area.draw(&DottedPathElement::new(points, 0, DOT_SPACING, move |c| Circle::new(c, DOT_RADIUS, color.filled()))),
    }
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    legend: &Legend,
    plot_x: &Range<i32>,
    plot_y: &Range<i32>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let rows: Vec<(&Line, &str)> = legend
        .entries
        .iter()
        .filter_map(|entry| figure.line(entry.line).map(|line| (line, entry.label.as_str())))
        .collect();
    if rows.is_empty() {
        return Ok(());
    }
    let label_width = rows.iter().map(|(_, label)| label.len()).max().unwrap_or(0) as i32 * LEGEND_GLYPH_WIDTH;
    let width = LEGEND_PADDING * 3 + LEGEND_SAMPLE + label_width;
    let height = LEGEND_PADDING * 2 + LEGEND_ROW * rows.len() as i32;
    let (left, top) = match legend.position {
        LegendPosition::UpperRight => (plot_x.end - width - LEGEND_PADDING, plot_y.start + LEGEND_PADDING),
        LegendPosition::LowerLeft => (plot_x.start + LEGEND_PADDING, plot_y.end - height - LEGEND_PADDING),
    };
    let corners = [(left, top), (left + width, top + height)];
    area.draw(&Rectangle::new(corners, WHITE.mix(0.8).filled()))?;
    area.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;
    for (row, (line, label)) in rows.iter().enumerate() {
        let y = top + LEGEND_PADDING + LEGEND_ROW * row as i32 + LEGEND_ROW / 2;
        let sample_left = left + LEGEND_PADDING;
        draw_sample(area, (sample_left, y), (sample_left + LEGEND_SAMPLE, y), line.color.rgb(), line.style)?;
        area.draw(&Text::new(
            label.to_string(),
            (sample_left + LEGEND_SAMPLE + LEGEND_PADDING, y - 7),
            ("sans-serif", 14).into_font(),
        ))?;
    }
    Ok(())
}

fn plot_error(path: &Path, e: impl std::fmt::Display) -> SweepError {
    SweepError::Plot { path: path.to_path_buf(), message: e.to_string() }
}

/// Renders a composed figure to a PNG, replacing any existing file
pub fn render(figure: &Figure, path: &Path, size: (u32, u32)) -> SweepResult<()> {
    let (x_range, y_range) = figure.bounds();
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| plot_error(path, e))?;
    chart
        .configure_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .draw()
        .map_err(|e| plot_error(path, e))?;

    for line in figure.data_lines() {
        let points: Vec<(f64, f64)> = line.points.iter().map(|&(x, y)| (f64::from(x), y as f64)).collect();
        let color = line.color.rgb();
        match line.style {
            LineStyle::Solid => chart.draw_series(std::iter::once(PathElement::new(points, color.stroke_width(STROKE_WIDTH)))),
            LineStyle::Dashed => chart.draw_series(std::iter::once(DashedPathElement::new(
                points,
                DASH_LENGTH,
                DASH_GAP,
                color.stroke_width(STROKE_WIDTH),
            ))),
            LineStyle::Dotted => chart.draw_series(std::iter::once(DottedPathElement::new(
                points,
                0,
                DOT_SPACING,
                move |c| Circle::new(c, DOT_RADIUS, color.filled()),
            ))),
        }
        .map_err(|e| plot_error(path, e))?;
    }
    let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();
    for legend in figure.legends() {
        draw_legend(&root, figure, legend, &plot_x, &plot_y).map_err(|e| plot_error(path, e))?;
    }
    root.present().map_err(|e| plot_error(path, e))?;
    Ok(())
}

/// Draws one chart per configured workload, returning the files written
///
/// Workloads without any results, for example when every run failed, are skipped
pub fn plot_workloads(config: &SweepConfig, table: &ResultTable) -> SweepResult<Vec<PathBuf>> {
    let mut figure = Figure::new();
    let mut written = Vec::new();
    for workload in &config.workloads {
        let Some(results) = table.workload(&workload.name).filter(|r| !r.is_empty()) else {
            warn!(workload = %workload.name, "no results, skipping chart");
            continue;
        };
        compose(&mut figure, &workload.name, results, &config.algorithms);
        let path = config.chart_path(&workload.name);
        render(&figure, &path, config.image_size)?;
        info!(workload = %workload.name, path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}
