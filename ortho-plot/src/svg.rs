//! Semilog-x line plots (SVG output)
//!
//! The x axis is logarithmic and labelled at every decade; the y axis is
//! linear over a fixed range. Values outside the y range are clamped to its
//! edges so every path stays inside the plot area.

use ortho_core::SampledFunction;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{PlotError, PlotResult};

/// Color for plot elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a new color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS color string
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Blue
    pub const BLUE: Color = Color::new(31, 119, 180);
    /// Orange
    pub const ORANGE: Color = Color::new(255, 127, 14);
    /// Green
    pub const GREEN: Color = Color::new(44, 160, 44);
    /// Red
    pub const RED: Color = Color::new(214, 39, 40);
    /// Purple
    pub const PURPLE: Color = Color::new(148, 103, 189);
    /// Brown
    pub const BROWN: Color = Color::new(140, 86, 75);
    /// Pink
    pub const PINK: Color = Color::new(227, 119, 194);
    /// Gray
    pub const GRAY: Color = Color::new(127, 127, 127);
    /// Olive
    pub const OLIVE: Color = Color::new(188, 189, 34);
    /// Cyan
    pub const CYAN: Color = Color::new(23, 190, 207);
}

/// Default color palette, cycled per function
pub const DEFAULT_COLORS: [Color; 10] = [
    Color::BLUE,
    Color::ORANGE,
    Color::GREEN,
    Color::RED,
    Color::PURPLE,
    Color::BROWN,
    Color::PINK,
    Color::GRAY,
    Color::OLIVE,
    Color::CYAN,
];

/// Default plot title
pub const DEFAULT_TITLE: &str = "Orthogonalized inverse-monomial functions";

/// Plot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Plot width in pixels
    pub width: u32,
    /// Plot height in pixels
    pub height: u32,
    /// Left margin
    pub margin_left: u32,
    /// Right margin
    pub margin_right: u32,
    /// Top margin
    pub margin_top: u32,
    /// Bottom margin
    pub margin_bottom: u32,
    /// Title
    pub title: Option<String>,
    /// X-axis label
    pub x_label: Option<String>,
    /// Y-axis label
    pub y_label: Option<String>,
    /// Show grid
    pub show_grid: bool,
    /// Show legend
    pub show_legend: bool,
    /// Lower end of the y axis
    pub y_min: f64,
    /// Upper end of the y axis
    pub y_max: f64,
    /// Line width
    pub line_width: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            margin_left: 70,
            margin_right: 140,
            margin_top: 50,
            margin_bottom: 60,
            title: Some(DEFAULT_TITLE.to_string()),
            x_label: Some("t".to_string()),
            y_label: Some("phi_i(t)".to_string()),
            show_grid: true,
            show_legend: true,
            y_min: -1.0,
            y_max: 1.0,
            line_width: 1.5,
        }
    }
}

impl PlotConfig {
    /// Create a new config with title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set dimensions
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the y range
    #[must_use]
    pub fn with_y_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Get plot area dimensions
    #[must_use]
    pub fn plot_area(&self) -> (u32, u32, u32, u32) {
        (
            self.margin_left,
            self.margin_top,
            self.width
                .saturating_sub(self.margin_left + self.margin_right),
            self.height
                .saturating_sub(self.margin_top + self.margin_bottom),
        )
    }
}

/// Data series for plotting
#[derive(Debug, Clone)]
pub struct DataSeries {
    /// Series name
    pub name: String,
    /// Data points (x, y), x > 0
    pub points: Vec<(f64, f64)>,
    /// Series color
    pub color: Color,
}

impl DataSeries {
    /// Create a new data series
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            name: name.into(),
            points,
            color,
        }
    }

    /// Create from a sampled function, labelled `i = k`
    #[must_use]
    pub fn from_sampled(sampled: &SampledFunction, color: Color) -> Self {
        Self::new(format!("i = {}", sampled.index), sampled.points.clone(), color)
    }
}

/// Semilog-x SVG plot of sampled functions
pub struct FunctionPlot {
    config: PlotConfig,
    series: Vec<DataSeries>,
}

/// Pixel mapping of the plot area
struct Frame {
    x_off: f64,
    y_off: f64,
    width: f64,
    height: f64,
    log_min: f64,
    log_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        let span = (self.log_max - self.log_min).max(f64::EPSILON);
        self.x_off + (x.log10() - self.log_min) / span * self.width
    }

    fn py(&self, y: f64) -> f64 {
        let y = y.clamp(self.y_min, self.y_max);
        let span = (self.y_max - self.y_min).max(f64::EPSILON);
        self.y_off + self.height - (y - self.y_min) / span * self.height
    }
}

impl FunctionPlot {
    /// Create a new plot
    #[must_use]
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
        }
    }

    /// Create a plot of sampled functions with the default configuration
    #[must_use]
    pub fn from_samples(samples: &[SampledFunction]) -> Self {
        let mut plot = Self::new(PlotConfig::default());
        for sampled in samples {
            plot.add_sampled(sampled);
        }
        plot
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// Add a sampled function with the next palette color
    pub fn add_sampled(&mut self, sampled: &SampledFunction) {
        let color = DEFAULT_COLORS[self.series.len() % DEFAULT_COLORS.len()];
        self.add_series(DataSeries::from_sampled(sampled, color));
    }

    /// Number of series
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check whether the plot has no series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Generate SVG content
    pub fn to_svg(&self) -> PlotResult<String> {
        let frame = self.frame().ok_or(PlotError::NoData)?;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<style>
    .title {{ font: bold 16px sans-serif; }}
    .label {{ font: 12px sans-serif; }}
    .axis {{ font: 10px sans-serif; }}
    .grid {{ stroke: #e0e0e0; stroke-width: 1; }}
    .legend {{ font: 11px sans-serif; }}
</style>
<rect width="100%" height="100%" fill="white"/>
"#,
            w = self.config.width,
            h = self.config.height
        );

        if self.config.show_grid {
            self.write_grid(&mut svg, &frame);
        }
        self.write_axes(&mut svg, &frame);
        for series in &self.series {
            self.write_series(&mut svg, &frame, series);
        }

        if let Some(ref title) = self.config.title {
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{}" class="title" text-anchor="middle">{}</text>"#,
                self.config.width / 2,
                25,
                title
            );
        }
        if let Some(ref label) = self.config.x_label {
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{}" class="label" text-anchor="middle">{}</text>"#,
                frame.x_off + frame.width / 2.0,
                self.config.height - 15,
                label
            );
        }
        if let Some(ref label) = self.config.y_label {
            let cy = frame.y_off + frame.height / 2.0;
            let _ = writeln!(
                svg,
                r#"<text x="20" y="{cy:.1}" class="label" text-anchor="middle" transform="rotate(-90,20,{cy:.1})">{label}</text>"#
            );
        }
        if self.config.show_legend {
            self.write_legend(&mut svg, frame.x_off + frame.width + 15.0, frame.y_off);
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Write SVG to file
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.to_svg()?;
        fs::write(path, svg)?;
        Ok(())
    }

    /// Plot area and data bounds; `None` without any positive abscissa
    fn frame(&self) -> Option<Frame> {
        let (lo, hi) = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|&(x, _)| x)
            .filter(|x| *x > 0.0 && x.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })?;

        let (x_off, y_off, w, h) = self.config.plot_area();
        Some(Frame {
            x_off: f64::from(x_off),
            y_off: f64::from(y_off),
            width: f64::from(w),
            height: f64::from(h),
            log_min: lo.log10().floor(),
            log_max: hi.log10().ceil().max(lo.log10().floor() + 1.0),
            y_min: self.config.y_min,
            y_max: self.config.y_max,
        })
    }

    /// Horizontal grid at the y ticks
    fn write_grid(&self, svg: &mut String, frame: &Frame) {
        for y in self.y_ticks() {
            let py = frame.py(y);
            let _ = writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}" class="grid"/>"#,
                frame.x_off,
                frame.x_off + frame.width
            );
        }
    }

    /// Axes with decade labels on x and -1/0/1 style labels on y
    fn write_axes(&self, svg: &mut String, frame: &Frame) {
        let bottom = frame.y_off + frame.height;
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{bottom:.1}" x2="{:.1}" y2="{bottom:.1}" stroke="black" stroke-width="2"/>"#,
            frame.x_off,
            frame.x_off + frame.width
        );
        let _ = writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="black" stroke-width="2"/>"#,
            frame.y_off,
            x = frame.x_off
        );

        let first = frame.log_min as i32;
        let last = frame.log_max as i32;
        for exp in first..=last {
            let px = frame.px(10f64.powi(exp));
            let _ = writeln!(
                svg,
                r#"<text x="{px:.1}" y="{:.1}" class="axis" text-anchor="middle">1e{exp}</text>"#,
                bottom + 18.0
            );
        }

        for y in self.y_ticks() {
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" class="axis" text-anchor="end">{}</text>"#,
                frame.x_off - 8.0,
                frame.py(y) + 4.0,
                y
            );
        }
    }

    fn y_ticks(&self) -> Vec<f64> {
        let (lo, hi) = (self.config.y_min, self.config.y_max);
        if lo < 0.0 && hi > 0.0 {
            vec![lo, 0.0, hi]
        } else {
            vec![lo, hi]
        }
    }

    /// Data series path
    fn write_series(&self, svg: &mut String, frame: &Frame, series: &DataSeries) {
        let mut path = String::new();
        for (x, y) in series
            .points
            .iter()
            .filter(|(x, y)| *x > 0.0 && x.is_finite() && y.is_finite())
        {
            let cmd = if path.is_empty() { "M" } else { " L" };
            let _ = write!(path, "{cmd} {:.1} {:.1}", frame.px(*x), frame.py(*y));
        }
        if path.is_empty() {
            return;
        }
        let _ = writeln!(
            svg,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path,
            series.color.to_css(),
            self.config.line_width
        );
    }

    /// Legend to the right of the plot area
    fn write_legend(&self, svg: &mut String, x: f64, y: f64) {
        let legend_height = 20 * self.series.len() + 10;
        let _ = writeln!(
            svg,
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"100\" height=\"{legend_height}\" fill=\"white\" stroke=\"#ccc\" rx=\"5\"/>"
        );
        for (i, series) in self.series.iter().enumerate() {
            let ly = y + 20.0 + 20.0 * i as f64;
            let _ = writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{}" stroke-width="3"/>"#,
                x + 10.0,
                x + 35.0,
                series.color.to_css()
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" class="legend">{}</text>"#,
                x + 45.0,
                ly + 4.0,
                series.name
            );
        }
    }
}
