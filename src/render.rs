//! Renderer collaborator: display metadata, an SVG scatter chart and a
//! CSV point dump.
//!
//! The simulation core hands ring point-sets plus per-zone colour and
//! label to a [`Renderer`], which either shows them interactively or
//! writes them to a path.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::error::{Result, SimError};
use crate::geometry::{Point3, ZonePointSet};

/// Plot title shared by renderers.
pub const TITLE: &str = "Nested Dilation Zones - Inner Massive Etch, Outer Fast Kick";

/// RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn to_rgb(self) -> RGBColor {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBColor(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Viridis at `t ∈ [0, 1]` (clamped, NaN maps to 0).
pub fn viridis(t: f64) -> Rgba {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let RGBColor(r, g, b) = ViridisRGB.get_color(t as f32);
    Rgba::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
}

/// Per-zone display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDisplay {
    pub index: usize,
    pub color: Rgba,
    pub label: String,
}

/// Colours evenly spread over viridis and `"Zone {i}"` labels.
pub fn zone_displays(zones: usize) -> Vec<ZoneDisplay> {
    let denom = zones.saturating_sub(1).max(1) as f64;
    (0..zones)
        .map(|i| ZoneDisplay {
            index: i,
            color: viridis(i as f64 / denom),
            label: format!("Zone {}", i),
        })
        .collect()
}

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTarget {
    Interactive,
    File(PathBuf),
}

/// External consumer of zone point-sets.
pub trait Renderer {
    fn render(
        &mut self,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
        target: &RenderTarget,
    ) -> Result<()>;
}

/// Dumps every point with its zone label and colour as CSV.
///
/// Interactive output goes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    /// Write the CSV body to any sink.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
    ) -> io::Result<()> {
        writeln!(out, "# {}", TITLE)?;
        writeln!(out, "zone,label,x,y,z,r,g,b,a")?;
        for zone in zones {
            let display = displays.iter().find(|d| d.index == zone.index);
            let (label, color) = match display {
                Some(d) => (d.label.as_str(), d.color),
                None => ("", Rgba::new(0.0, 0.0, 0.0, 1.0)),
            };
            for p in &zone.points {
                writeln!(
                    out,
                    "{},{},{:.6},{:.6},{:.6},{:.4},{:.4},{:.4},{:.2}",
                    zone.index, label, p.x, p.y, p.z, color.r, color.g, color.b, color.a
                )?;
            }
        }
        out.flush()
    }
}

impl Renderer for CsvRenderer {
    fn render(
        &mut self,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
        target: &RenderTarget,
    ) -> Result<()> {
        match target {
            RenderTarget::Interactive => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                self.write_to(&mut lock, zones, displays)?;
            }
            RenderTarget::File(path) => {
                let mut file = BufWriter::new(File::create(path)?);
                self.write_to(&mut file, zones, displays)?;
                info!("wrote {} zones to {}", zones.len(), path.display());
            }
        }
        Ok(())
    }
}

/// Draws the rings as a 3D scatter chart into an SVG document.
///
/// One point series per zone in the zone's display colour, the zone label
/// at the ring's first point and [`TITLE`] as the caption. A `.png` file
/// target is written next to it as `.svg`.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    pub size: (u32, u32),
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: (800, 640) }
    }
}

impl SvgRenderer {
    /// Render into an in-memory SVG document.
    pub fn render_to_string(
        &self,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
    ) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            draw_zone_chart(&root, zones, displays)
                .map_err(|e| SimError::render(e.to_string()))?;
            root.present().map_err(|e| SimError::render(e.to_string()))?;
        }
        Ok(svg)
    }

    /// Render to `path`, returning the file actually written.
    pub fn render_to_file(
        &self,
        path: &Path,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
    ) -> Result<PathBuf> {
        let svg_path = if path.extension().map(|e| e == "png").unwrap_or(false) {
            path.with_extension("svg")
        } else {
            path.to_path_buf()
        };
        {
            let root = SVGBackend::new(&svg_path, self.size).into_drawing_area();
            draw_zone_chart(&root, zones, displays)
                .map_err(|e| SimError::render(e.to_string()))?;
            root.present().map_err(|e| SimError::render(e.to_string()))?;
        }
        info!("wrote {} zones to {}", zones.len(), svg_path.display());
        Ok(svg_path)
    }
}

impl Renderer for SvgRenderer {
    fn render(
        &mut self,
        zones: &[ZonePointSet],
        displays: &[ZoneDisplay],
        target: &RenderTarget,
    ) -> Result<()> {
        match target {
            RenderTarget::Interactive => {
                warn!("no interactive display for SVG output; pass a file target");
                Err(SimError::render("SVG renderer needs a file target"))
            }
            RenderTarget::File(path) => self.render_to_file(path, zones, displays).map(|_| ()),
        }
    }
}

/// Axis range over one coordinate, padded so a flat ring still has extent.
fn axis_range(points: &[Point3], coord: fn(&Point3) -> f64) -> Range<f64> {
    let (lo, hi) = points
        .iter()
        .map(coord)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return -1.0..1.0;
    }
    let pad = ((hi - lo) * 0.1).max(0.5);
    (lo - pad)..(hi + pad)
}

fn draw_zone_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    zones: &[ZonePointSet],
    displays: &[ZoneDisplay],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let all: Vec<Point3> = zones.iter().flat_map(|z| z.points.iter().copied()).collect();
    if all.is_empty() {
        root.draw(&Text::new(
            TITLE,
            (50, 50),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        return Ok(());
    }

    // The second axis is drawn vertically, so rings stack along it by zone.
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 20))
        .margin(20)
        .build_cartesian_3d(
            axis_range(&all, |p| p.x),
            axis_range(&all, |p| p.z),
            axis_range(&all, |p| p.y),
        )?;
    chart.configure_axes().draw()?;

    for zone in zones {
        let display = displays.iter().find(|d| d.index == zone.index);
        let color = display.map(|d| d.color.to_rgb()).unwrap_or(BLACK);
        chart.draw_series(
            zone.points
                .iter()
                .filter(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
                .map(|p| Circle::new((p.x, p.z, p.y), 3, color.filled())),
        )?;
        if let (Some(d), Some(first)) = (display, zone.points.first()) {
            chart.draw_series(std::iter::once(Text::new(
                d.label.clone(),
                (first.x, first.z, first.y),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))?;
        }
    }
    Ok(())
}
