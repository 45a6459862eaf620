//! SVG tour plot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::{read_instance, read_tour_file};
use crate::models::{check_permutation, Point};

/// Canvas and style settings for [`render_svg`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Blank border around the drawing area.
    pub margin: f64,
    /// Height reserved above the drawing area for the title.
    pub title_height: f64,
    /// Tour line width.
    pub stroke_width: f64,
    /// Radius of the marker drawn at each visited point.
    pub marker_radius: f64,
    /// Font size of the index labels.
    pub label_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin: 40.0,
            title_height: 30.0,
            stroke_width: 1.0,
            marker_radius: 3.0,
            label_size: 6.0,
        }
    }
}

/// Maps instance coordinates to canvas pixels with one scale for both axes.
///
/// Larger y is drawn higher. The drawing is centered in the area left
/// after the margin and title.
fn project(points: &[Point], options: &RenderOptions) -> Vec<(f64, f64)> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x(), first.x(), first.y(), first.y());
    for p in points {
        min_x = min_x.min(p.x());
        max_x = max_x.max(p.x());
        min_y = min_y.min(p.y());
        max_y = max_y.max(p.y());
    }

    let left = options.margin;
    let top = options.margin + options.title_height;
    let area_w = (options.width - 2.0 * options.margin).max(1.0);
    let area_h = (options.height - 2.0 * options.margin - options.title_height).max(1.0);

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    let scale = match (span_x > 0.0, span_y > 0.0) {
        (true, true) => (area_w / span_x).min(area_h / span_y),
        (true, false) => area_w / span_x,
        (false, true) => area_h / span_y,
        (false, false) => 1.0,
    };

    let offset_x = left + (area_w - span_x * scale) / 2.0;
    let offset_y = top + (area_h - span_y * scale) / 2.0;

    points
        .iter()
        .map(|p| {
            (
                offset_x + (p.x() - min_x) * scale,
                offset_y + (max_y - p.y()) * scale,
            )
        })
        .collect()
}

/// Renders a closed tour over an instance as an SVG document.
///
/// The tour is drawn as a polyline back to its first point, with a marker
/// at each point and each point's index as a label. No axes are drawn.
///
/// # Errors
///
/// Fails if `tour` is not a permutation of the instance's point indices.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::render::{render_svg, RenderOptions};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
/// let svg = render_svg(&points, &[0, 1, 2], &RenderOptions::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("TSP tour"));
/// ```
pub fn render_svg(points: &[Point], tour: &[usize], options: &RenderOptions) -> Result<String> {
    check_permutation(tour, points.len())?;

    let pixels = project(points, options);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = options.width,
        h = options.height
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"16\" text-anchor=\"middle\">TSP tour \u{2022} {} cities</text>\n",
        options.width / 2.0,
        options.margin + options.title_height / 2.0,
        points.len()
    ));

    if let Some(&start) = tour.first() {
        let path: Vec<String> = tour
            .iter()
            .chain(std::iter::once(&start))
            .map(|&i| format!("{:.2},{:.2}", pixels[i].0, pixels[i].1))
            .collect();
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"{}\" points=\"{}\"/>\n",
            options.stroke_width,
            path.join(" ")
        ));
    }

    svg.push_str("<g fill=\"#1f77b4\">\n");
    for &i in tour {
        let (x, y) = pixels[i];
        svg.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{}\"/>\n",
            options.marker_radius
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        "<g font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"end\">\n",
        options.label_size
    ));
    for (idx, &(x, y)) in pixels.iter().enumerate() {
        svg.push_str(&format!("<text x=\"{x:.2}\" y=\"{y:.2}\">{idx}</text>\n"));
    }
    svg.push_str("</g>\n</svg>\n");

    Ok(svg)
}

/// Reads an instance file and a tour file and renders them.
pub fn render_files(
    instance_path: impl AsRef<Path>,
    tour_path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<String> {
    let points = read_instance(instance_path)?;
    let tour = read_tour_file(tour_path)?;
    log::debug!("render: {} points, tour of {}", points.len(), tour.len());
    render_svg(&points, &tour, options)
}
