//! Doughnut model: turns a normalized [`CategorySeries`] into slices with
//! colors, shares, arc geometry, and the tooltip/legend copy the chart shows.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::format::{format_currency, format_percent};
use crate::core::palette::Palette;
use crate::core::series::CategorySeries;

/// Inner radius as a fraction of the outer radius.
pub const CUTOUT: f64 = 0.6;

/// Sweeps this close to a full turn are drawn as a closed ring.
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Fraction of the total, 0.0–1.0.
    pub share: f64,
    pub color: &'static str,
    pub hover_color: String,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }

    pub fn percent_label(&self) -> String {
        format_percent(self.percent())
    }

    pub fn legend_text(&self) -> String {
        format!("{} ({})", self.label, self.percent_label())
    }

    pub fn tooltip_text(&self) -> String {
        format!(
            "{}: {} ({})",
            self.label,
            format_currency(self.value),
            self.percent_label()
        )
    }

    /// SVG path for this slice's ring segment in a `size`×`size` viewBox.
    pub fn ring_path(&self, size: f64) -> String {
        let center = size / 2.0;
        let outer = center;
        let inner = outer * CUTOUT;
        ring_segment_path(center, outer, inner, self.start_angle, self.end_angle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub slices: Vec<Slice>,
    pub total: f64,
}

impl Breakdown {
    /// Build the chart model. Returns `None` for an empty series so callers
    /// render the placeholder state instead of a blank ring.
    pub fn from_series(series: &CategorySeries, palette: &Palette) -> Option<Self> {
        let largest = series.iter().map(|(_, v)| v).fold(0.0_f64, f64::max);
        if series.is_empty() || !largest.is_finite() || largest <= 0.0 {
            return None;
        }

        // Near f64::MAX the plain sum overflows; shares then come from values
        // scaled by the largest one, which always sums finitely.
        let total = series.total();
        let (divisor, scale) = if total.is_finite() {
            (total, 1.0)
        } else {
            let scaled: f64 = series.iter().map(|(_, v)| v / largest).sum();
            (scaled, largest)
        };

        let mut cursor = 0.0;
        let slices = series
            .iter()
            .enumerate()
            .map(|(index, (label, value))| {
                let share = (value / scale) / divisor;
                let start_angle = cursor;
                cursor += share * TAU;
                Slice {
                    index,
                    label: label.to_string(),
                    value,
                    share,
                    color: palette.color(index),
                    hover_color: palette.hover_color(index),
                    start_angle,
                    end_angle: cursor,
                }
            })
            .collect();

        Some(Self { slices, total })
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total_label(&self) -> String {
        format_currency(self.total)
    }
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (center + radius * theta.cos(), center + radius * theta.sin())
}

/// Closed ring segment between `start` and `end` (radians clockwise from top).
pub fn ring_segment_path(center: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).max(0.0);

    if sweep >= TAU - FULL_TURN_EPSILON {
        // A single arc cannot start and end on the same point; draw two
        // half-circles per ring and let even-odd fill punch the hole.
        let (ox, oy) = point(center, outer, 0.0);
        let (ox2, oy2) = point(center, outer, TAU / 2.0);
        let (ix, iy) = point(center, inner, 0.0);
        let (ix2, iy2) = point(center, inner, TAU / 2.0);
        return format!(
            "M {ox:.3} {oy:.3} A {outer:.3} {outer:.3} 0 1 1 {ox2:.3} {oy2:.3} \
             A {outer:.3} {outer:.3} 0 1 1 {ox:.3} {oy:.3} Z \
             M {ix:.3} {iy:.3} A {inner:.3} {inner:.3} 0 1 0 {ix2:.3} {iy2:.3} \
             A {inner:.3} {inner:.3} 0 1 0 {ix:.3} {iy:.3} Z"
        );
    }

    let large_arc = u8::from(sweep > TAU / 2.0);
    let (osx, osy) = point(center, outer, start);
    let (oex, oey) = point(center, outer, end);
    let (iex, iey) = point(center, inner, end);
    let (isx, isy) = point(center, inner, start);

    format!(
        "M {osx:.3} {osy:.3} A {outer:.3} {outer:.3} 0 {large_arc} 1 {oex:.3} {oey:.3} \
         L {iex:.3} {iey:.3} A {inner:.3} {inner:.3} 0 {large_arc} 0 {isx:.3} {isy:.3} Z"
    )
}
