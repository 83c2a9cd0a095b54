//! Sparkline chart geometry: coordinate mapping, paths, ticks and SVG output.
//!
//! Everything here is a pure function of a [`Series`] and a [`ChartLayout`]
//! and is recomputed on every render.

pub mod mapper;
pub mod path;
pub mod svg;
pub mod ticks;

use crate::core::series::Series;
use crate::core::stats::{Extremes, SummaryStats};
use mapper::CoordinateMapper;
use path::Path;
use serde::{Deserialize, Serialize};
use ticks::Tick;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 20.0,
            right: 24.0,
            bottom: 32.0,
            left: 64.0,
        }
    }
}

/// Logical canvas size and margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: Margins,
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            width: 1000.0,
            height: 300.0,
            margin: Margins::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotGeometry {
    pub layout: ChartLayout,
    pub points: Vec<(f64, f64)>,
    pub stroke: Path,
    pub fill: Path,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub high: Marker,
    pub low: Marker,
    pub stats: SummaryStats,
}

impl PlotGeometry {
    /// Returns `None` for an empty series; there is nothing to draw.
    pub fn build(series: &Series, layout: ChartLayout) -> Option<Self> {
        let stats = SummaryStats::from_series(series)?;
        let values: Vec<f64> = series.values().collect();
        let extremes = Extremes::locate(&values, &stats)?;
        let mapper = CoordinateMapper::new(layout, values.len(), stats.low, stats.high);

        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| mapper.point(i, *v))
            .collect();

        let x_ticks = ticks::x_tick_indices(values.len())
            .into_iter()
            .map(|index| Tick {
                index,
                position: mapper.x(index),
                label: ticks::x_label(&series.samples()[index]),
            })
            .collect();

        let y_ticks = ticks::y_tick_values(&stats)
            .into_iter()
            .enumerate()
            .map(|(index, value)| Tick {
                index,
                position: mapper.y(value),
                label: ticks::y_label(value),
            })
            .collect();

        let marker = |index: usize| {
            let value = values[index];
            let (x, y) = mapper.point(index, value);
            Marker { index, x, y, value }
        };

        Some(PlotGeometry {
            layout,
            stroke: path::stroke_path(&values, &mapper),
            fill: path::fill_path(&values, &mapper),
            points,
            x_ticks,
            y_ticks,
            high: marker(extremes.high_index),
            low: marker(extremes.low_index),
            stats,
        })
    }
}
