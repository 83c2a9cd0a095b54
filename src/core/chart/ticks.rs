use crate::core::format::format_rate;
use crate::core::series::Sample;
use crate::core::stats::SummaryStats;

pub const MAX_X_TICKS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub position: f64,
    pub label: String,
}

/// Evenly strided sample indices, always ending on the last sample.
pub fn x_tick_indices(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let target = MAX_X_TICKS.min(count);
    let stride = ((count - 1) / (target - 1).max(1)).max(1);
    let mut indices: Vec<usize> = (0..count).step_by(stride).collect();
    if indices.last() != Some(&(count - 1)) {
        indices.push(count - 1);
    }
    indices
}

pub fn x_label(sample: &Sample) -> String {
    sample.date.format("%b %-d").to_string()
}

/// Low, midpoint and high values, in ascending order.
pub fn y_tick_values(stats: &SummaryStats) -> [f64; 3] {
    [stats.low, (stats.low + stats.high) / 2.0, stats.high]
}

pub fn y_label(value: f64) -> String {
    format_rate(value)
}
