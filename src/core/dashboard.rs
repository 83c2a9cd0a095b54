//! Pure projection of [`AppState`] into everything a renderer shows.

use crate::core::chart::{ChartLayout, PlotGeometry};
use crate::core::convert::Conversion;
use crate::core::rate::RateQuote;
use crate::core::series::{Pair, WindowRange};
use crate::core::state::AppState;
use crate::core::stats::SummaryStats;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub pair: Pair,
    pub range: WindowRange,
    pub latest: Option<RateQuote>,
    pub historical: Option<RateQuote>,
    pub live_conversion: Option<Conversion>,
    pub historical_conversion: Option<Conversion>,
    pub stats: Option<SummaryStats>,
    /// `None` when there is no series to draw.
    pub geometry: Option<PlotGeometry>,
    pub error: Option<String>,
}

impl Dashboard {
    pub fn project(state: &AppState, layout: ChartLayout) -> Self {
        let convert =
            |quote: &RateQuote| Conversion::compute(state.amount, quote.rate, state.fee_percent);
        let geometry = PlotGeometry::build(&state.series, layout);
        Dashboard {
            pair: state.pair.clone(),
            range: state.range,
            latest: state.latest,
            historical: state.historical,
            live_conversion: state.latest.as_ref().map(convert),
            historical_conversion: state.historical.as_ref().map(convert),
            stats: geometry.as_ref().map(|g| g.stats),
            geometry,
            error: state.error.clone(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} · {}", self.pair, self.range)
    }
}
