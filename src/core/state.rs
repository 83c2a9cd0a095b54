//! Application state and its transitions.
//!
//! State is a plain value: [`update`] consumes the current state and an
//! [`Action`] and returns the next state. Refreshes are tagged with a
//! generation number so that a slow response from an older refresh can never
//! overwrite a newer one.

use crate::core::rate::{RateProvider, RateQuote};
use crate::core::series::{Pair, Series, WindowRange};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub pair: Pair,
    /// Day used for the historical quote.
    pub date: NaiveDate,
    /// End of the chart window.
    pub today: NaiveDate,
    pub amount: f64,
    pub fee_percent: f64,
    pub range: WindowRange,
    pub latest: Option<RateQuote>,
    pub historical: Option<RateQuote>,
    pub series: Series,
    pub generation: u64,
    pub error: Option<String>,
}

impl AppState {
    pub fn new(pair: Pair, today: NaiveDate, range: WindowRange, amount: f64, fee: f64) -> Self {
        AppState {
            pair,
            date: today - Duration::days(1),
            today,
            amount,
            fee_percent: fee,
            range,
            latest: None,
            historical: None,
            series: Series::default(),
            generation: 0,
            error: None,
        }
    }

    /// Parameters of the refresh for the current generation.
    pub fn refresh_request(&self) -> RefreshRequest {
        let (start, end) = self.range.bounds(self.today);
        RefreshRequest {
            generation: self.generation,
            pair: self.pair.clone(),
            date: self.date,
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshRequest {
    pub generation: u64,
    pub pair: Pair,
    pub date: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshData {
    pub latest: RateQuote,
    pub historical: RateQuote,
    pub series: Series,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetPair(Pair),
    SwapPair,
    SetDate(NaiveDate),
    SetAmount(f64),
    SetFee(f64),
    SetRange(WindowRange),
    BeginRefresh,
    RefreshLoaded { generation: u64, data: RefreshData },
    RefreshFailed { generation: u64, message: String },
}

pub fn update(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetPair(pair) => AppState { pair, ..state },
        Action::SwapPair => AppState {
            pair: state.pair.swapped(),
            ..state
        },
        Action::SetDate(date) => AppState { date, ..state },
        Action::SetAmount(amount) => AppState { amount, ..state },
        Action::SetFee(fee_percent) => AppState {
            fee_percent,
            ..state
        },
        Action::SetRange(range) => AppState { range, ..state },
        Action::BeginRefresh => AppState {
            generation: state.generation + 1,
            ..state
        },
        Action::RefreshLoaded { generation, data } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "Discarding stale refresh result"
                );
                return state;
            }
            AppState {
                latest: Some(data.latest),
                historical: Some(data.historical),
                series: data.series,
                error: None,
                ..state
            }
        }
        Action::RefreshFailed {
            generation,
            message,
        } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "Discarding stale refresh failure"
                );
                return state;
            }
            AppState {
                error: Some(message),
                ..state
            }
        }
    }
}

/// Fetches latest, historical and window data concurrently. Any single
/// failure fails the whole refresh.
#[instrument(name = "Refresh", skip(provider), fields(pair = %request.pair))]
pub async fn refresh(provider: &dyn RateProvider, request: &RefreshRequest) -> Result<RefreshData> {
    let (latest, historical, series) = futures::try_join!(
        provider.latest(&request.pair),
        provider.historical(&request.pair, request.date),
        provider.window(&request.pair, request.start, request.end),
    )?;
    debug!(samples = series.len(), "Refresh complete");
    Ok(RefreshData {
        latest,
        historical,
        series,
    })
}

/// Runs one full refresh cycle against `state`. A failure is recorded in the
/// returned state; reporting it is left to the caller.
pub async fn run_refresh(provider: &dyn RateProvider, state: AppState) -> AppState {
    let state = update(state, Action::BeginRefresh);
    let request = state.refresh_request();
    let action = match refresh(provider, &request).await {
        Ok(data) => Action::RefreshLoaded {
            generation: request.generation,
            data,
        },
        Err(e) => {
            debug!(error = %e, "Refresh failed");
            Action::RefreshFailed {
                generation: request.generation,
                message: e.to_string(),
            }
        }
    };
    update(state, action)
}
