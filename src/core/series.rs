//! Rate samples, series and the currency pair they describe.

use anyhow::{Result, anyhow, bail};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A currency pair, printed and parsed as `BASE/QUOTE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair {
    pub base: String,
    pub quote: String,
}

impl Pair {
    pub fn new(base: &str, quote: &str) -> Result<Self> {
        Ok(Pair {
            base: parse_code(base)?,
            quote: parse_code(quote)?,
        })
    }

    /// Identical base and quote always trade at 1.
    pub fn is_identity(&self) -> bool {
        self.base == self.quote
    }

    pub fn swapped(&self) -> Self {
        Pair {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }
}

fn parse_code(code: &str) -> Result<String> {
    let code = code.trim().to_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("Invalid currency code: {}", code);
    }
    Ok(code)
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Pair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| anyhow!("Invalid currency pair: {} (expected BASE/QUOTE)", s))?;
        Pair::new(base, quote)
    }
}

impl TryFrom<String> for Pair {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> String {
        pair.to_string()
    }
}

/// Length of the chart window ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowRange {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Display for WindowRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WindowRange::OneWeek => "1W",
                WindowRange::OneMonth => "1M",
                WindowRange::ThreeMonths => "3M",
                WindowRange::SixMonths => "6M",
                WindowRange::OneYear => "1Y",
            }
        )
    }
}

impl WindowRange {
    pub fn to_duration(&self) -> Duration {
        match self {
            WindowRange::OneWeek => Duration::days(7),
            WindowRange::OneMonth => Duration::days(30),
            WindowRange::ThreeMonths => Duration::days(90),
            WindowRange::SixMonths => Duration::days(182),
            WindowRange::OneYear => Duration::days(365),
        }
    }

    /// Inclusive start and end dates of the window ending on `end`. The
    /// window spans exactly `to_duration()` calendar days.
    pub fn bounds(&self, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        (end - self.to_duration() + Duration::days(1), end)
    }
}

impl FromStr for WindowRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "1W" => Ok(WindowRange::OneWeek),
            "1M" => Ok(WindowRange::OneMonth),
            "3M" => Ok(WindowRange::ThreeMonths),
            "6M" => Ok(WindowRange::SixMonths),
            "1Y" => Ok(WindowRange::OneYear),
            _ => Err(anyhow!("Invalid window range: {}", s)),
        }
    }
}

impl TryFrom<String> for WindowRange {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowRange> for String {
    fn from(range: WindowRange) -> String {
        range.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Sample { date, value }
    }
}

/// Samples in ascending date order with unique dates and finite values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(mut samples: Vec<Sample>) -> Result<Self> {
        if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
            bail!("Non-finite rate {} on {}", bad.value, bad.date);
        }
        samples.sort_by_key(|s| s.date);
        if let Some(dup) = samples.windows(2).find(|w| w[0].date == w[1].date) {
            bail!("Duplicate sample date in series: {}", dup[0].date);
        }
        Ok(Series { samples })
    }

    /// One sample per calendar day from `start` to `end` inclusive, all at `value`.
    pub fn flat(start: NaiveDate, end: NaiveDate, value: f64) -> Self {
        let samples = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|date| Sample::new(date, value))
            .collect();
        Series { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }
}
