//! Summary statistics over a rate series.
use crate::core::series::Series;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub high: f64,
    pub low: f64,
    pub average: f64,
}

impl SummaryStats {
    /// Returns `None` for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        Self::from_values(&series.values().collect::<Vec<_>>())
    }

    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let low = values.iter().copied().fold(f64::INFINITY, f64::min);
        // A flat series averages to its value exactly, without summation error.
        let average = if high == low {
            low
        } else {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            mean.clamp(low, high)
        };
        Some(SummaryStats { high, low, average })
    }
}

/// Indices of the first sample equal to the high and low respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    pub high_index: usize,
    pub low_index: usize,
}

impl Extremes {
    pub fn locate(values: &[f64], stats: &SummaryStats) -> Option<Self> {
        let high_index = values.iter().position(|v| *v == stats.high)?;
        let low_index = values.iter().position(|v| *v == stats.low)?;
        Some(Extremes {
            high_index,
            low_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::Sample;
    use chrono::NaiveDate;

    fn series(points: &[(&str, f64)]) -> Series {
        Series::new(
            points
                .iter()
                .map(|(d, v)| Sample::new(NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(), *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_three_day_scenario() {
        let series = series(&[
            ("2024-01-01", 1.10),
            ("2024-01-02", 1.20),
            ("2024-01-03", 1.15),
        ]);
        let stats = SummaryStats::from_series(&series).unwrap();
        assert_eq!(stats.high, 1.20);
        assert_eq!(stats.low, 1.10);
        assert!((stats.average - 1.15).abs() < 1e-12);

        let values: Vec<f64> = series.values().collect();
        let extremes = Extremes::locate(&values, &stats).unwrap();
        assert_eq!(extremes.high_index, 1);
        assert_eq!(extremes.low_index, 0);
    }

    #[test]
    fn test_average_of_equal_values_is_exact() {
        for k in [0.1, 1.0 / 3.0, 1.2345, 98765.4321] {
            let values = vec![k; 17];
            let stats = SummaryStats::from_values(&values).unwrap();
            assert_eq!(stats.average, k);
            assert_eq!(stats.high, k);
            assert_eq!(stats.low, k);
        }
    }

    #[test]
    fn test_empty_series_has_no_stats() {
        assert!(SummaryStats::from_series(&Series::default()).is_none());
    }

    #[test]
    fn test_ties_mark_first_index() {
        let values = [1.0, 2.0, 0.5, 2.0, 0.5];
        let stats = SummaryStats::from_values(&values).unwrap();
        let extremes = Extremes::locate(&values, &stats).unwrap();
        assert_eq!(extremes.high_index, 1);
        assert_eq!(extremes.low_index, 2);
    }
}
