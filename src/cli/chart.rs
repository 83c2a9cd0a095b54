use super::ui;
use crate::core::chart::{ChartLayout, svg};
use crate::core::dashboard::Dashboard;
use crate::core::format::format_rate;
use crate::core::prefs::Theme;
use crate::core::rate::RateProvider;
use crate::core::render::Renderer;
use crate::core::state::{self, AppState};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::debug;

/// Writes the dashboard's chart as a standalone SVG file.
pub struct SvgFileRenderer {
    path: PathBuf,
    theme: Theme,
}

impl SvgFileRenderer {
    pub fn new(path: PathBuf, theme: Theme) -> Self {
        Self { path, theme }
    }
}

impl Renderer for SvgFileRenderer {
    fn render(&mut self, dashboard: &Dashboard) -> Result<()> {
        let Some(geometry) = &dashboard.geometry else {
            debug!("Empty series for {}, no chart written", dashboard.pair);
            return Ok(());
        };
        let document = svg::render(geometry, self.theme, &dashboard.title());
        std::fs::write(&self.path, document)
            .with_context(|| format!("Failed to write chart to {}", self.path.display()))?;
        debug!("Wrote chart to {}", self.path.display());
        Ok(())
    }
}

pub async fn run(
    provider: &dyn RateProvider,
    state: AppState,
    layout: ChartLayout,
    theme: Theme,
    out: PathBuf,
) -> Result<()> {
    let pb = ui::new_spinner(&format!("Fetching {} rates...", state.pair));
    let state = state::run_refresh(provider, state).await;
    pb.finish_and_clear();

    let dashboard = Dashboard::project(&state, layout);
    if let Some(error) = &dashboard.error {
        bail!("Data unavailable for {}: {}", dashboard.pair, error);
    }

    SvgFileRenderer::new(out.clone(), theme).render(&dashboard)?;

    match &dashboard.stats {
        Some(stats) => println!(
            "{} {}  high {}  low {}  avg {}\n{}",
            ui::style_text(&dashboard.title(), ui::StyleType::TotalLabel),
            ui::style_text(&format!("({} samples)", state.series.len()), ui::StyleType::Subtle),
            ui::style_text(&format_rate(stats.high), ui::StyleType::TotalValue),
            format_rate(stats.low),
            format_rate(stats.average),
            ui::style_text(&out.display().to_string(), ui::StyleType::Subtle),
        ),
        None => println!(
            "{}",
            ui::style_text("No rates in this window", ui::StyleType::Subtle)
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rate::RateQuote;
    use crate::core::series::{Sample, Series, WindowRange};
    use crate::core::state::{Action, RefreshData, update};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn dashboard(series: Series) -> Dashboard {
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let state = AppState::new(
            "USD/EUR".parse().unwrap(),
            today,
            WindowRange::OneWeek,
            1.0,
            0.0,
        );
        let state = update(state, Action::BeginRefresh);
        let generation = state.generation;
        let quote = RateQuote {
            date: today,
            rate: 1.15,
        };
        let state = update(
            state,
            Action::RefreshLoaded {
                generation,
                data: RefreshData {
                    latest: quote,
                    historical: quote,
                    series,
                },
            },
        );
        Dashboard::project(&state, ChartLayout::default())
    }

    #[test]
    fn test_writes_svg_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("chart.svg");
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = Series::new(vec![
            Sample::new(start, 1.10),
            Sample::new(start.succ_opt().unwrap(), 1.20),
        ])?;

        SvgFileRenderer::new(path.clone(), Theme::Dark).render(&dashboard(series))?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.starts_with("<svg"));
        assert!(content.contains("#0f172a"));
        Ok(())
    }

    #[test]
    fn test_empty_series_writes_nothing() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("chart.svg");

        SvgFileRenderer::new(path.clone(), Theme::Light).render(&dashboard(Series::default()))?;

        assert!(!path.exists());
        Ok(())
    }
}
