use super::chart::SvgFileRenderer;
use super::ui;
use crate::core::chart::ChartLayout;
use crate::core::convert::Conversion;
use crate::core::dashboard::Dashboard;
use crate::core::format::{AMOUNT_DECIMALS, RATE_DECIMALS};
use crate::core::prefs::Theme;
use crate::core::rate::{RateProvider, RateQuote};
use crate::core::render::Renderer;
use crate::core::state::{self, AppState};
use anyhow::{Result, bail};
use comfy_table::Cell;
use std::io::Write;
use std::path::PathBuf;

/// Prints the dashboard as terminal tables.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn rates_table(latest: Option<&RateQuote>, historical: Option<&RateQuote>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Date"),
        ui::header_cell("Rate"),
    ]);
    for (label, quote) in [("Latest", latest), ("Historical", historical)] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(quote.map_or_else(String::new, |q| q.date.to_string())),
            ui::optional_number_cell(quote.map(|q| q.rate), RATE_DECIMALS),
        ]);
    }
    table.to_string()
}

fn conversion_table(quote_currency: &str, rows: &[(&str, Option<&Conversion>)]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Amount"),
        ui::header_cell("Fee (%)"),
        ui::header_cell("Effective rate"),
        ui::header_cell(&format!("Converted ({quote_currency})")),
    ]);
    for (label, conversion) in rows {
        table.add_row(vec![
            Cell::new(*label),
            ui::optional_number_cell(conversion.map(|c| c.amount), AMOUNT_DECIMALS),
            ui::optional_number_cell(conversion.map(|c| c.fee_percent), AMOUNT_DECIMALS),
            ui::optional_number_cell(conversion.map(|c| c.effective_rate), RATE_DECIMALS),
            ui::optional_number_cell(conversion.map(|c| c.converted), AMOUNT_DECIMALS),
        ]);
    }
    table.to_string()
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, dashboard: &Dashboard) -> Result<()> {
        writeln!(
            self.out,
            "{}\n",
            ui::style_text(&dashboard.title(), ui::StyleType::Title)
        )?;

        if let Some(error) = &dashboard.error {
            writeln!(
                self.out,
                "{}",
                ui::style_text("Data unavailable", ui::StyleType::Error)
            )?;
            writeln!(self.out, "{}", ui::style_text(error, ui::StyleType::Subtle))?;
            return Ok(());
        }

        writeln!(
            self.out,
            "{}\n",
            rates_table(dashboard.latest.as_ref(), dashboard.historical.as_ref())
        )?;
        writeln!(
            self.out,
            "{}\n",
            conversion_table(
                &dashboard.pair.quote,
                &[
                    ("Live", dashboard.live_conversion.as_ref()),
                    ("Historical", dashboard.historical_conversion.as_ref()),
                ],
            )
        )?;

        match &dashboard.stats {
            Some(stats) => {
                let mut table = ui::new_styled_table();
                table.set_header(vec![
                    ui::header_cell(&format!("High ({})", dashboard.range)),
                    ui::header_cell("Low"),
                    ui::header_cell("Average"),
                ]);
                table.add_row(vec![
                    ui::number_cell(stats.high, RATE_DECIMALS),
                    ui::number_cell(stats.low, RATE_DECIMALS),
                    ui::number_cell(stats.average, RATE_DECIMALS),
                ]);
                writeln!(self.out, "{table}")?;
            }
            None => writeln!(
                self.out,
                "{}",
                ui::style_text("No rates in this window", ui::StyleType::Subtle)
            )?,
        }
        Ok(())
    }
}

/// Refreshes `state`, prints the dashboard and optionally writes the chart.
pub async fn run(
    provider: &dyn RateProvider,
    state: AppState,
    layout: ChartLayout,
    theme: Theme,
    svg_path: Option<PathBuf>,
) -> Result<()> {
    let pb = ui::new_spinner(&format!("Fetching {} rates...", state.pair));
    let state = state::run_refresh(provider, state).await;
    pb.finish_and_clear();

    let dashboard = Dashboard::project(&state, layout);
    TerminalRenderer::new(std::io::stdout().lock()).render(&dashboard)?;

    if let Some(error) = &dashboard.error {
        bail!("Data unavailable for {}: {}", dashboard.pair, error);
    }

    if let Some(path) = svg_path {
        SvgFileRenderer::new(path, theme).render(&dashboard)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::{Series, WindowRange};
    use crate::core::state::{Action, RefreshData, update};
    use chrono::NaiveDate;

    fn render(state: &AppState) -> String {
        let dashboard = Dashboard::project(state, ChartLayout::default());
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&dashboard).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn base_state() -> AppState {
        AppState::new(
            "USD/EUR".parse().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            WindowRange::OneWeek,
            100.0,
            2.5,
        )
    }

    #[test]
    fn test_renders_conversion_and_stats() {
        let state = update(base_state(), Action::BeginRefresh);
        let today = state.today;
        let (start, end) = state.range.bounds(today);
        let quote = RateQuote {
            date: today,
            rate: 1.2,
        };
        let generation = state.generation;
        let state = update(
            state,
            Action::RefreshLoaded {
                generation,
                data: RefreshData {
                    latest: quote,
                    historical: quote,
                    series: Series::flat(start, end, 1.2),
                },
            },
        );

        let output = render(&state);
        assert!(output.contains("USD/EUR"));
        assert!(output.contains("1.1700"));
        assert!(output.contains("117.00"));
        assert!(output.contains("Converted (EUR)"));
        assert!(output.contains("High (1W)"));
    }

    #[test]
    fn test_renders_data_unavailable() {
        let state = update(base_state(), Action::BeginRefresh);
        let generation = state.generation;
        let state = update(
            state,
            Action::RefreshFailed {
                generation,
                message: "HTTP error: 503".to_string(),
            },
        );

        let output = render(&state);
        assert_eq!(output.matches("Data unavailable").count(), 1);
        assert_eq!(output.matches("HTTP error: 503").count(), 1);
        assert!(!output.contains("Effective rate"));
    }
}
