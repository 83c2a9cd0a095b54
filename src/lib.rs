pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::prefs::{KeyValueStore, Preferences, Theme};
use crate::core::series::{Pair, WindowRange};
use crate::core::state::{Action, AppState, update};
use crate::providers::coingecko::CoinGeckoProvider;
use crate::providers::frankfurter::FrankfurterProvider;
use crate::store::memory::MemoryStore;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Inputs for a rate refresh. Unset fields fall back to config and
/// saved preferences.
#[derive(Debug, Clone, Default)]
pub struct QuoteArgs {
    pub pair: Option<Pair>,
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub fee_percent: Option<f64>,
    pub range: Option<WindowRange>,
    pub swap: bool,
}

#[derive(Debug, Clone)]
pub enum FavoritesCommand {
    List,
    Add(Pair),
    Remove(Pair),
}

#[derive(Debug, Clone)]
pub enum FeeCommand {
    Show,
    Set(f64),
}

#[derive(Debug, Clone)]
pub enum ThemeCommand {
    Show,
    Set(Theme),
    Toggle,
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Currencies,
    Quote {
        args: QuoteArgs,
        svg: Option<PathBuf>,
    },
    Chart {
        args: QuoteArgs,
        out: PathBuf,
    },
    Favorites(FavoritesCommand),
    Fee(FeeCommand),
    Theme(ThemeCommand),
    Crypto {
        vs_currency: String,
        limit: usize,
    },
}

impl AppCommand {
    /// Commands whose whole effect is a preference write.
    pub fn writes_preferences(&self) -> bool {
        matches!(
            self,
            AppCommand::Favorites(FavoritesCommand::Add(_) | FavoritesCommand::Remove(_))
                | AppCommand::Fee(FeeCommand::Set(_))
                | AppCommand::Theme(ThemeCommand::Set(_) | ThemeCommand::Toggle)
        )
    }
}

/// Builds the initial state from config, preferences and command-line overrides.
pub fn initial_state(
    config: &AppConfig,
    prefs: &Preferences,
    args: &QuoteArgs,
    today: NaiveDate,
) -> AppState {
    let state = AppState::new(
        config.pair.clone(),
        today,
        config.range,
        config.amount,
        prefs.fee_percent,
    );
    let mut actions = Vec::new();
    if let Some(pair) = &args.pair {
        actions.push(Action::SetPair(pair.clone()));
    }
    if args.swap {
        actions.push(Action::SwapPair);
    }
    if let Some(date) = args.date {
        actions.push(Action::SetDate(date));
    }
    if let Some(amount) = args.amount {
        actions.push(Action::SetAmount(amount));
    }
    if let Some(fee) = args.fee_percent {
        actions.push(Action::SetFee(fee));
    }
    if let Some(range) = args.range {
        actions.push(Action::SetRange(range));
    }
    actions.into_iter().fold(state, update)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxview starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store: Box<dyn KeyValueStore> = match store::open_store(&config) {
        Ok(store) => store,
        Err(e) if command.writes_preferences() => {
            return Err(e.context("Preferences cannot be saved"));
        }
        Err(e) => {
            error!("Preferences unavailable, using defaults: {:#}", e);
            Box::new(MemoryStore::new())
        }
    };
    let mut prefs = Preferences::load(store.as_ref(), config.fee_percent);
    debug!(?prefs, "Loaded preferences");

    let rates = FrankfurterProvider::new(config.providers.frankfurter_url());
    let today = chrono::Utc::now().date_naive();

    match command {
        AppCommand::Currencies => cli::currencies::run(&rates, &prefs).await,
        AppCommand::Quote { args, svg } => {
            let state = initial_state(&config, &prefs, &args, today);
            cli::quote::run(&rates, state, config.chart, prefs.theme, svg).await
        }
        AppCommand::Chart { args, out } => {
            let state = initial_state(&config, &prefs, &args, today);
            cli::chart::run(&rates, state, config.chart, prefs.theme, out).await
        }
        AppCommand::Favorites(cmd) => match cmd {
            FavoritesCommand::List => cli::favorites::list(&rates, &prefs).await,
            FavoritesCommand::Add(pair) => {
                cli::favorites::add(store.as_ref(), &mut prefs, pair)
            }
            FavoritesCommand::Remove(pair) => {
                cli::favorites::remove(store.as_ref(), &mut prefs, &pair)
            }
        },
        AppCommand::Fee(cmd) => match cmd {
            FeeCommand::Show => {
                cli::prefs::show_fee(&prefs);
                Ok(())
            }
            FeeCommand::Set(fee) => cli::prefs::set_fee(store.as_ref(), &mut prefs, fee),
        },
        AppCommand::Theme(cmd) => match cmd {
            ThemeCommand::Show => {
                cli::prefs::show_theme(&prefs);
                Ok(())
            }
            ThemeCommand::Set(theme) => cli::prefs::set_theme(store.as_ref(), &mut prefs, theme),
            ThemeCommand::Toggle => cli::prefs::toggle_theme(store.as_ref(), &mut prefs),
        },
        AppCommand::Crypto { vs_currency, limit } => {
            let markets = CoinGeckoProvider::new(config.providers.coingecko_url());
            cli::crypto::run(&markets, &vs_currency, limit).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_applies_overrides() {
        let config = AppConfig::default();
        let prefs = Preferences {
            favorites: Vec::new(),
            fee_percent: 1.0,
            theme: Theme::Light,
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let state = initial_state(&config, &prefs, &QuoteArgs::default(), today);
        assert_eq!(state.pair.to_string(), "USD/EUR");
        assert_eq!(state.fee_percent, 1.0);
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());

        let args = QuoteArgs {
            pair: Some("GBP/JPY".parse().unwrap()),
            swap: true,
            amount: Some(50.0),
            fee_percent: Some(3.0),
            range: Some(WindowRange::OneYear),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
        };
        let state = initial_state(&config, &prefs, &args, today);
        assert_eq!(state.pair.to_string(), "JPY/GBP");
        assert_eq!(state.amount, 50.0);
        assert_eq!(state.fee_percent, 3.0);
        assert_eq!(state.range, WindowRange::OneYear);
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_writes_preferences() {
        let pair: Pair = "USD/EUR".parse().unwrap();
        assert!(AppCommand::Favorites(FavoritesCommand::Add(pair.clone())).writes_preferences());
        assert!(AppCommand::Favorites(FavoritesCommand::Remove(pair)).writes_preferences());
        assert!(AppCommand::Fee(FeeCommand::Set(1.0)).writes_preferences());
        assert!(AppCommand::Theme(ThemeCommand::Toggle).writes_preferences());
        assert!(AppCommand::Theme(ThemeCommand::Set(Theme::Dark)).writes_preferences());

        assert!(!AppCommand::Favorites(FavoritesCommand::List).writes_preferences());
        assert!(!AppCommand::Fee(FeeCommand::Show).writes_preferences());
        assert!(!AppCommand::Currencies.writes_preferences());
    }
}
