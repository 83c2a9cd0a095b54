use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fxview::core::log::init_logging;
use fxview::core::prefs::Theme;
use fxview::core::series::{Pair, WindowRange};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct QuoteOpts {
    /// Currency pair as BASE/QUOTE, e.g. USD/EUR
    pair: Option<Pair>,

    /// Day for the historical rate (YYYY-MM-DD), defaults to yesterday
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Amount of base currency to convert
    #[arg(short, long)]
    amount: Option<f64>,

    /// Fee percentage deducted from the rate, overrides the saved fee
    #[arg(short, long)]
    fee: Option<f64>,

    /// Chart window: 1W, 1M, 3M, 6M or 1Y
    #[arg(short, long)]
    range: Option<WindowRange>,

    /// Swap base and quote
    #[arg(short, long)]
    swap: bool,
}

impl From<QuoteOpts> for fxview::QuoteArgs {
    fn from(opts: QuoteOpts) -> Self {
        fxview::QuoteArgs {
            pair: opts.pair,
            date: opts.date,
            amount: opts.amount,
            fee_percent: opts.fee,
            range: opts.range,
            swap: opts.swap,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List supported currencies
    Currencies,
    /// Show latest and historical rates, conversion and window statistics
    Quote {
        #[command(flatten)]
        opts: QuoteOpts,

        /// Also write the chart as SVG to this path
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Write the rate window as an SVG sparkline
    Chart {
        #[command(flatten)]
        opts: QuoteOpts,

        /// Output SVG path
        #[arg(short, long, default_value = "chart.svg")]
        out: PathBuf,
    },
    /// Manage favorite currency pairs
    #[command(subcommand)]
    Favorites(FavoritesCommands),
    /// Show or save the fee percentage
    #[command(subcommand)]
    Fee(FeeCommands),
    /// Show or change the chart theme
    #[command(subcommand)]
    Theme(ThemeCommands),
    /// Show top cryptocurrencies by market cap
    Crypto {
        /// Currency to price coins in
        #[arg(long, default_value = "usd")]
        vs: String,

        /// Number of coins to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List favorites with their latest rates
    List,
    /// Add a pair such as USD/EUR
    Add { pair: Pair },
    /// Remove a pair
    Remove { pair: Pair },
}

#[derive(Subcommand)]
enum FeeCommands {
    Show,
    Set { percent: f64 },
}

#[derive(Subcommand)]
enum ThemeCommands {
    Show,
    Set { theme: Theme },
    Toggle,
}

impl From<Commands> for fxview::AppCommand {
    fn from(cmd: Commands) -> fxview::AppCommand {
        use fxview::{AppCommand, FavoritesCommand, FeeCommand, ThemeCommand};
        match cmd {
            Commands::Currencies => AppCommand::Currencies,
            Commands::Quote { opts, svg } => AppCommand::Quote {
                args: opts.into(),
                svg,
            },
            Commands::Chart { opts, out } => AppCommand::Chart {
                args: opts.into(),
                out,
            },
            Commands::Favorites(cmd) => AppCommand::Favorites(match cmd {
                FavoritesCommands::List => FavoritesCommand::List,
                FavoritesCommands::Add { pair } => FavoritesCommand::Add(pair),
                FavoritesCommands::Remove { pair } => FavoritesCommand::Remove(pair),
            }),
            Commands::Fee(cmd) => AppCommand::Fee(match cmd {
                FeeCommands::Show => FeeCommand::Show,
                FeeCommands::Set { percent } => FeeCommand::Set(percent),
            }),
            Commands::Theme(cmd) => AppCommand::Theme(match cmd {
                ThemeCommands::Show => ThemeCommand::Show,
                ThemeCommands::Set { theme } => ThemeCommand::Set(theme),
                ThemeCommands::Toggle => ThemeCommand::Toggle,
            }),
            Commands::Crypto { vs, limit } => AppCommand::Crypto {
                vs_currency: vs,
                limit,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxview::cli::setup::setup(),
        Some(cmd) => fxview::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => Cli::command().print_help().map_err(anyhow::Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Application failed");
            ExitCode::FAILURE
        }
    }
}
