//! CLI argument definitions for stockcast.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `history` | Synthesize daily OHLCV bars for a symbol |
//! | `forecast` | Synthesize history plus a 30-day model forecast |
//! | `stocks` | List or search the featured equities |
//! | `models` | List forecasting models and their calibration |
//!
//! # Global Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--format` | | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | | `false` | Pretty-print JSON output |
//! | `--strict` | | `false` | Treat warnings as errors |
//! | `--seed` | `STOCKCAST_SEED` | clock | Random seed |
//! | `--as-of` | `STOCKCAST_AS_OF` | today | Reference date |
//! | `--output` | | stdout | Write output to a file |
//! | `--log-format` | `STOCKCAST_LOG_FORMAT` | `text` | Log line format on stderr |
//!
//! # Examples
//!
//! ```bash
//! stockcast history AAPL --timeframe 3M --pretty
//! stockcast forecast TSLA --model "random forest" --seed 42 --as-of 2024-03-14
//! stockcast stocks tech --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Synthetic stock history and model forecast generator
#[derive(Debug, Parser)]
#[command(
    name = "stockcast",
    author,
    version,
    about = "Synthetic stock history and model forecast generator",
    long_about = "stockcast synthesizes plausible daily price history for an equity and \
overlays a 30-day forecast from one of three named models. All data is \
generated from a seedable random walk; nothing is fetched or trained.\n\
\n\
Use 'stockcast <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Seed for the random generators. Defaults to a clock-derived seed.
    #[arg(long, global = true, env = "STOCKCAST_SEED")]
    pub seed: Option<u64>,

    /// Reference date (YYYY-MM-DD) the series are anchored to. Defaults to today (UTC).
    #[arg(long, global = true, env = "STOCKCAST_AS_OF")]
    pub as_of: Option<String>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', global = true)]
    pub output: Option<PathBuf>,

    /// Format of diagnostic log lines written to stderr.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "STOCKCAST_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Single-line JSON, one envelope per line.
    Ndjson,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize daily OHLCV history for a symbol.
    ///
    /// # Examples
    ///
    ///   stockcast history AAPL
    ///   stockcast history NVDA --timeframe 6M --seed 7
    History(HistoryArgs),

    /// Synthesize history and a 30-day forecast from a model.
    ///
    /// # Examples
    ///
    ///   stockcast forecast AAPL
    ///   stockcast forecast MSFT --model linear-regression --timeframe 3M
    Forecast(ForecastArgs),

    /// List featured stocks, optionally filtered by symbol or name.
    Stocks(StocksArgs),

    /// List forecasting models with their calibration constants.
    Models,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Equity symbol (e.g., AAPL). Symbols outside the catalog start at 100.
    pub symbol: String,

    /// History window: 1M, 3M, 6M, 1Y or 2Y.
    #[arg(long, default_value = "1Y")]
    pub timeframe: String,
}

/// Arguments for the `forecast` command.
#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Equity symbol (e.g., AAPL).
    pub symbol: String,

    /// History window: 1M, 3M, 6M, 1Y or 2Y.
    #[arg(long, default_value = "1Y")]
    pub timeframe: String,

    /// Model: LSTM, "Linear Regression" or "Random Forest" (case and separators are ignored).
    #[arg(long, default_value = "LSTM")]
    pub model: String,
}

/// Arguments for the `stocks` command.
#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Case-insensitive filter on symbol or company name.
    pub query: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verifies_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_forecast_with_global_options() {
        let cli = Cli::try_parse_from([
            "stockcast",
            "forecast",
            "TSLA",
            "--model",
            "random forest",
            "--seed",
            "42",
            "--as-of",
            "2024-03-14",
            "--format",
            "table",
        ])
        .expect("must parse");

        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.as_of.as_deref(), Some("2024-03-14"));
        assert_eq!(cli.format, OutputFormat::Table);
        match cli.command {
            Command::Forecast(args) => {
                assert_eq!(args.symbol, "TSLA");
                assert_eq!(args.model, "random forest");
                assert_eq!(args.timeframe, "1Y");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_seed() {
        let result = Cli::try_parse_from(["stockcast", "history", "AAPL", "--seed", "abc"]);
        assert!(result.is_err());
    }
}
