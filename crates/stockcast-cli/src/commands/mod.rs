mod forecast;
mod history;
mod models;
mod stocks;

use serde_json::Value;
use stockcast_core::{find_stock, Envelope, Stock, Symbol, TradingDate};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    /// Whether `data` was drawn from the random generators.
    pub seeded: bool,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            seeded: false,
        }
    }

    pub fn seeded(data: Value) -> Self {
        Self {
            seeded: true,
            ..Self::ok(data)
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Seed and reference date shared by the generating commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub seed: u64,
    pub reference_date: TradingDate,
}

impl RunContext {
    pub fn resolve(seed: Option<u64>, as_of: Option<&str>) -> Result<Self, CliError> {
        let reference_date = match as_of {
            Some(value) => TradingDate::parse(value)?,
            None => TradingDate::today(),
        };
        let seed = seed.unwrap_or_else(|| {
            let seed = entropy_seed();
            debug!(seed, "no seed given, derived one from the clock");
            seed
        });

        Ok(Self {
            seed,
            reference_date,
        })
    }
}

/// Seed derived from the wall clock, for runs without `--seed`.
fn entropy_seed() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let context = RunContext::resolve(cli.seed, cli.as_of.as_deref())?;

    let command_result = match &cli.command {
        Command::History(args) => history::run(args, &context)?,
        Command::Forecast(args) => forecast::run(args, &context)?,
        Command::Stocks(args) => stocks::run(args)?,
        Command::Models => models::run()?,
    };

    let CommandResult {
        data,
        warnings,
        seeded,
    } = command_result;

    let mut metadata = Metadata::new(context.seed, context.reference_date);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta(seeded)?;
    Ok(Envelope::success(meta, data))
}

/// Normalized symbol plus its catalog entry, warning when it has none.
fn resolve_symbol(input: &str) -> Result<(Symbol, Option<Stock>, Vec<String>), CliError> {
    let symbol = Symbol::parse(input)?;
    let stock = find_stock(symbol.as_str());
    let mut warnings = Vec::new();

    if stock.is_none() {
        warn!(symbol = %symbol, "symbol is not in the catalog");
        warnings.push(format!(
            "symbol '{symbol}' is not in the catalog; prices start from the default base of {:.2}",
            stockcast_core::DEFAULT_BASE_PRICE
        ));
    }

    Ok((symbol, stock, warnings))
}
