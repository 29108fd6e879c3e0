use serde::Serialize;
use stockcast_core::synth::Scenario;
use stockcast_core::{DailyBar, HistoryStats, Stock, Symbol, Timeframe};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::{resolve_symbol, CommandResult, RunContext};

#[derive(Debug, Serialize)]
struct HistoryResponseData {
    symbol: Symbol,
    stock: Option<Stock>,
    timeframe: Timeframe,
    stats: Option<HistoryStats>,
    bars: Vec<DailyBar>,
}

pub fn run(args: &HistoryArgs, context: &RunContext) -> Result<CommandResult, CliError> {
    let timeframe = args.timeframe.parse::<Timeframe>()?;
    let (symbol, stock, warnings) = resolve_symbol(&args.symbol)?;

    let bars = Scenario::new(symbol.as_str(), context.reference_date, context.seed)
        .with_timeframe(timeframe)
        .history();

    let data = serde_json::to_value(HistoryResponseData {
        stats: HistoryStats::from_history(&bars),
        symbol,
        stock,
        timeframe,
        bars,
    })?;

    Ok(CommandResult::seeded(data).with_warnings(warnings))
}
