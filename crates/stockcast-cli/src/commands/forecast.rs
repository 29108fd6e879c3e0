use serde::Serialize;
use stockcast_core::synth::Scenario;
use stockcast_core::{
    DailyBar, ForecastPoint, HorizonOutlook, ModelKind, ModelMetrics, ModelParams, PriceBounds,
    PriceSummary, Stock, Symbol, Timeframe,
};

use crate::cli::ForecastArgs;
use crate::error::CliError;

use super::{resolve_symbol, CommandResult, RunContext};

#[derive(Debug, Serialize)]
struct ForecastResponseData {
    symbol: Symbol,
    stock: Option<Stock>,
    timeframe: Timeframe,
    model: ModelKind,
    params: ModelParams,
    summary: Option<PriceSummary>,
    outlook: HorizonOutlook,
    metrics: ModelMetrics,
    bounds: Option<PriceBounds>,
    history: Vec<DailyBar>,
    forecast: Vec<ForecastPoint>,
}

pub fn run(args: &ForecastArgs, context: &RunContext) -> Result<CommandResult, CliError> {
    let timeframe = args.timeframe.parse::<Timeframe>()?;
    let model = args.model.parse::<ModelKind>()?;
    let (symbol, stock, warnings) = resolve_symbol(&args.symbol)?;

    let output = Scenario::new(symbol.as_str(), context.reference_date, context.seed)
        .with_timeframe(timeframe)
        .with_model(model)
        .run();

    let data = serde_json::to_value(ForecastResponseData {
        summary: PriceSummary::from_series(&output.history, &output.forecast),
        outlook: HorizonOutlook::from_series(&output.history, &output.forecast),
        metrics: ModelMetrics::from_forecast(&output.forecast),
        bounds: PriceBounds::from_series(&output.history, &output.forecast),
        symbol,
        stock,
        timeframe,
        model,
        params: model.params(),
        history: output.history,
        forecast: output.forecast,
    })?;

    Ok(CommandResult::seeded(data).with_warnings(warnings))
}
