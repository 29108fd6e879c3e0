//! # Synthetic series generators
//!
//! Two stateless generators produce all data in stockcast:
//!
//! - [`synthesize_history`] builds a daily OHLCV random walk for a symbol.
//! - [`synthesize_forecast`] extrapolates a fixed-horizon prediction from it.
//!
//! Both take the random source and the reference date as arguments, so a
//! seeded [`StdRng`] and a fixed date make every output reproducible:
//!
//! ```rust
//! use stockcast_core::synth::{seeded_rng, synthesize_forecast, synthesize_history};
//! use stockcast_core::{ModelKind, Timeframe, TradingDate};
//!
//! let as_of = TradingDate::parse("2024-03-14").unwrap();
//! let mut rng = seeded_rng(42);
//! let history = synthesize_history("AAPL", Timeframe::OneMonth, as_of, &mut rng);
//! let forecast = synthesize_forecast(&history, ModelKind::Lstm, as_of, &mut rng);
//!
//! assert_eq!(history.len(), 30);
//! assert_eq!(forecast.len(), 30);
//! ```

mod forecast;
mod history;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{DailyBar, ForecastPoint, ModelKind, Timeframe, TradingDate};

pub use forecast::{synthesize_forecast, trend_statistic, FORECAST_HORIZON, TREND_WINDOW};
pub use history::synthesize_history;

/// Deterministic random source for `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Everything needed to reproduce one history + forecast pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub model: ModelKind,
    pub seed: u64,
    pub reference_date: TradingDate,
}

/// Output of [`Scenario::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    pub history: Vec<DailyBar>,
    pub forecast: Vec<ForecastPoint>,
}

impl Scenario {
    pub fn new(symbol: impl Into<String>, reference_date: TradingDate, seed: u64) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: Timeframe::default(),
            model: ModelKind::default(),
            seed,
            reference_date,
        }
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }

    /// History only, drawn from a fresh generator seeded with `self.seed`.
    pub fn history(&self) -> Vec<DailyBar> {
        let mut rng = seeded_rng(self.seed);
        synthesize_history(&self.symbol, self.timeframe, self.reference_date, &mut rng)
    }

    /// History followed by forecast, both drawn from one generator seeded with `self.seed`.
    ///
    /// The history is identical to [`Scenario::history`] for the same seed, so
    /// switching models re-forecasts the same past.
    pub fn run(&self) -> ScenarioOutput {
        let mut rng = seeded_rng(self.seed);
        let history =
            synthesize_history(&self.symbol, self.timeframe, self.reference_date, &mut rng);
        let forecast = synthesize_forecast(&history, self.model, self.reference_date, &mut rng);

        info!(
            symbol = %self.symbol,
            timeframe = %self.timeframe,
            model = %self.model,
            seed = self.seed,
            bars = history.len(),
            points = forecast.len(),
            "scenario complete"
        );

        ScenarioOutput { history, forecast }
    }
}
