//! # Stockcast Core
//!
//! Domain types and synthetic series generators for the stockcast toolkit.
//!
//! ## Overview
//!
//! Nothing here touches a market-data feed or a trained model. All prices come
//! from two seedable generators:
//!
//! - **History**: a daily OHLCV random walk anchored at a per-symbol base price
//! - **Forecast**: a 30-day extrapolation whose drift follows the recent trend
//!   and whose confidence decays with the horizon
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analytics`] | Price summary, horizon outlook, model metrics, chart bounds |
//! | [`domain`] | Domain models (DailyBar, ForecastPoint, ModelKind, Timeframe) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`synth`] | History and forecast generators |
//!
//! ## Quick Start
//!
//! ```rust
//! use stockcast_core::synth::Scenario;
//! use stockcast_core::{ModelKind, Timeframe, TradingDate};
//!
//! let as_of = TradingDate::parse("2024-03-14").unwrap();
//! let output = Scenario::new("AAPL", as_of, 42)
//!     .with_timeframe(Timeframe::ThreeMonths)
//!     .with_model(ModelKind::RandomForest)
//!     .run();
//!
//! assert_eq!(output.history.len(), 90);
//! assert_eq!(output.forecast.len(), 30);
//! ```
//!
//! ## Error Handling
//!
//! The generators are total: unknown symbols start at a default price and an
//! empty history forecasts nothing. Parsing user input is where things fail:
//!
//! ```rust
//! use std::str::FromStr;
//! use stockcast_core::{Timeframe, ValidationError};
//!
//! let err = Timeframe::from_str("5Y").unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidTimeframe { .. }));
//! ```

pub mod analytics;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod synth;

// Domain models
pub use domain::{
    base_price, find_stock, search_stocks, stock_catalog, DailyBar, ForecastPoint, ModelKind,
    ModelParams, Stock, Symbol, Timeframe, TradingDate, DEFAULT_BASE_PRICE, MAX_CONFIDENCE,
    MIN_CONFIDENCE, PRICE_FLOOR,
};

// Analytics
pub use analytics::{
    HistoryStats, HorizonLabel, HorizonOutlook, Milestone, ModelMetrics, PriceBounds,
    PriceSummary,
};

// Envelope types
pub use envelope::{Envelope, EnvelopeMeta, SCHEMA_VERSION};

// Error types
pub use error::ValidationError;

// Generators
pub use synth::{synthesize_forecast, synthesize_history, Scenario, ScenarioOutput};
