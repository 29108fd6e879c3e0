//! # Domain Models
//!
//! Canonical domain types for stockcast.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DailyBar`] | One synthetic OHLCV trading day |
//! | [`ForecastPoint`] | One future day of model output |
//! | [`ModelKind`] | Closed set of named forecasting models |
//! | [`ModelParams`] | Per-model calibration constants |
//! | [`Timeframe`] | History window (1M .. 2Y) |
//! | [`TradingDate`] | ISO-8601 calendar date |
//! | [`Symbol`] | Validated equity ticker |
//! | [`Stock`] | Catalog entry with name, sector and base price |
//!
//! ## Validation
//!
//! Constructors enforce the price floor and the OHLC ordering:
//!
//! ```rust
//! use stockcast_core::{DailyBar, TradingDate, ValidationError};
//!
//! let date = TradingDate::parse("2024-03-14").unwrap();
//! assert!(DailyBar::new(date, 100.0, 105.0, 95.0, 102.0, 1_000_000).is_ok());
//!
//! let invalid = DailyBar::new(date, 100.0, 95.0, 105.0, 102.0, 1_000_000);
//! assert!(matches!(invalid, Err(ValidationError::InvalidBarRange)));
//! ```

mod catalog;
mod date;
mod model;
mod models;
mod symbol;
mod timeframe;

pub use catalog::{base_price, find_stock, search_stocks, stock_catalog, Stock, DEFAULT_BASE_PRICE};
pub use date::TradingDate;
pub use model::{ModelKind, ModelParams};
pub use models::{DailyBar, ForecastPoint, MAX_CONFIDENCE, MIN_CONFIDENCE, PRICE_FLOOR};
pub use symbol::Symbol;
pub use timeframe::Timeframe;
