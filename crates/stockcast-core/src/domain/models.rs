use serde::{Deserialize, Serialize};

use crate::{TradingDate, ValidationError};

/// Lowest price any synthesized bar or forecast may carry.
pub const PRICE_FLOOR: f64 = 0.01;

/// Inclusive lower bound for forecast confidence.
pub const MIN_CONFIDENCE: f64 = 0.30;

/// Inclusive upper bound for forecast confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// One trading day of synthetic OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyBar {
    pub fn new(
        date: TradingDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_price("open", open)?;
        validate_price("high", high)?;
        validate_price("low", low)?;
        validate_price("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// One future trading day of model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: TradingDate,
    pub predicted: f64,
    pub confidence: f64,
    /// Observed close, filled in only by a later backfill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
}

impl ForecastPoint {
    pub fn new(
        date: TradingDate,
        predicted: f64,
        confidence: f64,
    ) -> Result<Self, ValidationError> {
        validate_price("predicted", predicted)?;
        validate_confidence(confidence)?;

        Ok(Self {
            date,
            predicted,
            confidence,
            actual: None,
        })
    }

    /// Attach an observed close for accuracy scoring.
    pub fn with_actual(mut self, actual: f64) -> Result<Self, ValidationError> {
        if !actual.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "actual" });
        }
        self.actual = Some(actual);
        Ok(self)
    }
}

fn validate_price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < PRICE_FLOOR {
        return Err(ValidationError::PriceBelowFloor { field });
    }
    Ok(())
}

fn validate_confidence(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "confidence" });
    }
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&value) {
        return Err(ValidationError::ConfidenceOutOfRange);
    }
    Ok(())
}
