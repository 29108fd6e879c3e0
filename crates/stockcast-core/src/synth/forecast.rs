//! Synthetic forward predictions.

use rand::Rng;
use tracing::debug;

use crate::{
    DailyBar, ForecastPoint, ModelKind, TradingDate, MAX_CONFIDENCE, MIN_CONFIDENCE, PRICE_FLOOR,
};

/// Number of future days every non-empty forecast covers.
pub const FORECAST_HORIZON: usize = 30;

/// Number of trailing closes the trend statistic looks at.
pub const TREND_WINDOW: usize = 10;

const CONFIDENCE_DECAY: f64 = 0.99;
const CONFIDENCE_NOISE: f64 = 0.05;
const TREND_NOISE: f64 = 0.3;
const TREND_DAMPING: f64 = 0.1;

/// Fractional change between the first and last of the trailing
/// [`TREND_WINDOW`] closes, or `0.0` when undefined.
pub fn trend_statistic(history: &[DailyBar]) -> f64 {
    let window = &history[history.len().saturating_sub(TREND_WINDOW)..];
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if first.close != 0.0 => (last.close - first.close) / first.close,
        _ => 0.0,
    }
}

/// Extrapolate [`FORECAST_HORIZON`] daily points past the last bar of `history`.
///
/// Point `i` (1-based) is dated `reference_date + i`. The walk starts at the
/// last close, drifts with the damped trend statistic and the model's trend
/// weight, and carries a uniform shock bounded by the model volatility.
/// Confidence decays as `accuracy * 0.99^i` plus noise, clamped to
/// `[MIN_CONFIDENCE, MAX_CONFIDENCE]`. An empty history yields no points.
pub fn synthesize_forecast<R>(
    history: &[DailyBar],
    model: ModelKind,
    reference_date: TradingDate,
    rng: &mut R,
) -> Vec<ForecastPoint>
where
    R: Rng + ?Sized,
{
    let Some(last_bar) = history.last() else {
        return Vec::new();
    };

    let trend = trend_statistic(history);
    let params = model.params();
    let mut prediction = last_bar.close;
    let mut points = Vec::with_capacity(FORECAST_HORIZON);

    for step in 1..=FORECAST_HORIZON {
        let trend_effect =
            trend * params.trend_weight * (1.0 + rng.gen_range(-0.5..=0.5) * TREND_NOISE);
        let random_effect = rng.gen_range(-params.volatility..=params.volatility);
        let time_decay = CONFIDENCE_DECAY.powi(step as i32);

        prediction *= 1.0 + trend_effect * TREND_DAMPING + random_effect;
        prediction = prediction.max(PRICE_FLOOR);

        let base_confidence = params.accuracy * time_decay;
        let confidence = (base_confidence + rng.gen_range(-CONFIDENCE_NOISE..=CONFIDENCE_NOISE))
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        points.push(ForecastPoint {
            date: reference_date.offset(step as i64),
            predicted: prediction,
            confidence,
            actual: None,
        });
    }

    debug!(
        model = %model,
        trend,
        last_close = last_bar.close,
        points = points.len(),
        "synthesized forecast"
    );

    points
}
