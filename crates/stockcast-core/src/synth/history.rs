//! Synthetic daily OHLCV history.
//!
//! Prices follow a multiplicative random walk seeded at the symbol's catalog
//! base price. Each step combines a uniform shock, bounded by a volatility
//! drawn once per run, with a slow sinusoidal drift. Bars are derived around
//! the walk's close with a random intraday range.

use rand::Rng;
use tracing::debug;

use crate::{base_price, DailyBar, Timeframe, TradingDate, PRICE_FLOOR};

/// Bounds of the per-run daily volatility draw.
const VOLATILITY_RANGE: (f64, f64) = (0.02, 0.04);
/// Amplitude of the sinusoidal drift added to every step.
const TREND_AMPLITUDE: f64 = 0.001;
/// Period divisor of the sinusoidal drift, in days.
const TREND_PERIOD_DAYS: f64 = 30.0;
/// Bounds of the intraday range as a fraction of the close.
const DAY_RANGE_FRACTION: (f64, f64) = (0.01, 0.03);
/// Share of the intraday range that wicks may extend past the body.
const WICK_FRACTION: f64 = 0.3;
/// Volume is drawn from `[VOLUME_RANGE.0, VOLUME_RANGE.1)`.
const VOLUME_RANGE: (u64, u64) = (1_000_000, 11_000_000);

/// Synthesize `timeframe.days()` daily bars ending the day before `reference_date`.
///
/// Bar `i` is dated `reference_date - (days - i)`, so the series is ordered
/// oldest first. Unknown symbols start from [`crate::DEFAULT_BASE_PRICE`].
/// Every returned bar satisfies `PRICE_FLOOR <= low <= min(open, close)` and
/// `max(open, close) <= high`.
pub fn synthesize_history<R>(
    symbol: &str,
    timeframe: Timeframe,
    reference_date: TradingDate,
    rng: &mut R,
) -> Vec<DailyBar>
where
    R: Rng + ?Sized,
{
    let days = timeframe.days();
    let start_price = base_price(symbol);
    let volatility = rng.gen_range(VOLATILITY_RANGE.0..=VOLATILITY_RANGE.1);

    let mut price = start_price;
    let mut bars = Vec::with_capacity(days);

    for index in 0..days {
        let date = reference_date.offset(-((days - index) as i64));

        let random_change = rng.gen_range(-volatility..=volatility);
        let trend_change = (index as f64 / TREND_PERIOD_DAYS).sin() * TREND_AMPLITUDE;
        price *= 1.0 + random_change + trend_change;

        let day_range = price * rng.gen_range(DAY_RANGE_FRACTION.0..=DAY_RANGE_FRACTION.1);
        let open = price + rng.gen_range(-0.5..=0.5) * day_range;
        let close = price;
        let high = open.max(close) + rng.gen::<f64>() * day_range * WICK_FRACTION;
        let low = open.min(close) - rng.gen::<f64>() * day_range * WICK_FRACTION;
        let volume = rng.gen_range(VOLUME_RANGE.0..VOLUME_RANGE.1);

        bars.push(floored_bar(date, open, high, low, close, volume));
    }

    debug!(
        symbol,
        timeframe = %timeframe,
        days,
        start_price,
        volatility,
        "synthesized history"
    );

    bars
}

/// Apply the price floor, then restore the wick ordering the floor may have broken.
fn floored_bar(
    date: TradingDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
) -> DailyBar {
    let open = open.max(PRICE_FLOOR);
    let close = close.max(PRICE_FLOOR);
    let high = high.max(PRICE_FLOOR).max(open).max(close);
    let low = low.max(PRICE_FLOOR).min(open).min(close);

    DailyBar {
        date,
        open,
        high,
        low,
        close,
        volume,
    }
}
