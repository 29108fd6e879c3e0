//! Summaries derived from generated series, for charts and metric cards.

use serde::{Deserialize, Serialize};

use crate::{DailyBar, ForecastPoint, TradingDate};

/// Forecast indices surfaced as headline milestones.
const MILESTONES: [(HorizonLabel, usize); 3] = [
    (HorizonLabel::NextDay, 0),
    (HorizonLabel::OneWeek, 6),
    (HorizonLabel::OneMonth, 29),
];

/// Current price versus the end of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub current_price: f64,
    pub predicted_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
}

impl PriceSummary {
    /// `None` when there is no history to anchor the current price.
    pub fn from_series(history: &[DailyBar], forecast: &[ForecastPoint]) -> Option<Self> {
        let current_price = history.last()?.close;
        let predicted_price = forecast.last().map(|point| point.predicted);
        let change = predicted_price.map(|predicted| predicted - current_price);

        Some(Self {
            current_price,
            predicted_price,
            change,
            percent_change: change.map(|change| percent_of(change, current_price)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonLabel {
    NextDay,
    OneWeek,
    OneMonth,
}

/// One headline forecast point relative to the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: HorizonLabel,
    pub date: TradingDate,
    pub predicted: f64,
    pub confidence: f64,
    pub change: f64,
    pub percent_change: f64,
}

/// Next-day, one-week and one-month milestones of a forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizonOutlook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_day: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_week: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_month: Option<Milestone>,
}

impl HorizonOutlook {
    pub fn from_series(history: &[DailyBar], forecast: &[ForecastPoint]) -> Self {
        let mut outlook = Self::default();
        let Some(current_price) = history.last().map(|bar| bar.close) else {
            return outlook;
        };

        for (label, index) in MILESTONES {
            let milestone = forecast.get(index).map(|point| {
                let change = point.predicted - current_price;
                Milestone {
                    label,
                    date: point.date,
                    predicted: point.predicted,
                    confidence: point.confidence,
                    change,
                    percent_change: percent_of(change, current_price),
                }
            });

            match label {
                HorizonLabel::NextDay => outlook.next_day = milestone,
                HorizonLabel::OneWeek => outlook.one_week = milestone,
                HorizonLabel::OneMonth => outlook.one_month = milestone,
            }
        }

        outlook
    }
}

/// Accuracy figures for a forecast.
///
/// `accuracy` is the mean confidence. The error figures need backfilled
/// actuals and stay `None` until at least one point has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub mse: Option<f64>,
    pub mae: Option<f64>,
    pub r2: Option<f64>,
    pub scored_points: usize,
}

impl ModelMetrics {
    pub fn from_forecast(forecast: &[ForecastPoint]) -> Self {
        let accuracy = mean(forecast.iter().map(|point| point.confidence)).unwrap_or(0.0);

        let pairs = forecast
            .iter()
            .filter_map(|point| point.actual.map(|actual| (actual, point.predicted)))
            .collect::<Vec<_>>();

        if pairs.is_empty() {
            return Self {
                accuracy,
                mse: None,
                mae: None,
                r2: None,
                scored_points: 0,
            };
        }

        let mse = mean(pairs.iter().map(|(actual, predicted)| (actual - predicted).powi(2)));
        let mae = mean(pairs.iter().map(|(actual, predicted)| (actual - predicted).abs()));

        let actual_mean = mean(pairs.iter().map(|(actual, _)| *actual)).unwrap_or(0.0);
        let total: f64 = pairs
            .iter()
            .map(|(actual, _)| (actual - actual_mean).powi(2))
            .sum();
        let residual: f64 = pairs
            .iter()
            .map(|(actual, predicted)| (actual - predicted).powi(2))
            .sum();
        let r2 = (total > 0.0).then(|| 1.0 - residual / total);

        Self {
            accuracy,
            mse,
            mae,
            r2,
            scored_points: pairs.len(),
        }
    }
}

/// Descriptive statistics of a history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub first_date: TradingDate,
    pub last_date: TradingDate,
    pub period_high: f64,
    pub period_low: f64,
    pub average_volume: f64,
    /// Population standard deviation of close-to-close simple returns.
    pub daily_volatility: f64,
}

impl HistoryStats {
    pub fn from_history(history: &[DailyBar]) -> Option<Self> {
        let first = history.first()?;
        let last = history.last()?;

        let period_high = history.iter().map(|bar| bar.high).fold(f64::MIN, f64::max);
        let period_low = history.iter().map(|bar| bar.low).fold(f64::MAX, f64::min);
        let average_volume = mean(history.iter().map(|bar| bar.volume as f64)).unwrap_or(0.0);

        let returns = history
            .windows(2)
            .filter(|pair| pair[0].close > 0.0)
            .map(|pair| pair[1].close / pair[0].close - 1.0)
            .collect::<Vec<_>>();
        let daily_volatility = std_dev(&returns).unwrap_or(0.0);

        Some(Self {
            first_date: first.date,
            last_date: last.date,
            period_high,
            period_low,
            average_volume,
            daily_volatility,
        })
    }
}

/// Vertical extent of history and forecast together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    pub fn from_series(history: &[DailyBar], forecast: &[ForecastPoint]) -> Option<Self> {
        let lows = history.iter().map(|bar| bar.low);
        let highs = history.iter().map(|bar| bar.high);
        let predictions = forecast.iter().map(|point| point.predicted);

        let min = lows.chain(predictions.clone()).reduce(f64::min)?;
        let max = highs.chain(predictions).reduce(f64::max)?;
        Some(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

fn percent_of(change: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        change / base * 100.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn std_dev(values: &[f64]) -> Option<f64> {
    let center = mean(values.iter().copied())?;
    let variance = mean(values.iter().map(|value| (value - center).powi(2)))?;
    Some(variance.sqrt())
}
