use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Calibration constants that shape a synthetic forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Half-width of the uniform per-step price shock.
    pub volatility: f64,
    /// Confidence at horizon zero, before decay and noise.
    pub accuracy: f64,
    /// Scale applied to the short-window trend statistic.
    pub trend_weight: f64,
}

/// Named forecasting models offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[default]
    #[serde(rename = "LSTM")]
    Lstm,
    #[serde(rename = "Linear Regression")]
    LinearRegression,
    #[serde(rename = "Random Forest")]
    RandomForest,
}

impl ModelKind {
    pub const ALL: [Self; 3] = [Self::Lstm, Self::LinearRegression, Self::RandomForest];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lstm => "LSTM",
            Self::LinearRegression => "Linear Regression",
            Self::RandomForest => "Random Forest",
        }
    }

    pub const fn params(self) -> ModelParams {
        match self {
            Self::Lstm => ModelParams {
                volatility: 0.015,
                accuracy: 0.85,
                trend_weight: 0.7,
            },
            Self::LinearRegression => ModelParams {
                volatility: 0.020,
                accuracy: 0.75,
                trend_weight: 0.9,
            },
            Self::RandomForest => ModelParams {
                volatility: 0.018,
                accuracy: 0.80,
                trend_weight: 0.6,
            },
        }
    }

    /// Human-facing name shown in model pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lstm => "LSTM Neural Network",
            Self::LinearRegression => "Linear Regression",
            Self::RandomForest => "Random Forest",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Lstm => "Deep learning approach for sequential data",
            Self::LinearRegression => "Statistical linear modeling",
            Self::RandomForest => "Ensemble learning method",
        }
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let compact = value
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "lstm" => Ok(Self::Lstm),
            "linearregression" => Ok(Self::LinearRegression),
            "randomforest" => Ok(Self::RandomForest),
            _ => Err(ValidationError::InvalidModel {
                value: value.to_owned(),
            }),
        }
    }
}
