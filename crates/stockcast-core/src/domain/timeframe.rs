use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Length of the synthesized history window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "2Y")]
    TwoYears,
}

impl Timeframe {
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::TwoYears => "2Y",
        }
    }

    /// Number of daily bars covered by this window.
    pub const fn days(self) -> usize {
        match self {
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::TwoYears => 730,
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "2Y" => Ok(Self::TwoYears),
            _ => Err(ValidationError::InvalidTimeframe {
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timeframe_case_insensitively() {
        let timeframe = Timeframe::from_str(" 6m ").expect("must parse");
        assert_eq!(timeframe, Timeframe::SixMonths);
        assert_eq!(timeframe.days(), 180);
    }

    #[test]
    fn maps_every_timeframe_to_its_day_count() {
        let days = Timeframe::ALL.map(Timeframe::days);
        assert_eq!(days, [30, 90, 180, 365, 730]);
    }

    #[test]
    fn rejects_unknown_timeframe_instead_of_defaulting() {
        let err = Timeframe::from_str("5Y").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeframe { ref value } if value == "5Y"));
    }

    #[test]
    fn serializes_as_short_label() {
        let json = serde_json::to_string(&Timeframe::TwoYears).expect("serialize");
        assert_eq!(json, "\"2Y\"");
    }
}
