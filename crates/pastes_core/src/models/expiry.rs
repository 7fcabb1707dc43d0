//! Named expiry durations for private-store pastes.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long the private store keeps a paste before deleting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Expiry {
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "2 days")]
    TwoDays,
    #[serde(rename = "5 days")]
    FiveDays,
    #[serde(rename = "10 days")]
    TenDays,
    #[serde(rename = "20 days")]
    TwentyDays,
    #[default]
    #[serde(rename = "30 days")]
    ThirtyDays,
    #[serde(rename = "60 days")]
    SixtyDays,
    #[serde(rename = "90 days")]
    NinetyDays,
    #[serde(rename = "No expiry")]
    Never,
}

impl Expiry {
    /// All options in selector order.
    pub const ALL: [Expiry; 9] = [
        Expiry::OneDay,
        Expiry::TwoDays,
        Expiry::FiveDays,
        Expiry::TenDays,
        Expiry::TwentyDays,
        Expiry::ThirtyDays,
        Expiry::SixtyDays,
        Expiry::NinetyDays,
        Expiry::Never,
    ];

    /// Display label, e.g. `"10 days"` or `"No expiry"`.
    pub fn label(self) -> &'static str {
        match self {
            Expiry::OneDay => "1 day",
            Expiry::TwoDays => "2 days",
            Expiry::FiveDays => "5 days",
            Expiry::TenDays => "10 days",
            Expiry::TwentyDays => "20 days",
            Expiry::ThirtyDays => "30 days",
            Expiry::SixtyDays => "60 days",
            Expiry::NinetyDays => "90 days",
            Expiry::Never => "No expiry",
        }
    }

    /// Minutes sent in the expiry header; `-1` disables expiry.
    pub fn minutes(self) -> i64 {
        const DAY: i64 = 24 * 60;
        match self {
            Expiry::OneDay => DAY,
            Expiry::TwoDays => 2 * DAY,
            Expiry::FiveDays => 5 * DAY,
            Expiry::TenDays => 10 * DAY,
            Expiry::TwentyDays => 20 * DAY,
            Expiry::ThirtyDays => 30 * DAY,
            Expiry::SixtyDays => 60 * DAY,
            Expiry::NinetyDays => 90 * DAY,
            Expiry::Never => -1,
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|expiry| expiry.label() == label)
    }

    /// Label lookup that falls back to the default (30 days).
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Expiry {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| AppError::InvalidExpiry(value.to_string()))
    }
}
