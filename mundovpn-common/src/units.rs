use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

const MB_PER_GB: f64 = 1024.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataAmountParseError {
    #[error("missing unit in data amount '{0}'")]
    MissingUnit(String),
    #[error("unknown unit '{unit}' in data amount '{input}'")]
    UnknownUnit { input: String, unit: String },
    #[error("invalid magnitude in data amount '{0}'")]
    InvalidMagnitude(String),
}

/// A quantity of transferred data, held in megabytes.
///
/// Arithmetic is done on the number; the "N MB" / "N GB" strings only exist
/// at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DataAmount(f64);

impl DataAmount {
    pub const ZERO: DataAmount = DataAmount(0.0);

    pub fn from_mb(mb: f64) -> Self {
        Self(mb.max(0.0))
    }

    pub fn from_gb(gb: f64) -> Self {
        Self::from_mb(gb * MB_PER_GB)
    }

    pub fn megabytes(&self) -> f64 {
        self.0
    }

    pub fn gigabytes(&self) -> f64 {
        self.0 / MB_PER_GB
    }

    pub fn is_zero(&self) -> bool {
        self.0 <= 0.0
    }

    /// Parses "450 MB", "1.2 GB" or "12.4GB".
    pub fn parse(input: &str) -> Result<Self, DataAmountParseError> {
        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| DataAmountParseError::MissingUnit(input.to_string()))?;
        let (number, unit) = trimmed.split_at(split);
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| DataAmountParseError::InvalidMagnitude(input.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(DataAmountParseError::InvalidMagnitude(input.to_string()));
        }

        match unit.trim().to_ascii_uppercase().as_str() {
            "MB" => Ok(Self::from_mb(value)),
            "GB" => Ok(Self::from_gb(value)),
            other => Err(DataAmountParseError::UnknownUnit {
                input: input.to_string(),
                unit: other.to_string(),
            }),
        }
    }

    /// Label used for a single session: GB with two decimals past 1024 MB.
    pub fn session_label(&self) -> String {
        if self.0 < MB_PER_GB {
            format!("{:.1} MB", self.0)
        } else {
            format!("{:.2} GB", self.gigabytes())
        }
    }

    /// Session label without redundant trailing zeros, as history rows show
    /// it ("450 MB", "1.2 GB").
    pub fn compact_label(&self) -> String {
        let label = self.session_label();
        match label.split_once(' ') {
            Some((number, unit)) if number.contains('.') => {
                let number = number.trim_end_matches('0').trim_end_matches('.');
                format!("{} {}", number, unit)
            }
            _ => label,
        }
    }

    /// Label used for account-level totals and caps.
    pub fn total_label(&self) -> String {
        if self.0 < MB_PER_GB {
            format!("{:.1} MB", self.0)
        } else {
            format!("{:.1} GB", self.gigabytes())
        }
    }

    /// Share of `limit` used, clamped to [0, 100].
    pub fn percent_of(&self, limit: DataAmount) -> f64 {
        if limit.0 <= 0.0 {
            return if self.0 > 0.0 { 100.0 } else { 0.0 };
        }
        (self.0 / limit.0 * 100.0).clamp(0.0, 100.0)
    }
}

impl Add for DataAmount {
    type Output = DataAmount;

    fn add(self, rhs: DataAmount) -> DataAmount {
        DataAmount::from_mb(self.0 + rhs.0)
    }
}

impl FromStr for DataAmount {
    type Err = DataAmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DataAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.total_label())
    }
}

impl Serialize for DataAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for DataAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Megabytes(f64),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Megabytes(mb) => Ok(DataAmount::from_mb(mb)),
            Raw::Label(label) => DataAmount::parse(&label).map_err(serde::de::Error::custom),
        }
    }
}
