//! Supported display currencies

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies a projection can be displayed in. USD is the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    INR,
}

impl CurrencyCode {
    /// Currency all simulation arithmetic is performed in
    pub const BASE: CurrencyCode = CurrencyCode::USD;

    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::JPY,
        CurrencyCode::INR,
    ];

    /// ISO 4217 three-letter code
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::INR => "INR",
        }
    }

    /// Built-in display glyph
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::JPY => "¥",
            CurrencyCode::INR => "₹",
        }
    }

    /// Built-in units of this currency per one USD
    pub fn default_rate(&self) -> f64 {
        match self {
            CurrencyCode::USD => 1.0,
            CurrencyCode::EUR => 0.92,
            CurrencyCode::GBP => 0.79,
            CurrencyCode::JPY => 149.50,
            CurrencyCode::INR => 83.12,
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = ProjectionError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, ProjectionError> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::USD),
            "EUR" => Ok(CurrencyCode::EUR),
            "GBP" => Ok(CurrencyCode::GBP),
            "JPY" => Ok(CurrencyCode::JPY),
            "INR" => Ok(CurrencyCode::INR),
            _ => Err(ProjectionError::UnknownCurrency(s.to_string())),
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
