//! Static currency table: symbol and rate per supported currency

use super::code::CurrencyCode;
use super::format::format_display;
use crate::error::{DataError, ProjectionError};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Default path to the currency rate file
pub const DEFAULT_CURRENCY_RATES_PATH: &str = "data/currency_rates.csv";

/// Display metadata for one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    pub code: CurrencyCode,
    pub symbol: String,
    /// Units of this currency per one unit of base currency
    pub rate_from_base: f64,
}

/// Lookup from currency code to descriptor
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    descriptors: HashMap<CurrencyCode, CurrencyDescriptor>,
}

impl CurrencyTable {
    /// Table built from the built-in symbols and rates
    pub fn with_default_rates() -> Self {
        let descriptors = CurrencyCode::ALL
            .iter()
            .map(|&code| {
                (
                    code,
                    CurrencyDescriptor {
                        code,
                        symbol: code.symbol().to_string(),
                        rate_from_base: code.default_rate(),
                    },
                )
            })
            .collect();
        Self { descriptors }
    }

    /// Process-wide table of built-in rates, created on first use
    pub fn standard() -> &'static CurrencyTable {
        static STANDARD: OnceLock<CurrencyTable> = OnceLock::new();
        STANDARD.get_or_init(CurrencyTable::with_default_rates)
    }

    /// Build from explicit descriptors, rejecting non-positive rates.
    /// A later descriptor for the same code replaces an earlier one.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = CurrencyDescriptor>,
    {
        let mut map = HashMap::new();
        for d in descriptors {
            if !d.rate_from_base.is_finite() || d.rate_from_base <= 0.0 {
                return Err(DataError::InvalidRate {
                    code: d.code.to_string(),
                    rate: d.rate_from_base,
                });
            }
            map.insert(d.code, d);
        }
        Ok(Self { descriptors: map })
    }

    /// Load from a `code,symbol,rate_from_base` CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let mut reader = Reader::from_path(path)?;
        let mut descriptors = Vec::new();

        for result in reader.deserialize() {
            let descriptor: CurrencyDescriptor = result?;
            descriptors.push(descriptor);
        }

        let table = Self::from_descriptors(descriptors)?;
        log::info!(
            "Loaded {} currency rates from {}",
            table.descriptors.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load from the default location (data/currency_rates.csv)
    pub fn from_csv() -> Result<Self, DataError> {
        Self::from_csv_path(DEFAULT_CURRENCY_RATES_PATH)
    }

    pub fn descriptor(&self, code: CurrencyCode) -> Result<&CurrencyDescriptor, ProjectionError> {
        self.descriptors
            .get(&code)
            .ok_or_else(|| ProjectionError::UnknownCurrency(code.to_string()))
    }

    pub fn rate_from_base(&self, code: CurrencyCode) -> Result<f64, ProjectionError> {
        self.descriptor(code).map(|d| d.rate_from_base)
    }

    pub fn symbol_for(&self, code: CurrencyCode) -> Result<&str, ProjectionError> {
        self.descriptor(code).map(|d| d.symbol.as_str())
    }

    /// Base-currency amount expressed in `code`
    pub fn from_base(&self, value_in_base: f64, code: CurrencyCode) -> Result<f64, ProjectionError> {
        Ok(value_in_base * self.rate_from_base(code)?)
    }

    /// Amount in `code` expressed in base currency
    pub fn to_base(&self, value: f64, code: CurrencyCode) -> Result<f64, ProjectionError> {
        Ok(value / self.rate_from_base(code)?)
    }

    /// Convert a base-currency amount and render it with this table's symbol
    pub fn format(&self, value_in_base: f64, code: CurrencyCode) -> Result<String, ProjectionError> {
        let descriptor = self.descriptor(code)?;
        Ok(format_display(
            value_in_base * descriptor.rate_from_base,
            &descriptor.symbol,
        ))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::with_default_rates()
    }
}
