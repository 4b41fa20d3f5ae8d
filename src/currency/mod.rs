//! Currency codes, the rate table, and display formatting

mod code;
mod format;
mod table;

pub use code::CurrencyCode;
pub use format::{format, format_code, format_display};
pub use table::{CurrencyDescriptor, CurrencyTable, DEFAULT_CURRENCY_RATES_PATH};
