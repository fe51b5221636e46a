//! Locale-aware currency formatting.

pub mod currency;

pub use currency::{CurrencyFormatter, HostFormatter, LocaleFormatter};
