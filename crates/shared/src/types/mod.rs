//! Common types used across the application.

pub mod locale;
pub mod money;

pub use locale::{Locale, LocaleError, NumberConventions, SymbolPosition};
pub use money::{Currency, Money};
