//! Core tip logic for Tip Time.
//!
//! This crate contains pure logic with ZERO UI or I/O dependencies. A
//! front-end owns a [`form::TipForm`], forwards every input event to it, and
//! renders the string it returns.
//!
//! # Modules
//!
//! - `input` - Lenient text-to-number parsing (zero on failure)
//! - `tip` - The tip formula and default percentage
//! - `format` - Locale-aware currency formatting
//! - `form` - Explicit form state that recomputes on every change

pub mod form;
pub mod format;
pub mod input;
pub mod tip;

pub use form::{FormSnapshot, TipForm};
pub use format::{CurrencyFormatter, HostFormatter, LocaleFormatter};
pub use input::parse_amount;
pub use tip::{DEFAULT_TIP_PERCENT, calculate_tip, compute_tip, compute_tip_for_host};
