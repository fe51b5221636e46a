//! The three input cells of the tip form and the result derived from them.
//!
//! A front-end calls a setter on every input event and renders the string
//! it returns. Parsed values and the tip are re-derived on each read; the
//! form caches nothing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::format::{CurrencyFormatter, HostFormatter};
use crate::input::parse_amount;
use crate::tip::compute_tip;

/// Form state owned by a single front-end.
#[derive(Debug, Clone)]
pub struct TipForm<F> {
    bill_input: String,
    tip_percent_input: String,
    round_up: bool,
    formatter: F,
}

/// Everything a front-end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Raw bill amount text.
    pub bill_input: String,
    /// Raw tip percentage text.
    pub tip_percent_input: String,
    /// Round-up switch position.
    pub round_up: bool,
    /// Formatted tip.
    pub tip: String,
}

impl<F: CurrencyFormatter> TipForm<F> {
    /// Creates an empty form: both fields blank, round-up off.
    pub fn new(formatter: F) -> Self {
        Self {
            bill_input: String::new(),
            tip_percent_input: String::new(),
            round_up: false,
            formatter,
        }
    }

    /// Raw bill amount text as typed.
    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    /// Raw tip percentage text as typed.
    pub fn tip_percent_input(&self) -> &str {
        &self.tip_percent_input
    }

    /// Whether the tip is rounded up.
    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Bill amount, zero when the text is not a number.
    pub fn bill_amount(&self) -> Decimal {
        parse_amount(&self.bill_input)
    }

    /// Tip percentage, zero when the text is not a number.
    pub fn tip_percent(&self) -> Decimal {
        parse_amount(&self.tip_percent_input)
    }

    /// Replaces the bill text and returns the new tip.
    pub fn set_bill_input(&mut self, text: impl Into<String>) -> String {
        self.bill_input = text.into();
        self.tip()
    }

    /// Replaces the tip percentage text and returns the new tip.
    pub fn set_tip_percent_input(&mut self, text: impl Into<String>) -> String {
        self.tip_percent_input = text.into();
        self.tip()
    }

    /// Sets the round-up switch and returns the new tip.
    pub fn set_round_up(&mut self, round_up: bool) -> String {
        self.round_up = round_up;
        self.tip()
    }

    /// Flips the round-up switch and returns the new tip.
    pub fn toggle_round_up(&mut self) -> String {
        self.set_round_up(!self.round_up)
    }

    /// The formatted tip for the current inputs.
    ///
    /// The parsed percentage is always passed through, so an empty
    /// percentage field means a zero tip rather than the default percent.
    pub fn tip(&self) -> String {
        let amount = self.bill_amount();
        let tip_percent = self.tip_percent();
        let tip = compute_tip(amount, Some(tip_percent), self.round_up, &self.formatter);
        debug!(
            %amount,
            %tip_percent,
            round_up = self.round_up,
            %tip,
            "recomputed tip"
        );
        tip
    }

    /// Copies the inputs together with the freshly computed tip.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            bill_input: self.bill_input.clone(),
            tip_percent_input: self.tip_percent_input.clone(),
            round_up: self.round_up,
            tip: self.tip(),
        }
    }
}

impl TipForm<HostFormatter> {
    /// Creates an empty form that formats for the host locale.
    pub fn for_host() -> Self {
        Self::new(HostFormatter)
    }
}
