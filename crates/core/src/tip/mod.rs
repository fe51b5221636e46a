//! Tip calculation.

pub mod calculator;

#[cfg(test)]
mod props;

pub use calculator::{DEFAULT_TIP_PERCENT, calculate_tip, compute_tip, compute_tip_for_host};
