//! Explicit state for the tip form.

pub mod state;


pub use state::{FormSnapshot, TipForm};
