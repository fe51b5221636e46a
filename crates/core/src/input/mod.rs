//! Lenient parsing of user-typed numbers.

pub mod parser;

pub use parser::parse_amount;
