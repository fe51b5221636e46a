//! Locale identification and per-locale number conventions.
//!
//! Only the conventions needed to render a currency amount are modelled:
//! the currency itself, separators, and where the symbol goes. Locales
//! outside the table fall back to `en_US`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::money::Currency;

/// Environment variables consulted for the host locale, highest priority first.
pub const HOST_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';

/// Errors produced when parsing a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag was empty.
    #[error("Locale tag is empty")]
    Empty,

    /// The language subtag is not 2-3 ASCII letters.
    #[error("Invalid language subtag: {0}")]
    InvalidLanguage(String),

    /// The region subtag is not 2 ASCII letters.
    #[error("Invalid region subtag: {0}")]
    InvalidRegion(String),
}

/// A language plus optional region, e.g. `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `1,00 €`, with the given separator between number and symbol.
    Suffix(char),
}

/// The subset of a locale's number formatting rules used for currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    /// Currency of the locale's region.
    pub currency: Currency,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Separator inserted between groups of three integer digits.
    pub grouping_separator: char,
    /// Symbol placement.
    pub symbol_position: SymbolPosition,
}

impl NumberConventions {
    const EN_US: Self = Self {
        currency: Currency::Usd,
        decimal_separator: '.',
        grouping_separator: ',',
        symbol_position: SymbolPosition::Prefix,
    };
}

impl Locale {
    /// Creates a locale from already validated parts.
    fn from_parts(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        }
    }

    /// The `en_US` locale, used whenever nothing better is known.
    #[must_use]
    pub fn en_us() -> Self {
        Self::from_parts("en", Some("US"))
    }

    /// Lowercase language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Resolves the host's active locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_MONETARY` and `LANG` in that order; the first
    /// non-empty value wins. Unset or unparseable values yield `en_US`.
    #[must_use]
    pub fn from_host() -> Self {
        HOST_LOCALE_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(Self::en_us)
    }

    /// Number conventions for this locale, falling back to `en_US`.
    #[must_use]
    pub fn conventions(&self) -> NumberConventions {
        self.lookup().unwrap_or(NumberConventions::EN_US)
    }

    fn lookup(&self) -> Option<NumberConventions> {
        let region = match self.region.as_deref() {
            Some(region) => region,
            None => default_region(&self.language)?,
        };

        let conventions = match (self.language.as_str(), region) {
            ("en", "US") => NumberConventions::EN_US,
            ("en", "GB") => NumberConventions {
                currency: Currency::Gbp,
                ..NumberConventions::EN_US
            },
            ("en", "SG") => NumberConventions {
                currency: Currency::Sgd,
                ..NumberConventions::EN_US
            },
            ("de", "DE") => NumberConventions {
                currency: Currency::Eur,
                decimal_separator: ',',
                grouping_separator: '.',
                symbol_position: SymbolPosition::Suffix(NBSP),
            },
            ("fr", "FR") => NumberConventions {
                currency: Currency::Eur,
                decimal_separator: ',',
                grouping_separator: NARROW_NBSP,
                symbol_position: SymbolPosition::Suffix(NBSP),
            },
            ("id", "ID") => NumberConventions {
                currency: Currency::Idr,
                decimal_separator: ',',
                grouping_separator: '.',
                symbol_position: SymbolPosition::Prefix,
            },
            ("ja", "JP") => NumberConventions {
                currency: Currency::Jpy,
                ..NumberConventions::EN_US
            },
            _ => return None,
        };
        Some(conventions)
    }
}

fn default_region(language: &str) -> Option<&'static str> {
    match language {
        "en" => Some("US"),
        "de" => Some("DE"),
        "fr" => Some("FR"),
        "id" => Some("ID"),
        "ja" => Some("JP"),
        _ => None,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parses POSIX (`de_DE.UTF-8@euro`) and BCP 47 (`de-DE`) tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        // Drop codeset and modifier: `de_DE.UTF-8@euro` -> `de_DE`
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if tag == "C" || tag == "POSIX" {
            return Ok(Self::en_us());
        }

        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        let region = match parts.next() {
            Some(region) if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(region)
            }
            Some(region) => return Err(LocaleError::InvalidRegion(region.to_string())),
            None => None,
        };

        Ok(Self::from_parts(language, region))
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod tests;
