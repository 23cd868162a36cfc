//! Currency codes and pairs.

use std::fmt;
use std::str::FromStr;

/// Error parsing a currency code or pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCurrencyError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid currency pair: {0} (expected BASE-QUOTE)")]
    InvalidPair(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines CurrencyCode and its lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define currencies with auto-generated enum, lookups and parsing.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CurrencyName => "CODE",
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => $code:literal
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }
        }

        impl FromStr for CurrencyCode {
            type Err = ParseCurrencyError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(ParseCurrencyError::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => "USD",
    BRL => "BRL",
    EUR => "EUR",
    GBP => "GBP",
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency Pair
// ─────────────────────────────────────────────────────────────────────────────

/// A quoted pair: how many `quote` units one `base` unit buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }

    /// US dollar priced in Brazilian reais.
    pub fn usd_brl() -> Self {
        Self::new(CurrencyCode::USD, CurrencyCode::BRL)
    }

    /// URL segment used by the provider, e.g. `USD-BRL`.
    pub fn path_segment(&self) -> String {
        format!("{}-{}", self.base, self.quote)
    }

    /// Key the provider nests the quote under, e.g. `USDBRL`.
    pub fn response_key(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::usd_brl()
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('-')
            .ok_or_else(|| ParseCurrencyError::InvalidPair(s.to_string()))?;
        Ok(Self::new(base.parse()?, quote.parse()?))
    }
}
