//! Exchange Rates: currency pairs and the upstream quote adapter.
//!
//! Currencies are defined declaratively with a macro that generates the
//! `CurrencyCode` enum and its lookups. A [`CurrencyPair`] derives both the
//! upstream URL segment (`USD-BRL`) and the key the provider nests the quote
//! under (`USDBRL`).
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation in `currency.rs`:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     JPY => "JPY",
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, CurrencyPair};
//!
//! let pair = CurrencyPair::usd_brl();
//! assert_eq!(pair.path_segment(), "USD-BRL");
//! assert_eq!(pair.response_key(), "USDBRL");
//! assert_eq!(pair.quote, CurrencyCode::BRL);
//! ```

mod awesome;
mod currency;

pub use awesome::{AwesomeApiProvider, UpstreamQuote, parse_last_quote};
pub use currency::{CurrencyCode, CurrencyPair, ParseCurrencyError};
