//! [European Central Bank](https://www.ecb.europa.eu/stats/policy_and_exchange_rates/euro_reference_exchange_rates/html/index.en.html)
//! euro foreign exchange reference rates.
//!
//! ```no_run
//! # use rust_decimal::Decimal;
//! use ecbrates::currency::list::{EUR, USD};
//!
//! let client = reqwest::blocking::Client::new();
//! let rates = ecbrates::blocking::fetch_latest::<Decimal>(&client)?;
//! println!("{:?}: EUR 100 -> USD {}", rates.date(), rates.convert(&100.into(), EUR, USD)?);
//! # Ok::<(), ecbrates::Error>(())
//! ```

#![deny(missing_docs)]

pub mod currency;
pub use currency::{is_valid_currency, CurrencyCode};

mod error;
pub use error::{Error, Result};

pub mod feed;
pub use feed::Feed;

mod fetch;
pub use fetch::*;

mod rate;
pub use rate::{round, Rate, PRECISION};

mod rates;
pub use rates::Rates;

pub mod scientific;

mod snapshot;
pub use snapshot::{RateHistory, RateSnapshot, BASE};

pub mod xml;
