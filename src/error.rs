//! [`Error`] type.

use crate::currency::CurrencyCode;

/// An error from fetching, decoding or converting rates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// HTTP error.
	#[error("http error: {0}")]
	HttpError(#[from] reqwest::Error),
	/// The response isn't a reference rates document.
	#[error("failed to parse the response: {0}")]
	ResponseParseError(#[from] serde_xml_rs::Error),
	/// A day in the response has a malformed date.
	#[error("invalid date in the response ({0:?})")]
	DateParseError(String),
	/// A rate in the response isn't a finite decimal number.
	#[error("invalid rate for {currency} ({rate:?})")]
	RateParseError {
		/// The currency of the rate.
		currency: CurrencyCode,
		/// The rate as it appears in the response.
		rate: String,
	},
	/// There's no rate for the currency.
	#[error("rate unavailable for {0}")]
	CurrencyNotFound(CurrencyCode),
	/// The conversion result can't be represented.
	#[error("conversion from {from} to {to} is out of range")]
	ArithmeticError {
		/// The currency converted from.
		from: CurrencyCode,
		/// The currency converted to.
		to: CurrencyCode,
	},
}

/// [`std::result::Result`] with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
