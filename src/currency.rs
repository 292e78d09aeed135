//! [Currency codes](CurrencyCode) and the list of currencies the ECB publishes.

use std::{
	fmt::{self, Display, Formatter},
	num::NonZeroU8,
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CURRENCY_LEN: usize = 3;

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
///
/// Any three uppercase ASCII letters make a [`CurrencyCode`]; whether the code is
/// a currency the ECB knows about is answered by [`is_valid`].
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [NonZeroU8; CURRENCY_LEN],
}

/// The default currency code is [`EUR`](list::EUR).
///
/// It is the base currency of every rate the ECB publishes.
impl Default for CurrencyCode {
	#[inline] fn default() -> Self { list::EUR }
}

impl CurrencyCode {
	/// Creates a new [`CurrencyCode`].
	///
	/// # Safety
	/// Ensure the bytes are uppercase alpha ASCII.
	pub const unsafe fn from_bytes_unchecked(bytes: [u8; CURRENCY_LEN]) -> Self {
		Self {
			code: [
				NonZeroU8::new_unchecked(bytes[0]),
				NonZeroU8::new_unchecked(bytes[1]),
				NonZeroU8::new_unchecked(bytes[2]),
			],
		}
	}
}

impl TryFrom<[u8; CURRENCY_LEN]> for CurrencyCode {
	type Error = Error;

	fn try_from(value: [u8; CURRENCY_LEN]) -> Result<Self, Self::Error> {
		match value.into_iter().find(|byte| !byte.is_ascii_uppercase()) {
			Some(bad_char) => Err(Error::InvalidCharacter(bad_char)),
			None => Ok(unsafe {
				// SAFETY: all bytes were checked to be uppercase ASCII.
				Self::from_bytes_unchecked(value)
			}),
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = Error;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		if value.len() < CURRENCY_LEN { return Err(Error::TooShort); }
		if value.len() > CURRENCY_LEN { return Err(Error::TooLong); }
		Self::try_from([value[0], value[1], value[2]])
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = Error;

	#[inline] fn try_from(value: &'a str) -> Result<Self, Self::Error> { Self::try_from(value.as_bytes()) }
}

impl FromStr for CurrencyCode {
	type Err = Error;

	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { s.try_into() }
}

impl AsRef<[u8]> for CurrencyCode {
	fn as_ref(&self) -> &[u8] {
		let code: &[NonZeroU8; CURRENCY_LEN] = &self.code;
		unsafe {
			// SAFETY: NonZeroU8 is repr(transparent) on u8: https://doc.rust-lang.org/std/num/struct.NonZeroU8.html#:~:text=%23%5Brepr(transparent)%5D.
			&*(code as *const [NonZeroU8; CURRENCY_LEN] as *const [u8; CURRENCY_LEN])
		}
	}
}

impl AsRef<str> for CurrencyCode {
	fn as_ref(&self) -> &str {
		unsafe {
			// SAFETY: the code is always ASCII per the invariant documented in CurrencyCode::code
			// therefore valid UTF-8.
			std::str::from_utf8_unchecked(self.as_ref())
		}
	}
}

impl Display for CurrencyCode {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { Display::fmt(AsRef::<str>::as_ref(self), f) }
}

impl Serialize for CurrencyCode {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		<Self as AsRef<str>>::as_ref(self).serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
		struct Visitor;

		impl<'de> serde::de::Visitor<'de> for Visitor {
			type Value = CurrencyCode;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a currency code")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> where E: serde::de::Error {
				v.parse().map_err(serde::de::Error::custom)
			}
		}

		deserializer.deserialize_str(Visitor)
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three uppercase alpha ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The currency code is too short.
	#[error("the currency code is too short")]
	TooShort,
	/// The currency code is too long.
	#[error("the currency code is too long")]
	TooLong,
	/// The currency code has an invalid character.
	#[error("invalid currency code character ({0:?})")]
	InvalidCharacter(u8),
}

/// Whether the currency is one the ECB publishes or has published rates for.
///
/// This says nothing about whether a given [`RateSnapshot`](crate::RateSnapshot) carries
/// the currency: a historical code is valid but missing from today's rates.
#[inline] pub fn is_valid(code: CurrencyCode) -> bool { list::ARRAY.contains(&code) }

/// [`is_valid`] for a raw code; malformed codes are not valid.
pub fn is_valid_currency(code: &str) -> bool {
	code.parse::<CurrencyCode>().map(is_valid).unwrap_or(false)
}

pub mod list {
	//! [Currencies](super::CurrencyCode) constants.
	//!
	//! This module defines every currency the ECB reference rates have carried as
	//! constants, as well as [`ARRAY`] which contains all of them in a constant array.

	/// Defines const [`super::CurrencyCode`]s.
	///
	/// # Safety
	/// Ensure all arguments consist of exactly three uppercase alpha characters.
	macro_rules! unsafe_define_currencies {
		($($currency:ident),* $(,)?) => {
			$(
				#[doc=concat!("The [", stringify!($currency), "](https://www.ecb.europa.eu/stats/policy_and_exchange_rates/euro_reference_exchange_rates/html/eurofxref-graph-", stringify!($currency), ".en.html) currency code.")]
				pub const $currency: crate::CurrencyCode = unsafe { crate::CurrencyCode::from_bytes_unchecked(*bstringify::bstringify!($currency)) };
			)*
			/// The length of all currencies defined in this module.
			const LEN: usize = 0 $(+ { stringify!($currency); 1} )*;
			/// An array of all the currencies defined in this module.
			pub const ARRAY: [crate::CurrencyCode; LEN] = [ $( $currency ),* ];
		};
	}

	// The base currency followed by the currencies of eurofxref-hist.xml. Rates for
	// CYP, EEK, HRK, LTL, LVL, MTL, ROL, RUB, SIT, SKK and TRL are no longer published.
	unsafe_define_currencies!(
		EUR,
		AUD, BGN, BRL, CAD, CHF, CNY, CYP, CZK, DKK, EEK, GBP, HKD, HRK, HUF, IDR, ILS, INR, ISK,
		JPY, KRW, LTL, LVL, MTL, MXN, MYR, NOK, NZD, PHP, PLN, ROL, RON, RUB, SEK, SGD, SIT, SKK,
		THB, TRL, TRY, USD, ZAR,
	);
}
