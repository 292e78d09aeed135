//! Currency rates container.

use std::fmt;

use crate::{
	currency::CurrencyCode,
	error::Error,
	rate::{Rate, PRECISION},
};

/// Currency rates, in insertion order.
#[derive(Clone, PartialEq)]
pub struct Rates<RATE> {
	currency: Vec<CurrencyCode>,
	rate: Vec<RATE>,
}

impl<RATE> Rates<RATE> {
	/// Creates a new empty [`Rates`] value.
	pub const fn new() -> Self { Self { currency: Vec::new(), rate: Vec::new() } }

	/// Gets the count of rates.
	#[inline] pub fn len(&self) -> usize { self.currency.len() }
	/// Gets whether there are no rates.
	#[inline] pub fn is_empty(&self) -> bool { self.currency.is_empty() }

	/// Gets a slice of the currencies.
	#[inline] pub fn currencies(&self) -> &[CurrencyCode] { &self.currency }
	/// Gets a slice of the rates.
	#[inline] pub fn rates(&self) -> &[RATE] { &self.rate }

	/// Iterates over currency rates.
	pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, &RATE)> {
		self.currency.iter().copied().zip(self.rate.iter())
	}

	fn position(&self, currency: CurrencyCode) -> Option<usize> {
		self.currency.iter().position(|&c| c == currency)
	}

	/// Inserts a currency rate.
	///
	/// Returns the previous rate if the currency was already present.
	pub(crate) fn insert(&mut self, currency: CurrencyCode, rate: RATE) -> Option<RATE> {
		match self.position(currency) {
			Some(i) => Some(std::mem::replace(&mut self.rate[i], rate)),
			None => {
				self.currency.push(currency);
				self.rate.push(rate);
				None
			}
		}
	}

	/// Gets the rate for the given currency, if exists.
	pub fn get(&self, currency: CurrencyCode) -> Option<&RATE> {
		self.position(currency).map(|i| &self.rate[i])
	}

	/// Gets whether there's a rate for the given currency.
	#[inline] pub fn contains(&self, currency: CurrencyCode) -> bool { self.position(currency).is_some() }
}

impl<RATE: Rate> Rates<RATE> {
	/// Converts an amount between currencies.
	///
	/// Both rates and the result are rounded to [`PRECISION`] decimal places.
	///
	/// Fails with [`Error::CurrencyNotFound`] if either the `from` or `to` currencies are missing.
	pub fn convert(&self, amount: &RATE, from: CurrencyCode, to: CurrencyCode) -> Result<RATE, Error> {
		let from_value = self.get(from).ok_or(Error::CurrencyNotFound(from))?.round_half_away(PRECISION);
		let to_value = self.get(to).ok_or(Error::CurrencyNotFound(to))?.round_half_away(PRECISION);
		amount
			.checked_mul(&to_value)
			.and_then(|value| value.checked_div(&from_value))
			.map(|value| value.round_half_away(PRECISION))
			.ok_or(Error::ArithmeticError { from, to })
	}
}

impl<RATE> Default for Rates<RATE> { #[inline] fn default() -> Self { Self::new() } }

impl<RATE> FromIterator<(CurrencyCode, RATE)> for Rates<RATE> {
	fn from_iter<T: IntoIterator<Item = (CurrencyCode, RATE)>>(iter: T) -> Self {
		let mut rates = Self::new();
		for (currency, rate) in iter { rates.insert(currency, rate); }
		rates
	}
}

impl<RATE: fmt::Debug> fmt::Debug for Rates<RATE> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod test {
	use rust_decimal::Decimal;
	use rust_decimal_macros::dec;

	use super::*;
	use crate::currency::list::*;

	#[test]
	fn test_convert() {
		let rates: Rates<Decimal> = [(EUR, dec!(1)), (USD, dec!(1.1)), (JPY, dec!(160.00))].into_iter().collect();
		assert_eq!(rates.convert(&dec!(1234), USD, USD).unwrap(), dec!(1234));
		assert_eq!(rates.convert(&dec!(1234), EUR, EUR).unwrap(), dec!(1234));
		assert_eq!(rates.convert(&dec!(100), EUR, USD).unwrap(), dec!(110.0000));
		assert_eq!(rates.convert(&dec!(100), USD, JPY).unwrap(), dec!(14545.4545));
		assert_eq!(rates.convert(&dec!(100), JPY, EUR).unwrap(), dec!(0.625));
	}

	#[test]
	fn test_convert_rounds_rates() {
		// 1.23456 is used as 1.2346
		let rates: Rates<Decimal> = [(EUR, dec!(1)), (USD, dec!(1.23456))].into_iter().collect();
		assert_eq!(rates.convert(&dec!(10000), EUR, USD).unwrap(), dec!(12346));
	}

	#[test]
	fn test_convert_missing() {
		let rates: Rates<f64> = [(EUR, 1.0), (USD, 1.1)].into_iter().collect();
		assert!(matches!(rates.convert(&1.0, GBP, USD), Err(Error::CurrencyNotFound(c)) if c == GBP));
		assert!(matches!(rates.convert(&1.0, USD, GBP), Err(Error::CurrencyNotFound(c)) if c == GBP));
		assert!(matches!(rates.convert(&1.0, GBP, JPY), Err(Error::CurrencyNotFound(c)) if c == GBP));
	}

	#[test]
	fn test_convert_zero_rate() {
		let rates: Rates<Decimal> = [(EUR, dec!(1)), (USD, dec!(0))].into_iter().collect();
		assert!(matches!(rates.convert(&dec!(1), USD, EUR), Err(Error::ArithmeticError { from, to }) if from == USD && to == EUR));

		let rates: Rates<f64> = [(EUR, 1.0), (USD, 0.0)].into_iter().collect();
		assert_eq!(rates.convert(&1.0, USD, EUR).unwrap(), f64::INFINITY);
	}

	#[test]
	fn test_convert_large_f64() {
		let rates: Rates<f64> = [(EUR, 1.0), (USD, 1.1)].into_iter().collect();
		assert_eq!(rates.convert(&1e305, EUR, EUR).unwrap(), 1e305);
		assert_eq!(rates.convert(&-1e305, EUR, EUR).unwrap(), -1e305);
	}

	#[test]
	fn test_insert_replaces() {
		let mut rates = Rates::new();
		assert_eq!(rates.insert(USD, 1.0), None);
		assert_eq!(rates.insert(JPY, 160.0), None);
		assert_eq!(rates.insert(USD, 1.1), Some(1.0));
		assert_eq!(rates.len(), 2);
		assert_eq!(rates.currencies(), &[USD, JPY]);
		assert_eq!(rates.get(USD), Some(&1.1));
		assert!(!rates.contains(EUR));
	}
}
