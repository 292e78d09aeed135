//! [`RateSnapshot`]: one day of reference rates.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
	currency::{list::EUR, CurrencyCode},
	error::Result,
	rate::Rate,
	rates::Rates,
};

/// The currency every published rate is relative to.
pub const BASE: CurrencyCode = EUR;

/// Reference rates for one day, relative to [`BASE`].
///
/// The base currency is always present with a rate of one.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot<R = Decimal> {
	date: Option<NaiveDate>,
	rates: Rates<R>,
}

/// Reference rates for a sequence of days, in the order the feed lists them.
pub type RateHistory<R = Decimal> = Vec<RateSnapshot<R>>;

impl<R: Rate> RateSnapshot<R> {
	/// Creates a snapshot for `date` from the published rates.
	///
	/// A rate given for the base currency is ignored.
	pub fn new(date: NaiveDate, rates: impl IntoIterator<Item = (CurrencyCode, R)>) -> Self {
		let mut snapshot = Self { date: Some(date), ..Default::default() };
		for (currency, rate) in rates {
			if currency == BASE {
				log::warn!("{date}: ignoring a published rate for the base currency");
				continue;
			}
			if snapshot.rates.insert(currency, rate).is_some() {
				log::warn!("{date}: {currency} is listed more than once, keeping the last rate");
			}
		}
		snapshot
	}

	/// Converts `amount` of `from` to `to`.
	///
	/// See [`Rates::convert`].
	#[inline] pub fn convert(&self, amount: &R, from: CurrencyCode, to: CurrencyCode) -> Result<R> {
		self.rates.convert(amount, from, to)
	}
}

impl<R> RateSnapshot<R> {
	/// The day the rates were published for.
	///
	/// [`None`] only for the [default](Default) snapshot, which stands in for a feed with no days.
	#[inline] pub fn date(&self) -> Option<NaiveDate> { self.date }

	/// The rate of one [`BASE`] in `currency`.
	#[inline] pub fn rate(&self, currency: CurrencyCode) -> Option<&R> { self.rates.get(currency) }

	/// Gets whether there's a rate for `currency`.
	#[inline] pub fn contains(&self, currency: CurrencyCode) -> bool { self.rates.contains(currency) }

	/// The rates, starting with [`BASE`].
	#[inline] pub fn rates(&self) -> &Rates<R> { &self.rates }

	/// The currencies with a rate, starting with [`BASE`].
	#[inline] pub fn currencies(&self) -> &[CurrencyCode] { self.rates.currencies() }

	/// Iterates over currency rates.
	#[inline] pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, &R)> { self.rates.iter() }

	/// The count of currencies with a rate, [`BASE`] included.
	#[inline] pub fn len(&self) -> usize { self.rates.len() }

	/// Always `false`: the base currency is always present.
	#[inline] pub fn is_empty(&self) -> bool { self.rates.is_empty() }
}

/// A snapshot without a date that only knows the base currency.
impl<R: Rate> Default for RateSnapshot<R> {
	fn default() -> Self {
		Self { date: None, rates: [(BASE, R::ONE)].into_iter().collect() }
	}
}
