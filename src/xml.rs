//! Decoding of the ECB reference rates XML document.
//!
//! ```xml
//! <gesmes:Envelope>
//!     <gesmes:subject>Reference rates</gesmes:subject>
//!     <Cube>
//!         <Cube time="2024-05-17">
//!             <Cube currency="USD" rate="1.0866"/>
//!         </Cube>
//!     </Cube>
//! </gesmes:Envelope>
//! ```

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
	currency::CurrencyCode,
	error::{Error, Result},
	rate::Rate,
	snapshot::{RateHistory, RateSnapshot},
};

#[derive(Debug, Deserialize)]
struct Envelope {
	#[serde(rename = "Cube")]
	cube: Days,
}

#[derive(Debug, Deserialize)]
struct Days {
	#[serde(rename = "Cube", default)]
	days: Vec<Day>,
}

#[derive(Debug, Deserialize)]
struct Day {
	time: String,
	#[serde(rename = "Cube", default)]
	rates: Vec<DayRate>,
}

#[derive(Debug, Deserialize)]
struct DayRate {
	currency: CurrencyCode,
	rate: String,
}

fn snapshot<R: Rate>(day: Day) -> Result<RateSnapshot<R>> {
	let date = NaiveDate::parse_from_str(&day.time, "%Y-%m-%d")
		.map_err(|_| Error::DateParseError(day.time))?;
	let rates = day.rates
		.into_iter()
		.map(|DayRate { currency, rate }| match R::parse_scientific(&rate) {
			Ok(value) => Ok((currency, value)),
			Err(_) => Err(Error::RateParseError { currency, rate }),
		})
		.collect::<Result<Vec<_>>>()?;
	log::trace!("{date}: {} rates", rates.len());
	Ok(RateSnapshot::new(date, rates))
}

/// Decodes every day of a reference rates document, in document order.
pub fn parse_history<R: Rate>(body: &[u8]) -> Result<RateHistory<R>> {
	let envelope: Envelope = serde_xml_rs::from_reader(body)?;
	let history = envelope.cube.days
		.into_iter()
		.map(snapshot)
		.collect::<Result<RateHistory<R>>>()?;
	log::debug!("decoded {} days of rates", history.len());
	Ok(history)
}

/// Decodes the first day of a reference rates document.
///
/// A document without days gives the [default](RateSnapshot::default) snapshot.
pub fn parse_latest<R: Rate>(body: &[u8]) -> Result<RateSnapshot<R>> {
	Ok(parse_history(body)?.into_iter().next().unwrap_or_default())
}
