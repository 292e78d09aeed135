use ecbrates::{
	blocking,
	currency::list::{EUR, JPY, USD},
	RateSnapshot,
};
use rust_decimal::Decimal;

fn main() -> Result<(), ecbrates::Error> {
	env_logger::init();
	let client = reqwest::blocking::Client::new();
	let rates: RateSnapshot<Decimal> = blocking::fetch_latest(&client)?;
	let date = rates.date().map(|date| date.to_string()).unwrap_or_default();

	if let Some(rate) = rates.rate(USD) {
		println!("Exchange rate {date}: EUR 1 -> USD {rate}");
	}
	let hundred = Decimal::from(100);
	println!("Exchange rate {date}: EUR 100 -> USD {}", rates.convert(&hundred, EUR, USD)?);
	println!("Exchange rate {date}: USD 100 -> JPY {}", rates.convert(&hundred, USD, JPY)?);
	Ok(())
}
