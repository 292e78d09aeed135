use ecbrates::{blocking, currency::list::USD, RateHistory};

fn main() -> Result<(), ecbrates::Error> {
	env_logger::init();
	let client = reqwest::blocking::Client::new();
	let history: RateHistory = blocking::fetch_recent_history(&client)?;
	for rates in &history {
		if let (Some(date), Some(rate)) = (rates.date(), rates.rate(USD)) {
			println!("Exchange rate {date}: EUR 1 -> USD {rate}");
		}
	}
	Ok(())
}
