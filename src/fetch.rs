//! Fetching the reference rates.
//!
//! Every function makes exactly one request with the given client: there's no
//! retrying and no caching. Timeouts and proxies are configured on the client.

use crate::{
	error::Result,
	feed::Feed,
	rate::Rate,
	snapshot::{RateHistory, RateSnapshot},
	xml,
};

/// Fetches and decodes a reference rates document from `url`.
///
/// Use this for a mirror of the ECB documents; otherwise see [`fetch_feed`].
pub async fn fetch_url<R: Rate>(client: &reqwest::Client, url: &str) -> Result<RateHistory<R>> {
	log::debug!("fetching reference rates from {url}");
	let body = client.get(url).send().await?.error_for_status()?.bytes().await?;
	xml::parse_history(&body)
}

/// Fetches and decodes a [`Feed`].
#[inline] pub async fn fetch_feed<R: Rate>(client: &reqwest::Client, feed: Feed) -> Result<RateHistory<R>> {
	fetch_url(client, feed.url()).await
}

/// Fetches the latest rates.
///
/// Gives the [default](RateSnapshot::default) snapshot if the feed has no days.
pub async fn fetch_latest<R: Rate>(client: &reqwest::Client) -> Result<RateSnapshot<R>> {
	let history = fetch_feed(client, Feed::Daily).await?;
	Ok(history.into_iter().next().unwrap_or_default())
}

/// Fetches the rates of the last 90 days, latest first.
#[inline] pub async fn fetch_recent_history<R: Rate>(client: &reqwest::Client) -> Result<RateHistory<R>> {
	fetch_feed(client, Feed::Recent).await
}

/// Fetches all published rates, latest first.
///
/// The document is large, several megabytes.
#[inline] pub async fn fetch_full_history<R: Rate>(client: &reqwest::Client) -> Result<RateHistory<R>> {
	fetch_feed(client, Feed::Full).await
}

#[cfg(feature = "blocking")]
pub mod blocking {
	//! Blocking versions of the [fetch](super) functions.

	use super::*;

	/// Fetches and decodes a reference rates document from `url`.
	pub fn fetch_url<R: Rate>(client: &reqwest::blocking::Client, url: &str) -> Result<RateHistory<R>> {
		log::debug!("fetching reference rates from {url}");
		let body = client.get(url).send()?.error_for_status()?.bytes()?;
		xml::parse_history(&body)
	}

	/// Fetches and decodes a [`Feed`].
	#[inline] pub fn fetch_feed<R: Rate>(client: &reqwest::blocking::Client, feed: Feed) -> Result<RateHistory<R>> {
		fetch_url(client, feed.url())
	}

	/// Fetches the latest rates.
	pub fn fetch_latest<R: Rate>(client: &reqwest::blocking::Client) -> Result<RateSnapshot<R>> {
		Ok(fetch_feed(client, Feed::Daily)?.into_iter().next().unwrap_or_default())
	}

	/// Fetches the rates of the last 90 days, latest first.
	#[inline] pub fn fetch_recent_history<R: Rate>(client: &reqwest::blocking::Client) -> Result<RateHistory<R>> {
		fetch_feed(client, Feed::Recent)
	}

	/// Fetches all published rates, latest first.
	#[inline] pub fn fetch_full_history<R: Rate>(client: &reqwest::blocking::Client) -> Result<RateHistory<R>> {
		fetch_feed(client, Feed::Full)
	}
}
