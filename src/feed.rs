//! The reference rates [`Feed`]s.

use std::fmt::{self, Display, Formatter};

macro_rules! deffeeds {
	($base:literal, $($(#[$doc:meta])* $id:ident <- $document:literal),* $(,)?) => {
		/// A reference rates document published by the ECB.
		#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
		pub enum Feed {
			$($(#[$doc])* $id,)*
		}

		impl Feed {
			/// All the feeds.
			pub const ALL: [Feed; 0 $(+ { stringify!($id); 1 })*] = [$(Feed::$id),*];

			/// The URL of the feed document.
			pub const fn url(self) -> &'static str {
				match self {
					$(Feed::$id => concat!($base, $document),)*
				}
			}
		}
	};
}

deffeeds!("https://www.ecb.europa.eu/stats/eurofxref/",
	/// The rates of the latest working day.
	Daily <- "eurofxref-daily.xml",
	/// The rates of the last 90 days.
	Recent <- "eurofxref-hist-90d.xml",
	/// All rates since 1999.
	Full <- "eurofxref-hist.xml",
);

impl Display for Feed {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.url().fmt(f) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_url() {
		assert_eq!(Feed::Daily.url(), "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml");
		assert_eq!(Feed::Recent.url(), "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist-90d.xml");
		assert_eq!(Feed::Full.to_string(), "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist.xml");
		assert_eq!(Feed::ALL, [Feed::Daily, Feed::Recent, Feed::Full]);
	}
}
