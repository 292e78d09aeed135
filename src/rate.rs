//! [`Rate`] numeric types.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::scientific::FromScientific;

/// The decimal places conversions are rounded to.
pub const PRECISION: u32 = 4;

/// A numeric type exchange rates and amounts can be expressed in.
pub trait Rate: FromScientific + Clone {
	/// The rate of the base currency.
	const ONE: Self;

	/// Rounds to `dp` decimal places, half away from zero.
	///
	/// Values without a finite representation are returned as they are.
	fn round_half_away(&self, dp: u32) -> Self;

	/// Multiplication, [`None`] on overflow.
	fn checked_mul(&self, rhs: &Self) -> Option<Self>;

	/// Division, [`None`] on overflow or division by zero.
	fn checked_div(&self, rhs: &Self) -> Option<Self>;
}

impl Rate for Decimal {
	const ONE: Self = Decimal::ONE;

	#[inline] fn round_half_away(&self, dp: u32) -> Self {
		self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
	}

	#[inline] fn checked_mul(&self, rhs: &Self) -> Option<Self> { Decimal::checked_mul(*self, *rhs) }
	#[inline] fn checked_div(&self, rhs: &Self) -> Option<Self> { Decimal::checked_div(*self, *rhs) }
}

// IEEE semantics: overflow gives infinities and x / 0 gives inf or NaN, which then
// pass through rounding untouched.
impl Rate for f64 {
	const ONE: Self = 1.0;

	fn round_half_away(&self, dp: u32) -> Self {
		if !self.is_finite() { return *self; }
		let pow = 10f64.powi(dp as i32);
		let scaled = self.abs() * pow;
		// From 2^52 on an f64 has no fractional digits left.
		if !scaled.is_finite() || scaled >= 2f64.powi(52) { return *self; }
		let rounded = if scaled.fract() >= 0.5 { scaled.ceil() } else { scaled.floor() };
		(rounded / pow).copysign(*self)
	}

	#[inline] fn checked_mul(&self, rhs: &Self) -> Option<Self> { Some(self * rhs) }
	#[inline] fn checked_div(&self, rhs: &Self) -> Option<Self> { Some(self / rhs) }
}

/// Rounds `value` to `dp` decimal places, half away from zero.
#[inline] pub fn round<R: Rate>(value: &R, dp: u32) -> R { value.round_half_away(dp) }

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use rust_decimal_macros::dec;

	use super::*;

	#[rstest]
	#[case(dec!(2.34565), dec!(2.3457))]
	#[case(dec!(-2.34565), dec!(-2.3457))]
	#[case(dec!(2.34564), dec!(2.3456))]
	#[case(dec!(14545.454545), dec!(14545.4545))]
	#[case(dec!(110), dec!(110))]
	#[case(dec!(0.00005), dec!(0.0001))]
	fn test_round_decimal(#[case] value: Decimal, #[case] expected: Decimal) {
		assert_eq!(round(&value, PRECISION), expected);
	}

	#[rstest]
	#[case(0.03125, 0.0313)]
	#[case(-0.03125, -0.0313)]
	#[case(1.5, 1.5)]
	#[case(0.00004, 0.0)]
	#[case(2.34565, 2.3457)]
	#[case(-2.34565, -2.3457)]
	#[case(1e305, 1e305)]
	#[case(-1e305, -1e305)]
	#[case(f64::MAX, f64::MAX)]
	#[case(4503599627370497.0, 4503599627370497.0)]
	fn test_round_f64(#[case] value: f64, #[case] expected: f64) {
		assert_eq!(round(&value, PRECISION), expected);
	}

	#[test]
	fn test_round_non_finite() {
		assert!(round(&f64::NAN, PRECISION).is_nan());
		assert_eq!(round(&f64::INFINITY, PRECISION), f64::INFINITY);
		assert_eq!(round(&f64::NEG_INFINITY, PRECISION), f64::NEG_INFINITY);
	}

	#[test]
	fn test_checked() {
		assert_eq!(Rate::checked_div(&dec!(1), &Decimal::ZERO), None);
		assert_eq!(Rate::checked_mul(&Decimal::MAX, &dec!(2)), None);
		assert_eq!(Rate::checked_div(&dec!(16000), &dec!(1.1)).map(|r| round(&r, PRECISION)), Some(dec!(14545.4545)));
		assert!(Rate::checked_div(&1.0f64, &0.0).unwrap().is_infinite());
	}
}
