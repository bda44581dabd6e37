//! Ray type for per-second rates and the cumulative rate index

use {
    crate::{
        error::PotError,
        math::{common::*, TryMul},
    },
    alloc::{format, string::ToString},
    core::fmt,
    odra::casper_types::U256,
};

/// Fixed-point value precise to 27 digits
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord)]
pub struct Ray(pub U256);

impl Ray {
    /// One (1.0)
    pub fn one() -> Self {
        Self(Self::ray())
    }

    /// Zero
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    fn ray() -> U256 {
        U256::from(RAY)
    }

    /// Return raw scaled value
    pub fn to_scaled_val(&self) -> U256 {
        self.0
    }

    /// Create ray from scaled value
    pub fn from_scaled_val(scaled_val: U256) -> Self {
        Self(scaled_val)
    }

    /// Raise to an integer power by repeated squaring.
    ///
    /// Every intermediate product is truncated to 27 digits, so the result
    /// is reproducible bit for bit for a given base and exponent.
    pub fn try_pow(&self, exponent: u64) -> Result<Self, PotError> {
        let mut result = Self::one();
        let mut base = *self;
        let mut exp = exponent;

        while exp > 0 {
            if exp % 2 == 1 {
                result = result.try_mul(base)?;
            }
            exp /= 2;
            if exp > 0 {
                base = base.try_mul(base)?;
            }
        }

        Ok(result)
    }

    /// `amount * self`, rounded down
    pub fn try_scale(&self, amount: U256) -> Result<U256, PotError> {
        amount
            .checked_mul(self.0)
            .ok_or(PotError::MathOverflow)?
            .checked_div(Self::ray())
            .ok_or(PotError::MathOverflow)
    }

    /// `amount / self`, rounded down
    pub fn try_unscale(&self, amount: U256) -> Result<U256, PotError> {
        amount
            .checked_mul(Self::ray())
            .ok_or(PotError::MathOverflow)?
            .checked_div(self.0)
            .ok_or(PotError::MathOverflow)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scaled_val = self.0.to_string();
        if scaled_val.len() <= RAY_SCALE {
            let padding = "0".repeat(RAY_SCALE - scaled_val.len());
            scaled_val = format!("0.{}{}", padding, scaled_val);
        } else {
            scaled_val.insert(scaled_val.len() - RAY_SCALE, '.');
        }
        f.write_str(&scaled_val)
    }
}

impl From<u64> for Ray {
    fn from(val: u64) -> Self {
        Self(Self::ray().checked_mul(U256::from(val)).unwrap_or(U256::max_value()))
    }
}

impl crate::math::TryAdd for Ray {
    fn try_add(self, rhs: Self) -> Result<Self, PotError> {
        Ok(Self(self.0.checked_add(rhs.0).ok_or(PotError::MathOverflow)?))
    }
}

impl crate::math::TrySub for Ray {
    fn try_sub(self, rhs: Self) -> Result<Self, PotError> {
        Ok(Self(self.0.checked_sub(rhs.0).ok_or(PotError::MathOverflow)?))
    }
}

impl crate::math::TryDiv<Ray> for Ray {
    fn try_div(self, rhs: Self) -> Result<Self, PotError> {
        Ok(Self(
            self.0
                .checked_mul(Self::ray())
                .ok_or(PotError::MathOverflow)?
                .checked_div(rhs.0)
                .ok_or(PotError::MathOverflow)?,
        ))
    }
}

impl crate::math::TryMul<Ray> for Ray {
    fn try_mul(self, rhs: Self) -> Result<Self, PotError> {
        Ok(Self(
            self.0
                .checked_mul(rhs.0)
                .ok_or(PotError::MathOverflow)?
                .checked_div(Self::ray())
                .ok_or(PotError::MathOverflow)?,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ok;
    use crate::math::{TryDiv, TrySub};

    // 10% and 20% a year, compounded every second
    const DSR_10: &str = "1000000003022266000000000000";
    const DSR_20: &str = "1000000005781378656804590540";

    fn ray(s: &str) -> Ray {
        Ray(U256::from_dec_str(s).unwrap())
    }

    fn pow(base: Ray, exp: u64) -> Ray {
        ok(base.try_pow(exp))
    }

    fn abs_diff(a: Ray, b: Ray) -> U256 {
        if a > b {
            a.0 - b.0
        } else {
            b.0 - a.0
        }
    }

    #[test]
    fn test_scaler() {
        assert_eq!(U256::from(RAY), Ray::ray());
        assert_eq!(Ray::from(3u64).0, U256::from(3u64) * U256::from(RAY));
    }

    #[test]
    fn test_pow_zero_is_one() {
        assert_eq!(pow(ray(DSR_10), 0), Ray::one());
        assert_eq!(pow(Ray::zero(), 0), Ray::one());
    }

    #[test]
    fn test_pow_of_one_is_exact() {
        assert_eq!(pow(Ray::one(), 31_536_000), Ray::one());
    }

    #[test]
    fn test_pow_small_integers() {
        assert_eq!(pow(Ray::from(2u64), 10), Ray::from(1024u64));
        assert_eq!(pow(Ray::from(3u64), 1), Ray::from(3u64));
    }

    #[test]
    fn test_pow_one_year_at_ten_percent() {
        let factor = pow(ray(DSR_10), SECONDS_PER_YEAR);
        let expected = ray("1100000000000000000000000000");
        // within one part in 10^8
        assert!(abs_diff(factor, expected) < U256::from(10_000_000_000_000_000_000u128));
    }

    #[test]
    fn test_pow_one_year_at_twenty_percent() {
        let factor = pow(ray(DSR_20), SECONDS_PER_YEAR);
        let expected = ray("1200000000000000000000000000");
        assert!(abs_diff(factor, expected) < U256::from(10_000_000_000_000_000_000u128));
    }

    #[test]
    fn test_pow_splits_over_exponent_sum() {
        let rate = ray(DSR_20);
        let whole = pow(rate, 1_000_003);
        let split = ok(pow(rate, 400_000).try_mul(pow(rate, 600_003)));
        assert!(abs_diff(whole, split) < U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_pow_below_one_decays() {
        let rate = ok(Ray::one().try_sub(Ray(U256::from(1_000_000_000u64))));
        assert!(pow(rate, 1_000) < rate);
    }

    #[test]
    fn test_scale_and_unscale() {
        let index = ray("1100000000000000000000000000");
        let amount = U256::from(10u128 * WAD);
        let shares = ok(index.try_unscale(amount));
        assert_eq!(shares, U256::from(9_090_909_090_909_090_909u128));
        // truncation loses at most one unit on the way back
        assert_eq!(ok(index.try_scale(shares)), amount - U256::one());
    }

    #[test]
    fn test_unscale_by_zero_overflows() {
        assert!(matches!(
            Ray::zero().try_unscale(U256::one()),
            Err(PotError::MathOverflow)
        ));
        assert!(matches!(
            Ray::one().try_div(Ray::zero()),
            Err(PotError::MathOverflow)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ray::one().to_string(), "1.000000000000000000000000000");
        assert_eq!(
            Ray(U256::from(5u64)).to_string(),
            "0.000000000000000000000000005"
        );
    }
}
