use {
    crate::{
        error::PotError,
        math::{Ray, TryMul},
    },
    odra::casper_types::U256,
};

/// Compounding state of the savings rate.
#[odra::odra_type]
pub struct Accumulator {
    /// Per-second growth factor, scaled by RAY
    pub rate: U256,
    /// Cumulative growth since initialization, scaled by RAY
    pub index: U256,
    /// Block time in seconds of the last accrual
    pub last_accrual: u64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Accumulator {
    /// Fresh accumulator at index 1.0 and a rate of 1.0 (no interest)
    pub fn new(now: u64) -> Self {
        Self {
            rate: Ray::one().to_scaled_val(),
            index: Ray::one().to_scaled_val(),
            last_accrual: now,
        }
    }

    pub fn rate(&self) -> Ray {
        Ray::from_scaled_val(self.rate)
    }

    pub fn index(&self) -> Ray {
        Ray::from_scaled_val(self.index)
    }

    /// Return seconds elapsed since the last accrual
    pub fn elapsed(&self, now: u64) -> Result<u64, PotError> {
        now.checked_sub(self.last_accrual)
            .ok_or(PotError::MathOverflow)
    }

    /// Bring the index up to `now`. Returns false when no time has passed.
    pub fn accrue(&mut self, now: u64) -> Result<bool, PotError> {
        let elapsed = self.elapsed(now)?;
        if elapsed == 0 {
            return Ok(false);
        }
        let growth = self.rate().try_pow(elapsed)?;
        self.index = self.index().try_mul(growth)?.to_scaled_val();
        self.last_accrual = now;
        Ok(true)
    }

    /// Replace the rate after settling interest owed under the old one.
    /// Returns the previous rate.
    pub fn set_rate(&mut self, rate: U256, now: u64) -> Result<U256, PotError> {
        self.accrue(now)?;
        let old = self.rate;
        self.rate = rate;
        Ok(old)
    }
}
