//! Live switch and withdrawal holding periods.

use {crate::error::PotError, odra::prelude::*};

#[odra::module]
pub struct LifecycleGuard {
    live: Var<bool>,
    exit_delay: Var<u64>,
    flash_loan_delay: Var<u64>,
}

#[odra::module]
impl LifecycleGuard {
    pub fn live(&self) -> bool {
        self.live.get_or_default()
    }

    /// Seconds a deposit must be held before any exit
    pub fn exit_delay(&self) -> u64 {
        self.exit_delay.get_or_default()
    }

    /// Seconds between a deposit and the earliest exit, against same
    /// transaction deposit/withdraw loops
    pub fn flash_loan_delay(&self) -> u64 {
        self.flash_loan_delay.get_or_default()
    }
}

impl LifecycleGuard {
    pub fn configure(&mut self, exit_delay: u64, flash_loan_delay: u64) {
        self.live.set(true);
        self.exit_delay.set(exit_delay);
        self.flash_loan_delay.set(flash_loan_delay);
    }

    /// One way, there is no uncage.
    pub fn cage(&mut self) {
        self.live.set(false);
    }

    pub fn require_live(&self) {
        if !self.live() {
            self.env().revert(PotError::NotLive);
        }
    }

    /// Check both holding periods against seconds held since the last deposit.
    pub fn check_holding_period(&self, held_for: u64) -> Result<(), PotError> {
        if held_for < self.flash_loan_delay() {
            return Err(PotError::FlashLoanGuard);
        }
        if held_for < self.exit_delay() {
            return Err(PotError::ExitDelayActive);
        }
        Ok(())
    }
}
