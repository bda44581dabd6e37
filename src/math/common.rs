//! Shared scales and checked arithmetic traits for the fixed-point types.

use {crate::error::PotError, odra::casper_types::U256};

/// Decimal places of a token amount
pub const WAD_SCALE: usize = 18;
/// Decimal places of a rate or index
pub const RAY_SCALE: usize = 27;
/// One token unit, 10^18
pub const WAD: u128 = 1_000_000_000_000_000_000;
/// One, 10^27
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// Seconds in a 365 day year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Try to subtract, return an error on underflow
pub trait TrySub: Sized {
    /// Subtract
    fn try_sub(self, rhs: Self) -> Result<Self, PotError>;
}

/// Try to add, return an error on overflow
pub trait TryAdd: Sized {
    /// Add
    fn try_add(self, rhs: Self) -> Result<Self, PotError>;
}

/// Try to divide, return an error on overflow or divide by zero
pub trait TryDiv<RHS>: Sized {
    /// Divide
    fn try_div(self, rhs: RHS) -> Result<Self, PotError>;
}

/// Try to multiply, return an error on overflow
pub trait TryMul<RHS>: Sized {
    /// Multiply
    fn try_mul(self, rhs: RHS) -> Result<Self, PotError>;
}

impl TryAdd for U256 {
    fn try_add(self, rhs: Self) -> Result<Self, PotError> {
        self.checked_add(rhs).ok_or(PotError::MathOverflow)
    }
}

impl TrySub for U256 {
    fn try_sub(self, rhs: Self) -> Result<Self, PotError> {
        self.checked_sub(rhs).ok_or(PotError::MathOverflow)
    }
}
