use odra::prelude::*;

/// Errors raised by the savings pot. Every variant reverts the whole call.
#[odra::odra_error]
pub enum PotError {
    Unauthorized = 1,
    NotLive = 2,
    InvalidParam = 3,
    InsufficientPrincipal = 4,
    InsufficientLiquidity = 5,

    // 6
    FlashLoanGuard = 6,
    ZeroAmount = 7,
    ExitDelayActive = 8,
    MathOverflow = 9,
}

impl PotError {
    pub fn message(&self) -> &str {
        match self {
            PotError::Unauthorized => "Pot/not-authorized",
            PotError::NotLive => "Pot/not-live",
            PotError::InvalidParam => "Pot/file-unrecognized-param",
            PotError::InsufficientPrincipal => "Pot/insufficient-principal",
            PotError::InsufficientLiquidity => "Pot/insufficient-liquidity",
            PotError::FlashLoanGuard => "Pot/flash-loan-delay",
            PotError::ZeroAmount => "Pot/zero-amount",
            PotError::ExitDelayActive => "Pot/exit-delay",
            PotError::MathOverflow => "Pot/math-overflow",
        }
    }
}

/// Unwraps a pot result in tests, panicking with the error message.
#[cfg(test)]
pub(crate) fn ok<T>(result: Result<T, PotError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err.message()),
    }
}
