//! Events emitted by the savings pot.

use odra::{casper_types::U256, prelude::*};

/// Tokens were deposited and credited to `account`.
#[odra::event]
pub struct Deposit {
    pub account: Address,
    pub amount: U256,
}

/// Principal was withdrawn together with the interest realized on it.
#[odra::event]
pub struct Withdrawal {
    pub account: Address,
    pub principal: U256,
    pub interest: U256,
}

/// An operator topped up the reserve.
#[odra::event]
pub struct Replenishment {
    pub account: Address,
    pub amount: U256,
}

#[odra::event]
pub struct RateChanged {
    pub old_rate: U256,
    pub new_rate: U256,
}

#[odra::event]
pub struct WardChanged {
    pub address: Address,
    pub is_ward: bool,
}

#[odra::event]
pub struct OperatorChanged {
    pub address: Address,
    pub is_operator: bool,
}

/// The pot stopped accepting deposits.
#[odra::event]
pub struct Caged {
    pub by: Address,
}
