//! Ward and operator authorization sets.

use {crate::error::PotError, odra::prelude::*};

/// Wards may change parameters and both sets, operators may only top up
/// the reserve. An address can hold both roles.
#[odra::module]
pub struct AccessControl {
    wards: Mapping<Address, bool>,
    operators: Mapping<Address, bool>,
}

#[odra::module]
impl AccessControl {
    pub fn is_ward(&self, address: Address) -> bool {
        self.wards.get(&address).unwrap_or_default()
    }

    pub fn is_operator(&self, address: Address) -> bool {
        self.operators.get(&address).unwrap_or_default()
    }
}

impl AccessControl {
    /// Revert with `Unauthorized` unless the caller is a ward.
    pub fn require_ward(&self) {
        if !self.is_ward(self.env().caller()) {
            self.env().revert(PotError::Unauthorized);
        }
    }

    /// Revert with `Unauthorized` unless the caller is an operator.
    pub fn require_operator(&self) {
        if !self.is_operator(self.env().caller()) {
            self.env().revert(PotError::Unauthorized);
        }
    }

    /// No authorization check, callers guard this.
    pub fn set_ward(&mut self, address: Address, enabled: bool) {
        self.wards.set(&address, enabled);
    }

    /// No authorization check, callers guard this.
    pub fn set_operator(&mut self, address: Address, enabled: bool) {
        self.operators.set(&address, enabled);
    }
}
