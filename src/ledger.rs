//! Per-account principal and shares, plus the aggregate principal.

use {
    crate::{
        error::PotError,
        math::{Ray, TryAdd, TrySub},
        state::{Account, Payout},
    },
    odra::{casper_types::U256, prelude::*},
};

#[odra::module]
pub struct Ledger {
    accounts: Mapping<Address, Account>,
    total_principal: Var<U256>,
}

#[odra::module]
impl Ledger {
    /// Sum of every account's principal
    pub fn total_principal(&self) -> U256 {
        self.total_principal.get_or_default()
    }
}

impl Ledger {
    pub fn account(&self, owner: &Address) -> Account {
        self.accounts.get(owner).unwrap_or_default()
    }

    pub fn deposit(
        &mut self,
        owner: &Address,
        amount: U256,
        index: Ray,
        now: u64,
    ) -> Result<(), PotError> {
        let mut account = self.account(owner);
        account.deposit(amount, index, now)?;
        let total = self.total_principal().try_add(amount)?;

        self.accounts.set(owner, account);
        self.total_principal.set(total);
        Ok(())
    }

    /// Debit `amount` of principal, paying out earned interest with it.
    /// Nothing is written when `reserve` cannot cover the payout.
    pub fn withdraw(
        &mut self,
        owner: &Address,
        amount: U256,
        index: Ray,
        reserve: U256,
    ) -> Result<Payout, PotError> {
        let mut account = self.account(owner);
        let payout = account.withdraw(amount, index)?;
        if payout.total()? > reserve {
            return Err(PotError::InsufficientLiquidity);
        }
        let total = self.total_principal().try_sub(amount)?;

        self.accounts.set(owner, account);
        self.total_principal.set(total);
        Ok(payout)
    }
}
