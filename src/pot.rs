//! The savings pot contract.
//!
//! Depositors `join` with the reference token and `exit` with their
//! principal plus everything earned. Earnings follow a global rate index
//! that compounds every second at the ward-set `rate`; `accrue` brings the
//! index up to the current block time and may be called by anyone.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;

use crate::access::AccessControl;
use crate::error::PotError;
use crate::events::{
    Caged, Deposit, OperatorChanged, RateChanged, Replenishment, WardChanged, Withdrawal,
};
use crate::ledger::Ledger;
use crate::lifecycle::LifecycleGuard;
use crate::state::Accumulator;
use crate::token::ReferenceTokenContractRef;

/// Keys accepted by `set_parameter` for the savings rate. `dsr` is the name
/// older deployments used.
const RATE_KEYS: [&str; 2] = ["rate", "dsr"];

#[odra::module(
    events = [Deposit, Withdrawal, Replenishment, RateChanged, WardChanged, OperatorChanged, Caged],
    errors = PotError
)]
pub struct Pot {
    name: Var<String>,
    symbol: Var<String>,
    token: Var<Address>,
    accumulator: Var<Accumulator>,
    access: SubModule<AccessControl>,
    ledger: SubModule<Ledger>,
    lifecycle: SubModule<LifecycleGuard>,
}

#[odra::module]
impl Pot {
    // ===========================================================================
    // CONSTRUCTOR
    // ===========================================================================
    pub fn init(
        &mut self,
        name: String,
        symbol: String,
        token: Address,
        exit_delay: u64,
        flash_loan_delay: u64,
    ) {
        let deployer = self.env().caller();
        self.name.set(name);
        self.symbol.set(symbol);
        self.token.set(token);
        self.accumulator.set(Accumulator::new(self.now()));
        self.lifecycle.configure(exit_delay, flash_loan_delay);

        self.access.set_ward(deployer, true);
        self.env().emit_event(WardChanged {
            address: deployer,
            is_ward: true,
        });
    }

    // ===========================================================================
    // AUTHORIZATION
    // ===========================================================================

    pub fn grant(&mut self, address: Address) {
        self.access.require_ward();
        self.access.set_ward(address, true);
        self.env().emit_event(WardChanged {
            address,
            is_ward: true,
        });
    }

    /// Revoking the last ward locks every ward-only entry point for good.
    pub fn revoke(&mut self, address: Address) {
        self.access.require_ward();
        self.access.set_ward(address, false);
        self.env().emit_event(WardChanged {
            address,
            is_ward: false,
        });
    }

    pub fn add_operator(&mut self, address: Address) {
        self.access.require_ward();
        self.access.set_operator(address, true);
        self.env().emit_event(OperatorChanged {
            address,
            is_operator: true,
        });
    }

    pub fn remove_operator(&mut self, address: Address) {
        self.access.require_ward();
        self.access.set_operator(address, false);
        self.env().emit_event(OperatorChanged {
            address,
            is_operator: false,
        });
    }

    // ===========================================================================
    // ADMINISTRATION
    // ===========================================================================

    /// Set a parameter. The only key is the per-second `rate`, a ray.
    pub fn set_parameter(&mut self, key: String, value: U256) {
        self.access.require_ward();
        if !RATE_KEYS.contains(&key.as_str()) {
            self.env().revert(PotError::InvalidParam);
        }

        let now = self.now();
        let mut accumulator = self.accumulator.get_or_default();
        let old_rate = self.ok_or_revert(accumulator.set_rate(value, now));
        self.accumulator.set(accumulator);

        self.env().emit_event(RateChanged {
            old_rate,
            new_rate: value,
        });
    }

    pub fn cage(&mut self) {
        self.access.require_ward();
        self.lifecycle.cage();
        self.env().emit_event(Caged {
            by: self.env().caller(),
        });
    }

    // ===========================================================================
    // SAVINGS
    // ===========================================================================

    /// Bring the rate index up to the current block time ("drip"). Open to
    /// anyone, also after caging. Returns the new index.
    pub fn accrue(&mut self) -> U256 {
        let now = self.now();
        let mut accumulator = self.accumulator.get_or_default();
        let advanced = self.ok_or_revert(accumulator.accrue(now));
        let index = accumulator.index;
        if advanced {
            self.accumulator.set(accumulator);
        }
        index
    }

    /// Deposit `amount` of the reference token. Shares are priced at the
    /// index of the latest accrual; time since then is not settled here.
    pub fn join(&mut self, amount: U256) {
        self.lifecycle.require_live();
        if amount.is_zero() {
            self.env().revert(PotError::ZeroAmount);
        }
        let caller = self.env().caller();
        let reserve = self.env().self_address();
        self.token_ref().transfer_from(&caller, &reserve, &amount);

        let index = self.accumulator.get_or_default().index();
        let now = self.now();
        let result = self.ledger.deposit(&caller, amount, index, now);
        self.ok_or_revert(result);

        self.env().emit_event(Deposit {
            account: caller,
            amount,
        });
    }

    /// Withdraw `amount` of principal along with all interest earned so far.
    pub fn exit(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(PotError::ZeroAmount);
        }
        let caller = self.env().caller();
        let account = self.ledger.account(&caller);
        if amount > account.principal {
            self.env().revert(PotError::InsufficientPrincipal);
        }
        let held_for = account.held_for(self.now());
        self.ok_or_revert(self.lifecycle.check_holding_period(held_for));

        let mut token = self.token_ref();
        let reserve = token.balance_of(&self.env().self_address());
        let index = self.accumulator.get_or_default().index();
        let result = self.ledger.withdraw(&caller, amount, index, reserve);
        let payout = self.ok_or_revert(result);
        let total = self.ok_or_revert(payout.total());

        token.transfer(&caller, &total);
        self.env().emit_event(Withdrawal {
            account: caller,
            principal: payout.principal,
            interest: payout.interest,
        });
    }

    /// Top up the reserve so accrued interest can be paid out. Credits no
    /// account.
    pub fn replenish(&mut self, amount: U256) {
        self.access.require_operator();
        if amount.is_zero() {
            self.env().revert(PotError::ZeroAmount);
        }
        let caller = self.env().caller();
        let reserve = self.env().self_address();
        self.token_ref().transfer_from(&caller, &reserve, &amount);

        self.env().emit_event(Replenishment {
            account: caller,
            amount,
        });
    }

    // ===========================================================================
    // VIEWS
    // ===========================================================================

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn token(&self) -> Option<Address> {
        self.token.get()
    }

    pub fn principal_of(&self, address: Address) -> U256 {
        self.ledger.account(&address).principal
    }

    /// Same as `principal_of`
    pub fn balance_of(&self, address: Address) -> U256 {
        self.principal_of(address)
    }

    pub fn shares_of(&self, address: Address) -> U256 {
        self.ledger.account(&address).shares
    }

    /// Principal plus interest at the index of the latest accrual
    pub fn value_of(&self, address: Address) -> U256 {
        let index = self.accumulator.get_or_default().index();
        self.ok_or_revert(self.ledger.account(&address).value(index))
    }

    pub fn earned(&self, address: Address) -> U256 {
        let index = self.accumulator.get_or_default().index();
        self.ok_or_revert(self.ledger.account(&address).earned(index))
    }

    pub fn last_deposit_time(&self, address: Address) -> u64 {
        self.ledger.account(&address).last_deposit_time
    }

    pub fn rate(&self) -> U256 {
        self.accumulator.get_or_default().rate
    }

    pub fn index(&self) -> U256 {
        self.accumulator.get_or_default().index
    }

    pub fn last_accrual_time(&self) -> u64 {
        self.accumulator.get_or_default().last_accrual
    }

    pub fn live(&self) -> bool {
        self.lifecycle.live()
    }

    pub fn exit_delay(&self) -> u64 {
        self.lifecycle.exit_delay()
    }

    pub fn flash_loan_delay(&self) -> u64 {
        self.lifecycle.flash_loan_delay()
    }

    pub fn is_ward(&self, address: Address) -> bool {
        self.access.is_ward(address)
    }

    pub fn is_operator(&self, address: Address) -> bool {
        self.access.is_operator(address)
    }

    pub fn total_principal(&self) -> U256 {
        self.ledger.total_principal()
    }

    /// Same as `total_principal`
    pub fn total_supply(&self) -> U256 {
        self.total_principal()
    }

    /// Reference tokens currently held by the pot
    pub fn reserve_balance(&self) -> U256 {
        self.token_ref().balance_of(&self.env().self_address())
    }
}

impl Pot {
    /// Block time in whole seconds
    fn now(&self) -> u64 {
        self.env().get_block_time() / 1_000
    }

    fn token_ref(&self) -> ReferenceTokenContractRef {
        match self.token.get() {
            Some(address) => ReferenceTokenContractRef::new(self.env(), address),
            None => self.env().revert(PotError::InvalidParam),
        }
    }

    fn ok_or_revert<T>(&self, result: Result<T, PotError>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.env().revert(err),
        }
    }
}
