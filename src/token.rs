//! The reference stable token the pot holds, and a mintable stand-in for it.

use odra::{casper_types::U256, prelude::*};

/// Calls the pot makes on the reference token. A failing call reverts the
/// pot operation that made it.
#[odra::external_contract]
pub trait ReferenceToken {
    fn transfer(&mut self, recipient: &Address, amount: &U256);
    fn transfer_from(&mut self, owner: &Address, recipient: &Address, amount: &U256);
    fn balance_of(&self, address: &Address) -> U256;
}

#[odra::odra_error]
pub enum TokenError {
    InsufficientBalance = 100,
    InsufficientAllowance = 101,
}

#[odra::event]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}

/// Minimal CEP-18 style token with open minting, for tests and testnet.
#[odra::module(events = [Transfer, Approval], errors = TokenError)]
pub struct MockToken {
    name: Var<String>,
    symbol: Var<String>,
    total_supply: Var<U256>,
    balances: Mapping<Address, U256>,
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl MockToken {
    pub fn init(&mut self, name: String, symbol: String, initial_supply: U256) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.total_supply.set(U256::zero());
        let caller = self.env().caller();
        self.mint(&caller, &initial_supply);
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        18
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, address: &Address) -> U256 {
        self.balances.get(address).unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances.get(&(*owner, *spender)).unwrap_or_default()
    }

    pub fn mint(&mut self, owner: &Address, amount: &U256) {
        let balance = self.balance_of(owner);
        self.balances.set(owner, balance + *amount);
        self.total_supply.set(self.total_supply() + *amount);
    }

    pub fn approve(&mut self, spender: &Address, amount: &U256) {
        let owner = self.env().caller();
        self.allowances.set(&(owner, *spender), *amount);
        self.env().emit_event(Approval {
            owner,
            spender: *spender,
            amount: *amount,
        });
    }

    pub fn transfer(&mut self, recipient: &Address, amount: &U256) {
        let sender = self.env().caller();
        self.move_balance(&sender, recipient, amount);
    }

    pub fn transfer_from(&mut self, owner: &Address, recipient: &Address, amount: &U256) {
        let spender = self.env().caller();
        let allowance = self.allowance(owner, &spender);
        if allowance < *amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }
        self.allowances.set(&(*owner, spender), allowance - *amount);
        self.move_balance(owner, recipient, amount);
    }
}

impl MockToken {
    fn move_balance(&mut self, from: &Address, to: &Address, amount: &U256) {
        let from_balance = self.balance_of(from);
        if from_balance < *amount {
            self.env().revert(TokenError::InsufficientBalance);
        }
        self.balances.set(from, from_balance - *amount);
        let to_balance = self.balance_of(to);
        self.balances.set(to, to_balance + *amount);
        self.env().emit_event(Transfer {
            from: *from,
            to: *to,
            amount: *amount,
        });
    }
}
