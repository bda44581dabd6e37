#![allow(clippy::arithmetic_side_effects)]
#![cfg_attr(target_arch = "wasm32", no_std)]

//! A savings-rate accrual ledger for the casper blockchain.
//!
//! Depositors lock a reference stable token in the [`Pot`] and earn interest
//! compounded every second at a rate set by the wards.

extern crate alloc;

pub mod access;
pub mod error;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod math;
pub mod pot;
pub mod state;
pub mod token;

pub use error::PotError;
pub use pot::Pot;
