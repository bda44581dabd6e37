// Plain state types stored by the pot modules

pub mod account;
pub mod accumulator;

pub use account::*;
pub use accumulator::*;
