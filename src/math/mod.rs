pub mod common;
pub mod ray;
pub mod wad;

pub use common::{TryAdd, TryDiv, TryMul, TrySub, RAY, WAD};
pub use ray::Ray;
