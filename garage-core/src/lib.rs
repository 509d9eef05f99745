//! Crate containing a vehicle capability, its concrete variants, and a player that
//! drives whichever vehicle it is handed.
//! # Features:
//! - logging: emit `log` records on vehicle assignment and driving (enabled by default)

pub mod imports;
pub mod plan;
pub mod player;
pub mod prelude;
pub mod traits;
pub mod vehicle;
