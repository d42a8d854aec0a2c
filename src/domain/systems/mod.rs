// Per-tick simulation systems operating on the mutable roster.

pub mod combat;
pub mod movement;
pub mod targeting;
