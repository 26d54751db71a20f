//! Richer implementations that the registry prefers over the base ones.

mod button;
pub use button::*;
