pub mod alphabet;
pub mod approximation;
mod digits;

pub use alphabet::Alphabet;
pub use approximation::Approximation;
pub(crate) use digits::{Digits, Limbs};
