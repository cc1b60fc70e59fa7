//! Positional base conversion: the input is one big-endian integer rewritten in radix `N`.

pub mod decode;
pub mod encode;

pub use crate::base_common::{Alphabet, Approximation};
pub use decode::Decoder;
pub use encode::Encoder;
