//! Binary to text encodings with large alphabets: Base58, Base62, Base91 and Base92 as
//! positional big numbers, plus basE91 bit packing.

pub mod base58;
pub mod base62;
pub mod base91;
pub mod base91_packed;
pub mod base92;
pub mod base_common;
pub mod base_positional;
pub mod codec;
pub mod hex;
