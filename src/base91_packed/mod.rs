//! basE91: bytes are packed into 13 or 14 bit groups, each written as two base-91 characters.
//!
//! Unlike the positional encodings this needs constant work per byte, but leading zero
//! bytes have no dedicated representation.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_alphabet, decode_into, decode_strict, Decoder, Mode, DECODER, STRICT_DECODER};
pub use encode::{encode, encode_alphabet, encode_into, Encoder, ENCODER};

pub const ALPHABET: Alphabet<91> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~'") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// 91 * 91 = 8281 fits in 14 bits but not in 13. A 13 bit group is only used when its value
/// is above 88, so that the 14 bit reading of the same bits (at most 88 + 8192 = 8280) could
/// not have been meant instead.
const THRESHOLD: usize = 88;
const MASK_13: usize = 0x1FFF;
const MASK_14: usize = 0x3FFF;
