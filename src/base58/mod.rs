pub mod decode;
pub mod encode;
pub use crate::base_common::{Alphabet, Approximation};

pub use decode::{decode, decode_alphabet, decode_into, Decoder, DECODER};
pub use encode::{encode, encode_alphabet, encode_into, Encoder, ENCODER};

pub const BITCOIN_ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const FLICKR_ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const ALPHABET: Alphabet<58> = BITCOIN_ALPHABET;

/// 11/8 is just above log(256)/log(58) ~ 1.3657; a power-of-two denominator keeps the estimate cheap.
pub const APPROXIMATION: Approximation = Approximation::new(11, 8);
