//! Positional Base91. The default alphabet is every printable character from `!` to `~`
//! except `"`, `;` and `\`, which keeps encoded values usable as cookie tokens.

pub mod decode;
pub mod encode;
pub use crate::base_common::{Alphabet, Approximation};

pub use decode::{decode, decode_alphabet, decode_into, Decoder, DECODER};
pub use encode::{encode, encode_alphabet, encode_into, Encoder, ENCODER};

pub const ALPHABET: Alphabet<91> = match Alphabet::new(b"!#$%&'()*+,-./0123456789:<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}~") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// log(256)/log(91) ~ 1.2293.
pub const APPROXIMATION: Approximation = Approximation::new(5, 4);
