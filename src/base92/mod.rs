//! Base92. The default alphabet is the Base91 one plus the space, which becomes the zero digit.

pub mod decode;
pub mod encode;
pub use crate::base_common::{Alphabet, Approximation};

pub use decode::{decode, decode_alphabet, decode_into, Decoder, DECODER};
pub use encode::{encode, encode_alphabet, encode_into, Encoder, ENCODER};

pub const ALPHABET: Alphabet<92> = match Alphabet::new(b" !#$%&'()*+,-./0123456789:<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}~") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const APPROXIMATION: Approximation = Approximation::new(5, 4);
