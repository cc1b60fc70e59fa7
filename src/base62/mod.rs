//! Base62: digits and letters only, no punctuation.

pub mod decode;
pub mod encode;
pub use crate::base_common::{Alphabet, Approximation};

pub use decode::{decode, decode_alphabet, decode_into, Decoder, DECODER};
pub use encode::{encode, encode_alphabet, encode_into, Encoder, ENCODER};

pub const ALPHABET: Alphabet<62> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const APPROXIMATION: Approximation = Approximation::new(11, 8);

#[cfg(test)]
mod tests {
    #[test]
    fn approximation() {
        assert_eq!(super::APPROXIMATION.verify(62), Ok(()));
    }
}
