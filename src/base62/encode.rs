use super::{Alphabet, ALPHABET, APPROXIMATION};
use crate::base_positional;

pub use base_positional::encode::Error;

pub type Encoder<'a> = base_positional::Encoder<'a, 62>;

pub const ENCODER: Encoder = Encoder::new(&ALPHABET, APPROXIMATION);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    ENCODER.encode_into(input, output)
}

pub fn encode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<62>) -> String {
    Encoder::new(alphabet, APPROXIMATION).encode(input)
}

#[cfg(test)]
mod tests {
    use crate::base62::Alphabet;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([0x00, 0x00]), "00");
        assert_eq!(super::encode([0x00, 0x00, 0xff]), "0047");
        assert_eq!(super::encode("a"), "1Z");
        assert_eq!(super::encode("Hello, world!"), "1wJfrzvdbthTq5ANZB");
        assert_eq!(super::encode([0xff; 8]), "LygHa16AHYF");
        assert_eq!(super::encode([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255]), "01TSm0PiyImxMV");
    }

    #[test]
    fn encode_alphabet() {
        let alphabet = Alphabet::from_slice("0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(super::encode_alphabet([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255], &alphabet), "01tsM0pIYiMXmv");
    }
}
