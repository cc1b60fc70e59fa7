use super::{Alphabet, ALPHABET, APPROXIMATION};
use crate::base_positional;

pub use base_positional::encode::Error;

pub type Encoder<'a> = base_positional::Encoder<'a, 91>;

pub const ENCODER: Encoder = Encoder::new(&ALPHABET, APPROXIMATION);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    ENCODER.encode_into(input, output)
}

pub fn encode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<91>) -> String {
    Encoder::new(alphabet, APPROXIMATION).encode(input)
}

#[cfg(test)]
mod tests {
    use crate::base91::Alphabet;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([0x00, 0x00]), "!!");
        assert_eq!(super::encode([0x00, 0x00, 0xff]), "!!$m");
        assert_eq!(super::encode("a"), "#(");
        assert_eq!(super::encode("Hello, world!"), "9Yva<3bR#-('J-?@");
        assert_eq!(super::encode([0xff; 8]), "N+fV].vsV1");
        assert_eq!(super::encode([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255]), "!#B6*yOw]cPi5");
    }

    #[test]
    fn encode_alphabet() {
        let alphabet = Alphabet::from_slice(concat!(
            "abcdefghijklmnopqrstuvwxyz[]^_`!@#$%&()*+-<=>",
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/{|}~.,:;?"
        ))
        .unwrap();
        assert_eq!(super::encode_alphabet([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255], &alphabet), "ab!ui~>|MSAYt");
    }
}
