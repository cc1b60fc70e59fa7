use super::{Alphabet, ALPHABET};
use crate::base_positional;

pub use base_positional::decode::Error;

pub type Decoder<'a> = base_positional::Decoder<'a, 91>;

pub const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    DECODER.decode_into(input, output)
}

pub fn decode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<91>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base91::Alphabet;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("!!"), Ok(vec![0x00, 0x00]));
        assert_eq!(super::decode("!!$m"), Ok(vec![0x00, 0x00, 0xff]));
        assert_eq!(super::decode("#("), Ok(b"a".to_vec()));
        assert_eq!(super::decode("9Yva<3bR#-('J-?@"), Ok(b"Hello, world!".to_vec()));
        assert_eq!(super::decode("N+fV].vsV1"), Ok(vec![0xff; 8]));
        assert_eq!(super::decode("!#B6*yOw]cPi5"), Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255]));
    }

    #[test]
    fn decode_alphabet() {
        let alphabet = Alphabet::from_slice(concat!(
            "abcdefghijklmnopqrstuvwxyz[]^_`!@#$%&()*+-<=>",
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/{|}~.,:;?"
        ))
        .unwrap();
        assert_eq!(
            super::decode_alphabet("ab!ui~>|MSAYt", &alphabet),
            Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255])
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(super::decode("!#B6;"), Err(Error::InvalidDigit { character: ';', index: 4 }));
        assert_eq!(super::decode("!# B"), Err(Error::InvalidDigit { character: ' ', index: 2 }));
        assert_eq!(super::decode("\"!#"), Err(Error::InvalidDigit { character: '"', index: 0 }));
    }
}
