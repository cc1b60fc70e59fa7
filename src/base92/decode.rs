use super::{Alphabet, ALPHABET};
use crate::base_positional;

pub use base_positional::decode::Error;

pub type Decoder<'a> = base_positional::Decoder<'a, 92>;

pub const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    DECODER.decode_into(input, output)
}

pub fn decode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<92>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base92::Alphabet;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("  "), Ok(vec![0x00, 0x00]));
        assert_eq!(super::decode("  #j"), Ok(vec![0x00, 0x00, 0xff]));
        assert_eq!(super::decode("!&"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("5$0hG'g=W.g|Ny(`"), Ok(b"Hello, world!".to_vec()));
        assert_eq!(super::decode("I'?d~k'$2U"), Ok(vec![0xff; 8]));
        assert_eq!(super::decode(" !2V2aO7r^-Kf"), Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255]));
    }

    #[test]
    fn decode_alphabet() {
        let alphabet = Alphabet::from_slice(concat!(
            "abcdefghijklmnopqrstuvwxyz[]^_`!@#$%&()*+-<=> ",
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/{|}~.,:;?"
        ))
        .unwrap();
        assert_eq!(
            super::decode_alphabet("abrGrQ w7Nm-V", &alphabet),
            Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255])
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(super::decode(" !2\\"), Err(Error::InvalidDigit { character: '\\', index: 3 }));
        assert_eq!(super::decode(" !\n"), Err(Error::InvalidDigit { character: '\n', index: 2 }));
    }
}
