use crate::base_common::{alphabet, Alphabet, Limbs};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAscii { character: u8, index: usize },
    InvalidDigit { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::NonAscii { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidDigit { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::NonAscii { character, index } => Error::NonAscii { character, index },
            alphabet::DecodeError::InvalidDigit { character, index } => Error::InvalidDigit { character, index },
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet<N> {
        self.alphabet
    }

    /// The value of `input` as big-endian bytes, one byte per input character.
    fn value(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let mut limbs = Limbs::new(N, input.len());
        for (index, &value) in input.iter().enumerate() {
            limbs.push_digit(self.alphabet.decode(value, index)?);
        }
        Ok(limbs.to_be_bytes())
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let zero = self.alphabet.zero();
        let zeros = input.iter().take_while(|&&value| value == zero).count();

        let bytes = self.value(input)?;
        let significant: &[u8] = match bytes[zeros..].iter().position(|&value| value != 0) {
            Some(position) => &bytes[zeros + position..],
            None => &[],
        };

        let len = zeros + significant.len();
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        output[..zeros].fill(0);
        output[zeros..].copy_from_slice(significant);
        Ok(len)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base_common::Alphabet;

    const HEX: Alphabet<16> = match Alphabet::new(b"0123456789abcdef") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn decode() {
        let decoder = Decoder::new(&HEX);
        assert_eq!(decoder.decode(""), Ok(vec![]));
        assert_eq!(decoder.decode("0"), Ok(vec![0x00]));
        assert_eq!(decoder.decode("000"), Ok(vec![0x00, 0x00, 0x00]));
        assert_eq!(decoder.decode("00f"), Ok(vec![0x00, 0x00, 0x0f]));
        assert_eq!(decoder.decode("100"), Ok(vec![0x01, 0x00]));
        assert_eq!(decoder.decode("deadbeef"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(decoder.decode("123456789"), Ok(vec![0x01, 0x23, 0x45, 0x67, 0x89]));
    }

    #[test]
    fn decode_errors() {
        let decoder = Decoder::new(&HEX);
        assert_eq!(decoder.decode("12g4"), Err(Error::InvalidDigit { character: 'g', index: 2 }));
        assert_eq!(decoder.decode("0F"), Err(Error::InvalidDigit { character: 'F', index: 1 }));
        assert_eq!(decoder.decode(b"1\xe92"), Err(Error::NonAscii { character: 0xe9, index: 1 }));
    }

    #[test]
    fn decode_into() {
        let decoder = Decoder::new(&HEX);
        let mut output = [0u8; 3];
        assert_eq!(decoder.decode_into("0abcd", &mut output), Ok(3));
        assert_eq!(output, [0x00, 0xab, 0xcd]);
        let mut output = [0u8; 2];
        assert_eq!(decoder.decode_into("0abcd", &mut output), Err(Error::BufferTooSmall));
    }
}
