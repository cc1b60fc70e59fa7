use super::{Alphabet, ALPHABET, MASK_13, THRESHOLD};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAscii { character: u8, index: usize },
    InvalidDigit { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
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

/// What the decoder does with characters outside its alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Skip them, so line breaks and other separators can be left in the input.
    Lenient,
    /// Fail with [`Error::NonAscii`] or [`Error::InvalidDigit`].
    Strict,
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet<91>,
    mode: Mode,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<91>) -> Self {
        Self::with_mode(alphabet, Mode::Lenient)
    }

    pub const fn strict(alphabet: &'a Alphabet<91>) -> Self {
        Self::with_mode(alphabet, Mode::Strict)
    }

    pub const fn with_mode(alphabet: &'a Alphabet<91>, mode: Mode) -> Self {
        Self { alphabet, mode }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    fn digit(&self, value: u8, index: usize) -> Result<Option<usize>, Error> {
        match self.mode {
            Mode::Lenient => Ok(self.alphabet.digit(value).map(usize::from)),
            Mode::Strict => Ok(Some(self.alphabet.decode(value, index)? as usize)),
        }
    }

    fn unpack(&self, input: &[u8], mut push: impl FnMut(u8) -> Result<(), Error>) -> Result<(), Error> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut pending: Option<usize> = None;
        for (index, &value) in input.iter().enumerate() {
            let digit = match self.digit(value, index)? {
                Some(digit) => digit,
                None => continue,
            };
            let first = match pending.take() {
                Some(first) => first,
                None => {
                    pending = Some(digit);
                    continue;
                }
            };
            let value = first + digit * 91;
            accumulator |= value << bits;
            bits += if value & MASK_13 > THRESHOLD { 13 } else { 14 };
            while bits > 7 {
                push(accumulator as u8)?;
                accumulator >>= 8;
                bits -= 8;
            }
        }
        if let Some(last) = pending {
            push((accumulator | last << bits) as u8)?;
        }
        Ok(())
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        self.unpack(input.as_ref(), |value| {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = value;
            index += 1;
            Ok(())
        })?;
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(input.len() * 7 / 8 + 1);
        self.unpack(input, |value| {
            output.push(value);
            Ok(())
        })?;
        Ok(output)
    }
}

pub const DECODER: Decoder = Decoder::new(&ALPHABET);

pub const STRICT_DECODER: Decoder = Decoder::strict(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}

pub fn decode_strict(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    STRICT_DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    DECODER.decode_into(input, output)
}

pub fn decode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<91>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error, Mode};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("AA"), Ok(vec![0x00]));
        assert_eq!(super::decode("BA"), Ok(vec![0x01]));
        assert_eq!(super::decode("B"), Ok(vec![0x01]));
        assert_eq!(super::decode("/C"), Ok(vec![0xff]));
        assert_eq!(super::decode("B'H"), Ok(vec![0xff, 0xff]));
        assert_eq!(super::decode("AAEA"), Ok(vec![0x00, 0x00, 0x01]));
        assert_eq!(super::decode("GB"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("fPNKd"), Ok(b"test".to_vec()));
        assert_eq!(super::decode(">OwJh>}A'=r@@Y?F"), Ok(b"Hello, world!".to_vec()));
    }

    #[test]
    fn decode_alphabet() {
        assert_eq!(
            super::decode_alphabet("n$cgn$sD7#d.5-", &crate::base91::ALPHABET),
            Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255])
        );
    }

    #[test]
    fn lenient() {
        assert_eq!(super::DECODER.mode(), Mode::Lenient);
        assert_eq!(super::decode("fP NK\r\nd"), Ok(b"test".to_vec()));
        assert_eq!(super::decode(">OwJh>}A'=r\n@@Y?F\n"), Ok(b"Hello, world!".to_vec()));
        assert_eq!(super::decode("fP\u{e9}NKd"), Ok(b"test".to_vec()));
        assert_eq!(super::decode(" \n\t"), Ok(vec![]));
    }

    #[test]
    fn strict() {
        assert_eq!(super::STRICT_DECODER.mode(), Mode::Strict);
        assert_eq!(super::decode_strict("fPNKd"), Ok(b"test".to_vec()));
        assert_eq!(super::decode_strict("fP NKd"), Err(Error::InvalidDigit { character: ' ', index: 2 }));
        assert_eq!(super::decode_strict("fP\"NKd"), Err(Error::InvalidDigit { character: '"', index: 2 }));
        assert_eq!(super::decode_strict(b"fPNK\x80"), Err(Error::NonAscii { character: 0x80, index: 4 }));
        let decoder = Decoder::with_mode(&crate::base91::ALPHABET, Mode::Strict);
        assert_eq!(decoder.decode("n$cg"), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("fPNKd", &mut output), Ok(4));
        assert_eq!(&output, b"test");
        let mut output = [0u8; 3];
        assert_eq!(super::decode_into("fPNKd", &mut output), Err(Error::BufferTooSmall));
    }
}
