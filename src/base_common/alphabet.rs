use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// `N` is not between 2 and 128, the number of ascii characters.
    UnsupportedRadix { radix: usize },
    WrongLength { expected: usize, length: usize },
    NonAscii { character: u8, index: usize },
    Duplicate { character: char, first: usize, second: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAscii { character: u8, index: usize },
    InvalidDigit { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRadix { radix } => write!(f, "Radix {} is not between 2 and 128", radix),
            Self::WrongLength { expected, length } => {
                write!(f, "Alphabet must be {} characters long, but got {}", expected, length)
            }
            Self::NonAscii { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::Duplicate { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAscii { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidDigit { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// A radix-`N` character set with its reverse lookup table.
///
/// Only ASCII characters can be digits, so the reverse table has 128 entries
/// and `None` marks characters outside the alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAscii { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidDigit {
                character: value as char,
                index,
            }),
        }
    }

    /// Digit of `value`, or `None` when it is not part of the alphabet.
    pub fn digit(&self, value: u8) -> Option<u8> {
        match self.decode.get(value as usize) {
            Some(&digit) => digit,
            None => None,
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        if N < 2 || N > 128 {
            return Err(Error::UnsupportedRadix { radix: N });
        }
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAscii { index, character });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::Duplicate {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub fn from_slice(characters: impl AsRef<[u8]>) -> Result<Self, Error> {
        let characters = characters.as_ref();
        let characters: &[u8; N] = characters.try_into().map_err(|_| Error::WrongLength {
            expected: N,
            length: characters.len(),
        })?;
        Self::new(characters)
    }

    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn symbols(&self) -> &[u8; N] {
        &self.encode
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    const DIGITS: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz !0OIl()*+[\\]^_`{|}~;:#$<=>%&',-./?@";

    #[test]
    fn new() {
        let alphabet = Alphabet::<58>::from_slice(&DIGITS[..58]).unwrap();
        assert_eq!(alphabet.len(), 58);
        assert_eq!(alphabet.zero(), b'1');
        assert_eq!(alphabet.encode(57), b'z');
        assert_eq!(alphabet.decode(b'z', 0), Ok(57));
        assert_eq!(alphabet.digit(b'A'), Some(9));
        assert_eq!(alphabet.digit(b'0'), None);
        assert_eq!(alphabet.digit(0xff), None);
        for (index, &character) in alphabet.symbols().iter().enumerate() {
            assert_eq!(alphabet.decode(character, index), Ok(index as u8));
        }
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            Alphabet::<91>::from_slice(&DIGITS[..90]),
            Err(Error::WrongLength { expected: 91, length: 90 })
        );
        assert_eq!(
            Alphabet::<91>::from_slice(DIGITS),
            Err(Error::WrongLength {
                expected: 91,
                length: DIGITS.len()
            })
        );
    }

    #[test]
    fn non_ascii() {
        let mut characters = DIGITS[..62].to_vec();
        characters[0] = 0xff;
        assert_eq!(
            Alphabet::<62>::from_slice(&characters),
            Err(Error::NonAscii { character: 0xff, index: 0 })
        );
    }

    #[test]
    fn duplicate() {
        let mut characters = DIGITS[..92].to_vec();
        characters[40] = b'1';
        assert_eq!(
            Alphabet::<92>::from_slice(&characters),
            Err(Error::Duplicate {
                character: '1',
                first: 0,
                second: 40
            })
        );
    }

    #[test]
    fn unsupported_radix() {
        assert_eq!(Alphabet::<1>::from_slice(b"0"), Err(Error::UnsupportedRadix { radix: 1 }));
        assert_eq!(Alphabet::<0>::new(&[]), Err(Error::UnsupportedRadix { radix: 0 }));
        assert_eq!(Alphabet::<129>::from_slice([b'a'; 129]), Err(Error::UnsupportedRadix { radix: 129 }));
        assert!(Alphabet::<2>::from_slice(b"01").is_ok());
        assert!(Alphabet::<128>::from_slice((0..128u8).collect::<Vec<_>>()).is_ok());
    }

    #[test]
    fn decode() {
        let alphabet = Alphabet::<58>::from_slice(&DIGITS[..58]).unwrap();
        assert_eq!(alphabet.decode(b'0', 3), Err(DecodeError::InvalidDigit { character: '0', index: 3 }));
        assert_eq!(alphabet.decode(0x80, 7), Err(DecodeError::NonAscii { character: 0x80, index: 7 }));
    }
}
