//! Lower-case hex, used to carry binary values through JSON and URLs.

use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength { length: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid hex character {:?} at index {}", character, index)
            }
            Error::OddLength { length } => write!(f, "Hex string has odd length {}", length),
        }
    }
}

fn nibble(text: &[u8], index: usize) -> Result<u8, Error> {
    let character = text[index];
    (character as char)
        .to_digit(16)
        .map(|digit| digit as u8)
        .ok_or(Error::InvalidHexCharacter {
            character: character as char,
            index,
        })
}

/// Accepts either case, pairs of digits are read high nibble first.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let text = text.as_ref();
    if text.len() % 2 == 1 {
        return Err(Error::OddLength { length: text.len() });
    }
    (0..text.len())
        .step_by(2)
        .map(|index| Ok(nibble(text, index)? << 4 | nibble(text, index + 1)?))
        .collect()
}

pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    bytes.as_ref().iter().map(|byte| format!("{:02x}", byte)).collect()
}
