use super::{Alphabet, ALPHABET, MASK_13, MASK_14, THRESHOLD};
use std::{convert::Infallible, error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet<91>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<91>) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet<91> {
        self.alphabet
    }

    /// Upper bound on the encoded length of `len` bytes: two characters per 13 bits, plus the tail.
    pub const fn encoded_len(len: usize) -> usize {
        len * 16 / 13 + 2
    }

    fn pack<E>(&self, input: &[u8], mut push: impl FnMut(u8) -> Result<(), E>) -> Result<(), E> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        for &value in input {
            accumulator |= (value as usize) << bits;
            bits += 8;
            if bits > 13 {
                let mut value = accumulator & MASK_13;
                if value > THRESHOLD {
                    accumulator >>= 13;
                    bits -= 13;
                } else {
                    value = accumulator & MASK_14;
                    accumulator >>= 14;
                    bits -= 14;
                }
                push(self.alphabet.encode(value % 91))?;
                push(self.alphabet.encode(value / 91))?;
            }
        }
        if bits > 0 {
            push(self.alphabet.encode(accumulator % 91))?;
            if bits > 7 || accumulator > 90 {
                push(self.alphabet.encode(accumulator / 91))?;
            }
        }
        Ok(())
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        self.pack(input.as_ref(), |value| {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = value;
            index += 1;
            Ok(())
        })?;
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(Self::encoded_len(input.len()));
        let result: Result<(), Infallible> = self.pack(input, |value| {
            output.push(value);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
        // alphabet characters are all ascii
        unsafe { String::from_utf8_unchecked(output) }
    }
}

pub const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    ENCODER.encode_into(input, output)
}

pub fn encode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<91>) -> String {
    Encoder::new(alphabet).encode(input)
}
