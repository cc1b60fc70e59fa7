use crate::base_common::{approximation, Alphabet, Approximation, Digits};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Encodes bytes as a big-endian base-`N` number, one leading zero symbol per leading zero byte.
#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    approximation: Approximation,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, approximation: Approximation) -> Self {
        Self { alphabet, approximation }
    }

    pub fn checked(alphabet: &'a Alphabet<N>, approximation: Approximation) -> Result<Self, approximation::Error> {
        approximation.verify(N)?;
        Ok(Self::new(alphabet, approximation))
    }

    pub const fn alphabet(&self) -> &'a Alphabet<N> {
        self.alphabet
    }

    pub const fn approximation(&self) -> Approximation {
        self.approximation
    }

    fn digits(&self, input: &[u8]) -> (usize, Digits) {
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let capacity = self.approximation.encoded_len(zeros, input.len()) - zeros;
        let mut digits = Digits::with_capacity(N, capacity);
        for &value in &input[zeros..] {
            digits.push_byte(value);
        }
        (zeros, digits)
    }

    fn write(&self, zeros: usize, digits: &Digits, output: &mut [u8]) {
        let (head, tail) = output.split_at_mut(zeros);
        head.fill(self.alphabet.zero());
        for (value, digit) in tail.iter_mut().zip(digits.most_significant_first()) {
            *value = self.alphabet.encode(digit as usize);
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let (zeros, digits) = self.digits(input.as_ref());
        let len = zeros + digits.len();
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        self.write(zeros, &digits, output);
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = self.digits(input.as_ref());
        let mut output = vec![0u8; zeros + digits.len()];
        self.write(zeros, &digits, &mut output);
        // alphabet characters are all ascii
        unsafe { String::from_utf8_unchecked(output) }
    }
}
