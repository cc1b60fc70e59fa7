use super::{Alphabet, ALPHABET};
use crate::base_positional;

pub use base_positional::decode::Error;

pub type Decoder<'a> = base_positional::Decoder<'a, 58>;

pub const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    DECODER.decode_into(input, output)
}

pub fn decode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<58>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}
