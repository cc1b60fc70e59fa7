use super::{Alphabet, ALPHABET, APPROXIMATION};
use crate::base_positional;

pub use base_positional::encode::Error;

pub type Encoder<'a> = base_positional::Encoder<'a, 92>;

pub const ENCODER: Encoder = Encoder::new(&ALPHABET, APPROXIMATION);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    ENCODER.encode_into(input, output)
}

pub fn encode_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<92>) -> String {
    Encoder::new(alphabet, APPROXIMATION).encode(input)
}
