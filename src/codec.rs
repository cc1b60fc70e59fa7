use crate::{
    base58, base62, base91, base91_packed, base92,
    base_common::{alphabet, Alphabet},
    base_positional,
};
use serde::Serialize;
use std::{error, fmt, str::FromStr};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    UnknownEncoding { name: String },
    Alphabet(alphabet::Error),
    Decode(alphabet::DecodeError),
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEncoding { name } => write!(f, r#"Unknown encoding "{}""#, name),
            Self::Alphabet(error) => write!(f, "Invalid alphabet: {}", error),
            Self::Decode(error) => write!(f, "{}", error),
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::Alphabet(error)
    }
}

impl From<base_positional::decode::Error> for Error {
    fn from(error: base_positional::decode::Error) -> Self {
        use base_positional::decode::Error::*;
        match error {
            BufferTooSmall => Error::BufferTooSmall,
            NonAscii { character, index } => Error::Decode(alphabet::DecodeError::NonAscii { character, index }),
            InvalidDigit { character, index } => Error::Decode(alphabet::DecodeError::InvalidDigit { character, index }),
        }
    }
}

impl From<base91_packed::decode::Error> for Error {
    fn from(error: base91_packed::decode::Error) -> Self {
        use base91_packed::decode::Error::*;
        match error {
            BufferTooSmall => Error::BufferTooSmall,
            NonAscii { character, index } => Error::Decode(alphabet::DecodeError::NonAscii { character, index }),
            InvalidDigit { character, index } => Error::Decode(alphabet::DecodeError::InvalidDigit { character, index }),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Base58,
    Base58Flickr,
    Base62,
    Base91,
    Base91Packed,
    Base92,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Base58,
        Kind::Base58Flickr,
        Kind::Base62,
        Kind::Base91,
        Kind::Base91Packed,
        Kind::Base92,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Base58 => "base58",
            Kind::Base58Flickr => "base58-flickr",
            Kind::Base62 => "base62",
            Kind::Base91 => "base91",
            Kind::Base91Packed => "base91-packed",
            Kind::Base92 => "base92",
        }
    }

    pub const fn radix(&self) -> usize {
        match self {
            Kind::Base58 | Kind::Base58Flickr => 58,
            Kind::Base62 => 62,
            Kind::Base91 | Kind::Base91Packed => 91,
            Kind::Base92 => 92,
        }
    }

    /// Whether leading zero bytes map one to one to leading zero symbols.
    pub const fn is_positional(&self) -> bool {
        !matches!(self, Kind::Base91Packed)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownEncoding { name: name.to_string() })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Table {
    Radix58(Alphabet<58>),
    Radix62(Alphabet<62>),
    Radix91(Alphabet<91>),
    Radix92(Alphabet<92>),
}

/// An encoding picked at runtime, bound to its alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Codec {
    kind: Kind,
    table: Table,
    mode: base91_packed::Mode,
}

impl Codec {
    pub fn new(kind: Kind) -> Self {
        let table = match kind {
            Kind::Base58 => Table::Radix58(base58::BITCOIN_ALPHABET),
            Kind::Base58Flickr => Table::Radix58(base58::FLICKR_ALPHABET),
            Kind::Base62 => Table::Radix62(base62::ALPHABET),
            Kind::Base91 => Table::Radix91(base91::ALPHABET),
            Kind::Base91Packed => Table::Radix91(base91_packed::ALPHABET),
            Kind::Base92 => Table::Radix92(base92::ALPHABET),
        };
        Self {
            kind,
            table,
            mode: base91_packed::Mode::Lenient,
        }
    }

    pub fn with_alphabet(kind: Kind, characters: impl AsRef<[u8]>) -> Result<Self, Error> {
        let table = match kind.radix() {
            58 => Table::Radix58(Alphabet::from_slice(characters)?),
            62 => Table::Radix62(Alphabet::from_slice(characters)?),
            91 => Table::Radix91(Alphabet::from_slice(characters)?),
            _ => Table::Radix92(Alphabet::from_slice(characters)?),
        };
        Ok(Self {
            kind,
            table,
            mode: base91_packed::Mode::Lenient,
        })
    }

    /// Decoding mode for characters outside the alphabet, see [`Codec::decode_text`].
    pub fn with_mode(self, mode: base91_packed::Mode) -> Self {
        Self { mode, ..self }
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub fn symbols(&self) -> &[u8] {
        match &self.table {
            Table::Radix58(alphabet) => alphabet.symbols(),
            Table::Radix62(alphabet) => alphabet.symbols(),
            Table::Radix91(alphabet) => alphabet.symbols(),
            Table::Radix92(alphabet) => alphabet.symbols(),
        }
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        match &self.table {
            Table::Radix58(alphabet) => base58::encode_alphabet(input, alphabet),
            Table::Radix62(alphabet) => base62::encode_alphabet(input, alphabet),
            Table::Radix91(alphabet) if self.kind == Kind::Base91Packed => base91_packed::encode_alphabet(input, alphabet),
            Table::Radix91(alphabet) => base91::encode_alphabet(input, alphabet),
            Table::Radix92(alphabet) => base92::encode_alphabet(input, alphabet),
        }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let output = match &self.table {
            Table::Radix58(alphabet) => base58::decode_alphabet(input, alphabet)?,
            Table::Radix62(alphabet) => base62::decode_alphabet(input, alphabet)?,
            Table::Radix91(alphabet) if self.kind == Kind::Base91Packed => {
                base91_packed::Decoder::with_mode(alphabet, self.mode).decode(input)?
            }
            Table::Radix91(alphabet) => base91::decode_alphabet(input, alphabet)?,
            Table::Radix92(alphabet) => base92::decode_alphabet(input, alphabet)?,
        };
        Ok(output)
    }

    /// Decodes text that may have been wrapped over several lines.
    ///
    /// Unless the codec is strict, ASCII whitespace that is not part of the alphabet is dropped first.
    /// The packed decoder skips every foreign character by itself.
    pub fn decode_text(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        if self.mode == base91_packed::Mode::Strict || !self.kind.is_positional() {
            return self.decode(input);
        }
        let symbols = self.symbols();
        let compact: Vec<u8> = input
            .iter()
            .copied()
            .filter(|value| !value.is_ascii_whitespace() || symbols.contains(value))
            .collect();
        self.decode(compact)
    }
}
