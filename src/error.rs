use basexx::{codec, hex};
use std::{error, fmt, io};

/// Error reported by the command line tool, carrying a message for the user.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<codec::Error> for Error {
    fn from(error: codec::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Self::new(error.to_string())
    }
}
