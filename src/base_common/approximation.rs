use std::{error, fmt};

/// Largest accepted distance between `numerator / denominator` and `log(256) / log(radix)`.
pub const TOLERANCE: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    Inaccurate { radix: usize, expected: f64, actual: f64 },
    Undersized { radix: usize, expected: f64, actual: f64 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inaccurate { radix, expected, actual } => write!(
                f,
                "Base{}: approximation {:.4} is too far from log(256)/log({}) = {:.4}",
                radix, actual, radix, expected
            ),
            Self::Undersized { radix, expected, actual } => write!(
                f,
                "Base{}: approximation {:.4} is below log(256)/log({}) = {:.4}",
                radix, actual, radix, expected
            ),
        }
    }
}

/// Rational approximation of the number of base-`radix` digits needed per byte.
///
/// The estimate only pre-sizes the digit buffer, which still grows when the value needs
/// more digits. [`Approximation::verify`] rejects pairs below the true ratio because they
/// would make every long input reallocate, not because the output would change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Approximation {
    numerator: usize,
    denominator: usize,
}

impl Approximation {
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        assert!(denominator > 0);
        Self { numerator, denominator }
    }

    pub const fn numerator(&self) -> usize {
        self.numerator
    }

    pub const fn denominator(&self) -> usize {
        self.denominator
    }

    /// `len * numerator / denominator`, truncated.
    pub const fn estimate(&self, len: usize) -> usize {
        len * self.numerator / self.denominator
    }

    /// Upper bound on the digits needed for `len` bytes of which the first `zeros` are zero.
    pub const fn encoded_len(&self, zeros: usize, len: usize) -> usize {
        zeros + self.estimate(len - zeros) + 1
    }

    pub fn verify(&self, radix: usize) -> Result<(), Error> {
        let expected = 256f64.ln() / (radix as f64).ln();
        let actual = self.numerator as f64 / self.denominator as f64;
        if (expected - actual).abs() > TOLERANCE {
            return Err(Error::Inaccurate { radix, expected, actual });
        }
        if actual < expected {
            return Err(Error::Undersized { radix, expected, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Approximation, Error};

    #[test]
    fn estimate() {
        let approximation = Approximation::new(11, 8);
        assert_eq!(approximation.estimate(0), 0);
        assert_eq!(approximation.estimate(1), 1);
        assert_eq!(approximation.estimate(8), 11);
        assert_eq!(approximation.estimate(25), 34);
        assert_eq!(approximation.encoded_len(0, 0), 1);
        assert_eq!(approximation.encoded_len(3, 3), 4);
        assert_eq!(approximation.encoded_len(1, 25), 35);
    }

    #[test]
    fn verify() {
        assert_eq!(Approximation::new(11, 8).verify(58), Ok(()));
        assert_eq!(Approximation::new(11, 8).verify(62), Ok(()));
        assert_eq!(Approximation::new(5, 4).verify(91), Ok(()));
        assert_eq!(Approximation::new(5, 4).verify(92), Ok(()));
        assert!(matches!(Approximation::new(3, 2).verify(58), Err(Error::Inaccurate { radix: 58, .. })));
        assert!(matches!(Approximation::new(6, 5).verify(92), Err(Error::Undersized { radix: 92, .. })));
    }
}
