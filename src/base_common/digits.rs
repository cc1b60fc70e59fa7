/// Base-`radix` digits of a growing big integer, least significant first.
///
/// Each pushed byte multiplies the value by 256 before adding the byte. The digit
/// vector only grows as far as the carry reaches, so the most significant digit is
/// never zero. `radix` comes from a built `Alphabet`, so it is between 2 and 128.
#[derive(Debug)]
pub struct Digits {
    radix: u32,
    digits: Vec<u8>,
}

impl Digits {
    pub fn with_capacity(radix: usize, capacity: usize) -> Self {
        debug_assert!((2..=128).contains(&radix));
        Self {
            radix: radix as u32,
            digits: Vec::with_capacity(capacity),
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        let mut carry = byte as u32;
        for digit in &mut self.digits {
            carry += (*digit as u32) << 8;
            *digit = (carry % self.radix) as u8;
            carry /= self.radix;
        }
        while carry > 0 {
            self.digits.push((carry % self.radix) as u8);
            carry /= self.radix;
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn most_significant_first(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }
}

/// Big integer as big-endian `u32` limbs, sized for a fixed number of input digits.
///
/// Digits are below 128, so `digits` of them never need more than `digits` bytes
/// and `(digits + 3) / 4` limbs always hold the value.
#[derive(Debug)]
pub struct Limbs {
    radix: u64,
    digits: usize,
    limbs: Vec<u32>,
}

impl Limbs {
    pub fn new(radix: usize, digits: usize) -> Self {
        debug_assert!((2..=128).contains(&radix));
        Self {
            radix: radix as u64,
            digits,
            limbs: vec![0; (digits + 3) / 4],
        }
    }

    pub fn push_digit(&mut self, digit: u8) {
        let mut carry = digit as u64;
        for limb in self.limbs.iter_mut().rev() {
            let value = (*limb as u64) * self.radix + carry;
            carry = value >> 32;
            *limb = (value & 0xFFFF_FFFF) as u32;
        }
        debug_assert_eq!(carry, 0);
    }

    /// Big-endian bytes of the value, left-padded with zeros to one byte per input digit.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.digits);
        let mut shift = match self.digits % 4 {
            0 => 24,
            remainder => remainder * 8 - 8,
        };
        for &limb in &self.limbs {
            loop {
                bytes.push((limb >> shift) as u8);
                if shift == 0 {
                    break;
                }
                shift -= 8;
            }
            shift = 24;
        }
        bytes
    }
}
