//! The 5-byte MIX word and its field-selected partial views.

use crate::byte::{bytes_to_int, Byte};
use crate::error::RuntimeError;

/// Number of data bytes in a word (excludes the sign).
pub const BYTES_IN_WORD: usize = 5;

/// A computer word: a sign and five (6-bit) bytes, most significant first.
///
/// ```text
/// +-----+------+------+------+------+------+
/// |  0  |   1  |   2  |   3  |   4  |   5  |
/// +-----+------+------+------+------+------+
/// | +/- | Byte | Byte | Byte | Byte | Byte |
/// +-----+------+------+------+------+------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Word {
    pub sign: bool,
    pub b1: Byte,
    pub b2: Byte,
    pub b3: Byte,
    pub b4: Byte,
    pub b5: Byte,
}

impl Word {
    /// The zero word (`+0|0|0|0|0|0`).
    pub const ZERO: Word = Word {
        sign: false,
        b1: Byte::ZERO,
        b2: Byte::ZERO,
        b3: Byte::ZERO,
        b4: Byte::ZERO,
        b5: Byte::ZERO,
    };

    /// Builds a word from its sign and five bytes, most significant first.
    pub const fn new(sign: bool, b1: Byte, b2: Byte, b3: Byte, b4: Byte, b5: Byte) -> Self {
        Word { sign, b1, b2, b3, b4, b5 }
    }

    /// The word's bytes as a slice, `b1..b5` (sign excluded), most
    /// significant first.
    pub const fn bytes(&self) -> [Byte; BYTES_IN_WORD] {
        [self.b1, self.b2, self.b3, self.b4, self.b5]
    }

    /// The word's signed integer value over the full `(0:5)` field.
    pub fn to_int(&self) -> i64 {
        bytes_to_int(&self.bytes(), self.sign)
    }

    /// Replaces byte `i` (`1..=5`, 1 is most significant).
    pub fn update(&mut self, i: usize, b: Byte) -> Result<(), RuntimeError> {
        match i {
            1 => self.b1 = b,
            2 => self.b2 = b,
            3 => self.b3 = b,
            4 => self.b4 = b,
            5 => self.b5 = b,
            _ => return Err(RuntimeError::InvalidWordIndex(i)),
        }
        Ok(())
    }

    /// Returns `(sign, bytes[L..=R])`, sign-excluded-data view of field
    /// `(L, R)`. The sign is the word's own sign only when `L == 0`;
    /// otherwise it is reported positive.
    pub fn load_fields(&self, l: usize, r: usize) -> (bool, Vec<Byte>) {
        let sign = if l == 0 { self.sign } else { false };
        let lo = l.max(1);
        let data = self.bytes()[lo - 1..r].to_vec();
        (sign, data)
    }

    /// Identical to [`Word::load_fields`]; kept as a distinct name so
    /// comparison call sites can diverge from load call sites later without
    /// a rename.
    pub fn compare_fields(&self, l: usize, r: usize) -> (bool, Vec<Byte>) {
        self.load_fields(l, r)
    }
}

/// Splits a raw field byte `F = 8L + R` into `(L, R)`.
pub const fn decode_field(f: u8) -> (usize, usize) {
    ((f / 8) as usize, (f % 8) as usize)
}

/// Encodes `(L, R)` into a raw field byte `F = 8L + R`.
pub const fn encode_field(l: usize, r: usize) -> u8 {
    (8 * l + r) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(sign: bool, vals: [u8; 5]) -> Word {
        Word::new(
            sign,
            Byte::new(vals[0]).unwrap(),
            Byte::new(vals[1]).unwrap(),
            Byte::new(vals[2]).unwrap(),
            Byte::new(vals[3]).unwrap(),
            Byte::new(vals[4]).unwrap(),
        )
    }

    #[test]
    fn load_fields_excludes_sign_unless_l_is_zero() {
        let w = word(true, [1, 2, 3, 4, 5]);
        let (sign, data) = w.load_fields(1, 5);
        assert!(!sign);
        assert_eq!(data, w.bytes().to_vec());

        let (sign, data) = w.load_fields(0, 5);
        assert!(sign);
        assert_eq!(data, w.bytes().to_vec());
    }

    #[test]
    fn field_forces_equal_at_zero_zero() {
        let w = word(true, [9, 9, 9, 9, 9]);
        let (_, data) = w.load_fields(0, 0);
        assert!(data.is_empty());
    }

    #[test]
    fn field_encoding_round_trip() {
        for l in 0..=5 {
            for r in l..=5 {
                let f = encode_field(l, r);
                assert_eq!(decode_field(f), (l, r));
            }
        }
    }

    #[test]
    fn update_rejects_out_of_range_index() {
        let mut w = Word::ZERO;
        assert!(w.update(0, Byte::ZERO).is_err());
        assert!(w.update(6, Byte::ZERO).is_err());
        assert!(w.update(3, Byte::new(7).unwrap()).is_ok());
    }
}
