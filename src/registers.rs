//! The machine's register file: `rA`, `rX`, six index registers, and `rJ`.

use crate::byte::{bytes_to_int, Byte};
use crate::word::BYTES_IN_WORD;

/// A full 5-byte register (`rA` or `rX`).
///
/// `update`'s parameter order is **little-endian** (least significant byte
/// first) to match how the interpreter computes a result digit-by-digit and
/// hands it off without needing to reverse it. Contrast [`Word`](crate::word::Word),
/// whose fields and [`Word::load_fields`](crate::word::Word::load_fields) are big-endian
/// (most significant first) — conversions between the two must reverse the byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordRegister {
    pub sign: bool,
    pub r1: Byte,
    pub r2: Byte,
    pub r3: Byte,
    pub r4: Byte,
    pub r5: Byte,
}

impl WordRegister {
    pub const ZERO: WordRegister = WordRegister {
        sign: false,
        r1: Byte::ZERO,
        r2: Byte::ZERO,
        r3: Byte::ZERO,
        r4: Byte::ZERO,
        r5: Byte::ZERO,
    };

    /// Signed value of the full register.
    pub fn to_int(&self) -> i64 {
        bytes_to_int(&[self.r1, self.r2, self.r3, self.r4, self.r5], self.sign)
    }

    /// The five data bytes, most significant first.
    pub const fn bytes(&self) -> [Byte; BYTES_IN_WORD] {
        [self.r1, self.r2, self.r3, self.r4, self.r5]
    }

    /// Overwrites the register. Unspecified low-order bytes default to zero.
    pub fn update(&mut self, sign: bool, r5: Byte, r4: Byte, r3: Byte, r2: Byte, r1: Byte) {
        self.sign = sign;
        self.r5 = r5;
        self.r4 = r4;
        self.r3 = r3;
        self.r2 = r2;
        self.r1 = r1;
    }

    /// Field view `(L, R)` for a `STA`/`STX`-family store: `lo==0` exposes
    /// the register's own sign, otherwise the stored sign is reported
    /// `None` (the caller keeps the destination word's existing sign).
    pub fn store_fields(&self, lo: usize, hi: usize) -> (Option<bool>, Vec<Byte>) {
        let sign = if lo == 0 { Some(self.sign) } else { None };
        let lo_clamped = lo.max(1);
        let count = if hi < lo_clamped { 0 } else { hi - lo_clamped + 1 };
        let full = [self.r1, self.r2, self.r3, self.r4, self.r5];
        (sign, full[full.len() - count..].to_vec())
    }

    /// Field view `(L, R)` "as if a word": left-justified `b_L..b_R`,
    /// mirroring [`Word::load_fields`](crate::word::Word::load_fields).
    /// `CMPx` reads its register operand this way, since there the field is
    /// a selector over the register's own image rather than a store
    /// destination's.
    pub fn load_fields(&self, l: usize, r: usize) -> (bool, Vec<Byte>) {
        let sign = if l == 0 { self.sign } else { false };
        let lo = l.max(1);
        (sign, self.bytes()[lo - 1..r].to_vec())
    }
}

/// One of the six index registers, `I1..=I6`. Holds only the low two bytes
/// of a word; the top three bytes are implicitly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexRegister {
    pub sign: bool,
    pub i4: Byte,
    pub i5: Byte,
}

impl IndexRegister {
    pub const ZERO: IndexRegister = IndexRegister { sign: false, i4: Byte::ZERO, i5: Byte::ZERO };

    pub fn to_int(&self) -> i64 {
        bytes_to_int(&[self.i4, self.i5], self.sign)
    }

    pub fn update(&mut self, sign: bool, i5: Byte, i4: Byte) {
        self.sign = sign;
        self.i5 = i5;
        self.i4 = i4;
    }

    pub fn store_fields(&self, lo: usize, hi: usize) -> (Option<bool>, Vec<Byte>) {
        let sign = if lo == 0 { Some(self.sign) } else { None };
        let lo_clamped = lo.max(1);
        let count = if hi < lo_clamped { 0 } else { hi - lo_clamped + 1 };
        let mut full = vec![Byte::ZERO; BYTES_IN_WORD - 2];
        full.push(self.i4);
        full.push(self.i5);
        (sign, full[full.len() - count..].to_vec())
    }

    /// Field view `(L, R)` "as if a word", left-justified — see
    /// [`WordRegister::load_fields`].
    pub fn load_fields(&self, l: usize, r: usize) -> (bool, Vec<Byte>) {
        let sign = if l == 0 { self.sign } else { false };
        let lo = l.max(1);
        let mut full = vec![Byte::ZERO; BYTES_IN_WORD - 2];
        full.push(self.i4);
        full.push(self.i5);
        (sign, full[lo - 1..r].to_vec())
    }
}

/// The jump register, `rJ`. Always reads as non-negative: its sign bit
/// exists in storage but `JMP`-family instructions never set it to minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumpRegister {
    pub j4: Byte,
    pub j5: Byte,
}

impl JumpRegister {
    pub const ZERO: JumpRegister = JumpRegister { j4: Byte::ZERO, j5: Byte::ZERO };

    pub fn to_int(&self) -> i64 {
        bytes_to_int(&[self.j4, self.j5], false)
    }

    pub fn update(&mut self, j5: Byte, j4: Byte) {
        self.j5 = j5;
        self.j4 = j4;
    }

    pub fn store_fields(&self, lo: usize, hi: usize) -> (Option<bool>, Vec<Byte>) {
        let sign = if lo == 0 { Some(false) } else { None };
        let lo_clamped = lo.max(1);
        let count = if hi < lo_clamped { 0 } else { hi - lo_clamped + 1 };
        let mut full = vec![Byte::ZERO; BYTES_IN_WORD - 2];
        full.push(self.j4);
        full.push(self.j5);
        (sign, full[full.len() - count..].to_vec())
    }
}

/// All of the machine's registers, grouped for convenient ownership inside
/// [`crate::state::MachineState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    pub a: WordRegister,
    pub x: WordRegister,
    pub i: [IndexRegister; 6],
    pub j: JumpRegister,
}

impl RegisterFile {
    pub const fn new() -> Self {
        RegisterFile {
            a: WordRegister::ZERO,
            x: WordRegister::ZERO,
            i: [IndexRegister::ZERO; 6],
            j: JumpRegister::ZERO,
        }
    }

    /// Index registers are numbered `1..=6` in MIXAL; `0` is reserved to
    /// mean "no indexing" at the instruction-decode level and never reaches
    /// here.
    pub fn index(&self, n: u8) -> &IndexRegister {
        &self.i[n as usize - 1]
    }

    pub fn index_mut(&mut self, n: u8) -> &mut IndexRegister {
        &mut self.i[n as usize - 1]
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
