//! `ADD`, `SUB`, `MUL`, `DIV`: the four arithmetic operators, all of which
//! load a field-selected value from memory and combine it with `rA` (and,
//! for `MUL`/`DIV`, `rX`).

use super::Interpreter;
use crate::byte::{bytes_to_int, int_to_bytes, Byte};
use crate::error::RuntimeError;
use crate::word::BYTES_IN_WORD;

impl<'m> Interpreter<'m> {
    /// Reads the field-selected value at `M` (the instruction's effective
    /// address) as `(sign, unsigned magnitude)`.
    fn load_signed_magnitude(&self, address: i64, index: u8, field: (usize, usize)) -> Result<(bool, i64), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let word = self.state.memory.load(m)?;
        let (sign, data) = word.load_fields(field.0, field.1);
        let magnitude = data.iter().fold(0i64, |acc, b| (acc << 6) | b.value() as i64);
        Ok((sign, magnitude))
    }

    /// `ADD`/`SUB`: `rA <- rA + V` (or `rA - V`). Sets the overflow toggle
    /// when a sixth byte spills out.
    pub fn add(&mut self, address: i64, index: u8, field: (usize, usize), negate: bool) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let word = self.state.memory.load(m)?;
        let (sign, data) = word.load_fields(field.0, field.1);
        let v = bytes_to_int(&data, sign);

        let a = self.state.registers.a.to_int();
        let sum = if negate { a - v } else { a + v };

        let (sign, mut result) = int_to_bytes(sum, BYTES_IN_WORD);
        if result.len() > BYTES_IN_WORD {
            self.state.overflow = true;
            result.truncate(BYTES_IN_WORD);
        }
        self.state.registers.a.update(sign, result[0], result[1], result[2], result[3], result[4]);
        self.inc_pc();
        Ok(())
    }

    /// `MUL`: `(rA, rX) <- rA * V`, a full 10-byte product split across both
    /// registers. Never overflows (the product of two 5-byte magnitudes
    /// always fits in 10 bytes).
    pub fn mul(&mut self, address: i64, index: u8, field: (usize, usize)) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let word = self.state.memory.load(m)?;
        let (sign, data) = word.load_fields(field.0, field.1);
        let v = bytes_to_int(&data, sign);

        let a = self.state.registers.a.to_int();
        let product = a * v;

        let (sign, mut result) = int_to_bytes(product, BYTES_IN_WORD * 2);
        result.resize(BYTES_IN_WORD * 2, Byte::ZERO);
        let (x_bytes, a_bytes) = result.split_at(BYTES_IN_WORD);
        self.state.registers.x.update(sign, x_bytes[0], x_bytes[1], x_bytes[2], x_bytes[3], x_bytes[4]);
        self.state.registers.a.update(sign, a_bytes[0], a_bytes[1], a_bytes[2], a_bytes[3], a_bytes[4]);
        self.inc_pc();
        Ok(())
    }

    /// `DIV`: divides the 10-byte magnitude `(|rA|:|rX|)` by `|V|`, leaving
    /// the quotient in `rA` (signed `V.sign XOR rA.sign`) and the remainder
    /// in `rX` (signed by `rA`'s *original* sign, read before `rA` is
    /// overwritten). A zero divisor, or a divisor too small to keep the
    /// quotient within five bytes, sets overflow and leaves both registers
    /// untouched rather than dividing.
    pub fn div(&mut self, address: i64, index: u8, field: (usize, usize)) -> Result<(), RuntimeError> {
        let (v_sign, v_magnitude) = self.load_signed_magnitude(address, index, field)?;

        let a_sign = self.state.registers.a.sign;
        let a_magnitude = self.state.registers.a.to_int().unsigned_abs();
        let x_magnitude = self.state.registers.x.to_int().unsigned_abs();

        let dividend = (a_magnitude << (BYTES_IN_WORD * 6)) + x_magnitude;
        if v_magnitude == 0 || a_magnitude >= v_magnitude as u64 {
            self.state.overflow = true;
            self.inc_pc();
            return Ok(());
        }
        let quotient = dividend / v_magnitude as u64;
        let remainder = dividend % v_magnitude as u64;

        let quotient_sign = v_sign != a_sign;

        let (_, mut q_bytes) = int_to_bytes(quotient as i64, BYTES_IN_WORD);
        if q_bytes.len() > BYTES_IN_WORD {
            self.state.overflow = true;
            q_bytes.truncate(BYTES_IN_WORD);
        }
        self.state.registers.a.update(quotient_sign, q_bytes[0], q_bytes[1], q_bytes[2], q_bytes[3], q_bytes[4]);

        let (_, r_bytes) = int_to_bytes(remainder as i64, BYTES_IN_WORD);
        self.state.registers.x.update(a_sign, r_bytes[0], r_bytes[1], r_bytes[2], r_bytes[3], r_bytes[4]);

        self.inc_pc();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;
    use crate::word::Word;

    #[test]
    fn add_sets_overflow_on_a_sixth_byte() {
        let mut state = MachineState::new();
        let max = 64i64.pow(5) - 1;
        let (sign, bytes) = int_to_bytes(max, BYTES_IN_WORD);
        state.registers.a.update(sign, bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]);
        // Every byte is 63 here, so byte order doesn't change the value, but
        // `Word::new` is big-endian while `int_to_bytes` is little-endian —
        // reverse to keep the pattern correct in general.
        state.memory.store(100, Word::new(false, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0])).unwrap();

        let mut interp = Interpreter::new(&mut state);
        interp.add(100, 0, (0, 5), false).unwrap();
        assert!(interp.state().overflow);
    }

    #[test]
    fn div_remainder_keeps_original_a_sign() {
        let mut state = MachineState::new();
        // rA negative but magnitude zero, so |rA| < |V| and the division
        // actually proceeds: the dividend comes entirely from rX.
        state.registers.a.update(true, Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO);
        let (_, x_bytes) = int_to_bytes(17, BYTES_IN_WORD);
        state.registers.x.update(false, x_bytes[0], x_bytes[1], x_bytes[2], x_bytes[3], x_bytes[4]);
        // `Word::new` is big-endian (b1 most significant), the opposite of
        // `int_to_bytes`'s little-endian output, so the bytes are reversed here.
        let (_, v_bytes) = int_to_bytes(5, BYTES_IN_WORD);
        state.memory.store(200, Word::new(false, v_bytes[4], v_bytes[3], v_bytes[2], v_bytes[1], v_bytes[0])).unwrap();

        let mut interp = Interpreter::new(&mut state);
        interp.div(200, 0, (0, 5)).unwrap();
        assert!(!interp.state().overflow);
        assert_eq!(interp.state().registers.a.to_int(), -3);
        assert_eq!(interp.state().registers.x.to_int(), -2);
        assert!(interp.state().registers.x.sign);
    }

    #[test]
    fn div_by_zero_sets_overflow_instead_of_panicking() {
        let mut state = MachineState::new();
        state.registers.x.update(false, Byte::new(17).unwrap(), Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO);
        state.memory.store(200, Word::new(false, Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO)).unwrap();

        let mut interp = Interpreter::new(&mut state);
        interp.div(200, 0, (0, 5)).unwrap();
        assert!(interp.state().overflow);
    }
}
