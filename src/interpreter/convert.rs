//! `NUM`/`CHAR`: converts between the binary value held in `(rA, rX)` and
//! its representation as ten decimal-digit byte codes.

use super::Interpreter;
use crate::byte::{int_to_bytes, Byte};
use crate::error::RuntimeError;
use crate::word::BYTES_IN_WORD;

impl<'m> Interpreter<'m> {
    /// `NUM`: reinterprets the ten bytes of `(rA, rX)` as decimal digits
    /// (each byte's value taken mod 10) and stores the resulting decimal
    /// number into `rA`, keeping `rA`'s sign and truncating silently if the
    /// number doesn't fit in five bytes (per Knuth, `NUM` never sets
    /// overflow).
    pub fn num(&mut self) -> Result<(), RuntimeError> {
        let digits: Vec<i64> = self
            .state
            .registers
            .a
            .bytes()
            .into_iter()
            .chain(self.state.registers.x.bytes())
            .map(|b| b.value() as i64 % 10)
            .collect();

        let value = digits.iter().fold(0i64, |acc, &d| acc * 10 + d);
        let sign = self.state.registers.a.sign;
        let (_, mut data) = int_to_bytes(value, BYTES_IN_WORD);
        data.truncate(BYTES_IN_WORD);
        self.state.registers.a.update(sign, data[0], data[1], data[2], data[3], data[4]);

        self.inc_pc();
        Ok(())
    }

    /// `CHAR`: the inverse direction — takes the magnitude of `rA` as a
    /// (zero-padded, ten-digit) decimal number and writes one digit-code
    /// byte per position into `(rA, rX)`, most significant digit first.
    /// Digit codes are `30 + digit` (the MIX alphabet's `0..9` run).
    pub fn char(&mut self) -> Result<(), RuntimeError> {
        let mut magnitude = self.state.registers.a.to_int().unsigned_abs();
        let mut digits = [0u8; 10];
        for slot in digits.iter_mut().rev() {
            *slot = (magnitude % 10) as u8;
            magnitude /= 10;
        }

        let codes: Vec<Byte> = digits.iter().map(|&d| Byte::new(30 + d).expect("digit code < 40 < 64")).collect();
        let (a_codes, x_codes) = codes.split_at(BYTES_IN_WORD);

        let a_sign = self.state.registers.a.sign;
        let x_sign = self.state.registers.x.sign;
        self.state.registers.a.update(a_sign, a_codes[4], a_codes[3], a_codes[2], a_codes[1], a_codes[0]);
        self.state.registers.x.update(x_sign, x_codes[4], x_codes[3], x_codes[2], x_codes[1], x_codes[0]);

        self.inc_pc();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    #[test]
    fn num_reduces_each_byte_mod_ten() {
        let mut state = MachineState::new();
        // All-9s bytes (value 9, already < 10): decimal "9999999999" truncates to the low 5 bytes.
        let nine = Byte::new(9).unwrap();
        state.registers.a.update(false, nine, nine, nine, nine, nine);
        state.registers.x.update(false, nine, nine, nine, nine, nine);
        let mut interp = Interpreter::new(&mut state);
        interp.num().unwrap();
        assert_eq!(interp.state().registers.a.to_int(), 9999999999i64 % 64i64.pow(5));
    }

    #[test]
    fn char_round_trips_a_small_value_through_num() {
        let mut state = MachineState::new();
        // `update`'s args are little-endian (r5 first): this sets r5 = 7,
        // every other byte zero, i.e. rA holds plain 7.
        state.registers.a.update(false, Byte::new(7).unwrap(), Byte::ZERO, Byte::ZERO, Byte::ZERO, Byte::ZERO);
        assert_eq!(state.registers.a.to_int(), 7);
        let mut interp = Interpreter::new(&mut state);
        interp.char().unwrap();
        interp.num().unwrap();
        assert_eq!(interp.state().registers.a.to_int(), 7);
    }
}
