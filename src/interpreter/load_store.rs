//! `LDx`/`LDxN` and `STx`/`STJ`/`STZ`: moving a field-selected value between
//! a register and memory.

use super::Interpreter;
use crate::byte::Byte;
use crate::error::RuntimeError;
use crate::registers::WordRegister;

/// Which register a load or store targets. `Zero` only ever appears as a
/// store source, for `STZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    I(u8),
    J,
    Zero,
}

impl<'m> Interpreter<'m> {
    /// `LDx`/`LDxN`: loads the field-selected value at `M` into `register`.
    /// `negative` flips the sign after loading (`LDAN`, `LD1N`, ...).
    ///
    /// Loading an index register from a field wider than 2 bytes is
    /// rejected: an index register has no high bytes to receive them.
    pub fn load(
        &mut self,
        address: i64,
        index: u8,
        field: (usize, usize),
        register: Register,
        negative: bool,
    ) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let word = self.state.memory.load(m)?;
        let (mut sign, data) = word.load_fields(field.0, field.1);

        if matches!(register, Register::I(_)) && data.len() > 2 {
            return Err(RuntimeError::InvalidIndexLoad);
        }
        if negative {
            sign = !sign;
        }

        // `load_fields` returns big-endian (most significant first); every
        // register's `update` wants little-endian (least significant
        // first), so the byte order is reversed here.
        let mut le = data.clone();
        le.reverse();

        match register {
            Register::A => {
                let r = &mut self.state.registers.a;
                set_word_register(r, sign, &le);
            }
            Register::X => {
                let r = &mut self.state.registers.x;
                set_word_register(r, sign, &le);
            }
            Register::I(n) => {
                let r = self.state.registers.index_mut(n);
                let i5 = le.first().copied().unwrap_or(Byte::ZERO);
                let i4 = le.get(1).copied().unwrap_or(Byte::ZERO);
                r.update(sign, i5, i4);
            }
            Register::J | Register::Zero => unreachable!("LDJ/LDZ are not MIX instructions"),
        }

        self.inc_pc();
        Ok(())
    }

    /// `STx`/`STJ`/`STZ`: stores `register`'s field-selected view into the
    /// word at `M`, leaving untouched bytes of that word as they were.
    pub fn store(&mut self, address: i64, index: u8, field: (usize, usize), register: Register) -> Result<(), RuntimeError> {
        let (sign, data) = match register {
            Register::A => self.state.registers.a.store_fields(field.0, field.1),
            Register::X => self.state.registers.x.store_fields(field.0, field.1),
            Register::I(n) => self.state.registers.index(n).store_fields(field.0, field.1),
            Register::J => self.state.registers.j.store_fields(field.0, field.1),
            Register::Zero => WordRegister::ZERO.store_fields(field.0, field.1),
        };

        let m = self.effective_address(address, index)?;
        let mut word = self.state.memory.load(m)?;
        if let Some(sign) = sign {
            word.sign = sign;
        }

        let lo = field.0.max(1);
        for (i, byte) in (lo..=field.1).zip(data) {
            word.update(i, byte)?;
        }
        self.state.memory.store(m, word)?;

        self.inc_pc();
        Ok(())
    }
}

impl<'m> Interpreter<'m> {
    /// `MOVE`: copies `field` (its `R` part, `0..=63`) consecutive words
    /// starting at the effective address into the location `rI1` currently
    /// points at, one word at a time, in ascending order.
    ///
    /// This implementation leaves `rI1` unmodified afterward — a deliberate
    /// deviation from Knuth's definition (which advances `rI1` by the word
    /// count), recorded in `DESIGN.md`.
    pub fn mov(&mut self, address: i64, index: u8, count: u8) -> Result<(), RuntimeError> {
        let source_start = self.effective_address(address, index)?;
        let dest_start = self.state.registers.index(1).to_int();

        // Overlapping ranges with src < dst corrupt a forward copy (later
        // reads would see words the earlier iterations already overwrote),
        // so walk those backwards instead.
        let offsets: Box<dyn Iterator<Item = i64>> =
            if source_start < dest_start { Box::new((0..count as i64).rev()) } else { Box::new(0..count as i64) };

        for offset in offsets {
            let word = self.state.memory.load(source_start + offset)?;
            self.state.memory.store(dest_start + offset, word)?;
        }

        self.inc_pc();
        Ok(())
    }
}

fn set_word_register(r: &mut WordRegister, sign: bool, le: &[Byte]) {
    let at = |i: usize| le.get(i).copied().unwrap_or(Byte::ZERO);
    r.update(sign, at(0), at(1), at(2), at(3), at(4));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;
    use crate::word::Word;

    #[test]
    fn load_reverses_field_bytes_into_little_endian_register() {
        let mut state = MachineState::new();
        state.memory.store(50, Word::new(false, Byte::new(1).unwrap(), Byte::new(2).unwrap(), Byte::new(3).unwrap(), Byte::new(4).unwrap(), Byte::new(5).unwrap())).unwrap();
        let mut interp = Interpreter::new(&mut state);
        interp.load(50, 0, (0, 5), Register::A, false).unwrap();
        assert_eq!(interp.state().registers.a.to_int(), Word::new(false, Byte::new(1).unwrap(), Byte::new(2).unwrap(), Byte::new(3).unwrap(), Byte::new(4).unwrap(), Byte::new(5).unwrap()).to_int());
    }

    #[test]
    fn loading_index_register_from_wide_field_is_rejected() {
        let mut state = MachineState::new();
        state.memory.store(50, Word::new(false, Byte::new(1).unwrap(), Byte::new(2).unwrap(), Byte::new(3).unwrap(), Byte::new(4).unwrap(), Byte::new(5).unwrap())).unwrap();
        let mut interp = Interpreter::new(&mut state);
        assert!(interp.load(50, 0, (0, 5), Register::I(1), false).is_err());
        assert!(interp.load(50, 0, (4, 5), Register::I(1), false).is_ok());
    }

    #[test]
    fn store_leaves_untouched_bytes_alone() {
        let mut state = MachineState::new();
        state.memory.store(60, Word::new(false, Byte::new(9).unwrap(), Byte::new(9).unwrap(), Byte::new(9).unwrap(), Byte::new(9).unwrap(), Byte::new(9).unwrap())).unwrap();
        let mut interp = Interpreter::new(&mut state);
        interp.store(60, 0, (4, 5), Register::Zero).unwrap();
        let w = interp.state().memory.load(60).unwrap();
        assert_eq!((w.b1.value(), w.b2.value(), w.b3.value(), w.b4.value(), w.b5.value()), (9, 9, 9, 0, 0));
    }

    fn set_index_register(state: &mut MachineState, n: u8, value: i64) {
        let (sign, bytes) = crate::byte::int_to_bytes(value, 2);
        state.registers.index_mut(n).update(sign, bytes[0], bytes[1]);
    }

    #[test]
    fn mov_copies_words_in_order() {
        let mut state = MachineState::new();
        for (offset, value) in [10, 20, 30].into_iter().enumerate() {
            let (sign, bytes) = crate::byte::int_to_bytes(value, 5);
            state.memory.store(100 + offset as i64, Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0])).unwrap();
        }
        set_index_register(&mut state, 1, 200);
        let mut interp = Interpreter::new(&mut state);
        interp.mov(100, 0, 3).unwrap();
        let dest = interp.state().registers.index(1).to_int();
        for (offset, value) in [10, 20, 30].into_iter().enumerate() {
            assert_eq!(interp.state().memory.load(dest + offset as i64).unwrap().to_int(), value);
        }
    }

    #[test]
    fn mov_walks_backwards_when_source_precedes_an_overlapping_destination() {
        let mut state = MachineState::new();
        // memory[100..103] = 1, 2, 3; moving 3 words to 101 overlaps forward.
        for (offset, value) in [1, 2, 3].into_iter().enumerate() {
            let (sign, bytes) = crate::byte::int_to_bytes(value, 5);
            state.memory.store(100 + offset as i64, Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0])).unwrap();
        }
        set_index_register(&mut state, 1, 101);
        let mut interp = Interpreter::new(&mut state);
        interp.mov(100, 0, 3).unwrap();
        assert_eq!(interp.state().memory.load(101).unwrap().to_int(), 1);
        assert_eq!(interp.state().memory.load(102).unwrap().to_int(), 2);
        assert_eq!(interp.state().memory.load(103).unwrap().to_int(), 3);
    }
}
