//! Control flow: the `JMP` family, the seven register-comparison jumps
//! (`J*N`/`J*Z`/`J*P`/`J*NN`/`J*NZ`/`J*NP`), and the four address-transfer
//! operators (`INC`/`DEC`/`ENT`/`ENN`).

use super::Interpreter;
use crate::byte::int_to_bytes;
use crate::error::RuntimeError;
use crate::state::Comparison;
use crate::word::BYTES_IN_WORD;

/// Any of `rA`, `rX`, or an index register — everywhere a jump or an
/// address-transfer instruction can name a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    A,
    X,
    I(u8),
}

impl<'m> Interpreter<'m> {
    /// Unconditionally transfers control to `target`, saving the return
    /// address (`pc + 1`) in `rJ` unless `save_jump` is false (`JSJ`).
    fn jump_to(&mut self, target: i64, save_jump: bool) {
        if save_jump {
            let (_, bytes) = int_to_bytes(self.state.pc + 1, 2);
            self.state.registers.j.update(bytes[0], bytes[1]);
        }
        self.state.pc = target;
    }

    /// `JMP`/`JSJ`/`JOV`/`JNOV`/`JL`/`JE`/`JG`/`JGE`/`JNE`/`JLE`.
    pub fn jump(&mut self, address: i64, index: u8, variant: u8) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let taken = match variant {
            0 => true,                                  // JMP
            1 => {
                self.jump_to(m, false);
                return Ok(());
            }
            2 => {
                let of = self.state.overflow;
                self.state.overflow = false;
                of
            }
            3 => {
                let of = self.state.overflow;
                self.state.overflow = false;
                !of
            }
            4 => self.state.comparison == Comparison::Less,
            5 => self.state.comparison == Comparison::Equal,
            6 => self.state.comparison == Comparison::Greater,
            7 => self.state.comparison != Comparison::Less,
            8 => self.state.comparison != Comparison::Equal,
            9 => self.state.comparison != Comparison::Greater,
            _ => return Err(RuntimeError::InvalidVariant { op: "JMP", variant }),
        };

        if taken {
            self.jump_to(m, true);
        } else {
            self.inc_pc();
        }
        Ok(())
    }

    /// `J*N`/`J*Z`/`J*P`/`J*NN`/`J*NZ`/`J*NP`: jumps based on the algebraic
    /// sign of `target`'s current value, without touching it.
    pub fn register_jump(&mut self, address: i64, index: u8, variant: u8, target: JumpTarget) -> Result<(), RuntimeError> {
        let value = match target {
            JumpTarget::A => self.state.registers.a.to_int(),
            JumpTarget::X => self.state.registers.x.to_int(),
            JumpTarget::I(n) => self.state.registers.index(n).to_int(),
        };

        let taken = match variant {
            0 => value < 0,
            1 => value == 0,
            2 => value > 0,
            3 => value >= 0,
            4 => value != 0,
            5 => value <= 0,
            _ => return Err(RuntimeError::InvalidVariant { op: "J*", variant }),
        };

        if taken {
            let m = self.effective_address(address, index)?;
            self.jump_to(m, true);
        } else {
            self.inc_pc();
        }
        Ok(())
    }

    /// `INC*`/`DEC*`/`ENT*`/`ENN*`, dispatched by field value (`0..=3`).
    pub fn address_transfer(&mut self, address: i64, index: u8, variant: u8, target: JumpTarget) -> Result<(), RuntimeError> {
        match variant {
            0 => self.increment(address, index, target, false),
            1 => self.increment(address, index, target, true),
            2 => self.enter(address, index, target, false),
            3 => self.enter(address, index, target, true),
            _ => Err(RuntimeError::InvalidVariant { op: "address transfer", variant }),
        }
    }

    /// `ENT*`/`ENN*`: loads the effective address itself (not the word
    /// stored there) into `target`, optionally negated.
    fn enter(&mut self, address: i64, index: u8, target: JumpTarget, negative: bool) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let width = target_width(target);
        let (mut sign, mut data) = int_to_bytes(m, width);
        if data.len() > width {
            self.state.overflow = true;
            data.truncate(width);
        }
        if negative {
            sign = !sign;
        }
        self.write_target(target, sign, &data)?;
        self.inc_pc();
        Ok(())
    }

    /// `INC*`/`DEC*`: adds (or subtracts) the effective address to/from
    /// `target`'s current value, setting overflow the same way `ADD` does
    /// but relative to `target`'s own width (2 bytes for an index register,
    /// 5 for `rA`/`rX`).
    fn increment(&mut self, address: i64, index: u8, target: JumpTarget, negative: bool) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        let delta = if negative { -m } else { m };

        let current = match target {
            JumpTarget::A => self.state.registers.a.to_int(),
            JumpTarget::X => self.state.registers.x.to_int(),
            JumpTarget::I(n) => self.state.registers.index(n).to_int(),
        };

        let width = target_width(target);
        let (sign, mut data) = int_to_bytes(current + delta, width);
        if data.len() > width {
            self.state.overflow = true;
            data.truncate(width);
        }
        self.write_target(target, sign, &data)?;
        self.inc_pc();
        Ok(())
    }

    fn write_target(&mut self, target: JumpTarget, sign: bool, little_endian: &[crate::byte::Byte]) -> Result<(), RuntimeError> {
        match target {
            JumpTarget::A => {
                self.state.registers.a.update(sign, little_endian[0], little_endian[1], little_endian[2], little_endian[3], little_endian[4]);
            }
            JumpTarget::X => {
                self.state.registers.x.update(sign, little_endian[0], little_endian[1], little_endian[2], little_endian[3], little_endian[4]);
            }
            JumpTarget::I(n) => {
                if !(1..=6).contains(&n) {
                    return Err(RuntimeError::InvalidIndexRegister(n));
                }
                self.state.registers.index_mut(n).update(sign, little_endian[0], little_endian[1]);
            }
        }
        Ok(())
    }
}

/// Byte width of `target`'s own storage: 5 for `rA`/`rX`, 2 for an index
/// register. `INC*`/`DEC*`/`ENT*`/`ENN*` overflow relative to this width,
/// not the full word width.
fn target_width(target: JumpTarget) -> usize {
    match target {
        JumpTarget::A | JumpTarget::X => BYTES_IN_WORD,
        JumpTarget::I(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    #[test]
    fn jsj_jumps_without_touching_rj() {
        let mut state = MachineState::new();
        state.pc = 10;
        state.registers.j.update(crate::byte::Byte::new(9).unwrap(), crate::byte::Byte::new(9).unwrap());
        let mut interp = Interpreter::new(&mut state);
        interp.jump(3000, 0, 1).unwrap();
        assert_eq!(interp.state().pc, 3000);
        assert_eq!(interp.state().registers.j.to_int(), 9 * 64 + 9);
    }

    #[test]
    fn jmp_saves_return_address_in_rj() {
        let mut state = MachineState::new();
        state.pc = 10;
        let mut interp = Interpreter::new(&mut state);
        interp.jump(3000, 0, 0).unwrap();
        assert_eq!(interp.state().pc, 3000);
        assert_eq!(interp.state().registers.j.to_int(), 11);
    }

    #[test]
    fn ent_loads_effective_address_not_memory_contents() {
        let mut state = MachineState::new();
        let mut interp = Interpreter::new(&mut state);
        interp.address_transfer(2025, 0, 2, JumpTarget::I(1)).unwrap();
        assert_eq!(interp.state().registers.index(1).to_int(), 2025);
    }

    #[test]
    fn ent_on_an_index_register_overflows_past_two_bytes() {
        let mut state = MachineState::new();
        let mut interp = Interpreter::new(&mut state);
        // 64^2 - 1 = 4095 is the largest magnitude two bytes hold.
        interp.address_transfer(4999, 0, 2, JumpTarget::I(1)).unwrap();
        assert!(interp.state().overflow);
    }

    #[test]
    fn inc_on_a_full_register_does_not_overflow_at_index_register_width() {
        let mut state = MachineState::new();
        let mut interp = Interpreter::new(&mut state);
        // 4999 overflows a 2-byte index register but fits rA's 5 bytes easily.
        interp.address_transfer(4999, 0, 0, JumpTarget::A).unwrap();
        assert!(!interp.state().overflow);
        assert_eq!(interp.state().registers.a.to_int(), 4999);
    }
}
