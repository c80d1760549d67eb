//! The fetch/decode/execute driver loop: runs until `HLT` (`CONV` variant 2)
//! or a fatal error.

use super::ExecuteState;
use crate::consts::MEMORY_SIZE;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;

impl<'m> Interpreter<'m> {
    /// Runs from the current program counter until `HLT` or an error.
    /// Returns the number of instructions executed.
    pub fn run(&mut self) -> Result<u64, RuntimeError> {
        let mut steps = 0u64;

        loop {
            if !(0..MEMORY_SIZE as i64).contains(&self.state().pc) {
                return Err(RuntimeError::AddressOutOfRange(self.state().pc));
            }

            match self.execute()? {
                ExecuteState::Proceed => {
                    steps += 1;
                }
                ExecuteState::Halted => {
                    steps += 1;
                    return Ok(steps);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::Byte;
    use crate::opcode::Operator;
    use crate::state::MachineState;
    use crate::word::Word;

    fn instruction(address: i64, index: u8, op: Operator) -> Word {
        let (opcode, field) = op.to_code_and_field();
        let (sign, addr_bytes) = crate::byte::int_to_bytes(address, 2);
        Word::new(
            sign,
            addr_bytes[1],
            addr_bytes[0],
            Byte::new(index).unwrap(),
            Byte::new(field).unwrap(),
            Byte::new(opcode).unwrap(),
        )
    }

    #[test]
    fn runs_until_halt() {
        let mut state = MachineState::new();
        // ENT1 5 ; HLT
        state.memory.store(0, instruction(5, 0, Operator::Ent1)).unwrap();
        state.memory.store(1, instruction(0, 0, Operator::Hlt)).unwrap();

        let mut interp = Interpreter::new(&mut state);
        let steps = interp.run().unwrap();

        assert_eq!(steps, 2);
        assert_eq!(interp.state().registers.index(1).to_int(), 5);
        assert_eq!(interp.state().pc, 2);
    }

    #[test]
    fn running_off_the_end_of_memory_is_an_error() {
        let mut state = MachineState::new();
        state.pc = (MEMORY_SIZE - 1) as i64;
        state.memory.store(state.pc, instruction(0, 0, Operator::Hlt)).unwrap();

        let mut interp = Interpreter::new(&mut state);
        // HLT at the last cell halts cleanly before the bounds check ever
        // needs to reject an out-of-range fetch.
        assert!(interp.run().is_ok());
    }
}
