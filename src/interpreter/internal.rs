use super::Interpreter;
use crate::error::RuntimeError;

impl<'m> Interpreter<'m> {
    /// Advances the program counter by one cell. Every instruction that
    /// doesn't itself redirect control flow ends by calling this.
    pub(super) fn inc_pc(&mut self) {
        self.state.pc += 1;
    }

    /// Resolves an instruction's effective address: the address part plus
    /// the selected index register's value, or just the address part when
    /// `index == 0`.
    pub(super) fn effective_address(&self, address: i64, index: u8) -> Result<i64, RuntimeError> {
        if index == 0 {
            return Ok(address);
        }
        if index > 6 {
            return Err(RuntimeError::InvalidIndexRegister(index));
        }
        Ok(address + self.state.registers.index(index).to_int())
    }
}
