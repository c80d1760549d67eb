//! Dispatches a decoded [`Instruction`] to the operator-family method that
//! implements it, via one big `match` over the full operator set.

use super::ExecuteState;
use crate::decode::Instruction;
use crate::error::RuntimeError;
use crate::interpreter::load_store::Register;
use crate::interpreter::jump::JumpTarget;
use crate::interpreter::Interpreter;
use crate::opcode::Operator;

impl<'m> Interpreter<'m> {
    /// Fetches the word at the program counter, decodes it, and executes
    /// it. Returns [`ExecuteState::Halted`] after `HLT`; otherwise
    /// [`ExecuteState::Proceed`], having already advanced (or redirected)
    /// the program counter.
    pub fn execute(&mut self) -> Result<ExecuteState, RuntimeError> {
        let word = self.state.memory.load(self.state.pc)?;
        let instr = Instruction::decode(word)?;
        self.dispatch(instr)
    }

    fn dispatch(&mut self, instr: Instruction) -> Result<ExecuteState, RuntimeError> {
        use Operator::*;

        let (address, index, field) = (instr.address, instr.index, instr.field);
        // A handful of operators (MOVE's count, the I/O family's device
        // number) use the raw field byte as a plain integer rather than as
        // an `(L, R)` selector; reconstruct it from the decoded pair.
        let raw_field = (field.0 * 8 + field.1) as u8;

        match instr.operator {
            Nop => self.inc_pc(),

            Add => self.add(address, index, field, false)?,
            Sub => self.add(address, index, field, true)?,
            Mul => self.mul(address, index, field)?,
            Div => self.div(address, index, field)?,

            Num => self.num()?,
            Char => self.char()?,
            Hlt => {
                self.inc_pc();
                return Ok(ExecuteState::Halted);
            }

            Sla => self.shift_by_effective_address(address, index, 0)?,
            Sra => self.shift_by_effective_address(address, index, 1)?,
            Slax => self.shift_by_effective_address(address, index, 2)?,
            Srax => self.shift_by_effective_address(address, index, 3)?,
            Slc => self.shift_by_effective_address(address, index, 4)?,
            Src => self.shift_by_effective_address(address, index, 5)?,

            Move => self.mov(address, index, raw_field)?,

            Lda => self.load(address, index, field, Register::A, false)?,
            Ld1 => self.load(address, index, field, Register::I(1), false)?,
            Ld2 => self.load(address, index, field, Register::I(2), false)?,
            Ld3 => self.load(address, index, field, Register::I(3), false)?,
            Ld4 => self.load(address, index, field, Register::I(4), false)?,
            Ld5 => self.load(address, index, field, Register::I(5), false)?,
            Ld6 => self.load(address, index, field, Register::I(6), false)?,
            Ldx => self.load(address, index, field, Register::X, false)?,
            Ldan => self.load(address, index, field, Register::A, true)?,
            Ld1n => self.load(address, index, field, Register::I(1), true)?,
            Ld2n => self.load(address, index, field, Register::I(2), true)?,
            Ld3n => self.load(address, index, field, Register::I(3), true)?,
            Ld4n => self.load(address, index, field, Register::I(4), true)?,
            Ld5n => self.load(address, index, field, Register::I(5), true)?,
            Ld6n => self.load(address, index, field, Register::I(6), true)?,
            Ldxn => self.load(address, index, field, Register::X, true)?,

            Sta => self.store(address, index, field, Register::A)?,
            St1 => self.store(address, index, field, Register::I(1))?,
            St2 => self.store(address, index, field, Register::I(2))?,
            St3 => self.store(address, index, field, Register::I(3))?,
            St4 => self.store(address, index, field, Register::I(4))?,
            St5 => self.store(address, index, field, Register::I(5))?,
            St6 => self.store(address, index, field, Register::I(6))?,
            Stx => self.store(address, index, field, Register::X)?,
            Stj => self.store(address, index, field, Register::J)?,
            Stz => self.store(address, index, field, Register::Zero)?,

            Jbus => self.jump_if_busy(address, index, raw_field)?,
            Ioc => self.io_control(raw_field)?,
            In => self.io_control(raw_field)?,
            Out => self.out(address, index, raw_field)?,
            Jred => self.jump_if_ready(address, index)?,

            Jmp => self.jump(address, index, 0)?,
            Jsj => self.jump(address, index, 1)?,
            Jov => self.jump(address, index, 2)?,
            Jnov => self.jump(address, index, 3)?,
            Jl => self.jump(address, index, 4)?,
            Je => self.jump(address, index, 5)?,
            Jg => self.jump(address, index, 6)?,
            Jge => self.jump(address, index, 7)?,
            Jne => self.jump(address, index, 8)?,
            Jle => self.jump(address, index, 9)?,

            Jan => self.register_jump(address, index, 0, JumpTarget::A)?,
            Jaz => self.register_jump(address, index, 1, JumpTarget::A)?,
            Jap => self.register_jump(address, index, 2, JumpTarget::A)?,
            Jann => self.register_jump(address, index, 3, JumpTarget::A)?,
            Janz => self.register_jump(address, index, 4, JumpTarget::A)?,
            Janp => self.register_jump(address, index, 5, JumpTarget::A)?,

            J1n => self.register_jump(address, index, 0, JumpTarget::I(1))?,
            J1z => self.register_jump(address, index, 1, JumpTarget::I(1))?,
            J1p => self.register_jump(address, index, 2, JumpTarget::I(1))?,
            J1nn => self.register_jump(address, index, 3, JumpTarget::I(1))?,
            J1nz => self.register_jump(address, index, 4, JumpTarget::I(1))?,
            J1np => self.register_jump(address, index, 5, JumpTarget::I(1))?,

            J2n => self.register_jump(address, index, 0, JumpTarget::I(2))?,
            J2z => self.register_jump(address, index, 1, JumpTarget::I(2))?,
            J2p => self.register_jump(address, index, 2, JumpTarget::I(2))?,
            J2nn => self.register_jump(address, index, 3, JumpTarget::I(2))?,
            J2nz => self.register_jump(address, index, 4, JumpTarget::I(2))?,
            J2np => self.register_jump(address, index, 5, JumpTarget::I(2))?,

            J3n => self.register_jump(address, index, 0, JumpTarget::I(3))?,
            J3z => self.register_jump(address, index, 1, JumpTarget::I(3))?,
            J3p => self.register_jump(address, index, 2, JumpTarget::I(3))?,
            J3nn => self.register_jump(address, index, 3, JumpTarget::I(3))?,
            J3nz => self.register_jump(address, index, 4, JumpTarget::I(3))?,
            J3np => self.register_jump(address, index, 5, JumpTarget::I(3))?,

            J4n => self.register_jump(address, index, 0, JumpTarget::I(4))?,
            J4z => self.register_jump(address, index, 1, JumpTarget::I(4))?,
            J4p => self.register_jump(address, index, 2, JumpTarget::I(4))?,
            J4nn => self.register_jump(address, index, 3, JumpTarget::I(4))?,
            J4nz => self.register_jump(address, index, 4, JumpTarget::I(4))?,
            J4np => self.register_jump(address, index, 5, JumpTarget::I(4))?,

            J5n => self.register_jump(address, index, 0, JumpTarget::I(5))?,
            J5z => self.register_jump(address, index, 1, JumpTarget::I(5))?,
            J5p => self.register_jump(address, index, 2, JumpTarget::I(5))?,
            J5nn => self.register_jump(address, index, 3, JumpTarget::I(5))?,
            J5nz => self.register_jump(address, index, 4, JumpTarget::I(5))?,
            J5np => self.register_jump(address, index, 5, JumpTarget::I(5))?,

            J6n => self.register_jump(address, index, 0, JumpTarget::I(6))?,
            J6z => self.register_jump(address, index, 1, JumpTarget::I(6))?,
            J6p => self.register_jump(address, index, 2, JumpTarget::I(6))?,
            J6nn => self.register_jump(address, index, 3, JumpTarget::I(6))?,
            J6nz => self.register_jump(address, index, 4, JumpTarget::I(6))?,
            J6np => self.register_jump(address, index, 5, JumpTarget::I(6))?,

            Jxn => self.register_jump(address, index, 0, JumpTarget::X)?,
            Jxz => self.register_jump(address, index, 1, JumpTarget::X)?,
            Jxp => self.register_jump(address, index, 2, JumpTarget::X)?,
            Jxnn => self.register_jump(address, index, 3, JumpTarget::X)?,
            Jxnz => self.register_jump(address, index, 4, JumpTarget::X)?,
            Jxnp => self.register_jump(address, index, 5, JumpTarget::X)?,

            Inca => self.address_transfer(address, index, 0, JumpTarget::A)?,
            Deca => self.address_transfer(address, index, 1, JumpTarget::A)?,
            Enta => self.address_transfer(address, index, 2, JumpTarget::A)?,
            Enna => self.address_transfer(address, index, 3, JumpTarget::A)?,

            Inc1 => self.address_transfer(address, index, 0, JumpTarget::I(1))?,
            Dec1 => self.address_transfer(address, index, 1, JumpTarget::I(1))?,
            Ent1 => self.address_transfer(address, index, 2, JumpTarget::I(1))?,
            Enn1 => self.address_transfer(address, index, 3, JumpTarget::I(1))?,

            Inc2 => self.address_transfer(address, index, 0, JumpTarget::I(2))?,
            Dec2 => self.address_transfer(address, index, 1, JumpTarget::I(2))?,
            Ent2 => self.address_transfer(address, index, 2, JumpTarget::I(2))?,
            Enn2 => self.address_transfer(address, index, 3, JumpTarget::I(2))?,

            Inc3 => self.address_transfer(address, index, 0, JumpTarget::I(3))?,
            Dec3 => self.address_transfer(address, index, 1, JumpTarget::I(3))?,
            Ent3 => self.address_transfer(address, index, 2, JumpTarget::I(3))?,
            Enn3 => self.address_transfer(address, index, 3, JumpTarget::I(3))?,

            Inc4 => self.address_transfer(address, index, 0, JumpTarget::I(4))?,
            Dec4 => self.address_transfer(address, index, 1, JumpTarget::I(4))?,
            Ent4 => self.address_transfer(address, index, 2, JumpTarget::I(4))?,
            Enn4 => self.address_transfer(address, index, 3, JumpTarget::I(4))?,

            Inc5 => self.address_transfer(address, index, 0, JumpTarget::I(5))?,
            Dec5 => self.address_transfer(address, index, 1, JumpTarget::I(5))?,
            Ent5 => self.address_transfer(address, index, 2, JumpTarget::I(5))?,
            Enn5 => self.address_transfer(address, index, 3, JumpTarget::I(5))?,

            Inc6 => self.address_transfer(address, index, 0, JumpTarget::I(6))?,
            Dec6 => self.address_transfer(address, index, 1, JumpTarget::I(6))?,
            Ent6 => self.address_transfer(address, index, 2, JumpTarget::I(6))?,
            Enn6 => self.address_transfer(address, index, 3, JumpTarget::I(6))?,

            Incx => self.address_transfer(address, index, 0, JumpTarget::X)?,
            Decx => self.address_transfer(address, index, 1, JumpTarget::X)?,
            Entx => self.address_transfer(address, index, 2, JumpTarget::X)?,
            Ennx => self.address_transfer(address, index, 3, JumpTarget::X)?,

            Cmpa => self.compare(address, index, field, Register::A)?,
            Cmp1 => self.compare(address, index, field, Register::I(1))?,
            Cmp2 => self.compare(address, index, field, Register::I(2))?,
            Cmp3 => self.compare(address, index, field, Register::I(3))?,
            Cmp4 => self.compare(address, index, field, Register::I(4))?,
            Cmp5 => self.compare(address, index, field, Register::I(5))?,
            Cmp6 => self.compare(address, index, field, Register::I(6))?,
            Cmpx => self.compare(address, index, field, Register::X)?,
        }

        Ok(ExecuteState::Proceed)
    }

    /// `SH`'s address part is the shift distance itself (no memory access),
    /// so the effective address is computed but never dereferenced.
    fn shift_by_effective_address(&mut self, address: i64, index: u8, variant: u8) -> Result<(), RuntimeError> {
        let distance = self.effective_address(address, index)?;
        self.shift(distance, variant)
    }
}
