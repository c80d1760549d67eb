//! `CMPx`: compares a register's field-selected value against the same
//! field of a memory word, setting the comparison indicator.

use super::Interpreter;
use super::load_store::Register;
use crate::byte::bytes_to_int;
use crate::error::RuntimeError;
use crate::state::Comparison;

impl<'m> Interpreter<'m> {
    pub fn compare(&mut self, address: i64, index: u8, field: (usize, usize), register: Register) -> Result<(), RuntimeError> {
        let (reg_sign, reg_data) = match register {
            Register::A => self.state.registers.a.load_fields(field.0, field.1),
            Register::X => self.state.registers.x.load_fields(field.0, field.1),
            Register::I(n) => self.state.registers.index(n).load_fields(field.0, field.1),
            Register::J | Register::Zero => unreachable!("CMPJ/CMPZ are not MIX instructions"),
        };
        let reg_value = bytes_to_int(&reg_data, reg_sign);

        let m = self.effective_address(address, index)?;
        let word = self.state.memory.load(m)?;
        let (mem_sign, mem_data) = word.compare_fields(field.0, field.1);
        let mem_value = bytes_to_int(&mem_data, mem_sign);

        self.state.comparison = match reg_value.cmp(&mem_value) {
            std::cmp::Ordering::Less => Comparison::Less,
            std::cmp::Ordering::Equal => Comparison::Equal,
            std::cmp::Ordering::Greater => Comparison::Greater,
        };

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
    fn equal_values_compare_equal_regardless_of_sign() {
        let mut state = MachineState::new();
        // rA = +0, memory word = -0 over the full field: both read as zero.
        state.memory.store(10, Word::ZERO).unwrap();
        let mut interp = Interpreter::new(&mut state);
        interp.compare(10, 0, (0, 5), Register::A).unwrap();
        assert_eq!(interp.state().comparison, Comparison::Equal);
    }

    #[test]
    fn partial_field_compares_the_same_byte_positions_on_both_sides() {
        use crate::byte::Byte;

        let mut state = MachineState::new();
        // rA's bytes r1,r2,r3 hold 7,7,7; memory's b1,b2,b3 hold 7,7,9.
        // CMPA (1:3) must read r1..r3 against b1..b3, so these compare Less.
        state.registers.a.update(
            false,
            Byte::ZERO,
            Byte::ZERO,
            Byte::new(7).unwrap(),
            Byte::new(7).unwrap(),
            Byte::new(7).unwrap(),
        );
        state.memory
            .store(10, Word::new(false, Byte::new(7).unwrap(), Byte::new(7).unwrap(), Byte::new(9).unwrap(), Byte::ZERO, Byte::ZERO))
            .unwrap();

        let mut interp = Interpreter::new(&mut state);
        interp.compare(10, 0, (1, 3), Register::A).unwrap();
        assert_eq!(interp.state().comparison, Comparison::Less);
    }
}
