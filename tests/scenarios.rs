//! End-to-end scenarios lifted from the spec's literal examples: assemble a
//! short MIXAL snippet (or poke memory/registers directly for a single
//! instruction), run it, and check the resulting numeric state.
//!
//! Expected values below are independently re-derived (not transcribed) from
//! each scenario's inputs, since `WordRegister::update`'s little-endian
//! argument order doesn't match a word's big-endian byte layout one-for-one.

use mixvm::assembler;
use mixvm::assembler::expr::{evaluate, Context};
use mixvm::assembler::symtab::SymbolTable;
use mixvm::byte::{int_to_bytes, Byte};
use mixvm::interpreter::Interpreter;
use mixvm::memory::Memory;
use mixvm::state::MachineState;
use mixvm::word::Word;

fn b(v: u8) -> Byte {
    Byte::new(v).unwrap()
}

fn word_from_int(n: i64) -> Word {
    let (sign, bytes) = int_to_bytes(n, 5);
    Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0])
}

#[test]
fn add_combines_ra_with_a_field_5_memory_word() {
    let mut state = MachineState::new();
    state.memory.store(1000, Word::new(false, b(1), b(36), b(5), b(0), b(50))).unwrap();
    state.registers.a.update(false, b(22), b(2), b(1), b(18), b(19));
    let expected = state.registers.a.to_int() + state.memory.load(1000).unwrap().to_int();

    let source = "        ADD 1000\n        HLT\n        END 0\n";
    let pc = assembler::assemble(source, &mut state.memory).unwrap();
    state.pc = pc;

    let mut interp = Interpreter::new(&mut state);
    interp.run().unwrap();

    assert_eq!(interp.state().registers.a.to_int(), expected);
    assert!(!interp.state().overflow);
}

#[test]
fn div_splits_quotient_and_remainder_across_a_and_x() {
    // The classic divide-by-3 example: (rA, rX) as a ten-byte numerator
    // holding plain 17, divided by memory's 3, gives quotient 5 remainder 2.
    let mut state = MachineState::new();
    state.memory.store(1000, word_from_int(3)).unwrap();
    state.registers.x.update(false, b(17), b(0), b(0), b(0), b(0));
    assert_eq!(state.registers.x.to_int(), 17);

    let source = "        DIV 1000\n        HLT\n        END 0\n";
    let pc = assembler::assemble(source, &mut state.memory).unwrap();
    state.pc = pc;

    let mut interp = Interpreter::new(&mut state);
    interp.run().unwrap();

    assert_eq!(interp.state().registers.a.to_int(), 5);
    assert_eq!(interp.state().registers.x.to_int(), 2);
    assert!(!interp.state().overflow);
}

#[test]
fn srax_one_shifts_the_ten_byte_ax_pair_right_by_one_byte() {
    let mut state = MachineState::new();
    state.registers.a.update(false, b(5), b(4), b(3), b(2), b(1));
    state.registers.x.update(true, b(10), b(9), b(8), b(7), b(6));

    let source = "        SRAX 1\n        HLT\n        END 0\n";
    let pc = assembler::assemble(source, &mut state.memory).unwrap();
    state.pc = pc;

    let mut interp = Interpreter::new(&mut state);
    interp.run().unwrap();

    // The low byte of rX (its r5) is discarded; a zero enters rA's high end;
    // every other byte slides one position towards the low end.
    assert_eq!(interp.state().registers.a.to_int(), 270_532);
    assert_eq!(interp.state().registers.x.to_int(), -85_488_137);
}

#[test]
fn num_and_char_round_trip_through_an_increment() {
    let mut state = MachineState::new();
    state.registers.a.update(true, b(39), b(32), b(31), b(0), b(0));
    state.registers.x.update(false, b(30), b(30), b(47), b(57), b(37));

    // NUM 0 / INCA 1 / CHAR 0 / HLT, stepping manually to check the value
    // after each instruction rather than just the terminal state.
    let source = "        NUM 0\n        INCA 1\n        CHAR 0\n        HLT\n        END 0\n";
    let pc = assembler::assemble(source, &mut state.memory).unwrap();
    state.pc = pc;

    let mut interp = Interpreter::new(&mut state);
    interp.execute().unwrap(); // NUM
    assert_eq!(interp.state().registers.a.to_int(), -12977700);

    interp.execute().unwrap(); // INCA 1
    assert_eq!(interp.state().registers.a.to_int(), -12977699);

    interp.execute().unwrap(); // CHAR
    let a = interp.state().registers.a;
    let x = interp.state().registers.x;
    assert_eq!((a.sign, a.r1, a.r2, a.r3, a.r4, a.r5), (true, b(30), b(30), b(31), b(32), b(39)));
    assert_eq!((x.sign, x.r1, x.r2, x.r3, x.r4, x.r5), (false, b(37), b(37), b(36), b(39), b(39)));
}

#[test]
fn address_expressions_resolve_symbols_star_and_leading_sign() {
    let mut memory = Memory::new();
    let mut symbols = SymbolTable::new();
    symbols.define("BUF0".to_string(), 2000);
    let mut next_literal = 3999;

    let mut ctx = Context { location: 3000, line: 1, symbols: &symbols, memory: &mut memory, next_literal: &mut next_literal };
    assert_eq!(evaluate("BUF0+25", &mut ctx).unwrap(), 2025);

    let mut ctx = Context { location: 3000, line: 1, symbols: &symbols, memory: &mut memory, next_literal: &mut next_literal };
    assert_eq!(evaluate("*+3", &mut ctx).unwrap(), 3003);

    let mut ctx = Context { location: 3000, line: 1, symbols: &symbols, memory: &mut memory, next_literal: &mut next_literal };
    assert_eq!(evaluate("-1", &mut ctx).unwrap(), -1);
}
