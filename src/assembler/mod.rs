//! The MIXAL assembler: turns source text into words written directly into
//! a [`Memory`], in two passes — a parse pass that binds symbols and queues
//! instructions, and an emit pass that resolves expressions and writes
//! words — with a full expression evaluator, local labels, literal
//! constants, and the `CON`/`ALF`/`END` directives.

pub mod expr;
pub mod grammar;
pub mod symtab;

use crate::byte::Byte;
use crate::charset::char_to_byte;
use crate::consts::{LITERAL_POOL_START, MAX_ADDRESS_MAGNITUDE};
use crate::error::AssembleError;
use crate::memory::Memory;
use crate::opcode::Operator;
use crate::word::Word;

use expr::{evaluate, Context};
use grammar::{local_label_digit, parse_line};
use symtab::SymbolTable;

/// One entry awaiting the emit pass, bound to the output-location counter
/// it was read at.
enum Emission {
    Instruction { address: i64, line: usize, op: Operator, a_part: Option<String>, index_part: Option<String>, field_part: Option<String> },
    Con { address: i64, line: usize, a_part: String },
    Alf { address: i64, line: usize, text: String },
}

/// Assembles `source` into `memory` and returns the initial program
/// counter named by the `END` directive.
pub fn assemble(source: &str, memory: &mut Memory) -> Result<i64, AssembleError> {
    let mut symbols = SymbolTable::new();
    let mut emissions = Vec::new();
    let mut loc_counter: i64 = 0;
    let mut end_expr: Option<(usize, String)> = None;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('*') {
            continue;
        }

        let parsed = parse_line(line).ok_or_else(|| AssembleError::MalformedLine { line: line_no, text: line.to_string() })?;

        if parsed.op == "END" {
            end_expr = Some((line_no, parsed.address.unwrap_or_default()));
            break;
        }

        // `EQU` binds its location to the evaluated A-part rather than to
        // the output-location counter, so it is handled before the generic
        // binding below applies.
        if parsed.op == "EQU" {
            let location = parsed.location.ok_or_else(|| AssembleError::MalformedLine { line: line_no, text: line.to_string() })?;
            let mut next_literal = LITERAL_POOL_START;
            let value = {
                let mut ctx = Context { location: loc_counter, line: line_no, symbols: &symbols, memory, next_literal: &mut next_literal };
                evaluate(&parsed.address.unwrap_or_default(), &mut ctx)?
            };
            symbols.define(location, value);
            continue;
        }

        if let Some(loc) = &parsed.location {
            if let Some(digit) = local_label_digit(loc) {
                symbols.define_local(digit, loc_counter);
            } else {
                symbols.define(loc.clone(), loc_counter);
            }
        }

        match parsed.op.as_str() {
            "ORIG" => {
                let mut next_literal = LITERAL_POOL_START;
                let value = {
                    let mut ctx = Context { location: loc_counter, line: line_no, symbols: &symbols, memory, next_literal: &mut next_literal };
                    evaluate(&parsed.address.unwrap_or_default(), &mut ctx)?
                };
                loc_counter = value;
            }
            "CON" => {
                let a_part = parsed.address.ok_or_else(|| AssembleError::MalformedLine { line: line_no, text: line.to_string() })?;
                emissions.push(Emission::Con { address: loc_counter, line: line_no, a_part });
                loc_counter += 1;
            }
            "ALF" => {
                let text = parsed.address.ok_or_else(|| AssembleError::MalformedLine { line: line_no, text: line.to_string() })?;
                emissions.push(Emission::Alf { address: loc_counter, line: line_no, text });
                loc_counter += 1;
            }
            mnemonic => {
                let op = Operator::from_mnemonic(mnemonic).ok_or_else(|| AssembleError::UnknownMnemonic { line: line_no, mnemonic: mnemonic.to_string() })?;
                emissions.push(Emission::Instruction {
                    address: loc_counter,
                    line: line_no,
                    op,
                    a_part: parsed.address,
                    index_part: parsed.index,
                    field_part: parsed.field,
                });
                loc_counter += 1;
            }
        }
    }

    let mut next_literal = LITERAL_POOL_START;

    for emission in emissions {
        match emission {
            Emission::Instruction { address, line, op, a_part, index_part, field_part } => {
                let a_value = match a_part {
                    Some(expr) => {
                        let mut ctx = Context { location: address, line, symbols: &symbols, memory, next_literal: &mut next_literal };
                        evaluate(&expr, &mut ctx)?
                    }
                    None => 0,
                };
                if a_value.unsigned_abs() as i64 > MAX_ADDRESS_MAGNITUDE {
                    return Err(AssembleError::AddressOutOfRange { line, value: a_value });
                }

                let index_value = match index_part {
                    Some(expr) => {
                        let mut ctx = Context { location: address, line, symbols: &symbols, memory, next_literal: &mut next_literal };
                        evaluate(&expr, &mut ctx)?
                    }
                    None => 0,
                };
                if !(0..=6).contains(&index_value) {
                    return Err(AssembleError::IndexOutOfRange { line, value: index_value });
                }

                let field_value = match field_part {
                    Some(expr) => {
                        let mut ctx = Context { location: address, line, symbols: &symbols, memory, next_literal: &mut next_literal };
                        evaluate(&expr, &mut ctx)?
                    }
                    None => op.to_code_and_field().1 as i64,
                };

                let (opcode, _) = op.to_code_and_field();
                let (sign, a_bytes) = crate::byte::int_to_bytes(a_value, 2);
                let word = Word::new(
                    sign,
                    a_bytes[1],
                    a_bytes[0],
                    Byte::new(index_value as u8).map_err(|_| AssembleError::IndexOutOfRange { line, value: index_value })?,
                    Byte::new(field_value as u8).map_err(|_| AssembleError::InvalidExpression { line, text: format!("field {field_value}") })?,
                    Byte::new(opcode).expect("opcodes are always valid bytes"),
                );
                memory.store(address, word).map_err(|_| AssembleError::AddressOutOfRange { line, value: address })?;
            }
            Emission::Con { address, line, a_part } => {
                let value = {
                    let mut ctx = Context { location: address, line, symbols: &symbols, memory, next_literal: &mut next_literal };
                    evaluate(&a_part, &mut ctx)?
                };
                let (sign, bytes) = crate::byte::int_to_bytes(value, 5);
                let word = Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0]);
                memory.store(address, word).map_err(|_| AssembleError::AddressOutOfRange { line, value: address })?;
            }
            Emission::Alf { address, line, text } => {
                let mut chars: Vec<char> = text.replace('_', " ").chars().collect();
                chars.resize(5, ' ');
                let mut bytes = [Byte::ZERO; 5];
                for (i, c) in chars.into_iter().take(5).enumerate() {
                    bytes[i] = char_to_byte(c).ok_or_else(|| AssembleError::InvalidExpression { line, text: text.clone() })?;
                }
                let word = Word::new(false, bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]);
                memory.store(address, word).map_err(|_| AssembleError::AddressOutOfRange { line, value: address })?;
            }
        }
    }

    let (line, expr) = end_expr.ok_or(AssembleError::MissingEnd)?;
    let mut ctx = Context { location: loc_counter, line, symbols: &symbols, memory, next_literal: &mut next_literal };
    evaluate(&expr, &mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;
    use crate::state::MachineState;

    #[test]
    fn assembles_and_runs_the_maximum_of_n_program() {
        let source = "\
        X       EQU 1000
        START   STJ EXIT
                ENT3 0,1
                JMP CHANGEM
        LOOP    CMPA X,3
                JGE *+3
        CHANGEM ENT2 0,3
                LDA X,3
                DEC3 1
                J3P LOOP
        EXIT    HLT
                END START
        ";

        let mut state = MachineState::new();
        let pc = assemble(source, &mut state.memory).unwrap();
        assert_eq!(pc, 0);

        for (offset, value) in [1, 3, 5, 7, 9, 2, 4, 6, 8].into_iter().enumerate() {
            let (sign, bytes) = crate::byte::int_to_bytes(value, 5);
            state.memory.store(1001 + offset as i64, Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0])).unwrap();
        }
        state.registers.index_mut(1).update(false, Byte::new(9).unwrap(), Byte::new(0).unwrap());
        state.pc = 0;

        let mut interp = Interpreter::new(&mut state);
        interp.run().unwrap();

        assert_eq!(interp.state().registers.a.to_int(), 9);
    }

    #[test]
    fn equ_binds_a_value_without_consuming_a_cell() {
        let source = "\
        FIVE    EQU 5
        START   LDA FIVE
                HLT
                END START
        ";
        let mut memory = Memory::new();
        let pc = assemble(source, &mut memory).unwrap();
        assert_eq!(pc, 0);
    }

    #[test]
    fn missing_end_is_an_error() {
        let mut memory = Memory::new();
        assert!(assemble("HLT\n", &mut memory).is_err());
    }
}
