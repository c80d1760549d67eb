//! An emulator and assembler for Knuth's MIX computer.
//!
//! [`assembler`] turns MIXAL source into words in a [`memory::Memory`];
//! [`interpreter::Interpreter`] then drives a [`state::MachineState`]
//! through that program one fetch/decode/execute step at a time.

pub mod assembler;
pub mod byte;
pub mod charset;
pub mod consts;
pub mod decode;
pub mod error;
pub mod interpreter;
pub mod memory;
pub mod opcode;
pub mod registers;
pub mod state;
pub mod word;
