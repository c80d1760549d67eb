//! Turns a raw memory [`Word`] into a decoded, executable [`Instruction`].

use crate::byte::bytes_to_int;
use crate::error::RuntimeError;
use crate::opcode::Operator;
use crate::word::{decode_field, Word};

/// A decoded instruction: the four logical parts of a MIX instruction word,
/// with `field` already split into `(L, R)` and `opcode` already resolved to
/// an [`Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The signed address part, `(0:2)` of the word.
    pub address: i64,
    /// The index register selector, `0` meaning "no indexing".
    pub index: u8,
    /// `(L, R)`, decoded from the raw field byte.
    pub field: (usize, usize),
    pub operator: Operator,
}

impl Instruction {
    /// Decodes `word` as found at the program counter. Fails only if the
    /// `(opcode, field)` pair names no operator; the field byte is otherwise
    /// interpreted structurally and validated later, per-operator.
    pub fn decode(word: Word) -> Result<Instruction, RuntimeError> {
        let address = {
            let magnitude = bytes_to_int(&[word.b1, word.b2], false);
            if word.sign {
                -magnitude
            } else {
                magnitude
            }
        };
        let index = word.b3.value();
        let raw_field = word.b4.value();
        let opcode = word.b5.value();

        let operator = Operator::from_code_and_field(opcode, raw_field).ok_or(
            RuntimeError::UndefinedInstruction { opcode, field: raw_field },
        )?;

        Ok(Instruction { address, index, field: decode_field(raw_field), operator })
    }
}
