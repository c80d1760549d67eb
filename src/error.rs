//! Error types for the machine and the assembler.

use thiserror::Error;

/// Errors raised while decoding or executing instructions against a
/// [`crate::state::MachineState`].
///
/// Every variant here is fatal to the driver loop except that overflow is
/// never represented as an error at all — it is a toggle on
/// [`crate::state::MachineState`], observed by `JOV`/`JNOV`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RuntimeError {
    /// A byte value did not fit in 6 bits.
    #[error("byte value {0} does not fit in 6 bits")]
    ByteOverflow(u8),

    /// `Word::update` was called with an index outside `1..=5`.
    #[error("word index {0} is not a valid byte position (expected 1..=5)")]
    InvalidWordIndex(usize),

    /// Memory access outside `0..4000`.
    #[error("memory address {0} is out of range (expected 0..4000)")]
    AddressOutOfRange(i64),

    /// Index register selector outside `0..=6`.
    #[error("index register {0} is out of range (expected 0..=6)")]
    InvalidIndexRegister(u8),

    /// A decoded opcode/field combination has no defined operator.
    #[error("no instruction for opcode {opcode} field {field}")]
    UndefinedInstruction { opcode: u8, field: u8 },

    /// `LDi` selected a field wider than 2 bytes, which would set a
    /// reserved high byte of an index register.
    #[error("LDi field selects more than 2 bytes, which would set a reserved high byte")]
    InvalidIndexLoad,

    /// `SH`, `JMP`, a register jump, or an address-transfer saw a field
    /// byte outside its defined variant range.
    #[error("{op} has no variant {variant}")]
    InvalidVariant { op: &'static str, variant: u8 },

    /// A shift distance was negative.
    #[error("shift distance {0} must be non-negative")]
    NegativeShiftDistance(i64),

    /// An `OUT` instruction named an unsupported device field.
    #[error("device field {0} is not a supported I/O device")]
    UnsupportedDevice(u8),
}

/// Errors raised while assembling MIXAL source into memory.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AssembleError {
    /// A source line did not match the MIXAL line grammar.
    #[error("line {line}: malformed instruction {text:?}")]
    MalformedLine { line: usize, text: String },

    /// A mnemonic was not found in the opcode table.
    #[error("line {line}: unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    /// A symbol referenced in an expression was never bound.
    #[error("line {line}: unknown symbol {symbol:?}")]
    UnknownSymbol { line: usize, symbol: String },

    /// A local label reference (`dF`/`dB`) had no matching anchor.
    #[error("line {line}: no {direction} local label {digit} found")]
    UnresolvedLocalLabel { line: usize, digit: u8, direction: &'static str },

    /// A resolved address fell outside `-4095..=4095`.
    #[error("line {line}: address {value} is out of range (expected -4095..=4095)")]
    AddressOutOfRange { line: usize, value: i64 },

    /// An index part referenced an index register outside `0..=6`.
    #[error("line {line}: index {value} is out of range (expected 0..=6)")]
    IndexOutOfRange { line: usize, value: i64 },

    /// An expression could not be parsed or evaluated.
    #[error("line {line}: invalid expression {text:?}")]
    InvalidExpression { line: usize, text: String },

    /// The literal constant pool (growing down from 3999) ran into
    /// assembled code.
    #[error("literal constant pool exhausted")]
    LiteralPoolExhausted,

    /// No `END` directive was seen before end of input.
    #[error("program has no END directive")]
    MissingEnd,
}
