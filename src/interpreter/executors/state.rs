//! The outcome of executing a single instruction.

/// What the driver loop should do after one [`super::Interpreter::execute`]
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteState {
    /// Keep fetching from the (possibly updated) program counter.
    Proceed,
    /// `HLT` was executed; the program has finished normally.
    Halted,
}
