//! [`Interpreter`]: owns a [`MachineState`] and drives it one instruction at
//! a time.

use crate::state::MachineState;

mod alu;
mod compare;
mod convert;
mod executors;
mod internal;
mod io;
mod jump;
mod load_store;
mod shift;

pub use executors::ExecuteState;

/// Drives a [`MachineState`] through fetch/decode/execute. Holds the state
/// by mutable reference rather than by value, so a caller can inspect it
/// between steps without the interpreter needing to hand it back.
pub struct Interpreter<'m> {
    state: &'m mut MachineState,
}

impl<'m> Interpreter<'m> {
    pub fn new(state: &'m mut MachineState) -> Self {
        Interpreter { state }
    }

    pub fn state(&self) -> &MachineState {
        self.state
    }
}
