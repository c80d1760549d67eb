mod instruction;
mod main;
mod state;

pub use state::ExecuteState;
