//! CLI entry point: assembles a MIXAL source file and runs it to `HLT`.
//!
//! Argument parsing is a single positional path, read straight from
//! [`std::env::args`]. Everything else about a program's lifecycle —
//! assembling, running, the terminal outcome — is logged through `tracing`.

use std::fs;
use std::process::ExitCode;

use mixvm::assembler;
use mixvm::interpreter::Interpreter;
use mixvm::state::MachineState;
use tracing::{error, info, info_span};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: mixvm <path-to-mixal-source>");
        return ExitCode::from(1);
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            error!(%path, %err, "could not read source file");
            return ExitCode::from(1);
        }
    };

    let mut state = MachineState::new();

    let pc = {
        let _span = info_span!("assembling", %path).entered();
        match assembler::assemble(&source, &mut state.memory) {
            Ok(pc) => {
                info!(pc, "assembled");
                pc
            }
            Err(err) => {
                error!(%err, "assembly failed");
                return ExitCode::from(1);
            }
        }
    };
    state.pc = pc;

    let _span = info_span!("running", pc).entered();
    let mut interp = Interpreter::new(&mut state);
    match interp.run() {
        Ok(steps) => {
            info!(steps, "halted");
            ExitCode::from(0)
        }
        Err(err) => {
            error!(%err, "runtime error");
            ExitCode::from(2)
        }
    }
}
