//! `JBUS`/`JRED`/`IOC`/`IN`/`OUT`: the I/O family.
//!
//! Device I/O beyond the line printer is out of scope for this machine (see
//! `SPEC_FULL.md` §1 Non-goals) — there are no tapes, drums, or card readers
//! behind these opcodes. Every device reports permanently ready/not-busy, so
//! `JBUS` never jumps and `JRED` always does; `IOC`/`IN` are no-ops that
//! still validate the device field, so a program exercising an out-of-range
//! unit fails loudly rather than silently succeeding. `OUT` is a real
//! device: field 18 (the line printer) writes 24 consecutive words to
//! standard output as printable characters, followed by a newline.

use super::Interpreter;
use crate::charset::byte_to_char;
use crate::error::RuntimeError;

/// The largest device field this machine accepts, chosen generously enough
/// to admit any unit number a MIXAL program is likely to name without
/// claiming to emulate real MIX peripherals.
const MAX_DEVICE: u8 = 20;

/// The device field Knuth assigns to the line printer.
const LINE_PRINTER: u8 = 18;

/// Words printed per `OUT` to the line printer (120 characters per line).
const LINE_PRINTER_WORDS: i64 = 24;

impl<'m> Interpreter<'m> {
    fn check_device(&self, device: u8) -> Result<(), RuntimeError> {
        if device > MAX_DEVICE {
            Err(RuntimeError::UnsupportedDevice(device))
        } else {
            Ok(())
        }
    }

    /// `JBUS`: jump if device `device` is busy. No device is ever busy.
    pub fn jump_if_busy(&mut self, address: i64, index: u8, device: u8) -> Result<(), RuntimeError> {
        self.check_device(device)?;
        self.inc_pc();
        let _ = (address, index);
        Ok(())
    }

    /// `JRED`: jump if device `device` is ready. Every device is always
    /// ready, so this always jumps.
    pub fn jump_if_ready(&mut self, address: i64, index: u8) -> Result<(), RuntimeError> {
        let m = self.effective_address(address, index)?;
        self.state.pc = m;
        Ok(())
    }

    /// `IOC`/`IN`: validated no-ops.
    pub fn io_control(&mut self, device: u8) -> Result<(), RuntimeError> {
        self.check_device(device)?;
        self.inc_pc();
        Ok(())
    }

    /// `OUT`: on the line printer, emits `M..M+23` as 120 printable
    /// characters and a trailing newline; any other device is a validated
    /// no-op.
    pub fn out(&mut self, address: i64, index: u8, device: u8) -> Result<(), RuntimeError> {
        self.check_device(device)?;
        if device == LINE_PRINTER {
            let m = self.effective_address(address, index)?;
            let mut line = String::with_capacity((LINE_PRINTER_WORDS * 5) as usize);
            for offset in 0..LINE_PRINTER_WORDS {
                let word = self.state.memory.load(m + offset)?;
                for byte in word.bytes() {
                    line.push(byte_to_char(byte).unwrap_or(' '));
                }
            }
            println!("{line}");
        }
        self.inc_pc();
        Ok(())
    }
}
