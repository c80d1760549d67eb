//! `SLA`/`SRA`/`SLAX`/`SRAX`/`SLC`/`SRC`: the six shift variants of the `SH`
//! opcode, distinguished by field value `0..=5`. `SLA`/`SRA` shift only
//! `rA`; the `X`-suffixed and circular variants treat `(rA, rX)` as one
//! 10-byte register.

use super::Interpreter;
use crate::byte::Byte;
use crate::error::RuntimeError;

impl<'m> Interpreter<'m> {
    pub fn shift(&mut self, distance: i64, variant: u8) -> Result<(), RuntimeError> {
        if distance < 0 {
            return Err(RuntimeError::NegativeShiftDistance(distance));
        }
        let n = distance as usize;

        match variant {
            0 => self.shift_a(n, true),
            1 => self.shift_a(n, false),
            2 => self.shift_ax(n, true, false),
            3 => self.shift_ax(n, false, false),
            4 => self.shift_ax(n, true, true),
            5 => self.shift_ax(n, false, true),
            _ => return Err(RuntimeError::InvalidVariant { op: "SH", variant }),
        }
        self.inc_pc();
        Ok(())
    }

    fn shift_a(&mut self, n: usize, left: bool) {
        let mut bytes = self.state.registers.a.bytes().to_vec();
        shift_lanes(&mut bytes, n, left, false);
        let sign = self.state.registers.a.sign;
        self.state.registers.a.update(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0]);
    }

    fn shift_ax(&mut self, n: usize, left: bool, circular: bool) {
        let mut bytes = self.state.registers.a.bytes().to_vec();
        bytes.extend(self.state.registers.x.bytes());
        shift_lanes(&mut bytes, n, left, circular);

        let (a, x) = bytes.split_at(5);
        let a_sign = self.state.registers.a.sign;
        let x_sign = self.state.registers.x.sign;
        self.state.registers.a.update(a_sign, a[4], a[3], a[2], a[1], a[0]);
        self.state.registers.x.update(x_sign, x[4], x[3], x[2], x[1], x[0]);
    }
}

/// Shifts `lanes` (most-significant-first) by `n` positions, filling with
/// zero unless `circular`, in which case bytes wrap around instead of being
/// discarded.
fn shift_lanes(lanes: &mut Vec<Byte>, n: usize, left: bool, circular: bool) {
    let len = lanes.len();
    let n = if circular { n % len } else { n.min(len) };

    if circular {
        if left {
            lanes.rotate_left(n);
        } else {
            lanes.rotate_right(n);
        }
    } else if left {
        lanes.drain(0..n);
        lanes.extend(std::iter::repeat(Byte::ZERO).take(n));
    } else {
        lanes.truncate(len - n);
        let mut filled = vec![Byte::ZERO; n];
        filled.extend(lanes.iter().copied());
        *lanes = filled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    fn byte(v: u8) -> Byte {
        Byte::new(v).unwrap()
    }

    #[test]
    fn sla_shifts_left_filling_with_zero() {
        let mut state = MachineState::new();
        state.registers.a.update(false, byte(5), byte(4), byte(3), byte(2), byte(1));
        let mut interp = Interpreter::new(&mut state);
        interp.shift(2, 0).unwrap(); // SLA 2
        let a = interp.state().registers.a;
        assert_eq!((a.r1, a.r2, a.r3, a.r4, a.r5), (byte(3), byte(4), byte(5), byte(0), byte(0)));
    }

    #[test]
    fn src_rotates_ax_circularly() {
        let mut state = MachineState::new();
        // `update`'s args are little-endian (r5 first), so these hold
        // rA = (r1..r5) 1,2,3,4,5 and rX = (r1..r5) 6,7,8,9,10 — the
        // 10-byte AX lane reads 1,2,3,4,5,6,7,8,9,10 most-significant first.
        state.registers.a.update(false, byte(5), byte(4), byte(3), byte(2), byte(1));
        state.registers.x.update(false, byte(10), byte(9), byte(8), byte(7), byte(6));
        let mut interp = Interpreter::new(&mut state);
        interp.shift(1, 5).unwrap(); // SRC 1
        let a = interp.state().registers.a;
        assert_eq!(a.r1, byte(10)); // the byte that fell off rX's low end (r5) wraps into rA's high end (r1)
    }
}
