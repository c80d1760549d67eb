//! The assembler's symbol table: ordinary symbols bound once to a signed
//! value, plus the separate per-digit history local labels (`dH`/`dF`/`dB`)
//! need.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, i64>,
    /// Locations recorded under each local-label digit, in the ascending
    /// order they were defined (always true since the parse pass walks the
    /// source top to bottom).
    locals: HashMap<u8, Vec<i64>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>, value: i64) {
        self.symbols.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.symbols.get(name).copied()
    }

    pub fn define_local(&mut self, digit: u8, location: i64) {
        self.locals.entry(digit).or_default().push(location);
    }

    /// Nearest recorded location for `digit` strictly after `from`, for a
    /// `dF` reference.
    pub fn resolve_local_forward(&self, digit: u8, from: i64) -> Option<i64> {
        self.locals.get(&digit)?.iter().find(|&&loc| loc > from).copied()
    }

    /// Nearest recorded location for `digit` strictly before `from`, for a
    /// `dB` reference.
    pub fn resolve_local_backward(&self, digit: u8, from: i64) -> Option<i64> {
        self.locals.get(&digit)?.iter().rev().find(|&&loc| loc < from).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward_pick_nearest_anchor() {
        let mut table = SymbolTable::new();
        table.define_local(1, 10);
        table.define_local(1, 40);
        table.define_local(1, 70);

        assert_eq!(table.resolve_local_forward(1, 20), Some(40));
        assert_eq!(table.resolve_local_backward(1, 50), Some(40));
        assert_eq!(table.resolve_local_forward(1, 70), None);
    }
}
