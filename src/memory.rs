//! Main memory: `MEMORY_SIZE` words, bounds-checked by address.

use crate::consts::MEMORY_SIZE;
use crate::error::RuntimeError;
use crate::word::Word;

/// The machine's 4000-word core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    pub fn new() -> Self {
        Memory { cells: vec![Word::ZERO; MEMORY_SIZE] }
    }

    fn index(&self, address: i64) -> Result<usize, RuntimeError> {
        if address < 0 || address as usize >= MEMORY_SIZE {
            Err(RuntimeError::AddressOutOfRange(address))
        } else {
            Ok(address as usize)
        }
    }

    pub fn load(&self, address: i64) -> Result<Word, RuntimeError> {
        Ok(self.cells[self.index(address)?])
    }

    pub fn store(&mut self, address: i64, word: Word) -> Result<(), RuntimeError> {
        let i = self.index(address)?;
        self.cells[i] = word;
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_stored_word() {
        let mut mem = Memory::new();
        let w = Word::new(true, Default::default(), Default::default(), Default::default(), Default::default(), Default::default());
        mem.store(17, w).unwrap();
        assert_eq!(mem.load(17).unwrap(), w);
    }

    #[test]
    fn rejects_out_of_range_addresses() {
        let mem = Memory::new();
        assert!(mem.load(-1).is_err());
        assert!(mem.load(4000).is_err());
        assert!(mem.load(3999).is_ok());
    }
}
