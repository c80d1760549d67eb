//! Machine-wide size constants.

/// Number of addressable memory cells, `0..MEMORY_SIZE`.
pub const MEMORY_SIZE: usize = 4000;

/// Number of index registers, `I1..=I6`.
pub const INDEX_REGISTER_COUNT: u8 = 6;

/// Largest magnitude an index register (or a resolved instruction address)
/// may hold.
pub const MAX_ADDRESS_MAGNITUDE: i64 = 4095;

/// The literal constant pool (`=EXPR=`) is carved out of memory from the top
/// down, starting one below the last addressable cell.
pub const LITERAL_POOL_START: i64 = (MEMORY_SIZE as i64) - 1;
