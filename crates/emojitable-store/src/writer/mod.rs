//! Table persistence
//!
//! Provides:
//! - Atomic writes (temp file + rename), so a failed run never leaves a
//!   truncated table behind
//! - Compact or pretty JSON rendering with literal non-ASCII text
//! - Reading a previously written table back

mod atomic;
mod table_writer;

pub use table_writer::{read_table, serialize_table, write_table, OutputStyle};
