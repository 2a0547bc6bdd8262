//! # queryspec-memory
//!
//! In-process execution provider for QuerySpec query plans. Evaluates a
//! plan's predicate, ordering, and paging against an owned `Vec<T>` —
//! useful for tests, fixtures, and small datasets that never leave
//! process memory.

pub mod executor;

pub use executor::MemoryExecutor;
