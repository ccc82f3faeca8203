//! Generic structures, independent of answer set programming.

pub mod index_heap;
pub mod luby;
pub mod random;
