mod boundedintset;
mod constants;
mod error;

pub use boundedintset::{equal, BoundedIntSet, DefaultIntSet};
pub use constants::{DUMP_DELIMITER, MAX_SIZE};
pub use error::IntSetError;
