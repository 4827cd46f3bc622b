pub mod pool;
pub mod records;

pub use pool::*;
pub use records::*;
