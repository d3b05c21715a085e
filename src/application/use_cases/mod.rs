pub mod search_operations;

pub use search_operations::*;
