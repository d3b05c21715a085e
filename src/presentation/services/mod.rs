pub mod search_executor;

pub use search_executor::SearchExecutor;
