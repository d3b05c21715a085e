pub mod config_repository;
pub mod memory;

pub use config_repository::ConfigRepository;
