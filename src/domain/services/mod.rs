pub mod option_catalog;

pub use option_catalog::{AUTO_OPTION_NAME, DEAL_OPTION_NAME, OptionCatalog};
