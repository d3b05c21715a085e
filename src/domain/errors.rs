use crate::domain::entities::FilterGroup;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("no {group} option encodes {value:?}")]
    UnknownValue { group: FilterGroup, value: String },
    #[error("no {group} option is named {name:?}")]
    UnknownName { group: FilterGroup, name: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
