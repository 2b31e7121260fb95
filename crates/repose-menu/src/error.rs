use thiserror::Error;

use crate::semantics::Role;

/// Problems with the item container, detected before the menu exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("menu container has role {found:?}, expected Menu")]
    NotAMenu { found: Option<Role> },
    #[error("menu container has no child elements")]
    NoChildren,
    #[error("menu container has no children with role MenuItem")]
    NoMenuItems,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("invalid menu configuration: {0}")]
    Configuration(#[from] ConfigError),
    /// Caller bug: an id that was never handed out by this registry.
    #[error("item index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("item not registered in this menu")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, MenuError>;
