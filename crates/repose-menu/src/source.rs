//! Where a menu's items come from, and the checks run before a menu is
//! built from them.

use crate::error::{ConfigError, Result};
use crate::registry::ItemRegistry;
use crate::semantics::Role;

/// A direct child of the menu container as seen by the adapter.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceNode<H> {
    pub role: Option<Role>,
    pub text: String,
    pub handle: H,
}

/// Adapter view of a menu container.
pub trait ItemSource {
    type Handle: Clone + PartialEq + std::fmt::Debug;

    fn container_role(&self) -> Option<Role>;

    /// Direct children in source order, menu items or not.
    fn children(&self) -> Vec<SourceNode<Self::Handle>>;
}

/// Validates `source` and registers its menu items in order.
pub fn collect_items<S: ItemSource>(source: &S) -> Result<ItemRegistry<S::Handle>> {
    let role = source.container_role();
    if role != Some(Role::Menu) {
        return Err(ConfigError::NotAMenu { found: role }.into());
    }

    let children = source.children();
    if children.is_empty() {
        return Err(ConfigError::NoChildren.into());
    }

    let mut items = ItemRegistry::new();
    for child in children {
        if child.role.is_some_and(Role::is_menu_item) {
            items.register(&child.text, child.handle);
        }
    }
    if items.is_empty() {
        return Err(ConfigError::NoMenuItems.into());
    }

    log::debug!("collected {} menu items", items.len());
    Ok(items)
}

/// Plain in-memory node tree, for tests and headless hosts. Handles are the
/// child's position in `children`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuNode {
    pub role: Option<Role>,
    pub text: String,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn menu(children: Vec<MenuNode>) -> Self {
        Self {
            role: Some(Role::Menu),
            text: String::new(),
            children,
        }
    }

    /// A `menu` whose children are all menu items with these labels.
    pub fn with_items<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::menu(labels.into_iter().map(MenuNode::item).collect())
    }

    pub fn item(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::MenuItem),
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn separator() -> Self {
        Self {
            role: Some(Role::Separator),
            ..Default::default()
        }
    }
}

impl ItemSource for MenuNode {
    type Handle = usize;

    fn container_role(&self) -> Option<Role> {
        self.role
    }

    fn children(&self) -> Vec<SourceNode<usize>> {
        self.children
            .iter()
            .enumerate()
            .map(|(i, c)| SourceNode {
                role: c.role,
                text: c.text.clone(),
                handle: i,
            })
            .collect()
    }
}
