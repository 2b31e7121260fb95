/// Semantic role of a node handed to the menu by an item source, similar to
/// ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Button,
    Menu,
    MenuItem,
    Separator,
    Text,
    Container,
}

impl Role {
    /// Whether a node with this role takes part in menu navigation.
    pub fn is_menu_item(self) -> bool {
        matches!(self, Role::MenuItem)
    }
}

/// Where logical input focus can be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The button (or owning menu item) that reveals the menu.
    Controller,
    /// The popup container itself.
    Menu,
    Item(crate::ItemId),
}
