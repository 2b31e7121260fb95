//! Ordered, write-once collection of the items in one popup menu.

use std::fmt;
use std::ops::Index;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{MenuError, Result};

/// Position of an item in its menu, fixed at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem<H> {
    id: ItemId,
    label: String,
    key: String,
    handle: H,
}

impl<H> MenuItem<H> {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lowercased first grapheme of the label; empty for an empty label.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Typeahead key of a label: its first grapheme cluster, lowercased.
pub(crate) fn typeahead_key(text: &str) -> String {
    text.graphemes(true)
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

#[derive(Clone, Debug)]
pub struct ItemRegistry<H> {
    items: Vec<MenuItem<H>>,
}

impl<H> Default for ItemRegistry<H> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<H> ItemRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item and returns its id. Text is trimmed before the key
    /// is derived.
    pub fn register(&mut self, text: &str, handle: H) -> ItemId {
        let id = ItemId(self.items.len());
        let label = text.trim().to_string();
        let key = typeahead_key(&label);
        self.items.push(MenuItem {
            id,
            label,
            key,
            handle,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&MenuItem<H>> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&MenuItem<H>> {
        self.items.last()
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem<H>> {
        self.items.get(id.0)
    }

    pub fn item_at(&self, index: usize) -> Result<&MenuItem<H>> {
        self.items.get(index).ok_or(MenuError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Fails with `IndexOutOfRange` for ids minted by another registry.
    pub fn check(&self, id: ItemId) -> Result<ItemId> {
        self.item_at(id.0).map(|item| item.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem<H>> {
        self.items.iter()
    }
}

impl<H: PartialEq> ItemRegistry<H> {
    pub fn index_of(&self, handle: &H) -> Result<ItemId> {
        self.items
            .iter()
            .find(|item| &item.handle == handle)
            .map(|item| item.id)
            .ok_or(MenuError::NotFound)
    }
}

impl<H> Index<ItemId> for ItemRegistry<H> {
    type Output = MenuItem<H>;

    fn index(&self, id: ItemId) -> &MenuItem<H> {
        &self.items[id.0]
    }
}
