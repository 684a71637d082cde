//! In-memory host used by tests and by hosts that draw the list themselves.

use std::convert::Infallible;

use crate::{
    markup::Fragment,
    surface::{QuerySource, ResultsSurface},
};

/// A list item held by [`MemoryResults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// The fragment that was appended.
    pub fragment: Fragment,
    /// Current visibility.
    pub visible: bool,
}

/// Results container that stores appended items and their visibility.
#[derive(Debug, Clone, Default)]
pub struct MemoryResults {
    items: Vec<RenderedItem>,
    detached: bool,
}

impl MemoryResults {
    /// Creates an empty, attached container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            detached: false,
        }
    }

    /// Creates a container standing in for a selector that matched nothing.
    ///
    /// Every operation on it is a no-op.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            items: Vec::new(),
            detached: true,
        }
    }

    /// Returns `true` if this container stands in for a missing element.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    /// All items in insertion order, hidden ones included.
    #[must_use]
    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    /// The item with the given id.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<&RenderedItem> {
        self.items.iter().find(|item| item.fragment.id == key)
    }

    /// Visibility of the item with the given id.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> Option<bool> {
        self.item(key).map(|item| item.visible)
    }

    /// Ids of visible items in insertion order.
    pub fn visible_keys(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.fragment.id.as_str())
    }

    /// Visible items in insertion order.
    pub fn visible_items(&self) -> impl Iterator<Item = &RenderedItem> {
        self.items.iter().filter(|item| item.visible)
    }
}

impl ResultsSurface for MemoryResults {
    type Error = Infallible;

    fn append(&mut self, fragment: &Fragment) -> Result<(), Self::Error> {
        if !self.detached {
            self.items.push(RenderedItem {
                fragment: fragment.clone(),
                visible: true,
            });
        }
        Ok(())
    }

    fn set_visible(&mut self, key: &str, visible: bool) -> Result<(), Self::Error> {
        for item in self.items.iter_mut().filter(|item| item.fragment.id == key) {
            item.visible = visible;
        }
        Ok(())
    }
}

/// Editable text standing in for a search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInput {
    value: String,
}

impl MemoryInput {
    /// Creates an input holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the contents.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Appends one character, as a keystroke would.
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Removes the last character, as backspace would.
    pub fn pop(&mut self) -> Option<char> {
        self.value.pop()
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

impl QuerySource for MemoryInput {
    fn query(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(id: &str) -> Fragment {
        Fragment {
            id: id.to_owned(),
            href: format!("/{id}"),
            text: format!("{id} label"),
        }
    }

    #[test]
    fn appended_items_start_visible() {
        let mut results = MemoryResults::new();
        results.append(&fragment("a")).unwrap();
        results.append(&fragment("b")).unwrap();
        assert_eq!(results.visible_keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn set_visible_toggles_without_removing() {
        let mut results = MemoryResults::new();
        results.append(&fragment("a")).unwrap();
        results.set_visible("a", false).unwrap();
        assert_eq!(results.items().len(), 1);
        assert_eq!(results.is_visible("a"), Some(false));
        results.set_visible("a", true).unwrap();
        assert_eq!(results.is_visible("a"), Some(true));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut results = MemoryResults::new();
        results.set_visible("missing", false).unwrap();
        assert!(results.items().is_empty());
    }

    #[test]
    fn detached_container_stays_empty() {
        let mut results = MemoryResults::detached();
        results.append(&fragment("a")).unwrap();
        results.set_visible("a", false).unwrap();
        assert!(results.is_detached());
        assert!(results.items().is_empty());
    }

    #[test]
    fn input_editing() {
        let mut input = MemoryInput::default();
        input.push('L');
        input.push('o');
        assert_eq!(input.query(), "Lo");
        assert_eq!(input.pop(), Some('o'));
        input.set_value("Rev");
        assert_eq!(input.value(), "Rev");
        input.clear();
        assert_eq!(input.query(), "");
    }
}
