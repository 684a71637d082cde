//! Traits a host implements to bind a widget to its input and results elements.
//!
//! The widget never looks elements up itself. A host resolves whatever it uses
//! for elements (DOM nodes, terminal rows) and hands typed handles to
//! [`SearchWidget::new`](crate::SearchWidget::new).

use crate::markup::Fragment;

/// Source of the current query text.
pub trait QuerySource {
    /// The full current value of the input.
    fn query(&self) -> String;
}

/// Container the widget renders its list items into.
///
/// A container that resolved to nothing should accept every call and do nothing.
pub trait ResultsSurface {
    /// Failure raised by the host while mutating its elements.
    type Error;

    /// Appends one list item after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns a host error if the item cannot be inserted.
    fn append(&mut self, fragment: &Fragment) -> Result<(), Self::Error>;

    /// Shows or hides the list item with the given key.
    ///
    /// # Errors
    ///
    /// Returns a host error if the item's visibility cannot be changed.
    fn set_visible(&mut self, key: &str, visible: bool) -> Result<(), Self::Error>;
}

impl QuerySource for String {
    fn query(&self) -> String {
        self.clone()
    }
}

impl QuerySource for &str {
    fn query(&self) -> String {
        (*self).to_owned()
    }
}

impl<S: ResultsSurface + ?Sized> ResultsSurface for &mut S {
    type Error = S::Error;

    fn append(&mut self, fragment: &Fragment) -> Result<(), Self::Error> {
        (**self).append(fragment)
    }

    fn set_visible(&mut self, key: &str, visible: bool) -> Result<(), Self::Error> {
        (**self).set_visible(key, visible)
    }
}
