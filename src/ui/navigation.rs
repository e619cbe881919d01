//! Keyboard/controller navigation over UI elements.
//!
//! A [`UiNavigation`] keeps an ordered list of element ids and a cursor
//! for the currently highlighted element. Navigation inputs move the
//! cursor with wrap-around; hotkeys jump straight to a mapped element
//! regardless of cursor position.

use rustc_hash::FxHashMap;

/// Logical navigation inputs, already decoded from physical keys or
/// controller buttons by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationInput {
    MoveUp,
    MoveDown,
    MoveToFirst,
    MoveToLast,
}

/// Ordered element list with a highlight cursor and hotkey map.
///
/// Element ids are caller-defined strings; the same id may appear more
/// than once and each occurrence is a separate navigation stop.
#[derive(Debug, Clone, Default)]
pub struct UiNavigation {
    elements: Vec<String>,
    cursor: usize,
    hotkeys: FxHashMap<u32, String>,
}

impl UiNavigation {
    pub fn new() -> Self {
        UiNavigation::default()
    }

    /// Append an element to the end of the navigation order.
    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.push(id.into());
    }

    /// Remove the first occurrence of `id`, keeping the highlight on a
    /// valid element.
    pub fn remove_element(&mut self, id: &str) {
        if let Some(index) = self.elements.iter().position(|element| element == id) {
            self.elements.remove(index);
            if self.cursor >= self.elements.len() {
                self.cursor = self.elements.len().saturating_sub(1);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The currently highlighted element id.
    pub fn highlighted(&self) -> Option<&str> {
        self.elements.get(self.cursor).map(String::as_str)
    }

    /// Move the highlight back to the first element.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Apply a navigation input and return the newly highlighted element.
    ///
    /// Up/down wrap around at the ends of the list. Returns None when no
    /// elements are registered.
    pub fn navigate(&mut self, input: NavigationInput) -> Option<&str> {
        if self.elements.is_empty() {
            return None;
        }
        self.cursor = match input {
            NavigationInput::MoveUp => (self.cursor + self.elements.len() - 1) % self.elements.len(),
            NavigationInput::MoveDown => (self.cursor + 1) % self.elements.len(),
            NavigationInput::MoveToFirst => 0,
            NavigationInput::MoveToLast => self.elements.len() - 1,
        };
        self.highlighted()
    }

    /// Map a keycode to an element id. An existing mapping for the same
    /// keycode is replaced.
    pub fn set_hotkey(&mut self, keycode: u32, element_id: impl Into<String>) {
        self.hotkeys.insert(keycode, element_id.into());
    }

    /// The element mapped to `keycode`, if any. Hotkeys do not move the
    /// navigation cursor.
    pub fn hotkey(&self, keycode: u32) -> Option<&str> {
        self.hotkeys.get(&keycode).map(String::as_str)
    }

    /// Unmap a keycode.
    pub fn unset_hotkey(&mut self, keycode: u32) {
        self.hotkeys.remove(&keycode);
    }

    /// Unmap all hotkeys.
    pub fn clear_hotkeys(&mut self) {
        self.hotkeys.clear();
    }
}
