//! Mobile navigation overlay and dropdown expansion state.
//!
//! Dropdown items are identified by their position among the shell's
//! dropdown-owning list items. The DOM nodes persist across overlay opens, so
//! this state is the single record of which ones are expanded.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::collections::BTreeSet;

/// Class on the menu container while the overlay is open.
pub const MENU_ACTIVE_CLASS: &str = "mobile-active";
/// Class on `<body>` while the overlay is open (overlay styling, scroll lock).
pub const BODY_MENU_OPEN_CLASS: &str = "menu-open";
/// Class on an expanded dropdown list item.
pub const DROPDOWN_OPEN_CLASS: &str = "open";

/// Position of a dropdown-owning item in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropdownId(pub usize);

/// Inline `display` value for a submenu.
#[must_use]
pub fn submenu_display(expanded: bool) -> &'static str {
    if expanded { "flex" } else { "none" }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    overlay_open: bool,
    expanded: BTreeSet<DropdownId>,
}

impl MobileMenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    #[must_use]
    pub fn is_expanded(&self, id: DropdownId) -> bool {
        self.expanded.contains(&id)
    }

    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Close the overlay and collapse every expanded dropdown.
    ///
    /// Returns the dropdowns that were collapsed, in document order, so the
    /// adapter can hide exactly those submenus.
    pub fn close_overlay(&mut self) -> Vec<DropdownId> {
        self.overlay_open = false;
        std::mem::take(&mut self.expanded).into_iter().collect()
    }

    /// Flip one dropdown. Returns whether it is now expanded.
    pub fn toggle_dropdown(&mut self, id: DropdownId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }
}
