//! Mobile menu elements and navigation link reading.

use web_sys::{Document, Element, HtmlElement};

use super::{query_document, query_one, set_class, set_display};
use crate::config::ShellSelectors;
use crate::controller::dispatcher::MenuView;
use crate::state::menu::{BODY_MENU_OPEN_CLASS, DROPDOWN_OPEN_CLASS, DropdownId, MENU_ACTIVE_CLASS, submenu_display};
use crate::state::nav::NavLink;

/// Class marking a list item that owns a nested submenu.
const DROPDOWN_OWNER_CLASS: &str = "has-dropdown";

pub struct DomMenu {
    menu: Option<Element>,
    body: Option<HtmlElement>,
    dropdowns: Vec<Element>,
}

impl DomMenu {
    #[must_use]
    pub fn from_document(document: &Document, selectors: &ShellSelectors) -> Self {
        Self {
            menu: document.get_element_by_id(&selectors.menu),
            body: document.body(),
            dropdowns: query_document(document, &selectors.dropdown_items),
        }
    }

    /// Dropdown owned by `item`, if it is one of the shell's dropdown items.
    #[must_use]
    pub fn dropdown_id(&self, item: &Element) -> Option<DropdownId> {
        self.dropdowns.iter().position(|d| d.is_same_node(Some(item.as_ref()))).map(DropdownId)
    }

    /// Read a link's attributes at click time.
    #[must_use]
    pub fn read_link(&self, link: &Element) -> NavLink {
        let dropdown = match link.closest("li") {
            Ok(Some(li)) if li.class_list().contains(DROPDOWN_OWNER_CLASS) => self.dropdown_id(&li),
            Ok(_) => None,
            Err(e) => {
                log::debug!("closest(li) failed: {e:?}");
                None
            }
        };
        NavLink::from_attributes(
            link.get_attribute("data-page"),
            link.get_attribute("target").as_deref(),
            link.get_attribute("href"),
            dropdown,
        )
    }
}

impl MenuView for DomMenu {
    fn show_overlay(&self, open: bool) {
        if let Some(menu) = &self.menu {
            set_class(menu, MENU_ACTIVE_CLASS, open);
        }
        if let Some(body) = &self.body {
            set_class(body, BODY_MENU_OPEN_CLASS, open);
        }
    }

    fn show_dropdown(&self, id: DropdownId, expanded: bool) {
        let Some(item) = self.dropdowns.get(id.0) else {
            return;
        };
        set_class(item, DROPDOWN_OPEN_CLASS, expanded);
        if let Some(submenu) = query_one(item, "ul") {
            set_display(&submenu, submenu_display(expanded));
        }
    }
}
