//! Navigation dispatcher: routes clicks on navigation links, the home link and
//! the mobile menu controls.
//!
//! Classification lives in [`crate::state::nav`]; this module applies the
//! result. Page loads are fire-and-forget requests so a click handler never
//! waits on the network.

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

use std::cell::{Cell, RefCell};

use crate::state::menu::{DropdownId, MobileMenuState};
use crate::state::nav::{LinkKind, NavLink, Viewport, classify};

/// Document side of the mobile menu.
pub trait MenuView {
    fn show_overlay(&self, open: bool);
    fn show_dropdown(&self, id: DropdownId, expanded: bool);
}

/// Starts a page load without waiting for it.
pub trait PageRequests {
    fn request_page(&self, page_id: &str);
}

pub struct Dispatcher<M: MenuView, P: PageRequests> {
    menu: RefCell<MobileMenuState>,
    view: M,
    pages: P,
    home_page: String,
    breakpoint: f64,
    booted: Cell<bool>,
}

impl<M: MenuView, P: PageRequests> Dispatcher<M, P> {
    pub fn new(view: M, pages: P, home_page: impl Into<String>, breakpoint: f64) -> Self {
        Self {
            menu: RefCell::new(MobileMenuState::new()),
            view,
            pages,
            home_page: home_page.into(),
            breakpoint,
            booted: Cell::new(false),
        }
    }

    pub fn view(&self) -> &M {
        &self.view
    }

    /// Snapshot of the menu state.
    #[must_use]
    pub fn menu(&self) -> MobileMenuState {
        self.menu.borrow().clone()
    }

    /// Load the home page. Only the first call does anything.
    pub fn bootstrap(&self) -> bool {
        if self.booted.replace(true) {
            return false;
        }
        log::debug!("bootstrapping with home page {}", self.home_page);
        self.pages.request_page(&self.home_page);
        true
    }

    /// Handle a click on a navigation link.
    ///
    /// `viewport_width` is sampled by the caller at click time. The returned
    /// kind tells the caller whether to suppress the browser default
    /// ([`LinkKind::prevents_default`]).
    pub fn on_link_click(&self, link: &NavLink, viewport_width: f64) -> LinkKind {
        let kind = classify(link, &Viewport::new(viewport_width, self.breakpoint));
        match kind {
            LinkKind::DropdownToggle => {
                if let Some(id) = link.dropdown {
                    self.toggle_dropdown(id);
                }
            }
            LinkKind::InternalPage => {
                if let Some(page_id) = link.page_id.as_deref() {
                    self.pages.request_page(page_id);
                }
            }
            LinkKind::External | LinkKind::InertAnchor | LinkKind::Passthrough => {}
        }
        if kind.closes_overlay() {
            self.close_overlay_if_open();
        }
        kind
    }

    /// Handle a click on the home link. The default is always suppressed.
    pub fn on_home_click(&self) {
        self.pages.request_page(&self.home_page);
        self.close_overlay_if_open();
    }

    pub fn open_overlay(&self) {
        self.menu.borrow_mut().open_overlay();
        self.view.show_overlay(true);
    }

    /// Close the overlay and collapse every dropdown.
    pub fn close_overlay(&self) {
        let collapsed = self.menu.borrow_mut().close_overlay();
        self.view.show_overlay(false);
        for id in collapsed {
            self.view.show_dropdown(id, false);
        }
    }

    pub fn toggle_dropdown(&self, id: DropdownId) {
        let expanded = self.menu.borrow_mut().toggle_dropdown(id);
        self.view.show_dropdown(id, expanded);
    }

    fn close_overlay_if_open(&self) {
        let open = self.menu.borrow().is_overlay_open();
        if open {
            self.close_overlay();
        }
    }
}
