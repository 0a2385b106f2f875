//! Navigation link model and click classification.
//!
//! A click is classified from the link's attributes and the viewport width at
//! the moment of the click. Nothing is cached: the same link may classify
//! differently after a resize.
//!
//! PRECEDENCE
//! ==========
//! [`CLASSIFIERS`] is evaluated top to bottom and the first match wins:
//!
//! | # | Kind | Matches when |
//! |---|------|--------------|
//! | 1 | [`LinkKind::DropdownToggle`] | narrow viewport, parent item owns a dropdown, no page id, not external |
//! | 2 | [`LinkKind::InternalPage`] | link carries a page id |
//! | 3 | [`LinkKind::External`] | link opens a new browsing context |
//! | 4 | [`LinkKind::InertAnchor`] | `href` is the bare `#` placeholder |
//! | - | [`LinkKind::Passthrough`] | nothing above matched |
//!
//! Rule 1 requires the absence of a page id, so a dropdown header that also
//! names a page falls through to rule 2 and navigates.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::menu::DropdownId;

/// `target` value marking a link that opens a new tab.
pub const EXTERNAL_TARGET: &str = "_blank";
/// `href` value of a link with no real destination.
pub const INERT_HREF: &str = "#";

/// A navigation link as read from the DOM at click time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLink {
    /// Fragment to load; never an empty string.
    pub page_id: Option<String>,
    pub is_external: bool,
    /// Dropdown owned by the link's parent list item.
    pub dropdown: Option<DropdownId>,
    pub href: Option<String>,
}

impl NavLink {
    /// Build a link from raw attribute values.
    ///
    /// An empty `data-page` counts as no page id.
    #[must_use]
    pub fn from_attributes(
        data_page: Option<String>,
        target: Option<&str>,
        href: Option<String>,
        dropdown: Option<DropdownId>,
    ) -> Self {
        Self {
            page_id: data_page.filter(|p| !p.is_empty()),
            is_external: target == Some(EXTERNAL_TARGET),
            dropdown,
            href,
        }
    }

    #[must_use]
    pub fn has_dropdown(&self) -> bool {
        self.dropdown.is_some()
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.href.as_deref() == Some(INERT_HREF)
    }
}

/// Viewport width sampled at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub breakpoint: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, breakpoint: f64) -> Self {
        Self { width, breakpoint }
    }

    /// Mobile layout: width at or below the breakpoint.
    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.width <= self.breakpoint
    }
}

/// What a click on a link means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    DropdownToggle,
    InternalPage,
    External,
    InertAnchor,
    /// Ordinary link; the browser navigates and no state changes.
    Passthrough,
}

impl LinkKind {
    /// Whether the browser's default navigation is suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::DropdownToggle | Self::InternalPage | Self::InertAnchor)
    }

    /// Whether an open overlay is closed as part of handling the click.
    #[must_use]
    pub fn closes_overlay(self) -> bool {
        matches!(self, Self::InternalPage | Self::External)
    }
}

/// One row of the precedence table.
#[derive(Clone, Copy)]
pub struct Classifier {
    pub kind: LinkKind,
    pub matches: fn(&NavLink, &Viewport) -> bool,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier").field("kind", &self.kind).finish_non_exhaustive()
    }
}

fn is_dropdown_toggle(link: &NavLink, viewport: &Viewport) -> bool {
    viewport.is_narrow() && link.has_dropdown() && link.page_id.is_none() && !link.is_external
}

fn is_internal_page(link: &NavLink, _viewport: &Viewport) -> bool {
    link.page_id.is_some()
}

fn is_external(link: &NavLink, _viewport: &Viewport) -> bool {
    link.is_external
}

fn is_inert_anchor(link: &NavLink, _viewport: &Viewport) -> bool {
    link.is_inert()
}

/// Ordered classification rules; see the module docs.
pub const CLASSIFIERS: [Classifier; 4] = [
    Classifier { kind: LinkKind::DropdownToggle, matches: is_dropdown_toggle },
    Classifier { kind: LinkKind::InternalPage, matches: is_internal_page },
    Classifier { kind: LinkKind::External, matches: is_external },
    Classifier { kind: LinkKind::InertAnchor, matches: is_inert_anchor },
];

/// First matching rule in [`CLASSIFIERS`], or [`LinkKind::Passthrough`].
#[must_use]
pub fn classify(link: &NavLink, viewport: &Viewport) -> LinkKind {
    CLASSIFIERS
        .iter()
        .find(|rule| (rule.matches)(link, viewport))
        .map_or(LinkKind::Passthrough, |rule| rule.kind)
}
