use super::*;
use crate::controller::test_helpers::{FakeMenuView, RecordedPages};

// =============================================================
// Helpers
// =============================================================

const NARROW: f64 = 375.0;
const WIDE: f64 = 1280.0;

fn dispatcher() -> (Dispatcher<FakeMenuView, RecordedPages>, FakeMenuView, RecordedPages) {
    let view = FakeMenuView::default();
    let pages = RecordedPages::default();
    let d = Dispatcher::new(view.clone(), pages.clone(), "inicio", 768.0);
    (d, view, pages)
}

fn dropdown_header(i: usize) -> NavLink {
    NavLink::from_attributes(None, None, Some("#".into()), Some(DropdownId(i)))
}

fn page_link(page: &str) -> NavLink {
    NavLink::from_attributes(Some(page.into()), None, Some("#".into()), None)
}

fn external_link() -> NavLink {
    NavLink::from_attributes(None, Some("_blank"), Some("https://example.org".into()), None)
}

fn requested(pages: &RecordedPages) -> Vec<String> {
    pages.requested.borrow().clone()
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_loads_home_once() {
    let (d, _view, pages) = dispatcher();
    assert!(d.bootstrap());
    assert!(!d.bootstrap());
    assert_eq!(requested(&pages), vec!["inicio".to_owned()]);
}

// =============================================================
// Dropdown toggling
// =============================================================

#[test]
fn narrow_dropdown_header_toggles_without_navigation() {
    let (d, view, pages) = dispatcher();
    d.open_overlay();
    let kind = d.on_link_click(&dropdown_header(1), NARROW);
    assert_eq!(kind, LinkKind::DropdownToggle);
    assert!(kind.prevents_default());
    assert!(d.menu().is_expanded(DropdownId(1)));
    assert_eq!(view.submenus.borrow().get(&DropdownId(1)), Some(&true));
    assert!(d.menu().is_overlay_open());
    assert!(requested(&pages).is_empty());
}

#[test]
fn second_click_collapses_dropdown() {
    let (d, view, _pages) = dispatcher();
    d.open_overlay();
    d.on_link_click(&dropdown_header(0), NARROW);
    d.on_link_click(&dropdown_header(0), NARROW);
    assert!(!d.menu().is_expanded(DropdownId(0)));
    assert_eq!(view.submenus.borrow().get(&DropdownId(0)), Some(&false));
}

#[test]
fn wide_dropdown_header_is_suppressed_and_changes_nothing() {
    let (d, view, pages) = dispatcher();
    let kind = d.on_link_click(&dropdown_header(0), WIDE);
    assert_eq!(kind, LinkKind::InertAnchor);
    assert!(kind.prevents_default());
    assert_eq!(d.menu(), MobileMenuState::new());
    assert!(view.submenus.borrow().is_empty());
    assert!(requested(&pages).is_empty());
}

// =============================================================
// Internal navigation
// =============================================================

#[test]
fn page_link_loads_page_and_prevents_default() {
    let (d, _view, pages) = dispatcher();
    let kind = d.on_link_click(&page_link("historia"), WIDE);
    assert!(kind.prevents_default());
    assert_eq!(requested(&pages), vec!["historia".to_owned()]);
}

#[test]
fn page_link_closes_open_overlay_and_collapses_dropdowns() {
    let (d, view, _pages) = dispatcher();
    d.open_overlay();
    d.on_link_click(&dropdown_header(0), NARROW);
    d.on_link_click(&dropdown_header(3), NARROW);
    d.on_link_click(&page_link("historia"), NARROW);
    assert!(!d.menu().is_overlay_open());
    assert_eq!(d.menu().expanded_count(), 0);
    assert!(!view.overlay_open.get());
    assert_eq!(view.visible_submenus(), 0);
}

#[test]
fn page_link_with_closed_overlay_leaves_view_alone() {
    let (d, view, _pages) = dispatcher();
    view.overlay_open.set(false);
    d.on_link_click(&page_link("historia"), WIDE);
    assert!(view.submenus.borrow().is_empty());
}

#[test]
fn dropdown_header_with_page_navigates_on_narrow_viewport() {
    let (d, _view, pages) = dispatcher();
    d.open_overlay();
    let mut link = page_link("institucion");
    link.dropdown = Some(DropdownId(0));
    assert_eq!(d.on_link_click(&link, NARROW), LinkKind::InternalPage);
    assert_eq!(requested(&pages), vec!["institucion".to_owned()]);
    assert!(!d.menu().is_expanded(DropdownId(0)));
    assert!(!d.menu().is_overlay_open());
}

// =============================================================
// External and other links
// =============================================================

#[test]
fn external_link_allows_default_and_closes_overlay() {
    let (d, view, pages) = dispatcher();
    d.open_overlay();
    let kind = d.on_link_click(&external_link(), NARROW);
    assert_eq!(kind, LinkKind::External);
    assert!(!kind.prevents_default());
    assert!(!d.menu().is_overlay_open());
    assert!(!view.overlay_open.get());
    assert!(requested(&pages).is_empty());
}

#[test]
fn passthrough_link_changes_nothing() {
    let (d, view, pages) = dispatcher();
    d.open_overlay();
    let link = NavLink::from_attributes(None, None, Some("/doc.pdf".into()), None);
    let kind = d.on_link_click(&link, NARROW);
    assert!(!kind.prevents_default());
    assert!(d.menu().is_overlay_open());
    assert!(view.overlay_open.get());
    assert!(requested(&pages).is_empty());
}

// =============================================================
// Home link and overlay controls
// =============================================================

#[test]
fn home_click_loads_home_and_closes_overlay() {
    let (d, view, pages) = dispatcher();
    d.open_overlay();
    d.on_home_click();
    assert_eq!(requested(&pages), vec!["inicio".to_owned()]);
    assert!(!view.overlay_open.get());
}

#[test]
fn close_overlay_always_collapses_everything() {
    let (d, view, _pages) = dispatcher();
    for n in 0..4 {
        d.open_overlay();
        for i in 0..n {
            d.toggle_dropdown(DropdownId(i));
        }
        d.close_overlay();
        assert_eq!(d.menu().expanded_count(), 0);
        assert_eq!(view.visible_submenus(), 0);
    }
}

#[test]
fn open_overlay_updates_view() {
    let (d, view, _pages) = dispatcher();
    d.open_overlay();
    assert!(view.overlay_open.get());
    assert!(d.menu().is_overlay_open());
}
