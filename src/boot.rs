//! WASM entry point: read config, start logging, wire the shell.
//!
//! Runs once per document. Installation waits for `DOMContentLoaded` unless
//! the document has already finished parsing.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::controller::carousel::CarouselRegistry;
use crate::controller::dispatcher::Dispatcher;
use crate::controller::loader::ContentLoader;
use crate::dom::carousel::DomCarouselFactory;
use crate::dom::content::{DomRegion, SpawnedLoads};
use crate::dom::menu::DomMenu;
use crate::dom::{Listener, document, query_document, viewport_width};
use crate::net::pages::HttpFragmentSource;

type BrowserDispatcher = Dispatcher<DomMenu, SpawnedLoads>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logging unavailable: {e}").into());
    }
    log::set_max_level(log::LevelFilter::Info);

    let Some(document) = document() else {
        log::warn!("no document; site shell not installed");
        return;
    };
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = SiteConfig::from_embedded(raw.as_deref());
    log::set_max_level(config.log_filter());

    when_ready(&document, config);
}

fn when_ready(document: &Document, config: SiteConfig) {
    if document.ready_state() != "loading" {
        install(document, config);
        return;
    }
    let mut pending = Some(config);
    let doc = document.clone();
    if let Some(listener) = Listener::new(document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            install(&doc, config);
        }
    }) {
        listener.forget();
    }
}

/// Wire every shell control and load the home page.
pub fn install(document: &Document, config: SiteConfig) {
    let config = Rc::new(config);
    let selectors = &config.selectors;
    let Some(content) = document.get_element_by_id(&selectors.content) else {
        log::warn!("content region #{} missing; site shell not installed", selectors.content);
        return;
    };

    let carousels = CarouselRegistry::new(DomCarouselFactory::new(document.clone()));
    let loader = Rc::new(ContentLoader::new(
        Rc::clone(&config),
        HttpFragmentSource,
        DomRegion::new(content),
        carousels,
    ));
    let dispatcher = Rc::new(Dispatcher::new(
        DomMenu::from_document(document, selectors),
        SpawnedLoads::new(loader),
        config.home_page.clone(),
        config.mobile_breakpoint_px,
    ));

    wire_menu_controls(document, &config, &dispatcher);
    for link in query_document(document, &selectors.nav_links) {
        wire_nav_link(link, &dispatcher);
    }
    match document.get_element_by_id(&selectors.home_link) {
        Some(home) => {
            let dispatcher = Rc::clone(&dispatcher);
            keep(Listener::new(&home, "click", move |event| {
                event.prevent_default();
                dispatcher.on_home_click();
            }));
        }
        None => log::debug!("no home link #{}", selectors.home_link),
    }

    log::info!("site shell installed");
    dispatcher.bootstrap();
}

fn wire_menu_controls(document: &Document, config: &SiteConfig, dispatcher: &Rc<BrowserDispatcher>) {
    let selectors = &config.selectors;
    let toggle = document.get_element_by_id(&selectors.menu_toggle);
    let close = document.get_element_by_id(&selectors.menu_close);
    let menu = document.get_element_by_id(&selectors.menu);
    let (Some(toggle), Some(close), Some(_)) = (toggle, close, menu) else {
        log::warn!("mobile menu controls incomplete; overlay toggle not wired");
        return;
    };

    let open_with = Rc::clone(dispatcher);
    keep(Listener::new(&toggle, "click", move |_| open_with.open_overlay()));
    let close_with = Rc::clone(dispatcher);
    keep(Listener::new(&close, "click", move |_| close_with.close_overlay()));
}

fn wire_nav_link(link: Element, dispatcher: &Rc<BrowserDispatcher>) {
    let dispatcher = Rc::clone(dispatcher);
    let target = link.clone();
    keep(Listener::new(&link, "click", move |event| {
        let nav_link = dispatcher.view().read_link(&target);
        let kind = dispatcher.on_link_click(&nav_link, viewport_width());
        if kind.prevents_default() {
            event.prevent_default();
        }
    }));
}

fn keep(listener: Option<Listener>) {
    if let Some(listener) = listener {
        listener.forget();
    }
}
