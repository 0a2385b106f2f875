//! Content region and fire-and-forget page loads.

use std::rc::Rc;

use web_sys::Element;

use super::carousel::DomCarouselFactory;
use crate::controller::dispatcher::PageRequests;
use crate::controller::loader::{ContentLoader, ContentRegion};
use crate::net::pages::HttpFragmentSource;

pub type BrowserLoader = ContentLoader<HttpFragmentSource, DomRegion, DomCarouselFactory>;

/// The shell element that receives each page fragment.
pub struct DomRegion {
    element: Element,
}

impl DomRegion {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ContentRegion for DomRegion {
    fn replace(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }
}

/// Runs each requested load on the browser's microtask queue.
pub struct SpawnedLoads {
    loader: Rc<BrowserLoader>,
}

impl SpawnedLoads {
    #[must_use]
    pub fn new(loader: Rc<BrowserLoader>) -> Self {
        Self { loader }
    }
}

impl PageRequests for SpawnedLoads {
    fn request_page(&self, page_id: &str) {
        let loader = Rc::clone(&self.loader);
        let page_id = page_id.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = loader.load_page(&page_id).await;
            log::debug!("load of {page_id} finished: {outcome:?}");
        });
    }
}
