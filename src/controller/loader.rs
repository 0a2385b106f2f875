//! Content loader: fetch a page fragment, swap it into the content region and
//! re-arm the carousels that fragment contains.
//!
//! CONCURRENCY
//! ===========
//! Loads may overlap; each call takes a new request token and only the
//! response for the newest token is applied. An older response that resolves
//! late is discarded, so the last navigation wins regardless of network order.
//!
//! ERROR HANDLING
//! ==============
//! Failures never escape [`ContentLoader::load_page`]. The content region
//! shows the configured error markup and the error is logged with the page id.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::controller::carousel::{CarouselFactory, CarouselRegistry};
use crate::error::LoadError;
use crate::net::pages::FragmentSource;

/// The shell element whose markup is replaced by each page.
pub trait ContentRegion {
    fn replace(&self, markup: &str);
}

/// How one `load_page` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fragment was inserted and its carousels set up.
    Rendered,
    /// The error markup was inserted.
    Failed(LoadError),
    /// A newer load started before this one resolved; nothing was touched.
    Superseded,
}

pub struct ContentLoader<F: FragmentSource, R: ContentRegion, C: CarouselFactory> {
    config: Rc<SiteConfig>,
    source: F,
    region: R,
    carousels: CarouselRegistry<C>,
    latest_token: Cell<u64>,
}

impl<F: FragmentSource, R: ContentRegion, C: CarouselFactory> ContentLoader<F, R, C> {
    pub fn new(config: Rc<SiteConfig>, source: F, region: R, carousels: CarouselRegistry<C>) -> Self {
        Self { config, source, region, carousels, latest_token: Cell::new(0) }
    }

    pub fn carousels(&self) -> &CarouselRegistry<C> {
        &self.carousels
    }

    /// Token of the most recent load request.
    #[must_use]
    pub fn latest_token(&self) -> u64 {
        self.latest_token.get()
    }

    /// Load `page_id` into the content region.
    ///
    /// Suspends only at the fetch. The page id is used verbatim to build the
    /// fragment path.
    pub async fn load_page(&self, page_id: &str) -> LoadOutcome {
        let token = self.latest_token.get() + 1;
        self.latest_token.set(token);

        let path = self.config.fragment_path(page_id);
        log::debug!("loading page {page_id} from {path} (request {token})");
        let result = self.source.fetch(page_id, &path).await;

        let latest = self.latest_token.get();
        if token != latest {
            log::debug!("discarding response for {page_id}: request {token} superseded by {latest}");
            return LoadOutcome::Superseded;
        }

        // Every live carousel sits inside the region about to be replaced.
        self.carousels.teardown_all();

        match result {
            Ok(markup) => {
                self.region.replace(&markup);
                log::info!("loaded page {page_id} ({} bytes)", markup.len());
                for selector in self.config.carousels_for(page_id) {
                    self.carousels.setup(selector, self.config.slide_interval_ms);
                }
                LoadOutcome::Rendered
            }
            Err(e) => {
                log::error!("failed to load page {}: {e}", e.page_id());
                self.region.replace(&self.config.error_markup);
                LoadOutcome::Failed(e)
            }
        }
    }
}
