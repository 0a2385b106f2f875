//! Site configuration.
//!
//! Defaults describe the shipped shell. A shell may override any field by
//! embedding a JSON object in `<script type="application/json" id="site-config">`;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_HOME_PAGE: &str = "inicio";
pub const DEFAULT_PAGES_DIR: &str = "pages";
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 4000;
pub const DEFAULT_ERROR_MARKUP: &str = "<p>Error al cargar la página. Por favor, intente de nuevo más tarde.</p>";

/// Element id of the embedded config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub home_page: String,
    pub pages_dir: String,
    pub mobile_breakpoint_px: f64,
    pub slide_interval_ms: u32,
    /// Page id to the carousel container selectors present in that fragment.
    pub carousels: HashMap<String, Vec<String>>,
    pub error_markup: String,
    pub log_level: String,
    pub selectors: ShellSelectors,
}

/// Where the controller finds its pieces of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellSelectors {
    /// Element id of the content region.
    pub content: String,
    /// Element id of the home link.
    pub home_link: String,
    /// Element id of the mobile menu open control.
    pub menu_toggle: String,
    /// Element id of the mobile menu close control.
    pub menu_close: String,
    /// Element id of the navigation menu container.
    pub menu: String,
    /// CSS selector for every navigation link.
    pub nav_links: String,
    /// CSS selector for every dropdown-owning list item.
    pub dropdown_items: String,
}

impl Default for ShellSelectors {
    fn default() -> Self {
        Self {
            content: "page-content".to_owned(),
            home_link: "home-link".to_owned(),
            menu_toggle: "mobile-menu-toggle".to_owned(),
            menu_close: "mobile-menu-close".to_owned(),
            menu: "main-nav-menu".to_owned(),
            nav_links: ".main-nav a".to_owned(),
            dropdown_items: "#main-nav-menu li.has-dropdown".to_owned(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let carousels = [("inicio", "#inicio-carousel"), ("historia", "#historia-carousel")]
            .into_iter()
            .map(|(page, selector)| (page.to_owned(), vec![selector.to_owned()]))
            .collect();
        Self {
            home_page: DEFAULT_HOME_PAGE.to_owned(),
            pages_dir: DEFAULT_PAGES_DIR.to_owned(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            carousels,
            error_markup: DEFAULT_ERROR_MARKUP.to_owned(),
            log_level: "info".to_owned(),
            selectors: ShellSelectors::default(),
        }
    }
}

impl SiteConfig {
    /// Parse an embedded config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        // Derived struct impls also take positional arrays; only objects are valid.
        let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        Ok(serde_json::from_value(serde_json::Value::Object(fields))?)
    }

    /// Parse `raw` when present, falling back to defaults on absence or error.
    #[must_use]
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    /// Carousel selectors to set up after `page_id` is rendered.
    #[must_use]
    pub fn carousels_for(&self, page_id: &str) -> &[String] {
        self.carousels.get(page_id).map_or(&[], Vec::as_slice)
    }

    /// Location of the fragment for `page_id`, relative to the app root.
    #[must_use]
    pub fn fragment_path(&self, page_id: &str) -> String {
        crate::net::pages::fragment_path(&self.pages_dir, page_id)
    }

    /// Configured log filter; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }
}
