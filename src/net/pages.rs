//! Page fragment fetching.
//!
//! Browser (feature `browser`): real HTTP calls via `gloo-net`.
//! Native builds only get the path and status helpers plus the
//! [`FragmentSource`] seam that tests fake.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status and a failed request both become a [`LoadError`]; the
//! loader decides what the user sees.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::future::Future;

use crate::error::LoadError;

/// Something that can deliver the markup of a page fragment.
pub trait FragmentSource {
    /// Fetch the fragment for `page_id` located at `path`.
    fn fetch(&self, page_id: &str, path: &str) -> impl Future<Output = Result<String, LoadError>>;
}

/// `"{pages_dir}/{page_id}.html"`. The page id is used verbatim.
#[must_use]
pub fn fragment_path(pages_dir: &str, page_id: &str) -> String {
    let dir = pages_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{page_id}.html")
    } else {
        format!("{dir}/{page_id}.html")
    }
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a response status to the load error it implies, if any.
///
/// # Errors
///
/// Returns [`LoadError::FragmentUnavailable`] for any non-2xx status.
pub fn check_status(page_id: &str, status: u16) -> Result<(), LoadError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(LoadError::FragmentUnavailable { page_id: page_id.to_owned(), status })
    }
}

#[cfg(any(test, feature = "browser"))]
fn transport_failure(page_id: &str, err: &impl std::fmt::Display) -> LoadError {
    LoadError::TransportFailure { page_id: page_id.to_owned(), message: err.to_string() }
}

/// Fetches fragments over HTTP with the browser's `fetch`.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFragmentSource;

#[cfg(feature = "browser")]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, page_id: &str, path: &str) -> Result<String, LoadError> {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| transport_failure(page_id, &e))?;
        check_status(page_id, resp.status())?;
        resp.text().await.map_err(|e| transport_failure(page_id, &e))
    }
}
