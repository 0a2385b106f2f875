//! Networking for page fragments.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages` is the only network surface: a plain `GET` of a static HTML
//! fragment relative to the application root.

pub mod pages;
