//! # site-shell
//!
//! Client-side controller for a single-page informational site. Page
//! fragments are fetched and swapped into a fixed HTML shell, carousels on
//! the freshly inserted markup are re-armed, and the mobile navigation
//! overlay with its nested dropdowns is kept in a consistent state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure state and transitions: carousel index, menu state, link classification |
//! | [`controller`] | Carousel lifecycle, content loader and click dispatcher, generic over DOM seams |
//! | [`net`] | Fragment locations and response classification |
//! | [`config`] | Site configuration with shell-embedded overrides |
//! | [`error`] | Load and configuration errors |
//! | `dom` | web-sys implementations of the controller seams (feature `browser`) |
//! | `boot` | WASM entry point that wires the shell (feature `browser`) |
//!
//! Everything outside `dom` and `boot` is browser-free so the navigation
//! and carousel logic can be tested natively.

pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;

#[cfg(feature = "browser")]
pub mod boot;
#[cfg(feature = "browser")]
pub mod dom;
