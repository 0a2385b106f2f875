//! Controllers that drive the shell.
//!
//! ARCHITECTURE
//! ============
//! Each controller owns its state and talks to the document only through a
//! small trait (`SlideView`, `ContentRegion`, `MenuView`, ...). The `dom`
//! module implements those traits with web-sys; tests implement them with
//! in-memory fakes.
//!
//! Control flow: a click reaches the [`dispatcher`], which updates menu state
//! and asks the [`loader`] for a page; the loader swaps the content region and
//! re-arms the [`carousel`]s that live in the new fragment.

pub mod carousel;
pub mod dispatcher;
pub mod loader;

// =============================================================================
// TEST HELPERS
// =============================================================================
