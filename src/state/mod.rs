//! Pure state and transitions.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. Controllers own these values and an outer
//! adapter mirrors them onto elements, so every transition is testable
//! without a browser.

pub mod carousel;
pub mod menu;
pub mod nav;
