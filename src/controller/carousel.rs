//! Carousel controller and per-selector registry.
//!
//! A [`Carousel`] owns one slide index and at most one repeating timer.
//! Manual navigation cancels the running timer and starts a fresh one, so a
//! click resets the countdown instead of racing the next auto tick.
//!
//! LIFECYCLE
//! =========
//! [`CarouselRegistry`] keeps one controller per container selector. Setting
//! up a selector that is already live tears the old controller down first,
//! and the content loader tears everything down before replacing the content
//! region. A tick that finds its container detached also stops its own timer;
//! the registry forgets such carousels the next time it is consulted.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::state::carousel::CarouselState;

/// Document side of one carousel.
pub trait SlideView {
    fn slide_count(&self) -> usize;
    fn dot_count(&self) -> usize;
    fn set_slide_active(&self, index: usize, active: bool);
    fn set_dot_active(&self, index: usize, active: bool);
    /// Whether the container is still part of the document.
    fn is_attached(&self) -> bool;
}

/// Repeating timers. Dropping a handle cancels its timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Cancel `handle` after the currently running tick has returned.
    fn release(&self, handle: Self::Handle);
}

struct Shared<V: SlideView, S: Scheduler> {
    view: V,
    scheduler: S,
    interval_ms: u32,
    state: RefCell<CarouselState>,
    timer: RefCell<Option<S::Handle>>,
}

/// One live carousel. Clones share the same state and timer.
pub struct Carousel<V: SlideView, S: Scheduler> {
    shared: Rc<Shared<V, S>>,
}

impl<V: SlideView, S: Scheduler> Clone for Carousel<V, S> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

impl<V: SlideView + 'static, S: Scheduler + 'static> Carousel<V, S> {
    /// Show the first slide and start auto-advancing.
    ///
    /// Returns `None` when the view has no slides.
    pub fn mount(view: V, scheduler: S, interval_ms: u32) -> Option<Self> {
        let state = CarouselState::new(view.slide_count(), view.dot_count())?;
        let carousel = Self {
            shared: Rc::new(Shared {
                view,
                scheduler,
                interval_ms,
                state: RefCell::new(state),
                timer: RefCell::new(None),
            }),
        };
        carousel.render();
        carousel.restart_timer();
        Some(carousel)
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.shared.state.borrow().current()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.timer.borrow().is_some()
    }

    /// Previous slide, then restart the countdown.
    pub fn prev(&self) {
        self.shared.state.borrow_mut().prev();
        self.render();
        self.restart_timer();
    }

    /// Next slide, then restart the countdown.
    pub fn next(&self) {
        advance(&self.shared);
        self.restart_timer();
    }

    /// Jump to `index` (wrapped), then restart the countdown.
    pub fn jump(&self, index: i64) {
        self.shared.state.borrow_mut().show(index);
        self.render();
        self.restart_timer();
    }

    /// Stop the timer. The slides keep their current classes.
    pub fn teardown(&self) {
        self.shared.timer.borrow_mut().take();
    }

    fn render(&self) {
        render(&self.shared);
    }

    fn restart_timer(&self) {
        // Cancel before scheduling so two timers never overlap.
        self.shared.timer.borrow_mut().take();
        let weak = Rc::downgrade(&self.shared);
        let handle = self
            .shared
            .scheduler
            .every(self.shared.interval_ms, Box::new(move || auto_tick(&weak)));
        *self.shared.timer.borrow_mut() = Some(handle);
    }
}

fn render<V: SlideView, S: Scheduler>(shared: &Shared<V, S>) {
    let state = shared.state.borrow();
    for i in 0..state.slide_count() {
        shared.view.set_slide_active(i, state.is_slide_active(i));
    }
    let active_dot = state.active_dot();
    for i in 0..state.dot_count() {
        shared.view.set_dot_active(i, active_dot == Some(i));
    }
}

fn advance<V: SlideView, S: Scheduler>(shared: &Shared<V, S>) {
    shared.state.borrow_mut().next();
    render(shared);
}

fn auto_tick<V: SlideView, S: Scheduler>(weak: &Weak<Shared<V, S>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    if !shared.view.is_attached() {
        log::debug!("carousel container left the document; stopping its timer");
        let handle = shared.timer.borrow_mut().take();
        if let Some(handle) = handle {
            shared.scheduler.release(handle);
        }
        return;
    }
    advance(&shared);
}

/// A mounted carousel as the registry sees it.
pub trait MountedCarousel {
    fn teardown(&self);
    /// False once the timer is gone, including after a detached self-stop.
    fn is_running(&self) -> bool;
}

impl<V: SlideView + 'static, S: Scheduler + 'static> MountedCarousel for Carousel<V, S> {
    fn teardown(&self) {
        Carousel::teardown(self);
    }

    fn is_running(&self) -> bool {
        Carousel::is_running(self)
    }
}

/// Finds a carousel container in the current document and mounts it.
pub trait CarouselFactory {
    type Handle: MountedCarousel;

    /// `None` when no container matches or it holds no slides.
    fn mount(&self, selector: &str, interval_ms: u32) -> Option<Self::Handle>;
}

/// One live carousel per container selector.
pub struct CarouselRegistry<F: CarouselFactory> {
    factory: F,
    live: RefCell<BTreeMap<String, F::Handle>>,
}

impl<F: CarouselFactory> CarouselRegistry<F> {
    pub fn new(factory: F) -> Self {
        Self { factory, live: RefCell::new(BTreeMap::new()) }
    }

    /// Mount the carousel at `selector`, replacing any live one.
    ///
    /// Returns whether a carousel is now running. A missing container or one
    /// without slides is not an error; the page just lacks that widget.
    pub fn setup(&self, selector: &str, interval_ms: u32) -> bool {
        self.prune_stopped();
        let previous = self.live.borrow_mut().remove(selector);
        if let Some(previous) = previous {
            previous.teardown();
        }
        match self.factory.mount(selector, interval_ms) {
            Some(handle) => {
                log::debug!("carousel {selector} set up ({interval_ms} ms)");
                self.live.borrow_mut().insert(selector.to_owned(), handle);
                true
            }
            None => {
                log::debug!("carousel {selector} skipped: no container or no slides");
                false
            }
        }
    }

    /// Stop and forget every live carousel.
    pub fn teardown_all(&self) {
        let live = std::mem::take(&mut *self.live.borrow_mut());
        for handle in live.values() {
            handle.teardown();
        }
    }

    /// Forget carousels that stopped themselves, releasing their listeners.
    pub fn prune_stopped(&self) {
        let stopped: Vec<F::Handle> = {
            let mut live = self.live.borrow_mut();
            let dead: Vec<String> =
                live.iter().filter(|(_, handle)| !handle.is_running()).map(|(selector, _)| selector.clone()).collect();
            dead.iter().filter_map(|selector| live.remove(selector)).collect()
        };
        if !stopped.is_empty() {
            log::debug!("pruned {} stopped carousel(s)", stopped.len());
        }
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.prune_stopped();
        self.live.borrow().len()
    }

    #[must_use]
    pub fn is_live(&self, selector: &str) -> bool {
        self.prune_stopped();
        self.live.borrow().contains_key(selector)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
