//! Carousel containers in the live document.

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, Element};

use super::{Listener, query_all, query_one, set_class};
use crate::controller::carousel::{Carousel, CarouselFactory, MountedCarousel, Scheduler, SlideView};
use crate::state::carousel::dot_target;

const SLIDE_SELECTOR: &str = ".carousel-img";
const PREV_SELECTOR: &str = ".prev-btn";
const NEXT_SELECTOR: &str = ".next-btn";
const DOTS_SELECTOR: &str = ".carousel-dots";
const DOT_SELECTOR: &str = ".dot";
const DOT_TARGET_ATTR: &str = "data-slide";
const ACTIVE_CLASS: &str = "active";

pub struct DomSlides {
    container: Element,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl SlideView for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_slide_active(&self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get(index) {
            set_class(slide, ACTIVE_CLASS, active);
        }
    }

    fn set_dot_active(&self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get(index) {
            set_class(dot, ACTIVE_CLASS, active);
        }
    }

    fn is_attached(&self) -> bool {
        self.container.is_connected()
    }
}

/// `setInterval` via gloo; dropping the `Interval` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(interval_ms, tick)
    }

    fn release(&self, handle: Interval) {
        // The tick that asks for release is still running inside this interval's closure.
        Timeout::new(0, move || drop(handle)).forget();
    }
}

pub type BrowserCarousel = Carousel<DomSlides, GlooScheduler>;

/// A mounted carousel plus the click listeners on its controls.
pub struct DomCarousel {
    carousel: BrowserCarousel,
    _listeners: Vec<Listener>,
}

impl MountedCarousel for DomCarousel {
    fn teardown(&self) {
        self.carousel.teardown();
    }

    fn is_running(&self) -> bool {
        self.carousel.is_running()
    }
}

pub struct DomCarouselFactory {
    document: Document,
}

impl DomCarouselFactory {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("invalid carousel selector {selector}: {e:?}");
                None
            }
        }
    }
}

impl CarouselFactory for DomCarouselFactory {
    type Handle = DomCarousel;

    fn mount(&self, selector: &str, interval_ms: u32) -> Option<DomCarousel> {
        let container = self.find(selector)?;
        let slides = query_all(&container, SLIDE_SELECTOR);
        let dots = query_one(&container, DOTS_SELECTOR).map_or_else(Vec::new, |group| query_all(&group, DOT_SELECTOR));
        let prev = query_one(&container, PREV_SELECTOR);
        let next = query_one(&container, NEXT_SELECTOR);

        let view = DomSlides { container, slides, dots: dots.clone() };
        let carousel = Carousel::mount(view, GlooScheduler, interval_ms)?;

        let mut listeners = Vec::new();
        if let Some(prev) = prev {
            let carousel = carousel.clone();
            listeners.extend(Listener::new(&prev, "click", move |_| carousel.prev()));
        }
        if let Some(next) = next {
            let carousel = carousel.clone();
            listeners.extend(Listener::new(&next, "click", move |_| carousel.next()));
        }
        for (position, dot) in dots.into_iter().enumerate() {
            let carousel = carousel.clone();
            let target = dot.clone();
            listeners.extend(Listener::new(&dot, "click", move |_| {
                carousel.jump(dot_target(target.get_attribute(DOT_TARGET_ATTR).as_deref(), position));
            }));
        }

        Some(DomCarousel { carousel, _listeners: listeners })
    }
}
