//! Slide index bookkeeping for one carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Wrap `index` into `[0, count)` by a single step.
///
/// Anything at or past the end goes to the first slide and anything negative
/// goes to the last one. Navigation only ever moves by one, so a single wrap
/// is enough and keeps far-out requests from landing mid-carousel.
#[must_use]
pub fn normalize_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if index < 0 {
        return count - 1;
    }
    match usize::try_from(index) {
        Ok(i) if i < count => i,
        _ => 0,
    }
}

/// Slide index a dot jumps to.
///
/// `raw` is the dot's `data-slide` value. Its leading integer is used, so
/// `"2abc"` targets 2 and `"1.5"` targets 1; a missing value or one with no
/// leading digits falls back to the dot's own `position` in its group.
#[must_use]
pub fn dot_target(raw: Option<&str>, position: usize) -> i64 {
    raw.and_then(leading_integer)
        .unwrap_or_else(|| i64::try_from(position).unwrap_or(i64::MAX))
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse::<i64>().ok()
}

/// Index state for one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    dot_count: usize,
    current: usize,
}

impl CarouselState {
    /// Build state for a carousel with at least one slide.
    ///
    /// Returns `None` for an empty carousel; such a widget is simply not set up.
    #[must_use]
    pub fn new(slide_count: usize, dot_count: usize) -> Option<Self> {
        (slide_count > 0).then_some(Self { slide_count, dot_count, current: 0 })
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Move to `index` (wrapped) and return the new current index.
    ///
    /// The only mutator of the current index.
    pub fn show(&mut self, index: i64) -> usize {
        self.current = normalize_index(index, self.slide_count);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.show(self.offset(1))
    }

    pub fn prev(&mut self) -> usize {
        self.show(self.offset(-1))
    }

    #[must_use]
    pub fn is_slide_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// The dot that mirrors the current slide, if the carousel has one.
    #[must_use]
    pub fn active_dot(&self) -> Option<usize> {
        (self.current < self.dot_count).then_some(self.current)
    }

    fn offset(&self, delta: i64) -> i64 {
        i64::try_from(self.current).map_or(0, |c| c.saturating_add(delta))
    }
}
