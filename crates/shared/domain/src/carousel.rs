/// Position of a non-looping carousel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Steps back one slide. Returns `false` at the first slide.
    pub const fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Steps forward one slide. Returns `false` at the last slide.
    pub const fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        true
    }
}
