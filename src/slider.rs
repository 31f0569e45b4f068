// src/slider.rs

/// Position of the hero slider.
///
/// Pure state: whoever owns the autoplay timer calls [`SliderState::next`] on
/// each tick and resets its own timer after manual navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    len: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `idx`, wrapping in both directions. No-op without slides.
    pub fn go_to(&mut self, idx: isize) -> usize {
        if self.len > 0 {
            self.current = idx.rem_euclid(self.len as isize) as usize;
        }
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }
}
