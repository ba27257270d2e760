//! Scratch buffers for connected-component extraction.
//!
//! The visited mask and the BFS frontier are sized to the page and cleared at
//! the start of every extraction, so one workspace serves any number of
//! sequential calls without reallocating for pages of equal or smaller size.
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct SegmentWorkspace {
    pub(crate) visited: Vec<bool>,
    pub(crate) frontier: VecDeque<usize>,
}

impl SegmentWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears state and prepares a mask for `pixels` entries.
    pub fn reset(&mut self, pixels: usize) {
        self.visited.clear();
        self.visited.resize(pixels, false);
        self.frontier.clear();
    }

    /// Pixels currently tracked by the mask.
    pub fn capacity(&self) -> usize {
        self.visited.len()
    }
}
