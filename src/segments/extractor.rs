use super::region_accumulator::{Component, RegionAccumulator};
use super::workspace::SegmentWorkspace;
use crate::error::{PanelError, Result};
use crate::gutter::GutterClassifier;
use crate::image::ImageView;
use std::sync::atomic::{AtomicBool, Ordering};

pub(super) struct ComponentExtractor<'a, I: ImageView> {
    image: &'a I,
    classifier: GutterClassifier,
    width: usize,
    height: usize,
    workspace: &'a mut SegmentWorkspace,
    region: RegionAccumulator,
    components: Vec<Component>,
}

impl<'a, I: ImageView> ComponentExtractor<'a, I> {
    pub(super) fn new(
        image: &'a I,
        classifier: GutterClassifier,
        workspace: &'a mut SegmentWorkspace,
    ) -> Self {
        let width = image.width();
        let height = image.height();
        workspace.reset(width * height);
        Self {
            image,
            classifier,
            width,
            height,
            workspace,
            region: RegionAccumulator::new(),
            components: Vec::new(),
        }
    }

    pub(super) fn extract(mut self) -> Vec<Component> {
        for y in 0..self.height {
            self.scan_row(y);
        }
        self.components
    }

    /// Like [`extract`](Self::extract), polling `cancel` before every
    /// `check_rows`-th row.
    pub(super) fn extract_cancellable(
        mut self,
        cancel: &AtomicBool,
        check_rows: usize,
    ) -> Result<Vec<Component>> {
        let check_rows = check_rows.max(1);
        for y in 0..self.height {
            if y % check_rows == 0 && cancel.load(Ordering::Relaxed) {
                return Err(PanelError::Cancelled { rows_scanned: y });
            }
            self.scan_row(y);
        }
        Ok(self.components)
    }

    fn scan_row(&mut self, y: usize) {
        let image = self.image;
        let row = image.row(y);
        let base = y * self.width;
        for x in 0..self.width {
            let idx = base + x;
            if self.workspace.visited[idx] {
                continue;
            }
            self.workspace.visited[idx] = true;
            let i = x * I::CHANNELS;
            if self.classifier.is_gutter(row[i], row[i + 1], row[i + 2]) {
                continue;
            }
            self.grow_region(idx, x, y);
            self.components.push(self.region.to_component());
        }
    }

    /// Breadth-first expansion from an already-visited ink seed.
    fn grow_region(&mut self, seed: usize, seed_x: usize, seed_y: usize) {
        self.region.reset(seed_x, seed_y);
        self.workspace.frontier.push_back(seed);

        while let Some(idx) = self.workspace.frontier.pop_front() {
            let x = idx % self.width;
            let y = idx / self.width;
            self.region.push(x, y);

            // up, down, left, right
            if y > 0 {
                self.visit(idx - self.width, x, y - 1);
            }
            if y + 1 < self.height {
                self.visit(idx + self.width, x, y + 1);
            }
            if x > 0 {
                self.visit(idx - 1, x - 1, y);
            }
            if x + 1 < self.width {
                self.visit(idx + 1, x + 1, y);
            }
        }
    }

    /// Marks a neighbour visited on first contact and enqueues it only when it
    /// is ink. Gutter neighbours are consumed here and never reconsidered.
    #[inline]
    fn visit(&mut self, idx: usize, x: usize, y: usize) {
        if self.workspace.visited[idx] {
            return;
        }
        self.workspace.visited[idx] = true;
        if !self.classifier.is_gutter_rgb(self.image.rgb(x, y)) {
            self.workspace.frontier.push_back(idx);
        }
    }
}
