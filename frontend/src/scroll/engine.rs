use std::rc::Rc;

use log::debug;

use crate::host::Viewport;
use crate::presentation::{PresentationSurface, VisualWriter};
use crate::scroll::model::{RegionLayout, VisualModel};

/// Imperative path for browsers without scroll-driven animations.
///
/// Every tick re-measures the list and recomputes hue, chroma and item styles
/// from the current scroll offset alone. The layout buffer is reused so a
/// tick does not allocate once the list has been measured.
pub struct FallbackEngine<S: PresentationSurface, V: Viewport> {
    model: VisualModel,
    writer: VisualWriter<S>,
    viewport: Rc<V>,
    layout: RegionLayout,
    ticks: u64,
}

impl<S: PresentationSurface, V: Viewport> FallbackEngine<S, V> {
    pub fn new(model: VisualModel, writer: VisualWriter<S>, viewport: Rc<V>) -> Self {
        debug!("Fallback engine mounted for {} items", model.item_count());
        Self {
            model,
            writer,
            viewport,
            layout: RegionLayout::default(),
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) {
        if !self.viewport.measure(&mut self.layout) {
            return;
        }
        let count = self.layout.item_centers.len();
        if count != self.model.item_count() {
            self.model = self.model.with_item_count(count);
        }

        self.writer.write(self.model.sample(self.layout.progress()));

        let center = self.layout.viewport_center();
        for (index, item_center) in self.layout.item_centers.iter().enumerate() {
            let visual = self.model.item(index, item_center - center, self.layout.band);
            self.writer.write_item(index, visual);
        }
        self.ticks += 1;
    }

    /// Drops inline item styles and puts hue/chroma back at rest, then
    /// releases the writer.
    pub fn teardown(self) {
        for index in 0..self.writer.item_count() {
            self.writer.clear_item(index);
        }
        self.writer.write(self.model.rest());
        debug!("Fallback engine torn down after {} ticks", self.ticks);
    }
}
