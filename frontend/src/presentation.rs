//! Document-level presentation state.
//!
//! The theme/animate/snap/sync-scrollbar/debug attributes and the numeric
//! custom properties the stylesheet reads all live on the root element. This
//! module owns that surface for the lifetime of the page: `init` at mount,
//! `reset` at unmount, and exclusive writer handles for the values that
//! change while the page is up.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::Configuration;
use crate::scroll::model::{ItemVisual, VisualSample};

pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_ANIMATE: &str = "data-animate";
pub const ATTR_SNAP: &str = "data-snap";
pub const ATTR_SYNC_SCROLLBAR: &str = "data-sync-scrollbar";
pub const ATTR_DEBUG: &str = "data-debug";

pub const PROP_START: &str = "--start";
pub const PROP_END: &str = "--end";
pub const PROP_HUE: &str = "--hue";
pub const PROP_CHROMA: &str = "--chroma";
pub const PROP_VIEWPORT_HEIGHT: &str = "--vh";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PresentationError {
    #[error("no window available")]
    NoWindow,
    #[error("no document element available")]
    NoDocument,
    #[error("list item {0} is not mounted")]
    MissingItem(usize),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PresentationError {
    fn from(value: JsValue) -> Self {
        PresentationError::Js(format!("{:?}", value))
    }
}

/// Where presentation values end up: the root element plus the list items.
pub trait PresentationSurface {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PresentationError>;
    fn remove_attribute(&self, name: &str) -> Result<(), PresentationError>;
    fn set_property(&self, name: &str, value: &str) -> Result<(), PresentationError>;
    fn remove_property(&self, name: &str) -> Result<(), PresentationError>;
    fn item_count(&self) -> usize;
    fn set_item_style(&self, index: usize, visual: ItemVisual) -> Result<(), PresentationError>;
    fn clear_item_style(&self, index: usize) -> Result<(), PresentationError>;
}

fn report(result: Result<(), PresentationError>, what: &str) {
    if let Err(e) = result {
        warn!("Presentation update failed ({}): {}", what, e);
    }
}

pub struct PresentationState<S: PresentationSurface> {
    surface: Rc<S>,
    config: Configuration,
    visual_claimed: Rc<Cell<bool>>,
    metric_claimed: Rc<Cell<bool>>,
}

impl<S: PresentationSurface> PresentationState<S> {
    pub fn new(surface: Rc<S>, config: Configuration) -> Self {
        Self {
            surface,
            config,
            visual_claimed: Rc::new(Cell::new(false)),
            metric_claimed: Rc::new(Cell::new(false)),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn surface(&self) -> &Rc<S> {
        &self.surface
    }

    pub fn init(&self) {
        let config = &self.config;
        let attributes = [
            (ATTR_THEME, config.theme.as_str()),
            (ATTR_SYNC_SCROLLBAR, bool_str(config.scroll)),
            (ATTR_ANIMATE, bool_str(config.animate)),
            (ATTR_SNAP, bool_str(config.snap)),
            (ATTR_DEBUG, bool_str(config.debug)),
        ];
        for (name, value) in attributes {
            report(self.surface.set_attribute(name, value), name);
        }

        let start = config.start.to_string();
        let end = config.end.to_string();
        for (name, value) in [
            (PROP_START, start.as_str()),
            (PROP_HUE, start.as_str()),
            (PROP_END, end.as_str()),
            (PROP_CHROMA, "0"),
        ] {
            report(self.surface.set_property(name, value), name);
        }
    }

    pub fn reset(&self) {
        for name in [ATTR_THEME, ATTR_SYNC_SCROLLBAR, ATTR_ANIMATE, ATTR_SNAP, ATTR_DEBUG] {
            report(self.surface.remove_attribute(name), name);
        }
        for name in [PROP_START, PROP_END, PROP_HUE, PROP_CHROMA, PROP_VIEWPORT_HEIGHT] {
            report(self.surface.remove_property(name), name);
        }
    }

    /// Exclusive handle for hue, chroma and item styles. `None` while another
    /// writer is alive.
    pub fn claim_visual_writer(&self) -> Option<VisualWriter<S>> {
        if self.visual_claimed.replace(true) {
            return None;
        }
        Some(VisualWriter {
            surface: self.surface.clone(),
            claimed: self.visual_claimed.clone(),
        })
    }

    /// Exclusive handle for the viewport-height metric.
    pub fn claim_metric_writer(&self) -> Option<MetricWriter<S>> {
        if self.metric_claimed.replace(true) {
            return None;
        }
        Some(MetricWriter {
            surface: self.surface.clone(),
            claimed: self.metric_claimed.clone(),
        })
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub struct VisualWriter<S: PresentationSurface> {
    surface: Rc<S>,
    claimed: Rc<Cell<bool>>,
}

impl<S: PresentationSurface> VisualWriter<S> {
    pub fn item_count(&self) -> usize {
        self.surface.item_count()
    }

    pub fn write(&self, sample: VisualSample) {
        report(
            self.surface.set_property(PROP_HUE, &sample.hue.to_string()),
            "write hue",
        );
        report(
            self.surface.set_property(PROP_CHROMA, &sample.chroma.to_string()),
            "write chroma",
        );
    }

    pub fn write_item(&self, index: usize, visual: ItemVisual) {
        report(self.surface.set_item_style(index, visual), "style list item");
    }

    pub fn clear_item(&self, index: usize) {
        report(self.surface.clear_item_style(index), "clear list item");
    }
}

impl<S: PresentationSurface> Drop for VisualWriter<S> {
    fn drop(&mut self) {
        self.claimed.set(false);
    }
}

pub struct MetricWriter<S: PresentationSurface> {
    surface: Rc<S>,
    claimed: Rc<Cell<bool>>,
}

impl<S: PresentationSurface> MetricWriter<S> {
    /// One hundredth of the window's inner height, as CSS pixels.
    pub fn write_viewport_height(&self, inner_height: f64) {
        let value = format!("{}px", inner_height / 100.0);
        report(
            self.surface.set_property(PROP_VIEWPORT_HEIGHT, &value),
            "write viewport height",
        );
    }
}

impl<S: PresentationSurface> Drop for MetricWriter<S> {
    fn drop(&mut self) {
        self.claimed.set(false);
    }
}

/// Keeps `--vh` in step with the window height. Writes only on change.
pub struct ResizeTracker<S: PresentationSurface> {
    writer: MetricWriter<S>,
    last_height: Cell<Option<f64>>,
}

impl<S: PresentationSurface> ResizeTracker<S> {
    pub fn new(writer: MetricWriter<S>) -> Self {
        Self {
            writer,
            last_height: Cell::new(None),
        }
    }

    pub fn on_resize(&self, inner_height: f64) {
        if self.last_height.get() == Some(inner_height) {
            return;
        }
        self.writer.write_viewport_height(inner_height);
        self.last_height.set(Some(inner_height));
    }
}
