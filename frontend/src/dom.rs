//! `web-sys` side of the presentation surface, viewport and event source.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, Window};

use crate::config::Configuration;
use crate::host::{EventSource, HostEvent, Viewport};
use crate::presentation::{PresentationError, PresentationState, PresentationSurface};
use crate::scroll::model::{ItemVisual, RegionLayout};
use crate::scroll::{self, capability, AnimationMount};

pub type DocumentMount = AnimationMount<DocumentSurface, WindowViewport, ListenerGuard>;

fn list_items(list: &Element) -> Vec<HtmlElement> {
    let children = list.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// The `<html>` element plus the list items it styles.
pub struct DocumentSurface {
    root: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DocumentSurface {
    pub fn attach(list: &Element) -> Result<Self, PresentationError> {
        let document = window()
            .ok_or(PresentationError::NoWindow)?
            .document()
            .ok_or(PresentationError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or(PresentationError::NoDocument)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PresentationError::NoDocument)?;
        Ok(Self {
            root,
            items: list_items(list),
        })
    }

    fn item(&self, index: usize) -> Result<&HtmlElement, PresentationError> {
        self.items
            .get(index)
            .ok_or(PresentationError::MissingItem(index))
    }
}

impl PresentationSurface for DocumentSurface {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PresentationError> {
        Ok(self.root.set_attribute(name, value)?)
    }

    fn remove_attribute(&self, name: &str) -> Result<(), PresentationError> {
        Ok(self.root.remove_attribute(name)?)
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), PresentationError> {
        Ok(self.root.style().set_property(name, value)?)
    }

    fn remove_property(&self, name: &str) -> Result<(), PresentationError> {
        self.root.style().remove_property(name)?;
        Ok(())
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_item_style(&self, index: usize, visual: ItemVisual) -> Result<(), PresentationError> {
        let style = self.item(index)?.style();
        style.set_property("opacity", &visual.opacity.to_string())?;
        if visual.brightness == 1.0 {
            style.remove_property("filter")?;
        } else {
            style.set_property("filter", &format!("brightness({})", visual.brightness))?;
        }
        Ok(())
    }

    fn clear_item_style(&self, index: usize) -> Result<(), PresentationError> {
        let style = self.item(index)?.style();
        style.remove_property("opacity")?;
        style.remove_property("filter")?;
        Ok(())
    }
}

/// Window scroll position plus the list items' positions in the document.
pub struct WindowViewport {
    window: Window,
    list: Element,
}

impl WindowViewport {
    pub fn new(window: Window, list: Element) -> Self {
        Self { window, list }
    }
}

impl Viewport for WindowViewport {
    fn inner_height(&self) -> Option<f64> {
        self.window.inner_height().ok()?.as_f64()
    }

    fn measure(&self, layout: &mut RegionLayout) -> bool {
        let (Ok(scroll_offset), Some(viewport_height)) =
            (self.window.scroll_y(), self.inner_height())
        else {
            return false;
        };
        layout.scroll_offset = scroll_offset;
        layout.viewport_height = viewport_height;
        layout.item_centers.clear();

        let children = self.list.children();
        let mut band = 0.0;
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                let rect = child.get_bounding_client_rect();
                if i == 0 {
                    // one line of list text
                    band = rect.height();
                }
                layout
                    .item_centers
                    .push(rect.y() + rect.height() / 2.0 + scroll_offset);
            }
        }
        layout.band = band;
        true
    }
}

/// A window listener. Removed when dropped.
pub struct ListenerGuard {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

pub struct WindowEvents {
    window: Window,
}

impl WindowEvents {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl EventSource for WindowEvents {
    type Subscription = ListenerGuard;

    fn subscribe(
        &self,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) -> Result<ListenerGuard, PresentationError> {
        let callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback(event.name(), callback.as_ref().unchecked_ref())?;
        Ok(ListenerGuard {
            window: self.window.clone(),
            event: event.name(),
            callback,
        })
    }
}

/// Wires the page's list into the scroll animation for this session.
pub fn mount_document(list: &Element, config: Configuration) -> Result<DocumentMount, PresentationError> {
    let window = window().ok_or(PresentationError::NoWindow)?;
    let surface = Rc::new(DocumentSurface::attach(list)?);
    let state = Rc::new(PresentationState::new(surface, config));
    let viewport = Rc::new(WindowViewport::new(window.clone(), list.clone()));
    let events = WindowEvents::new(window);
    Ok(scroll::mount(state, capability::detect(), viewport, &events))
}
