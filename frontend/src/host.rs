//! Seams between the scroll logic and the browser window.

use crate::presentation::PresentationError;
use crate::scroll::model::RegionLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Scroll,
    Resize,
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
        }
    }
}

/// Reads window and list geometry.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    fn inner_height(&self) -> Option<f64>;

    /// Refills `layout` in place. Returns false when nothing could be measured.
    fn measure(&self, layout: &mut RegionLayout) -> bool;
}

/// Registers window event handlers. Dropping the subscription unregisters it.
pub trait EventSource {
    type Subscription;

    fn subscribe(
        &self,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Subscription, PresentationError>;
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::presentation::PresentationSurface;
    use crate::scroll::model::ItemVisual;

    /// In-memory root element and list items.
    #[derive(Default)]
    pub struct RecordingSurface {
        attributes: RefCell<BTreeMap<String, String>>,
        properties: RefCell<BTreeMap<String, String>>,
        items: RefCell<Vec<Option<ItemVisual>>>,
        writes: RefCell<Vec<String>>,
    }

    impl RecordingSurface {
        pub fn with_items(count: usize) -> Self {
            Self {
                items: RefCell::new(vec![None; count]),
                ..Self::default()
            }
        }

        pub fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        pub fn property(&self, name: &str) -> Option<String> {
            self.properties.borrow().get(name).cloned()
        }

        pub fn property_f64(&self, name: &str) -> Option<f64> {
            self.property(name).and_then(|value| value.parse().ok())
        }

        pub fn item(&self, index: usize) -> Option<ItemVisual> {
            self.items.borrow().get(index).copied().flatten()
        }

        pub fn is_blank(&self) -> bool {
            self.attributes.borrow().is_empty()
                && self.properties.borrow().is_empty()
                && self.items.borrow().iter().all(Option::is_none)
        }

        pub fn take_writes(&self) -> Vec<String> {
            self.writes.take()
        }
    }

    impl PresentationSurface for RecordingSurface {
        fn set_attribute(&self, name: &str, value: &str) -> Result<(), PresentationError> {
            self.writes.borrow_mut().push(format!("{}={}", name, value));
            self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn remove_attribute(&self, name: &str) -> Result<(), PresentationError> {
            self.writes.borrow_mut().push(format!("-{}", name));
            self.attributes.borrow_mut().remove(name);
            Ok(())
        }

        fn set_property(&self, name: &str, value: &str) -> Result<(), PresentationError> {
            self.writes.borrow_mut().push(format!("{}={}", name, value));
            self.properties.borrow_mut().insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn remove_property(&self, name: &str) -> Result<(), PresentationError> {
            self.writes.borrow_mut().push(format!("-{}", name));
            self.properties.borrow_mut().remove(name);
            Ok(())
        }

        fn item_count(&self) -> usize {
            self.items.borrow().len()
        }

        fn set_item_style(&self, index: usize, visual: ItemVisual) -> Result<(), PresentationError> {
            let mut items = self.items.borrow_mut();
            let slot = items.get_mut(index).ok_or(PresentationError::MissingItem(index))?;
            *slot = Some(visual);
            self.writes.borrow_mut().push(format!("item[{}]", index));
            Ok(())
        }

        fn clear_item_style(&self, index: usize) -> Result<(), PresentationError> {
            let mut items = self.items.borrow_mut();
            let slot = items.get_mut(index).ok_or(PresentationError::MissingItem(index))?;
            *slot = None;
            self.writes.borrow_mut().push(format!("-item[{}]", index));
            Ok(())
        }
    }

    type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

    #[derive(Default)]
    struct Listeners {
        next_id: u64,
        entries: Vec<(u64, HostEvent, Handler)>,
    }

    /// Event source with a listener-count probe.
    #[derive(Clone, Default)]
    pub struct FakeEvents {
        listeners: Rc<RefCell<Listeners>>,
    }

    pub struct FakeSubscription {
        id: u64,
        listeners: Weak<RefCell<Listeners>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            if let Some(listeners) = self.listeners.upgrade() {
                listeners.borrow_mut().entries.retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl FakeEvents {
        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().entries.len()
        }

        pub fn count_for(&self, event: HostEvent) -> usize {
            self.listeners
                .borrow()
                .entries
                .iter()
                .filter(|(_, registered, _)| *registered == event)
                .count()
        }

        pub fn dispatch(&self, event: HostEvent) {
            let handlers: Vec<Handler> = self
                .listeners
                .borrow()
                .entries
                .iter()
                .filter(|(_, registered, _)| *registered == event)
                .map(|(_, _, handler)| handler.clone())
                .collect();
            for handler in handlers {
                let mut handler = handler.borrow_mut();
                (&mut **handler)();
            }
        }
    }

    impl EventSource for FakeEvents {
        type Subscription = FakeSubscription;

        fn subscribe(
            &self,
            event: HostEvent,
            handler: Box<dyn FnMut()>,
        ) -> Result<FakeSubscription, PresentationError> {
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, event, Rc::new(RefCell::new(handler))));
            Ok(FakeSubscription {
                id,
                listeners: Rc::downgrade(&self.listeners),
            })
        }
    }
}
