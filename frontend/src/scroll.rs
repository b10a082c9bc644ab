pub mod capability;
pub mod engine;
pub mod model;
pub mod native;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::host::{EventSource, HostEvent, Viewport};
use crate::presentation::{PresentationState, PresentationSurface, ResizeTracker, VisualWriter};
use capability::AnimationPath;
use engine::FallbackEngine;
use model::{ItemVisual, VisualModel, VisualSample};

/// Same progress in, same scrollbar parameters out, whichever path is active.
pub trait ScrollLinkStrategy {
    fn visual_at(&self, progress: f64) -> VisualSample;
}

impl ScrollLinkStrategy for VisualModel {
    fn visual_at(&self, progress: f64) -> VisualSample {
        self.sample(progress)
    }
}

type SharedEngine<S, V> = Rc<RefCell<Option<FallbackEngine<S, V>>>>;

enum ActivePath<S: PresentationSurface, V: Viewport> {
    Static(Option<VisualWriter<S>>),
    Native,
    Fallback(SharedEngine<S, V>),
}

/// Everything the animated list registered at mount. Dropping it cancels the
/// window listeners first, then tears down the engine and the presentation
/// state, so a late event finds nothing to run.
pub struct AnimationMount<S: PresentationSurface, V: Viewport, T> {
    path: AnimationPath,
    state: Rc<PresentationState<S>>,
    active: ActivePath<S, V>,
    subscriptions: Vec<T>,
}

impl<S: PresentationSurface, V: Viewport, T> AnimationMount<S, V, T> {
    pub fn path(&self) -> AnimationPath {
        self.path
    }

    /// Scroll ticks handled so far. Always zero off the fallback path.
    pub fn ticks(&self) -> u64 {
        match &self.active {
            ActivePath::Fallback(engine) => engine
                .borrow()
                .as_ref()
                .map(FallbackEngine::ticks)
                .unwrap_or(0),
            _ => 0,
        }
    }
}

impl<S: PresentationSurface, V: Viewport, T> Drop for AnimationMount<S, V, T> {
    fn drop(&mut self) {
        self.subscriptions.clear();
        match &mut self.active {
            ActivePath::Fallback(engine) => {
                if let Some(engine) = engine.borrow_mut().take() {
                    engine.teardown();
                }
            }
            ActivePath::Static(writer) => {
                if let Some(writer) = writer.take() {
                    for index in 0..writer.item_count() {
                        writer.clear_item(index);
                    }
                }
            }
            ActivePath::Native => {}
        }
        self.state.reset();
        debug!("Scroll animation unmounted ({:?})", self.path);
    }
}

/// Sets up the presentation state and whichever animation path the session
/// gets. `supports_native` comes from [`capability::detect`].
pub fn mount<S, V, E>(
    state: Rc<PresentationState<S>>,
    supports_native: bool,
    viewport: Rc<V>,
    events: &E,
) -> AnimationMount<S, V, E::Subscription>
where
    S: PresentationSurface + 'static,
    V: Viewport + 'static,
    E: EventSource,
{
    state.init();
    let mut subscriptions = Vec::new();

    if let Some(writer) = state.claim_metric_writer() {
        let tracker = Rc::new(ResizeTracker::new(writer));
        if let Some(height) = viewport.inner_height() {
            tracker.on_resize(height);
        }
        let handler = {
            let viewport = viewport.clone();
            move || {
                if let Some(height) = viewport.inner_height() {
                    tracker.on_resize(height);
                }
            }
        };
        match events.subscribe(HostEvent::Resize, Box::new(handler)) {
            Ok(subscription) => subscriptions.push(subscription),
            Err(e) => warn!("Could not listen for resize: {}", e),
        }
    }

    let config = state.config().clone();
    let item_count = state.surface().item_count();
    let path = AnimationPath::select(supports_native, config.animate, item_count);
    info!("Scroll animation path: {:?} ({} items)", path, item_count);

    let active = match path {
        AnimationPath::Static => {
            let writer = state.claim_visual_writer();
            if let Some(writer) = &writer {
                writer.write(VisualModel::new(&config, item_count).rest());
                for index in 0..item_count {
                    writer.write_item(index, ItemVisual::VISIBLE);
                }
            }
            ActivePath::Static(writer)
        }
        AnimationPath::NativeDeclarative => ActivePath::Native,
        AnimationPath::ImperativeFallback => match state.claim_visual_writer() {
            Some(writer) => {
                let mut engine =
                    FallbackEngine::new(VisualModel::new(&config, item_count), writer, viewport);
                engine.tick();
                let engine: SharedEngine<S, V> = Rc::new(RefCell::new(Some(engine)));
                let handler = scroll_handler(Rc::downgrade(&engine));
                match events.subscribe(HostEvent::Scroll, Box::new(handler)) {
                    Ok(subscription) => subscriptions.push(subscription),
                    Err(e) => warn!("Could not listen for scroll: {}", e),
                }
                ActivePath::Fallback(engine)
            }
            None => {
                warn!("Visual writer already claimed, leaving list static");
                ActivePath::Static(None)
            }
        },
    };

    AnimationMount {
        path,
        state,
        active,
        subscriptions,
    }
}

fn scroll_handler<S, V>(engine: Weak<RefCell<Option<FallbackEngine<S, V>>>>) -> impl FnMut()
where
    S: PresentationSurface,
    V: Viewport,
{
    move || {
        let Some(engine) = engine.upgrade() else {
            return;
        };
        // a tick already in flight wins; the next event catches up
        let Ok(mut guard) = engine.try_borrow_mut() else {
            return;
        };
        if let Some(engine) = guard.as_mut() {
            engine.tick();
        }
    }
}
