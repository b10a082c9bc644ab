use std::fmt::Debug;

use log::debug;

/// Feature query for scroll-driven declarative animation.
pub const NATIVE_SCROLL_LINK_QUERY: &str = "(animation-timeline: scroll())";

/// Asks the browser whether it evaluates scroll-linked keyframes itself.
/// A missing answer counts as "no".
pub fn detect() -> bool {
    read_support(web_sys::css::supports(NATIVE_SCROLL_LINK_QUERY))
}

fn read_support<E: Debug>(answer: Result<bool, E>) -> bool {
    match answer {
        Ok(supported) => supported,
        Err(e) => {
            debug!("CSS.supports unavailable: {:?}", e);
            false
        }
    }
}

/// Which path drives the list visuals for the session. Chosen once at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPath {
    /// The browser runs the declared keyframes. No per-frame work.
    NativeDeclarative,
    /// Scroll handler recomputes and writes every tick.
    ImperativeFallback,
    /// Everything fully visible, chroma off. Nothing runs.
    Static,
}

impl AnimationPath {
    pub fn select(supports_native: bool, animate: bool, item_count: usize) -> Self {
        if !animate || item_count < 2 {
            AnimationPath::Static
        } else if supports_native {
            AnimationPath::NativeDeclarative
        } else {
            AnimationPath::ImperativeFallback
        }
    }
}
