//! Declarative scroll-link rule.
//!
//! On browsers with scroll-driven animations the page declares the hue and
//! chroma tracks once as keyframes bound to the list's view timeline, and the
//! browser does the rest. The rule is kept as data so the same tracks can be
//! rendered to CSS and evaluated here, which keeps both paths honest about
//! producing the same values.

use std::fmt::Write;

use crate::config::Configuration;
use crate::presentation::{PROP_CHROMA, PROP_END, PROP_HUE};
use crate::scroll::capability::NATIVE_SCROLL_LINK_QUERY;
use crate::scroll::model::{
    lerp, ChromaEnvelope, VisualSample, Window, CHROMA_PEAK, DIM_OPACITY, PEAK_BRIGHTNESS,
};
use crate::scroll::ScrollLinkStrategy;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyframeValue {
    Number(f64),
    /// A custom property read from the root, e.g. `var(--end)`.
    Var(&'static str),
}

impl KeyframeValue {
    fn css(&self) -> String {
        match self {
            KeyframeValue::Number(n) => n.to_string(),
            KeyframeValue::Var(name) => format!("var({})", name),
        }
    }
}

/// One `@keyframes` block and the slice of the timeline it runs over.
/// A missing `from` starts at whatever value the property already has.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub name: &'static str,
    pub property: &'static str,
    pub from: Option<KeyframeValue>,
    pub to: KeyframeValue,
    pub range: Window,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeclaredRule {
    start: i32,
    end: i32,
    animate: bool,
    tracks: Vec<Track>,
}

impl DeclaredRule {
    pub fn declare(config: &Configuration, item_count: usize) -> Self {
        let envelope = ChromaEnvelope::for_items(item_count);
        Self {
            start: config.start,
            end: config.end,
            animate: config.animate && item_count >= 2,
            tracks: vec![
                Track {
                    name: "change",
                    property: PROP_HUE,
                    from: None,
                    to: KeyframeValue::Var(PROP_END),
                    range: Window::new(0.0, 1.0),
                },
                Track {
                    name: "chroma-on",
                    property: PROP_CHROMA,
                    from: None,
                    to: KeyframeValue::Number(CHROMA_PEAK),
                    range: envelope.entry,
                },
                Track {
                    name: "chroma-off",
                    property: PROP_CHROMA,
                    from: None,
                    to: KeyframeValue::Number(0.0),
                    range: envelope.exit,
                },
            ],
        }
    }

    fn resolve(&self, value: KeyframeValue) -> f64 {
        match value {
            KeyframeValue::Number(n) => n,
            KeyframeValue::Var(name) if name == PROP_END => f64::from(self.end),
            KeyframeValue::Var(name) if name == PROP_HUE => f64::from(self.start),
            KeyframeValue::Var(_) => 0.0,
        }
    }

    /// Evaluates the declared tracks the way the browser composes them:
    /// `fill-mode: both`, linear timing, later tracks layered over earlier
    /// ones on the same property.
    pub fn evaluate(&self, progress: f64) -> VisualSample {
        let mut hue = f64::from(self.start);
        let mut chroma = 0.0;
        if !self.animate {
            return VisualSample { hue, chroma };
        }

        let progress = crate::scroll::model::clamp_progress(progress);
        for track in &self.tracks {
            let current = if track.property == PROP_HUE { &mut hue } else { &mut chroma };
            let from = track.from.map(|v| self.resolve(v)).unwrap_or(*current);
            let to = self.resolve(track.to);
            *current = lerp(from, to, track.range.ramp(progress));
        }
        VisualSample { hue, chroma }
    }

    /// The stylesheet for the rule. Every block sits behind the feature query
    /// and `data-animate='true'`, so browsers without support and sessions
    /// with animation off never run it.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(
            css,
            "@property {} {{ syntax: '<number>'; inherits: false; initial-value: 0; }}",
            PROP_HUE
        );
        let _ = writeln!(
            css,
            "@property {} {{ syntax: '<number>'; inherits: true; initial-value: 0; }}",
            PROP_CHROMA
        );

        let names: Vec<&str> = self.tracks.iter().map(|t| t.name).collect();
        let ranges: Vec<String> = self
            .tracks
            .iter()
            .map(|t| {
                format!(
                    "cover {} cover {}",
                    CoverOffset::at(t.range.from).css(),
                    CoverOffset::at(t.range.to).css()
                )
            })
            .collect();

        let _ = writeln!(css, "@supports {} {{", NATIVE_SCROLL_LINK_QUERY);
        let _ = writeln!(
            css,
            "  [data-sync-scrollbar='true'][data-animate='true'] {{\n    timeline-scope: --list;\n    animation-name: {};\n    animation-fill-mode: both;\n    animation-timing-function: linear;\n    animation-range: {};\n    animation-timeline: --list;\n  }}",
            names.join(", "),
            ranges.join(", ")
        );
        let _ = writeln!(
            css,
            "  [data-sync-scrollbar='true'][data-animate='true'] ul {{ view-timeline: --list; }}"
        );
        let _ = writeln!(
            css,
            "  [data-animate='true'] li {{\n    opacity: {};\n    animation-name: brighten;\n    animation-fill-mode: both;\n    animation-timing-function: linear;\n    animation-range: cover calc(50% - 1lh) calc(50% + 1lh);\n    animation-timeline: view();\n  }}",
            DIM_OPACITY
        );
        let _ = writeln!(css, "  [data-animate='true'] li:first-of-type {{ --start-opacity: 1; }}");
        let _ = writeln!(
            css,
            "  [data-animate='true'] li:last-of-type {{ --brightness: 1; --end-opacity: 1; }}"
        );
        let _ = writeln!(css, "}}");

        for track in &self.tracks {
            let from = track
                .from
                .map(|v| format!("from {{ {}: {}; }} ", track.property, v.css()))
                .unwrap_or_default();
            let _ = writeln!(
                css,
                "@keyframes {} {{ {}to {{ {}: {}; }} }}",
                track.name,
                from,
                track.property,
                track.to.css()
            );
        }
        let _ = writeln!(
            css,
            "@keyframes brighten {{\n  0% {{ opacity: var(--start-opacity, {dim}); }}\n  50% {{ opacity: 1; filter: brightness(var(--brightness, {peak})); }}\n  100% {{ opacity: var(--end-opacity, {dim}); }}\n}}",
            dim = DIM_OPACITY,
            peak = PEAK_BRIGHTNESS
        );
        css
    }
}

/// Line box height of one list item. The page sizes every item to it, so a
/// list of `n` items is `n` lines tall.
pub const PROP_ITEM_LINE: &str = "--item-line";

/// Region progress placed on the list's `cover` range, as
/// `percent% + vh + line * var(--item-line)`.
///
/// Cover 0% is the list's top edge at the bottom of the viewport. The first
/// item is centred half a viewport and half a line after that, the last item
/// half a viewport and half a line before cover 100%. Progress is linear in
/// scroll offset between the two, as it is for the measured layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverOffset {
    pub percent: f64,
    pub vh: f64,
    pub line: f64,
}

impl CoverOffset {
    pub fn at(progress: f64) -> Self {
        Self {
            percent: 100.0 * progress,
            vh: 50.0 - 100.0 * progress,
            line: 0.5 - progress,
        }
    }

    fn css(&self) -> String {
        format!(
            "calc({}% + {}vh + {} * var({}))",
            number(self.percent),
            number(self.vh),
            number(self.line),
            PROP_ITEM_LINE
        )
    }
}

fn number(value: f64) -> String {
    // + 0.0 folds -0 into 0
    ((value * 1_000_000.0).round() / 1_000_000.0 + 0.0).to_string()
}

impl ScrollLinkStrategy for DeclaredRule {
    fn visual_at(&self, progress: f64) -> VisualSample {
        self.evaluate(progress)
    }
}
