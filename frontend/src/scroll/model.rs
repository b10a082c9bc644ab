//! Scroll parameter model.
//!
//! Pure functions from scroll progress (0..1 across the list region) to the
//! derived visual parameters: scrollbar hue, scrollbar chroma and the
//! per-item opacity/brightness envelope. Nothing here touches the DOM.

use crate::config::Configuration;

/// Chroma held through the interior of the region.
pub const CHROMA_PEAK: f64 = 0.3;
/// Opacity of an item outside its centre band.
pub const DIM_OPACITY: f64 = 0.2;
/// Brightness boost of an item crossing the viewport centre.
pub const PEAK_BRIGHTNESS: f64 = 1.2;
/// Chroma fades in over this slice of the region.
pub const ENTRY_WINDOW: Window = Window::new(0.04, 0.05);
/// Exit window used when the item layout is unknown.
pub const DEFAULT_EXIT_WINDOW: Window = Window::new(0.95, 0.96);
/// Length of the exit fade, measured from the second-to-last item.
pub const EXIT_SPAN: f64 = 0.01;

/// A sub-range of region progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub from: f64,
    pub to: f64,
}

impl Window {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// How far `progress` is through the window: 0 before it, 1 after it.
    pub fn ramp(&self, progress: f64) -> f64 {
        if self.to <= self.from {
            return if progress >= self.from { 1.0 } else { 0.0 };
        }
        ((progress - self.from) / (self.to - self.from)).clamp(0.0, 1.0)
    }
}

/// Exact at both ends, so keyframe values land on their declared numbers.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Clamps progress into [0,1]. NaN reads as the start of the region.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Linear hue sweep from `start` to `end`. Progress outside [0,1] clamps.
pub fn hue(progress: f64, start: i32, end: i32) -> f64 {
    lerp(f64::from(start), f64::from(end), clamp_progress(progress))
}

/// Fade in / steady / fade out envelope for the scrollbar chroma.
///
/// The two ramps are independent: the entry ramp belongs to the first item
/// reaching its centre band, the exit ramp to the second-to-last item leaving
/// it. Where they overlap the exit ramp fades whatever the entry ramp reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromaEnvelope {
    pub entry: Window,
    pub exit: Window,
}

impl Default for ChromaEnvelope {
    fn default() -> Self {
        Self {
            entry: ENTRY_WINDOW,
            exit: DEFAULT_EXIT_WINDOW,
        }
    }
}

impl ChromaEnvelope {
    /// Keys the exit window to the second-to-last of `count` evenly spaced items.
    /// The exit never opens before the entry ramp has finished, so short lists
    /// still reach the peak.
    pub fn for_items(count: usize) -> Self {
        if count < 2 {
            return Self::default();
        }
        let second_to_last = (count - 2) as f64 / (count - 1) as f64;
        let from = second_to_last.max(ENTRY_WINDOW.to);
        Self {
            entry: ENTRY_WINDOW,
            exit: Window::new(from, (from + EXIT_SPAN).min(1.0)),
        }
    }

    pub fn chroma(&self, progress: f64) -> f64 {
        let progress = clamp_progress(progress);
        CHROMA_PEAK * self.entry.ramp(progress) * (1.0 - self.exit.ramp(progress))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub opacity: f64,
    pub brightness: f64,
}

impl ItemVisual {
    pub const VISIBLE: ItemVisual = ItemVisual {
        opacity: 1.0,
        brightness: 1.0,
    };
}

/// Three keyframes an item passes through as it crosses the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemEnvelope {
    pub start_opacity: f64,
    pub peak_brightness: f64,
    pub end_opacity: f64,
}

impl ItemEnvelope {
    /// The first item starts lit and the last item stays lit, since neither
    /// has a neighbour to hand over to.
    pub fn for_index(index: usize, count: usize) -> Self {
        let first = index == 0;
        let last = index + 1 == count;
        Self {
            start_opacity: if first { 1.0 } else { DIM_OPACITY },
            peak_brightness: if last { 1.0 } else { PEAK_BRIGHTNESS },
            end_opacity: if last { 1.0 } else { DIM_OPACITY },
        }
    }

    /// `position` runs 0..1 across the centre band, 0.5 at the centre line.
    pub fn at(&self, position: f64) -> ItemVisual {
        let t = clamp_progress(position);
        if t <= 0.5 {
            let k = t * 2.0;
            ItemVisual {
                opacity: lerp(self.start_opacity, 1.0, k),
                brightness: lerp(1.0, self.peak_brightness, k),
            }
        } else {
            let k = (t - 0.5) * 2.0;
            ItemVisual {
                opacity: lerp(1.0, self.end_opacity, k),
                brightness: lerp(self.peak_brightness, 1.0, k),
            }
        }
    }
}

/// Maps an item's offset from the viewport centre (positive while still below
/// the centre line) onto its band position. The band reaches `band` pixels to
/// either side.
pub fn band_position(center_offset: f64, band: f64) -> f64 {
    let band = band.max(1.0);
    ((band - center_offset) / (2.0 * band)).clamp(0.0, 1.0)
}

/// Scrollbar parameters for one progress sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSample {
    pub hue: f64,
    pub chroma: f64,
}

/// Everything derived for one item at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub hue: f64,
    pub chroma: f64,
    pub opacity: f64,
    pub brightness: f64,
}

/// The model bound to one session configuration and one list.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualModel {
    start: i32,
    end: i32,
    animate: bool,
    item_count: usize,
    envelope: ChromaEnvelope,
}

impl VisualModel {
    pub fn new(config: &Configuration, item_count: usize) -> Self {
        Self {
            start: config.start,
            end: config.end,
            animate: config.animate,
            item_count,
            envelope: ChromaEnvelope::for_items(item_count),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Fewer than two items leave no timeline to dim or brighten along.
    pub fn is_degenerate(&self) -> bool {
        self.item_count < 2
    }

    pub fn with_item_count(&self, item_count: usize) -> Self {
        Self {
            item_count,
            envelope: ChromaEnvelope::for_items(item_count),
            ..self.clone()
        }
    }

    /// Resting values: sweep start, no chroma.
    pub fn rest(&self) -> VisualSample {
        VisualSample {
            hue: f64::from(self.start),
            chroma: 0.0,
        }
    }

    pub fn sample(&self, progress: f64) -> VisualSample {
        if !self.animate || self.is_degenerate() {
            return self.rest();
        }
        VisualSample {
            hue: hue(progress, self.start, self.end),
            chroma: self.envelope.chroma(progress),
        }
    }

    pub fn item(&self, index: usize, center_offset: f64, band: f64) -> ItemVisual {
        if !self.animate || self.is_degenerate() {
            return ItemVisual::VISIBLE;
        }
        ItemEnvelope::for_index(index, self.item_count).at(band_position(center_offset, band))
    }
}

/// Computes hue, chroma and one item's opacity/brightness in a single call.
pub fn compute_visual_state(
    progress: f64,
    index: usize,
    total_items: usize,
    center_offset: f64,
    band: f64,
    config: &Configuration,
) -> VisualState {
    let model = VisualModel::new(config, total_items);
    let sample = model.sample(progress);
    let item = model.item(index, center_offset, band);
    VisualState {
        hue: sample.hue,
        chroma: sample.chroma,
        opacity: item.opacity,
        brightness: item.brightness,
    }
}

/// Measured geometry of the list region, in document coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionLayout {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub item_centers: Vec<f64>,
    /// Half-height of an item's centre band, one line of list text.
    pub band: f64,
}

impl RegionLayout {
    pub fn viewport_center(&self) -> f64 {
        self.scroll_offset + self.viewport_height / 2.0
    }

    /// Progress from "first item centred" (0) to "last item centred" (1).
    pub fn progress(&self) -> f64 {
        let (first, last) = match (self.item_centers.first(), self.item_centers.last()) {
            (Some(first), Some(last)) if self.item_centers.len() >= 2 => (*first, *last),
            _ => return 0.0,
        };
        let center = self.viewport_center();
        let span = last - first;
        if span <= f64::EPSILON {
            return if center >= first { 1.0 } else { 0.0 };
        }
        clamp_progress((center - first) / span)
    }

    pub fn center_offset(&self, index: usize) -> Option<f64> {
        self.item_centers
            .get(index)
            .map(|item_center| item_center - self.viewport_center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config() -> Configuration {
        Configuration::with_bounds(40, 940)
    }

    #[test]
    fn test_hue_is_linear_inside_region() {
        for step in 0..=100 {
            let p = step as f64 / 100.0;
            assert!((hue(p, 40, 940) - (40.0 + p * 900.0)).abs() < EPS);
        }
    }

    #[test]
    fn test_hue_clamps_outside_region() {
        assert_eq!(hue(-0.5, 40, 940), 40.0);
        assert_eq!(hue(1.7, 40, 940), 940.0);
        assert_eq!(hue(f64::NAN, 40, 940), 40.0);
    }

    #[test]
    fn test_chroma_is_zero_at_region_edges() {
        let envelope = ChromaEnvelope::for_items(22);
        assert_eq!(envelope.chroma(0.0), 0.0);
        assert_eq!(envelope.chroma(1.0), 0.0);
        assert_eq!(envelope.chroma(-3.0), 0.0);
        assert_eq!(envelope.chroma(4.0), 0.0);
    }

    #[test]
    fn test_chroma_holds_peak_in_interior() {
        let envelope = ChromaEnvelope::for_items(22);
        let mut p = envelope.entry.to + 0.001;
        while p < envelope.exit.from {
            assert_eq!(envelope.chroma(p), CHROMA_PEAK, "progress {}", p);
            p += 0.01;
        }
    }

    #[test]
    fn test_chroma_ramps_linearly_through_windows() {
        let envelope = ChromaEnvelope::for_items(22);
        assert!((envelope.chroma(0.045) - 0.15).abs() < EPS);
        let mid_exit = (envelope.exit.from + envelope.exit.to) / 2.0;
        assert!((envelope.chroma(mid_exit) - 0.15).abs() < EPS);
    }

    #[test]
    fn test_exit_window_keyed_to_second_to_last_item() {
        let envelope = ChromaEnvelope::for_items(22);
        assert!((envelope.exit.from - 20.0 / 21.0).abs() < EPS);
        assert!((envelope.exit.to - (20.0 / 21.0 + EXIT_SPAN)).abs() < EPS);
        // independent of the entry window, not its mirror image
        assert!((envelope.exit.from - (1.0 - envelope.entry.to)).abs() > EPS);
    }

    #[test]
    fn test_short_list_still_reaches_peak_chroma() {
        let envelope = ChromaEnvelope::for_items(2);
        assert!(envelope.exit.from >= envelope.entry.to);
        assert_eq!(envelope.chroma(ENTRY_WINDOW.to), CHROMA_PEAK);

        let mut highest: f64 = 0.0;
        for step in 0..=1000 {
            highest = highest.max(envelope.chroma(step as f64 / 1000.0));
        }
        assert_eq!(highest, CHROMA_PEAK);
        assert_eq!(envelope.chroma(1.0), 0.0);
    }

    #[test]
    fn test_item_envelope_peaks_at_centre() {
        let envelope = ItemEnvelope::for_index(5, 22);
        assert_eq!(envelope.at(0.0), ItemVisual { opacity: DIM_OPACITY, brightness: 1.0 });
        assert_eq!(envelope.at(0.5), ItemVisual { opacity: 1.0, brightness: PEAK_BRIGHTNESS });
        assert_eq!(envelope.at(1.0), ItemVisual { opacity: DIM_OPACITY, brightness: 1.0 });
    }

    #[test]
    fn test_first_and_last_items_stay_lit_at_their_ends() {
        let first = ItemEnvelope::for_index(0, 22);
        assert_eq!(first.at(0.0).opacity, 1.0);
        assert_eq!(first.at(1.0).opacity, DIM_OPACITY);

        let last = ItemEnvelope::for_index(21, 22);
        assert_eq!(last.at(0.0).opacity, DIM_OPACITY);
        assert_eq!(last.at(0.5), ItemVisual::VISIBLE);
        assert_eq!(last.at(1.0), ItemVisual::VISIBLE);
    }

    #[test]
    fn test_items_are_driven_independently() {
        let model = VisualModel::new(&config(), 22);
        let centred = model.item(3, 0.0, 30.0);
        let below = model.item(4, 60.0, 30.0);
        let above = model.item(2, -60.0, 30.0);
        assert_eq!(centred.opacity, 1.0);
        assert_eq!(below.opacity, DIM_OPACITY);
        assert_eq!(above.opacity, DIM_OPACITY);
    }

    #[test]
    fn test_animate_off_forces_full_visibility() {
        let mut config = config();
        config.animate = false;
        let model = VisualModel::new(&config, 22);
        for step in -10..=110 {
            let p = step as f64 / 100.0;
            assert_eq!(model.sample(p).chroma, 0.0);
            for index in 0..22 {
                assert_eq!(model.item(index, (step * 7) as f64, 30.0).opacity, 1.0);
            }
        }
    }

    #[test]
    fn test_degenerate_region_is_fully_visible() {
        for count in 0..2 {
            let model = VisualModel::new(&config(), count);
            assert!(model.is_degenerate());
            assert_eq!(model.sample(0.5), model.rest());
            assert_eq!(model.item(0, 100.0, 30.0), ItemVisual::VISIBLE);
        }
    }

    #[test]
    fn test_compute_visual_state_combines_parts() {
        let state = compute_visual_state(0.5, 4, 22, 0.0, 30.0, &config());
        assert!((state.hue - 490.0).abs() < EPS);
        assert_eq!(state.chroma, CHROMA_PEAK);
        assert_eq!(state.opacity, 1.0);
        assert_eq!(state.brightness, PEAK_BRIGHTNESS);
    }

    #[test]
    fn test_region_progress_from_layout() {
        let layout = RegionLayout {
            scroll_offset: 0.0,
            viewport_height: 800.0,
            item_centers: vec![400.0, 500.0, 600.0],
            band: 30.0,
        };
        assert_eq!(layout.progress(), 0.0);

        let halfway = RegionLayout { scroll_offset: 100.0, ..layout.clone() };
        assert!((halfway.progress() - 0.5).abs() < EPS);
        assert_eq!(halfway.center_offset(2), Some(100.0));

        let past = RegionLayout { scroll_offset: 5_000.0, ..layout };
        assert_eq!(past.progress(), 1.0);
    }

    #[test]
    fn test_region_progress_without_span() {
        let single = RegionLayout {
            scroll_offset: 0.0,
            viewport_height: 800.0,
            item_centers: vec![400.0],
            band: 30.0,
        };
        assert_eq!(single.progress(), 0.0);

        let stacked = RegionLayout {
            item_centers: vec![300.0, 300.0],
            ..single
        };
        assert_eq!(stacked.progress(), 1.0);
    }
}
