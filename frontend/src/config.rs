use log::{debug, warn, Level};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Range the per-session hue sweep starts in.
pub const START_RANGE: RangeInclusive<i32> = 0..=100;
/// Range the per-session hue sweep ends in.
pub const END_RANGE: RangeInclusive<i32> = 900..=1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

/// Session configuration. Built once at startup and never mutated afterwards.
///
/// `start < end` holds in practice because the two ranges are disjoint, but
/// query overrides can break it and nothing checks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Configuration {
    pub theme: Theme,
    pub animate: bool,
    pub snap: bool,
    pub start: i32,
    pub end: i32,
    pub scroll: bool,
    pub debug: bool,
}

impl Configuration {
    /// Page defaults with an explicit hue sweep.
    pub fn with_bounds(start: i32, end: i32) -> Self {
        Self {
            theme: Theme::Light,
            animate: true,
            snap: true,
            start,
            end,
            scroll: true,
            debug: false,
        }
    }

    /// Page defaults with the hue sweep drawn from [`START_RANGE`] and [`END_RANGE`].
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self::with_bounds(rng.gen_range(START_RANGE), rng.gen_range(END_RANGE))
    }

    /// Defaults overridden by `?key=value` pairs. Only the seven recognised
    /// options are read; everything else is ignored.
    pub fn from_query<R: Rng>(query: &str, rng: &mut R) -> Self {
        Self::generate(rng).with_query(query)
    }

    /// Reads the session configuration from the current page URL.
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        let config = Self::from_query(&query, &mut rand::thread_rng());
        debug!(
            "Session configuration: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        config
    }

    fn with_query(mut self, query: &str) -> Self {
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(raw) {
                Ok(value) => value.into_owned(),
                Err(e) => {
                    warn!("Ignoring option {}: {}", key, e);
                    continue;
                }
            };

            let applied = match key {
                "theme" => Theme::parse(&value).map(|theme| self.theme = theme),
                "animate" => parse_flag(&value).map(|flag| self.animate = flag),
                "snap" => parse_flag(&value).map(|flag| self.snap = flag),
                "scroll" => parse_flag(&value).map(|flag| self.scroll = flag),
                "debug" => parse_flag(&value).map(|flag| self.debug = flag),
                "start" => value.parse().ok().map(|start| self.start = start),
                "end" => value.parse().ok().map(|end| self.end = end),
                _ => {
                    debug!("Ignoring unrecognised option {}", key);
                    continue;
                }
            };

            if applied.is_none() {
                warn!("Ignoring {}={}: value does not parse", key, value);
            }
        }
        self
    }
}

// A bare `?debug` switches the flag on.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "" | "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_bounds_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let config = Configuration::generate(&mut rng);
            assert!(START_RANGE.contains(&config.start));
            assert!(END_RANGE.contains(&config.end));
            assert!(config.start < config.end);
        }
    }

    #[test]
    fn test_defaults_match_page() {
        let config = Configuration::with_bounds(10, 950);
        assert_eq!(config.theme, Theme::Light);
        assert!(config.animate);
        assert!(config.snap);
        assert!(config.scroll);
        assert!(!config.debug);
    }

    #[test]
    fn test_query_overrides_recognised_keys() {
        let config = Configuration::with_bounds(10, 950)
            .with_query("?animate=false&debug&theme=dark&start=42&end=%39%30%30");
        assert!(!config.animate);
        assert!(config.debug);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.start, 42);
        assert_eq!(config.end, 900);
    }

    #[test]
    fn test_query_ignores_unknown_and_unparseable() {
        let base = Configuration::with_bounds(10, 950);
        let config = base.clone().with_query("color=red&snap=maybe&start=abc&theme=neon");
        assert_eq!(config, base);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::System).unwrap();
        assert_eq!(json, "\"system\"");
    }
}
