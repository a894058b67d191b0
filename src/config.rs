//! Deck configuration - timing and sizing shared by every transition
//!
//! Defaults match the talk: 400ms `ease-in-out`, 16px per character.
//! Any value can be overridden from the page URL, e.g.
//! `?duration=1200&easing=linear` to rehearse transitions in slow motion,
//! or `?autoplay=3000` to advance one step every three seconds.

use thiserror::Error;
use tracing::{info, warn};

use crate::primitives::{Easing, Property, Transition, UnknownEasing};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{key}` expects a number, got `{value}`")]
    NotANumber { key: String, value: String },
    #[error("`{key}` must be positive, got `{value}`")]
    NotPositive { key: String, value: String },
    #[error(transparent)]
    Easing(#[from] UnknownEasing),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckConfig {
    /// Pixel width of one character unit in `Trans`/`Reveal`
    pub unit_width_px: f64,
    pub duration_ms: u32,
    pub easing: Easing,
    /// Step interval when the deck advances on its own
    pub autoplay_ms: Option<u32>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            unit_width_px: 16.0,
            duration_ms: 400,
            easing: Easing::EaseInOut,
            autoplay_ms: None,
        }
    }
}

impl DeckConfig {
    pub fn transition(&self, property: Property) -> Transition {
        Transition::new(property, self.duration_ms, self.easing)
    }

    /// Applies one `key=value` override. Unknown keys are not errors:
    /// the query string is shared with the router and other tools.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "duration" => self.duration_ms = parse_positive(key, value)?,
            "autoplay" => self.autoplay_ms = Some(parse_positive(key, value)?),
            "easing" => self.easing = value.parse()?,
            "unit" => {
                let unit: f64 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                if !(unit > 0.0 && unit.is_finite()) {
                    return Err(ConfigError::NotPositive {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.unit_width_px = unit;
            }
            _ => {}
        }
        Ok(())
    }

    /// Defaults overridden by a `?a=b&c=d` query string. Rejected values
    /// are logged and leave the default in place.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(err) = config.apply(key, value) {
                warn!(%err, "ignoring deck option");
            }
        }
        config
    }

    /// Reads the current page's query string.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config = Self::from_query(&search);
        info!(
            duration_ms = config.duration_ms,
            easing = %config.easing,
            unit_width_px = config.unit_width_px,
            autoplay_ms = ?config.autoplay_ms,
            "deck configured"
        );
        config
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u32, ConfigError> {
    let n: u32 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if n == 0 {
        return Err(ConfigError::NotPositive {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_talk() {
        let config = DeckConfig::default();
        assert_eq!(config.duration_ms, 400);
        assert_eq!(config.unit_width_px, 16.0);
        assert_eq!(config.easing, Easing::EaseInOut);
        assert_eq!(config.autoplay_ms, None);
        assert_eq!(
            config.transition(Property::Width).to_string(),
            "width 400ms ease-in-out"
        );
    }

    #[test]
    fn query_overrides() {
        let config = DeckConfig::from_query("?duration=1200&easing=linear&unit=20&autoplay=3000");
        assert_eq!(config.duration_ms, 1200);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.unit_width_px, 20.0);
        assert_eq!(config.autoplay_ms, Some(3000));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = DeckConfig::from_query("duration=fast&unit=-3&easing=wobble&autoplay=0");
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn unknown_keys_and_empty_query_are_ignored() {
        assert_eq!(DeckConfig::from_query(""), DeckConfig::default());
        assert_eq!(DeckConfig::from_query("?debug=1&&theme"), DeckConfig::default());
    }

    #[test]
    fn apply_reports_errors() {
        let mut config = DeckConfig::default();
        assert_eq!(
            config.apply("duration", "0"),
            Err(ConfigError::NotPositive { key: "duration".into(), value: "0".into() })
        );
        assert_eq!(
            config.apply("easing", "wobble"),
            Err(ConfigError::Easing(UnknownEasing("wobble".into())))
        );
        assert_eq!(
            config.apply("unit", "NaN").map_err(|e| e.to_string()),
            Err("`unit` must be positive, got `NaN`".to_string())
        );
    }
}
