use serde::{Deserialize, Serialize};

/// Vertical scroll offset, in pixels, past which the navbar switches to its
/// condensed style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Left padding reserved for the application sidebar.
pub const SIDEBAR_OFFSET: &str = "var(--sidebar-offset, 5rem)";

/// Tunables for the navbar. Missing fields fall back to their defaults when
/// deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold: f64,
    pub sidebar_offset: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD,
            sidebar_offset: SIDEBAR_OFFSET.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = NavbarConfig::default();
        assert!((config.scroll_threshold - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.sidebar_offset, "var(--sidebar-offset, 5rem)");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: NavbarConfig =
            serde_json::from_value(json!({ "scroll_threshold": 24.0 })).unwrap();
        assert!((config.scroll_threshold - 24.0).abs() < f64::EPSILON);
        assert_eq!(config.sidebar_offset, SIDEBAR_OFFSET);

        let config: NavbarConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, NavbarConfig::default());
    }
}
