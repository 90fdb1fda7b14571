//! Session settings.

use marquee_models::Orientation;
use tracing::warn;

/// Display settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Orientation rows are bound for
    pub orientation: Orientation,
    /// Show failures to the user in addition to logging them
    pub alert_user: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            alert_user: true,
        }
    }
}

impl AppSettings {
    /// Create settings from environment variables.
    pub fn from_env() -> Self {
        let orientation = match std::env::var("MARQUEE_ORIENTATION") {
            Ok(value) => value.parse::<Orientation>().unwrap_or_else(|e| {
                warn!("{}, falling back to portrait", e);
                Orientation::Portrait
            }),
            Err(_) => Orientation::Portrait,
        };

        Self {
            orientation,
            alert_user: std::env::var("MARQUEE_ALERT_USER")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("MARQUEE_ORIENTATION");
        std::env::remove_var("MARQUEE_ALERT_USER");
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        assert_eq!(AppSettings::from_env(), AppSettings::default());
    }

    #[test]
    #[serial]
    fn test_reads_landscape_and_alert_flag() {
        clear_env();
        std::env::set_var("MARQUEE_ORIENTATION", "landscape");
        std::env::set_var("MARQUEE_ALERT_USER", "false");
        let settings = AppSettings::from_env();
        assert_eq!(settings.orientation, Orientation::Landscape);
        assert!(!settings.alert_user);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_orientation_falls_back() {
        clear_env();
        std::env::set_var("MARQUEE_ORIENTATION", "diagonal");
        assert_eq!(AppSettings::from_env().orientation, Orientation::Portrait);
        clear_env();
    }
}
