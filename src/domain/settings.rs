use std::fmt;

use serde::{Deserialize, Serialize};

/// User preferences applied across the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    pub default_currency: String,
    pub email_notifications: bool,
    /// Window, in days, used as the default for upcoming-renewal views.
    pub renewal_alert_days: u32,
    pub theme: ThemePreference,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_currency: "USD".into(),
            email_notifications: true,
            renewal_alert_days: 7,
            theme: ThemePreference::System,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = UserSettings::default();
        assert_eq!(settings.default_currency, "USD");
        assert!(settings.email_notifications);
        assert_eq!(settings.renewal_alert_days, 7);
        assert_eq!(settings.theme, ThemePreference::System);
    }
}
