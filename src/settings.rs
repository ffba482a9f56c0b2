use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_default::DefaultFromSerde;

use crate::{theme::BuiltInThemeNames, toml::read_toml_file_or_default};

#[serde_inline_default::serde_inline_default]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, DefaultFromSerde)]
pub struct Settings {
    #[serde_inline_default(true)]
    pub clock_display: bool,

    /// Ask whether a newly added song should also go to favorites.
    #[serde_inline_default(true)]
    pub ask_favorites: bool,

    #[serde_inline_default(BuiltInThemeNames::GruvboxDark)]
    pub theme: BuiltInThemeNames,
}

impl Settings {
    pub fn from_file() -> Self {
        read_toml_file_or_default("settings")
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match toml::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(settings.clock_display);
        assert!(settings.ask_favorites);
        assert_eq!(settings.theme, BuiltInThemeNames::GruvboxDark);
    }

    #[test]
    fn partial_file() {
        let settings: Settings = toml::from_str("ask_favorites = false").unwrap();
        assert!(!settings.ask_favorites);
        assert!(settings.clock_display);

        let settings: Settings = toml::from_str("theme = \"GruvboxDarkTransparent\"").unwrap();
        assert_eq!(settings.theme, BuiltInThemeNames::GruvboxDarkTransparent);
    }

    #[test]
    fn display_round_trips() {
        let printed = Settings::default().to_string();
        assert!(printed.contains("ask_favorites = true"), "{printed}");

        let parsed: Settings = toml::from_str(&printed).unwrap();
        assert_eq!(parsed.theme, BuiltInThemeNames::GruvboxDark);
    }
}
