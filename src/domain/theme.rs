// Dashboard theme selection
use super::error::MonitorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub background_color: &'static str,
    pub color: &'static str,
}

impl Theme {
    pub fn style(&self) -> ThemeStyle {
        match self {
            Theme::Light => ThemeStyle {
                background_color: "#f8f9fa",
                color: "#000000",
            },
            Theme::Dark => ThemeStyle {
                background_color: "#343a40",
                color: "#ffffff",
            },
        }
    }
}

impl FromStr for Theme {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(MonitorError::InvalidArgument(format!(
                "unknown theme '{}', expected light or dark",
                other
            ))),
        }
    }
}
