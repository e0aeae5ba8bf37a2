//! Light/dark theme and the styling it implies.
//!
//! Styling is the only part of a chart spec the theme may touch. Series
//! colors that carry meaning (progress thresholds, grades, genders) are fixed
//! and live with their builders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored flag value: `"true"` means dark.
    pub fn as_flag(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Parse a stored flag. Anything but `"true"` is light.
    pub fn from_flag(flag: &str) -> Theme {
        if flag == "true" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// CSS class applied to the dashboard root.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "lad-light",
            Theme::Dark => "lad-dark",
        }
    }
}

const DARK_PALETTE: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16",
];
const LIGHT_PALETTE: [&str; 7] = [
    "#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed", "#0891b2", "#65a30d",
];

/// Theme-dependent presentation fields of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styling {
    pub theme: Theme,
    pub background: &'static str,
    pub text_color: &'static str,
    pub axis_line_color: &'static str,
    pub split_line_color: &'static str,
    pub tooltip_background: &'static str,
    pub font_family: &'static str,
    pub palette: [&'static str; 7],
}

impl Styling {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Styling {
                theme,
                background: "transparent",
                text_color: "#e2e8f0",
                axis_line_color: "rgba(255, 255, 255, 0.2)",
                split_line_color: "rgba(255, 255, 255, 0.1)",
                tooltip_background: "rgba(0, 0, 0, 0.8)",
                font_family: "-apple-system, BlinkMacSystemFont, sans-serif",
                palette: DARK_PALETTE,
            },
            Theme::Light => Styling {
                theme,
                background: "transparent",
                text_color: "#1e293b",
                axis_line_color: "rgba(0, 0, 0, 0.2)",
                split_line_color: "rgba(0, 0, 0, 0.1)",
                tooltip_background: "rgba(255, 255, 255, 0.95)",
                font_family: "-apple-system, BlinkMacSystemFont, sans-serif",
                palette: LIGHT_PALETTE,
            },
        }
    }
}
