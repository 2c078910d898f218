//! Style resolution: symbolic (layout, color, font) references to concrete
//! rendering values.
//!
//! Resolution is pure and total. Unknown color or font ids silently fall back
//! to the first catalog entry; a custom hex value passes through verbatim
//! without syntax validation. Unknown layout ids are NOT resolved here — the
//! renderer owns that fallback so the dispatch stays in one place.

use serde::{Deserialize, Serialize};

use crate::style::catalog::{find_color, find_font, FONTS, PALETTE};

// ────────────────────────────────────────────────────────────────────────────
// Config
// ────────────────────────────────────────────────────────────────────────────

/// The user-selected style triple plus an optional custom accent override.
///
/// `color == "custom"` iff `custom_color` is set; a `custom` id without a hex
/// value is treated as an ordinary palette miss and falls back silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub layout: String,
    pub color: String,
    pub font: String,
    pub custom_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            layout: "modern".to_string(),
            color: "blue".to_string(),
            font: "sans".to_string(),
            custom_color: None,
        }
    }
}

impl StyleConfig {
    pub fn new(layout: &str, color: &str, font: &str) -> Self {
        StyleConfig {
            layout: layout.to_string(),
            color: color.to_string(),
            font: font.to_string(),
            custom_color: None,
        }
    }

    /// A config whose accent is an explicit hex value instead of a palette id.
    pub fn with_custom_color(layout: &str, font: &str, hex: &str) -> Self {
        StyleConfig {
            layout: layout.to_string(),
            color: "custom".to_string(),
            font: font.to_string(),
            custom_color: Some(hex.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Concrete rendering values after fallback rules are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Accent color as a hex string (verbatim when custom).
    pub hex: String,
    /// Font family stack for the presentation layer.
    pub font_family: String,
    /// Layout id, passed through unresolved.
    pub layout: String,
}

/// Resolves a [`StyleConfig`] against the static catalogs. Never fails.
pub fn resolve(config: &StyleConfig) -> ResolvedStyle {
    let hex = match &config.custom_color {
        Some(custom) => custom.clone(),
        None => find_color(&config.color)
            .unwrap_or(&PALETTE[0])
            .hex
            .to_string(),
    };

    let font_family = find_font(&config.font)
        .unwrap_or(&FONTS[0])
        .family
        .to_string();

    ResolvedStyle {
        hex,
        font_family,
        layout: config.layout.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
