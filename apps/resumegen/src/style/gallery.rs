//! The template gallery: curated company presets plus the systematic
//! cross-product of every layout, palette color, and font family.
//!
//! Built once at first access and never mutated. Preset color/font ids are
//! not validated against the catalogs here — they go through the same silent
//! fallback as any runtime [`StyleConfig`](crate::style::StyleConfig) when
//! selected.

use std::sync::OnceLock;

use serde::Serialize;

use crate::style::catalog::{FONTS, LAYOUTS, PALETTE};

// ────────────────────────────────────────────────────────────────────────────
// Preset type
// ────────────────────────────────────────────────────────────────────────────

/// A named, pre-chosen (layout, color, font) combination for gallery browsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePreset {
    pub id: u32,
    pub name: String,
    pub layout: String,
    pub color: String,
    pub font: String,
    /// Free-form filter tags: `company` plus brand tags for curated presets,
    /// `[layout, color, font]` for systematic entries.
    pub tags: Vec<String>,
}

struct CompanyPreset {
    name: &'static str,
    layout: &'static str,
    color: &'static str,
    font: &'static str,
    tags: &'static [&'static str],
}

/// Hand-curated presets, in declaration order. Each newly declared preset is
/// prepended to the gallery, so the list displays them newest-first.
const COMPANY_PRESETS: [CompanyPreset; 8] = [
    CompanyPreset {
        name: "Google Standard",
        layout: "modern",
        color: "slate",
        font: "sans",
        tags: &["google", "tech", "faang"],
    },
    CompanyPreset {
        name: "Amazon Leadership",
        layout: "minimalist",
        color: "black",
        font: "sans",
        tags: &["amazon", "tech", "faang"],
    },
    CompanyPreset {
        name: "Goldman Sachs",
        layout: "classic",
        color: "blue",
        font: "serif",
        tags: &["finance", "banking", "goldman"],
    },
    CompanyPreset {
        name: "McKinsey Consultant",
        layout: "executive",
        color: "black",
        font: "serif",
        tags: &["consulting", "mbb"],
    },
    CompanyPreset {
        name: "Apple Design",
        layout: "minimalist",
        color: "slate",
        font: "sans",
        tags: &["apple", "design", "creative"],
    },
    CompanyPreset {
        name: "Netflix Culture",
        layout: "modern",
        color: "red",
        font: "sans",
        tags: &["netflix", "tech"],
    },
    CompanyPreset {
        name: "Tesla Innovation",
        layout: "modern",
        color: "red",
        font: "mono",
        tags: &["tesla", "automotive"],
    },
    CompanyPreset {
        name: "Microsoft Enterprise",
        layout: "executive",
        color: "blue",
        font: "sans",
        tags: &["microsoft", "tech"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Gallery construction
// ────────────────────────────────────────────────────────────────────────────

/// Returns the full gallery: 8 company presets followed by the 120 systematic
/// combinations (5 layouts × 8 colors × 3 fonts).
pub fn template_gallery() -> &'static [TemplatePreset] {
    static GALLERY: OnceLock<Vec<TemplatePreset>> = OnceLock::new();
    GALLERY.get_or_init(build_gallery)
}

fn build_gallery() -> Vec<TemplatePreset> {
    let mut gallery: Vec<TemplatePreset> = Vec::with_capacity(128);
    let mut next_id = 1u32;

    for preset in &COMPANY_PRESETS {
        let mut tags = vec!["company".to_string()];
        tags.extend(preset.tags.iter().map(|t| t.to_string()));
        // Prepend, so the last-declared company preset lists first.
        gallery.insert(
            0,
            TemplatePreset {
                id: next_id,
                name: preset.name.to_string(),
                layout: preset.layout.to_string(),
                color: preset.color.to_string(),
                font: preset.font.to_string(),
                tags,
            },
        );
        next_id += 1;
    }

    for layout in &LAYOUTS {
        for color in &PALETTE {
            for font in &FONTS {
                let font_word = font.name.split(' ').next().unwrap_or(font.id);
                gallery.push(TemplatePreset {
                    id: next_id,
                    name: format!("{} {} {}", color.name, layout.name, font_word),
                    layout: layout.id.to_string(),
                    color: color.id.to_string(),
                    font: font.id.to_string(),
                    tags: vec![
                        layout.id.to_string(),
                        color.id.to_string(),
                        font.id.to_string(),
                    ],
                });
                next_id += 1;
            }
        }
    }

    gallery
}

/// Filters the gallery by a key: `all` keeps everything; otherwise a preset
/// matches when its layout id equals the key or its tags contain it.
pub fn filter_gallery(key: &str) -> Vec<&'static TemplatePreset> {
    template_gallery()
        .iter()
        .filter(|preset| key == "all" || preset.layout == key || preset.tags.iter().any(|t| t == key))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
