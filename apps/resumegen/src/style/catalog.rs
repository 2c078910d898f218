//! Static style catalogs: layouts, color palette, font families.
#![allow(dead_code)]
//!
//! Pure data, process-wide, immutable after load. The palette hex values and
//! font stacks match what the PDF/DOCX backend reproduces server-side.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Descriptor types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// CSS-style family stack handed to whatever presents the render tree.
    pub family: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalogs
// ────────────────────────────────────────────────────────────────────────────

/// The five structural arrangements, in gallery display order.
pub static LAYOUTS: [LayoutDescriptor; 5] = [
    LayoutDescriptor {
        id: "modern",
        name: "Modern",
    },
    LayoutDescriptor {
        id: "classic",
        name: "Classic",
    },
    LayoutDescriptor {
        id: "minimalist",
        name: "Minimalist",
    },
    LayoutDescriptor {
        id: "executive",
        name: "Executive",
    },
    LayoutDescriptor {
        id: "creative",
        name: "Creative",
    },
];

/// The accent palette. The first entry is the silent fallback for unknown ids.
pub static PALETTE: [ColorDescriptor; 8] = [
    ColorDescriptor {
        id: "blue",
        name: "Professional Blue",
        hex: "#2563EB",
    },
    ColorDescriptor {
        id: "emerald",
        name: "Emerald",
        hex: "#059669",
    },
    ColorDescriptor {
        id: "purple",
        name: "Royal Purple",
        hex: "#7C3AED",
    },
    ColorDescriptor {
        id: "slate",
        name: "Slate",
        hex: "#475569",
    },
    ColorDescriptor {
        id: "red",
        name: "Coral",
        hex: "#DC2626",
    },
    ColorDescriptor {
        id: "black",
        name: "Monochrome",
        hex: "#000000",
    },
    ColorDescriptor {
        id: "teal",
        name: "Teal",
        hex: "#0D9488",
    },
    ColorDescriptor {
        id: "orange",
        name: "Orange",
        hex: "#EA580C",
    },
];

/// The three font families. The first entry is the silent fallback.
pub static FONTS: [FontDescriptor; 3] = [
    FontDescriptor {
        id: "sans",
        name: "Inter (Sans)",
        family: "Inter, ui-sans-serif, system-ui",
    },
    FontDescriptor {
        id: "serif",
        name: "Merriweather (Serif)",
        family: "Merriweather, Georgia, serif",
    },
    FontDescriptor {
        id: "mono",
        name: "Roboto Mono",
        family: "monospace",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookups
// ────────────────────────────────────────────────────────────────────────────

pub fn find_color(id: &str) -> Option<&'static ColorDescriptor> {
    PALETTE.iter().find(|c| c.id == id)
}

pub fn find_font(id: &str) -> Option<&'static FontDescriptor> {
    FONTS.iter().find(|f| f.id == id)
}

pub fn find_layout(id: &str) -> Option<&'static LayoutDescriptor> {
    LAYOUTS.iter().find(|l| l.id == id)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
