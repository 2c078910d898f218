//! The structural output of the template renderer.
#![allow(dead_code)]
//!
//! A [`RenderedResume`] is an abstract tree of regions, sections, and blocks —
//! not markup. The presentation layer (terminal preview, web view, the PDF
//! backend's server-side reproduction) decides spacing, type sizes, and exact
//! visuals; the tree fixes WHAT appears, in WHICH position, and WHERE the
//! resolved accent color lands.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Layout dispatch tag
// ────────────────────────────────────────────────────────────────────────────

/// The five structural arrangements, as a closed tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Modern,
    Classic,
    Minimalist,
    Executive,
    Creative,
}

impl Layout {
    /// Maps a layout id to its arrangement. An id matching none of the five
    /// known variants is explicitly mapped to `Modern` — rendering never
    /// fails on an unknown layout.
    pub fn from_id(id: &str) -> Layout {
        match id {
            "modern" => Layout::Modern,
            "classic" => Layout::Classic,
            "minimalist" => Layout::Minimalist,
            "executive" => Layout::Executive,
            "creative" => Layout::Creative,
            _ => Layout::Modern,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Classic => "classic",
            Layout::Minimalist => "minimalist",
            Layout::Executive => "executive",
            Layout::Creative => "creative",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tree nodes
// ────────────────────────────────────────────────────────────────────────────

/// Where a region sits in the variant's grouping topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Spans the whole width (single-column flow, or a banner header).
    Full,
    /// The wide column of a two-column split.
    Main,
    /// The narrow column, or the profile-card panel.
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Accent,
    Default,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagStyle {
    /// Accent-filled chip with contrasting text.
    Filled,
    /// Accent-outlined chip with accent text.
    Outlined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    Phone,
    Linkedin,
    Website,
}

/// Decoration attached to an experience/education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMarker {
    None,
    /// Accent-colored bar along the entry's leading edge.
    AccentBar,
    /// Accent-colored timeline dot.
    TimelineDot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    /// Circular monogram avatar (executive profile card).
    InitialAvatar { initial: String },
    /// Tinted corner shape behind the header (creative).
    CornerShape,
}

/// One dated record of the experience or education sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryBlock {
    pub heading: String,
    pub heading_color: TextColor,
    pub subheading: Option<String>,
    pub subheading_color: TextColor,
    pub date: Option<String>,
    /// Multi-line body text; embedded line breaks are preserved, one element
    /// per printed line.
    pub body: Vec<String>,
    pub marker: EntryMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
        color: TextColor,
        /// Stroke-only rendering (creative first-name treatment).
        outlined: bool,
    },
    Subheading {
        text: String,
    },
    /// Prominent chip, e.g. the creative job-title badge.
    Badge {
        text: String,
    },
    Figure {
        kind: FigureKind,
    },
    Paragraph {
        lines: Vec<String>,
        /// Accent bar along the paragraph's leading edge.
        accent_bar: bool,
    },
    Entry(EntryBlock),
    TagList {
        tags: Vec<String>,
        style: TagStyle,
    },
    PlainList {
        items: Vec<String>,
    },
    Contact {
        field: ContactField,
        value: String,
    },
    /// Explicit marker rendered in place of an empty collection.
    EmptyState {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTitle {
    pub text: String,
    /// Title text / rule line carries the accent color.
    pub accent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: Option<SectionTitle>,
    pub blocks: Vec<Block>,
    /// Accent-colored rule under the section (modern header border).
    pub accent_rule: bool,
}

impl Section {
    pub fn new(kind: SectionKind) -> Section {
        Section {
            kind,
            title: None,
            blocks: Vec::new(),
            accent_rule: false,
        }
    }

    pub fn titled(kind: SectionKind, text: &str, accent: bool) -> Section {
        Section {
            kind,
            title: Some(SectionTitle {
                text: text.to_string(),
                accent,
            }),
            blocks: Vec::new(),
            accent_rule: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub placement: Placement,
    /// Region background filled with the accent color (executive sidebar).
    pub accent_fill: bool,
    pub sections: Vec<Section>,
}

impl Region {
    pub fn new(placement: Placement) -> Region {
        Region {
            placement,
            accent_fill: false,
            sections: Vec::new(),
        }
    }
}

/// The rendered document: resolved style values plus the arranged regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedResume {
    pub layout: Layout,
    /// Resolved accent color, hex.
    pub accent: String,
    pub font_family: String,
    pub regions: Vec<Region>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
