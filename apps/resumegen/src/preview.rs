//! Plain-text presenter for the render tree, used by the terminal preview.
//!
//! This is deliberately lossy about visuals — it shows the structure the tree
//! fixes (regions, section order, accent placement, placeholders) so a change
//! in arrangement is visible at a glance.

use std::fmt::Write as _;

use crate::render::{Block, ContactField, FigureKind, Placement, RenderedResume, TagStyle};

fn contact_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "phone",
        ContactField::Linkedin => "linkedin",
        ContactField::Website => "website",
    }
}

fn placement_label(placement: Placement) -> &'static str {
    match placement {
        Placement::Full => "full width",
        Placement::Main => "main column",
        Placement::Sidebar => "sidebar",
    }
}

/// Renders the tree as indented plain text. Accent-colored elements are
/// marked with `*`.
pub fn render_text(rendered: &RenderedResume) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "layout: {} | accent: {} | font: {}",
        rendered.layout.id(),
        rendered.accent,
        rendered.font_family
    );

    for region in &rendered.regions {
        let fill = if region.accent_fill { " (accent fill)" } else { "" };
        let _ = writeln!(out, "\n[{}{}]", placement_label(region.placement), fill);

        for section in &region.sections {
            if let Some(title) = &section.title {
                let mark = if title.accent { "*" } else { "" };
                let _ = writeln!(out, "  -- {}{} --", title.text, mark);
            }

            for block in &section.blocks {
                match block {
                    Block::Heading { text, color, outlined } => {
                        let mark = match (color, outlined) {
                            (crate::render::TextColor::Accent, true) => "*outline ",
                            (crate::render::TextColor::Accent, false) => "*",
                            _ => "",
                        };
                        let _ = writeln!(out, "  # {mark}{text}");
                    }
                    Block::Subheading { text } => {
                        let _ = writeln!(out, "  {text}");
                    }
                    Block::Badge { text } => {
                        let _ = writeln!(out, "  [{text}]");
                    }
                    Block::Figure { kind } => match kind {
                        FigureKind::InitialAvatar { initial } => {
                            let _ = writeln!(out, "  ({initial})");
                        }
                        FigureKind::CornerShape => {}
                    },
                    Block::Paragraph { lines, accent_bar } => {
                        let prefix = if *accent_bar { "*| " } else { "" };
                        for line in lines {
                            let _ = writeln!(out, "  {prefix}{line}");
                        }
                    }
                    Block::Entry(entry) => {
                        let mut line = format!("  - {}", entry.heading);
                        if let Some(subheading) = &entry.subheading {
                            let _ = write!(line, ", {subheading}");
                        }
                        if let Some(date) = &entry.date {
                            let _ = write!(line, " ({date})");
                        }
                        let _ = writeln!(out, "{line}");
                        for body_line in &entry.body {
                            let _ = writeln!(out, "      {body_line}");
                        }
                    }
                    Block::TagList { tags, style } => {
                        let (open, close) = match style {
                            TagStyle::Filled => ("[", "]"),
                            TagStyle::Outlined => ("(", ")"),
                        };
                        let joined: Vec<String> =
                            tags.iter().map(|t| format!("{open}{t}{close}")).collect();
                        let _ = writeln!(out, "  {}", joined.join(" "));
                    }
                    Block::PlainList { items } => {
                        for item in items {
                            let _ = writeln!(out, "  - {item}");
                        }
                    }
                    Block::Contact { field, value } => {
                        let _ = writeln!(out, "  {}: {value}", contact_label(*field));
                    }
                    Block::EmptyState { text } => {
                        let _ = writeln!(out, "  ({text})");
                    }
                }
            }
        }
    }

    out
}
