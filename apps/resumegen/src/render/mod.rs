// Template rendering: pure projection from (document, resolved style) to a
// structural layout tree. Dispatch is a closed tagged union over the five
// arrangements; unknown layout ids degrade to the modern arrangement.

pub mod tree;
pub mod variants;

pub use tree::{
    Block, ContactField, EntryBlock, EntryMarker, FigureKind, Layout, Placement, Region,
    RenderedResume, Section, SectionKind, SectionTitle, TagStyle, TextColor,
};

use crate::models::document::ResumeDocument;
use crate::style::ResolvedStyle;

/// Renders the document through the arrangement selected by the resolved
/// style. Total over its whole input domain: any well-formed document and any
/// resolved style produce a tree, never an error.
pub fn render(doc: &ResumeDocument, style: &ResolvedStyle) -> RenderedResume {
    let layout = Layout::from_id(&style.layout);

    let regions = match layout {
        Layout::Modern => variants::modern(doc),
        Layout::Classic => variants::classic(doc),
        Layout::Minimalist => variants::minimalist(doc),
        Layout::Executive => variants::executive(doc),
        Layout::Creative => variants::creative(doc),
    };

    RenderedResume {
        layout,
        accent: style.hex.clone(),
        font_family: style.font_family.clone(),
        regions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{ExperienceEntry, PersonalField};
    use crate::style::{resolve, StyleConfig};

    const ALL_LAYOUT_IDS: [&str; 5] = ["modern", "classic", "minimalist", "executive", "creative"];

    fn style_for(layout: &str) -> ResolvedStyle {
        resolve(&StyleConfig::new(layout, "blue", "sans"))
    }

    fn doc_with_experience(titles: &[&str]) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        for title in titles {
            doc.experience.push(ExperienceEntry {
                title: Some(title.to_string()),
                company: Some("Acme".to_string()),
                date: None,
                description: None,
            });
        }
        doc
    }

    fn experience_headings(rendered: &RenderedResume) -> Vec<String> {
        rendered
            .regions
            .iter()
            .flat_map(|r| r.sections.iter())
            .filter(|s| s.kind == SectionKind::Experience)
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Block::Entry(entry) => Some(entry.heading.clone()),
                _ => None,
            })
            .collect()
    }

    /// True when the tree uses the accent anywhere: colored text, title rule,
    /// filled/outlined tags, entry markers, or an accent-filled region.
    fn uses_accent(rendered: &RenderedResume) -> bool {
        rendered.regions.iter().any(|region| {
            region.accent_fill
                || region.sections.iter().any(|section| {
                    section.accent_rule
                        || section.title.as_ref().is_some_and(|t| t.accent)
                        || section.blocks.iter().any(|block| match block {
                            Block::Heading { color, .. } => *color == TextColor::Accent,
                            Block::Paragraph { accent_bar, .. } => *accent_bar,
                            Block::TagList { .. } => true,
                            Block::Entry(entry) => {
                                entry.heading_color == TextColor::Accent
                                    || entry.subheading_color == TextColor::Accent
                                    || entry.marker != EntryMarker::None
                            }
                            _ => false,
                        })
                })
        })
    }

    #[test]
    fn test_render_is_total_over_unknown_ids_and_empty_document() {
        let empty = ResumeDocument::default();
        let weird = resolve(&StyleConfig::new("no-such-layout", "no-such-color", "no-font"));
        let rendered = render(&empty, &weird);
        assert!(!rendered.regions.is_empty());
    }

    #[test]
    fn test_unknown_layout_renders_exactly_like_modern() {
        let mut doc = doc_with_experience(&["Dev"]);
        doc.set_personal_field(PersonalField::FullName, "Ada Lovelace");

        let unknown = render(&doc, &style_for("unknown-layout"));
        let modern = render(&doc, &style_for("modern"));
        assert_eq!(unknown, modern);
    }

    #[test]
    fn test_every_variant_preserves_experience_order() {
        let doc = doc_with_experience(&["E1", "E2", "E3"]);
        for id in ALL_LAYOUT_IDS {
            let rendered = render(&doc, &style_for(id));
            assert_eq!(
                experience_headings(&rendered),
                vec!["E1", "E2", "E3"],
                "variant {id} reordered entries"
            );
        }
    }

    #[test]
    fn test_every_variant_renders_a_name_never_empty() {
        let empty = ResumeDocument::default();
        for id in ALL_LAYOUT_IDS {
            let rendered = render(&empty, &style_for(id));
            let has_name = rendered
                .regions
                .iter()
                .flat_map(|r| r.sections.iter())
                .filter(|s| s.kind == SectionKind::Header)
                .flat_map(|s| s.blocks.iter())
                .any(|b| matches!(b, Block::Heading { text, .. } if !text.is_empty()));
            assert!(has_name, "variant {id} rendered no name heading");
        }
    }

    #[test]
    fn test_every_variant_uses_the_accent_somewhere() {
        let mut doc = doc_with_experience(&["Dev"]);
        doc.skills = vec!["Rust".to_string()];
        doc.append_education();
        for id in ALL_LAYOUT_IDS {
            let rendered = render(&doc, &style_for(id));
            assert!(uses_accent(&rendered), "variant {id} never uses the accent");
        }
    }

    #[test]
    fn test_resolved_style_values_flow_into_the_tree() {
        let rendered = render(
            &ResumeDocument::default(),
            &resolve(&StyleConfig::new("classic", "teal", "mono")),
        );
        assert_eq!(rendered.layout, Layout::Classic);
        assert_eq!(rendered.accent, "#0D9488");
        assert_eq!(rendered.font_family, "monospace");
    }

    #[test]
    fn test_end_to_end_modern_blue_scenario() {
        let mut doc = ResumeDocument::default();
        doc.set_personal_field(PersonalField::FullName, "Ada Lovelace");
        doc.set_personal_field(PersonalField::JobTitle, "Engineer");
        doc.experience.push(ExperienceEntry {
            title: Some("Dev".to_string()),
            company: Some("Acme".to_string()),
            date: Some("2020-2022".to_string()),
            description: Some("Line1\nLine2".to_string()),
        });
        doc.skills = vec!["Go".to_string(), "Rust".to_string()];

        let rendered = render(&doc, &resolve(&StyleConfig::new("modern", "blue", "sans")));
        assert_eq!(rendered.accent, "#2563EB");

        // Name is uppercased and accent-colored.
        let header = rendered
            .regions
            .iter()
            .flat_map(|r| r.sections.iter())
            .find(|s| s.kind == SectionKind::Header)
            .unwrap();
        assert_eq!(
            header.blocks[0],
            Block::Heading {
                text: "ADA LOVELACE".to_string(),
                color: TextColor::Accent,
                outlined: false,
            }
        );

        // The single experience entry keeps both description lines.
        let experience = rendered
            .regions
            .iter()
            .flat_map(|r| r.sections.iter())
            .find(|s| s.kind == SectionKind::Experience)
            .unwrap();
        match &experience.blocks[0] {
            Block::Entry(entry) => {
                assert_eq!(entry.heading, "Dev");
                assert_eq!(entry.date.as_deref(), Some("2020-2022"));
                assert_eq!(entry.body, vec!["Line1", "Line2"]);
            }
            other => panic!("expected entry, got {other:?}"),
        }

        // Empty education renders no entries under modern (title kept).
        let education = rendered
            .regions
            .iter()
            .flat_map(|r| r.sections.iter())
            .find(|s| s.kind == SectionKind::Education)
            .unwrap();
        assert!(education.blocks.is_empty());

        // Both skills appear as separate filled tags.
        let skills = rendered
            .regions
            .iter()
            .flat_map(|r| r.sections.iter())
            .find(|s| s.kind == SectionKind::Skills)
            .unwrap();
        assert_eq!(
            skills.blocks,
            vec![Block::TagList {
                tags: vec!["Go".to_string(), "Rust".to_string()],
                style: TagStyle::Filled,
            }]
        );
    }

    #[test]
    fn test_three_distinct_grouping_topologies() {
        let doc = ResumeDocument::default();
        let topology = |id: &str| -> Vec<(Placement, bool)> {
            render(&doc, &style_for(id))
                .regions
                .iter()
                .map(|r| (r.placement, r.accent_fill))
                .collect()
        };

        // classic: single column; modern: banner + two columns;
        // executive: accent-filled profile card + body.
        assert_eq!(topology("classic"), vec![(Placement::Full, false)]);
        assert_eq!(
            topology("modern"),
            vec![
                (Placement::Full, false),
                (Placement::Main, false),
                (Placement::Sidebar, false)
            ]
        );
        assert_eq!(
            topology("executive"),
            vec![(Placement::Sidebar, true), (Placement::Main, false)]
        );
    }
}
