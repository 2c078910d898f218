//! The five layout arrangements.
//!
//! Each variant independently fixes its section set and order, its grouping
//! topology, its accent emphasis, and its placeholder policy. Shared rules:
//! records render in storage order (never sorted here), multi-line text keeps
//! its embedded line breaks, and a missing name always becomes "Your Name".
//! Every function is total over any well-formed document.

use crate::models::document::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
use crate::render::tree::{
    Block, ContactField, EntryBlock, EntryMarker, FigureKind, Placement, Region, Section,
    SectionKind, TagStyle, TextColor,
};

pub(crate) const NAME_PLACEHOLDER: &str = "Your Name";
pub(crate) const JOB_TITLE_PLACEHOLDER: &str = "Job Title";
pub(crate) const EMPTY_EXPERIENCE: &str = "Add experience to see it here.";
pub(crate) const EMPTY_SKILLS: &str = "Add skills...";

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// A field counts as present only when set AND non-empty; an empty string is
/// treated like an absent field everywhere in the renderer.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn display_name(personal: &PersonalInfo) -> String {
    non_empty(&personal.full_name)
        .unwrap_or(NAME_PLACEHOLDER)
        .to_string()
}

/// Splits free text on embedded line breaks; each element is one printed line.
fn body_lines(text: &Option<String>) -> Vec<String> {
    match non_empty(text) {
        Some(text) => text.split('\n').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Contact lines for the given fields, skipping absent/empty values.
fn contact_blocks(personal: &PersonalInfo, fields: &[ContactField]) -> Vec<Block> {
    fields
        .iter()
        .filter_map(|&field| {
            let value = match field {
                ContactField::Email => &personal.email,
                ContactField::Phone => &personal.phone,
                ContactField::Linkedin => &personal.linkedin,
                ContactField::Website => &personal.website,
            };
            non_empty(value).map(|value| Block::Contact {
                field,
                value: value.to_string(),
            })
        })
        .collect()
}

fn experience_entry(
    entry: &ExperienceEntry,
    heading_color: TextColor,
    subheading_color: TextColor,
    marker: EntryMarker,
) -> Block {
    Block::Entry(EntryBlock {
        heading: entry.title.clone().unwrap_or_default(),
        heading_color,
        subheading: entry.company.clone(),
        subheading_color,
        date: entry.date.clone(),
        body: body_lines(&entry.description),
        marker,
    })
}

fn education_entry(entry: &EducationEntry) -> Block {
    Block::Entry(EntryBlock {
        heading: entry.degree.clone().unwrap_or_default(),
        heading_color: TextColor::Default,
        subheading: entry.school.clone(),
        subheading_color: TextColor::Muted,
        date: entry.date.clone(),
        body: Vec::new(),
        marker: EntryMarker::None,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Modern — banner header over a main + sidebar split
// ────────────────────────────────────────────────────────────────────────────

/// Accent lands on the uppercased name, the header rule, entry headings, and
/// the filled skill tags. Empty experience/skills render explicit markers;
/// empty education keeps its title and omits entries silently.
pub fn modern(doc: &ResumeDocument) -> Vec<Region> {
    let mut header = Section::new(SectionKind::Header);
    header.accent_rule = true;
    header.blocks.push(Block::Heading {
        text: display_name(&doc.personal).to_uppercase(),
        color: TextColor::Accent,
        outlined: false,
    });
    header.blocks.push(Block::Subheading {
        text: non_empty(&doc.personal.job_title)
            .unwrap_or(JOB_TITLE_PLACEHOLDER)
            .to_string(),
    });
    header.blocks.extend(contact_blocks(
        &doc.personal,
        &[ContactField::Email, ContactField::Phone, ContactField::Linkedin],
    ));

    let mut banner = Region::new(Placement::Full);
    banner.sections.push(header);

    let mut main = Region::new(Placement::Main);
    if non_empty(&doc.personal.summary).is_some() {
        let mut summary = Section::titled(SectionKind::Summary, "Profile", false);
        summary.blocks.push(Block::Paragraph {
            lines: body_lines(&doc.personal.summary),
            accent_bar: true,
        });
        main.sections.push(summary);
    }

    let mut experience = Section::titled(SectionKind::Experience, "Experience", false);
    if doc.experience.is_empty() {
        experience.blocks.push(Block::EmptyState {
            text: EMPTY_EXPERIENCE.to_string(),
        });
    } else {
        experience.blocks.extend(doc.experience.iter().map(|entry| {
            experience_entry(entry, TextColor::Accent, TextColor::Default, EntryMarker::None)
        }));
    }
    main.sections.push(experience);

    let mut sidebar = Region::new(Placement::Sidebar);
    let mut skills = Section::titled(SectionKind::Skills, "Skills", false);
    if doc.skills.is_empty() {
        skills.blocks.push(Block::EmptyState {
            text: EMPTY_SKILLS.to_string(),
        });
    } else {
        skills.blocks.push(Block::TagList {
            tags: doc.skills.clone(),
            style: TagStyle::Filled,
        });
    }
    sidebar.sections.push(skills);

    let mut education = Section::titled(SectionKind::Education, "Education", false);
    education
        .blocks
        .extend(doc.education.iter().map(education_entry));
    sidebar.sections.push(education);

    vec![banner, main, sidebar]
}

// ────────────────────────────────────────────────────────────────────────────
// Classic — centered single-column flow
// ────────────────────────────────────────────────────────────────────────────

/// Accent lands on the ruled section titles. Sections for empty collections
/// are omitted entirely; the header never carries placeholders beyond the
/// name.
pub fn classic(doc: &ResumeDocument) -> Vec<Region> {
    let mut column = Region::new(Placement::Full);

    let mut header = Section::new(SectionKind::Header);
    header.blocks.push(Block::Heading {
        text: display_name(&doc.personal),
        color: TextColor::Default,
        outlined: false,
    });
    if let Some(title) = non_empty(&doc.personal.job_title) {
        header.blocks.push(Block::Subheading {
            text: title.to_string(),
        });
    }
    header.blocks.extend(contact_blocks(
        &doc.personal,
        &[ContactField::Email, ContactField::Phone, ContactField::Linkedin],
    ));
    column.sections.push(header);

    if non_empty(&doc.personal.summary).is_some() {
        let mut summary = Section::titled(SectionKind::Summary, "Professional Profile", true);
        summary.blocks.push(Block::Paragraph {
            lines: body_lines(&doc.personal.summary),
            accent_bar: false,
        });
        column.sections.push(summary);
    }

    if !doc.experience.is_empty() {
        let mut experience = Section::titled(SectionKind::Experience, "Experience", true);
        experience.blocks.extend(doc.experience.iter().map(|entry| {
            experience_entry(entry, TextColor::Default, TextColor::Default, EntryMarker::None)
        }));
        column.sections.push(experience);
    }

    if !doc.education.is_empty() {
        let mut education = Section::titled(SectionKind::Education, "Education", true);
        education
            .blocks
            .extend(doc.education.iter().map(education_entry));
        column.sections.push(education);
    }

    if !doc.skills.is_empty() {
        let mut skills = Section::titled(SectionKind::Skills, "Skills", true);
        skills.blocks.push(Block::PlainList {
            items: doc.skills.clone(),
        });
        column.sections.push(skills);
    }

    vec![column]
}

// ────────────────────────────────────────────────────────────────────────────
// Minimalist — spare header over a narrow-list + wide-body split
// ────────────────────────────────────────────────────────────────────────────

/// The name stays ink-black; accent is carried by the section title rules and
/// the experience timeline dots. Empty collections keep their titles and omit
/// entries silently.
pub fn minimalist(doc: &ResumeDocument) -> Vec<Region> {
    let mut header = Section::new(SectionKind::Header);
    header.blocks.push(Block::Heading {
        text: display_name(&doc.personal),
        color: TextColor::Default,
        outlined: false,
    });
    if let Some(title) = non_empty(&doc.personal.job_title) {
        header.blocks.push(Block::Subheading {
            text: title.to_string(),
        });
    }
    header.blocks.extend(contact_blocks(
        &doc.personal,
        &[ContactField::Email, ContactField::Phone],
    ));

    let mut banner = Region::new(Placement::Full);
    banner.sections.push(header);

    let mut sidebar = Region::new(Placement::Sidebar);
    let mut skills = Section::titled(SectionKind::Skills, "Skills", true);
    if !doc.skills.is_empty() {
        skills.blocks.push(Block::PlainList {
            items: doc.skills.clone(),
        });
    }
    sidebar.sections.push(skills);

    let mut education = Section::titled(SectionKind::Education, "Education", true);
    education
        .blocks
        .extend(doc.education.iter().map(education_entry));
    sidebar.sections.push(education);

    let mut main = Region::new(Placement::Main);
    if non_empty(&doc.personal.summary).is_some() {
        let mut summary = Section::new(SectionKind::Summary);
        summary.blocks.push(Block::Paragraph {
            lines: body_lines(&doc.personal.summary),
            accent_bar: false,
        });
        main.sections.push(summary);
    }

    let mut experience = Section::titled(SectionKind::Experience, "Experience", true);
    experience.blocks.extend(doc.experience.iter().map(|entry| {
        experience_entry(
            entry,
            TextColor::Default,
            TextColor::Muted,
            EntryMarker::TimelineDot,
        )
    }));
    main.sections.push(experience);

    vec![banner, sidebar, main]
}

// ────────────────────────────────────────────────────────────────────────────
// Executive — accent-filled profile card beside the body
// ────────────────────────────────────────────────────────────────────────────

/// The sidebar region itself is filled with the accent color and holds the
/// monogram avatar, identity, contact, education, and skills; the body holds
/// summary and experience with accent-colored company lines. Education and
/// skills sections disappear entirely when empty.
pub fn executive(doc: &ResumeDocument) -> Vec<Region> {
    let mut card = Region::new(Placement::Sidebar);
    card.accent_fill = true;

    let mut identity = Section::new(SectionKind::Header);
    let initial = non_empty(&doc.personal.full_name)
        .and_then(|name| name.chars().next())
        .unwrap_or('U');
    identity.blocks.push(Block::Figure {
        kind: FigureKind::InitialAvatar {
            initial: initial.to_string(),
        },
    });
    identity.blocks.push(Block::Heading {
        text: display_name(&doc.personal),
        color: TextColor::Default,
        outlined: false,
    });
    if let Some(title) = non_empty(&doc.personal.job_title) {
        identity.blocks.push(Block::Subheading {
            text: title.to_string(),
        });
    }
    card.sections.push(identity);

    let mut contact = Section::titled(SectionKind::Contact, "Contact Details", false);
    contact.blocks.extend(contact_blocks(
        &doc.personal,
        &[ContactField::Email, ContactField::Phone, ContactField::Linkedin],
    ));
    card.sections.push(contact);

    if !doc.education.is_empty() {
        let mut education = Section::titled(SectionKind::Education, "Education", false);
        education
            .blocks
            .extend(doc.education.iter().map(education_entry));
        card.sections.push(education);
    }

    if !doc.skills.is_empty() {
        let mut skills = Section::titled(SectionKind::Skills, "Skills", false);
        skills.blocks.push(Block::PlainList {
            items: doc.skills.clone(),
        });
        card.sections.push(skills);
    }

    let mut body = Region::new(Placement::Main);
    if non_empty(&doc.personal.summary).is_some() {
        let mut summary = Section::titled(SectionKind::Summary, "Executive Profile", false);
        summary.blocks.push(Block::Paragraph {
            lines: body_lines(&doc.personal.summary),
            accent_bar: false,
        });
        body.sections.push(summary);
    }

    let mut experience = Section::titled(SectionKind::Experience, "Professional Experience", false);
    experience.blocks.extend(doc.experience.iter().map(|entry| {
        experience_entry(entry, TextColor::Default, TextColor::Accent, EntryMarker::None)
    }));
    body.sections.push(experience);

    vec![card, body]
}

// ────────────────────────────────────────────────────────────────────────────
// Creative — split display name over a two-column grid
// ────────────────────────────────────────────────────────────────────────────

/// The name renders as an accent-outlined first word stacked over an
/// accent-filled remainder, with the job title on a badge. Experience entries
/// carry accent side bars, skills render as accent-outlined tags. Empty
/// collections keep their titles and omit entries silently.
pub fn creative(doc: &ResumeDocument) -> Vec<Region> {
    let name = display_name(&doc.personal);
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or(NAME_PLACEHOLDER).to_string();
    let rest = words.collect::<Vec<_>>().join(" ");

    let mut header = Section::new(SectionKind::Header);
    header.blocks.push(Block::Figure {
        kind: FigureKind::CornerShape,
    });
    header.blocks.push(Block::Heading {
        text: first,
        color: TextColor::Accent,
        outlined: true,
    });
    if !rest.is_empty() {
        header.blocks.push(Block::Heading {
            text: rest,
            color: TextColor::Accent,
            outlined: false,
        });
    }
    if let Some(title) = non_empty(&doc.personal.job_title) {
        header.blocks.push(Block::Badge {
            text: title.to_string(),
        });
    }

    let mut banner = Region::new(Placement::Full);
    banner.sections.push(header);

    let mut main = Region::new(Placement::Main);
    if non_empty(&doc.personal.summary).is_some() {
        let mut summary = Section::new(SectionKind::Summary);
        summary.blocks.push(Block::Paragraph {
            lines: body_lines(&doc.personal.summary),
            accent_bar: false,
        });
        main.sections.push(summary);
    }

    let mut experience = Section::titled(SectionKind::Experience, "EXPERIENCE", false);
    experience.blocks.extend(doc.experience.iter().map(|entry| {
        experience_entry(
            entry,
            TextColor::Default,
            TextColor::Muted,
            EntryMarker::AccentBar,
        )
    }));
    main.sections.push(experience);

    let mut sidebar = Region::new(Placement::Sidebar);
    let mut contact = Section::titled(SectionKind::Contact, "CONTACT", false);
    contact.blocks.extend(contact_blocks(
        &doc.personal,
        &[ContactField::Email, ContactField::Phone, ContactField::Linkedin],
    ));
    sidebar.sections.push(contact);

    let mut skills = Section::titled(SectionKind::Skills, "SKILLS", false);
    if !doc.skills.is_empty() {
        skills.blocks.push(Block::TagList {
            tags: doc.skills.clone(),
            style: TagStyle::Outlined,
        });
    }
    sidebar.sections.push(skills);

    let mut education = Section::titled(SectionKind::Education, "EDUCATION", false);
    education
        .blocks
        .extend(doc.education.iter().map(education_entry));
    sidebar.sections.push(education);

    vec![banner, main, sidebar]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
