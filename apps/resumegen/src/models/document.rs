//! The normalized resume document consumed by the template renderer.
#![allow(dead_code)]
//!
//! Every scalar field is optional and every collection defaults to empty.
//! Nothing here can fail: out-of-range indices are absorbed as no-ops and
//! rendering degrades to placeholders instead of erroring. The document lives
//! only for the session — it is never persisted.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Document types
// ────────────────────────────────────────────────────────────────────────────

/// Field names follow the backend wire format (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// The full resume document. `Default` is the empty session-start document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

/// Selector for the scalar fields of [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Linkedin,
    Website,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    School,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Company,
    Date,
    Description,
}

// ────────────────────────────────────────────────────────────────────────────
// Edit operations
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    /// Replaces one personal scalar field. Free text is accepted verbatim,
    /// including the empty string.
    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let slot = match field {
            PersonalField::FullName => &mut self.personal.full_name,
            PersonalField::JobTitle => &mut self.personal.job_title,
            PersonalField::Email => &mut self.personal.email,
            PersonalField::Phone => &mut self.personal.phone,
            PersonalField::Linkedin => &mut self.personal.linkedin,
            PersonalField::Website => &mut self.personal.website,
            PersonalField::Summary => &mut self.personal.summary,
        };
        *slot = Some(value.into());
    }

    /// Appends a blank education record.
    pub fn append_education(&mut self) {
        self.education.push(EducationEntry::default());
    }

    /// Removes an education record by position. Out-of-range is a no-op.
    pub fn remove_education(&mut self, index: usize) {
        if index < self.education.len() {
            self.education.remove(index);
        }
    }

    /// Replaces one field of one education record. Out-of-range is a no-op.
    pub fn set_education_field(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) {
        if let Some(entry) = self.education.get_mut(index) {
            let slot = match field {
                EducationField::Degree => &mut entry.degree,
                EducationField::School => &mut entry.school,
                EducationField::Date => &mut entry.date,
            };
            *slot = Some(value.into());
        }
    }

    /// Appends a blank experience record.
    pub fn append_experience(&mut self) {
        self.experience.push(ExperienceEntry::default());
    }

    /// Removes an experience record by position. Out-of-range is a no-op.
    pub fn remove_experience(&mut self, index: usize) {
        if index < self.experience.len() {
            self.experience.remove(index);
        }
    }

    /// Replaces one field of one experience record. Out-of-range is a no-op.
    pub fn set_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) {
        if let Some(entry) = self.experience.get_mut(index) {
            let slot = match field {
                ExperienceField::Title => &mut entry.title,
                ExperienceField::Company => &mut entry.company,
                ExperienceField::Date => &mut entry.date,
                ExperienceField::Description => &mut entry.description,
            };
            *slot = Some(value.into());
        }
    }

    /// Appends an empty skill slot. Duplicates are permitted.
    pub fn append_skill(&mut self) {
        self.skills.push(String::new());
    }

    /// Replaces one skill by position. Out-of-range is a no-op.
    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.skills.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Removes one skill by position. Out-of-range is a no-op.
    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
