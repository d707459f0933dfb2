//! Data model for an assembled book — format-agnostic.
//!
//! The [`Book`] is the single mutable aggregate. Chapters are stored in a
//! vector indexed by chapter number (index 0 is padding), and handed out one
//! at a time through [`Book::chapter_mut`] so exactly one assembly call owns a
//! chapter while it runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("chapter {chapter} is out of range for {book} ({chapters} chapters)")]
    ChapterOutOfRange {
        book: String,
        chapter: usize,
        chapters: usize,
    },

    #[error("failed to read book JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canonical metadata for one book, as supplied by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub name: String,
    pub num: u32,
    pub code: String,
    pub chapters: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub project_name: String,
    pub book_info: BookInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub header: Header,
    pub content: Vec<Chapter>,
}

/// One chapter. `content` is `None` while the chapter is still padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Unit>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Padding,
    Verse,
    Section,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitKind::Padding => "padding",
            UnitKind::Verse => "verse",
            UnitKind::Section => "section",
        })
    }
}

/// A verse, a section heading, or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub number: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Sections are not numbered; they always carry this sentinel.
pub const SECTION_NUMBER: u32 = 1;

impl Unit {
    pub fn verse(number: u32, text: impl Into<String>) -> Self {
        Unit {
            kind: UnitKind::Verse,
            number,
            text: text.into(),
        }
    }

    #[cfg(test)]
    pub fn section(text: impl Into<String>) -> Self {
        Unit {
            kind: UnitKind::Section,
            number: SECTION_NUMBER,
            text: text.into(),
        }
    }

    /// Turn this unit into a section heading, keeping its text.
    pub fn make_section(&mut self) {
        self.kind = UnitKind::Section;
        self.number = SECTION_NUMBER;
    }
}

impl Chapter {
    pub fn padding(number: usize) -> Self {
        Chapter {
            number,
            content: None,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.content.is_none()
    }

    /// Units in rendering order; empty for padding.
    pub fn units(&self) -> &[Unit] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// Mutable unit list, turning a padding chapter into an empty one first.
    pub fn units_mut(&mut self) -> &mut Vec<Unit> {
        self.content.get_or_insert_with(Vec::new)
    }
}

impl Book {
    /// Pre-allocate `chapters + 1` padding chapters (index 0 is unused).
    pub fn new(project_name: impl Into<String>, book_info: BookInfo) -> Self {
        let content = (0..=book_info.chapters).map(Chapter::padding).collect();
        Book {
            header: Header {
                project_name: project_name.into(),
                book_info,
            },
            content,
        }
    }

    pub fn info(&self) -> &BookInfo {
        &self.header.book_info
    }

    /// Hand out chapter `number` for assembly. Index 0 is padding and is
    /// never handed out.
    pub fn chapter_mut(&mut self, number: usize) -> Result<&mut Chapter, BookError> {
        let chapters = self.content.len().saturating_sub(1);
        let book = self.header.book_info.name.clone();
        self.content
            .get_mut(number)
            .filter(|_| number != 0)
            .ok_or(BookError::ChapterOutOfRange {
                book,
                chapter: number,
                chapters,
            })
    }

    /// Chapters that have been parsed (non-padding), excluding index 0.
    pub fn filled_chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.content
            .iter()
            .filter(|c| c.number != 0 && !c.is_padding())
    }

    pub fn from_json(input: &str) -> Result<Self, BookError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, BookError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
