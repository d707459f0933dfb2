//! Verse/section assembly — line-by-line state machine.
//!
//! Walks the lines of one file in order and appends to a single chapter.
//! Content problems never abort the walk: each is recorded as a
//! [`Diagnostic`] and the line is skipped.
//!
//! State is the running verse counter plus the chapter's last unit:
//!
//! - In [`Mode::TxAsVerse`] every `\tx` line is a new verse numbered by the
//!   counter, and a `\vs` line turns the unit just appended into a section
//!   heading and gives its verse number back.
//! - In [`Mode::VsAsVerse`] a `\vs <n>` line moves the counter to `n + 1`;
//!   `\tx` lines use `counter - 1` and merge into the last unit when it is a
//!   verse with that number.

use super::marker::{self, Marker};
use super::mode::Mode;
use crate::model::{Chapter, Unit, UnitKind};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// `\vs` payload: optional asterisk, number or "(section title)", optional
// letter suffix, optional trailing text.
static RE_VS_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*?(?:([0-9]+)|(\(section title\)))([A-Za-z])?\s*(.*)$").unwrap()
});

/// A recoverable problem found while assembling, tied to the 1-based line
/// number in the source file (blank lines included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Line is not `\marker content`.
    MalformedLine(String),
    /// Marker outside the recognised set.
    UnexpectedMarker(String),
    /// A section flag with no unit before it.
    SectionWithoutText,
    /// `\vs` payload that is neither a number nor `(section title)`.
    UnparsableVerse(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::MalformedLine(text) => write!(f, "malformed line: {text}"),
            DiagnosticKind::UnexpectedMarker(name) => write!(f, "unexpected marker \\{name}"),
            DiagnosticKind::SectionWithoutText => write!(f, "section without text"),
            DiagnosticKind::UnparsableVerse(payload) => {
                write!(f, "unparsable verse number: {payload}")
            }
        }
    }
}

struct Assembler<'c> {
    mode: Mode,
    chapter: &'c mut Chapter,
    next_verse: u32,
    diagnostics: Vec<Diagnostic>,
    line_no: usize,
}

// -- Public API ---------------------------------------------------------------

/// Assemble `lines` into `chapter` and return the warnings produced.
///
/// A padding chapter becomes a content chapter; a chapter that already has
/// units is appended to.
pub fn assemble<'a, I>(chapter: &mut Chapter, lines: I, mode: Mode) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = &'a str>,
{
    chapter.units_mut();
    let mut asm = Assembler {
        mode,
        chapter,
        next_verse: 1,
        diagnostics: Vec::new(),
        line_no: 0,
    };
    for line in lines {
        asm.line_no += 1;
        asm.process_line(line);
    }
    asm.diagnostics
}

// -- Line processing ----------------------------------------------------------

impl Assembler<'_> {
    fn warn(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            line: self.line_no,
            kind,
        });
    }

    fn units(&mut self) -> &mut Vec<Unit> {
        self.chapter.units_mut()
    }

    fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        let Some(parsed) = marker::classify(line) else {
            self.warn(DiagnosticKind::MalformedLine(line.to_string()));
            return;
        };
        match parsed.marker {
            Marker::Ignored => {}
            Marker::Text => self.text_line(parsed.content),
            Marker::Verse => self.verse_line(parsed.content),
            Marker::Unrecognized(name) => self.warn(DiagnosticKind::UnexpectedMarker(name)),
        }
    }

    fn text_line(&mut self, content: &str) {
        match self.mode {
            Mode::TxAsVerse => {
                let number = self.next_verse;
                self.units().push(Unit::verse(number, content));
                self.next_verse += 1;
            }
            Mode::VsAsVerse => {
                let current = self.next_verse.saturating_sub(1);
                let units = self.units();
                let continues = matches!(
                    units.last(),
                    Some(last) if last.kind == UnitKind::Verse && last.number == current
                );
                match units.last_mut() {
                    Some(last) if continues => append_text(&mut last.text, content),
                    _ => units.push(Unit::verse(current, content)),
                }
            }
        }
    }

    fn verse_line(&mut self, payload: &str) {
        match self.mode {
            Mode::TxAsVerse => {
                if self.mark_last_as_section() {
                    self.next_verse = self.next_verse.saturating_sub(1).max(1);
                }
            }
            Mode::VsAsVerse => {
                let Some(caps) = RE_VS_PAYLOAD.captures(payload.trim()) else {
                    self.warn(DiagnosticKind::UnparsableVerse(payload.to_string()));
                    return;
                };
                if caps.get(2).is_some() {
                    self.mark_last_as_section();
                    return;
                }
                // Letter suffixes ("8a") share the number and merge as one verse.
                match caps.get(1).map(|m| m.as_str().parse::<u32>()) {
                    Some(Ok(number)) => self.next_verse = number.saturating_add(1),
                    _ => self.warn(DiagnosticKind::UnparsableVerse(payload.to_string())),
                }
            }
        }
    }

    /// Reclassify the last unit as a section. Returns false (and warns) when
    /// the chapter is still empty.
    fn mark_last_as_section(&mut self) -> bool {
        match self.units().last_mut() {
            Some(last) => {
                last.make_section();
                true
            }
            None => {
                self.warn(DiagnosticKind::SectionWithoutText);
                false
            }
        }
    }
}

/// Join a continuation line onto verse text with a single space.
fn append_text(text: &mut String, content: &str) {
    if content.is_empty() {
        return;
    }
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(content);
}
