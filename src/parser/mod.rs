//! Parser module — Toolbox text into book chapters.

pub mod assemble;
pub mod filename;
pub mod marker;
pub mod mode;

use crate::model::{Book, BookError};
use assemble::Diagnostic;
use mode::Mode;

/// Outcome of parsing one file into a chapter.
#[derive(Debug)]
pub struct ParseReport {
    pub mode: Mode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Normalize line endings: CRLF/CR to LF, trailing line breaks stripped.
///
/// Blank lines stay in place so diagnostics carry the file's own line
/// numbers; the assembler skips them, which has the same effect as
/// collapsing blank-line runs.
pub fn normalize(raw: &str) -> String {
    let unix = raw.replace("\r\n", "\n").replace('\r', "\n");
    unix.trim_end_matches('\n').to_string()
}

/// Detect the mode of `raw` and assemble it into chapter `chapter` of `book`.
pub fn parse_into(book: &mut Book, chapter: usize, raw: &str) -> Result<ParseReport, BookError> {
    let text = normalize(raw);
    let target = book.chapter_mut(chapter)?;
    let mode = mode::detect(text.lines());
    let diagnostics = assemble::assemble(target, text.lines(), mode);
    Ok(ParseReport { mode, diagnostics })
}
