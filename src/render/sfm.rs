//! SFM renderer — book header block, then `\c`, `\s1`/`\p` and `\v` lines.

use crate::model::{Book, UnitKind};
use crate::render::Renderer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("chapter {chapter}: cannot emit a {kind} unit")]
    UnexpectedUnit { chapter: usize, kind: UnitKind },
}

pub struct SfmRenderer;

impl Renderer for SfmRenderer {
    fn render(&self, book: &Book) -> anyhow::Result<String> {
        Ok(emit(book)?)
    }

    fn file_extension(&self) -> &str {
        "sfm"
    }
}

/// Emit a whole book. Unparsed (padding) chapters and chapter 0 are skipped.
pub fn emit(book: &Book) -> Result<String, EmitError> {
    let info = book.info();
    let mut out = String::new();

    out.push_str(&format!("\\id {} {}\n", info.code, book.header.project_name));
    out.push_str("\\usfm 3.0\n");
    out.push_str(&format!("\\h {}\n", info.name));
    out.push_str(&format!("\\toc1 {}\n", info.name));
    out.push_str(&format!("\\toc2 {}\n", info.name));
    out.push_str(&format!("\\toc3 {}\n", info.code));
    out.push_str(&format!("\\mt {}\n", info.name));

    for chapter in book.filled_chapters() {
        out.push_str(&format!("\\c {}\n", chapter.number));
        for unit in chapter.units() {
            match unit.kind {
                UnitKind::Section => {
                    out.push_str(&format!("\\s1 {}\n\\p\n", unit.text));
                }
                UnitKind::Verse => {
                    out.push_str(&format!("\\v {} {}\n", unit.number, unit.text));
                }
                UnitKind::Padding => {
                    return Err(EmitError::UnexpectedUnit {
                        chapter: chapter.number,
                        kind: unit.kind,
                    });
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use crate::parser;
    use crate::registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn emits_header_and_chapter() {
        let mut book = Book::new("Demo", registry::lookup("RUT").unwrap());
        {
            let units = book.chapter_mut(1).unwrap().units_mut();
            units.push(Unit::section("Naomi"));
            units.push(Unit::verse(1, "In the days"));
            units.push(Unit::verse(2, "The man"));
        }
        let expected = "\\id RUT Demo\n\\usfm 3.0\n\\h Ruth\n\\toc1 Ruth\n\\toc2 Ruth\n\
                        \\toc3 RUT\n\\mt Ruth\n\\c 1\n\\s1 Naomi\n\\p\n\\v 1 In the days\n\
                        \\v 2 The man\n";
        assert_eq!(emit(&book).unwrap(), expected);
    }

    #[test]
    fn parsed_file_round_trips_to_verse_line() {
        let mut book = Book::new("Demo", registry::lookup("GEN").unwrap());
        parser::parse_into(&mut book, 1, "\\vs 1\n\\tx In the beginning").unwrap();
        let out = emit(&book).unwrap();
        assert!(out.contains("\\c 1\n\\v 1 In the beginning\n"));
        assert!(!out.contains("\\c 2"));
    }

    #[test]
    fn padding_unit_in_content_is_fatal() {
        let mut book = Book::new("Demo", registry::lookup("RUT").unwrap());
        book.chapter_mut(3).unwrap().units_mut().push(Unit {
            kind: UnitKind::Padding,
            number: 3,
            text: String::new(),
        });
        let err = emit(&book).unwrap_err();
        assert_eq!(err.to_string(), "chapter 3: cannot emit a padding unit");
    }
}
