//! Book and chapter inference from Toolbox export filenames.
//!
//! `Matthew_Ch05.txt`, `MAT_c5 draft.txt` and `1John_ch3_v2.txt` all match;
//! the token before `_c`/`_ch` is resolved through the registry.

use crate::model::BookInfo;
use crate::registry;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)_[Cc]h?([0-9]+)[_ ]?.*\.txt$").unwrap());

/// Result of filename inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub book: BookInfo,
    /// 1-based chapter; 0 when the filename did not match.
    pub chapter: usize,
    pub matched: bool,
}

/// Infer book and chapter from the final path component.
///
/// A non-matching name (or chapter digits that overflow) gives the
/// placeholder book and chapter 0; a matching name with an unknown book token
/// gives the placeholder book and the parsed chapter. `_Ch0` matches with
/// chapter 0, which the book then refuses.
pub fn infer(path: &Path) -> Target {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let unmatched = Target {
        book: registry::placeholder(),
        chapter: 0,
        matched: false,
    };
    let Some(caps) = RE_FILENAME.captures(&name) else {
        return unmatched;
    };
    // Digits too long for a chapter number do not name a chapter.
    let Ok(chapter) = caps[2].parse::<usize>() else {
        return unmatched;
    };
    Target {
        book: registry::resolve(&caps[1]),
        chapter,
        matched: true,
    }
}
