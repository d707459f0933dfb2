//! Verse-numbering convention detection.

use regex::Regex;
use std::sync::LazyLock;

static RE_NUMBERED_VS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\vs +[0-9]+").unwrap());

/// How a file signals verse boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No explicit verse numbers: every `\tx` line is one verse.
    TxAsVerse,
    /// `\vs <n>` lines carry the verse number for the `\tx` lines after them.
    VsAsVerse,
}

/// Scan once; the first line starting `\vs <digits>` decides. The separator
/// is spaces only, the same as a line the classifier accepts.
pub fn detect<'a, I>(lines: I) -> Mode
where
    I: IntoIterator<Item = &'a str>,
{
    if lines.into_iter().any(|line| RE_NUMBERED_VS.is_match(line)) {
        Mode::VsAsVerse
    } else {
        Mode::TxAsVerse
    }
}
