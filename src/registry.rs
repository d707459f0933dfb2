//! Book registry — canonical book names, numbers, codes and chapter counts.

use crate::model::BookInfo;

/// (name, code, chapters), in canonical order. The book number is the
/// 1-based position in this table.
const BOOKS: &[(&str, &str, usize)] = &[
    ("Genesis", "GEN", 50),
    ("Exodus", "EXO", 40),
    ("Leviticus", "LEV", 27),
    ("Numbers", "NUM", 36),
    ("Deuteronomy", "DEU", 34),
    ("Joshua", "JOS", 24),
    ("Judges", "JDG", 21),
    ("Ruth", "RUT", 4),
    ("1 Samuel", "1SA", 31),
    ("2 Samuel", "2SA", 24),
    ("1 Kings", "1KI", 22),
    ("2 Kings", "2KI", 25),
    ("1 Chronicles", "1CH", 29),
    ("2 Chronicles", "2CH", 36),
    ("Ezra", "EZR", 10),
    ("Nehemiah", "NEH", 13),
    ("Esther", "EST", 10),
    ("Job", "JOB", 42),
    ("Psalms", "PSA", 150),
    ("Proverbs", "PRO", 31),
    ("Ecclesiastes", "ECC", 12),
    ("Song of Songs", "SNG", 8),
    ("Isaiah", "ISA", 66),
    ("Jeremiah", "JER", 52),
    ("Lamentations", "LAM", 5),
    ("Ezekiel", "EZK", 48),
    ("Daniel", "DAN", 12),
    ("Hosea", "HOS", 14),
    ("Joel", "JOL", 3),
    ("Amos", "AMO", 9),
    ("Obadiah", "OBA", 1),
    ("Jonah", "JON", 4),
    ("Micah", "MIC", 7),
    ("Nahum", "NAM", 3),
    ("Habakkuk", "HAB", 3),
    ("Zephaniah", "ZEP", 3),
    ("Haggai", "HAG", 2),
    ("Zechariah", "ZEC", 14),
    ("Malachi", "MAL", 4),
    ("Matthew", "MAT", 28),
    ("Mark", "MRK", 16),
    ("Luke", "LUK", 24),
    ("John", "JHN", 21),
    ("Acts", "ACT", 28),
    ("Romans", "ROM", 16),
    ("1 Corinthians", "1CO", 16),
    ("2 Corinthians", "2CO", 13),
    ("Galatians", "GAL", 6),
    ("Ephesians", "EPH", 6),
    ("Philippians", "PHP", 4),
    ("Colossians", "COL", 4),
    ("1 Thessalonians", "1TH", 5),
    ("2 Thessalonians", "2TH", 3),
    ("1 Timothy", "1TI", 6),
    ("2 Timothy", "2TI", 4),
    ("Titus", "TIT", 3),
    ("Philemon", "PHM", 1),
    ("Hebrews", "HEB", 13),
    ("James", "JAS", 5),
    ("1 Peter", "1PE", 5),
    ("2 Peter", "2PE", 3),
    ("1 John", "1JN", 5),
    ("2 John", "2JN", 1),
    ("3 John", "3JN", 1),
    ("Jude", "JUD", 1),
    ("Revelation", "REV", 22),
];

/// Code used for books the registry does not know.
pub const PLACEHOLDER_CODE: &str = "XXX";

/// Compare names ignoring case, spaces and underscores ("1_John" == "1 John").
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn info_at(index: usize) -> BookInfo {
    let (name, code, chapters) = BOOKS[index];
    BookInfo {
        name: name.to_string(),
        num: index as u32 + 1,
        code: code.to_string(),
        chapters,
    }
}

/// Look up a book by code or name.
pub fn lookup(token: &str) -> Option<BookInfo> {
    let wanted = squash(token);
    if wanted.is_empty() {
        return None;
    }
    BOOKS
        .iter()
        .position(|(name, code, _)| squash(code) == wanted || squash(name) == wanted)
        .map(info_at)
}

/// Placeholder metadata for an unrecognised book: no chapters beyond index 0.
pub fn placeholder() -> BookInfo {
    BookInfo {
        name: "Unknown".to_string(),
        num: 0,
        code: PLACEHOLDER_CODE.to_string(),
        chapters: 0,
    }
}

/// Like [`lookup`], falling back to [`placeholder`].
pub fn resolve(token: &str) -> BookInfo {
    lookup(token).unwrap_or_else(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_has_66_books() {
        assert_eq!(BOOKS.len(), 66);
        assert_eq!(lookup("REV").unwrap().num, 66);
    }

    #[test]
    fn lookup_by_code_is_case_insensitive() {
        let mat = lookup("mat").unwrap();
        assert_eq!(mat.name, "Matthew");
        assert_eq!(mat.num, 40);
        assert_eq!(mat.chapters, 28);
    }

    #[test]
    fn lookup_by_name_variants() {
        assert_eq!(lookup("1John").unwrap().code, "1JN");
        assert_eq!(lookup("1_John").unwrap().code, "1JN");
        assert_eq!(lookup("song of songs").unwrap().code, "SNG");
        assert_eq!(lookup("Song_of_Songs").unwrap().chapters, 8);
    }

    #[test]
    fn resolve_unknown_yields_placeholder() {
        let info = resolve("Nonsense");
        assert_eq!(info.code, PLACEHOLDER_CODE);
        assert_eq!(info.num, 0);
        assert_eq!(info.chapters, 0);
        assert!(lookup("").is_none());
    }
}
