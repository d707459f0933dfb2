//! JSON renderer — the book object as written and read back by `--json`.

use crate::model::Book;
use crate::render::Renderer;
use anyhow::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, book: &Book) -> Result<String> {
        let mut out = book.to_json_pretty()?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
