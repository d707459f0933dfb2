//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod sfm;

use crate::model::Book;
use anyhow::{anyhow, Result};

/// Trait for rendering a Book into a specific output format.
pub trait Renderer {
    fn render(&self, book: &Book) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create the renderers for a `--format` value.
pub fn create_renderers(format: &str) -> Result<Vec<Box<dyn Renderer>>> {
    match format {
        "sfm" | "usfm" => Ok(vec![Box::new(sfm::SfmRenderer)]),
        "json" => Ok(vec![Box::new(json::JsonRenderer)]),
        "both" => Ok(vec![Box::new(sfm::SfmRenderer), Box::new(json::JsonRenderer)]),
        _ => Err(anyhow!("unknown format: {}. Use sfm, json, or both", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        let exts = |f: &str| -> Vec<String> {
            create_renderers(f)
                .unwrap()
                .iter()
                .map(|r| r.file_extension().to_string())
                .collect()
        };
        assert_eq!(exts("sfm"), ["sfm"]);
        assert_eq!(exts("usfm"), ["sfm"]);
        assert_eq!(exts("json"), ["json"]);
        assert_eq!(exts("both"), ["sfm", "json"]);
        assert!(create_renderers("xml").is_err());
    }
}
