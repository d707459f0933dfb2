//! toolbox2sfm — consolidate Toolbox interlinear exports into SFM books.
//!
//! Each input file holds one chapter and is named `<Book>_Ch<n>.txt`. Files
//! are grouped by book, assembled chapter by chapter, and written out as
//! `<CODE>.sfm` and/or `<CODE>.json`:
//!
//! - `toolbox2sfm -p MyProject -t Ruth_Ch1.txt -t Ruth_Ch2.txt`
//! - `toolbox2sfm -p MyProject -d exports/ -o out/`
//! - `toolbox2sfm -p MyProject -j out/RUT.json -f sfm`

mod discover;
mod model;
mod parser;
mod registry;
mod render;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use model::Book;
use parser::filename::{self, Target};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "toolbox2sfm",
    about = "Convert Toolbox interlinear text files into SFM scripture books",
    group(ArgGroup::new("input").required(true).multiple(true).args(["text", "dir", "json"]))
)]
struct Cli {
    /// Toolbox text file. Can be specified multiple times.
    #[arg(short = 't', long)]
    text: Vec<String>,

    /// Directory searched recursively for *.txt files (glob patterns supported)
    #[arg(short = 'd', long)]
    dir: Vec<String>,

    /// Previously written book JSON to start from
    #[arg(short = 'j', long)]
    json: Option<PathBuf>,

    /// Project name written into the \id line and the book header
    #[arg(short = 'p', long)]
    project: String,

    /// Output directory
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Output format: sfm, json, or both (default)
    #[arg(short = 'f', long, default_value = "both")]
    format: String,

    /// Fail if any file produced warnings
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let warnings = run(&cli)?;

    if cli.strict && warnings > 0 {
        bail!("{} warning(s) reported in --strict mode", warnings);
    }
    Ok(())
}

/// Parse every input, write every book. Returns the number of warnings.
fn run(cli: &Cli) -> Result<usize> {
    let renderers = render::create_renderers(&cli.format)?;

    let mut books: BTreeMap<u32, Book> = BTreeMap::new();
    if let Some(ref json_path) = cli.json {
        let book = load_book(json_path, &cli.project)?;
        books.insert(book.info().num, book);
    }

    let mut inputs = cli.text.clone();
    inputs.extend(cli.dir.iter().cloned());
    let files = if inputs.is_empty() {
        Vec::new()
    } else {
        discover::list_files(&inputs)?
    };

    let mut warnings = 0;
    let mut targets: Vec<(Target, PathBuf)> = Vec::new();
    for path in files {
        let target = filename::infer(&path);
        if !target.matched {
            log::warn!(
                "{}: filename does not match <Book>_Ch<n>.txt, skipping",
                path.display()
            );
            warnings += 1;
            continue;
        }
        if target.book.code == registry::PLACEHOLDER_CODE {
            log::warn!("{}: unknown book, skipping", path.display());
            warnings += 1;
            continue;
        }
        targets.push((target, path));
    }
    targets.sort_by(|(a, pa), (b, pb)| {
        (a.book.num, a.chapter, pa).cmp(&(b.book.num, b.chapter, pb))
    });

    for (target, path) in targets {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let book = books
            .entry(target.book.num)
            .or_insert_with(|| Book::new(cli.project.clone(), target.book.clone()));

        match parser::parse_into(book, target.chapter, &raw) {
            Ok(report) => {
                log::debug!(
                    "{}: {} chapter {} ({:?})",
                    path.display(),
                    target.book.code,
                    target.chapter,
                    report.mode
                );
                for diag in &report.diagnostics {
                    log::warn!("{}: {}", path.display(), diag);
                }
                warnings += report.diagnostics.len();
            }
            Err(e) => {
                log::warn!("{}: {}, skipping", path.display(), e);
                warnings += 1;
            }
        }
    }

    if books.is_empty() {
        log::warn!("no books to write");
        return Ok(warnings);
    }

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    for book in books.values() {
        for renderer in &renderers {
            let out_path = cli
                .output
                .join(format!("{}.{}", book.info().code, renderer.file_extension()));
            let output = renderer
                .render(book)
                .with_context(|| format!("failed to render {}", book.info().name))?;
            fs::write(&out_path, output)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
        }
        log::info!(
            "{}: {} of {} chapters",
            book.info().name,
            book.filled_chapters().count(),
            book.info().chapters
        );
    }

    Ok(warnings)
}

/// Read a book JSON, taking the project name from the command line.
fn load_book(path: &Path, project: &str) -> Result<Book> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut book =
        Book::from_json(&input).with_context(|| format!("invalid book JSON: {}", path.display()))?;
    book.header.project_name = project.to_string();
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn project_is_required() {
        assert!(Cli::try_parse_from(["toolbox2sfm", "-t", "Ruth_Ch1.txt"]).is_err());
    }

    #[test]
    fn some_input_is_required() {
        assert!(Cli::try_parse_from(["toolbox2sfm", "-p", "P"]).is_err());
        let cli = Cli::try_parse_from(["toolbox2sfm", "-p", "P", "-d", "exports"]).unwrap();
        assert_eq!(cli.dir, ["exports"]);
        assert_eq!(cli.format, "both");
    }
}
