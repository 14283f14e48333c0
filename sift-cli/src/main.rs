//! sift command line
//!
//! Extracts body words, title words, links and the base URL from HTML files,
//! and builds small term indexes from them.
//!
//! - sift parse page.html              # Print what the lexer extracted
//! - sift parse --json page.html       # Same, as JSON
//! - sift index --out idx a.html b.html

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use sift_common::warning::{clear_warnings, set_muted};
use sift_html::{ParsedPage, parse_html};
use sift_index::{CodecKind, Document, IndexWriter, IndexWriterConfig, LocalDirectory};

/// sift: best-effort HTML token extraction for crawl and index pipelines
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print words, title words, links and base of a file
    sift parse ./index.html

    # Parse inline HTML
    sift parse --html '<title>Test</title><a href="/x">link</a>'

    # Absolute link URLs, as JSON
    sift parse --json --resolve ./index.html

    # Build an index with one segment
    sift index --out ./idx ./a.html ./b.html
"#)]
struct Cli {
    /// Do not print lexer diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract tokens and links from one document
    Parse(ParseArgs),
    /// Index documents into a new directory
    Index(IndexArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Path to an HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Resolve link URLs against the document base
    #[arg(long)]
    resolve: bool,
}

#[derive(Args, Debug)]
struct IndexArgs {
    /// Index directory to create; must not exist
    #[arg(short, long, value_name = "DIR")]
    out: PathBuf,

    /// Segment file encoding (text or json)
    #[arg(long, default_value_t = CodecKind::Text)]
    codec: CodecKind,

    /// HTML files to index, one document each
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_muted(cli.quiet);

    match cli.command {
        Command::Parse(args) => parse(&args),
        Command::Index(args) => index(&args),
    }
}

fn parse(args: &ParseArgs) -> Result<()> {
    let bytes = if let Some(ref html) = args.html {
        html.as_bytes().to_vec()
    } else if let Some(ref path) = args.path {
        read_bytes(path)?
    } else {
        anyhow::bail!("parse requires a file path or --html")
    };

    let mut page = parse_html(&bytes);
    if args.resolve {
        resolve_links(&mut page);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn index(args: &IndexArgs) -> Result<()> {
    let directory = LocalDirectory::create(&args.out)
        .with_context(|| format!("cannot create index at {}", args.out.display()))?;
    let config = IndexWriterConfig::new().with_codec(args.codec);
    let mut writer = IndexWriter::new(config, directory);

    for path in &args.files {
        let bytes = read_bytes(path)?;
        // Report each distinct problem once per document, not once per run.
        clear_warnings();
        let mut document = Document::from_page(&parse_html(&bytes));
        let id = writer.add_document(&mut document);
        println!("{} {} as document {id}", "indexed".green(), path.display());
    }

    let written = writer
        .flush()
        .with_context(|| format!("cannot write segment to {}", args.out.display()))?;
    println!("\n{}", "=== Segment 0 ===".bold());
    for name in written {
        println!("  {}", args.out.join(name).display());
    }
    Ok(())
}

/// Read a document as raw bytes. No encoding is assumed.
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn resolve_links(page: &mut ParsedPage) {
    let base = page.base.clone();
    for link in &mut page.links {
        link.url = link.resolve(&base);
    }
}

/// Print what the lexer extracted to stdout.
fn print_page(page: &ParsedPage) {
    println!("{}", "=== Title ===".bold());
    println!("{}", page.title_words.join(" "));

    println!("\n{}", "=== Words ===".bold());
    println!("{} words", page.words.len());
    println!("{}", page.words.join(" "));

    println!("\n{}", "=== Links ===".bold());
    for link in &page.links {
        if link.anchor_text.is_empty() {
            println!("  - {}", link.url.cyan());
        } else {
            println!("  - {} {}", link.url.cyan(), link.anchor_text.join(" ").dimmed());
        }
    }

    if !page.base.is_empty() {
        println!("\n{}", "=== Base ===".bold());
        println!("{}", page.base);
    }

    if !page.issues.is_empty() {
        println!("\n{}", "=== Scan Issues ===".bold());
        for issue in &page.issues {
            println!(
                "  - {} at byte {} ({} bytes discarded)",
                issue.kind.yellow(),
                issue.offset,
                issue.discarded
            );
        }
    }
}
