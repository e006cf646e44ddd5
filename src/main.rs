//! luadoc — generate an HTML reference page from `---` doc comments in Lua sources.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `luadoc < file.lua` prints the page to stdout
//! - **file mode**: `luadoc -o docs/index.html src/ lib/*.lua` writes the page
//!   and its `luadoc.css` stylesheet

mod discover;
mod error;
mod generator;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use generator::Generator;
use render::{RenderOptions, STYLESHEET_NAME};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "luadoc",
    about = "Generate HTML documentation from @method/@param/@return comments in Lua files"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// HTML output file; the stylesheet is written next to it
    #[arg(short = 'o', long, default_value = "documentation.html")]
    output: PathBuf,

    /// Page title
    #[arg(short = 't', long, default_value = "Documentation")]
    title: String,

    /// Skip files whose name matches this glob pattern. Can be given multiple times.
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let options = RenderOptions {
        title: cli.title.clone(),
        generated: Local::now(),
    };

    if cli.files.is_empty() {
        return stdin_mode(&options);
    }

    file_mode(&cli, &options)
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// stdin mode: one source from stdin, page to stdout.
fn stdin_mode(options: &RenderOptions) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut generator = Generator::new();
    generator.add_source("<stdin>", &input)?;
    let rendered = generator.finish(options)?;
    print!("{}", rendered.html);
    Ok(())
}

/// file mode: parse every discovered file, then write page and stylesheet.
fn file_mode(cli: &Cli, options: &RenderOptions) -> Result<()> {
    let input_files = discover::expand_inputs(&cli.files, &cli.exclude)?;

    // Any failure aborts before anything is written
    let mut generator = Generator::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        generator.add_source(&path.display().to_string(), &content)?;
    }
    let records = generator.record_count();
    if records == 0 {
        warn!("no documented methods found");
    }
    let rendered = generator.finish(options)?;

    let output_dir = cli
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    fs::write(&cli.output, &rendered.html)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        files = input_files.len(),
        records = records,
        path = %cli.output.display(),
        "wrote page"
    );

    let stylesheet = output_dir.join(STYLESHEET_NAME);
    fs::write(&stylesheet, &rendered.stylesheet)
        .with_context(|| format!("failed to write {}", stylesheet.display()))?;
    info!(path = %stylesheet.display(), "wrote stylesheet");
    Ok(())
}
