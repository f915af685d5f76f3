//! hdoc — generate one page per documented header, plus an overview index.
//!
//! `hdoc -s include/project -r README.md docs/api`

use anyhow::{Context, Result};
use clap::Parser;
use hdoc::render;
use hdoc::{discover, Display, HeaderDocument, HeaderFilter, Page};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hdoc",
    about = "Extract documented classes and functions from C-family headers"
)]
struct Cli {
    /// Output directory for generated pages
    output: PathBuf,

    /// Header tree to walk recursively
    #[arg(short = 's', long, default_value = "include")]
    source: PathBuf,

    /// Project overview rendered as the index page
    #[arg(short = 'r', long, default_value = "README.md")]
    readme: PathBuf,

    /// Header file extension (without the dot)
    #[arg(short = 'e', long, default_value = "hh")]
    extension: String,

    /// Skip files whose path contains this text
    #[arg(long, default_value = "_impl")]
    impl_pattern: String,

    /// Output format: html (default), text
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Show folded text with markers, or resolve markers back to source
    #[arg(long, value_enum, default_value_t = Display::Folded)]
    display: Display,

    /// Title of the index page
    #[arg(short = 't', long, default_value = "Overview")]
    title: String,

    /// Log debug details
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;
    let filter = HeaderFilter {
        extension: cli.extension.trim_start_matches('.').to_string(),
        impl_pattern: cli.impl_pattern.clone(),
    };

    let candidates = discover::discover(&cli.source)?;
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory: {}", cli.output.display()))?;

    let mut written = 0usize;
    for candidate in &candidates {
        if let Err(rejection) = filter.check(&candidate.relative) {
            log::warn!("skipping {}", rejection);
            continue;
        }

        let content = fs::read_to_string(&candidate.path)
            .with_context(|| format!("failed to read {}", candidate.path.display()))?;
        let doc = HeaderDocument::build(&candidate.relative, &content);
        log::debug!(
            "{}: {} classes, {} functions",
            doc.path,
            doc.classes.len(),
            doc.functions.len()
        );

        let out_path = output_path(&cli.output, &doc.path, renderer.file_extension());
        write_page(&out_path, &renderer.render(&doc.page(cli.display)))?;
        written += 1;
    }

    // Overview index goes last
    let overview = fs::read_to_string(&cli.readme)
        .with_context(|| format!("failed to read overview {}", cli.readme.display()))?;
    let index_path = cli
        .output
        .join(format!("index.{}", renderer.file_extension()));
    write_page(
        &index_path,
        &renderer.render(&Page::overview(&cli.title, &overview)),
    )?;

    log::info!(
        "wrote {} header pages and index to {}",
        written,
        cli.output.display()
    );
    Ok(())
}

/// `<output>/<relative>.<ext>`, keeping the header's own extension:
/// "ui/widget.hh" → "ui/widget.hh.html"
fn output_path(output_dir: &Path, relative: &str, ext: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for part in relative.split('/') {
        path.push(part);
    }
    let mut name = path.into_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
