//! Command-line entry point: links Markdown footnotes read from files or
//! standard input and prints the result with an HTML endnote block.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use mdfootnote::{AllowedTags, Footnote, FootnoteConfig, RenderContext, Transformed, rewrite};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Convert Markdown-Extra footnotes into HTML endnotes")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files", conflicts_with = "json")]
    in_place: bool,
    /// Read defaults from a TOML file
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Give every file its own numbering and process files in parallel
    #[arg(long = "independent")]
    independent: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Documents to convert; standard input is read when none are given
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct FormatOpts {
    /// Continue numbering across files instead of restarting per file
    #[arg(long = "continuous")]
    continuous: bool,
    /// Indent the endnote block
    #[arg(long = "pretty")]
    pretty: bool,
    /// Print the linked text and footnotes as one JSON object per input
    #[arg(long = "json")]
    json: bool,
    /// Element wrapping the endnotes
    #[arg(long = "tag")]
    tag: Option<String>,
    /// Back-link content
    #[arg(long = "icon")]
    icon: Option<String>,
    #[arg(long = "wrapper-class")]
    wrapper_class: Option<String>,
    #[arg(long = "reference-class")]
    reference_class: Option<String>,
    #[arg(long = "backref-class")]
    backref_class: Option<String>,
    /// Pipe-delimited tags kept in footnote bodies
    #[arg(long = "allowed-tags", value_name = "TAGS")]
    allowed_tags: Option<String>,
}

impl FormatOpts {
    /// Layer command-line flags over `config`.
    fn apply(self, mut config: FootnoteConfig) -> FootnoteConfig {
        config.continuous |= self.continuous;
        config.pretty |= self.pretty;
        config.output_as_array |= self.json;
        if let Some(tag) = self.tag {
            config.tag = tag;
        }
        if let Some(icon) = self.icon {
            config.icon = icon;
        }
        if let Some(class) = self.wrapper_class {
            config.wrapper_class = class;
        }
        if let Some(class) = self.reference_class {
            config.reference_class = class;
        }
        if let Some(class) = self.backref_class {
            config.backref_class = class;
        }
        if let Some(list) = self.allowed_tags {
            config.allowed_tags = AllowedTags::parse(&list);
        }
        config
    }
}

#[derive(Serialize)]
struct Structured<'a> {
    text: &'a str,
    footnotes: &'a [Footnote],
}

fn render(ctx: &mut RenderContext, text: &str) -> anyhow::Result<String> {
    match ctx.format(text) {
        Transformed::Markup(out) => Ok(out.into_owned()),
        Transformed::Split { text, footnotes } => {
            let json = serde_json::to_string(&Structured {
                text: &text,
                footnotes: &footnotes,
            })?;
            Ok(json)
        }
    }
}

/// Convert one file, returning the text to print unless it was rewritten.
fn process_path(path: &Path, ctx: &mut RenderContext, in_place: bool) -> anyhow::Result<Option<String>> {
    if in_place {
        rewrite(path, ctx).with_context(|| format!("failed to rewrite {}", path.display()))?;
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    render(ctx, &content).map(Some)
}

fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line tool that links footnotes.
///
/// Reads standard input when no files are given. Files are converted in
/// argument order through one shared render context, so batch ids and
/// continuous numbering carry from file to file; `--independent` gives each
/// file a fresh context and converts them in parallel. A file that cannot be
/// read is reported and skipped, and the tool exits with an error once the
/// remaining files are done.
///
/// # Examples
///
/// ```sh
/// # Convert a document and print the result
/// mdfootnote chapter.md
///
/// # Number the notes of several fragments as one page
/// mdfootnote --continuous intro.md body.md
///
/// # Convert from standard input
/// cat chapter.md | mdfootnote --pretty
/// ```
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => FootnoteConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => FootnoteConfig::default(),
    };
    let config = cli.opts.apply(base);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let mut ctx = RenderContext::new(config);
        emit(&render(&mut ctx, &input)?);
        return Ok(());
    }

    let results: Vec<anyhow::Result<Option<String>>> = if cli.independent {
        cli.files
            .par_iter()
            .map(|path| {
                let mut ctx = RenderContext::new(config.clone());
                process_path(path, &mut ctx, cli.in_place)
            })
            .collect()
    } else {
        let mut ctx = RenderContext::new(config);
        cli.files
            .iter()
            .map(|path| process_path(path, &mut ctx, cli.in_place))
            .collect()
    };

    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(Some(out)) => emit(&out),
            Ok(None) => {}
            Err(err) => {
                eprintln!("mdfootnote: {err:#}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} file(s) could not be processed");
    }
    Ok(())
}
