use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kitap::analysis::oracle::NoOracle;
use kitap::document::{io, query};
use kitap::{AnalysisMode, Analyzer, LanguageProfile};

/// Infer a book's section structure from its extracted page text.
#[derive(Parser)]
#[command(name = "kitap", version, about)]
struct Cli {
    /// Document JSON produced by the text-extraction service
    input: PathBuf,

    /// Analysis mode
    #[arg(long, value_enum, default_value_t = AnalysisMode::Auto)]
    mode: AnalysisMode,

    /// Section count for the even-partition planner
    #[arg(long)]
    sections: Option<usize>,

    /// Split into fixed-size chunks of this many pages instead of analyzing
    #[arg(long, conflicts_with = "mode")]
    pages_per_section: Option<usize>,

    /// Language profile TOML (defaults to the user config or the built-in
    /// Kazakh/Russian profile)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write the structure JSON here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print a short text preview of each section to stderr
    #[arg(long)]
    preview: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let document = io::load_document(&cli.input)?;
    let profile = match &cli.profile {
        Some(path) => LanguageProfile::from_path(path)?,
        None => LanguageProfile::load()?,
    };

    let analyzer = Analyzer::with_profile(profile);
    let structure = match cli.pages_per_section {
        Some(pages) => analyzer.analyze_page_based(&document, pages)?,
        None => {
            analyzer
                .analyze(&document, cli.mode, cli.sections, None::<&NoOracle>)
                .await?
        }
    };

    if cli.preview {
        for section in &structure.sections {
            eprintln!(
                "[{}-{}] {}: {}",
                section.start_page,
                section.end_page,
                section.name,
                query::section_preview(&document, section, 120)
            );
        }
    }

    match &cli.output {
        Some(path) => io::save_structure(&structure, path)?,
        None => println!("{}", serde_json::to_string_pretty(&structure)?),
    }

    Ok(())
}
