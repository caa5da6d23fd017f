//! Release title classifier CLI
//!
//! Reads titles from stdin, one per line, and prints one JSON object per
//! title. `replay` checks a golden corpus fixture instead.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shirabe_core::types::{
    ClassifiedTitle, FrameRate, MediaOrigin, Resolution, SubtitleKind, SubtitleLanguage,
};
use shirabe_core::{load_cases, Classifier, ClassifierConfig, Vocabulary};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "shirabe-parse")]
#[command(about = "Classify anime release titles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Replace the built-in marker tables with a JSON vocabulary
    #[arg(long, value_name = "PATH")]
    vocabulary: Option<PathBuf>,

    /// Skip the pinned episode ranges for known titles
    #[arg(long)]
    no_quirks: bool,

    /// Do not infer closed subtitles from two or more tracks
    #[arg(long)]
    no_multi_track: bool,

    /// Do not report `S?` for disc batches without an episode token
    #[arg(long)]
    no_batch_fallback: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every title in a corpus fixture and report mismatches
    Replay {
        /// JSON fixture (array of title cases)
        fixture: PathBuf,
    },
}

impl Cli {
    fn classifier_config(&self) -> Result<ClassifierConfig> {
        let mut config = ClassifierConfig::new()
            .with_pinned_quirks(!self.no_quirks)
            .with_multi_track_inference(!self.no_multi_track)
            .with_batch_fallback(!self.no_batch_fallback);

        if let Some(path) = &self.vocabulary {
            let document = fs::read_to_string(path)
                .with_context(|| format!("Failed to read vocabulary {}", path.display()))?;
            let vocabulary = Vocabulary::from_json(&document)
                .with_context(|| format!("Invalid vocabulary {}", path.display()))?;
            config = config.with_vocabulary(vocabulary);
        }

        Ok(config)
    }
}

/// One line of output in stdin mode.
#[derive(Debug, Serialize)]
struct ParseOutput {
    input: String,
    episode_range: Option<String>,
    start: Option<String>,
    end: Option<String>,
    subtitle_languages: BTreeSet<SubtitleLanguage>,
    resolution: Option<Resolution>,
    subtitle_kind: Option<SubtitleKind>,
    frame_rate: Option<FrameRate>,
    media_origin: Option<MediaOrigin>,
    tags: Vec<String>,
    canonical: String,
}

impl From<ClassifiedTitle> for ParseOutput {
    fn from(result: ClassifiedTitle) -> Self {
        let canonical = result.canonical().to_string();
        let bounds = result.episode_range.as_ref().map(|range| range.bounds());

        Self {
            episode_range: result.episode_range.as_ref().map(ToString::to_string),
            start: bounds.as_ref().map(|(start, _)| start.clone()),
            end: bounds.map(|(_, end)| end),
            input: result.title,
            subtitle_languages: result.subtitle_languages,
            resolution: result.resolution,
            subtitle_kind: result.subtitle_kind,
            frame_rate: result.frame_rate,
            media_origin: result.media_origin,
            tags: result.tags,
            canonical,
        }
    }
}

fn classify_stdin(classifier: &Classifier) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = ParseOutput::from(classifier.classify(line));
        serde_json::to_writer(&mut out, &output)?;
        writeln!(out)?;
    }

    Ok(())
}

fn replay(classifier: &Classifier, fixture: &Path) -> Result<()> {
    let document = fs::read_to_string(fixture)
        .with_context(|| format!("Failed to read fixture {}", fixture.display()))?;
    let cases = load_cases(&document)
        .with_context(|| format!("Invalid fixture {}", fixture.display()))?;
    info!(cases = cases.len(), fixture = %fixture.display(), "replaying");

    let mut failed = 0usize;
    for case in &cases {
        let mismatches = case.verify(classifier);
        if mismatches.is_empty() {
            debug!(title = %case.title, "ok");
            continue;
        }

        failed += 1;
        println!("{}", case.title);
        for mismatch in &mismatches {
            println!("    {mismatch}");
        }
    }

    println!("{} / {} passed", cases.len() - failed, cases.len());
    if failed > 0 {
        bail!("{failed} titles regressed");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let classifier =
        Classifier::new(cli.classifier_config()?).context("Failed to build classifier")?;

    match &cli.command {
        Some(Commands::Replay { fixture }) => replay(&classifier, fixture),
        None => classify_stdin(&classifier),
    }
}
