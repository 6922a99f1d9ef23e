use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use namefold::{
    consolidate, parse_detections_file, read_document, write_annotated, write_entities_json,
    write_grouped_json, MergeConfig, NameRules, Origin,
};

#[derive(Parser)]
#[command(name = "namefold")]
#[command(author, version, about = "Person-name detection consolidation for transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consolidate detector output for one document and write the results
    Process {
        /// Original document text the detections were computed against
        #[arg(short, long)]
        document: PathBuf,

        /// Detector entities JSON file
        #[arg(short = 'i', long)]
        detections: PathBuf,

        /// Output file for the canonical grouped entities (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for the merged detection list (JSON)
        #[arg(long)]
        merged_json: Option<PathBuf>,

        /// Output file for the annotated document (text)
        #[arg(long)]
        annotated: Option<PathBuf>,

        /// Maximum character gap between fragments of one name
        #[arg(long, default_value = "5")]
        max_gap: usize,

        /// Cap on merged name length in characters
        #[arg(long, default_value = "60")]
        max_name_chars: usize,

        /// Maximum whitespace-separated tokens in a valid name
        #[arg(long, default_value = "7")]
        max_tokens: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a consolidation pass without writing anything
    Analyze {
        /// Original document text the detections were computed against
        #[arg(short, long)]
        document: PathBuf,

        /// Detector entities JSON file
        #[arg(short = 'i', long)]
        detections: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            document,
            detections,
            output,
            merged_json,
            annotated,
            max_gap,
            max_name_chars,
            max_tokens,
            verbose,
        } => {
            setup_logging(verbose);
            process_document(
                document,
                detections,
                output,
                merged_json,
                annotated,
                max_gap,
                max_name_chars,
                max_tokens,
            )
        }
        Commands::Analyze {
            document,
            detections,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_document(document, detections)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn process_document(
    document_path: PathBuf,
    detections_path: PathBuf,
    output: PathBuf,
    merged_json: Option<PathBuf>,
    annotated: Option<PathBuf>,
    max_gap: usize,
    max_name_chars: usize,
    max_tokens: usize,
) -> Result<()> {
    info!("Loading document from {:?}", document_path);
    let document = read_document(&document_path)?;

    info!("Loading detections from {:?}", detections_path);
    let detections = parse_detections_file(&detections_path)
        .context("Failed to parse detector output")?;
    info!("Loaded {} person detections", detections.len());

    let config = MergeConfig {
        max_gap_chars: max_gap,
        max_name_chars,
    };
    let rules = NameRules {
        max_tokens,
        ..Default::default()
    };

    let result = consolidate(&detections, &document, &config, &rules);
    info!(
        "Consolidated into {} merged detections, {} canonical groups",
        result.merged.len(),
        result.groups.len()
    );

    write_grouped_json(&result.groups, &output)?;
    info!("Grouped entities written to {:?}", output);

    if let Some(path) = merged_json {
        write_entities_json(&result.merged, &path)?;
        info!("Merged entities written to {:?}", path);
    }

    if let Some(path) = annotated {
        write_annotated(&result.annotated, &path)?;
        info!("Annotated document written to {:?}", path);
    }

    Ok(())
}

fn analyze_document(document_path: PathBuf, detections_path: PathBuf) -> Result<()> {
    let document = read_document(&document_path)?;
    let detections = parse_detections_file(&detections_path)
        .context("Failed to parse detector output")?;

    let rule_count = detections
        .iter()
        .filter(|d| d.origin == Origin::Rule)
        .count();
    let model_count = detections.len() - rule_count;

    println!("Detection Analysis");
    println!("==================");
    println!("Document length: {} chars", document.chars().count());
    println!("Raw detections: {}", detections.len());
    println!("  rule-based: {}", rule_count);
    println!("  model-based: {}", model_count);
    println!();

    let result = consolidate(
        &detections,
        &document,
        &MergeConfig::default(),
        &NameRules::default(),
    );

    println!("Consolidation");
    println!("-------------");
    println!("Merged detections: {}", result.merged.len());
    println!("Canonical groups: {}", result.groups.len());
    println!();

    println!("Largest Groups");
    println!("--------------");
    let mut by_occurrences: Vec<(&String, usize)> = result
        .groups
        .iter()
        .map(|(name, spans)| (name, spans.len()))
        .collect();
    by_occurrences.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    for (name, count) in by_occurrences.iter().take(10) {
        println!("{}: {} occurrences", name, count);
    }

    Ok(())
}
