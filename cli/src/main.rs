//! pdfoutline CLI - document outline inference from layout dumps

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::batch::{self, BatchItem};
use pdfoutline::{outline_file, render, JsonFormat, LanguageProfile, LayoutDocument, OutlineOptions};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Infer titles and heading outlines from PDF layout dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one layout dump
    Outline {
        /// Input layout dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputMode,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Include the language profile
        #[arg(long)]
        languages: bool,
    },

    /// Extract outlines for every layout dump in a directory
    Batch {
        /// Directory of layout dumps
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory for outline files
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Include the language profile
        #[arg(long)]
        languages: bool,
    },

    /// Show the language profile of a layout dump
    Languages {
        /// Input layout dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// {"title": ..., "outline": [...]} JSON
    Json,
    /// Indented heading tree
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            format,
            compact,
            languages,
        } => cmd_outline(&input, output.as_deref(), format, compact, languages),
        Commands::Batch {
            input,
            output,
            compact,
            languages,
        } => cmd_batch(&input, &output, compact, languages),
        Commands::Languages { input } => cmd_languages(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    mode: OutputMode,
    compact: bool,
    languages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = OutlineOptions::new().with_languages(languages);
    let outline = outline_file(input, &options)?;

    let content = match mode {
        OutputMode::Json => render::to_json(&outline, json_format(compact))?,
        OutputMode::Text => render::to_text(&outline),
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    compact: bool,
    languages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let total = batch::collect_inputs(input)?.len();
    let options = OutlineOptions::new().with_languages(languages);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = batch::process_directory_with(
        input,
        output,
        &options,
        json_format(compact),
        |item: &BatchItem| {
            let name = item
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            pb.set_message(name);
            pb.inc(1);
        },
    )?;
    pb.finish_with_message("Done!");

    println!();
    println!(
        "{} {} processed, {} failed",
        "Batch complete:".green().bold(),
        report.processed,
        report.failed.len()
    );
    for (path, error) in &report.failed {
        println!("  {} {}: {}", "└─".dimmed(), path.display(), error.yellow());
    }
    println!("{} {}", "Output:".bold(), output.display());

    Ok(())
}

fn cmd_languages(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let doc = LayoutDocument::from_json(&json)?;
    let text = doc.full_text.clone().unwrap_or_else(|| doc.plain_text());
    let profile = LanguageProfile::detect(&text);

    println!("{}", "Language Profile".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Primary".bold(), profile.primary);
    println!(
        "{}: {}",
        "Multilingual".bold(),
        if profile.is_multilingual { "Yes" } else { "No" }
    );

    println!();
    for (language, confidence) in &profile.ranked {
        println!("  {:<12} {:>7.2}%", language.to_string(), confidence);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline inference from PDF layout dumps");
    println!();
    println!("License: MIT");
}
