//! Command-line interface for bulletsplit.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use bulletsplit_core::{strip_markup, SplitEngine, DEFAULT_MAX_BULLETS};

use crate::dataset::{column_index, load_csv, save_csv, split_record};
use crate::error::{Result, SplitError};

/// Bulletsplit - segment free text at numeric bullet markers.
#[derive(Parser)]
#[command(name = "bulletsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a single text into bullet segments.
    Split {
        /// Text to split (reads stdin when omitted)
        text: Option<String>,

        /// Maximum bullet count to consider
        #[arg(short, long, default_value_t = DEFAULT_MAX_BULLETS as u32, value_parser = clap::value_parser!(u32).range(2..))]
        max_bullets: u32,

        /// Print the segments as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Split a text column of a CSV file row by row.
    Csv {
        /// Input CSV path
        input: PathBuf,

        /// Name of the text column to split
        #[arg(short, long)]
        column: String,

        /// Output CSV path (default: <input stem>_split.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum bullet count to consider
        #[arg(short, long, default_value_t = DEFAULT_MAX_BULLETS as u32, value_parser = clap::value_parser!(u32).range(2..))]
        max_bullets: u32,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            text,
            max_bullets,
            json,
        } => split_command(text.as_deref(), max_bullets as usize, json),
        Commands::Csv {
            input,
            column,
            output,
            max_bullets,
        } => csv_command(&input, &column, output, max_bullets as usize),
    }
}

/// Execute the split command on one text.
fn split_command(text: Option<&str>, max_bullets: usize, json: bool) -> Result<()> {
    let raw = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let engine = SplitEngine::new().with_max_bullets(max_bullets);
    let segments = engine.split(&strip_markup(&raw));

    if json {
        println!("{}", serde_json::to_string(&segments)?);
        return Ok(());
    }

    println!(
        "{} {} segment(s)",
        style("Found").bold(),
        style(segments.len()).cyan()
    );
    for (i, segment) in segments.iter().enumerate() {
        println!("{} {}", style(format!("[{}]", i + 1)).green(), segment);
    }

    Ok(())
}

/// Execute the csv command on a whole file.
fn csv_command(
    input: &Path,
    column: &str,
    output: Option<PathBuf>,
    max_bullets: usize,
) -> Result<()> {
    if !input.is_file() {
        return Err(SplitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    let output_path = output.unwrap_or_else(|| default_output_path(input));

    println!(
        "{} column {} of {}",
        style("Splitting").bold(),
        style(column).cyan(),
        style(input.display()).green()
    );

    let (headers, records) = load_csv(input)?;
    let index = column_index(&headers, column)?;

    let engine = SplitEngine::new().with_max_bullets(max_bullets);

    let pb = ProgressBar::new(records.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} rows")
            .expect("valid template"),
    );

    let mut out_records = Vec::with_capacity(records.len());
    let mut split_rows = 0usize;
    for record in &records {
        let (out, segment_count) = split_record(record, index, &engine)?;
        if segment_count > 1 {
            split_rows += 1;
        }
        out_records.push(out);
        pb.inc(1);
    }
    pb.finish_and_clear();

    save_csv(&output_path, &headers, column, &out_records)?;

    println!("  Rows: {}", records.len());
    println!("  With bullet lists: {}", style(split_rows).cyan());
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Default output path next to the input: `<stem>_split.csv`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_split.csv"))
}
