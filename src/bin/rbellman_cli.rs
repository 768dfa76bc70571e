//! rbellman CLI: answer shortest-path queries from test-case files
//!
//! Usage: rbellman_cli [FILES]... [--output PATH] [--format text|json]
//! With no files, paths are read interactively from stdin until `exit`.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rbellman::driver::{solve, write_distances, write_json, write_text, FileReport, QueryResult};

#[derive(Parser)]
#[command(name = "rbellman_cli")]
#[command(about = "Shortest distances between cities, negative roads allowed", long_about = None)]
struct Cli {
    /// Test-case files to process in order
    files: Vec<PathBuf>,

    /// Write results to this file (conventionally `output.txt`) instead of
    /// stdout; file mode only
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One distance per line
    Text,
    /// One JSON array with a `{file, results}` object per input file
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.files.is_empty() {
        interactive(cli.format)
    } else {
        batch(&cli.files, cli.output.as_deref(), cli.format)
    }
}

fn batch(files: &[PathBuf], output: Option<&Path>, format: Format) -> Result<()> {
    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    let mut reports = Vec::new();
    for path in files {
        let report = FileReport {
            file: path.display().to_string(),
            results: solve_file(path)?,
        };
        match format {
            Format::Text => write_text(&mut out, &report)?,
            // Emitted once at the end so the output stays one JSON document.
            Format::Json => reports.push(report),
        }
    }
    if let Format::Json = format {
        write_json(&mut out, &reports)?;
    }
    out.flush()?;
    Ok(())
}

fn interactive(format: Format) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    loop {
        writeln!(out, "Enter the path to a file with test cases or *exit* to close application")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("Failed to read from stdin")?;
        let path = line.trim();
        if path.eq_ignore_ascii_case("exit") {
            return Ok(());
        }
        if !Path::new(path).is_file() {
            writeln!(out, "File {path} not found")?;
            continue;
        }
        match solve_file(Path::new(path)) {
            Ok(results) => match format {
                Format::Text => write_distances(&mut out, &results)?,
                Format::Json => write_json(
                    &mut out,
                    &[FileReport {
                        file: path.to_string(),
                        results,
                    }],
                )?,
            },
            Err(e) => writeln!(out, "{e:#}")?,
        }
    }
}

fn solve_file(path: &Path) -> Result<Vec<QueryResult>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    solve(&text).with_context(|| format!("Failed to solve {}", path.display()))
}
