//! Robokit CLI - xlsx workbook inspection and editing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use robokit::prelude::*;
use robokit::sheet_bounds;

#[derive(Parser)]
#[command(name = "robokit")]
#[command(author, version, about = "Workbook inspection and editing tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a workbook
    Info {
        /// Input workbook file (xlsx)
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input workbook file (xlsx)
        input: PathBuf,
    },

    /// Read a single cell (1-based coordinates)
    Read {
        /// Input workbook file (xlsx)
        input: PathBuf,

        /// Row number
        #[arg(short, long)]
        row: u32,

        /// Column number
        #[arg(short, long)]
        col: u32,

        /// Sheet name (default: active sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Write a single cell and save (1-based coordinates)
    Write {
        /// Input workbook file (xlsx)
        input: PathBuf,

        /// Row number
        #[arg(short, long)]
        row: u32,

        /// Column number
        #[arg(short, long)]
        col: u32,

        /// Value to write; numbers and TRUE/FALSE are detected, anything
        /// else is written as text
        #[arg(short, long)]
        value: String,

        /// Sheet name (default: active sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Save to this path instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Read {
            input,
            row,
            col,
            sheet,
        } => read_cell(&input, row, col, sheet.as_deref()),
        Commands::Write {
            input,
            row,
            col,
            value,
            sheet,
            output,
        } => write_cell(&input, row, col, &value, sheet.as_deref(), output.as_deref()),
    }
}

fn open(input: &Path) -> Result<WorkbookManager> {
    let mut manager = WorkbookManager::new();
    manager
        .open_workbook(&input.to_string_lossy(), None)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    Ok(manager)
}

fn show_info(input: &Path) -> Result<()> {
    let manager = open(input)?;
    let names = manager.sheet_names()?;

    println!("{}", input.display());
    println!("  sheets: {}", names.len());
    for name in &names {
        let sheet = manager.sheet(Some(name))?;
        let (rows, cols) = sheet_bounds(sheet);
        println!("  {name}: {rows} rows x {cols} cols");
    }
    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let manager = open(input)?;
    for name in manager.sheet_names()? {
        println!("{name}");
    }
    Ok(())
}

fn read_cell(input: &Path, row: u32, col: u32, sheet: Option<&str>) -> Result<()> {
    let manager = open(input)?;
    let value = manager
        .read_cell(row, col, sheet)
        .with_context(|| format!("Failed to read cell ({row}, {col})"))?;
    println!("{value}");
    Ok(())
}

fn write_cell(
    input: &Path,
    row: u32,
    col: u32,
    raw: &str,
    sheet: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let mut manager = open(input)?;
    manager
        .write_cell(row, col, parse_value(raw), sheet)
        .with_context(|| format!("Failed to write cell ({row}, {col})"))?;

    let target = output.map(|p| p.to_string_lossy().into_owned());
    manager
        .save_workbook(target.as_deref())
        .context("Failed to save workbook")?;
    Ok(())
}

/// Detect numbers and booleans the way spreadsheet input does; everything
/// else is text.
fn parse_value(raw: &str) -> CellValue {
    if let Ok(n) = raw.parse::<f64>() {
        CellValue::Number(n)
    } else if raw.eq_ignore_ascii_case("true") {
        CellValue::Bool(true)
    } else if raw.eq_ignore_ascii_case("false") {
        CellValue::Bool(false)
    } else {
        CellValue::text(raw)
    }
}
