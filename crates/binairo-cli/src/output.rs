use anyhow::{Context, Result};
use binairo_core::Grid;
use clap::ValueEnum;
use std::io::Write;

/// How solutions are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Rows of space-separated cells, a blank line after each grid
    Text,
    /// One JSON array of rows per line
    Json,
}

pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for row in grid.rows() {
                let cells: Vec<String> = row.cells().iter().map(|c| c.to_string()).collect();
                writeln!(out, "{}", cells.join(" "))?;
            }
            writeln!(out)?;
        }
        Format::Json => {
            let line = serde_json::to_string(&grid.to_bits()).context("serializing grid")?;
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
