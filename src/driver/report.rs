//! Writers for batch results, one [`FileReport`] per input file.

use std::io::{self, Write};

use serde::Serialize;

use crate::driver::batch::QueryResult;

/// Results of one input file, labelled with its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub results: Vec<QueryResult>,
}

/// One distance per line, in query order.
pub fn write_distances(out: &mut impl Write, results: &[QueryResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", result.distance)?;
    }
    Ok(())
}

/// A `File <path> calculations in progress...` header followed by the
/// file's distances.
pub fn write_text(out: &mut impl Write, report: &FileReport) -> io::Result<()> {
    writeln!(out, "File {} calculations in progress...", report.file)?;
    write_distances(out, &report.results)
}

/// All reports as a single JSON array of `{"file", "results"}` objects.
pub fn write_json(out: &mut impl Write, reports: &[FileReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports).map_err(io::Error::from)?;
    writeln!(out)
}
