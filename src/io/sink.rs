//! Result sink: renders a schedule result and writes it to a file.
//!
//! The output file is truncated before writing, so each run replaces the
//! previous result instead of appending to it.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error};

use crate::error::{Error, Result};
use crate::models::ScheduleResult;

/// Renders the three result lines.
pub fn render(result: &ScheduleResult) -> Vec<String> {
    vec![
        format!(
            "Mobiles should be produced in the order: {:?}",
            result.job_sequence()
        ),
        format!(
            "Total production time for all mobiles is: {}",
            result.total_production_time()
        ),
        format!("Idle Time of Assembly unit: {}", result.total_idle_time()),
    ]
}

/// Writes the rendered result to `path`, replacing any prior content.
///
/// Missing parent directories are created.
///
/// # Errors
/// [`Error::SinkWrite`] if the file cannot be created or written.
pub fn write_result(path: impl AsRef<Path>, result: &ScheduleResult) -> Result<()> {
    let path = path.as_ref();
    let lines = render(result);

    write_lines(path, &lines).map_err(|source| {
        error!("Unable to write the result to {}: {source}", path.display());
        Error::SinkWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Output message {lines:?}");
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
