use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use log::info;

use crate::error::{BenchError, Result};

pub const PARALLEL_HEADER: &str = "Tp ticks";
pub const SINGLE_HEADER: &str = "T1 ticks";

const DELIMITER: &str = ";";

/// Seconds with ten fixed decimals and a comma as decimal separator.
pub fn format_duration(duration: Duration) -> String {
    format!("{:.10}", duration.as_secs_f64()).replace('.', ",")
}

/// A header cell followed by one timing cell per experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementRow {
    cells: Vec<String>,
}

impl MeasurementRow {
    pub fn new(header: &str) -> Self {
        MeasurementRow { cells: vec![header.to_string()] }
    }

    pub fn push(&mut self, duration: Duration) {
        self.cells.push(format_duration(duration));
    }

    pub fn header(&self) -> &str {
        &self.cells[0]
    }

    pub fn values(&self) -> &[String] {
        &self.cells[1..]
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Parallel row first, single-worker row second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    parallel: MeasurementRow,
    single: MeasurementRow,
}

impl ResultTable {
    pub fn new(parallel: MeasurementRow, single: MeasurementRow) -> Self {
        assert_eq!(parallel.len(), single.len(),
            "Measurement rows differ in length: {} vs {}", parallel.len(), single.len());
        ResultTable { parallel, single }
    }

    pub fn parallel(&self) -> &MeasurementRow {
        &self.parallel
    }

    pub fn single(&self) -> &MeasurementRow {
        &self.single
    }

    pub fn nb_experiments(&self) -> usize {
        self.parallel.values().len()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        vec![self.parallel.cells().to_vec(), self.single.cells().to_vec()]
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_rows(path, &self.rows())
    }
}

/// Writes each row as `;`-joined fields terminated by `\n`.
pub fn write_rows(path: impl AsRef<Path>, rows: &[Vec<String>]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| BenchError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for row in rows {
        writeln!(writer, "{}", row.join(DELIMITER)).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    info!("Data successfully written to {}", path.display());
    Ok(())
}
