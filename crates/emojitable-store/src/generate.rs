//! The generate pipeline: fetch, build, write
//!
//! Steps run strictly in sequence and any failure aborts before the write,
//! so the output file is either fully replaced or not touched at all.

use crate::errors::Result;
use crate::source::RecordSource;
use crate::writer::{write_table, OutputStyle};
use emojitable_core::core_types::schema::OP_GENERATE;
use emojitable_core::{build_table, log_op_end, log_op_error, log_op_start, BuildOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub source: String,
    pub output: PathBuf,
    pub record_count: usize,
    pub table_len: usize,
}

/// Fetch the records from `source`, build the table and write it to `output`
///
/// # Errors
///
/// Propagates the first fetch, schema, decode or write error unchanged.
pub fn generate(
    source: &dyn RecordSource,
    options: &BuildOptions,
    output: &Path,
    style: OutputStyle,
) -> Result<GenerateReport> {
    let start = Instant::now();
    let source_name = source.describe();
    log_op_start!(OP_GENERATE, source = %source_name, path = %output.display());

    let result = run(source, options, output, style).map(|(record_count, table_len)| {
        GenerateReport {
            source: source_name,
            output: output.to_path_buf(),
            record_count,
            table_len,
        }
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(report) => {
            log_op_end!(
                OP_GENERATE,
                duration_ms = duration_ms,
                record_count = report.record_count,
                table_len = report.table_len
            );
        }
        Err(err) => {
            log_op_error!(OP_GENERATE, err, duration_ms = duration_ms);
        }
    }
    result
}

fn run(
    source: &dyn RecordSource,
    options: &BuildOptions,
    output: &Path,
    style: OutputStyle,
) -> Result<(usize, usize)> {
    let records = source.fetch_records()?;
    let table = build_table(&records, options)?;
    write_table(&table, output, style)?;
    Ok((records.len(), table.len()))
}
