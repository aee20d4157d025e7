// Primitives for reading delimited-text feedback exports.

use log::debug;
use snafu::prelude::*;

use likert_summary::builder::TableBuilder;
use likert_summary::Table;

use crate::feedback::{
    BFeedbackResult, CsvLineParseSnafu, CsvOpenSnafu, FeedbackError, InvalidTableSnafu,
};

pub fn read_csv_table(path: &str) -> BFeedbackResult<Table> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let mut records = rdr.into_records();

    let header = match records.next() {
        Some(line_r) => line_r.context(CsvLineParseSnafu { lineno: 1usize })?,
        None => {
            return Err(Box::new(FeedbackError::MissingHeader {
                path: path.to_string(),
            }))
        }
    };
    let names: Vec<String> = header.iter().map(|s| s.to_string()).collect();
    let mut builder = TableBuilder::new(&names).context(InvalidTableSnafu { path })?;

    for (idx, line_r) in records.enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, line);
        let cells: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        builder.push_row(&cells).context(InvalidTableSnafu { path })?;
    }
    Ok(builder.build())
}
