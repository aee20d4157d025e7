use std::path::Path;

use snafu::prelude::*;

use crate::feedback::FeedbackResult;

/// How the bytes of an input file are decoded.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum FileKind {
    Delimited,
    Spreadsheet,
}

/// Picks the loader for a file: the explicit type hint wins, else the file
/// extension decides.
pub fn file_kind(path: &str, input_type: Option<&str>) -> FeedbackResult<FileKind> {
    match input_type {
        Some("csv") => return Ok(FileKind::Delimited),
        Some("excel") => return Ok(FileKind::Spreadsheet),
        Some(x) => whatever!("Unknown input type {:?} (expected 'csv' or 'excel')", x),
        None => {}
    }
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension.as_deref() {
        Some("csv") => Ok(FileKind::Delimited),
        Some("xlsx") | Some("xls") => Ok(FileKind::Spreadsheet),
        _ => whatever!(
            "Cannot infer the input type of {:?}, use the --input-type option",
            path
        ),
    }
}
