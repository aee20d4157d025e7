use log::{info, warn};

use snafu::{prelude::*, Snafu};

use std::fs;

use serde_json::Value as JSValue;
use text_diff::print_diff;

use likert_summary::{run_feedback_stats, suggest_question_columns, SummaryErrors, Table};

use crate::args::Args;
use crate::feedback::io_common::FileKind;

pub mod chart;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;

#[derive(Debug, Snafu)]
pub enum FeedbackError {
    #[snafu(display("Error opening workbook {path}"))]
    OpeningWorkbook {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Missing worksheet {name} in workbook {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Workbook {path} contains no worksheet"))]
    EmptyWorkbook { path: String },
    #[snafu(display("File {path} is missing a header row"))]
    MissingHeader { path: String },
    #[snafu(display("Error opening delimited file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("File {path} does not contain a usable table: {source}"))]
    InvalidTable {
        source: SummaryErrors,
        path: String,
    },
    #[snafu(display("Analysis failed: {source}"))]
    Aggregation { source: SummaryErrors },
    #[snafu(display("Error opening summary file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error converting chart data to JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing chart data to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Chart data differs from the reference file {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;
pub type BFeedbackResult<T> = Result<T, Box<FeedbackError>>;

/// Loads the feedback table from a delimited-text or spreadsheet file.
///
/// The file kind is normally inferred from the extension; `input_type`
/// overrides the inference. Any decoding or structural failure halts the
/// workflow here, before aggregation.
pub fn load_table(
    path: &str,
    input_type: Option<&str>,
    worksheet_name: Option<String>,
) -> BFeedbackResult<Table> {
    info!("Attempting to read feedback file {:?}", path);
    match io_common::file_kind(path, input_type)? {
        FileKind::Delimited => io_csv::read_csv_table(path),
        FileKind::Spreadsheet => io_excel::read_excel_table(path, worksheet_name),
    }
}

/// The whole workflow of one invocation: load the table, resolve the column
/// selection, aggregate, assemble the chart data and write it out.
pub fn run_analysis(args: &Args) -> BFeedbackResult<()> {
    let table = load_table(
        &args.input,
        args.input_type.as_deref(),
        args.excel_worksheet_name.clone(),
    )?;
    info!(
        "run_analysis: {:?} rows and {:?} columns in {:?}",
        table.num_rows(),
        table.column_names().len(),
        args.input
    );

    if args.list_columns {
        let suggested = suggest_question_columns(&table);
        for name in table.column_names() {
            let mark = if suggested.contains(name) { "[x]" } else { "[ ]" };
            println!("{} {}", mark, name);
        }
        return Ok(());
    }

    let selection: Vec<String> = match &args.columns {
        Some(columns) if !columns.is_empty() => columns.clone(),
        _ => {
            let guessed = suggest_question_columns(&table);
            info!(
                "run_analysis: no columns specified, guessed from the names: {:?}",
                guessed
            );
            guessed
        }
    };

    let summary = run_feedback_stats(&table, &selection).context(AggregationSnafu {})?;
    let chart_js = chart::build_chart_js(&summary);
    let pretty_js = serde_json::to_string_pretty(&chart_js).context(ParsingJsonSnafu {})?;

    match &args.out {
        Some(path) if path != "stdout" => {
            fs::write(path, &pretty_js).context(WritingOutputSnafu { path })?;
            info!("run_analysis: chart data written to {:?}", path);
        }
        _ => println!("{}", pretty_js),
    }

    // The reference chart data, if provided for comparison
    if let Some(ref_path) = &args.reference {
        let reference_js = read_reference(ref_path)?;
        if reference_js != chart_js {
            warn!("Found differences with the reference file {:?}", ref_path);
            let pretty_ref =
                serde_json::to_string_pretty(&reference_js).context(ParsingJsonSnafu {})?;
            print_diff(pretty_ref.as_str(), pretty_js.as_str(), "\n");
            return Err(Box::new(FeedbackError::ReferenceMismatch {
                path: ref_path.clone(),
            }));
        }
    }

    Ok(())
}

fn read_reference(path: &str) -> BFeedbackResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
