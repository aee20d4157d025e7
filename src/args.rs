use clap::Parser;

/// Summarizes a Likert-style feedback export into diverging stacked-bar
/// chart data.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The feedback export to analyze. Delimited text (.csv) and
    /// spreadsheets (.xlsx, .xls) are supported; the first row must hold the
    /// column names.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (default inferred from the file extension) The type of the input:
    /// 'csv' or 'excel'.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (list of values, optional) The names of the columns holding feedback
    /// questions, repeated once per column. The order controls the numbering
    /// of the chart labels. If not specified, the columns are guessed from
    /// their names.
    #[clap(short, long, value_parser)]
    pub columns: Option<Vec<String>>,

    /// If passed as an argument, prints every column of the input file with
    /// a mark on the ones that look like feedback questions, then exits.
    #[clap(long, takes_value = false)]
    pub list_columns: bool,

    /// (optional) When using an Excel file, indicates the name of the
    /// worksheet to use. Defaults to the first worksheet.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the chart data will be
    /// written in JSON format to the given location. The special value
    /// 'stdout' (or no value) prints it to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected chart data in
    /// JSON format. If provided, fbchart will check that the computed output
    /// matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, will turn on verbose logging to the
    /// standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
