// ********* Input data structures ***********

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Display;

/// The fixed classification of a recognized survey response.
///
/// Responses are matched against four exact literals (including the
/// decorative symbol carried by common form exports). Any other cell value is
/// not an error: it is simply dropped during aggregation.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Category {
    StronglyAgree,
    Agree,
    Disagree,
    StronglyDisagree,
}

impl Category {
    /// All the categories, in the order the chart stacks them.
    pub const ALL: [Category; 4] = [
        Category::StronglyAgree,
        Category::Agree,
        Category::Disagree,
        Category::StronglyDisagree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::StronglyAgree => "Strongly Agree",
            Category::Agree => "Agree",
            Category::Disagree => "Disagree",
            Category::StronglyDisagree => "Strongly Disagree",
        }
    }

    pub fn sentiment(&self) -> Sentiment {
        match self {
            Category::StronglyAgree | Category::Agree => Sentiment::Positive,
            Category::Disagree | Category::StronglyDisagree => Sentiment::Negative,
        }
    }

    /// Matches a raw cell value against the recognized response literals.
    ///
    /// The match is exact: trimming or normalizing the decorative suffixes is
    /// deliberately not attempted.
    pub fn from_response(raw: &str) -> Option<Category> {
        match raw {
            "Strongly Agree ✅" => Some(Category::StronglyAgree),
            "Agree ✋🏻" => Some(Category::Agree),
            "Disagree ⚠️" => Some(Category::Disagree),
            "Strongly Disagree ⛔️" => Some(Category::StronglyDisagree),
            _ => None,
        }
    }
}

/// Which side of the zero axis a category stacks on.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

/// A row-count-fixed, column-named table of opaque cell strings.
///
/// Invariants, enforced at construction: at least one column, unique column
/// names, and all columns of equal length. Blank cells are empty strings.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Table {
    pub(crate) names: Vec<String>,
    pub(crate) columns: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from column names and column-major cell data.
    pub fn new(names: Vec<String>, columns: Vec<Vec<String>>) -> Result<Table, SummaryErrors> {
        if names.is_empty() {
            return Err(SummaryErrors::NoColumns);
        }
        if names.len() != columns.len() {
            return Err(SummaryErrors::ColumnCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }
        let mut seen: HashSet<&String> = HashSet::new();
        for name in names.iter() {
            if !seen.insert(name) {
                return Err(SummaryErrors::DuplicateColumn(name.clone()));
            }
        }
        let num_rows = columns[0].len();
        for (name, column) in names.iter().zip(columns.iter()) {
            if column.len() != num_rows {
                return Err(SummaryErrors::MismatchedColumnLength {
                    column: name.clone(),
                    expected: num_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Table { names, columns })
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn num_rows(&self) -> usize {
        self.columns[0].len()
    }

    /// The cells of the given column, or `None` if no column has this name.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }
}

// ******** Output data structures *********

/// One (question, category) pair of the chart dataset.
#[derive(PartialEq, Debug, Clone)]
pub struct AggregateRow {
    /// The shortened display label of the question, not the raw column name.
    pub criterion: String,
    pub category: Category,
    pub sentiment: Sentiment,
    /// Recognized responses in this category for this question.
    pub count: u64,
    /// All recognized responses for this question, across categories.
    pub total: u64,
    /// `count / total`, in (0, 1].
    pub percentage: f64,
    /// `percentage`, negated for negative sentiment.
    pub diverging_percentage: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct FeedbackSummary {
    /// The row count of the input table, recognized or not.
    pub total_response_count: usize,
    /// One row per (question, category) with at least one recognized
    /// response, ordered by (criterion label, category label).
    pub rows: Vec<AggregateRow>,
    /// The criterion display labels in their chart axis order.
    pub criteria_order: Vec<String>,
}

/// Errors that prevent a summary from being computed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SummaryErrors {
    /// No question column was selected.
    EmptySelection,
    /// A selected column name does not exist in the table.
    UnknownColumn(String),
    NoColumns,
    DuplicateColumn(String),
    ColumnCountMismatch { names: usize, columns: usize },
    MismatchedColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
    MismatchedRowLength { expected: usize, actual: usize },
}

impl Error for SummaryErrors {}

impl Display for SummaryErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryErrors::EmptySelection => {
                write!(f, "at least one feedback column is required")
            }
            SummaryErrors::UnknownColumn(name) => {
                write!(f, "column {:?} does not exist in the table", name)
            }
            SummaryErrors::NoColumns => write!(f, "the table has no column"),
            SummaryErrors::DuplicateColumn(name) => {
                write!(f, "duplicate column name {:?}", name)
            }
            SummaryErrors::ColumnCountMismatch { names, columns } => {
                write!(f, "{} column names for {} columns", names, columns)
            }
            SummaryErrors::MismatchedColumnLength {
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {:?} has {} cells, expected {}",
                column, actual, expected
            ),
            SummaryErrors::MismatchedRowLength { expected, actual } => {
                write!(f, "row has {} cells, expected {}", actual, expected)
            }
        }
    }
}

// ********* Chart configuration **********

// The color scale used by the chart collaborator. The domain entries are
// category labels; the range is dark green, light green, light red, dark red.

pub const COLOR_DOMAIN: [&str; 4] = [
    "Strongly Agree",
    "Agree",
    "Disagree",
    "Strongly Disagree",
];

pub const COLOR_RANGE: [&str; 4] = ["#006837", "#31a354", "#fb6a4a", "#a50f15"];

/// The chart title, carrying the literal response count.
pub fn chart_title(total_responses: usize) -> String {
    format!("Student Feedback Analysis (N={})", total_responses)
}
