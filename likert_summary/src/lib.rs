//! Pure aggregation core for Likert-style feedback summaries.
//!
//! Given a [Table] of opaque cell strings and the names of the columns that
//! hold feedback questions, [run_feedback_stats] produces the dataset a
//! diverging stacked-bar chart renders: one [AggregateRow] per (question,
//! category) pair, with percentages signed by sentiment so that negative
//! responses stack leftward of the zero axis.
//!
//! The crate performs no I/O: tables are built by the caller (see
//! [builder::TableBuilder]) and the output is plain data.

pub mod builder;
mod config;
pub mod manual;
pub mod quick_start;

use log::{debug, info};

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

pub use crate::config::*;

/// Column names longer than this many characters are truncated in the
/// display labels.
const MAX_LABEL_CHARS: usize = 60;

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct ResponseCount(u64);

impl ResponseCount {
    const EMPTY: ResponseCount = ResponseCount(0);
    const ONE: ResponseCount = ResponseCount(1);
}

impl AddAssign for ResponseCount {
    fn add_assign(&mut self, rhs: ResponseCount) {
        self.0 += rhs.0;
    }
}

impl Add for ResponseCount {
    type Output = ResponseCount;
    fn add(self: ResponseCount, rhs: ResponseCount) -> ResponseCount {
        ResponseCount(self.0 + rhs.0)
    }
}

/// Runs the aggregation pipeline for the given table and column selection.
///
/// Arguments:
/// * `table` the loaded feedback table
/// * `selected_columns` the names of the columns holding feedback questions,
/// in selection order. The order controls the numbering of the display
/// labels.
///
/// The function is pure: it does not mutate the table, retains no reference
/// to it, and identical inputs yield identical output.
pub fn run_feedback_stats(
    table: &Table,
    selected_columns: &[String],
) -> Result<FeedbackSummary, SummaryErrors> {
    info!(
        "run_feedback_stats: {:?} rows, {:?} selected columns",
        table.num_rows(),
        selected_columns.len()
    );
    if selected_columns.is_empty() {
        return Err(SummaryErrors::EmptySelection);
    }

    // Unpivot and categorize in one pass: every (row, selected column) cell
    // is matched against the recognized literals. Unrecognized responses are
    // filtered out here; they count toward no total.
    let mut counts: HashMap<(usize, Category), ResponseCount> = HashMap::new();
    let mut totals: HashMap<usize, ResponseCount> = HashMap::new();
    for (question_idx, name) in selected_columns.iter().enumerate() {
        let cells = match table.column(name) {
            Some(c) => c,
            None => return Err(SummaryErrors::UnknownColumn(name.clone())),
        };
        for raw in cells {
            match Category::from_response(raw) {
                Some(category) => {
                    *counts
                        .entry((question_idx, category))
                        .or_insert(ResponseCount::EMPTY) += ResponseCount::ONE;
                    *totals.entry(question_idx).or_insert(ResponseCount::EMPTY) +=
                        ResponseCount::ONE;
                }
                None => {
                    debug!(
                        "run_feedback_stats: dropping unrecognized response {:?} in column {:?}",
                        raw, name
                    );
                }
            }
        }
    }

    let labels: Vec<String> = selected_columns
        .iter()
        .enumerate()
        .map(|(idx, name)| short_label(idx, name))
        .collect();

    let mut rows: Vec<AggregateRow> = Vec::new();
    for (question_idx, label) in labels.iter().enumerate() {
        // A question whose responses were all dropped contributes no rows.
        let total = match totals.get(&question_idx) {
            Some(t) => *t,
            None => continue,
        };
        for category in Category::ALL {
            if let Some(count) = counts.get(&(question_idx, category)) {
                let percentage = count.0 as f64 / total.0 as f64;
                let diverging_percentage = match category.sentiment() {
                    Sentiment::Positive => percentage,
                    Sentiment::Negative => -percentage,
                };
                rows.push(AggregateRow {
                    criterion: label.clone(),
                    category,
                    sentiment: category.sentiment(),
                    count: count.0,
                    total: total.0,
                    percentage,
                    diverging_percentage,
                });
            }
        }
    }
    rows.sort_by(|a, b| {
        (a.criterion.as_str(), a.category.label()).cmp(&(b.criterion.as_str(), b.category.label()))
    });

    // The axis order is lexicographic on the literal labels. With ten or
    // more questions this puts "10." before "2.": the numbering is assigned
    // in selection order but the sort is plain string order.
    let mut criteria_order = labels;
    criteria_order.sort();

    debug!(
        "run_feedback_stats: {:?} aggregate rows, order {:?}",
        rows.len(),
        criteria_order
    );

    Ok(FeedbackSummary {
        total_response_count: table.num_rows(),
        rows,
        criteria_order,
    })
}

/// Flags the columns whose names look like feedback questions, in table
/// order.
///
/// This is a hint for interactive callers: the final selection given to
/// [run_feedback_stats] stays under the caller's control.
pub fn suggest_question_columns(table: &Table) -> Vec<String> {
    table
        .column_names()
        .iter()
        .filter(|name| name.contains("Teacher-Specific Reflection") || name.contains('👉'))
        .cloned()
        .collect()
}

// Numbered display label: "<idx+1>. <name>", with the name cut at
// MAX_LABEL_CHARS characters and suffixed with "..." when too long.
fn short_label(idx: usize, name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let truncated: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}. {}...", idx + 1, truncated)
    } else {
        format!("{}. {}", idx + 1, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_1q(values: &[&str]) -> Table {
        Table::new(
            vec!["Respondent".to_string(), "👉 Question".to_string()],
            vec![
                (0..values.len()).map(|i| format!("r{}", i)).collect(),
                values.iter().map(|s| s.to_string()).collect(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn three_row_example() {
        let table = table_1q(&["Strongly Agree ✅", "Disagree ⚠️", "Strongly Agree ✅"]);
        let summary = run_feedback_stats(&table, &["👉 Question".to_string()]).unwrap();
        assert_eq!(summary.total_response_count, 3);
        assert_eq!(summary.criteria_order, vec!["1. 👉 Question".to_string()]);
        assert_eq!(summary.rows.len(), 2);

        let disagree = &summary.rows[0];
        assert_eq!(disagree.category, Category::Disagree);
        assert_eq!(disagree.sentiment, Sentiment::Negative);
        assert_eq!(disagree.count, 1);
        assert_eq!(disagree.total, 3);
        assert!((disagree.percentage - 1.0 / 3.0).abs() < 1e-12);
        assert!((disagree.diverging_percentage + 1.0 / 3.0).abs() < 1e-12);

        let strongly_agree = &summary.rows[1];
        assert_eq!(strongly_agree.category, Category::StronglyAgree);
        assert_eq!(strongly_agree.count, 2);
        assert!((strongly_agree.percentage - 2.0 / 3.0).abs() < 1e-12);
        assert!((strongly_agree.diverging_percentage - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn counts_sum_to_totals() {
        let table = Table::new(
            vec!["👉 A".to_string(), "👉 B".to_string()],
            vec![
                vec![
                    "Strongly Agree ✅".to_string(),
                    "Agree ✋🏻".to_string(),
                    "maybe".to_string(),
                    "Strongly Disagree ⛔️".to_string(),
                ],
                vec![
                    "Disagree ⚠️".to_string(),
                    "".to_string(),
                    "Agree ✋🏻".to_string(),
                    "Agree ✋🏻".to_string(),
                ],
            ],
        )
        .unwrap();
        let summary =
            run_feedback_stats(&table, &["👉 A".to_string(), "👉 B".to_string()]).unwrap();
        for row in summary.rows.iter() {
            let sum: u64 = summary
                .rows
                .iter()
                .filter(|r| r.criterion == row.criterion)
                .map(|r| r.count)
                .sum();
            assert_eq!(sum, row.total);
            assert!(row.total as usize <= summary.total_response_count);
            assert!(row.percentage > 0.0 && row.percentage <= 1.0);
            assert!(row.diverging_percentage.abs() <= 1.0);
            match row.sentiment {
                Sentiment::Positive => assert!(row.diverging_percentage > 0.0),
                Sentiment::Negative => assert!(row.diverging_percentage < 0.0),
            }
        }
    }

    #[test]
    fn idempotent() {
        let table = table_1q(&["Agree ✋🏻", "Disagree ⚠️"]);
        let selection = vec!["👉 Question".to_string()];
        let first = run_feedback_stats(&table, &selection).unwrap();
        let second = run_feedback_stats(&table, &selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_responses_are_dropped() {
        // A trailing space or a different scale must not match.
        let table = table_1q(&["Strongly Agree ✅ ", "Neutral", "N/A", "Agree ✋🏻"]);
        let summary = run_feedback_stats(&table, &["👉 Question".to_string()]).unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].category, Category::Agree);
        assert_eq!(summary.rows[0].total, 1);
        assert!((summary.rows[0].percentage - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_dropped_column_yields_no_rows() {
        let table = table_1q(&["N/A", "N/A", "N/A"]);
        let summary = run_feedback_stats(&table, &["👉 Question".to_string()]).unwrap();
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_response_count, 3);
        // The label is still assigned, even without rows.
        assert_eq!(summary.criteria_order, vec!["1. 👉 Question".to_string()]);
    }

    #[test]
    fn empty_selection_fails() {
        let table = table_1q(&["Agree ✋🏻"]);
        let res = run_feedback_stats(&table, &[]);
        assert_eq!(res, Err(SummaryErrors::EmptySelection));
    }

    #[test]
    fn unknown_column_fails() {
        let table = table_1q(&["Agree ✋🏻"]);
        let res = run_feedback_stats(&table, &["missing".to_string()]);
        assert_eq!(res, Err(SummaryErrors::UnknownColumn("missing".to_string())));
    }

    #[test]
    fn long_names_are_truncated() {
        let name: String = "x".repeat(70);
        let table = Table::new(
            vec![name.clone()],
            vec![vec!["Agree ✋🏻".to_string()]],
        )
        .unwrap();
        let summary = run_feedback_stats(&table, &[name]).unwrap();
        let expected = format!("1. {}...", "x".repeat(60));
        assert_eq!(summary.rows[0].criterion, expected);
        // A 60-character name is kept unchanged.
        assert_eq!(short_label(0, &"y".repeat(60)), format!("1. {}", "y".repeat(60)));
    }

    #[test]
    fn axis_order_is_lexicographic_on_labels() {
        let names: Vec<String> = (0..10).map(|i| format!("question {}", i)).collect();
        let columns: Vec<Vec<String>> = (0..10).map(|_| vec!["Agree ✋🏻".to_string()]).collect();
        let table = Table::new(names.clone(), columns).unwrap();
        let summary = run_feedback_stats(&table, &names).unwrap();
        // "10. question 9" sorts before "2. question 1".
        assert_eq!(summary.criteria_order[0], "1. question 0");
        assert_eq!(summary.criteria_order[1], "10. question 9");
        assert_eq!(summary.criteria_order[2], "2. question 1");
    }

    #[test]
    fn suggestions_match_name_heuristics() {
        let table = Table::new(
            vec![
                "Timestamp".to_string(),
                "👉 The pace was right".to_string(),
                "Teacher-Specific Reflection: clarity".to_string(),
                "Comments".to_string(),
            ],
            vec![vec![]; 4],
        )
        .unwrap();
        assert_eq!(
            suggest_question_columns(&table),
            vec![
                "👉 The pace was right".to_string(),
                "Teacher-Specific Reflection: clarity".to_string(),
            ]
        );
    }

    #[test]
    fn table_invariants() {
        assert_eq!(Table::new(vec![], vec![]), Err(SummaryErrors::NoColumns));
        assert_eq!(
            Table::new(vec!["a".to_string(), "a".to_string()], vec![vec![], vec![]]),
            Err(SummaryErrors::DuplicateColumn("a".to_string()))
        );
        assert_eq!(
            Table::new(vec!["a".to_string()], vec![]),
            Err(SummaryErrors::ColumnCountMismatch {
                names: 1,
                columns: 0
            })
        );
        assert_eq!(
            Table::new(
                vec!["a".to_string(), "b".to_string()],
                vec![vec!["x".to_string()], vec![]]
            ),
            Err(SummaryErrors::MismatchedColumnLength {
                column: "b".to_string(),
                expected: 1,
                actual: 0
            })
        );
    }
}
