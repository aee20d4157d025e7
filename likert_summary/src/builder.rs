pub use crate::config::*;

/// A builder for assembling a [Table] row by row.
///
/// File readers should prefer the builder over [Table::new]: it checks each
/// row against the header as it comes in, which gives errors closer to the
/// offending line.
///
/// ```
/// pub use likert_summary::builder::TableBuilder;
/// # use likert_summary::SummaryErrors;
///
/// let mut builder = TableBuilder::new(&["Name".to_string(), "👉 Question".to_string()])?;
///
/// builder.push_row(&["Ana".to_string(), "Agree ✋🏻".to_string()])?;
/// builder.push_row(&["Bob".to_string(), "Disagree ⚠️".to_string()])?;
///
/// let table = builder.build();
/// assert_eq!(table.num_rows(), 2);
///
/// # Ok::<(), SummaryErrors>(())
/// ```
pub struct TableBuilder {
    pub(crate) _names: Vec<String>,
    pub(crate) _columns: Vec<Vec<String>>,
}

impl TableBuilder {
    /// Starts a table with the given header. The header is validated with
    /// the same rules as [Table::new].
    pub fn new(names: &[String]) -> Result<TableBuilder, SummaryErrors> {
        // Delegate the header checks to the table constructor.
        let empty = Table::new(names.to_vec(), vec![Vec::new(); names.len()])?;
        Ok(TableBuilder {
            _names: empty.names,
            _columns: empty.columns,
        })
    }

    /// Appends one data row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, cells: &[String]) -> Result<(), SummaryErrors> {
        if cells.len() != self._names.len() {
            return Err(SummaryErrors::MismatchedRowLength {
                expected: self._names.len(),
                actual: cells.len(),
            });
        }
        for (column, cell) in self._columns.iter_mut().zip(cells.iter()) {
            column.push(cell.clone());
        }
        Ok(())
    }

    pub fn build(self) -> Table {
        // The invariants were maintained row by row.
        Table {
            names: self._names,
            columns: self._columns,
        }
    }
}
