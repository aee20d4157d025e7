// Primitives for reading spreadsheet feedback exports (.xlsx, .xls).

use log::debug;
use snafu::prelude::*;

use calamine::{open_workbook_auto, DataType, Reader};

use likert_summary::builder::TableBuilder;
use likert_summary::Table;

use crate::feedback::{
    BFeedbackResult, EmptyWorkbookSnafu, InvalidTableSnafu, MissingHeaderSnafu,
    MissingWorksheetSnafu, OpeningWorkbookSnafu,
};

pub fn read_excel_table(path: &str, worksheet_name: Option<String>) -> BFeedbackResult<Table> {
    let wrange = get_range(path, worksheet_name)?;

    let mut rows = wrange.rows();
    let header = rows.next().context(MissingHeaderSnafu { path })?;
    debug!("read_excel_table: header: {:?}", header);
    let names: Vec<String> = header.iter().map(cell_to_string).collect();
    let mut builder = TableBuilder::new(&names).context(InvalidTableSnafu { path })?;

    for (idx, row) in rows.enumerate() {
        debug!("read_excel_table: idx: {:?} row: {:?}", idx, row);
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        builder.push_row(&cells).context(InvalidTableSnafu { path })?;
    }
    Ok(builder.build())
}

// Cells are opaque strings for categorization purposes: non-text cells keep
// their printed form, blanks become empty strings.
fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::DateTime(f) => f.to_string(),
        DataType::Error(e) => format!("{:?}", e),
        DataType::Empty => String::new(),
    }
}

fn get_range(
    path: &str,
    worksheet_name_o: Option<String>,
) -> BFeedbackResult<calamine::Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, worksheet_name_o
    );
    let mut workbook = open_workbook_auto(path).context(OpeningWorkbookSnafu { path })?;

    // A worksheet name was provided, use it. Otherwise take the first sheet.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name.as_str())
            .context(MissingWorksheetSnafu {
                name: worksheet_name.clone(),
                path,
            })?
            .context(OpeningWorkbookSnafu { path })?;
        Ok(wrange)
    } else {
        let wrange = workbook
            .worksheet_range_at(0)
            .context(EmptyWorkbookSnafu { path })?
            .context(OpeningWorkbookSnafu { path })?;
        Ok(wrange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_become_opaque_strings() {
        assert_eq!(cell_to_string(&DataType::String("Agree ✋🏻".to_string())), "Agree ✋🏻");
        assert_eq!(cell_to_string(&DataType::Empty), "");
        assert_eq!(cell_to_string(&DataType::Int(3)), "3");
        assert_eq!(cell_to_string(&DataType::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&DataType::Bool(true)), "true");
    }
}
