// xlsq-core/src/view.rs
use calamine::{Data, Range};
use xlsq_common::error::Result;

use crate::cell::format_cell;
use crate::workbook::Workbook;

/// The leading rows of a sheet, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub sheet: String,
    pub height: usize,
    pub width: usize,
    pub rows: Vec<Vec<String>>,
}

impl SheetView {
    /// `max_rows == 0` keeps every row.
    pub fn from_range(sheet: &str, range: &Range<Data>, max_rows: usize) -> Self {
        let height = range.height();
        let limit = if max_rows == 0 {
            height
        } else {
            max_rows.min(height)
        };
        let rows = range
            .rows()
            .take(limit)
            .map(|row| row.iter().map(format_cell).collect())
            .collect();
        Self {
            sheet: sheet.to_string(),
            height,
            width: range.width(),
            rows,
        }
    }

    /// Rows present in the sheet but not in the view.
    pub fn remaining(&self) -> usize {
        self.height.saturating_sub(self.rows.len())
    }
}

pub fn show_sheet(workbook: &mut Workbook, identifier: &str, max_rows: usize) -> Result<SheetView> {
    let sheet_name = workbook.resolve_sheet(identifier)?;
    let range = workbook.range(&sheet_name)?;
    tracing::debug!(
        "Sheet '{}' is {}x{}, showing up to {} rows",
        sheet_name,
        range.height(),
        range.width(),
        max_rows
    );
    Ok(SheetView::from_range(&sheet_name, &range, max_rows))
}
