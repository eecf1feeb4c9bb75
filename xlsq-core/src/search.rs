// xlsq-core/src/search.rs
use calamine::{Data, Range};
use xlsq_common::error::{Result, XlsqError};

use crate::cell::format_cell;
use crate::workbook::Workbook;

/// A row containing at least one matching cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// 1-based, as shown to the user.
    pub row: usize,
    pub cells: Vec<String>,
    /// 0-based indices of the cells that matched.
    pub columns: Vec<usize>,
}

impl SearchMatch {
    pub fn is_match(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub sheet: String,
    pub query: String,
    pub case_sensitive: bool,
    pub matches: Vec<SearchMatch>,
}

/// Substring search over the rendered text of every cell.
pub fn search_range(range: &Range<Data>, query: &str, case_sensitive: bool) -> Vec<SearchMatch> {
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    let mut matches = Vec::new();
    for (row_idx, row) in range.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(format_cell).collect();
        let columns: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, text)| {
                if case_sensitive {
                    text.contains(&needle)
                } else {
                    text.to_lowercase().contains(&needle)
                }
            })
            .map(|(col_idx, _)| col_idx)
            .collect();

        if !columns.is_empty() {
            matches.push(SearchMatch {
                row: row_idx + 1,
                cells,
                columns,
            });
        }
    }
    matches
}

pub fn search_sheet(
    workbook: &mut Workbook,
    identifier: &str,
    query: &str,
    case_sensitive: bool,
) -> Result<SearchReport> {
    if query.is_empty() {
        return Err(XlsqError::ValidationError(
            "Search value must not be empty".to_string(),
        ));
    }
    let sheet_name = workbook.resolve_sheet(identifier)?;
    let range = workbook.range(&sheet_name)?;

    tracing::debug!(
        "Searching {} rows of '{}' for '{}' (case-sensitive: {})",
        range.height(),
        sheet_name,
        query,
        case_sensitive
    );
    let matches = search_range(&range, query, case_sensitive);
    tracing::debug!("Found {} matching rows", matches.len());

    Ok(SearchReport {
        sheet: sheet_name,
        query: query.to_string(),
        case_sensitive,
        matches,
    })
}
