// xlsq-core/src/workbook.rs
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use tracing::debug;
use xlsq_common::error::{Result, XlsqError};

/// An open spreadsheet of any format the reader understands (xlsx, xlsm,
/// xlsb, xls, ods).
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    debug!("Opening workbook: {}", path.display());
    let sheets = open_workbook_auto(path)
        .map_err(|e| XlsqError::WorkbookOpen(format!("{}: {e}", path.display())))?;
    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

impl Workbook {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Resolves a sheet given either its 0-based index or its exact name.
    pub fn resolve_sheet(&self, identifier: &str) -> Result<String> {
        resolve_sheet_name(&self.sheet_names(), identifier)
    }

    pub fn range(&mut self, sheet_name: &str) -> Result<Range<Data>> {
        debug!("Reading sheet '{}' from {}", sheet_name, self.path.display());
        self.sheets
            .worksheet_range(sheet_name)
            .map_err(|e| XlsqError::SheetRead(sheet_name.to_string(), e.to_string()))
    }
}

/// Anything that parses as an unsigned integer is treated as an index, so a
/// sheet literally named "2" can only be reached by position.
pub fn resolve_sheet_name(sheet_names: &[String], identifier: &str) -> Result<String> {
    if let Ok(index) = identifier.parse::<usize>() {
        if sheet_names.is_empty() {
            return Err(XlsqError::EmptyWorkbook);
        }
        return sheet_names
            .get(index)
            .cloned()
            .ok_or(XlsqError::SheetIndexOutOfRange {
                index,
                last: sheet_names.len() - 1,
            });
    }

    if sheet_names.iter().any(|name| name == identifier) {
        return Ok(identifier.to_string());
    }

    Err(XlsqError::SheetNotFound {
        name: identifier.to_string(),
        available: sheet_names.to_vec(),
    })
}
