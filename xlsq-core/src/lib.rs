// xlsq-core/src/lib.rs
//! Reading and searching spreadsheet workbooks.

pub mod cell;
pub mod search;
pub mod view;
pub mod workbook;

pub use cell::format_cell;
pub use search::{search_sheet, SearchMatch, SearchReport};
pub use view::{show_sheet, SheetView};
pub use workbook::{open_workbook, Workbook};

#[cfg(test)]
pub(crate) mod fixtures {
    use tempfile::NamedTempFile;

    fn save(workbook: &mut rust_xlsxwriter::Workbook) -> NamedTempFile {
        let file = NamedTempFile::with_suffix(".xlsx").expect("create temp workbook");
        workbook.save(file.path()).expect("save temp workbook");
        file
    }

    /// One default-named sheet: a header and three people.
    pub fn people_workbook() -> NamedTempFile {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        let rows = [
            ("Alice", 30.0, "New York"),
            ("Bob", 25.0, "Los Angeles"),
            ("Charlie", 35.0, "Chicago"),
        ];
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Age").unwrap();
        sheet.write_string(0, 2, "City").unwrap();
        for (i, (name, age, city)) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, *name).unwrap();
            sheet.write_number(row, 1, *age).unwrap();
            sheet.write_string(row, 2, *city).unwrap();
        }
        save(&mut workbook)
    }

    /// "Employees" and "Products" sheets.
    pub fn company_workbook() -> NamedTempFile {
        let mut workbook = rust_xlsxwriter::Workbook::new();

        let employees = workbook.add_worksheet();
        employees.set_name("Employees").unwrap();
        for (col, header) in ["ID", "Name", "Department", "Salary"].iter().enumerate() {
            employees.write_string(0, col as u16, *header).unwrap();
        }
        let staff = [
            (1.0, "John Doe", "Engineering", 85000.0),
            (2.0, "Jane Smith", "Marketing", 75000.0),
            (3.0, "Bob Johnson", "Engineering", 90000.0),
        ];
        for (i, (id, name, dept, salary)) in staff.iter().enumerate() {
            let row = i as u32 + 1;
            employees.write_number(row, 0, *id).unwrap();
            employees.write_string(row, 1, *name).unwrap();
            employees.write_string(row, 2, *dept).unwrap();
            employees.write_number(row, 3, *salary).unwrap();
        }

        let products = workbook.add_worksheet();
        products.set_name("Products").unwrap();
        for (col, header) in ["Product", "Category", "Price", "Stock"].iter().enumerate() {
            products.write_string(0, col as u16, *header).unwrap();
        }
        let stock = [
            ("Laptop", "Electronics", 1200.0, 50.0),
            ("Mouse", "Electronics", 25.0, 200.0),
        ];
        for (i, (product, category, price, count)) in stock.iter().enumerate() {
            let row = i as u32 + 1;
            products.write_string(row, 0, *product).unwrap();
            products.write_string(row, 1, *category).unwrap();
            products.write_number(row, 2, *price).unwrap();
            products.write_number(row, 3, *count).unwrap();
        }

        save(&mut workbook)
    }
}
