use assert_cmd::Command;
use tempfile::NamedTempFile;

pub fn xlsq() -> Command {
    let mut cmd = Command::cargo_bin("xlsq").expect("xlsq binary is built");
    cmd.env_remove("XLSQ_DEFAULT_ROWS")
        .env_remove("XLSQ_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Workbook with an "Employees" and a "Products" sheet.
pub fn sample_workbook() -> NamedTempFile {
    let file = NamedTempFile::with_suffix(".xlsx").expect("create temp workbook");
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
    products.write_string(1, 0, "Laptop").unwrap();
    products.write_string(1, 1, "Electronics").unwrap();
    products.write_number(1, 2, 1200.0).unwrap();
    products.write_number(1, 3, 50.0).unwrap();
    products.write_string(2, 0, "Mouse").unwrap();
    products.write_string(2, 1, "Electronics").unwrap();
    products.write_number(2, 2, 25.0).unwrap();
    products.write_number(2, 3, 200.0).unwrap();

    workbook.save(file.path()).expect("save temp workbook");
    file
}

/// Single sheet with a header and `rows` numbered data rows.
pub fn tall_workbook(rows: u32) -> NamedTempFile {
    let file = NamedTempFile::with_suffix(".xlsx").expect("create temp workbook");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "n").unwrap();
    for n in 1..=rows {
        sheet.write_number(n, 0, n as f64).unwrap();
    }
    workbook.save(file.path()).expect("save temp workbook");
    file
}
