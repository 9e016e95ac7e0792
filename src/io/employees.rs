//! Employee CSV ingest.
//!
//! Turns a staff list exported from a spreadsheet into [`Employee`] records.
//! Columns are located by their header names, so column order and extra
//! columns do not matter. Unlike a best-effort import, a single bad row
//! aborts the whole load: the payroll must never run on a partial staff list.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, parse_hire_date, parse_salary};

/// Header of the full name column.
pub const COLUMN_FULL_NAME: &str = "ФИО";
/// Header of the position column.
pub const COLUMN_POSITION: &str = "Должность";
/// Header of the hire date column.
pub const COLUMN_HIRE_DATE: &str = "Дата найма";
/// Header of the salary column.
pub const COLUMN_SALARY: &str = "Оклад";

/// Loads employees from a CSV file.
pub fn load_employees_from_csv<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })?;

    let employees = load_employees_from_reader(file)?;
    info!(path = %path.display(), employees = employees.len(), "Loaded employees");
    Ok(employees)
}

/// Loads employees from any CSV source with a header row.
pub fn load_employees_from_reader<R: Read>(reader: R) -> EngineResult<Vec<Employee>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| EngineError::Csv {
            message: format!("failed to read header: {e}"),
        })?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut employees = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| EngineError::Csv {
            message: format!("line {line}: {e}"),
        })?;
        let employee = columns.parse_row(&record)?;
        debug!(line, employee = employee.full_name(), "Parsed employee row");
        employees.push(employee);
    }

    Ok(employees)
}

/// Column indexes of the required fields.
struct Columns {
    full_name: usize,
    position: usize,
    hire_date: usize,
    salary: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> EngineResult<Self> {
        let index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim_start_matches('\u{feff}'), i))
            .collect();

        let find = |column: &str| {
            index
                .get(column)
                .copied()
                .ok_or_else(|| EngineError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            full_name: find(COLUMN_FULL_NAME)?,
            position: find(COLUMN_POSITION)?,
            hire_date: find(COLUMN_HIRE_DATE)?,
            salary: find(COLUMN_SALARY)?,
        })
    }

    fn parse_row(&self, record: &StringRecord) -> EngineResult<Employee> {
        let cell = |i: usize| record.get(i).unwrap_or("");

        let full_name = cell(self.full_name);
        let salary_text = cell(self.salary);
        let salary = parse_salary(salary_text).map_err(|_| EngineError::InvalidCsvSalary {
            employee: full_name.to_string(),
            value: salary_text.to_string(),
        })?;
        let hire_date = parse_hire_date(cell(self.hire_date))?;

        Employee::with_hire_date(full_name, cell(self.position), hire_date, salary)
    }
}
