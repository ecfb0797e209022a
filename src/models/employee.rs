use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub department_id: i32,
}

/// Full employee listing. `columns` is taken from the statement metadata so
/// it is populated even when `rows` is empty.
#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeTable {
    pub columns: Vec<String>,
    pub rows: Vec<Employee>,
}

/// Result of a write that targets an existing row by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub timestamp: String,
    pub rows_affected: u64,
}
