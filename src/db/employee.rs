//! Employee data access.
//!
//! Each operation checks a connection out of the pool for the duration of a
//! single statement. Connections and transactions are released on drop, so an
//! error between execute and commit rolls back and returns the connection.

use log::{debug, warn};
use sqlx::{Column, Executor, PgPool, Statement};

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeTable, Outcome};
use crate::utils::timestamp::now_display;

const LIST_SQL: &str =
    "SELECT employee_id, first_name, last_name, department_id FROM employees";
const INSERT_SQL: &str =
    "INSERT INTO employees (first_name, last_name, department_id) VALUES ($1, $2, $3)";
const UPDATE_SQL: &str =
    "UPDATE employees SET first_name = $1, last_name = $2, department_id = $3 WHERE employee_id = $4";
const DELETE_SQL: &str = "DELETE FROM employees WHERE employee_id = $1";

pub async fn list(pool: &PgPool) -> Result<EmployeeTable, AppError> {
    let mut conn = pool.acquire().await?;

    let statement = (&mut *conn).prepare(LIST_SQL).await?;
    let columns = statement
        .columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect();

    let rows = statement
        .query_as::<Employee>()
        .fetch_all(&mut *conn)
        .await?;

    debug!("Listed {} employees", rows.len());
    Ok(EmployeeTable { columns, rows })
}

pub async fn create(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    department_id: i32,
) -> Result<String, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query(INSERT_SQL)
        .bind(first_name)
        .bind(last_name)
        .bind(department_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(now_display())
}

/// Overwrites every mutable field of the matching row. An unknown id is not
/// an error; the outcome simply reports zero affected rows.
pub async fn update(
    pool: &PgPool,
    employee_id: i32,
    first_name: &str,
    last_name: &str,
    department_id: i32,
) -> Result<Outcome, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(UPDATE_SQL)
        .bind(first_name)
        .bind(last_name)
        .bind(department_id)
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let rows_affected = result.rows_affected();
    if rows_affected == 0 {
        warn!("Update matched no employee with id {}", employee_id);
    }
    Ok(Outcome { timestamp: now_display(), rows_affected })
}

pub async fn delete(pool: &PgPool, employee_id: i32) -> Result<Outcome, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(DELETE_SQL)
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let rows_affected = result.rows_affected();
    if rows_affected == 0 {
        warn!("Delete matched no employee with id {}", employee_id);
    }
    Ok(Outcome { timestamp: now_display(), rows_affected })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_COLUMNS: [&str; 4] = ["employee_id", "first_name", "last_name", "department_id"];

    fn find(table: &EmployeeTable, employee_id: i32) -> Option<&Employee> {
        table.rows.iter().find(|e| e.employee_id == employee_id)
    }

    async fn row_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn list_reports_columns_on_empty_table(pool: PgPool) {
        let table = list(&pool).await.unwrap();
        assert_eq!(table.columns, EXPECTED_COLUMNS);
        assert!(table.rows.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn create_then_list_contains_new_row(pool: PgPool) {
        let stamp = create(&pool, "Ada", "Lovelace", 3).await.unwrap();
        assert_eq!(stamp.len(), 19);

        let table = list(&pool).await.unwrap();
        assert_eq!(table.columns, EXPECTED_COLUMNS);
        assert_eq!(table.rows.len() as i64, row_count(&pool).await);
        let ada = table
            .rows
            .iter()
            .find(|e| e.first_name == "Ada")
            .expect("created row is listed");
        assert_eq!(ada.last_name, "Lovelace");
        assert_eq!(ada.department_id, 3);
        assert!(ada.employee_id > 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn create_assigns_distinct_ids_and_allows_empty_names(pool: PgPool) {
        create(&pool, "", "", 1).await.unwrap();
        create(&pool, "", "", 1).await.unwrap();

        let table = list(&pool).await.unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_ne!(table.rows[0].employee_id, table.rows[1].employee_id);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn update_overwrites_all_mutable_fields(pool: PgPool) {
        create(&pool, "Grace", "Hopper", 1).await.unwrap();
        let id = list(&pool).await.unwrap().rows[0].employee_id;

        let outcome = update(&pool, id, "Grace B.", "Murray", 7).await.unwrap();
        assert_eq!(outcome.rows_affected, 1);

        let table = list(&pool).await.unwrap();
        assert_eq!(
            find(&table, id),
            Some(&Employee {
                employee_id: id,
                first_name: "Grace B.".to_string(),
                last_name: "Murray".to_string(),
                department_id: 7,
            })
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn delete_removes_only_the_target(pool: PgPool) {
        create(&pool, "Alan", "Turing", 2).await.unwrap();
        create(&pool, "Edsger", "Dijkstra", 2).await.unwrap();
        let before = list(&pool).await.unwrap();
        let target = before.rows[0].employee_id;

        let outcome = delete(&pool, target).await.unwrap();
        assert_eq!(outcome.rows_affected, 1);

        let after = list(&pool).await.unwrap();
        assert!(find(&after, target).is_none());
        assert_eq!(after.rows.len(), before.rows.len() - 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server reachable through DATABASE_URL"]
    async fn unknown_id_is_a_silent_no_op(pool: PgPool) {
        create(&pool, "Barbara", "Liskov", 4).await.unwrap();
        let before = list(&pool).await.unwrap();
        let missing = before.rows[0].employee_id + 1000;

        let updated = update(&pool, missing, "X", "Y", 9).await.unwrap();
        assert_eq!(updated.rows_affected, 0);
        assert_eq!(updated.timestamp.len(), 19);

        let deleted = delete(&pool, missing).await.unwrap();
        assert_eq!(deleted.rows_affected, 0);

        let mut after = list(&pool).await.unwrap().rows;
        let mut before = before.rows;
        after.sort_by_key(|e| e.employee_id);
        before.sort_by_key(|e| e.employee_id);
        assert_eq!(after, before);
    }
}
