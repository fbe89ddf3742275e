use anyhow::{Context, Result};
use contracts::system::auth::Employee;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

fn row_to_employee(row: &sea_orm::QueryResult) -> Result<Employee> {
    Ok(Employee {
        id: row.try_get("", "id")?,
        given_name: row.try_get("", "given_name")?,
        family_name: row.try_get("", "family_name")?,
        email: row.try_get("", "email")?,
        role: row.try_get("", "role")?,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}

/// Insert a new employee record
pub async fn create(employee: &Employee) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_employees (id, given_name, family_name, email, role, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        [
            employee.id.clone().into(),
            employee.given_name.clone().into(),
            employee.family_name.clone().into(),
            employee.email.clone().into(),
            employee.role.into(),
            employee.created_at.clone().into(),
            employee.updated_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert employee")?;

    Ok(())
}

/// Get employee by Google subject
pub async fn get_by_id(id: &str) -> Result<Option<Employee>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, given_name, family_name, email, role, created_at, updated_at
             FROM sys_employees WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row_to_employee(&row)?)),
        None => Ok(None),
    }
}

/// List all employees ordered by family name
pub async fn list_all() -> Result<Vec<Employee>> {
    let conn = get_connection();

    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT id, given_name, family_name, email, role, created_at, updated_at
             FROM sys_employees ORDER BY family_name, given_name"
                .to_string(),
        ))
        .await?;

    let mut employees = Vec::with_capacity(rows.len());
    for row in &rows {
        employees.push(row_to_employee(row)?);
    }
    Ok(employees)
}

/// Update names, email and role of an employee
pub async fn update(employee: &Employee) -> Result<bool> {
    let conn = get_connection();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_employees
             SET given_name = ?, family_name = ?, email = ?, role = ?, updated_at = ?
             WHERE id = ?",
            [
                employee.given_name.clone().into(),
                employee.family_name.clone().into(),
                employee.email.clone().into(),
                employee.role.into(),
                employee.updated_at.clone().into(),
                employee.id.clone().into(),
            ],
        ))
        .await
        .context("Failed to update employee")?;

    Ok(result.rows_affected() > 0)
}

/// Delete an employee record
pub async fn delete(id: &str) -> Result<bool> {
    let conn = get_connection();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_employees WHERE id = ?",
            [id.into()],
        ))
        .await?;

    Ok(result.rows_affected() > 0)
}
