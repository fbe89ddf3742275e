use anyhow::Result;
use chrono::Utc;
use contracts::system::auth::{Employee, EmployeeRole, GoogleClaims, UpdateEmployeeDto};

use super::repository;

/// Look the employee up by the Google subject; first login provisions
/// a record with the "none" role from the token claims.
pub async fn retrieve_or_create(claims: &GoogleClaims) -> Result<Employee> {
    if let Some(employee) = repository::get_by_id(&claims.sub).await? {
        return Ok(employee);
    }

    tracing::info!("Provisioning employee record for subject {}", claims.sub);
    let now = Utc::now().to_rfc3339();
    let employee = Employee {
        id: claims.sub.clone(),
        given_name: claims.given_name.clone(),
        family_name: claims.family_name.clone(),
        email: claims.email.clone(),
        role: EmployeeRole::None.as_i32(),
        created_at: now.clone(),
        updated_at: now,
    };
    repository::create(&employee).await?;

    Ok(employee)
}

pub async fn get_by_id(id: &str) -> Result<Option<Employee>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Employee>> {
    repository::list_all().await
}

/// Admin update of names, email and role
pub async fn update(id: &str, dto: UpdateEmployeeDto) -> Result<bool> {
    let mut employee = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Employee not found"))?;

    EmployeeRole::from_i32(dto.role).map_err(|e| anyhow::anyhow!(e))?;

    employee.given_name = dto.given_name;
    employee.family_name = dto.family_name;
    employee.email = dto.email;
    employee.role = dto.role;
    employee.updated_at = Utc::now().to_rfc3339();

    repository::update(&employee).await
}

pub async fn delete(id: &str) -> Result<bool> {
    repository::delete(id).await
}
