use serde::{Deserialize, Serialize};

/// Claims of a verified Google ID token. Only the fields the backend
/// consumes are kept; everything else in the token is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleClaims {
    /// Google subject, the stable user identifier
    pub sub: String,
    /// Client id the token was issued for
    pub aud: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
    #[serde(default)]
    pub email: String,
    /// Full display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
}

/// Employee roles, ordered as stored in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    None,
    Admin,
    Manager,
    Sales,
    WarehouseManager,
}

impl EmployeeRole {
    pub fn from_i32(value: i32) -> Result<Self, String> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Admin),
            2 => Ok(Self::Manager),
            3 => Ok(Self::Sales),
            4 => Ok(Self::WarehouseManager),
            other => Err(format!("Unknown employee role: {}", other)),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Admin => 1,
            Self::Manager => 2,
            Self::Sales => 3,
            Self::WarehouseManager => 4,
        }
    }

    /// Roles allowed to create, update or remove products
    pub fn can_manage_products(&self) -> bool {
        matches!(self, Self::Admin | Self::Sales)
    }

    /// Roles allowed to turn an offer into an order
    pub fn can_create_orders(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager | Self::Sales)
    }
}

/// Employee record keyed by the Google subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Google subject
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub role: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn role(&self) -> EmployeeRole {
        EmployeeRole::from_i32(self.role).unwrap_or(EmployeeRole::None)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }
}

/// Employee payload returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub id: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    pub email: String,
    pub role: i32,
}

impl From<Employee> for EmployeeInfo {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            given_name: e.given_name,
            family_name: e.family_name,
            email: e.email,
            role: e.role,
        }
    }
}

/// Admin update of an employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    pub email: String,
    pub role: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for value in 0..=4 {
            let role = EmployeeRole::from_i32(value).unwrap();
            assert_eq!(role.as_i32(), value);
        }
        assert!(EmployeeRole::from_i32(7).is_err());
    }

    #[test]
    fn test_role_permissions() {
        assert!(EmployeeRole::Admin.can_manage_products());
        assert!(EmployeeRole::Sales.can_manage_products());
        assert!(!EmployeeRole::WarehouseManager.can_manage_products());
        assert!(!EmployeeRole::None.can_manage_products());

        assert!(EmployeeRole::Manager.can_create_orders());
        assert!(!EmployeeRole::WarehouseManager.can_create_orders());
    }
}
