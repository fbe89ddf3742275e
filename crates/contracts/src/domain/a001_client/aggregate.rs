use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Client company. `base.description` holds the commercial company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    /// Tax identification code
    #[serde(default)]
    pub cif: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Contact person
    #[serde(default)]
    pub contact: String,
}

impl Client {
    pub fn new_for_insert(
        code: String,
        company_name: String,
        cif: String,
        address: String,
        email: String,
        phone: String,
        contact: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ClientId::new_v4(), code, company_name);
        base.comment = comment;

        Self {
            base,
            cif,
            address,
            email,
            phone,
            contact,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ClientDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.company_name.clone();
        self.base.comment = dto.comment.clone();
        self.cif = dto.cif.clone().unwrap_or_default();
        self.address = dto.address.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.contact = dto.contact.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Company name cannot be empty".into());
        }
        if self.cif.trim().is_empty() {
            return Err("CIF cannot be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Client"
    }

    fn list_name() -> &'static str {
        "Clients"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub cif: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_company_name_and_cif() {
        let client = Client::new_for_insert(
            "CLT-1".into(),
            "Acme SL".into(),
            "B1234567".into(),
            "Calle Mayor 1".into(),
            "acme@example.com".into(),
            "+34911222333".into(),
            "Ana".into(),
            None,
        );
        assert!(client.validate().is_ok());

        let mut unnamed = client.clone();
        unnamed.base.description = "  ".into();
        assert!(unnamed.validate().is_err());

        let mut no_cif = client;
        no_cif.cif = String::new();
        assert!(no_cif.validate().is_err());
    }
}
