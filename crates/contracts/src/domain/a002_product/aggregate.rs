use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Warehouse product. `base.description` holds the short product name,
/// `full_description` the long one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    #[serde(rename = "fullDescription", default)]
    pub full_description: String,

    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "maxStock", default)]
    pub max_stock: i64,
    #[serde(rename = "minStock", default)]
    pub min_stock: i64,

    #[serde(rename = "purchasePrice", default)]
    pub purchase_price: f64,
    #[serde(rename = "sellPrice", default)]
    pub sell_price: f64,
}

impl Product {
    pub fn new_for_insert(
        code: String,
        name: String,
        full_description: String,
        stock: i64,
        max_stock: i64,
        min_stock: i64,
        purchase_price: f64,
        sell_price: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), code, name);
        base.comment = comment;

        Self {
            base,
            full_description,
            stock,
            max_stock,
            min_stock,
            purchase_price,
            sell_price,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProductDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.full_description = dto.full_description.clone().unwrap_or_default();
        self.stock = dto.stock;
        self.max_stock = dto.max_stock;
        self.min_stock = dto.min_stock;
        self.purchase_price = dto.purchase_price;
        self.sell_price = dto.sell_price;
    }

    /// Stock bounds and price sanity checks; every condition must hold
    /// before the product is written.
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if self.full_description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.max_stock < 0 || self.min_stock < 0 {
            return Err("Stock bounds cannot be negative".into());
        }
        if self.max_stock < self.min_stock {
            return Err("Max stock cannot be below min stock".into());
        }
        if self.stock < self.min_stock || self.stock > self.max_stock {
            return Err("Stock must stay between min and max stock".into());
        }
        if self.purchase_price < 0.0 || self.sell_price < 0.0 {
            return Err("Prices cannot be negative".into());
        }
        Ok(())
    }

    /// Take `quantity` units out of stock. Refuses to drop below the
    /// configured minimum.
    pub fn subtract_stock(&mut self, quantity: i64) -> Result<(), String> {
        if self.stock - quantity < self.min_stock {
            return Err(format!(
                "Stock of {} cannot go below the minimum ({})",
                self.base.code, self.min_stock
            ));
        }
        self.stock -= quantity;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    #[serde(rename = "fullDescription")]
    pub full_description: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "maxStock", default)]
    pub max_stock: i64,
    #[serde(rename = "minStock", default)]
    pub min_stock: i64,
    #[serde(rename = "purchasePrice", default)]
    pub purchase_price: f64,
    #[serde(rename = "sellPrice", default)]
    pub sell_price: f64,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new_for_insert(
            "PRD-1".into(),
            "Widget".into(),
            "A widget".into(),
            10,
            50,
            2,
            3.0,
            5.0,
            None,
        )
    }

    #[test]
    fn test_validate_stock_bounds() {
        assert!(sample().validate().is_ok());

        let mut p = sample();
        p.min_stock = 20;
        // stock (10) below min (20), and max (50) >= min holds
        assert!(p.validate().is_err());

        let mut p = sample();
        p.max_stock = 1;
        assert!(p.validate().is_err());

        let mut p = sample();
        p.sell_price = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_subtract_stock_respects_minimum() {
        let mut p = sample();
        assert!(p.subtract_stock(8).is_ok());
        assert_eq!(p.stock, 2);
        // one more unit would drop below min_stock = 2
        assert!(p.subtract_stock(1).is_err());
        assert_eq!(p.stock, 2);
    }
}
