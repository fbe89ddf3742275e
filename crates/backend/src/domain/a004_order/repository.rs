use chrono::Utc;
use contracts::domain::a004_order::aggregate::{Order, OrderId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub employee_id: String,
    pub client_id: String,
    pub document_date: String,
    pub lines_json: Option<String>,
    pub total_price: f64,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Order {
            base: BaseAggregate::with_metadata(
                OrderId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            employee_id: m.employee_id,
            client_id: m.client_id,
            document_date: m.document_date,
            lines_json: m.lines_json,
            total_price: m.total_price,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    let mut items: Vec<Order> = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Newest documents first
    items.sort_by(|a, b| {
        b.document_date
            .cmp(&a.document_date)
            .then_with(|| a.base.code.cmp(&b.base.code))
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn exists_by_code(code: &str) -> anyhow::Result<bool> {
    let existing = Entity::find()
        .filter(Column::Code.eq(code))
        .one(conn())
        .await?;
    Ok(existing.is_some())
}

pub async fn insert(aggregate: &Order) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        employee_id: Set(aggregate.employee_id.clone()),
        client_id: Set(aggregate.client_id.clone()),
        document_date: Set(aggregate.document_date.clone()),
        lines_json: Set(aggregate.lines_json.clone()),
        total_price: Set(aggregate.total_price),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Documents are removed for good, not soft-deleted
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
