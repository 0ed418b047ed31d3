use chrono::Utc;
use contracts::domain::a001_category::aggregate::{CategoryId, CategoryKind};
use contracts::domain::a002_product::aggregate::{Product, ProductCard, ProductId};
use contracts::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, Set, Statement,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub category_id: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_uuid(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or_else(|_| Uuid::new_v4())
}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: ProductId(parse_uuid(&m.id)),
            name: m.name,
            price: m.price,
            image_url: m.image_url,
            category_id: CategoryId(parse_uuid(&m.category_id)),
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
            },
        }
    }
}

/// Строка витрины: товар + его категория
#[derive(Debug, FromQueryResult)]
struct CardRow {
    id: String,
    name: String,
    price: String,
    image_url: String,
    category_name: String,
    category_slug: String,
    category_kind: String,
}

impl From<CardRow> for ProductCard {
    fn from(r: CardRow) -> Self {
        ProductCard {
            id: ProductId(parse_uuid(&r.id)),
            name: r.name,
            price: r.price,
            image_url: r.image_url,
            category_name: r.category_name,
            category_slug: r.category_slug,
            category_kind: r.category_kind.parse().unwrap_or(CategoryKind::Goods),
        }
    }
}

const LIST_CARDS_SQL: &str = r#"
    SELECT p.id, p.name, p.price, p.image_url,
           c.name AS category_name, c.slug AS category_slug, c.kind AS category_kind
    FROM a002_product p
    JOIN a001_category c ON p.category_id = c.id
"#;

/// Карточки витрины в порядке названия товара
pub async fn list_cards(db: &impl ConnectionTrait) -> Result<Vec<ProductCard>, DbErr> {
    let sql = format!("{LIST_CARDS_SQL} ORDER BY p.name");
    let rows = CardRow::find_by_statement(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Карточки для админки: по категории, затем по названию
pub async fn list_cards_by_category(db: &impl ConnectionTrait) -> Result<Vec<ProductCard>, DbErr> {
    let sql = format!("{LIST_CARDS_SQL} ORDER BY c.name, p.name");
    let rows = CardRow::find_by_statement(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(db: &impl ConnectionTrait, id: ProductId) -> Result<Option<Product>, DbErr> {
    let result = Entity::find_by_id(id.as_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count_in_category(
    db: &impl ConnectionTrait,
    category_id: CategoryId,
) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::CategoryId.eq(category_id.as_string()))
        .count(db)
        .await
}

pub async fn insert(db: &impl ConnectionTrait, aggregate: &Product) -> Result<ProductId, DbErr> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        name: Set(aggregate.name.clone()),
        price: Set(aggregate.price.clone()),
        image_url: Set(aggregate.image_url.clone()),
        category_id: Set(aggregate.category_id.as_string()),
        created_at: Set(Some(aggregate.metadata.created_at)),
    };
    active.insert(db).await?;
    Ok(aggregate.id)
}

pub async fn delete(db: &impl ConnectionTrait, id: ProductId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.as_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
