use chrono::Utc;
use contracts::domain::a001_category::aggregate::{Category, CategoryId, CategoryKind};
use contracts::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub kind: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Category {
            id: CategoryId(uuid),
            name: m.name,
            slug: m.slug,
            // CHECK constraint keeps the column within the known kinds
            kind: m.kind.parse().unwrap_or(CategoryKind::Goods),
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
            },
        }
    }
}

fn into_aggregates(models: Vec<Model>) -> Vec<Category> {
    models.into_iter().map(Into::into).collect()
}

/// Все категории, упорядоченные по типу и названию
pub async fn list_all(db: &impl ConnectionTrait) -> Result<Vec<Category>, DbErr> {
    let models = Entity::find()
        .order_by_asc(Column::Kind)
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(into_aggregates(models))
}

/// Категории одного типа или всех типов, кроме него
pub async fn list_where_kind(
    db: &impl ConnectionTrait,
    kind: CategoryKind,
    equal: bool,
) -> Result<Vec<Category>, DbErr> {
    let filter = if equal {
        Column::Kind.eq(kind.as_str())
    } else {
        Column::Kind.ne(kind.as_str())
    };
    let models = Entity::find()
        .filter(filter)
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(into_aggregates(models))
}

pub async fn get_by_id(db: &impl ConnectionTrait, id: CategoryId) -> Result<Option<Category>, DbErr> {
    let result = Entity::find_by_id(id.as_string()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Существующая категория с тем же названием или slug
pub async fn find_conflicting(
    db: &impl ConnectionTrait,
    name: &str,
    slug: &str,
) -> Result<Option<Category>, DbErr> {
    let result = Entity::find()
        .filter(
            Condition::any()
                .add(Column::Name.eq(name))
                .add(Column::Slug.eq(slug)),
        )
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn insert(db: &impl ConnectionTrait, aggregate: &Category) -> Result<CategoryId, DbErr> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        name: Set(aggregate.name.clone()),
        slug: Set(aggregate.slug.clone()),
        kind: Set(aggregate.kind.as_str().to_string()),
        created_at: Set(Some(aggregate.metadata.created_at)),
    };
    active.insert(db).await?;
    Ok(aggregate.id)
}

pub async fn delete(db: &impl ConnectionTrait, id: CategoryId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.as_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
