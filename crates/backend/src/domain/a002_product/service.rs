use super::repository;
use crate::domain::a001_category;
use crate::shared::error::CatalogError;
use contracts::domain::a002_product::aggregate::{ProductCard, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use sea_orm::ConnectionTrait;

/// Создание нового товара
pub async fn create(db: &impl ConnectionTrait, dto: ProductDto) -> Result<ProductId, CatalogError> {
    let aggregate = dto.into_aggregate().map_err(CatalogError::Validation)?;

    if a001_category::repository::get_by_id(db, aggregate.category_id)
        .await?
        .is_none()
    {
        return Err(CatalogError::Validation(format!(
            "Unknown category {}",
            aggregate.category_id
        )));
    }

    let id = repository::insert(db, &aggregate).await?;
    tracing::info!("Product '{}' added", aggregate.name);
    Ok(id)
}

pub async fn delete(db: &impl ConnectionTrait, id: &str) -> Result<(), CatalogError> {
    let id = ProductId::from_string(id).map_err(CatalogError::Validation)?;
    let product = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Product {id}")))?;

    if !repository::delete(db, id).await? {
        return Err(CatalogError::NotFound(format!("Product {id}")));
    }
    tracing::info!("Product '{}' deleted", product.name);
    Ok(())
}

/// Карточки витрины (по названию)
pub async fn list_cards(db: &impl ConnectionTrait) -> Result<Vec<ProductCard>, CatalogError> {
    Ok(repository::list_cards(db).await?)
}

/// Карточки для админки (по категории, затем по названию)
pub async fn list_cards_by_category(db: &impl ConnectionTrait) -> Result<Vec<ProductCard>, CatalogError> {
    Ok(repository::list_cards_by_category(db).await?)
}
