use super::repository;
use crate::domain::a002_product;
use crate::shared::error::CatalogError;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto, CategoryId, CategoryKind};
use contracts::domain::common::AggregateId;
use sea_orm::ConnectionTrait;

/// Фильтры витрины: служебные (all/goods/services) и обычные категории
#[derive(Debug, Clone, Default)]
pub struct ShopFilters {
    pub meta: Vec<Category>,
    pub regular: Vec<Category>,
}

/// Создание новой категории
pub async fn create(db: &impl ConnectionTrait, dto: CategoryDto) -> Result<CategoryId, CatalogError> {
    let aggregate = dto.into_aggregate().map_err(CatalogError::Validation)?;

    if repository::find_conflicting(db, &aggregate.name, &aggregate.slug)
        .await?
        .is_some()
    {
        return Err(CatalogError::Conflict(format!(
            "Category name or slug ('{}' / '{}') already exists",
            aggregate.name, aggregate.slug
        )));
    }

    let id = repository::insert(db, &aggregate).await?;
    tracing::info!("Category '{}' ({}) added", aggregate.name, aggregate.slug);
    Ok(id)
}

/// Удаление категории. Категорию, в которой есть товары, удалить нельзя.
pub async fn delete(db: &impl ConnectionTrait, id: &str) -> Result<(), CatalogError> {
    let id = CategoryId::from_string(id).map_err(CatalogError::Validation)?;
    let category = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Category {id}")))?;

    if a002_product::repository::count_in_category(db, id).await? > 0 {
        return Err(CatalogError::CategoryInUse(category.name));
    }

    if !repository::delete(db, id).await? {
        return Err(CatalogError::NotFound(format!("Category {id}")));
    }
    tracing::info!("Category '{}' deleted", category.name);
    Ok(())
}

pub async fn list_all(db: &impl ConnectionTrait) -> Result<Vec<Category>, CatalogError> {
    Ok(repository::list_all(db).await?)
}

/// The "all" button is always placed first among the meta filters.
pub async fn shop_filters(db: &impl ConnectionTrait) -> Result<ShopFilters, CatalogError> {
    let mut meta = repository::list_where_kind(db, CategoryKind::Meta, true).await?;
    meta.sort_by_key(|c| !c.is_all());
    let regular = repository::list_where_kind(db, CategoryKind::Meta, false).await?;
    Ok(ShopFilters { meta, regular })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_test_database;
    use contracts::domain::a002_product::aggregate::ProductDto;

    fn dto(name: &str, slug: &str, kind: &str) -> CategoryDto {
        CategoryDto {
            name: name.to_string(),
            slug: slug.to_string(),
            kind: kind.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_name_or_slug_is_conflict() {
        let db = open_test_database().await;
        create(&db, dto("iPhone", "iphone", "goods")).await.unwrap();

        let same_slug = create(&db, dto("Phones", "iphone", "goods")).await;
        assert!(matches!(same_slug, Err(CatalogError::Conflict(_))));

        let same_name = create(&db, dto("iPhone", "phones", "goods")).await;
        assert!(matches!(same_name, Err(CatalogError::Conflict(_))));

        assert_eq!(list_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_kind_is_validation_error() {
        let db = open_test_database().await;
        let result = create(&db, dto("Misc", "misc", "stuff")).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_category_with_products_cannot_be_deleted() {
        let db = open_test_database().await;
        let id = create(&db, dto("iPad", "ipad", "goods")).await.unwrap();
        let product_id = a002_product::service::create(
            &db,
            ProductDto {
                name: "iPad Air".into(),
                price: "From $599".into(),
                image_url: "/static/images/product3.jpg".into(),
                category_id: id.as_string(),
            },
        )
        .await
        .unwrap();

        let in_use = delete(&db, &id.as_string()).await;
        assert!(matches!(in_use, Err(CatalogError::CategoryInUse(name)) if name == "iPad"));

        a002_product::service::delete(&db, &product_id.as_string())
            .await
            .unwrap();
        delete(&db, &id.as_string()).await.unwrap();

        let again = delete(&db, &id.as_string()).await;
        assert!(matches!(again, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_or_malformed_id() {
        let db = open_test_database().await;
        let missing = delete(&db, &CategoryId::new_v4().as_string()).await;
        assert!(matches!(missing, Err(CatalogError::NotFound(_))));

        let malformed = delete(&db, "not-a-uuid").await;
        assert!(matches!(malformed, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_shop_filters_put_all_first() {
        let db = open_test_database().await;
        create(&db, dto("Services", "services", "meta")).await.unwrap();
        create(&db, dto("Goods", "goods", "meta")).await.unwrap();
        // По названию была бы последней
        create(&db, dto("Whole catalog", "all", "meta")).await.unwrap();
        create(&db, dto("iCloud+", "icloud", "services")).await.unwrap();
        create(&db, dto("Apple Watch", "watch", "goods")).await.unwrap();

        let filters = shop_filters(&db).await.unwrap();
        let meta: Vec<&str> = filters.meta.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(meta, vec!["all", "goods", "services"]);
        let regular: Vec<&str> = filters.regular.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(regular, vec!["watch", "icloud"]);
    }
}
