//! Демо-каталог для пустой БД.

use super::{a001_category, a002_product};
use contracts::domain::a001_category::aggregate::{Category, CategoryId, CategoryKind};
use contracts::domain::a002_product::aggregate::Product;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

/// (name, slug, kind)
const DEMO_CATEGORIES: &[(&str, &str, CategoryKind)] = &[
    ("All Products & Services", "all", CategoryKind::Meta),
    ("Goods", "goods", CategoryKind::Meta),
    ("Services", "services", CategoryKind::Meta),
    ("iPhone", "iphone", CategoryKind::Goods),
    ("MacBook", "macbook", CategoryKind::Goods),
    ("iPad", "ipad", CategoryKind::Goods),
    ("Apple Watch", "watch", CategoryKind::Goods),
    ("Apple Music", "music", CategoryKind::Services),
    ("iCloud+", "icloud", CategoryKind::Services),
    ("Apple TV+", "tv", CategoryKind::Services),
    ("Apple Arcade", "arcade", CategoryKind::Services),
];

/// (name, price, image_url, category slug)
const DEMO_PRODUCTS: &[(&str, &str, &str, &str)] = &[
    ("iPhone 15 Pro", "From $999", "/static/images/product1.jpg", "iphone"),
    ("MacBook Air M3", "From $1099", "/static/images/product2.jpg", "macbook"),
    ("iPad Pro", "From $799", "/static/images/product3.jpg", "ipad"),
    ("Apple Watch Series 9", "From $399", "/static/images/product4.jpg", "watch"),
    ("Apple Music", "$10.99/month", "/static/images/service1.png", "music"),
    ("iCloud+", "From $0.99/month", "/static/images/service2.png", "icloud"),
    ("Apple TV+", "$9.99/month", "/static/images/service3.png", "tv"),
    ("Apple Arcade", "$6.99/month", "/static/images/service4.png", "arcade"),
    ("iPhone 15", "From $799", "/static/images/product1.jpg", "iphone"),
    ("MacBook Pro M3", "From $1599", "/static/images/product2.jpg", "macbook"),
    ("Apple Watch Ultra 2", "From $799", "/static/images/product4.jpg", "watch"),
    ("iPad Air", "From $599", "/static/images/product3.jpg", "ipad"),
    ("MacBook Pro 16\"", "From $2499", "/static/images/product2.jpg", "macbook"),
    ("iPad Mini", "From $499", "/static/images/product3.jpg", "ipad"),
    ("iPhone SE", "From $429", "/static/images/product1.jpg", "iphone"),
    ("Apple Watch SE", "From $249", "/static/images/product4.jpg", "watch"),
    ("HomePod", "$299", "/static/images/placeholder.jpg", "goods"),
    ("AirPods Pro", "$249", "/static/images/placeholder.jpg", "goods"),
    ("Apple Pencil", "From $99", "/static/images/placeholder.jpg", "goods"),
    ("Magic Keyboard", "From $299", "/static/images/placeholder.jpg", "goods"),
];

fn demo_categories() -> Vec<Category> {
    DEMO_CATEGORIES
        .iter()
        .map(|(name, slug, kind)| Category::new_for_insert(name.to_string(), slug.to_string(), *kind))
        .collect()
}

/// Resolves product category slugs; products with an unknown slug are
/// returned separately by name.
fn demo_products(slugs: &HashMap<String, CategoryId>) -> (Vec<Product>, Vec<&'static str>) {
    let mut products = Vec::new();
    let mut skipped = Vec::new();
    for (name, price, image_url, slug) in DEMO_PRODUCTS {
        match slugs.get(*slug) {
            Some(category_id) => products.push(Product::new_for_insert(
                name.to_string(),
                price.to_string(),
                image_url.to_string(),
                *category_id,
            )),
            None => skipped.push(*name),
        }
    }
    (products, skipped)
}

/// Заполняет пустой каталог демо-данными. Непустой каталог не трогает.
///
/// Everything goes in one transaction: a failed insert leaves the catalog
/// empty, so the next start seeds again.
pub async fn seed_if_empty(db: &DatabaseConnection) -> anyhow::Result<()> {
    if a001_category::repository::count(db).await? > 0 {
        tracing::info!("Catalog already populated, skipping demo seed");
        return Ok(());
    }

    tracing::info!("Populating demo catalog...");
    let txn = db.begin().await?;

    let mut slugs = HashMap::new();
    for category in demo_categories() {
        a001_category::repository::insert(&txn, &category).await?;
        slugs.insert(category.slug.clone(), category.id);
    }

    let (products, skipped) = demo_products(&slugs);
    for name in skipped {
        tracing::warn!("Category slug not found for product '{}', skipping", name);
    }
    for product in &products {
        a002_product::repository::insert(&txn, product).await?;
    }

    txn.commit().await?;
    tracing::info!(
        "Demo catalog ready: {} categories, {} products",
        slugs.len(),
        products.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{connect, database_url, open_test_database, test_database_path};
    use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};

    #[test]
    fn test_demo_categories_are_valid_and_unique() {
        let categories = demo_categories();
        assert_eq!(categories.len(), 11);
        for c in &categories {
            assert!(c.validate().is_ok(), "{}", c.slug);
        }
        let mut slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), categories.len());
        assert!(categories.iter().any(|c| c.is_all()));
    }

    #[test]
    fn test_every_demo_product_resolves() {
        let slugs: HashMap<String, CategoryId> = demo_categories()
            .into_iter()
            .map(|c| (c.slug, c.id))
            .collect();
        let (products, skipped) = demo_products(&slugs);
        assert_eq!(products.len(), 20);
        assert!(skipped.is_empty());
        assert!(products.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_unknown_slug_is_skipped() {
        let mut slugs = HashMap::new();
        slugs.insert("iphone".to_string(), CategoryId(uuid::Uuid::new_v4()));
        let (products, skipped) = demo_products(&slugs);
        assert_eq!(products.len(), 3);
        assert!(skipped.contains(&"HomePod"));
    }

    #[tokio::test]
    async fn test_seed_fills_empty_catalog_once() {
        let db = open_test_database().await;

        seed_if_empty(&db).await.unwrap();
        seed_if_empty(&db).await.unwrap();

        assert_eq!(a001_category::repository::count(&db).await.unwrap(), 11);
        let cards = a002_product::repository::list_cards(&db).await.unwrap();
        assert_eq!(cards.len(), 20);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_catalog_empty() {
        let path = test_database_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        // Таблица товаров, в которую демо-вставка не пройдёт
        let raw = Database::connect(&database_url(&path).unwrap()).await.unwrap();
        raw.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "CREATE TABLE a002_product (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                price TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category_id TEXT NOT NULL,
                created_at TEXT,
                extra TEXT NOT NULL
            )"
            .to_string(),
        ))
        .await
        .unwrap();
        drop(raw);

        let db = connect(&path).await.unwrap();
        let err = seed_if_empty(&db).await.unwrap_err();
        assert!(err.to_string().contains("NOT NULL"), "{err}");
        assert_eq!(a001_category::repository::count(&db).await.unwrap(), 0);

        // Следующий запуск снова пытается заполнить каталог
        assert!(seed_if_empty(&db).await.is_err());
        assert_eq!(a001_category::repository::count(&db).await.unwrap(), 0);
    }
}
