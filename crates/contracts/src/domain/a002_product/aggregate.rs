use crate::domain::a001_category::aggregate::{CategoryId, CategoryKind};
use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};

/// Изображения товаров должны лежать в статике сервера
pub const IMAGE_URL_PREFIX: &str = "/static/images/";

crate::aggregate_id!(
    /// Уникальный идентификатор товара
    ProductId
);

/// Товар или услуга
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-form price label ("From $999", "$10.99/month").
    pub price: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Product {
    pub fn new_for_insert(
        name: String,
        price: String,
        image_url: String,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: ProductId::new_v4(),
            name,
            price,
            image_url,
            category_id,
            metadata: EntityMetadata::new(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if self.price.trim().is_empty() {
            return Err("Product price must not be empty".into());
        }
        if !self.image_url.starts_with(IMAGE_URL_PREFIX) {
            return Err(format!("Image URL must start with {IMAGE_URL_PREFIX}"));
        }
        Ok(())
    }
}

/// DTO для создания товара
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
}

impl ProductDto {
    pub fn into_aggregate(self) -> Result<Product, String> {
        let category_id = CategoryId::from_string(self.category_id.trim())?;
        let product = Product::new_for_insert(
            self.name.trim().to_string(),
            self.price.trim().to_string(),
            self.image_url.trim().to_string(),
            category_id,
        );
        product.validate()?;
        Ok(product)
    }
}

/// Карточка товара на витрине: товар вместе с данными его категории.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
    #[serde(rename = "categoryType")]
    pub category_kind: CategoryKind,
}

impl ProductCard {
    /// Value of the card's `data-category` attribute.
    ///
    /// The category kind is included so the broad "goods"/"services" filters
    /// match every product of that kind.
    pub fn tags(&self) -> String {
        if self.category_kind == CategoryKind::Meta || self.category_slug == self.category_kind.as_str() {
            self.category_slug.clone()
        } else {
            format!("{} {}", self.category_slug, self.category_kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(slug: &str, kind: CategoryKind) -> ProductCard {
        ProductCard {
            id: ProductId::new_v4(),
            name: "AirPods Pro".into(),
            price: "$249".into(),
            image_url: "/static/images/placeholder.jpg".into(),
            category_name: slug.into(),
            category_slug: slug.into(),
            category_kind: kind,
        }
    }

    #[test]
    fn test_card_tags_include_kind() {
        assert_eq!(card("iphone", CategoryKind::Goods).tags(), "iphone goods");
        assert_eq!(card("music", CategoryKind::Services).tags(), "music services");
    }

    #[test]
    fn test_card_tags_for_broad_category() {
        assert_eq!(card("goods", CategoryKind::Meta).tags(), "goods");
    }

    #[test]
    fn test_image_url_prefix_enforced() {
        let dto = ProductDto {
            name: "HomePod".into(),
            price: "$299".into(),
            image_url: "https://example.com/x.jpg".into(),
            category_id: uuid::Uuid::new_v4().to_string(),
        };
        let err = dto.into_aggregate().unwrap_err();
        assert!(err.contains(IMAGE_URL_PREFIX));
    }

    #[test]
    fn test_invalid_category_id() {
        let dto = ProductDto {
            name: "HomePod".into(),
            price: "$299".into(),
            image_url: "/static/images/placeholder.jpg".into(),
            category_id: "42".into(),
        };
        assert!(dto.into_aggregate().unwrap_err().starts_with("Invalid UUID"));
    }
}
