use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::catalog_view::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Уникальный идентификатор категории
    CategoryId
);

// ============================================================================
// Kind
// ============================================================================

/// Тип категории. `Meta` — служебные фильтры витрины ("all", "goods", "services").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Goods,
    Services,
    Meta,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goods => "goods",
            Self::Services => "services",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goods" => Ok(Self::Goods),
            "services" => Ok(Self::Services),
            "meta" => Ok(Self::Meta),
            other => Err(format!("Invalid category type: {other}")),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Filter token used in `data-filter` / `data-category`.
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Category {
    /// Создать новую категорию для вставки в БД
    pub fn new_for_insert(name: String, slug: String, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new_v4(),
            name,
            slug,
            kind,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn is_meta(&self) -> bool {
        self.kind == CategoryKind::Meta
    }

    /// The "show everything" filter button.
    pub fn is_all(&self) -> bool {
        self.slug == ALL_CATEGORIES
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name must not be empty".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Category slug must not be empty".into());
        }
        if self.slug.chars().any(char::is_whitespace) {
            return Err(format!("Category slug '{}' must be a single token", self.slug));
        }
        Ok(())
    }
}

/// DTO для создания категории
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CategoryDto {
    pub fn into_aggregate(self) -> Result<Category, String> {
        let kind = self.kind.trim().parse::<CategoryKind>()?;
        let category = Category::new_for_insert(
            self.name.trim().to_string(),
            self.slug.trim().to_string(),
            kind,
        );
        category.validate()?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, slug: &str, kind: &str) -> CategoryDto {
        CategoryDto {
            name: name.into(),
            slug: slug.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn test_dto_into_aggregate() {
        let c = dto(" iPhone ", "iphone", "goods").into_aggregate().unwrap();
        assert_eq!(c.name, "iPhone");
        assert_eq!(c.kind, CategoryKind::Goods);
        assert!(!c.is_meta());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = dto("X", "x", "gadgets").into_aggregate().unwrap_err();
        assert!(err.contains("gadgets"));
    }

    #[test]
    fn test_rejects_multi_token_slug() {
        assert!(dto("Apple TV", "apple tv", "services").into_aggregate().is_err());
        assert!(dto("", "tv", "services").into_aggregate().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let c = Category::new_for_insert("All".into(), "all".into(), CategoryKind::Meta);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "meta");
        assert!(c.is_all());
    }
}
