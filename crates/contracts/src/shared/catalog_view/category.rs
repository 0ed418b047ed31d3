use super::item::Item;
use std::fmt;

/// Токен фильтра "показать всё"
pub const ALL_CATEGORIES: &str = "all";

/// Активный фильтр по категории.
///
/// Any token is accepted. Unknown tokens are kept literally and simply match
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Tag(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => item.tags().contains(tag),
        }
    }

    /// Селектор подсвечивается, если его токен совпадает с активным
    pub fn is_selected_by(&self, selector_token: &str) -> bool {
        self.token() == selector_token
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_view::item::TagSet;

    #[test]
    fn test_all_token_round_trip() {
        assert_eq!(CategoryFilter::from_token("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.token(), "all");
        assert_eq!(CategoryFilter::from_token("ALL").token(), "ALL");
    }

    #[test]
    fn test_all_matches_untagged_item() {
        let item = Item::new(0, TagSet::default());
        assert!(CategoryFilter::All.matches(&item));
        assert!(!CategoryFilter::from_token("goods").matches(&item));
    }
}
