//! Client-side catalog view: category filter + pagination state machine.
//!
//! Pure data in, pure data out. The frontend feeds it the cards found in the
//! server-rendered markup and applies the returned [`RenderFrame`]s.

pub mod bootstrap;
pub mod category;
pub mod filter_engine;
pub mod item;
pub mod layout;
pub mod paginator;
pub mod view;

pub use bootstrap::{check_regions, BootstrapError, RequiredRegion};
pub use category::{CategoryFilter, ALL_CATEGORIES};
pub use filter_engine::FilterEngine;
pub use item::{items_from_markup, Item, TagSet};
pub use layout::{ControlAction, ControlLayout, NavAffordance, PageIndicator};
pub use paginator::{total_pages_for, PageSlice, Paginator, DEFAULT_PAGE_SIZE};
pub use view::{CatalogRenderer, CatalogView, RenderFrame, ViewEvent};

/// Разбор `data-page-size`; пустое, нулевое или нечисловое значение даёт размер по умолчанию
pub fn parse_page_size(raw: Option<&str>) -> std::num::NonZeroUsize {
    raw.and_then(|s| s.trim().parse::<std::num::NonZeroUsize>().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size(None).get(), 8);
        assert_eq!(parse_page_size(Some("12")).get(), 12);
        assert_eq!(parse_page_size(Some(" 3 ")).get(), 3);
        assert_eq!(parse_page_size(Some("0")).get(), 8);
        assert_eq!(parse_page_size(Some("-1")).get(), 8);
        assert_eq!(parse_page_size(Some("abc")).get(), 8);
    }
}
