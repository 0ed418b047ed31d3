//! Поиск регионов серверной разметки витрины.

use contracts::shared::catalog_view::{
    check_regions, items_from_markup, parse_page_size, BootstrapError, Item, RequiredRegion,
};
use std::num::NonZeroUsize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Attribute on each card with its whitespace separated category tags
pub const CATEGORY_ATTR: &str = "data-category";
/// Attribute on each selector button with its category token
pub const FILTER_ATTR: &str = "data-filter";
/// Attribute on the pagination region with the server's page size
pub const PAGE_SIZE_ATTR: &str = "data-page-size";

/// Server-rendered pieces the catalog view drives.
pub struct ShopMarkup {
    pub category_list: HtmlElement,
    pub pagination_controls: HtmlElement,
    /// Product cards, document order
    pub cards: Vec<HtmlElement>,
    /// Category selector buttons, document order
    pub selectors: Vec<Element>,
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

impl ShopMarkup {
    /// Finds all three regions or none: a page missing any of them is
    /// rejected before anything is touched.
    pub fn locate() -> Result<Self, BootstrapError> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Err(BootstrapError::MissingRegions(RequiredRegion::ALL.to_vec()));
        };

        check_regions(|id| html_element_by_id(&document, id).is_some())?;

        let region = |region: RequiredRegion| {
            html_element_by_id(&document, region.element_id())
                .ok_or_else(|| BootstrapError::MissingRegions(vec![region]))
        };
        let product_grid = region(RequiredRegion::ProductGrid)?;
        let category_list = region(RequiredRegion::CategoryList)?;
        let pagination_controls = region(RequiredRegion::PaginationControls)?;

        let children = product_grid.children();
        let cards = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        let selectors = match category_list.query_selector_all(&format!("button[{FILTER_ATTR}]")) {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(_) => Vec::new(),
        };

        Ok(Self {
            category_list,
            pagination_controls,
            cards,
            selectors,
        })
    }

    pub fn items(&self) -> Vec<Item> {
        let raw: Vec<Option<String>> = self
            .cards
            .iter()
            .map(|card| card.get_attribute(CATEGORY_ATTR))
            .collect();
        items_from_markup(raw.iter().map(|r| r.as_deref()))
    }

    /// Selector tokens; a button without a token gets an empty one and is
    /// never highlighted by a real category.
    pub fn selector_tokens(&self) -> Vec<String> {
        self.selectors
            .iter()
            .map(|el| el.get_attribute(FILTER_ATTR).unwrap_or_default())
            .collect()
    }

    pub fn page_size(&self) -> NonZeroUsize {
        parse_page_size(
            self.pagination_controls
                .get_attribute(PAGE_SIZE_ATTR)
                .as_deref(),
        )
    }
}
