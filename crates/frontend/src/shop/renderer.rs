use contracts::shared::catalog_view::{CatalogRenderer, ControlLayout};
use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";

/// Applies render frames to the live DOM.
///
/// Cards and selectors only get a presentation class toggled; the pagination
/// region is owned by the `PaginationControls` component and follows the
/// `layout` signal.
pub struct DomRenderer {
    cards: Vec<HtmlElement>,
    selectors: Vec<Element>,
    layout: RwSignal<ControlLayout>,
}

impl DomRenderer {
    pub fn new(
        cards: Vec<HtmlElement>,
        selectors: Vec<Element>,
        layout: RwSignal<ControlLayout>,
    ) -> Self {
        Self {
            cards,
            selectors,
            layout,
        }
    }
}

impl CatalogRenderer for DomRenderer {
    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(card) = self.cards.get(index) {
            let _ = card.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
        }
    }

    fn set_selector_active(&mut self, index: usize, active: bool) {
        if let Some(button) = self.selectors.get(index) {
            let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
    }

    fn replace_controls(&mut self, layout: &ControlLayout) {
        self.layout.set(layout.clone());
    }
}
