use super::category::CategoryFilter;
use super::filter_engine::FilterEngine;
use super::item::Item;
use super::layout::{ControlAction, ControlLayout};
use super::paginator::{total_pages_for, Paginator};
use std::num::NonZeroUsize;

/// Внешний триггер, уже разобранный адаптером события.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SelectCategory(String),
    SelectPage(usize),
    Prev,
    Next,
}

impl From<ControlAction> for ViewEvent {
    fn from(action: ControlAction) -> Self {
        match action {
            ControlAction::Prev => Self::Prev,
            ControlAction::Next => Self::Next,
            ControlAction::Page(n) => Self::SelectPage(n),
        }
    }
}

/// Output boundary: whatever draws the catalog.
pub trait CatalogRenderer {
    fn set_item_hidden(&mut self, index: usize, hidden: bool);
    fn set_selector_active(&mut self, index: usize, active: bool);
    /// Replaces the whole pagination region.
    fn replace_controls(&mut self, layout: &ControlLayout);
}

/// Полный снимок того, что нужно отрисовать после события.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Indexed like the static item list.
    pub hidden: Vec<bool>,
    /// Indexed like the selector tokens given to [`CatalogView::new`].
    pub selectors_active: Vec<bool>,
    pub layout: ControlLayout,
    pub active_category: String,
    pub active_page: usize,
    pub total_pages: usize,
}

impl RenderFrame {
    pub fn shown(&self) -> Vec<usize> {
        self.hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn render_into<R: CatalogRenderer + ?Sized>(&self, renderer: &mut R) {
        for (index, hidden) in self.hidden.iter().enumerate() {
            renderer.set_item_hidden(index, *hidden);
        }
        for (index, active) in self.selectors_active.iter().enumerate() {
            renderer.set_selector_active(index, *active);
        }
        renderer.replace_controls(&self.layout);
    }
}

/// Контроллер витрины: единственный владелец состояния `(категория, страница)`.
///
/// Every trigger runs to completion and returns the complete frame, so a
/// caller never observes a half-applied transition.
#[derive(Debug, Clone)]
pub struct CatalogView {
    engine: FilterEngine,
    paginator: Paginator,
    selectors: Vec<String>,
}

impl CatalogView {
    pub fn new(items: Vec<Item>, selectors: Vec<String>, page_size: NonZeroUsize) -> Self {
        Self {
            engine: FilterEngine::new(items),
            paginator: Paginator::new(page_size),
            selectors,
        }
    }

    pub fn active_category(&self) -> &CategoryFilter {
        self.engine.active_category()
    }

    pub fn active_page(&self) -> usize {
        self.paginator.active_page()
    }

    pub fn handle(&mut self, event: ViewEvent) -> RenderFrame {
        match event {
            ViewEvent::SelectCategory(token) => self.select_category(&token),
            ViewEvent::SelectPage(n) => self.select_page(n),
            ViewEvent::Prev => self.click_prev(),
            ViewEvent::Next => self.click_next(),
        }
    }

    pub fn select_category(&mut self, token: &str) -> RenderFrame {
        self.engine.set_category(token, &mut self.paginator);
        self.render()
    }

    pub fn select_page(&mut self, n: usize) -> RenderFrame {
        let total = self.total_pages();
        self.paginator.set_page(n, total);
        self.render()
    }

    pub fn click_prev(&mut self) -> RenderFrame {
        self.paginator.prev();
        self.render()
    }

    pub fn click_next(&mut self) -> RenderFrame {
        let total = self.total_pages();
        self.paginator.next(total);
        self.render()
    }

    fn total_pages(&self) -> usize {
        let visible = self.engine.match_mask().into_iter().filter(|m| *m).count();
        total_pages_for(visible, self.paginator.page_size())
    }

    /// Recomputes the frame from current state without changing the
    /// category. Also used for the initial draw.
    pub fn render(&mut self) -> RenderFrame {
        let visible = self.engine.compute_visible();
        let slice = self.paginator.compute_slice(&visible);

        let mut hidden = vec![true; self.engine.items().len()];
        for item in slice.items {
            hidden[item.index()] = false;
        }
        let total_pages = slice.total_pages;

        let active = self.engine.active_category();
        let selectors_active = self
            .selectors
            .iter()
            .map(|token| active.is_selected_by(token))
            .collect();

        RenderFrame {
            hidden,
            selectors_active,
            layout: self.paginator.describe_controls(total_pages),
            active_category: active.token().to_string(),
            active_page: self.paginator.active_page(),
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_view::item::items_from_markup;
    use crate::shared::catalog_view::layout::{NavAffordance, PageIndicator};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// 10 карточек, 4 из них — "shoes"
    fn shoes_view() -> CatalogView {
        let tags = vec![
            Some("shoes"),
            Some("hats"),
            Some("shoes sale"),
            Some("hats"),
            Some("bags"),
            Some("shoes"),
            Some("bags"),
            Some("hats"),
            Some("bags"),
            Some("sale shoes"),
        ];
        CatalogView::new(
            items_from_markup(tags),
            vec!["all".into(), "shoes".into(), "hats".into(), "bags".into()],
            size(8),
        )
    }

    #[derive(Default)]
    struct RecordingRenderer {
        hidden: Vec<(usize, bool)>,
        selectors: Vec<(usize, bool)>,
        layouts: Vec<ControlLayout>,
    }

    impl CatalogRenderer for RecordingRenderer {
        fn set_item_hidden(&mut self, index: usize, hidden: bool) {
            self.hidden.push((index, hidden));
        }

        fn set_selector_active(&mut self, index: usize, active: bool) {
            self.selectors.push((index, active));
        }

        fn replace_controls(&mut self, layout: &ControlLayout) {
            self.layouts.push(layout.clone());
        }
    }

    #[test]
    fn test_initial_render_all_first_page() {
        let mut view = shoes_view();
        let frame = view.render();

        assert_eq!(frame.active_category, "all");
        assert_eq!(frame.active_page, 1);
        assert_eq!(frame.total_pages, 2);
        assert_eq!(frame.shown(), (0..8).collect::<Vec<_>>());
        assert_eq!(frame.selectors_active, vec![true, false, false, false]);
        assert_eq!(
            frame.layout,
            ControlLayout::Shown {
                prev: NavAffordance { enabled: false },
                pages: vec![
                    PageIndicator { page: 1, active: true },
                    PageIndicator { page: 2, active: false },
                ],
                next: NavAffordance { enabled: true },
            }
        );
    }

    #[test]
    fn test_select_shoes_single_page_no_controls() {
        let mut view = shoes_view();
        view.render();
        let frame = view.select_category("shoes");

        assert_eq!(frame.total_pages, 1);
        assert!(frame.layout.is_hidden());
        assert_eq!(frame.shown(), vec![0, 2, 5, 9]);
        assert_eq!(frame.selectors_active, vec![false, true, false, false]);
    }

    #[test]
    fn test_empty_category_renders_nothing() {
        let mut view = shoes_view();
        let frame = view.select_category("socks");

        assert_eq!(frame.total_pages, 1);
        assert_eq!(frame.active_page, 1);
        assert!(frame.shown().is_empty());
        assert!(frame.layout.is_hidden());
        assert!(frame.selectors_active.iter().all(|a| !a));
    }

    #[test]
    fn test_reselecting_category_only_resets_page() {
        let mut view = shoes_view();
        let first = view.render();
        view.click_next();
        assert_eq!(view.active_page(), 2);

        let again = view.select_category("all");
        assert_eq!(again, first);
    }

    #[test]
    fn test_navigation_transitions() {
        let mut view = shoes_view();
        view.render();

        let frame = view.click_prev();
        assert_eq!(frame.active_page, 1);

        let frame = view.click_next();
        assert_eq!(frame.active_page, 2);
        assert_eq!(frame.shown(), vec![8, 9]);
        assert_eq!(frame.layout.active_page(), Some(2));

        let frame = view.click_next();
        assert_eq!(frame.active_page, 2);

        let frame = view.select_page(1);
        assert_eq!(frame.active_page, 1);

        let frame = view.select_page(42);
        assert_eq!(frame.active_page, 2);
    }

    #[test]
    fn test_category_change_always_returns_to_page_one() {
        let mut view = CatalogView::new(
            items_from_markup(std::iter::repeat(Some("x")).take(30)),
            vec!["all".into(), "x".into()],
            size(4),
        );
        view.select_page(6);
        assert_eq!(view.active_page(), 6);

        let frame = view.handle(ViewEvent::SelectCategory("x".into()));
        assert_eq!(frame.active_page, 1);
        assert_eq!(frame.shown(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_control_actions_map_to_events() {
        let mut view = shoes_view();
        let frame = view.handle(ControlAction::Page(2).into());
        assert_eq!(frame.active_page, 2);
        let frame = view.handle(ControlAction::Prev.into());
        assert_eq!(frame.active_page, 1);
        let frame = view.handle(ControlAction::Next.into());
        assert_eq!(frame.active_page, 2);
    }

    #[test]
    fn test_render_into_touches_every_element_and_region_once() {
        let mut view = shoes_view();
        let frame = view.select_category("hats");

        let mut renderer = RecordingRenderer::default();
        frame.render_into(&mut renderer);

        assert_eq!(renderer.hidden.len(), 10);
        let shown: Vec<usize> = renderer
            .hidden
            .iter()
            .filter(|(_, hidden)| !hidden)
            .map(|(i, _)| *i)
            .collect();
        assert_eq!(shown, vec![1, 3, 7]);
        assert_eq!(
            renderer.selectors,
            vec![(0, false), (1, false), (2, true), (3, false)]
        );
        assert_eq!(renderer.layouts, vec![ControlLayout::Hidden]);
    }
}
