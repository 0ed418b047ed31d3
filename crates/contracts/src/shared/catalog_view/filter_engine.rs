use super::category::CategoryFilter;
use super::item::Item;
use super::paginator::Paginator;

/// Фильтр каталога: статический список карточек и активная категория.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    items: Vec<Item>,
    active: CategoryFilter,
}

impl FilterEngine {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            active: CategoryFilter::All,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active
    }

    /// Switches the active category and sends the paginator back to page 1.
    ///
    /// Total over its input: an unknown token is stored as-is and yields an
    /// empty visible set.
    pub fn set_category(&mut self, token: &str, paginator: &mut Paginator) {
        self.active = CategoryFilter::from_token(token);
        paginator.reset_to_first_page();
    }

    /// Карточки, подходящие под активную категорию, в исходном порядке
    pub fn compute_visible(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.active.matches(item))
            .collect()
    }

    /// Per-item match flags, indexed like [`Self::items`].
    pub fn match_mask(&self) -> Vec<bool> {
        self.items.iter().map(|item| self.active.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_view::item::items_from_markup;

    fn engine() -> FilterEngine {
        FilterEngine::new(items_from_markup(vec![
            Some("iphone goods"),
            Some("music services"),
            Some("goods"),
            None,
            Some("iphone goods"),
            Some("Goods"),
        ]))
    }

    fn indices(visible: &[&Item]) -> Vec<usize> {
        visible.iter().map(|i| i.index()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let e = engine();
        assert_eq!(indices(&e.compute_visible()), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_tag_filter_is_exact_and_ordered() {
        let mut e = engine();
        let mut p = Paginator::default();

        e.set_category("goods", &mut p);
        assert_eq!(indices(&e.compute_visible()), vec![0, 2, 4]);

        e.set_category("iphone", &mut p);
        assert_eq!(indices(&e.compute_visible()), vec![0, 4]);

        e.set_category("Goods", &mut p);
        assert_eq!(indices(&e.compute_visible()), vec![5]);
    }

    #[test]
    fn test_unknown_token_matches_nothing() {
        let mut e = engine();
        let mut p = Paginator::default();
        e.set_category("nope", &mut p);
        assert_eq!(e.active_category().token(), "nope");
        assert!(e.compute_visible().is_empty());
        assert!(e.match_mask().iter().all(|m| !m));
    }

    #[test]
    fn test_set_category_resets_page() {
        let mut e = engine();
        let mut p = Paginator::new(std::num::NonZeroUsize::new(1).unwrap());
        p.set_page(4, 6);
        assert_eq!(p.active_page(), 4);

        e.set_category("all", &mut p);
        assert_eq!(p.active_page(), 1);
        assert_eq!(e.active_category(), &CategoryFilter::All);
    }
}
