use serde::{Deserialize, Serialize};

/// Кнопка "назад"/"вперёд"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAffordance {
    pub enabled: bool,
}

/// Индикатор номера страницы (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageIndicator {
    pub page: usize,
    pub active: bool,
}

/// What a click on a pagination affordance asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Prev,
    Next,
    Page(usize),
}

/// Data-only description of the pagination region.
///
/// Built fresh from the paginator state on every recompute; the renderer
/// replaces the whole region with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlLayout {
    /// One page or less: no navigation chrome at all.
    #[default]
    Hidden,
    Shown {
        prev: NavAffordance,
        pages: Vec<PageIndicator>,
        next: NavAffordance,
    },
}

impl ControlLayout {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn active_page(&self) -> Option<usize> {
        match self {
            Self::Hidden => None,
            Self::Shown { pages, .. } => pages.iter().find(|p| p.active).map(|p| p.page),
        }
    }
}
