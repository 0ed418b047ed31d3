use super::layout::{ControlLayout, NavAffordance, PageIndicator};
use std::num::NonZeroUsize;

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// Количество страниц для `len` видимых карточек. Пустой список — одна пустая страница.
pub fn total_pages_for(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Page slice of the visible set plus the page count it was cut against.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Пагинатор: активная страница (1-based) и фиксированный размер страницы.
///
/// `active_page` stays within `1..=max(1, total_pages)`; every entry point
/// clamps instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    active_page: usize,
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            active_page: 1,
            page_size,
        }
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Переход на страницу `n` с ограничением в `[1, total_pages]`.
    ///
    /// Returns whether the active page changed.
    pub fn set_page(&mut self, n: usize, total_pages: usize) -> bool {
        let target = n.clamp(1, total_pages.max(1));
        let changed = target != self.active_page;
        self.active_page = target;
        changed
    }

    pub fn reset_to_first_page(&mut self) {
        self.active_page = 1;
    }

    /// Шаг назад; на первой странице ничего не делает
    pub fn prev(&mut self) -> bool {
        if self.active_page > 1 {
            self.active_page -= 1;
            true
        } else {
            false
        }
    }

    /// Шаг вперёд; на последней странице ничего не делает
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.active_page < total_pages {
            self.active_page += 1;
            true
        } else {
            false
        }
    }

    /// Cuts the active page out of `visible`.
    ///
    /// If the visible set shrank since the page was chosen, the active page
    /// is pulled back to the last page first.
    pub fn compute_slice<'a, T>(&mut self, visible: &'a [T]) -> PageSlice<'a, T> {
        let total_pages = total_pages_for(visible.len(), self.page_size);
        if self.active_page > total_pages {
            self.active_page = total_pages;
        }
        if self.active_page == 0 {
            self.active_page = 1;
        }

        let size = self.page_size.get();
        let start = ((self.active_page - 1) * size).min(visible.len());
        let end = (start + size).min(visible.len());

        PageSlice {
            items: &visible[start..end],
            total_pages,
        }
    }

    pub fn describe_controls(&self, total_pages: usize) -> ControlLayout {
        if total_pages <= 1 {
            return ControlLayout::Hidden;
        }

        ControlLayout::Shown {
            prev: NavAffordance {
                enabled: self.active_page > 1,
            },
            pages: (1..=total_pages)
                .map(|page| PageIndicator {
                    page,
                    active: page == self.active_page,
                })
                .collect(),
            next: NavAffordance {
                enabled: self.active_page < total_pages,
            },
        }
    }
}
