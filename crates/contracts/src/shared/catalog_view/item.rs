use std::collections::BTreeSet;

/// Набор категорийных тегов карточки.
///
/// Parsed from the whitespace separated `data-category` attribute. Order and
/// duplicates in the source string are not significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn parse(raw: &str) -> Self {
        Self(raw.split_whitespace().map(str::to_string).collect())
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Карточка товара из статической разметки.
///
/// `index` is the card's position in the source list and doubles as its
/// identity; items are created once at load and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    index: usize,
    tags: TagSet,
}

impl Item {
    pub fn new(index: usize, tags: TagSet) -> Self {
        Self { index, tags }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

/// Builds the static item list from the raw category attribute of each card,
/// in document order. A card without the attribute gets an empty tag set.
pub fn items_from_markup<'a, I>(raw_tags: I) -> Vec<Item>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    raw_tags
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Item::new(index, raw.map(TagSet::parse).unwrap_or_default()))
        .collect()
}
