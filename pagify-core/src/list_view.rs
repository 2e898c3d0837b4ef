//! List-view controller
//!
//! One parameterized controller for every list page (products, users,
//! orders). It owns the source collection and a [`FilterState`]; the visible
//! subset is recomputed synchronously after every change.

/// An entry that can be shown in a filtered list.
pub trait Listable {
    /// Categorical status the list can be filtered by.
    type Status: Copy + PartialEq + std::fmt::Debug + 'static;

    /// Stable identifier.
    fn id(&self) -> &str;

    /// Concatenation of the fields the free-text query searches.
    fn search_text(&self) -> String;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Every status value, in display order.
    fn all_statuses() -> &'static [Self::Status];
}

/// Categorical filter; `All` is the sentinel meaning "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Copy + PartialEq> CategoryFilter<S> {
    /// Whether an entry with `status` passes.
    pub fn admits(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    /// All → first status → ... → last status → All
    #[must_use]
    pub fn next(self, statuses: &[S]) -> Self {
        match self {
            Self::All => statuses.first().map_or(Self::All, |s| Self::Only(*s)),
            Self::Only(current) => statuses
                .iter()
                .position(|s| *s == current)
                .and_then(|i| statuses.get(i + 1))
                .map_or(Self::All, |s| Self::Only(*s)),
        }
    }
}

/// Free-text query plus categorical filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<S> {
    pub query: String,
    pub category: CategoryFilter<S>,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<S: Copy + PartialEq> FilterState<S> {
    fn admits<T: Listable<Status = S>>(&self, item: &T, needle: &str) -> bool {
        self.category.admits(item.status())
            && (needle.is_empty() || item.search_text().to_lowercase().contains(needle))
    }
}

/// 过滤源列表
///
/// 保留条件：`query` 在 `search_text` 中大小写不敏感地出现，且类别为 `All`
/// 或与条目状态相等。结果保持源顺序，源列表不变。
pub fn apply_filter<'a, T: Listable>(source: &'a [T], filter: &FilterState<T::Status>) -> Vec<&'a T> {
    let needle = filter.query.to_lowercase();
    source
        .iter()
        .filter(|item| filter.admits(*item, &needle))
        .collect()
}

/// Source list, filter and selection of one list page.
#[derive(Debug, Clone)]
pub struct ListView<T: Listable> {
    source: Vec<T>,
    filter: FilterState<T::Status>,
    /// 可见条目在 `source` 中的下标
    visible: Vec<usize>,
    selected: usize,
}

impl<T: Listable> Default for ListView<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Listable> ListView<T> {
    pub fn new(source: Vec<T>) -> Self {
        let mut view = Self {
            source,
            filter: FilterState::default(),
            visible: Vec::new(),
            selected: 0,
        };
        view.recompute();
        view
    }

    fn recompute(&mut self) {
        let needle = self.filter.query.to_lowercase();
        self.visible = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.admits(*item, &needle))
            .map(|(i, _)| i)
            .collect();

        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    // ===== source =====

    /// Replace the source (fresh fetch); filter is kept.
    pub fn set_source(&mut self, source: Vec<T>) {
        self.source = source;
        self.selected = 0;
        self.recompute();
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Remove the entry with `id`; returns it when found.
    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let index = self.source.iter().position(|item| item.id() == id)?;
        let removed = self.source.remove(index);
        self.recompute();
        Some(removed)
    }

    /// Replace the entry with the same id; returns `false` when absent.
    pub fn replace(&mut self, item: T) -> bool {
        let Some(slot) = self.source.iter_mut().find(|s| s.id() == item.id()) else {
            return false;
        };
        *slot = item;
        self.recompute();
        true
    }

    /// Mutate the entry with `id` in place; returns `false` when absent.
    pub fn update_by_id(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        let Some(slot) = self.source.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        f(slot);
        self.recompute();
        true
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.source.iter().find(|item| item.id() == id)
    }

    // ===== filter =====

    pub fn filter(&self) -> &FilterState<T::Status> {
        &self.filter
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn category(&self) -> CategoryFilter<T::Status> {
        self.filter.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.recompute();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.filter.query.push(c);
        self.recompute();
    }

    pub fn pop_query_char(&mut self) {
        self.filter.query.pop();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter<T::Status>) {
        self.filter.category = category;
        self.recompute();
    }

    pub fn cycle_category(&mut self) {
        self.filter.category = self.filter.category.next(T::all_statuses());
        self.recompute();
    }

    // ===== derived view =====

    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().filter_map(|&i| self.source.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of source entries per status (ignores the filter).
    pub fn status_counts(&self) -> Vec<(T::Status, usize)> {
        T::all_statuses()
            .iter()
            .map(|&s| (s, self.source.iter().filter(|i| i.status() == s).count()))
            .collect()
    }

    // ===== selection =====

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.source.get(i))
    }

    pub fn select_next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1) % self.visible.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.visible.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.visible.len() - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        Dark,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        shade: Shade,
    }

    impl Listable for Row {
        type Status = Shade;

        fn id(&self) -> &str {
            self.id
        }

        fn search_text(&self) -> String {
            format!("{} {}", self.id, self.name)
        }

        fn status(&self) -> Shade {
            self.shade
        }

        fn all_statuses() -> &'static [Shade] {
            &[Shade::Light, Shade::Dark]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "r1", name: "Dune", shade: Shade::Dark },
            Row { id: "r2", name: "Emma", shade: Shade::Light },
            Row { id: "r3", name: "Dracula", shade: Shade::Dark },
            Row { id: "r4", name: "Persuasion", shade: Shade::Light },
        ]
    }

    fn ids<'a>(items: impl IntoIterator<Item = &'a Row>) -> Vec<&'static str> {
        items.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let source = rows();
        let filter = FilterState {
            query: "DR".into(),
            category: CategoryFilter::All,
        };
        assert_eq!(ids(apply_filter(&source, &filter)), vec!["r3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let source = rows();
        let filter = FilterState {
            query: "u".into(),
            category: CategoryFilter::Only(Shade::Dark),
        };
        let once: Vec<Row> = apply_filter(&source, &filter).into_iter().cloned().collect();
        let twice = apply_filter(&once, &filter);
        assert_eq!(ids(&once), ids(twice));
    }

    #[test]
    fn empty_query_keeps_category_subset_in_order() {
        let source = rows();
        let filter = FilterState {
            query: String::new(),
            category: CategoryFilter::Only(Shade::Light),
        };
        assert_eq!(ids(apply_filter(&source, &filter)), vec!["r2", "r4"]);
    }

    #[test]
    fn all_category_equals_text_subset() {
        let source = rows();
        let filter = FilterState {
            query: "r".into(),
            category: CategoryFilter::All,
        };
        let text_only: Vec<&Row> = source
            .iter()
            .filter(|r| r.search_text().to_lowercase().contains('r'))
            .collect();
        assert_eq!(apply_filter(&source, &filter), text_only);
    }

    #[test]
    fn source_is_not_mutated() {
        let source = rows();
        let filter = FilterState {
            query: "zzz".into(),
            category: CategoryFilter::All,
        };
        assert!(apply_filter(&source, &filter).is_empty());
        assert_eq!(source, rows());
    }

    #[test]
    fn view_recomputes_on_every_change() {
        let mut view = ListView::new(rows());
        assert_eq!(view.visible_len(), 4);

        view.push_query_char('d');
        assert_eq!(ids(view.visible()), vec!["r1", "r3"]);

        view.set_category(CategoryFilter::Only(Shade::Light));
        assert!(view.is_empty());

        view.pop_query_char();
        assert_eq!(ids(view.visible()), vec!["r2", "r4"]);

        view.remove_by_id("r2");
        assert_eq!(ids(view.visible()), vec!["r4"]);
        assert_eq!(view.source().len(), 3);
    }

    #[test]
    fn cycle_category_wraps_back_to_all() {
        let mut view = ListView::new(rows());
        view.cycle_category();
        assert_eq!(view.category(), CategoryFilter::Only(Shade::Light));
        view.cycle_category();
        assert_eq!(view.category(), CategoryFilter::Only(Shade::Dark));
        view.cycle_category();
        assert_eq!(view.category(), CategoryFilter::All);
    }

    #[test]
    fn selection_stays_in_range() {
        let mut view = ListView::new(rows());
        view.select_last();
        assert_eq!(view.selected_item().map(|r| r.id), Some("r4"));

        view.set_query("dune");
        assert_eq!(view.selected_index(), 0);
        assert_eq!(view.selected_item().map(|r| r.id), Some("r1"));

        view.set_query("nothing matches");
        assert!(view.selected_item().is_none());
    }

    #[test]
    fn selection_wraps() {
        let mut view = ListView::new(rows());
        view.select_prev();
        assert_eq!(view.selected_index(), 3);
        view.select_next();
        assert_eq!(view.selected_index(), 0);
    }

    #[test]
    fn status_change_moves_item_out_of_filter() {
        let mut view = ListView::new(rows());
        view.set_category(CategoryFilter::Only(Shade::Dark));
        assert!(view.update_by_id("r1", |r| r.shade = Shade::Light));
        assert_eq!(ids(view.visible()), vec!["r3"]);
        assert!(!view.update_by_id("missing", |r| r.shade = Shade::Light));
    }

    #[test]
    fn status_counts_cover_source() {
        let view = ListView::new(rows());
        assert_eq!(
            view.status_counts(),
            vec![(Shade::Light, 2), (Shade::Dark, 2)]
        );
    }
}
