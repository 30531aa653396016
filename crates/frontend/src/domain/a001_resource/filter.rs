use crate::shared::list_utils::{filter_list, Searchable};
use contracts::domain::a001_resource::{CategoryLevel, CategoryPath, Item};
use std::collections::{BTreeMap, BTreeSet};

impl Searchable for Item {
    /// Title, excerpt or any tag name contains the needle (case-insensitive)
    fn matches_filter(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self
                .tag_names
                .iter()
                .any(|name| name.to_lowercase().contains(needle))
    }
}

// ============================================================================
// Selections
// ============================================================================

/// Одиночный выбор на каждом уровне (иерархический режим)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
}

impl CategorySelection {
    pub fn get(&self, level: CategoryLevel) -> Option<&str> {
        match level {
            CategoryLevel::Make => self.make.as_deref(),
            CategoryLevel::Model => self.model.as_deref(),
            CategoryLevel::Year => self.year.as_deref(),
        }
    }

    /// Выбор уровня сбрасывает все уровни ниже него
    pub fn select(&mut self, level: CategoryLevel, value: String) {
        let value = Some(value).filter(|v| !v.is_empty());
        match level {
            CategoryLevel::Make => {
                self.make = value;
                self.model = None;
                self.year = None;
            }
            CategoryLevel::Model => {
                self.model = value;
                self.year = None;
            }
            CategoryLevel::Year => {
                self.year = value;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none() && self.year.is_none()
    }

    pub fn active_count(&self) -> usize {
        CategoryLevel::ALL
            .iter()
            .filter(|l| self.get(**l).is_some())
            .count()
    }

    /// Complete path whose node on each selected level equals the selection
    pub fn matches_path(&self, path: &CategoryPath) -> bool {
        path.is_complete()
            && CategoryLevel::ALL.iter().all(|level| match self.get(*level) {
                None => true,
                Some(selected) => path.name(*level) == Some(selected),
            })
    }
}

/// Множественный выбор по независимым осям (плоский режим)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSelection {
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl AxisSelection {
    /// Добавляет значение или убирает его, если оно уже выбрано
    pub fn toggle(&mut self, axis: &str, value: &str) {
        let values = self.selected.entry(axis.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.selected.remove(axis);
        }
    }

    pub fn values(&self, axis: &str) -> Option<&BTreeSet<String>> {
        self.selected.get(axis)
    }

    pub fn contains(&self, axis: &str, value: &str) -> bool {
        self.values(axis).is_some_and(|v| v.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.values().all(BTreeSet::is_empty)
    }

    pub fn active_count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    /// AND across axes, OR within one axis
    pub fn matches(&self, item: &Item) -> bool {
        self.selected.iter().all(|(axis, wanted)| {
            wanted.is_empty()
                || item
                    .tags
                    .axis(axis)
                    .iter()
                    .any(|node| wanted.contains(&node.name))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Hierarchical(CategorySelection),
    Flat(AxisSelection),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Hierarchical(s) => s.is_empty(),
            Selection::Flat(s) => s.is_empty(),
        }
    }

    pub fn active_count(&self) -> usize {
        match self {
            Selection::Hierarchical(s) => s.active_count(),
            Selection::Flat(s) => s.active_count(),
        }
    }

    /// Пустой выбор того же режима
    pub fn cleared(&self) -> Self {
        match self {
            Selection::Hierarchical(_) => Selection::Hierarchical(CategorySelection::default()),
            Selection::Flat(_) => Selection::Flat(AxisSelection::default()),
        }
    }

    /// Category predicate; vacuously true without any selection
    pub fn matches(&self, item: &Item) -> bool {
        if self.is_empty() {
            return true;
        }
        match self {
            Selection::Hierarchical(s) => item.tags.paths().iter().any(|p| s.matches_path(p)),
            Selection::Flat(s) => s.matches(item),
        }
    }
}

// ============================================================================
// Filter Engine
// ============================================================================

/// Элементы, прошедшие поиск и все фильтры. Порядок входа сохраняется.
pub fn apply<'a>(items: &'a [Item], selection: &Selection, search_term: &str) -> Vec<&'a Item> {
    let all: Vec<&Item> = items.iter().collect();
    let mut matched = filter_list(&all, search_term);
    matched.retain(|item| selection.matches(item));
    matched
}
