use crate::shared::list_utils::{sort_list, Sortable};
use contracts::domain::a001_resource::Item;
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ключ сортировки списка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest first",
            SortKey::DateAsc => "Oldest first",
            SortKey::TitleAsc => "Title A–Z",
            SortKey::TitleDesc => "Title Z–A",
        }
    }

    /// Неизвестное значение: сортировка по умолчанию
    pub fn parse(raw: &str) -> Self {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == raw)
            .unwrap_or_default()
    }
}

/// Missing timestamps are equal to each other and go after present ones.
fn compare_timestamps(a: Option<i64>, b: Option<i64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if ascending {
                x.cmp(&y)
            } else {
                y.cmp(&x)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

thread_local! {
    /// Корневая (und) таблица сопоставления Unicode
    static TITLE_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::warn!("Title collator unavailable, falling back to lowercase order: {}", e);
                None
            }
        };
}

/// Locale-aware title order (root collation): accents and case are
/// secondary, so `Éclair` sorts between `apple` and `Zebra`.
/// Ties fall back to the raw strings.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

impl Sortable for Item {
    type Key = SortKey;

    fn compare_by_key(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::DateDesc => compare_timestamps(self.timestamp, other.timestamp, false),
            SortKey::DateAsc => compare_timestamps(self.timestamp, other.timestamp, true),
            SortKey::TitleAsc => compare_titles(&self.title, &other.title),
            SortKey::TitleDesc => compare_titles(&other.title, &self.title),
        }
    }
}

/// Новый упорядоченный список; вход не изменяется, равные сохраняют порядок
pub fn sort_items<'a>(items: &[&'a Item], key: SortKey) -> Vec<&'a Item> {
    sort_list(items, key)
}
