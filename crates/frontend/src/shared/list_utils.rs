/// Универсальные утилиты для работы со списками (поиск, сортировка, поле поиска)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет вхождение подстроки; `needle` уже приведён к нижнему регистру
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    type Key: Copy;

    /// Сравнивает два объекта по ключу сортировки
    fn compare_by_key(&self, other: &Self, key: Self::Key) -> Ordering;
}

/// Нормализует поисковый запрос: обрезка пробелов и нижний регистр.
/// Пустой запрос: `None` (фильтр не активен).
pub fn normalize_filter(filter: &str) -> Option<String> {
    let trimmed = filter.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Фильтрует список по поисковому запросу, порядок сохраняется
pub fn filter_list<'a, T: Searchable>(items: &[&'a T], filter: &str) -> Vec<&'a T> {
    match normalize_filter(filter) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .copied()
            .filter(|item| item.matches_filter(&needle))
            .collect(),
    }
}

/// Возвращает новый отсортированный список; исходный не меняется.
/// Сортировка стабильная.
pub fn sort_list<'a, T: Sortable>(items: &[&'a T], key: T::Key) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.compare_by_key(b, key));
    sorted
}

/// Поле поиска с кнопкой очистки. Отправка формы передаёт текущий текст сразу.
#[component]
pub fn SearchInput(
    /// Текст в поле (владелец, родитель, чтобы его можно было сбросить)
    text: RwSignal<String>,
    /// Каждое изменение текста
    #[prop(into)]
    on_input: Callback<String>,
    /// Enter / кнопка поиска
    #[prop(into)]
    on_submit: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search resources...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        text.set(String::new());
        on_submit.run(String::new());
    };

    view! {
        <form
            class="rf-searchbar"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(text.get_untracked());
            }
        >
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    text.set(val.clone());
                    on_input.run(val);
                }
            />
            {move || if !text.get().is_empty() {
                view! {
                    <button type="button" class="rf-search-clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
            <button type="submit" class="rf-search-submit" title="Search">
                {crate::shared::icons::icon("search")}
            </button>
        </form>
    }
}
