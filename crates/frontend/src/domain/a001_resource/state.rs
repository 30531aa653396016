//! View Controller: owns `ViewState` and re-runs
//! Filter → Sort → Paginate after every transition.

use super::filter::{self, AxisSelection, CategorySelection, Selection};
use super::pagination::{page_links, paginate, PageLink};
use super::sort::{sort_items, SortKey};
use super::taxonomy::{AxisIndex, CategoryIndex, FilterOptionIndex};
use crate::shared::config::{CatalogConfig, TaxonomyConfig};
use contracts::domain::a001_resource::{CategoryLevel, Item};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// 1-based
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub sort_key: SortKey,
    pub search_term: String,
    pub selection: Selection,
}

impl ViewState {
    pub fn new(config: &CatalogConfig, search_term: String) -> Self {
        let selection = match config.taxonomy {
            TaxonomyConfig::Hierarchical { .. } => {
                Selection::Hierarchical(CategorySelection::default())
            }
            TaxonomyConfig::Flat { .. } => Selection::Flat(AxisSelection::default()),
        };
        Self {
            page: 1,
            per_page: config.per_page.max(1),
            total_pages: 1,
            sort_key: SortKey::default(),
            search_term,
            selection,
        }
    }
}

/// Пользовательские действия
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Hierarchical single-select; lower levels are cleared
    SelectLevel(CategoryLevel, String),
    /// Flat multi-select
    ToggleAxisValue { axis: String, value: String },
    /// Committed (already debounced) search term
    SetSearch(String),
    SetSort(SortKey),
    GoToPage(usize),
    ClearAll,
}

/// Списки опций для текущего выбора
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOptions {
    Hierarchical {
        makes: Vec<String>,
        models: Vec<String>,
        years: Vec<String>,
    },
    /// (axis key, values) in configured order
    Flat(Vec<(String, Vec<String>)>),
}

impl FilterOptions {
    pub fn level(&self, level: CategoryLevel) -> &[String] {
        match self {
            FilterOptions::Hierarchical { makes, models, years } => match level {
                CategoryLevel::Make => makes,
                CategoryLevel::Model => models,
                CategoryLevel::Year => years,
            },
            FilterOptions::Flat(_) => &[],
        }
    }

    pub fn axis(&self, axis: &str) -> &[String] {
        match self {
            FilterOptions::Flat(axes) => axes
                .iter()
                .find(|(key, _)| key == axis)
                .map(|(_, values)| values.as_slice())
                .unwrap_or(&[]),
            FilterOptions::Hierarchical { .. } => &[],
        }
    }
}

/// Результат одного прогона конвейера
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    pub page_items: Vec<Item>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_links: Vec<PageLink>,
    pub options: FilterOptions,
}

pub fn heading_text(search_term: &str) -> String {
    let term = search_term.trim();
    if term.is_empty() {
        "Browse All Resources".to_string()
    } else {
        format!("Search results for \"{}\"", term)
    }
}

pub fn count_text(total: usize, search_term: &str) -> String {
    let term = search_term.trim();
    if term.is_empty() {
        format!("{} resource{}", total, if total == 1 { "" } else { "s" })
    } else {
        format!(
            "{} result{} for \"{}\"",
            total,
            if total == 1 { "" } else { "s" },
            term
        )
    }
}

/// Controller of one mounted catalog region.
///
/// The snapshot and the option index are fixed after [`Self::install_snapshot`];
/// only `state` changes, and only through [`Self::dispatch`].
#[derive(Clone, Debug)]
pub struct CatalogController {
    items: Vec<Item>,
    index: FilterOptionIndex,
    axes: Vec<String>,
    state: ViewState,
    view: CatalogView,
    search_generation: u64,
    pending_search: Option<String>,
}

impl CatalogController {
    pub fn new(config: &CatalogConfig, initial_search: String) -> Self {
        let axes: Vec<String> = config.taxonomy.axes().iter().map(|a| a.key.clone()).collect();
        let index = match config.taxonomy {
            TaxonomyConfig::Hierarchical { .. } => {
                FilterOptionIndex::Hierarchical(CategoryIndex::default())
            }
            TaxonomyConfig::Flat { .. } => FilterOptionIndex::Flat(AxisIndex::default()),
        };
        let mut controller = Self {
            items: Vec::new(),
            index,
            axes,
            state: ViewState::new(config, initial_search.trim().to_string()),
            view: CatalogView {
                page_items: Vec::new(),
                total_count: 0,
                total_pages: 1,
                page: 1,
                page_links: Vec::new(),
                options: FilterOptions::Flat(Vec::new()),
            },
            search_generation: 0,
            pending_search: None,
        };
        controller.refresh();
        controller
    }

    /// Принимает загруженный снимок и строит индекс опций (один раз)
    pub fn install_snapshot(&mut self, items: Vec<Item>) {
        self.index = match self.index {
            FilterOptionIndex::Hierarchical(_) => {
                FilterOptionIndex::Hierarchical(CategoryIndex::build(&items))
            }
            FilterOptionIndex::Flat(_) => FilterOptionIndex::Flat(AxisIndex::build(&items, &self.axes)),
        };
        self.items = items;
        log::debug!("catalog snapshot installed: {} items", self.items.len());
        self.refresh();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("catalog action: {:?}", action);
        match action {
            Action::SelectLevel(level, value) => match &mut self.state.selection {
                Selection::Hierarchical(selection) => {
                    selection.select(level, value);
                    self.state.page = 1;
                }
                Selection::Flat(_) => {
                    log::warn!("level selection ignored in flat mode");
                    return;
                }
            },
            Action::ToggleAxisValue { axis, value } => match &mut self.state.selection {
                Selection::Flat(selection) => {
                    selection.toggle(&axis, &value);
                    self.state.page = 1;
                }
                Selection::Hierarchical(_) => {
                    log::warn!("axis toggle ignored in hierarchical mode");
                    return;
                }
            },
            Action::SetSearch(term) => {
                self.cancel_search();
                self.state.search_term = term.trim().to_string();
                self.state.page = 1;
            }
            Action::SetSort(key) => {
                self.state.sort_key = key;
                self.state.page = 1;
            }
            Action::GoToPage(page) => {
                self.state.page = page.clamp(1, self.state.total_pages.max(1));
            }
            Action::ClearAll => {
                self.cancel_search();
                self.state.selection = self.state.selection.cleared();
                self.state.search_term.clear();
                self.state.sort_key = SortKey::default();
                self.state.page = 1;
            }
        }
        self.refresh();
    }

    /// Откладывает поиск: предыдущий отложенный термин отменяется.
    /// Возвращает номер, который нужно передать в [`Self::fire_search`].
    pub fn arm_search(&mut self, term: String) -> u64 {
        self.search_generation += 1;
        self.pending_search = Some(term);
        self.search_generation
    }

    /// Commits the pending term if `ticket` is still the latest one.
    /// Returns whether a commit happened.
    pub fn fire_search(&mut self, ticket: u64) -> bool {
        if ticket != self.search_generation {
            return false;
        }
        match self.pending_search.take() {
            Some(term) => {
                self.dispatch(Action::SetSearch(term));
                true
            }
            None => false,
        }
    }

    pub fn cancel_search(&mut self) {
        self.pending_search = None;
        self.search_generation += 1;
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn options(&self) -> FilterOptions {
        match (&self.index, &self.state.selection) {
            (FilterOptionIndex::Hierarchical(index), Selection::Hierarchical(selection)) => {
                FilterOptions::Hierarchical {
                    makes: index.makes().to_vec(),
                    models: index.model_options_for(selection.make.as_deref()),
                    years: index.year_options_for(selection.model.as_deref()),
                }
            }
            (FilterOptionIndex::Flat(index), _) => FilterOptions::Flat(
                self.axes
                    .iter()
                    .map(|axis| (axis.clone(), index.values(axis).to_vec()))
                    .collect(),
            ),
            (FilterOptionIndex::Hierarchical(index), Selection::Flat(_)) => {
                FilterOptions::Hierarchical {
                    makes: index.makes().to_vec(),
                    models: index.model_options_for(None),
                    years: index.year_options_for(None),
                }
            }
        }
    }

    fn refresh(&mut self) {
        let matched = filter::apply(&self.items, &self.state.selection, &self.state.search_term);
        let sorted = sort_items(&matched, self.state.sort_key);
        let page = paginate(&sorted, self.state.page, self.state.per_page);

        self.state.page = page.page;
        self.state.total_pages = page.total_pages;

        self.view = CatalogView {
            page_items: page.items.into_iter().cloned().collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            page: page.page,
            page_links: page_links(page.page, page.total_pages),
            options: self.options(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_resource::test_support::{dated, flat_item, item};
    use crate::shared::config::AxisConfig;

    fn ids(view: &CatalogView) -> Vec<i64> {
        view.page_items.iter().map(|i| i.id).collect()
    }

    fn controller_with(items: Vec<Item>) -> CatalogController {
        let mut c = CatalogController::new(&CatalogConfig::default(), String::new());
        c.install_snapshot(items);
        c
    }

    /// 25 items, item N dated N days into 2024
    fn twenty_five() -> Vec<Item> {
        (1..=25)
            .map(|n| {
                dated(
                    item(n, &format!("Item {:02}", n), &[&["Toyota", "Corolla", "2020"]]),
                    &format!("2024-01-{:02}T12:00:00", n),
                )
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let c = CatalogController::new(&CatalogConfig::default(), "  brake ".into());
        assert_eq!(c.state().page, 1);
        assert_eq!(c.state().sort_key, SortKey::DateDesc);
        assert_eq!(c.state().search_term, "brake");
        assert!(c.state().selection.is_empty());
        assert_eq!(c.view().total_pages, 1);
        assert!(c.view().page_items.is_empty());
    }

    #[test]
    fn test_first_page_newest_first_and_clamp() {
        let mut c = controller_with(twenty_five());
        assert_eq!(c.view().total_pages, 3);
        assert_eq!(c.view().total_count, 25);
        assert_eq!(ids(c.view()), (14..=25).rev().collect::<Vec<_>>());

        c.dispatch(Action::GoToPage(5));
        assert_eq!(c.state().page, 3);
        assert_eq!(ids(c.view()), vec![1]);

        c.dispatch(Action::GoToPage(0));
        assert_eq!(c.state().page, 1);
    }

    #[test]
    fn test_transitions_reset_page() {
        let mut c = controller_with(twenty_five());
        c.dispatch(Action::GoToPage(2));
        c.dispatch(Action::SetSort(SortKey::TitleAsc));
        assert_eq!(c.state().page, 1);
        assert_eq!(ids(c.view())[0], 1);

        c.dispatch(Action::GoToPage(3));
        c.dispatch(Action::SelectLevel(CategoryLevel::Make, "Toyota".into()));
        assert_eq!(c.state().page, 1);

        c.dispatch(Action::GoToPage(2));
        c.dispatch(Action::SetSearch("item".into()));
        assert_eq!(c.state().page, 1);
        assert_eq!(c.view().total_count, 25);
    }

    #[test]
    fn test_go_to_page_keeps_other_state() {
        let mut c = controller_with(twenty_five());
        c.dispatch(Action::SetSort(SortKey::DateAsc));
        c.dispatch(Action::GoToPage(2));
        assert_eq!(c.state().sort_key, SortKey::DateAsc);
        assert_eq!(ids(c.view()), (13..=24).collect::<Vec<_>>());
    }

    #[test]
    fn test_cascading_options() {
        let mut c = controller_with(vec![
            item(1, "A", &[&["Toyota", "Corolla", "2020"], &["Toyota", "Camry", "2018"]]),
            item(2, "B", &[&["Honda", "Civic", "2021"]]),
        ]);

        c.dispatch(Action::SelectLevel(CategoryLevel::Make, "Toyota".into()));
        assert_eq!(c.view().options.level(CategoryLevel::Model), &["Camry", "Corolla"]);
        assert_eq!(
            c.view().options.level(CategoryLevel::Year),
            &["2021", "2020", "2018"]
        );

        c.dispatch(Action::SelectLevel(CategoryLevel::Model, "Camry".into()));
        assert_eq!(c.view().options.level(CategoryLevel::Year), &["2018"]);
        c.dispatch(Action::SelectLevel(CategoryLevel::Year, "2018".into()));
        assert_eq!(ids(c.view()), vec![1]);

        // смена марки сбрасывает модель и год
        c.dispatch(Action::SelectLevel(CategoryLevel::Make, "Honda".into()));
        match &c.state().selection {
            Selection::Hierarchical(s) => {
                assert_eq!(s.model, None);
                assert_eq!(s.year, None);
            }
            other => panic!("unexpected selection {:?}", other),
        }
        assert_eq!(c.view().options.level(CategoryLevel::Model), &["Civic"]);
        assert_eq!(ids(c.view()), vec![2]);
    }

    #[test]
    fn test_clear_all_restores_everything() {
        let items = twenty_five()
            .into_iter()
            .chain([dated(item(26, "Civic pads", &[&["Honda", "Civic", "2021"]]), "2023-05-01")])
            .collect::<Vec<_>>();
        let mut fresh = controller_with(items.clone());
        let mut c = controller_with(items);

        c.dispatch(Action::SelectLevel(CategoryLevel::Make, "Honda".into()));
        c.dispatch(Action::SelectLevel(CategoryLevel::Model, "Civic".into()));
        c.dispatch(Action::SetSearch("pads".into()));
        c.dispatch(Action::SetSort(SortKey::TitleDesc));
        c.arm_search("pending".into());
        assert_eq!(c.view().total_count, 1);

        c.dispatch(Action::ClearAll);
        assert_eq!(c.state().page, 1);
        assert_eq!(c.state().search_term, "");
        assert_eq!(c.state().sort_key, SortKey::DateDesc);
        assert!(c.state().selection.is_empty());
        assert!(!c.has_pending_search());

        fresh.dispatch(Action::GoToPage(1));
        assert_eq!(c.view(), fresh.view());
        assert_eq!(
            c.view().options.level(CategoryLevel::Model),
            &["Civic", "Corolla"]
        );
    }

    #[test]
    fn test_debounced_search_commits_latest_only() {
        let mut c = controller_with(vec![
            item(1, "Alpine A1", &[]),
            item(2, "Brake kit", &[]),
        ]);

        let first = c.arm_search("alp".into());
        let second = c.arm_search("brake".into());
        assert!(!c.fire_search(first));
        assert_eq!(c.state().search_term, "");

        assert!(c.fire_search(second));
        assert_eq!(c.state().search_term, "brake");
        assert_eq!(ids(c.view()), vec![2]);

        // повторный вызов ничего не делает
        assert!(!c.fire_search(second));
    }

    #[test]
    fn test_cancelled_search_never_fires() {
        let mut c = controller_with(vec![item(1, "Alpine", &[])]);
        let ticket = c.arm_search("zzz".into());
        c.cancel_search();
        assert!(!c.fire_search(ticket));
        assert_eq!(c.view().total_count, 1);
    }

    #[test]
    fn test_flat_mode_toggles() {
        let config = CatalogConfig {
            taxonomy: TaxonomyConfig::Flat {
                axes: vec![
                    AxisConfig { key: "year".into(), label: "Year".into() },
                    AxisConfig { key: "model".into(), label: "Model".into() },
                ],
            },
            ..CatalogConfig::default()
        };
        let mut c = CatalogController::new(&config, String::new());
        c.install_snapshot(vec![
            flat_item(1, "A", &[("year", &["2020"]), ("model", &["Civic"])]),
            flat_item(2, "B", &[("year", &["2019"])]),
        ]);

        assert_eq!(c.view().options.axis("year"), &["2019", "2020"]);
        assert_eq!(c.view().options.axis("model"), &["Civic"]);

        c.dispatch(Action::ToggleAxisValue { axis: "year".into(), value: "2019".into() });
        assert_eq!(ids(c.view()), vec![2]);
        c.dispatch(Action::ToggleAxisValue { axis: "year".into(), value: "2020".into() });
        assert_eq!(c.view().total_count, 2);

        // иерархический выбор в плоском режиме игнорируется
        c.dispatch(Action::SelectLevel(CategoryLevel::Make, "Toyota".into()));
        assert_eq!(c.view().total_count, 2);

        // опции не сужаются
        assert_eq!(c.view().options.axis("year"), &["2019", "2020"]);
    }

    #[test]
    fn test_texts() {
        assert_eq!(heading_text(""), "Browse All Resources");
        assert_eq!(heading_text("alpine"), "Search results for \"alpine\"");
        assert_eq!(count_text(1, ""), "1 resource");
        assert_eq!(count_text(0, ""), "0 resources");
        assert_eq!(count_text(1, "alpine"), "1 result for \"alpine\"");
        assert_eq!(count_text(3, "alpine"), "3 results for \"alpine\"");
    }
}
