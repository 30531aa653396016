use super::card::ResourceCard;
use super::filters::CatalogFilters;
use crate::domain::a001_resource::api::fetch_resources;
use crate::domain::a001_resource::sort::SortKey;
use crate::domain::a001_resource::state::{
    count_text, heading_text, Action, CatalogController, CatalogView,
};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::config::CatalogConfig;
use crate::shared::debounce::{DebounceTimer, SEARCH_DEBOUNCE_MS};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::query_params::{read_query_param, replace_search_param};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Состояние начальной загрузки
#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub fn ResourceCatalog(config: CatalogConfig) -> impl IntoView {
    let initial_search = read_query_param(&config.search_param).unwrap_or_default();

    let controller = RwSignal::new(CatalogController::new(&config, initial_search.clone()));
    let phase = RwSignal::new(LoadPhase::Loading);
    let search_text = RwSignal::new(initial_search);
    let sidebar_open = RwSignal::new(false);
    let timer = StoredValue::new_local(DebounceTimer::new());

    on_cleanup(move || {
        let _ = timer.try_update_value(|t| t.cancel());
    });

    let view_model: Memo<CatalogView> = Memo::new(move |_| controller.with(|c| c.view().clone()));
    let selection = Memo::new(move |_| controller.with(|c| c.state().selection.clone()));
    let search_term = Memo::new(move |_| controller.with(|c| c.state().search_term.clone()));

    let dispatch = Callback::new(move |action: Action| {
        let _ = controller.try_update(|c| c.dispatch(action));
    });

    let sync_url = {
        let archive_url = config.archive_url.clone();
        let search_param = config.search_param.clone();
        Callback::new(move |term: String| {
            replace_search_param(archive_url.as_deref(), &search_param, &term)
        })
    };

    // Ввод: откладываем применение до паузы в наборе
    let on_search_input = Callback::new(move |term: String| {
        let Some(ticket) = controller.try_update(|c| c.arm_search(term)) else {
            return;
        };
        timer.update_value(|t| {
            t.arm(SEARCH_DEBOUNCE_MS, move || {
                let committed = controller
                    .try_update(|c| c.fire_search(ticket))
                    .unwrap_or(false);
                if committed {
                    sync_url.run(search_term.get_untracked());
                }
            })
        });
    });

    // Отправка формы: применяем сразу
    let on_search_submit = Callback::new(move |term: String| {
        timer.update_value(|t| t.cancel());
        dispatch.run(Action::SetSearch(term));
        sync_url.run(search_term.get_untracked());
    });

    let on_clear = Callback::new(move |_: ()| {
        timer.update_value(|t| t.cancel());
        search_text.set(String::new());
        dispatch.run(Action::ClearAll);
        sync_url.run(String::new());
    });

    let on_page_change = Callback::new(move |page: usize| dispatch.run(Action::GoToPage(page)));

    let on_sort_change =
        Callback::new(move |raw: String| dispatch.run(Action::SetSort(SortKey::parse(&raw))));

    {
        let config = config.clone();
        spawn_local(async move {
            match fetch_resources(&config).await {
                Ok(items) => {
                    let _ = controller.try_update(|c| c.install_snapshot(items));
                    phase.try_set(LoadPhase::Ready);
                }
                Err(e) => {
                    log::error!("Error fetching resources: {}", e);
                    phase.try_set(LoadPhase::Failed(e.to_string()));
                }
            }
        });
    }

    let sort_options: Vec<(String, String)> = SortKey::ALL
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect();
    let sort_value = Signal::derive(move || controller.with(|c| c.state().sort_key.as_str().to_string()));
    let active_filters_count = Signal::derive(move || selection.with(|s| s.active_count()));
    let page_links = Signal::derive(move || {
        if phase.get() == LoadPhase::Ready {
            view_model.with(|v| v.page_links.clone())
        } else {
            Vec::new()
        }
    });

    let taxonomy = config.taxonomy.clone();
    let card_taxonomy = config.taxonomy.clone();

    view! {
        <div class="rf-container">
            <div class="rf-head">
                <h3 class="rf-heading">{move || heading_text(&search_term.get())}</h3>
            </div>

            <div class="rf-grid">
                <FilterPanel
                    is_open=sidebar_open
                    active_filters_count=active_filters_count
                    on_clear=on_clear
                >
                    <SearchInput
                        text=search_text
                        on_input=on_search_input
                        on_submit=on_search_submit
                    />
                    <CatalogFilters
                        taxonomy=taxonomy
                        view_model=view_model
                        selection=selection
                        dispatch=dispatch
                    />
                </FilterPanel>

                <main class="rf-main">
                    <div class="rf-toolbar">
                        <div class="rf-count-wrapper">
                            <button
                                class="rf-filter-toggle"
                                aria-label="Toggle filters"
                                on:click=move |_| sidebar_open.set(true)
                            >
                                {icon("sliders")}
                            </button>
                            <span class="rf-count">
                                {move || match phase.get() {
                                    LoadPhase::Ready => count_text(
                                        view_model.with(|v| v.total_count),
                                        &search_term.get(),
                                    ),
                                    _ => String::new(),
                                }}
                            </span>
                        </div>
                        <Select
                            label="Sort by"
                            id="rf-sort"
                            value=sort_value
                            options=sort_options
                            on_change=on_sort_change
                        />
                    </div>

                    <div class="rf-results">
                        {move || match phase.get() {
                            LoadPhase::Loading => view! {
                                <div class="rf-muted">"Loading resources…"</div>
                            }.into_any(),
                            LoadPhase::Failed(_) => view! {
                                <div class="rf-muted">"Unable to load resources. Please try again later."</div>
                            }.into_any(),
                            LoadPhase::Ready => {
                                let items = view_model.with(|v| v.page_items.clone());
                                if items.is_empty() {
                                    view! {
                                        <div class="rf-muted">"No resources found matching your criteria."</div>
                                    }.into_any()
                                } else {
                                    items
                                        .into_iter()
                                        .map(|item| view! {
                                            <ResourceCard item=item taxonomy=card_taxonomy.clone() />
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </div>

                    <PaginationControls links=page_links on_page_change=on_page_change />
                </main>
            </div>
        </div>
    }
}
