use crate::domain::a001_resource::filter::Selection;
use crate::domain::a001_resource::state::{Action, CatalogView};
use crate::shared::components::filter_panel::FilterGroup;
use crate::shared::components::ui::{CheckboxGroup, RadioGroup};
use crate::shared::config::TaxonomyConfig;
use contracts::domain::a001_resource::CategoryLevel;
use leptos::prelude::*;

/// Группы фильтров для текущего режима таксономии
#[component]
pub fn CatalogFilters(
    taxonomy: TaxonomyConfig,
    /// Current projection (option lists)
    #[prop(into)]
    view_model: Signal<CatalogView>,
    /// Current selection
    #[prop(into)]
    selection: Signal<Selection>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let groups = match &taxonomy {
        TaxonomyConfig::Hierarchical { .. } => CategoryLevel::ALL
            .into_iter()
            .map(|level| {
                let options = Signal::derive(move || {
                    view_model.with(|v| v.options.level(level).to_vec())
                });
                let value = Signal::derive(move || match selection.get() {
                    Selection::Hierarchical(s) => s.get(level).map(str::to_string),
                    Selection::Flat(_) => None,
                });
                view! {
                    <FilterGroup title=taxonomy.level_label(level) open=true>
                        <RadioGroup
                            name=level.as_str()
                            value=value
                            options=options
                            on_change=Callback::new(move |v: String| {
                                dispatch.run(Action::SelectLevel(level, v))
                            })
                        />
                    </FilterGroup>
                }
                .into_any()
            })
            .collect::<Vec<_>>(),
        TaxonomyConfig::Flat { axes } => axes
            .iter()
            .map(|axis| {
                let key = axis.key.clone();
                let options = {
                    let key = key.clone();
                    Signal::derive(move || view_model.with(|v| v.options.axis(&key).to_vec()))
                };
                let selected = {
                    let key = key.clone();
                    Signal::derive(move || match selection.get() {
                        Selection::Flat(s) => s
                            .values(&key)
                            .map(|values| values.iter().cloned().collect())
                            .unwrap_or_default(),
                        Selection::Hierarchical(_) => Vec::new(),
                    })
                };
                view! {
                    <FilterGroup title=axis.label.clone() open=true>
                        <CheckboxGroup
                            options=options
                            selected=selected
                            on_toggle=Callback::new(move |value: String| {
                                dispatch.run(Action::ToggleAxisValue {
                                    axis: key.clone(),
                                    value,
                                })
                            })
                        />
                    </FilterGroup>
                }
                .into_any()
            })
            .collect::<Vec<_>>(),
    };

    view! { <div class="rf-filter-container">{groups}</div> }
}
