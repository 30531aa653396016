use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - sidebar with the filter groups
///
/// On narrow screens the panel slides in over a backdrop (`is_open`).
#[component]
pub fn FilterPanel(
    /// Whether the off-canvas panel is shown (mobile)
    is_open: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Clear filters button
    on_clear: Callback<()>,

    /// Filter content (search form + groups)
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || if is_open.get() { "rf-backdrop active" } else { "rf-backdrop" }
            on:click=move |_| is_open.set(false)
        ></div>
        <aside class=move || if is_open.get() { "rf-sidebar open" } else { "rf-sidebar" }>
            <h4 class="rf-sidebar-heading">
                <span>
                    {icon("filter")}
                    "Filter by"
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </span>
                <button type="button" on:click=move |_| on_clear.run(())>
                    "Clear filters"
                </button>
            </h4>
            {children()}
        </aside>
    }
}

/// FilterGroup component - one collapsible taxonomy axis
#[component]
pub fn FilterGroup(
    /// Group title (axis label)
    #[prop(into)]
    title: String,

    /// Initially expanded
    #[prop(optional)]
    open: bool,

    children: Children,
) -> impl IntoView {
    let is_expanded = RwSignal::new(open);

    view! {
        <div class=move || if is_expanded.get() { "rf-fgroup open" } else { "rf-fgroup" }>
            <div class="rf-fhead" on:click=move |_| is_expanded.update(|e| *e = !*e)>
                <span>{title}</span>
                <span class="rf-fhead-icon">{icon("chevron-down")}</span>
            </div>
            <div class="rf-fbody">
                {children()}
            </div>
        </div>
    }
}
