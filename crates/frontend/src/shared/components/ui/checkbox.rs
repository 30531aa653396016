use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="rf-checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// Group of independent checkboxes (multi-select axis)
#[component]
pub fn CheckboxGroup(
    /// Options (value is the label)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Toggled value
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="rf-checkbox-group">
            {move || {
                let options = options.get();
                if options.is_empty() {
                    return view! { <div class="rf-muted">"No options"</div> }.into_any();
                }
                options
                    .into_iter()
                    .map(|option| {
                        let for_check = option.clone();
                        let for_toggle = option.clone();
                        view! {
                            <Checkbox
                                label=option
                                checked=Signal::derive(move || {
                                    selected.with(|s| s.contains(&for_check))
                                })
                                on_change=Callback::new(move |_checked: bool| {
                                    on_toggle.run(for_toggle.clone())
                                })
                            />
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
