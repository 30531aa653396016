use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Option value, also shown as the label
    #[prop(into)]
    value: String,
    /// Currently selected value of the group
    #[prop(into)]
    checked_value: Signal<Option<String>>,
    /// Change event handler
    on_change: Callback<String>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let value_for_check = value.clone();
    let value_for_change = value.clone();
    let is_checked =
        move || checked_value.with(|v| v.as_deref() == Some(value_for_check.as_str()));

    view! {
        <label class="rf-radio">
            <input
                type="radio"
                name=name
                value=value.clone()
                prop:checked=is_checked
                on:change=move |_| on_change.run(value_for_change.clone())
            />
            {value}
        </label>
    }
}

/// Radio group component - single selection out of `options`
#[component]
pub fn RadioGroup(
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Current selected value
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Options (value is the label)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Change event handler
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="rf-radio-group">
            {move || {
                let options = options.get();
                if options.is_empty() {
                    return view! { <div class="rf-muted">"No options"</div> }.into_any();
                }
                options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Radio
                                value=option
                                checked_value=value
                                on_change=on_change
                                name=name.clone()
                            />
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
