use crate::domain::a001_resource::taxonomy::compare_years;
use crate::shared::config::TaxonomyConfig;
use contracts::domain::a001_resource::{CategoryLevel, Item};
use leptos::prelude::*;

const EXCERPT_LIMIT: usize = 100;

/// Обрезает описание до 100 символов с многоточием
pub fn truncate_excerpt(excerpt: &str) -> String {
    if excerpt.chars().count() > EXCERPT_LIMIT {
        let cut: String = excerpt.chars().take(EXCERPT_LIMIT).collect();
        format!("{}...", cut)
    } else {
        excerpt.to_string()
    }
}

/// (label, comma-separated names) for each non-empty axis of the item
pub fn card_meta(item: &Item, taxonomy: &TaxonomyConfig) -> Vec<(String, String)> {
    let rows: Vec<(String, Vec<String>)> = match taxonomy {
        TaxonomyConfig::Hierarchical { .. } => {
            let mut years = item.level_names(CategoryLevel::Year);
            years.sort_by(|a, b| compare_years(a, b));
            vec![
                ("Make".to_string(), item.level_names(CategoryLevel::Make)),
                ("Model".to_string(), item.level_names(CategoryLevel::Model)),
                ("Year".to_string(), years),
            ]
        }
        TaxonomyConfig::Flat { axes } => axes
            .iter()
            .map(|axis| (axis.label.clone(), item.axis_names(&axis.key)))
            .collect(),
    };

    rows.into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(label, names)| (label, names.join(", ")))
        .collect()
}

#[component]
pub fn ResourceCard(item: Item, taxonomy: TaxonomyConfig) -> impl IntoView {
    let meta = card_meta(&item, &taxonomy);
    let excerpt = truncate_excerpt(&item.excerpt);
    let link = item.link.clone();

    view! {
        <article class="rf-card">
            {item.image.clone().map(|src| view! {
                <a class="rf-card-image" href=link.clone()>
                    <img src=src alt=item.title.clone() loading="lazy" />
                </a>
            })}
            <div class="rf-card-content">
                <h3 class="rf-card-title">
                    <a href=link.clone()>{item.title.clone()}</a>
                </h3>
                <div class="rf-card-excerpt">{excerpt}</div>
                <div class="rf-card-meta">
                    {meta
                        .into_iter()
                        .map(|(label, names)| view! { <span>{format!("{}: {}", label, names)}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
