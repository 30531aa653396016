use crate::domain::a001_resource::ui::list::ResourceCatalog;
use crate::shared::config::CatalogConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Корневой элемент региона каталога
pub const REGION_SELECTOR: &str = ".rf-wrap";

/// Mounts an independent catalog into every region on the page.
///
/// Each region reads its own `data-config`; without any region the catalog
/// is mounted into `<body>` with the default settings.
pub fn mount_catalogs() {
    let regions = find_regions();
    if regions.is_empty() {
        log::info!("No {} regions found, mounting into body", REGION_SELECTOR);
        leptos::mount::mount_to_body(|| {
            view! {
                <div class="rf-wrap">
                    <ResourceCatalog config=CatalogConfig::default() />
                </div>
            }
        });
        return;
    }

    log::info!("Mounting {} catalog region(s)", regions.len());
    for region in regions {
        let config = CatalogConfig::from_element(&region);
        leptos::mount::mount_to(region, move || view! { <ResourceCatalog config=config /> })
            .forget();
    }
}

fn find_regions() -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(REGION_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}
