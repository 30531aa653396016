use crate::shared::api_utils::api_url;
use crate::shared::config::CatalogConfig;
use contracts::domain::a001_resource::{Item, ListingRecord, TagLayout};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки загрузки каталога
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// URL единственного запроса списка
pub fn listing_url(config: &CatalogConfig) -> String {
    api_url(
        &config.endpoint,
        &[("per_page", config.fetch_limit.to_string())],
    )
}

/// Нормализует записи по одной; запись, которую не удалось разобрать,
/// пропускается с предупреждением.
pub fn normalize_records(records: Vec<serde_json::Value>, layout: &TagLayout) -> Vec<Item> {
    let total = records.len();
    let items: Vec<Item> = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<ListingRecord>(value) {
            Ok(record) => Some(record.into_item(layout)),
            Err(e) => {
                log::warn!("Skipping record {}: {}", idx, e);
                None
            }
        })
        .collect();
    log::info!("Normalized {} resources out of {}", items.len(), total);
    items
}

/// Загружает снимок каталога: ровно один запрос, без повторов
pub async fn fetch_resources(config: &CatalogConfig) -> Result<Vec<Item>, LoadError> {
    let url = listing_url(config);
    log::info!("Loading resources with URL: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let records: Vec<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    Ok(normalize_records(records, &config.taxonomy.layout()))
}
