//! Per-region catalog configuration.
//!
//! Each mounted region carries its settings as JSON in a `data-config`
//! attribute. Missing keys fall back to the embedded defaults.

use contracts::domain::a001_resource::{CategoryLevel, TagLayout};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "/wp-json/wp/v2/resource";
pub const DEFAULT_FETCH_LIMIT: usize = 100;
pub const DEFAULT_PER_PAGE: usize = 12;
pub const DEFAULT_SEARCH_PARAM: &str = "c";

/// Не больше трёх осей в плоском режиме
pub const MAX_FLAT_AXES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub fetch_limit: usize,
    pub per_page: usize,
    pub search_param: String,
    pub archive_url: Option<String>,
    pub taxonomy: TaxonomyConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            per_page: DEFAULT_PER_PAGE,
            search_param: DEFAULT_SEARCH_PARAM.to_string(),
            archive_url: None,
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TaxonomyConfig {
    Hierarchical {
        #[serde(default = "default_level_labels")]
        labels: [String; 3],
    },
    Flat {
        axes: Vec<AxisConfig>,
    },
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        TaxonomyConfig::Hierarchical {
            labels: default_level_labels(),
        }
    }
}

fn default_level_labels() -> [String; 3] {
    [
        "Car Make".to_string(),
        "Car Model".to_string(),
        "Year of Make".to_string(),
    ]
}

impl TaxonomyConfig {
    pub fn layout(&self) -> TagLayout {
        match self {
            TaxonomyConfig::Hierarchical { .. } => TagLayout::Hierarchical,
            TaxonomyConfig::Flat { axes } => {
                TagLayout::Flat(axes.iter().map(|a| a.key.clone()).collect())
            }
        }
    }

    pub fn level_label(&self, level: CategoryLevel) -> String {
        match self {
            TaxonomyConfig::Hierarchical { labels } => labels[level.position()].clone(),
            TaxonomyConfig::Flat { .. } => level.as_str().to_string(),
        }
    }

    pub fn axes(&self) -> &[AxisConfig] {
        match self {
            TaxonomyConfig::Flat { axes } => axes,
            TaxonomyConfig::Hierarchical { .. } => &[],
        }
    }
}

impl CatalogConfig {
    /// Разбирает JSON из `data-config`; при ошибке: значения по умолчанию
    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<CatalogConfig>(raw) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Invalid catalog config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Reads `data-config` from the region element.
    pub fn from_element(element: &web_sys::Element) -> Self {
        element
            .get_attribute("data-config")
            .map(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }

    fn sanitized(mut self) -> Self {
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        if self.fetch_limit == 0 {
            self.fetch_limit = DEFAULT_FETCH_LIMIT;
        }
        if self.endpoint.trim().is_empty() {
            self.endpoint = DEFAULT_ENDPOINT.to_string();
        }
        if self.search_param.trim().is_empty() {
            self.search_param = DEFAULT_SEARCH_PARAM.to_string();
        }
        self.archive_url = self.archive_url.filter(|u| !u.trim().is_empty());
        if let TaxonomyConfig::Flat { axes } = &mut self.taxonomy {
            let mut seen = std::collections::HashSet::new();
            axes.retain(|a| !a.key.trim().is_empty() && seen.insert(a.key.clone()));
            axes.truncate(MAX_FLAT_AXES);
        }
        self
    }
}
