pub mod api_utils;
pub mod components;
pub mod config;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod query_params;
