//! Чтение и запись параметра поиска в адресной строке (без навигации)

use std::collections::HashMap;
use web_sys::window;

/// Parses a `?a=b&c=d` query string into a map. Invalid input yields an
/// empty map.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Значение параметра из текущего `location.search`
pub fn read_query_param(name: &str) -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
        .remove(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// URL с параметром поиска; при пустом термине параметр опускается
pub fn search_url(base: &str, param: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}={}", base, param, urlencoding::encode(term))
    }
}

/// Rewrites the address bar to reflect `term` via `history.replaceState`.
///
/// `base` defaults to the current path when no archive URL is configured.
pub fn replace_search_param(base: Option<&str>, param: &str, term: &str) {
    let Some(w) = window() else {
        return;
    };
    let base = match base {
        Some(b) => b.to_string(),
        None => w.location().pathname().unwrap_or_else(|_| "/".to_string()),
    };
    let new_url = search_url(&base, param, term);

    let current = format!(
        "{}{}",
        w.location().pathname().unwrap_or_default(),
        w.location().search().unwrap_or_default()
    );
    if current == new_url {
        return;
    }

    if let Ok(history) = w.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("replaceState failed: {:?}", e);
        }
    }
}
