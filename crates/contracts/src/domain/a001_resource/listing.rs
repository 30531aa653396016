//! Wire shape of the listing endpoint and its one-time normalization
//! into [`Item`].

use super::aggregate::{CategoryPath, Item, ItemTags, TagNode, CATEGORY_DEPTH};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{ "rendered": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedText {
    #[serde(default)]
    pub rendered: Option<String>,
}

/// Одна запись списка в том виде, в каком её отдаёт сервер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: i64,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub title: Option<RenderedText>,

    #[serde(default)]
    pub excerpt_plain: Option<String>,

    #[serde(default)]
    pub featured_image_url: Option<String>,

    /// Root-to-leaf category chains (hierarchical taxonomy)
    #[serde(default)]
    pub resource_categories: Option<Vec<Vec<TagNode>>>,

    /// Flattened names of every attached term
    #[serde(default)]
    pub all_category_names: Option<Vec<String>>,

    /// axis key → terms (flat taxonomies)
    #[serde(default)]
    pub taxonomy_terms: Option<BTreeMap<String, Vec<TagNode>>>,
}

/// Как раскладывать теги записи
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLayout {
    Hierarchical,
    /// Axis keys in display order
    Flat(Vec<String>),
}

impl ListingRecord {
    /// Нормализует запись: отсутствующие поля заменяются пустыми значениями
    pub fn into_item(self, layout: &TagLayout) -> Item {
        let title = self
            .title
            .and_then(|t| t.rendered)
            .map(|t| decode_entities(&t).trim().to_string())
            .unwrap_or_default();

        let date = self.date.unwrap_or_default();
        let timestamp = parse_timestamp(&date);

        let image = self
            .featured_image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let tags = match layout {
            TagLayout::Hierarchical => ItemTags::Hierarchical(
                self.resource_categories
                    .unwrap_or_default()
                    .into_iter()
                    .map(normalize_path)
                    .filter(|p| !p.is_empty())
                    .collect(),
            ),
            TagLayout::Flat(axes) => {
                let mut terms = self.taxonomy_terms.unwrap_or_default();
                ItemTags::Flat(
                    axes.iter()
                        .map(|axis| {
                            let nodes = terms
                                .remove(axis)
                                .unwrap_or_default()
                                .into_iter()
                                .map(normalize_node)
                                .filter(|n| !n.name.is_empty())
                                .collect();
                            (axis.clone(), nodes)
                        })
                        .collect(),
                )
            }
        };

        let tag_names = collect_tag_names(self.all_category_names.unwrap_or_default(), &tags);

        Item {
            id: self.id,
            title,
            excerpt: self.excerpt_plain.unwrap_or_default().trim().to_string(),
            link: self.link.unwrap_or_default(),
            date,
            timestamp,
            image,
            tags,
            tag_names,
        }
    }
}

fn normalize_node(mut node: TagNode) -> TagNode {
    node.name = decode_entities(node.name.trim());
    node.parent = node.parent.filter(|p| *p != 0);
    node
}

/// Узел без имени обрывает путь: уровни ниже него не определены
fn normalize_path(nodes: Vec<TagNode>) -> CategoryPath {
    CategoryPath::new(
        nodes
            .into_iter()
            .take(CATEGORY_DEPTH)
            .map(normalize_node)
            .take_while(|n| !n.name.is_empty())
            .collect(),
    )
}

/// Flattened names first, then every structured node name; deduplicated,
/// first-seen order, blanks dropped.
fn collect_tag_names(flattened: Vec<String>, tags: &ItemTags) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let structured = tags.nodes().map(|n| n.name.clone());
    for name in flattened.into_iter().map(|n| decode_entities(n.trim())).chain(structured) {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Parses the endpoint's ISO-8601 date into UTC milliseconds.
///
/// Accepts RFC 3339 with offset, a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// (treated as UTC) and a bare `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Декодирует HTML-сущности в заголовке (`&amp;`, `&#8217;`, `&#x27;` ...)
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // Сущность заканчивается на ';' в пределах короткого окна
        let decoded = tail
            .char_indices()
            .take(12)
            .find(|(_, c)| *c == ';')
            .and_then(|(end, _)| decode_entity(&tail[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "hellip" => Some('…'),
        "ndash" => Some('–'),
        "mdash" => Some('—'),
        "lsquo" => Some('‘'),
        "rsquo" => Some('’'),
        "ldquo" => Some('“'),
        "rdquo" => Some('”'),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_resource::CategoryLevel;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ListingRecord {
        serde_json::from_value(value).expect("valid record")
    }

    #[test]
    fn test_minimal_record_gets_safe_defaults() {
        let item = record(json!({ "id": 7 })).into_item(&TagLayout::Hierarchical);
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "");
        assert_eq!(item.excerpt, "");
        assert_eq!(item.image, None);
        assert_eq!(item.timestamp, None);
        assert_eq!(item.tags, ItemTags::Hierarchical(Vec::new()));
        assert!(item.tag_names.is_empty());
    }

    #[test]
    fn test_nulls_are_tolerated() {
        let item = record(json!({
            "id": 3,
            "title": null,
            "excerpt_plain": null,
            "featured_image_url": null,
            "resource_categories": null
        }))
        .into_item(&TagLayout::Hierarchical);
        assert_eq!(item.title, "");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_hierarchical_record() {
        let item = record(json!({
            "id": 11,
            "date": "2024-03-15T14:02:26",
            "link": "https://example.com/resources/brake-kit/",
            "title": { "rendered": "Brake &amp; Clutch Kit" },
            "excerpt_plain": "  Full kit  ",
            "featured_image_url": "",
            "resource_categories": [
                [
                    { "id": 1, "name": "Toyota", "slug": "toyota", "parent": 0 },
                    { "id": 2, "name": "Corolla", "slug": "corolla", "parent": 1 },
                    { "id": 3, "name": "2020", "slug": "2020", "parent": 2 }
                ]
            ],
            "all_category_names": ["2020", "Toyota"]
        }))
        .into_item(&TagLayout::Hierarchical);

        assert_eq!(item.title, "Brake & Clutch Kit");
        assert_eq!(item.excerpt, "Full kit");
        assert_eq!(item.image, None);
        assert!(item.timestamp.is_some());

        let paths = item.tags.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].node(CategoryLevel::Make).and_then(|n| n.parent), None);
        assert_eq!(paths[0].node(CategoryLevel::Model).and_then(|n| n.parent), Some(1));
        assert_eq!(item.tag_names, vec!["2020", "Toyota", "Corolla"]);
    }

    #[test]
    fn test_deep_paths_are_truncated() {
        let item = record(json!({
            "id": 1,
            "resource_categories": [[
                { "name": "A" }, { "name": "B" }, { "name": "C" }, { "name": "D" }
            ], []]
        }))
        .into_item(&TagLayout::Hierarchical);
        let paths = item.tags.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
    }

    #[test]
    fn test_nameless_nodes_are_dropped_not_the_record() {
        let item = record(json!({
            "id": 8,
            "resource_categories": [
                [{ "id": 1, "slug": "x" }, { "id": 2, "name": "Corolla" }],
                [{ "id": 3, "name": "Toyota" }, { "id": 4, "name": "  " }, { "id": 5, "name": "2020" }],
                [{ "id": 6, "name": "Honda" }, { "id": 7, "name": "Civic" }, { "id": 9, "name": "2021" }]
            ]
        }))
        .into_item(&TagLayout::Hierarchical);

        let paths = item.tags.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 1);
        assert_eq!(paths[0].name(CategoryLevel::Make), Some("Toyota"));
        assert!(paths[1].is_complete());
        assert!(item.tag_names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_flat_layout_keeps_configured_axes() {
        let layout = TagLayout::Flat(vec!["year".into(), "model".into()]);
        let item = record(json!({
            "id": 5,
            "taxonomy_terms": {
                "year": [{ "id": 9, "name": "2019" }],
                "colour": [{ "id": 10, "name": "Red" }]
            }
        }))
        .into_item(&layout);

        assert_eq!(item.axis_names("year"), vec!["2019"]);
        assert!(item.tags.axis("model").is_empty());
        assert!(item.tags.axis("colour").is_empty());
        match &item.tags {
            ItemTags::Flat(axes) => assert_eq!(axes.len(), 2),
            other => panic!("unexpected tags {:?}", other),
        }
        assert_eq!(item.tag_names, vec!["2019"]);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let naive = parse_timestamp("2024-03-15T14:02:26").unwrap();
        let zulu = parse_timestamp("2024-03-15T14:02:26Z").unwrap();
        let fraction = parse_timestamp("2024-03-15T14:02:26.500").unwrap();
        assert_eq!(naive, zulu);
        assert_eq!(fraction, naive + 500);
        assert_eq!(
            parse_timestamp("2024-03-15").unwrap(),
            naive - (14 * 3600 + 2 * 60 + 26) * 1000
        );
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("Driver&#8217;s manual"), "Driver’s manual");
        assert_eq!(decode_entities("&#x27;quoted&#x27;"), "'quoted'");
        assert_eq!(decode_entities("a &lt;b&gt; c"), "a <b> c");
        assert_eq!(decode_entities("R&D; &bogus; & more"), "R&D; &bogus; & more");
        assert_eq!(decode_entities("plain"), "plain");
    }
}
