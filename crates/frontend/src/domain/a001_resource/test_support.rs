//! Builders for catalog fixtures used across the module tests.

use contracts::domain::a001_resource::{CategoryPath, Item, ItemTags, TagNode};
use std::collections::BTreeMap;

fn node(id: i64, name: &str) -> TagNode {
    TagNode::new(id, name)
}

fn base(id: i64, title: &str, tags: ItemTags) -> Item {
    let tag_names = {
        let mut names: Vec<String> = Vec::new();
        for n in tags.nodes() {
            if !names.contains(&n.name) {
                names.push(n.name.clone());
            }
        }
        names
    };
    Item {
        id,
        title: title.to_string(),
        excerpt: String::new(),
        link: format!("https://example.com/resources/{}/", id),
        date: String::new(),
        timestamp: None,
        image: None,
        tags,
        tag_names,
    }
}

/// Hierarchical item; every inner slice is one Make → Model → Year path.
pub fn item(id: i64, title: &str, paths: &[&[&str]]) -> Item {
    let paths = paths
        .iter()
        .map(|names| {
            CategoryPath::new(
                names
                    .iter()
                    .enumerate()
                    .map(|(i, n)| node(id * 10 + i as i64, n))
                    .collect(),
            )
        })
        .collect();
    base(id, title, ItemTags::Hierarchical(paths))
}

/// Flat item; pairs of axis key and term names.
pub fn flat_item(id: i64, title: &str, axes: &[(&str, &[&str])]) -> Item {
    let terms: BTreeMap<String, Vec<TagNode>> = axes
        .iter()
        .map(|(axis, names)| {
            (
                axis.to_string(),
                names.iter().enumerate().map(|(i, n)| node(i as i64, n)).collect(),
            )
        })
        .collect();
    base(id, title, ItemTags::Flat(terms))
}

/// Sets the date (and the parsed timestamp) of an item.
pub fn dated(mut item: Item, date: &str) -> Item {
    item.date = date.to_string();
    item.timestamp = contracts::domain::a001_resource::parse_timestamp(date);
    item
}
