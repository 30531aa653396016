use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Tag node
// ============================================================================

/// Термин таксономии (марка, модель, год и т.п.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNode {
    #[serde(default)]
    pub id: i64,

    /// Отображаемое имя; по нему идёт фильтрация и поиск
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    /// Родительский термин (0 от сервера нормализуется в None)
    #[serde(default)]
    pub parent: Option<i64>,
}

impl TagNode {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = name.to_lowercase().replace(' ', "-");
        Self {
            id,
            name,
            slug,
            parent: None,
        }
    }
}

// ============================================================================
// Category path (Make → Model → Year)
// ============================================================================

/// Уровень иерархической категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLevel {
    Make,
    Model,
    Year,
}

impl CategoryLevel {
    pub const ALL: [CategoryLevel; 3] = [
        CategoryLevel::Make,
        CategoryLevel::Model,
        CategoryLevel::Year,
    ];

    /// Позиция узла в пути
    pub fn position(self) -> usize {
        match self {
            CategoryLevel::Make => 0,
            CategoryLevel::Model => 1,
            CategoryLevel::Year => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryLevel::Make => "make",
            CategoryLevel::Model => "model",
            CategoryLevel::Year => "year",
        }
    }
}

/// Maximum depth of a category path.
pub const CATEGORY_DEPTH: usize = 3;

/// Ordered root-to-leaf chain of terms, at most [`CATEGORY_DEPTH`] long.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPath(pub Vec<TagNode>);

impl CategoryPath {
    pub fn new(nodes: Vec<TagNode>) -> Self {
        Self(nodes)
    }

    pub fn node(&self, level: CategoryLevel) -> Option<&TagNode> {
        self.0.get(level.position())
    }

    pub fn name(&self, level: CategoryLevel) -> Option<&str> {
        self.node(level).map(|n| n.name.as_str())
    }

    /// Путь содержит все три уровня
    pub fn is_complete(&self) -> bool {
        self.0.len() >= CATEGORY_DEPTH
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn nodes(&self) -> &[TagNode] {
        &self.0
    }
}

// ============================================================================
// Item tags
// ============================================================================

/// Теги элемента: иерархические пути или независимые оси
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "terms", rename_all = "lowercase")]
pub enum ItemTags {
    Hierarchical(Vec<CategoryPath>),
    /// axis key → terms on that axis
    Flat(BTreeMap<String, Vec<TagNode>>),
}

impl Default for ItemTags {
    fn default() -> Self {
        ItemTags::Hierarchical(Vec::new())
    }
}

impl ItemTags {
    pub fn paths(&self) -> &[CategoryPath] {
        match self {
            ItemTags::Hierarchical(paths) => paths,
            ItemTags::Flat(_) => &[],
        }
    }

    /// Термины по оси (для плоского режима)
    pub fn axis(&self, axis: &str) -> &[TagNode] {
        match self {
            ItemTags::Flat(axes) => axes.get(axis).map(Vec::as_slice).unwrap_or(&[]),
            ItemTags::Hierarchical(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ItemTags::Hierarchical(paths) => paths.iter().all(CategoryPath::is_empty),
            ItemTags::Flat(axes) => axes.values().all(Vec::is_empty),
        }
    }

    /// Все узлы в порядке обхода
    pub fn nodes(&self) -> Box<dyn Iterator<Item = &TagNode> + '_> {
        match self {
            ItemTags::Hierarchical(paths) => Box::new(paths.iter().flat_map(|p| p.nodes().iter())),
            ItemTags::Flat(axes) => Box::new(axes.values().flat_map(|terms| terms.iter())),
        }
    }
}

// ============================================================================
// Item
// ============================================================================

/// Normalized catalog entry. Built once from a [`super::ListingRecord`];
/// downstream code never re-inspects the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    /// Already HTML-decoded
    pub title: String,
    pub excerpt: String,
    pub link: String,
    /// ISO-8601 as received
    pub date: String,
    /// Parsed `date` in UTC milliseconds; `None` when unparseable
    pub timestamp: Option<i64>,
    pub image: Option<String>,
    pub tags: ItemTags,
    /// Canonical list of tag names matched by search
    pub tag_names: Vec<String>,
}

impl Item {
    /// Distinct names at one level across all paths, first-seen order
    pub fn level_names(&self, level: CategoryLevel) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for path in self.tags.paths() {
            if let Some(name) = path.name(level) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Distinct names on one flat axis, first-seen order
    pub fn axis_names(&self, axis: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for node in self.tags.axis(axis) {
            if !names.contains(&node.name) {
                names.push(node.name.clone());
            }
        }
        names
    }
}
