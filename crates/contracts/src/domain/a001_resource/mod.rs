pub mod aggregate;
pub mod listing;

pub use aggregate::{CategoryLevel, CategoryPath, Item, ItemTags, TagNode, CATEGORY_DEPTH};
pub use listing::{decode_entities, parse_timestamp, ListingRecord, RenderedText, TagLayout};
