//! Schema data model.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Category of a schema entry, which decides the HCL header keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Resource,
    DataSource,
}

impl EntryKind {
    /// The HCL keyword that opens a template for this category.
    pub fn keyword(self) -> &'static str {
        match self {
            EntryKind::Resource => "resource",
            EntryKind::DataSource => "data",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Resource => write!(f, "resource"),
            EntryKind::DataSource => write!(f, "data source"),
        }
    }
}

/// How many times a nested block may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    #[default]
    Single,
    /// Like `single`, but the block is always present.
    Group,
    List,
    Set,
    Map,
}

impl NestingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NestingMode::Single => "single",
            NestingMode::Group => "group",
            NestingMode::List => "list",
            NestingMode::Set => "set",
            NestingMode::Map => "map",
        }
    }
}

impl fmt::Display for NestingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf attribute inside a block.
///
/// Unknown fields (`description_kind`, `nested_type`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Attribute {
    /// Raw type expression: a primitive name or a tagged JSON array.
    #[serde(rename = "type")]
    pub type_expr: Option<Value>,

    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub deprecated: bool,

    /// Declared default. A JSON `null` deserializes to `None`.
    pub default: Option<Value>,

    pub description: Option<String>,
}

/// A nested block definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlockType {
    pub nesting_mode: NestingMode,
    pub min_items: u64,
    pub max_items: Option<u64>,
    pub description: Option<String>,
    pub block: Block,
}

/// Attributes and nested block types, keyed and ordered by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Block {
    pub attributes: BTreeMap<String, Attribute>,
    pub block_types: BTreeMap<String, BlockType>,
}

/// One resource or data-source schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaEntry {
    /// Root block. An entry without one is malformed.
    pub block: Option<Block>,
}

/// The resource and data-source schemas of a single provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderSchema {
    #[serde(rename = "resource_schemas")]
    pub resources: BTreeMap<String, SchemaEntry>,

    #[serde(rename = "data_source_schemas")]
    pub data_sources: BTreeMap<String, SchemaEntry>,
}

impl ProviderSchema {
    /// Find an entry by name. Resources win when a name exists in both
    /// categories.
    pub fn lookup(&self, name: &str) -> Option<(EntryKind, &SchemaEntry)> {
        if let Some(entry) = self.resources.get(name) {
            return Some((EntryKind::Resource, entry));
        }
        self.data_sources
            .get(name)
            .map(|entry| (EntryKind::DataSource, entry))
    }

    /// Returns true when neither category has any entries.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.data_sources.is_empty()
    }
}
