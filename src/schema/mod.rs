//! Provider schema model, loading, and name search.
//!
//! The types here mirror the JSON emitted by `terraform providers schema -json`,
//! narrowed to a single provider. Once loaded, a [`ProviderSchema`] is never
//! mutated.

mod loader;
mod model;
mod search;


pub use loader::provider_key;
pub use model::{Attribute, Block, BlockType, EntryKind, NestingMode, ProviderSchema, SchemaEntry};
