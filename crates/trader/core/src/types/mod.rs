//! Data model shared by the loaders, the inserter and the runtime adapters.
mod assort;
mod item;
mod preset;
mod tables;

pub use assort::{BarterOption, BarterScheme, TraderAssort};
pub use item::{ExtraFields, Item, ItemUpd, ROOT_CONTAINER};
pub use preset::Preset;
pub use tables::{DatabaseTables, Globals, ItemTemplate, Templates, Trader};
