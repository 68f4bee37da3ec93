//! Host database loader.
//!
//! Reads the subset of the host's JSON database the injector works with.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use trader_core::{DatabaseTables, Globals, ItemTemplate, Templates, Trader, TraderAssort};

use crate::loaders::{LoadResult, read_file, read_json};

/// Loader for host database tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a database directory.
    ///
    /// # Directory Structure
    ///
    /// ```text
    /// database/
    /// ├── globals.json          (ItemPresets)
    /// ├── templates/
    /// │   └── items.json        (template id → template)
    /// └── traders/
    ///     └── <trader id>/
    ///         ├── base.json     (optional, kept opaque)
    ///         └── assort.json   (optional, empty when absent)
    /// ```
    pub fn load(database_dir: &Path) -> LoadResult<DatabaseTables> {
        let globals: Globals = read_json(&database_dir.join("globals.json"))?;
        let items: HashMap<String, ItemTemplate> =
            read_json(&database_dir.join("templates").join("items.json"))?;
        let traders = Self::load_traders(&database_dir.join("traders"))?;

        debug!(
            traders = traders.len(),
            templates = items.len(),
            presets = globals.item_presets.len(),
            "database tables loaded"
        );

        Ok(DatabaseTables {
            traders,
            templates: Templates { items },
            globals,
        })
    }

    /// Load tables from a single JSON file holding a serialized
    /// [`DatabaseTables`].
    pub fn load_dump(path: &Path) -> LoadResult<DatabaseTables> {
        let content = read_file(path)?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse database dump {}: {}", path.display(), e))
    }

    fn load_traders(traders_dir: &Path) -> LoadResult<HashMap<String, Trader>> {
        let entries = std::fs::read_dir(traders_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read traders directory {}: {}", traders_dir.display(), e)
        })?;

        let mut traders = HashMap::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(trader_id) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };

            let dir = entry.path();
            let mut trader = Trader::default();

            let assort_path = dir.join("assort.json");
            if assort_path.is_file() {
                trader.assort = read_json::<TraderAssort>(&assort_path)?;
            }
            let base_path = dir.join("base.json");
            if base_path.is_file() {
                trader
                    .extra
                    .insert("base".to_owned(), read_json::<serde_json::Value>(&base_path)?);
            }

            traders.insert(trader_id, trader);
        }

        Ok(traders)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            &root.join("globals.json"),
            r#"{ "ItemPresets": { "p1": { "_id": "p1", "_items": [{ "_id": "r", "_tpl": "gun" }] } }, "config": {} }"#,
        );
        write(
            &root.join("templates/items.json"),
            r#"{ "gun": { "_id": "gun", "_name": "rifle" } }"#,
        );
        write(
            &root.join("traders/therapist/assort.json"),
            r#"{ "items": [], "barter_scheme": {}, "loyal_level_items": {} }"#,
        );
        write(&root.join("traders/therapist/base.json"), r#"{ "nickname": "Therapist" }"#);
        write(&root.join("traders/ragfair/base.json"), r#"{}"#);

        let tables = TablesLoader::load(root).unwrap();

        assert_eq!(tables.traders.len(), 2);
        assert_eq!(tables.traders["therapist"].extra["base"]["nickname"], "Therapist");
        assert!(tables.traders["ragfair"].assort.items.is_empty());
        assert_eq!(tables.templates.items["gun"].name.as_deref(), Some("rifle"));
        assert_eq!(tables.globals.item_presets["p1"].items.len(), 1);
        assert!(tables.globals.extra.contains_key("config"));
    }

    #[test]
    fn missing_globals_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = TablesLoader::load(dir.path()).unwrap_err();

        assert!(err.to_string().contains("globals.json"));
    }

    #[test]
    fn dump_round_trips_loaded_tables() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("database");
        write(&root.join("globals.json"), r#"{ "ItemPresets": {} }"#);
        write(&root.join("templates/items.json"), r#"{ "tag": { "_id": "tag" } }"#);
        write(
            &root.join("traders/fence/assort.json"),
            r#"{
                "items": [{ "_id": "o1", "_tpl": "tag", "parentId": "hideout", "slotId": "hideout" }],
                "barter_scheme": { "o1": [[{ "_tpl": "dogtag", "count": 1, "level": 10, "side": "Bear" }]] },
                "loyal_level_items": { "o1": 1 }
            }"#,
        );
        let tables = TablesLoader::load(&root).unwrap();

        let dump = dir.path().join("tables.json");
        fs::write(&dump, serde_json::to_string(&tables).unwrap()).unwrap();
        let reloaded = TablesLoader::load_dump(&dump).unwrap();

        assert_eq!(reloaded, tables);
        let barter = &reloaded.traders["fence"].assort.barter_scheme["o1"][0][0];
        assert_eq!(barter.extra["level"], 10);
    }

    #[test]
    fn malformed_dump_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("tables.json");
        fs::write(&dump, "{ not json").unwrap();

        let err = TablesLoader::load_dump(&dump).unwrap_err();

        assert!(err.to_string().contains("tables.json"), "unexpected error: {err}");
    }
}
