//! Fakes for the collaborator traits, shared by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::env::{Database, IdGenerator};
use crate::types::{DatabaseTables, Item, ItemTemplate, Preset, Trader, TraderAssort};

/// Deterministic ids: `{prefix}1`, `{prefix}2`, ... (or one fixed id forever).
pub struct SequentialIds {
    prefix: String,
    next: u64,
    repeat: bool,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            next: 0,
            repeat: false,
        }
    }

    /// A broken generator that returns `id` on every call.
    pub fn repeating(id: &str) -> Self {
        Self {
            repeat: true,
            ..Self::new(id)
        }
    }

    pub fn issued(&self) -> u64 {
        self.next
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        self.next += 1;
        if self.repeat {
            self.prefix.clone()
        } else {
            format!("{}{}", self.prefix, self.next)
        }
    }
}

/// Database backed by plain tables.
#[derive(Default)]
pub struct FakeDatabase {
    pub tables: DatabaseTables,
}

impl FakeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trader(mut self, trader_id: &str) -> Self {
        self.tables.add_trader(trader_id, Trader::default());
        self
    }

    pub fn with_template(mut self, template_id: &str) -> Self {
        self.tables.add_template(ItemTemplate::new(template_id));
        self
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.tables.add_preset(preset);
        self
    }

    pub fn assort(&self, trader_id: &str) -> &TraderAssort {
        &self.tables.traders[trader_id].assort
    }
}

impl Database for FakeDatabase {
    fn has_trader(&self, trader_id: &str) -> bool {
        self.tables.traders.contains_key(trader_id)
    }

    fn has_template(&self, template_id: &str) -> bool {
        self.tables.templates.items.contains_key(template_id)
    }

    fn preset(&self, preset_id: &str) -> Option<&Preset> {
        self.tables.globals.item_presets.get(preset_id)
    }

    fn assort_mut(&mut self, trader_id: &str) -> Option<&mut TraderAssort> {
        self.tables
            .traders
            .get_mut(trader_id)
            .map(|trader| &mut trader.assort)
    }
}

/// Root of a preset tree (no parent).
pub fn root(id: &str, template_id: &str) -> Item {
    Item {
        id: id.to_owned(),
        template_id: template_id.to_owned(),
        parent_id: None,
        slot_id: None,
        upd: None,
        extra: Default::default(),
    }
}

pub fn child(id: &str, template_id: &str, parent_id: &str, slot_id: &str) -> Item {
    Item {
        parent_id: Some(parent_id.to_owned()),
        slot_id: Some(slot_id.to_owned()),
        ..root(id, template_id)
    }
}

/// In-memory log sink for [`capture_logs`].
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns what it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (result, logs)
}
