//! Raw input bundle, as produced by an ephemeris step.
//!
//! A bundle maps block names (`graha`, `extra`, `bhava`, `user`, `more`) to
//! block values. Positional blocks map element keys to property mappings:
//!
//! ```json
//! {
//!   "graha": { "Sy": { "longitude": 15.2, "latitude": 0.0, "speed": 0.98 } },
//!   "extra": { "Lg": { "longitude": 201.4 } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChartError;

/// Unvalidated chart input: block name → block value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBundle {
    blocks: BTreeMap<String, Value>,
}

impl RawBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style insert of a whole block.
    pub fn with_block(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert_block(name, value);
        self
    }

    /// Insert or replace a block, returning the previous value.
    pub fn insert_block(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.blocks.insert(name.into(), value)
    }

    /// Remove a block, returning its value.
    pub fn remove_block(&mut self, name: &str) -> Option<Value> {
        self.blocks.remove(name)
    }

    pub fn block(&self, name: &str) -> Option<&Value> {
        self.blocks.get(name)
    }

    /// Mutable access to a block, e.g. to drop a single element in tests.
    pub fn block_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.blocks.get_mut(name)
    }

    pub fn contains_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Blocks in name order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, Value>> for RawBundle {
    fn from(blocks: BTreeMap<String, Value>) -> Self {
        Self { blocks }
    }
}
