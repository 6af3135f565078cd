//! Block names and the schema table a raw bundle is validated against.
//!
//! [`ChartSchema::default`] holds the canonical requirements: every graha
//! with longitude, latitude, and speed; the ascendant in `extra`; and, when a
//! `bhava` block is supplied, all 12 houses with a longitude.

use std::collections::BTreeMap;

use kundali_base::{ALL_GRAHAS, ASCENDANT_CODE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::RawBundle;
use crate::error::ValidationError;

pub const PROP_LONGITUDE: &str = "longitude";
pub const PROP_LATITUDE: &str = "latitude";
pub const PROP_SPEED: &str = "speed";
pub const PROP_RASHI: &str = "rashi";
pub const PROP_DEGREE: &str = "degree";

/// Number of bhavas (houses) in a chart.
pub const BHAVA_COUNT: u8 = 12;

/// The recognized blocks of a chart bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    /// Celestial bodies.
    Graha,
    /// Special points, primarily the ascendant.
    Extra,
    /// Houses 1..12.
    Bhava,
    /// Chart-owner metadata.
    User,
    /// Caller-defined extensions.
    More,
}

/// All recognized blocks.
pub const ALL_BLOCKS: [Block; 5] = [
    Block::Graha,
    Block::Extra,
    Block::Bhava,
    Block::User,
    Block::More,
];

impl Block {
    /// Key of the block in a bundle.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha => "graha",
            Self::Extra => "extra",
            Self::Bhava => "bhava",
            Self::User => "user",
            Self::More => "more",
        }
    }

    pub fn from_name(name: &str) -> Option<Block> {
        ALL_BLOCKS.iter().copied().find(|b| b.name() == name)
    }
}

/// Elements a block must contain and the properties each must carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockTemplate {
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
}

impl BlockTemplate {
    fn new(elements: impl IntoIterator<Item = String>, properties: &[&str]) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.properties.is_empty()
    }
}

/// Validation table: which blocks are required and what each must contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSchema {
    pub required_blocks: Vec<Block>,
    #[serde(default)]
    pub templates: BTreeMap<Block, BlockTemplate>,
}

impl Default for ChartSchema {
    fn default() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(
            Block::Graha,
            BlockTemplate::new(
                ALL_GRAHAS.iter().map(|g| g.code().to_string()),
                &[PROP_LONGITUDE, PROP_LATITUDE, PROP_SPEED],
            ),
        );
        templates.insert(
            Block::Extra,
            BlockTemplate::new([ASCENDANT_CODE.to_string()], &[PROP_LONGITUDE]),
        );
        templates.insert(
            Block::Bhava,
            BlockTemplate::new((1..=BHAVA_COUNT).map(|b| b.to_string()), &[PROP_LONGITUDE]),
        );
        Self {
            required_blocks: vec![Block::Graha, Block::Extra],
            templates,
        }
    }
}

impl ChartSchema {
    /// Check a raw bundle against this schema.
    ///
    /// Required blocks are checked first, then every recognized block that is
    /// present. Unrecognized block names are ignored.
    pub fn validate(&self, bundle: &RawBundle) -> Result<(), ValidationError> {
        for block in &self.required_blocks {
            if !bundle.contains_block(block.name()) {
                return Err(ValidationError::MissingBlock {
                    block: block.name().to_string(),
                });
            }
        }

        for (name, value) in bundle.blocks() {
            let Some(block) = Block::from_name(name) else {
                log::debug!("ignoring unrecognized block '{name}'");
                continue;
            };
            if let Some(template) = self.templates.get(&block) {
                check_block(block, template, value)?;
            }
        }
        Ok(())
    }
}

fn check_block(
    block: Block,
    template: &BlockTemplate,
    value: &Value,
) -> Result<(), ValidationError> {
    if template.is_empty() {
        return Ok(());
    }
    let Some(elements) = value.as_object() else {
        return Err(ValidationError::MalformedBlock {
            block: block.name().to_string(),
        });
    };

    for key in &template.elements {
        let Some(element) = elements.get(key) else {
            return Err(ValidationError::MissingElement {
                block: block.name().to_string(),
                key: key.clone(),
            });
        };
        let Some(props) = element.as_object() else {
            return Err(ValidationError::MalformedElement {
                block: block.name().to_string(),
                key: key.clone(),
            });
        };
        if let Some(missing) = template.properties.iter().find(|p| !props.contains_key(*p)) {
            return Err(ValidationError::MissingProperty {
                block: block.name().to_string(),
                key: key.clone(),
                property: missing.clone(),
            });
        }
    }
    Ok(())
}
