//! The chart: validated data plus cached placement mappings.

use std::cell::OnceCell;

use kundali_base::{ALL_SPECIAL_LAGNAS, SpecialLagna};

use crate::bundle::RawBundle;
use crate::data::{ChartData, Element};
use crate::error::{ChartError, ValidationError};
use crate::extra_lagna::SpecialPointCalculator;
use crate::label::{GrahaLabeler, LabelMode, base_label, is_direction_exempt, with_direction};
use crate::placement::{
    BhavaPlacement, GrahaInBhava, GrahaInRashi, RashiInBhava, RashiPlacement, graha_in_bhava,
    graha_in_rashi, rashi_in_bhava,
};
use crate::schema::{Block, ChartSchema};

/// A single chart built from a validated bundle.
///
/// The rashi → bhava map is built during construction. The graha maps are
/// filled on first access and then reused. The lazy caches are not
/// synchronized, so a chart is `!Sync`; give each thread its own chart.
/// Mutating houses after construction does not invalidate the caches.
#[derive(Debug, Clone)]
pub struct Chart {
    data: ChartData,
    rashi_in_bhava: RashiInBhava,
    graha_in_bhava: OnceCell<GrahaInBhava>,
    graha_in_rashi: OnceCell<GrahaInRashi>,
}

impl Chart {
    /// Build a chart, validating against [`ChartSchema::default`].
    pub fn new(bundle: &RawBundle) -> Result<Self, ChartError> {
        Self::with_schema(bundle, &ChartSchema::default())
    }

    /// Parse a JSON bundle and build a chart from it.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Self::new(&RawBundle::from_json(json)?)
    }

    /// Build a chart, validating against an explicit schema.
    pub fn with_schema(bundle: &RawBundle, schema: &ChartSchema) -> Result<Self, ChartError> {
        schema.validate(bundle)?;

        let required = |block: Block| {
            bundle
                .block(block.name())
                .ok_or_else(|| ValidationError::MissingBlock {
                    block: block.name().to_string(),
                })
        };
        let synthesize = !bundle.contains_block(Block::Bhava.name());
        let data = ChartData::from_blocks(
            required(Block::Graha)?,
            required(Block::Extra)?,
            bundle.block(Block::Bhava.name()),
            bundle.block(Block::User.name()),
            bundle.block(Block::More.name()),
        )?;
        log::debug!(
            "chart built: {} graha, {} extra, bhavas {}",
            data.graha.len(),
            data.extra.len(),
            if synthesize { "synthesized" } else { "supplied" }
        );

        let rashi_in_bhava = rashi_in_bhava(&data.bhava);
        Ok(Self {
            data,
            rashi_in_bhava,
            graha_in_bhava: OnceCell::new(),
            graha_in_rashi: OnceCell::new(),
        })
    }

    /// The normalized chart data.
    pub fn get_data(&self) -> &ChartData {
        &self.data
    }

    /// The ascendant entry.
    pub fn ascendant(&self) -> Option<&Element> {
        self.data.ascendant()
    }

    /// Compute special lagnas and store them in the `extra` block.
    ///
    /// `None` requests every known lagna. All codes are checked before any
    /// calculation runs, and results are merged only once every requested
    /// lagna has been computed, so a failure leaves `extra` untouched.
    pub fn calc_extra_lagna(
        &mut self,
        codes: Option<&[&str]>,
        calculator: &dyn SpecialPointCalculator,
    ) -> Result<(), ChartError> {
        let lagnas: Vec<SpecialLagna> = match codes {
            None => ALL_SPECIAL_LAGNAS.to_vec(),
            Some(codes) => codes
                .iter()
                .map(|code| {
                    SpecialLagna::from_code(code)
                        .ok_or_else(|| ChartError::UnknownSpecialPoint(code.to_string()))
                })
                .collect::<Result<_, _>>()?,
        };

        let positions = lagnas
            .iter()
            .map(|&lagna| Ok((lagna, calculator.calculate(lagna, &self.data)?)))
            .collect::<Result<Vec<_>, ChartError>>()?;

        for (lagna, position) in positions {
            log::trace!("{} ({}) at {:.4}", lagna.name(), lagna.code(), position.longitude);
            self.data
                .extra
                .insert(lagna.code().to_string(), Element::from(position));
        }
        Ok(())
    }

    /// Sign number → house number.
    pub fn get_rashi_in_bhava(&self) -> &RashiInBhava {
        &self.rashi_in_bhava
    }

    /// House and direction of every graha.
    pub fn get_graha_in_bhava(&self) -> Result<&GrahaInBhava, ChartError> {
        if let Some(map) = self.graha_in_bhava.get() {
            return Ok(map);
        }
        let map = graha_in_bhava(&self.data, &self.rashi_in_bhava)?;
        log::trace!("graha in bhava cached for {} grahas", map.len());
        Ok(self.graha_in_bhava.get_or_init(|| map))
    }

    /// Sign and direction of every graha, plus the ascendant.
    pub fn get_graha_in_rashi(&self) -> Result<&GrahaInRashi, ChartError> {
        if let Some(map) = self.graha_in_rashi.get() {
            return Ok(map);
        }
        let map = graha_in_rashi(&self.data)?;
        log::trace!("graha in rashi cached for {} entries", map.len());
        Ok(self.graha_in_rashi.get_or_init(|| map))
    }

    /// House placement of one graha, if the chart carries it.
    pub fn bhava_of(&self, code: &str) -> Result<Option<BhavaPlacement>, ChartError> {
        Ok(self.get_graha_in_bhava()?.get(code).copied())
    }

    /// Sign placement of one graha or the ascendant, if the chart carries it.
    pub fn rashi_of(&self, code: &str) -> Result<Option<RashiPlacement>, ChartError> {
        Ok(self.get_graha_in_rashi()?.get(code).copied())
    }

    /// Display label for a graha.
    ///
    /// Retrograde grahas are wrapped in parentheses, except Rahu, Ketu, and
    /// the ascendant.
    pub fn get_graha_label(
        &self,
        code: &str,
        mode: LabelMode,
        labeler: Option<&dyn GrahaLabeler>,
    ) -> Result<String, ChartError> {
        let label = base_label(code, mode, labeler)?;
        if is_direction_exempt(code) {
            return Ok(label);
        }
        let placement = self
            .bhava_of(code)?
            .ok_or_else(|| ChartError::UnknownGraha(code.to_string()))?;
        Ok(with_direction(label, placement.direction))
    }
}
