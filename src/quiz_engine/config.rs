//! Engine tuning loaded from TOML.
//!
//! Every field has a default matching the shipped game, so an empty document
//! (or `EngineConfig::default()`) is a valid configuration:
//!
//! ```toml
//! max_attempts = 1000
//!
//! [basic]
//! choice_variation = 2
//! multiply_probability = 0.0
//!
//! [advanced]
//! choice_variation = 10
//! multiply_probability = 0.2
//!
//! [sequence]
//! step_one_probability = 0.7
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::{
    error::{QuizError, QuizResult},
    models::{Tier, CHOICE_COUNT},
};

/// Fewest attempts that can still fill a choice set: one per distractor.
pub const MIN_ATTEMPTS: u32 = CHOICE_COUNT as u32 - 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound for every rejection-sampling loop.
    pub max_attempts: u32,
    pub basic: TierSettings,
    pub advanced: TierSettings,
    pub sequence: SequenceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    /// Distractors are drawn from `answer ± choice_variation`.
    pub choice_variation: u32,
    pub multiply_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSettings {
    /// Chance that a numeric sequence counts by one rather than two.
    pub step_one_probability: f64,
}

impl TierSettings {
    pub fn basic() -> Self {
        Self { choice_variation: 2, multiply_probability: 0.0 }
    }

    pub fn advanced() -> Self {
        Self { choice_variation: 10, multiply_probability: 0.2 }
    }
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self { step_one_probability: 0.7 }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            basic: TierSettings::basic(),
            advanced: TierSettings::advanced(),
            sequence: SequenceSettings::default(),
        }
    }
}

fn check_probability(name: &str, p: f64) -> QuizResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(QuizError::Config(format!("{name} must be within [0, 1], got {p}")))
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// Missing top-level keys and tables fall back to defaults; a tier table
    /// that is present must be complete.
    pub fn from_toml_str(src: &str) -> QuizResult<Self> {
        let cfg: EngineConfig =
            toml::from_str(src).map_err(|e| QuizError::Config(e.to_string()))?;
        cfg.validate()?;
        debug!(
            max_attempts = cfg.max_attempts,
            basic_variation = cfg.basic.choice_variation,
            advanced_variation = cfg.advanced.choice_variation,
            "Loaded engine config"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> QuizResult<()> {
        if self.max_attempts < MIN_ATTEMPTS {
            return Err(QuizError::Config(format!(
                "max_attempts must be at least {MIN_ATTEMPTS}, got {}",
                self.max_attempts
            )));
        }
        check_probability("basic.multiply_probability", self.basic.multiply_probability)?;
        check_probability("advanced.multiply_probability", self.advanced.multiply_probability)?;
        check_probability("sequence.step_one_probability", self.sequence.step_one_probability)?;
        // Multiplication is an advanced-only operation.
        if self.basic.multiply_probability > 0.0 {
            return Err(QuizError::Config(
                "basic tier does not support multiplication".into(),
            ));
        }
        Ok(())
    }

    pub fn tier(&self, tier: Tier) -> &TierSettings {
        match tier {
            Tier::Basic    => &self.basic,
            Tier::Advanced => &self.advanced,
        }
    }
}
