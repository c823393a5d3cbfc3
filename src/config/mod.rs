// ABOUTME: Engine configuration orchestrating unit, directive, glycemic, and quality settings
// ABOUTME: Loads defaults, an optional YAML file, and environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Engine Configuration Module
//!
//! Every engine component is constructed from an explicit configuration
//! value; nothing reads module-level vocabularies. `EngineConfig::global()`
//! exists for the CLI and other process-wide callers.
//!
//! # Module Structure
//!
//! - `units` - Count-unit vocabulary
//! - `directives` - Directive parser vocabulary
//! - `glycemic` - GL reduction ramps, limits, and rating tiers
//! - `scoring` - Fatty-acid and fiber quality score thresholds, day score goals
//!
//! # Loading Order
//!
//! 1. Built-in defaults
//! 2. YAML file named by `MACROLOG_CONFIG_FILE` (missing keys keep defaults)
//! 3. `MACROLOG_*` environment overrides
//! 4. Validation

pub mod directives;
pub mod error;
pub mod glycemic;
pub mod scoring;
pub mod units;

pub use directives::{CategoryKeywords, CountConversion, DirectiveVocabulary, UnitConversion};
pub use error::ConfigError;
pub use glycemic::{DailyGlTiers, GlycemicConfig, ReductionRamp};
pub use scoring::{
    DayScoreConfig, DayScoreWeights, ExerciseGoal, FattyAcidBands, FiberShareThresholds,
    PercentBand, QualityScoreConfig, SodiumGoal,
};
pub use units::UnitVocabulary;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Environment variable naming an optional YAML configuration file
pub const CONFIG_FILE_ENV: &str = "MACROLOG_CONFIG_FILE";

/// How an amount change propagates to a logged item's scaled values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescaleMode {
    /// Vitamins and minerals follow the baseline; macro, fatty-acid, and
    /// fiber fields keep their previously stored values
    #[default]
    CarryMacros,
    /// Every field is recomputed from the baseline
    Unified,
}

impl FromStr for RescaleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carry_macros" | "carry-macros" | "legacy" => Ok(Self::CarryMacros),
            "unified" => Ok(Self::Unified),
            other => Err(ConfigError::Parse(format!("unknown rescale mode '{other}'"))),
        }
    }
}

impl fmt::Display for RescaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CarryMacros => f.write_str("carry_macros"),
            Self::Unified => f.write_str("unified"),
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Count-unit vocabulary
    pub units: UnitVocabulary,
    /// Directive parser vocabulary
    pub directives: DirectiveVocabulary,
    /// Glycemic load engine settings
    pub glycemic: GlycemicConfig,
    /// Quality score thresholds
    pub quality: QualityScoreConfig,
    /// Composite day score goals and weights
    pub day_score: DayScoreConfig,
    /// Rescale behavior for logged items
    pub rescale_mode: RescaleMode,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an environment
    /// variable holds an invalid value, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim())?,
            _ => Self::default(),
        };

        let config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a YAML file; keys it omits keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading engine config file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse YAML text; keys it omits keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML for this structure
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply a single environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Glycemic load overrides
        Self::apply_env_var(
            "MACROLOG_GL_COEFFICIENT",
            &mut self.glycemic.dynamic_gl_coefficient,
        )?;
        Self::apply_env_var(
            "MACROLOG_DEFAULT_MEALS_PER_DAY",
            &mut self.glycemic.default_meals_per_day,
        )?;
        Self::apply_env_var(
            "MACROLOG_BODYMAKER_MEAL_GL_LIMIT",
            &mut self.glycemic.bodymaker_meal_gl_limit,
        )?;
        Self::apply_env_var(
            "MACROLOG_STANDARD_MEAL_GL_LIMIT",
            &mut self.glycemic.standard_meal_gl_limit,
        )?;
        Self::apply_env_var(
            "MACROLOG_HIGH_GI_THRESHOLD",
            &mut self.glycemic.high_gi_threshold,
        )?;

        // Directive overrides
        Self::apply_env_var(
            "MACROLOG_DEFAULT_SLEEP_HOURS",
            &mut self.directives.default_sleep_hours,
        )?;
        Self::apply_env_var(
            "MACROLOG_DEFAULT_RECORD_MINUTES",
            &mut self.directives.default_record_minutes,
        )?;

        // Scaling behavior
        Self::apply_env_var("MACROLOG_RESCALE_MODE", &mut self.rescale_mode)?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_glycemic()?;
        self.validate_quality()?;
        self.validate_day_score()?;
        self.validate_directives()
    }

    fn validate_glycemic(&self) -> Result<(), ConfigError> {
        let gl = &self.glycemic;
        for ramp in [gl.protein_ramp, gl.fat_ramp, gl.fiber_ramp] {
            if ramp.divisor <= 0.0 {
                return Err(ConfigError::InvalidRange(
                    "reduction ramp divisor must be > 0",
                ));
            }
            if ramp.cap < 0.0 {
                return Err(ConfigError::InvalidRange("reduction ramp cap must be >= 0"));
            }
        }
        if gl.max_total_reduction() > 100.0 {
            return Err(ConfigError::InvalidRange(
                "sum of reduction caps must be <= 100",
            ));
        }
        if gl.dynamic_gl_coefficient <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "dynamic_gl_coefficient must be > 0",
            ));
        }
        if gl.default_meals_per_day == 0 {
            return Err(ConfigError::InvalidRange(
                "default_meals_per_day must be > 0",
            ));
        }
        if gl.standard_meal_gl_limit <= 0.0 || gl.bodymaker_meal_gl_limit <= 0.0 {
            return Err(ConfigError::InvalidRange("meal GL limits must be > 0"));
        }
        let tiers = &gl.daily_tiers;
        if !(tiers.needs_improvement_ratio > tiers.fair_ratio
            && tiers.fair_ratio > tiers.good_ratio
            && tiers.good_ratio > 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "daily GL tiers must be strictly descending and positive",
            ));
        }
        Ok(())
    }

    fn validate_quality(&self) -> Result<(), ConfigError> {
        let bands = &self.quality.fatty_acid;
        for (outer, inner) in [
            (bands.saturated_outer, bands.saturated_inner),
            (bands.monounsaturated_outer, bands.monounsaturated_inner),
        ] {
            if !(outer.min <= inner.min && inner.min < inner.max && inner.max <= outer.max) {
                return Err(ConfigError::InvalidRange(
                    "fatty-acid inner band must lie within the outer band",
                ));
            }
        }
        let fiber = &self.quality.fiber_share;
        if !(fiber.needs_improvement_below > 0.0
            && fiber.needs_improvement_below < fiber.good_below)
        {
            return Err(ConfigError::InvalidRange(
                "fiber share thresholds must be positive and ascending",
            ));
        }
        Ok(())
    }

    fn validate_day_score(&self) -> Result<(), ConfigError> {
        let day = &self.day_score;
        for sodium in [day.standard_sodium, day.bodymaker_sodium] {
            if !(sodium.recommended > 0.0 && sodium.recommended <= sodium.upper_limit) {
                return Err(ConfigError::InvalidRange(
                    "sodium goals need 0 < recommended <= upper_limit",
                ));
            }
        }
        for goal in [day.standard_exercise, day.bodymaker_exercise] {
            if goal.minutes <= 0.0 || goal.sets <= 0.0 {
                return Err(ConfigError::InvalidRange("exercise goals must be positive"));
            }
        }
        if day.gl_reference_meals == 0 {
            return Err(ConfigError::InvalidRange("gl_reference_meals must be at least 1"));
        }
        let weights = day.weights;
        let sum = weights.food + weights.exercise + weights.condition;
        if weights.food < 0.0
            || weights.exercise < 0.0
            || weights.condition < 0.0
            || (sum - 1.0).abs() > 1e-6
        {
            return Err(ConfigError::InvalidRange(
                "day score weights must be non-negative and sum to 1",
            ));
        }
        Ok(())
    }

    fn validate_directives(&self) -> Result<(), ConfigError> {
        let vocab = &self.directives;
        if vocab.tag_open.is_empty() || vocab.tag_close.is_empty() {
            return Err(ConfigError::MissingField("directives.tag_open/tag_close"));
        }
        if vocab.bullet_markers.iter().all(String::is_empty) {
            return Err(ConfigError::MissingField("directives.bullet_markers"));
        }
        if vocab.meal_separators.is_empty() {
            return Err(ConfigError::MissingField("directives.meal_separators"));
        }
        if vocab.default_sleep_hours < 0.0 {
            return Err(ConfigError::InvalidRange("default_sleep_hours must be >= 0"));
        }
        if vocab.default_record_minutes >= 24 * 60 {
            return Err(ConfigError::InvalidRange(
                "default_record_minutes must be within one day",
            ));
        }
        if vocab.amount_units.iter().all(String::is_empty) {
            return Err(ConfigError::MissingField("directives.amount_units"));
        }
        if vocab
            .unit_conversions
            .iter()
            .any(|c| c.factor <= 0.0 || c.from.is_empty() || c.to.is_empty())
        {
            return Err(ConfigError::InvalidRange(
                "unit conversions need factor > 0 and both units",
            ));
        }
        if vocab
            .count_conversions
            .iter()
            .any(|c| c.grams_per_unit <= 0.0 || c.unit.is_empty())
        {
            return Err(ConfigError::InvalidRange(
                "count conversions need grams_per_unit > 0 and a unit",
            ));
        }
        Ok(())
    }
}
