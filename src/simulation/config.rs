use std::ops::RangeInclusive;

use bevy::prelude::*;
use thiserror::Error;

use crate::simulation::cell::{Cell, Generation};

pub const SIZE_RANGE: RangeInclusive<usize> = 1..=15;
pub const INTERVAL_RANGE: RangeInclusive<f64> = 0.0..=1.0;

pub const DEFAULT_SIZE: usize = 5;
pub const DEFAULT_INTERVAL: f64 = 0.1;

/// How the automaton is laid out in the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionMode {
    /// A single row, replaced every generation.
    OneD,
    /// Every generation is kept and stacked along the y axis.
    #[default]
    OneDStacked,
    TwoD,
    ThreeD,
}

impl DimensionMode {
    pub fn is_elementary(self) -> bool {
        matches!(self, DimensionMode::OneD | DimensionMode::OneDStacked)
    }

    /// Number of spatial axes of the life grid, `None` for the 1D modes.
    pub fn grid_axes(self) -> Option<usize> {
        match self {
            DimensionMode::TwoD => Some(2),
            DimensionMode::ThreeD => Some(3),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DimensionMode::OneD => "1D",
            DimensionMode::OneDStacked => "1DStacked",
            DimensionMode::TwoD => "2D",
            DimensionMode::ThreeD => "3D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid pattern: found {found:?} at position {position}, only '0' and '1' are allowed")]
    InvalidPattern { position: usize, found: char },

    #[error("invalid pattern: must contain at least one cell")]
    EmptyPattern,

    #[error("invalid config: size {0} is outside 1..=15")]
    SizeOutOfRange(usize),

    #[error("invalid config: interval {0}s is outside 0..=1")]
    IntervalOutOfRange(f64),
}

/// Parses a string of '0'/'1' characters into a generation.
pub fn parse_pattern(pattern: &str) -> Result<Generation, ConfigError> {
    if pattern.is_empty() {
        return Err(ConfigError::EmptyPattern);
    }

    pattern
        .chars()
        .enumerate()
        .map(|(position, found)| match found {
            '0' | '1' => Ok(Cell::from_char(found)),
            _ => Err(ConfigError::InvalidPattern { position, found }),
        })
        .collect()
}

/// The pattern the app starts with: a single live cell with `size` dead
/// cells on either side.
pub fn default_pattern(size: usize) -> String {
    format!("{0}1{0}", "0".repeat(size))
}

/// User-adjustable parameters. Changes are picked up by the simulation
/// through Bevy change detection.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub mode: DimensionMode,
    pub size: usize,
    pub initial_pattern: String,
    /// Minimum number of seconds between two generations.
    pub interval: f64,
    /// Rendering only, the simulation never reads it.
    pub hide_dead_cells: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: DimensionMode::default(),
            size: DEFAULT_SIZE,
            initial_pattern: default_pattern(DEFAULT_SIZE),
            interval: DEFAULT_INTERVAL,
            hide_dead_cells: false,
        }
    }
}

impl SimulationConfig {
    /// Checks every range constraint and returns the parsed pattern.
    pub fn validate(&self) -> Result<Generation, ConfigError> {
        if !SIZE_RANGE.contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange(self.size));
        }
        if !self.interval.is_finite() || !INTERVAL_RANGE.contains(&self.interval) {
            return Err(ConfigError::IntervalOutOfRange(self.interval));
        }
        parse_pattern(&self.initial_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.initial_pattern, "00000100000");
        assert_eq!(config.mode, DimensionMode::OneDStacked);

        let row = config.validate().unwrap();
        assert_eq!(row.len(), 11);
        assert_eq!(row[5], Cell::Alive);
        assert_eq!(row.iter().filter(|c| c.is_alive()).count(), 1);
    }

    #[test]
    fn test_parse_pattern_rejects_foreign_characters() {
        assert_eq!(
            parse_pattern("0120"),
            Err(ConfigError::InvalidPattern {
                position: 2,
                found: '2'
            })
        );
        assert_eq!(parse_pattern(""), Err(ConfigError::EmptyPattern));
        assert_eq!(
            parse_pattern("101").unwrap(),
            vec![Cell::Alive, Cell::Dead, Cell::Alive]
        );
    }

    #[test]
    fn test_size_bounds() {
        let mut config = SimulationConfig::default();

        config.size = 0;
        assert_eq!(config.validate(), Err(ConfigError::SizeOutOfRange(0)));

        config.size = 16;
        assert_eq!(config.validate(), Err(ConfigError::SizeOutOfRange(16)));

        config.size = 15;
        assert!(config.validate().is_ok());

        config.size = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interval_bounds() {
        let mut config = SimulationConfig::default();

        config.interval = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IntervalOutOfRange(_))
        ));

        config.interval = 1.5;
        assert!(config.validate().is_err());

        config.interval = f64::NAN;
        assert!(config.validate().is_err());

        config.interval = 0.0;
        assert!(config.validate().is_ok());

        config.interval = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_axes() {
        assert_eq!(DimensionMode::OneD.grid_axes(), None);
        assert_eq!(DimensionMode::TwoD.grid_axes(), Some(2));
        assert_eq!(DimensionMode::ThreeD.grid_axes(), Some(3));
        assert!(DimensionMode::OneDStacked.is_elementary());
        assert!(!DimensionMode::ThreeD.is_elementary());
    }
}
